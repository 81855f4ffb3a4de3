/*
[INPUT]:  YAML configuration file
[OUTPUT]: Parsed application configuration
[POS]:    Configuration layer - flow setup
[UPDATE]: When adding new configuration options
*/

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::flow::FlowConfig;

/// Top-level configuration for the signup flow
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Remote API settings
    pub api: ApiConfig,
    /// Post-signup navigation settings
    #[serde(default)]
    pub navigation: NavigationConfig,
    /// Directory holding the persisted session file; defaults to the
    /// platform data directory
    #[serde(default)]
    pub session_dir: Option<PathBuf>,
}

/// Remote API configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the jobtrail backend
    pub base_url: String,
}

/// Deferred-navigation configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Route reached after a successful signup
    #[serde(default = "default_dashboard_route")]
    pub dashboard_route: String,
    /// Delay before the redirect fires, in milliseconds
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            dashboard_route: default_dashboard_route(),
            delay_ms: default_delay_ms(),
        }
    }
}

fn default_dashboard_route() -> String {
    "/dashboard".to_string()
}

fn default_delay_ms() -> u64 {
    1500
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    pub fn flow_config(&self) -> FlowConfig {
        FlowConfig {
            dashboard_route: self.navigation.dashboard_route.clone(),
            navigation_delay: Duration::from_millis(self.navigation.delay_ms),
        }
    }
}
