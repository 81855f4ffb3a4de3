/*
[INPUT]:  CLI arguments, YAML configuration file
[OUTPUT]: A signup flow driven to completion from the terminal
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use jobtrail_adapter::{ApiClient, BillingCycle, SessionStore};
use jobtrail_signup::cli::{PromptGateway, run_signup};
use jobtrail_signup::config::{ApiConfig, AppConfig};
use jobtrail_signup::{Navigator, SignupFlowController, store};

const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Parser, Debug)]
#[command(name = "jobtrail-signup", version, about = "jobtrail account signup flow")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    /// Plan preselected by the pricing page, if any
    #[arg(long = "plan-id", value_name = "ID")]
    plan_id: Option<String>,
    #[arg(long = "billing", value_name = "CYCLE", default_value = "monthly")]
    billing: BillingCycle,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

/// Prints the redirect a browser shell would perform
struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "navigating");
        println!("→ {route}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = load_config(&args)?;
    let base_url = args.api_url.clone().unwrap_or_else(|| config.api.base_url.clone());
    info!(base_url = %base_url, plan_id = ?args.plan_id, "starting signup flow");

    let client = ApiClient::new(&base_url).context("build API client")?;
    let sessions = session_store(&config);
    let store = store::shared();

    let mut controller = SignupFlowController::new(
        client,
        Arc::new(PromptGateway),
        sessions,
        store,
        Arc::new(ConsoleNavigator),
        config.flow_config(),
    );

    controller.select_plan(args.plan_id.clone(), args.billing);
    if let Err(err) = controller.load_plan().await {
        // Recoverable: the flow continues on the free-tier assumption.
        warn!(error = %err, "continuing without plan metadata");
    }

    run_signup(&mut controller).await
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(args: &Cli) -> Result<AppConfig> {
    match &args.config_path {
        Some(path) => {
            let path_str = path.to_str().context("config path must be valid utf-8")?;
            AppConfig::from_file(path_str).context("load config")
        }
        None => Ok(AppConfig {
            api: ApiConfig {
                base_url: args.api_url.clone().unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            },
            navigation: Default::default(),
            session_dir: None,
        }),
    }
}

fn session_store(config: &AppConfig) -> SessionStore {
    match &config.session_dir {
        Some(dir) => SessionStore::new_in_dir(dir),
        None => dirs::data_dir()
            .map(|dir| SessionStore::new_in_dir(dir.join("jobtrail")))
            .unwrap_or_default(),
    }
}
