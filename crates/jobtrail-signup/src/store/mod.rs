/*
[INPUT]:  Feature slice modules
[OUTPUT]: The application-state container composed at construction time
[POS]:    State layer - replaces ambient global store wiring
[UPDATE]: When adding a feature domain slice
*/

pub mod analytics;
pub mod auth;
pub mod contacts;
pub mod jobs;
pub mod plans;
pub mod tasks;
pub mod ui;

use std::sync::{Arc, RwLock};

pub use analytics::AnalyticsState;
pub use auth::{AuthState, AuthStatus};
pub use contacts::{Contact, ContactsState};
pub use jobs::{Job, JobStage, JobsState};
pub use plans::PlansState;
pub use tasks::{Task, TasksState};
pub use ui::UiState;

use serde::{Deserialize, Serialize};

/// Lifecycle of a remotely loaded collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// The application state container.
///
/// Constructed once at process start and injected where needed; each
/// feature domain owns its typed state and transition functions, composed
/// here rather than wired through a module-level global.
#[derive(Debug, Default)]
pub struct AppStore {
    pub auth: AuthState,
    pub jobs: JobsState,
    pub tasks: TasksState,
    pub contacts: ContactsState,
    pub plans: PlansState,
    pub analytics: AnalyticsState,
    pub ui: UiState,
}

impl AppStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Handle shared between the controller and any front end
pub type SharedStore = Arc<RwLock<AppStore>>;

/// Build the container for injection
pub fn shared() -> SharedStore {
    Arc::new(RwLock::new(AppStore::new()))
}
