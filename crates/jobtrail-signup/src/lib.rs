/*
[INPUT]:  Public API exports for jobtrail-signup crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod cli;
pub mod config;
pub mod flow;
pub mod navigate;
pub mod store;

// Re-export main types for convenience
pub use config::AppConfig;
pub use flow::{FlowConfig, FlowError, FlowState, SignupFlowController, SignupForm};
pub use navigate::{DeferredNavigation, Navigator};
pub use store::{AppStore, SharedStore};
