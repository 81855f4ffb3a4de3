/*
[INPUT]:  Flow submodules
[OUTPUT]: Public signup flow surface
[POS]:    Flow layer - module wiring
[UPDATE]: When public flow types change
*/

pub mod controller;
pub mod error;
pub mod form;
pub mod state;

pub use controller::{FlowConfig, SignupFlowController};
pub use error::FlowError;
pub use form::SignupForm;
pub use state::{Effect, FlowEvent, FlowState, transition};
