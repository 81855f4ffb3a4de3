/*
[INPUT]:  Failure conditions from validation, the API, and the gateway
[OUTPUT]: The user-facing error taxonomy of the signup flow
[POS]:    Flow layer - recoverable error classification
[UPDATE]: When adding new failure classes or changing user copy
*/

use thiserror::Error;

/// Everything that can go wrong inside the signup flow.
///
/// Every variant is recoverable: the carried string is the user-visible
/// message for the single error slot, and the flow always leaves a way
/// forward (retry, or fall back to the free tier). Nothing here should
/// ever terminate the process.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// Local form validation failed; no network call was made
    #[error("{0}")]
    Validation(String),

    /// Plan metadata could not be loaded; the free-tier assumption stays
    /// in effect so the user is not blocked
    #[error("{0}")]
    PlanLoad(String),

    /// Registration rejected; carries the server message when one exists
    #[error("{0}")]
    Registration(String),

    /// Order creation failed after registration succeeded
    #[error("{0}")]
    OrderCreation(String),

    /// The gateway raised (user cancellation, SDK failure)
    #[error("{0}")]
    Gateway(String),

    /// The gateway returned without all three confirmation fields
    #[error("{0}")]
    IncompletePayment(String),

    /// The backend rejected the gateway confirmation
    #[error("{0}")]
    Verification(String),

    /// An operation was invoked in a state that cannot serve it
    #[error("{0}")]
    Precondition(String),
}

impl FlowError {
    /// The message shown in the UI error slot
    pub fn message(&self) -> &str {
        match self {
            FlowError::Validation(m)
            | FlowError::PlanLoad(m)
            | FlowError::Registration(m)
            | FlowError::OrderCreation(m)
            | FlowError::Gateway(m)
            | FlowError::IncompletePayment(m)
            | FlowError::Verification(m)
            | FlowError::Precondition(m) => m,
        }
    }
}
