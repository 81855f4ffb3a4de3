/*
[INPUT]:  The current flow state and an event from an operation boundary
[OUTPUT]: The next state plus effects for the controller to execute
[POS]:    Flow layer - pure state machine, no I/O and no rendering
[UPDATE]: When transitions, effects, or user copy change
*/

/// User-facing copy produced by transitions. One error at a time; the
/// controller routes these into the UI slice.
pub const MSG_ACCOUNT_CREATED: &str = "Account created successfully!";
pub const MSG_FREE_PLAN_FALLBACK: &str = "Account created with free plan. You can upgrade later.";
pub const MSG_PAYMENT_SUCCESS: &str = "Payment successful! Your account has been set up.";
pub const MSG_VERIFICATION_FAILED: &str =
    "Payment verification failed. You can try again or continue with the free plan.";
pub const MSG_PAYMENT_INTERRUPTED: &str =
    "Payment process was interrupted. You can try again or continue with the free plan.";

/// Where the flow currently stands.
///
/// `Succeeded` is terminal. `Failed` is not: it marks order creation
/// failing after registration already went through, and offers an order
/// retry or the free-tier fallback. Nothing ever returns to
/// `CollectingAccountInfo` once registration succeeded, because
/// registration is not safe to repeat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowState {
    CollectingAccountInfo,
    AwaitingPayment,
    Succeeded,
    Failed(String),
}

/// Facts established at operation boundaries, fed into [`transition`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    RegistrationSucceeded { paid_plan: bool },
    RegistrationFailed { message: String },
    OrderCreated,
    OrderCreationFailed { message: String },
    /// Gateway returned a complete confirmation
    PaymentConfirmed,
    /// Gateway returned with confirmation fields missing
    PaymentInterrupted,
    GatewayFailed { message: String },
    VerificationSucceeded,
    VerificationFailed,
    PaymentSkipped,
    OrderRetried,
}

/// What the controller must do after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue order creation under the freshly stored token
    CreateOrder,
    /// Send the pending confirmation to server-side verification
    VerifyPayment,
    ShowError(String),
    ShowSuccess(String),
    /// Schedule the deferred dashboard redirect
    ScheduleNavigation,
}

/// Pure transition function: `(state, event) -> (state, effects)`.
///
/// Events that make no sense in the current state leave it unchanged with
/// no effects; in particular `Succeeded` absorbs everything.
pub fn transition(state: &FlowState, event: FlowEvent) -> (FlowState, Vec<Effect>) {
    use FlowEvent as E;
    use FlowState as S;

    match (state, event) {
        (S::CollectingAccountInfo, E::RegistrationSucceeded { paid_plan: false }) => (
            S::Succeeded,
            vec![
                Effect::ShowSuccess(MSG_ACCOUNT_CREATED.to_string()),
                Effect::ScheduleNavigation,
            ],
        ),
        (S::CollectingAccountInfo, E::RegistrationSucceeded { paid_plan: true }) => {
            (S::AwaitingPayment, vec![Effect::CreateOrder])
        }
        (S::CollectingAccountInfo, E::RegistrationFailed { message }) => {
            (S::CollectingAccountInfo, vec![Effect::ShowError(message)])
        }

        (S::AwaitingPayment, E::OrderCreated) => (S::AwaitingPayment, vec![]),
        (S::AwaitingPayment, E::OrderCreationFailed { message }) => (
            S::Failed(message.clone()),
            vec![Effect::ShowError(message)],
        ),
        (S::AwaitingPayment, E::PaymentConfirmed) => {
            (S::AwaitingPayment, vec![Effect::VerifyPayment])
        }
        (S::AwaitingPayment, E::PaymentInterrupted) => (
            S::AwaitingPayment,
            vec![Effect::ShowError(MSG_PAYMENT_INTERRUPTED.to_string())],
        ),
        (S::AwaitingPayment, E::GatewayFailed { message }) => {
            (S::AwaitingPayment, vec![Effect::ShowError(message)])
        }
        (S::AwaitingPayment, E::VerificationSucceeded) => (
            S::Succeeded,
            vec![
                Effect::ShowSuccess(MSG_PAYMENT_SUCCESS.to_string()),
                Effect::ScheduleNavigation,
            ],
        ),
        (S::AwaitingPayment, E::VerificationFailed) => (
            S::AwaitingPayment,
            vec![Effect::ShowError(MSG_VERIFICATION_FAILED.to_string())],
        ),

        (S::AwaitingPayment | S::Failed(_), E::PaymentSkipped) => (
            S::Succeeded,
            vec![
                Effect::ShowSuccess(MSG_FREE_PLAN_FALLBACK.to_string()),
                Effect::ScheduleNavigation,
            ],
        ),
        (S::Failed(_), E::OrderRetried) => (S::AwaitingPayment, vec![Effect::CreateOrder]),

        // Everything else is a no-op in the current state.
        (state, _) => (state.clone(), vec![]),
    }
}
