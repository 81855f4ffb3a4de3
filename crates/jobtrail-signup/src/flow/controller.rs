/*
[INPUT]:  Form submissions and payment actions from a front end
[OUTPUT]: State transitions, API calls, and store updates for one flow
[POS]:    Flow layer - orchestrates the machine, the API, and the gateway
[UPDATE]: When operations, effects, or recovery paths change
*/

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use jobtrail_adapter::{
    ApiClient, AuthSession, BillingCycle, CreateOrderRequest, CustomerInfo, PaymentConfirmation,
    PaymentGateway, PaymentOrder, SessionStore, VerifyPaymentRequest,
};

use crate::navigate::{DeferredNavigation, Navigator};
use crate::store::SharedStore;

use super::error::FlowError;
use super::form::SignupForm;
use super::state::{Effect, FlowEvent, FlowState, transition};

const MSG_PLAN_LOAD_FAILED: &str = "Unable to load plan details. Please try again.";
const MSG_REGISTRATION_FALLBACK: &str = "Registration failed. Please try again.";
const MSG_ORDER_FALLBACK: &str =
    "Could not set up your payment. You can retry or continue with the free plan.";
const MSG_PAYMENT_FALLBACK: &str =
    "Payment failed. Please try again or continue with the free plan.";
const MSG_PAYMENT_DATA_MISSING: &str = "Payment data not available";

/// Destination and timing of the post-signup redirect
#[derive(Debug, Clone)]
pub struct FlowConfig {
    pub dashboard_route: String,
    pub navigation_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            dashboard_route: "/dashboard".to_string(),
            navigation_delay: Duration::from_millis(1500),
        }
    }
}

/// Drives one signup-then-optional-checkout interaction.
///
/// Operations are logically sequential within a flow; the UI busy flag in
/// the store serializes user-initiated transitions while a call is in
/// flight. All collaborators are injected, none are ambient.
pub struct SignupFlowController {
    client: ApiClient,
    gateway: Arc<dyn PaymentGateway>,
    sessions: SessionStore,
    store: SharedStore,
    navigator: Arc<dyn Navigator>,
    config: FlowConfig,
    state: FlowState,
    payment_order: Option<PaymentOrder>,
    customer: Option<CustomerInfo>,
    pending_confirmation: Option<PaymentConfirmation>,
    pending_navigation: Option<DeferredNavigation>,
}

impl SignupFlowController {
    pub fn new(
        client: ApiClient,
        gateway: Arc<dyn PaymentGateway>,
        sessions: SessionStore,
        store: SharedStore,
        navigator: Arc<dyn Navigator>,
        config: FlowConfig,
    ) -> Self {
        Self {
            client,
            gateway,
            sessions,
            store,
            navigator,
            config,
            state: FlowState::CollectingAccountInfo,
            payment_order: None,
            customer: None,
            pending_confirmation: None,
            pending_navigation: None,
        }
    }

    /// Seed the plan selection from navigation context
    pub fn select_plan(&mut self, plan_id: Option<String>, billing_cycle: BillingCycle) {
        self.store
            .write()
            .unwrap()
            .plans
            .select(plan_id, billing_cycle);
    }

    /// Fetch metadata for the selected plan, if any.
    ///
    /// Without a plan id this is a no-op: the flow proceeds on the
    /// free-tier assumption. A failed lookup is recoverable and leaves
    /// that assumption in effect, so the user is never blocked here.
    pub async fn load_plan(&mut self) -> Result<(), FlowError> {
        let Some(plan_id) = self.store.read().unwrap().plans.selected_id.clone() else {
            return Ok(());
        };

        self.begin_operation();
        let result = self.client.get_plan(&plan_id).await;
        self.finish_operation();

        match result {
            Ok(plan) => {
                info!(plan_id = %plan_id, plan_name = %plan.name, free = plan.is_free(), "plan loaded");
                self.store.write().unwrap().plans.plan_loaded(plan);
                Ok(())
            }
            Err(err) => {
                warn!(plan_id = %plan_id, error = %err, "plan lookup failed");
                let error = FlowError::PlanLoad(MSG_PLAN_LOAD_FAILED.to_string());
                let mut store = self.store.write().unwrap();
                store.plans.load_failed(MSG_PLAN_LOAD_FAILED);
                store.ui.show_error(error.message());
                Err(error)
            }
        }
    }

    /// Validate and submit the signup form.
    ///
    /// On success the issued tokens are persisted before anything else
    /// happens; a paid selection then moves to the payment step and
    /// immediately creates an order under that fresh token.
    pub async fn submit_account_info(&mut self, form: &SignupForm) -> Result<(), FlowError> {
        if self.state != FlowState::CollectingAccountInfo {
            return Err(FlowError::Precondition(
                "registration has already completed".to_string(),
            ));
        }

        if let Err(error) = form.validate() {
            // Local failure: no network call was made.
            self.store.write().unwrap().ui.show_error(error.message());
            return Err(error);
        }

        self.begin_operation();
        self.store.write().unwrap().analytics.signup_started();
        let result = self.client.register(form.registration_request()).await;

        let outcome = match result {
            Ok(response) => {
                let session = AuthSession {
                    access_token: response.token,
                    refresh_token: response.refresh_token,
                };
                if let Err(err) = self.sessions.persist(session.clone()) {
                    // The in-memory session is still set; the flow goes on.
                    warn!(error = %err, "failed to persist session to disk");
                }
                self.store.write().unwrap().auth.signed_in(session);
                self.customer = Some(form.customer());

                let paid_plan = self.store.read().unwrap().plans.is_paid();
                self.dispatch(FlowEvent::RegistrationSucceeded { paid_plan })
                    .await;

                match &self.state {
                    FlowState::Failed(reason) => Err(FlowError::OrderCreation(reason.clone())),
                    _ => Ok(()),
                }
            }
            Err(err) => {
                let message = err
                    .server_message()
                    .unwrap_or(MSG_REGISTRATION_FALLBACK)
                    .to_string();
                warn!(error = %err, "registration failed");
                self.dispatch(FlowEvent::RegistrationFailed {
                    message: message.clone(),
                })
                .await;
                Err(FlowError::Registration(message))
            }
        };

        self.finish_operation();
        outcome
    }

    /// Run the gateway checkout for the stored order and verify the
    /// confirmation server-side.
    pub async fn pay_now(&mut self) -> Result<(), FlowError> {
        if self.state != FlowState::AwaitingPayment {
            return Err(FlowError::Precondition(
                "no payment is awaited in the current state".to_string(),
            ));
        }
        let Some(order) = self.payment_order.clone() else {
            let error = FlowError::Precondition(MSG_PAYMENT_DATA_MISSING.to_string());
            self.store.write().unwrap().ui.show_error(error.message());
            return Err(error);
        };
        let Some(customer) = self.customer.clone() else {
            let error = FlowError::Precondition(MSG_PAYMENT_DATA_MISSING.to_string());
            self.store.write().unwrap().ui.show_error(error.message());
            return Err(error);
        };

        self.begin_operation();
        debug!(order_id = %order.order_id, amount = order.amount, "opening gateway checkout");
        let checkout = self.gateway.process_payment(&order, &customer).await;

        let event = match checkout {
            Ok(response) => match response.complete() {
                Some(confirmation) => {
                    self.pending_confirmation = Some(confirmation);
                    FlowEvent::PaymentConfirmed
                }
                None => {
                    warn!(order_id = %order.order_id, "gateway returned incomplete confirmation");
                    FlowEvent::PaymentInterrupted
                }
            },
            Err(err) => {
                warn!(order_id = %order.order_id, error = %err, "gateway checkout failed");
                let message = match &err {
                    jobtrail_adapter::ApiError::Gateway(message) if !message.is_empty() => {
                        message.clone()
                    }
                    _ => MSG_PAYMENT_FALLBACK.to_string(),
                };
                FlowEvent::GatewayFailed { message }
            }
        };

        let attempted = event.clone();
        self.dispatch(event).await;
        self.finish_operation();

        match attempted {
            FlowEvent::PaymentConfirmed => match &self.state {
                FlowState::Succeeded => Ok(()),
                _ => Err(FlowError::Verification(
                    super::state::MSG_VERIFICATION_FAILED.to_string(),
                )),
            },
            FlowEvent::PaymentInterrupted => Err(FlowError::IncompletePayment(
                super::state::MSG_PAYMENT_INTERRUPTED.to_string(),
            )),
            FlowEvent::GatewayFailed { message } => Err(FlowError::Gateway(message)),
            _ => Ok(()),
        }
    }

    /// Keep the account on the free tier and finish the flow. Always
    /// available from the payment step, whatever errors came before.
    pub async fn skip_payment(&mut self) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::AwaitingPayment | FlowState::Failed(_)) {
            return Err(FlowError::Precondition(
                "there is no payment step to skip".to_string(),
            ));
        }
        self.begin_operation();
        self.dispatch(FlowEvent::PaymentSkipped).await;
        self.finish_operation();
        Ok(())
    }

    /// Re-issue order creation after it failed post-registration
    pub async fn retry_order(&mut self) -> Result<(), FlowError> {
        if !matches!(self.state, FlowState::Failed(_)) {
            return Err(FlowError::Precondition(
                "order creation has not failed".to_string(),
            ));
        }
        self.begin_operation();
        self.dispatch(FlowEvent::OrderRetried).await;
        self.finish_operation();

        match &self.state {
            FlowState::Failed(reason) => Err(FlowError::OrderCreation(reason.clone())),
            _ => Ok(()),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn payment_order(&self) -> Option<&PaymentOrder> {
        self.payment_order.as_ref()
    }

    pub fn store(&self) -> SharedStore {
        Arc::clone(&self.store)
    }

    /// The redirect scheduled on success, if any
    pub fn pending_navigation(&self) -> Option<&DeferredNavigation> {
        self.pending_navigation.as_ref()
    }

    /// Hand over the scheduled redirect, e.g. to await or cancel it
    pub fn take_pending_navigation(&mut self) -> Option<DeferredNavigation> {
        self.pending_navigation.take()
    }

    fn begin_operation(&self) {
        let mut store = self.store.write().unwrap();
        store.ui.clear_messages();
        store.ui.set_busy(true);
    }

    fn finish_operation(&self) {
        self.store.write().unwrap().ui.set_busy(false);
    }

    /// Feed an event through the pure machine and execute the effects,
    /// queueing any follow-up events until the flow settles.
    async fn dispatch(&mut self, event: FlowEvent) {
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let was_terminal = self.state == FlowState::Succeeded;
            let (next, effects) = transition(&self.state, event.clone());
            debug!(from = ?self.state, to = ?next, event = ?event, "flow transition");
            self.state = next;

            if !was_terminal && self.state == FlowState::Succeeded {
                let mut store = self.store.write().unwrap();
                store.analytics.signup_completed();
                match event {
                    FlowEvent::VerificationSucceeded => store.analytics.payment_succeeded(),
                    FlowEvent::PaymentSkipped => store.analytics.payment_skipped(),
                    _ => {}
                }
            }

            for effect in effects {
                if let Some(follow_up) = self.run_effect(effect).await {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    async fn run_effect(&mut self, effect: Effect) -> Option<FlowEvent> {
        match effect {
            Effect::CreateOrder => Some(self.create_order().await),
            Effect::VerifyPayment => Some(self.verify_payment().await),
            Effect::ShowError(message) => {
                self.store.write().unwrap().ui.show_error(message);
                None
            }
            Effect::ShowSuccess(message) => {
                self.store.write().unwrap().ui.show_success(message);
                None
            }
            Effect::ScheduleNavigation => {
                if let Some(previous) = self.pending_navigation.take() {
                    previous.cancel();
                }
                info!(route = %self.config.dashboard_route, "scheduling post-signup navigation");
                self.pending_navigation = Some(DeferredNavigation::schedule(
                    Arc::clone(&self.navigator),
                    &self.config.dashboard_route,
                    self.config.navigation_delay,
                ));
                None
            }
        }
    }

    async fn create_order(&mut self) -> FlowEvent {
        let (plan_id, billing_type) = {
            let store = self.store.read().unwrap();
            (
                store.plans.selected_id.clone(),
                store.plans.billing_cycle,
            )
        };
        let Some(plan_id) = plan_id else {
            return FlowEvent::OrderCreationFailed {
                message: MSG_ORDER_FALLBACK.to_string(),
            };
        };
        // The token stored moments ago by this registration attempt.
        let Some(token) = self.sessions.access_token() else {
            return FlowEvent::OrderCreationFailed {
                message: MSG_ORDER_FALLBACK.to_string(),
            };
        };

        let request = CreateOrderRequest {
            plan_id,
            billing_type,
        };
        match self.client.create_order(&token, request).await {
            Ok(order) => {
                self.payment_order = Some(order);
                FlowEvent::OrderCreated
            }
            Err(err) => {
                warn!(error = %err, "order creation failed");
                let message = err.server_message().unwrap_or(MSG_ORDER_FALLBACK).to_string();
                FlowEvent::OrderCreationFailed { message }
            }
        }
    }

    async fn verify_payment(&mut self) -> FlowEvent {
        let Some(confirmation) = self.pending_confirmation.take() else {
            return FlowEvent::VerificationFailed;
        };
        let Some(order) = self.payment_order.as_ref() else {
            return FlowEvent::VerificationFailed;
        };
        let Some(token) = self.sessions.access_token() else {
            return FlowEvent::VerificationFailed;
        };

        let request = VerifyPaymentRequest::new(confirmation, order.transaction_id.clone());
        match self.client.verify_payment(&token, request).await {
            Ok(_) => FlowEvent::VerificationSucceeded,
            Err(err) => {
                warn!(error = %err, "payment verification failed");
                FlowEvent::VerificationFailed
            }
        }
    }
}
