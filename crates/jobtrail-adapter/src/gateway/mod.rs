/*
[INPUT]:  A payment order and the paying customer's contact details
[OUTPUT]: A gateway response proving a charge attempt (possibly partial)
[POS]:    Gateway layer - third-party checkout abstraction
[UPDATE]: When adding new gateway integrations or changing the contract
*/

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::http::{ApiError, Result};
use crate::types::{GatewayResponse, PaymentOrder};

/// Customer details handed to the checkout for prefill
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerInfo {
    pub name: String,
    pub email: String,
}

/// Trait for payment gateway integrations
///
/// Implement this for a concrete checkout SDK. The call suspends until the
/// checkout finishes; a user abandoning it surfaces either as an
/// [`ApiError::Gateway`] or as a [`GatewayResponse`] with missing fields.
/// The trait is async because real checkouts block on user interaction.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Run the checkout for `order`, prefilled with `customer`
    async fn process_payment(
        &self,
        order: &PaymentOrder,
        customer: &CustomerInfo,
    ) -> Result<GatewayResponse>;
}

#[derive(Debug, Clone)]
enum MockOutcome {
    /// Confirm with identifiers derived from the order
    Confirm,
    /// Return this exact response (possibly incomplete)
    Respond(GatewayResponse),
    /// Raise a gateway error with this message
    Fail(String),
}

/// Mock payment gateway for testing
#[derive(Debug, Clone)]
pub struct MockPaymentGateway {
    outcome: MockOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockPaymentGateway {
    /// A gateway that confirms every charge with synthetic identifiers
    pub fn confirming() -> Self {
        Self::with_outcome(MockOutcome::Confirm)
    }

    /// A gateway that returns a predetermined response
    pub fn responding(response: GatewayResponse) -> Self {
        Self::with_outcome(MockOutcome::Respond(response))
    }

    /// A gateway whose checkout never completes the signature handshake,
    /// as when the user closes the window mid-payment
    pub fn interrupting() -> Self {
        Self::with_outcome(MockOutcome::Respond(GatewayResponse {
            order_id: Some("order_interrupted".to_string()),
            payment_id: Some("pay_interrupted".to_string()),
            signature: None,
        }))
    }

    /// A gateway that raises an error with the given message
    pub fn failing(message: &str) -> Self {
        Self::with_outcome(MockOutcome::Fail(message.to_string()))
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of checkouts this mock has run
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn process_payment(
        &self,
        order: &PaymentOrder,
        _customer: &CustomerInfo,
    ) -> Result<GatewayResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            MockOutcome::Confirm => Ok(GatewayResponse {
                order_id: Some(order.order_id.clone()),
                payment_id: Some(format!("pay_{}", uuid::Uuid::new_v4().simple())),
                signature: Some(format!("sig_{}", uuid::Uuid::new_v4().simple())),
            }),
            MockOutcome::Respond(response) => Ok(response.clone()),
            MockOutcome::Fail(message) => Err(ApiError::Gateway(message.clone())),
        }
    }
}
