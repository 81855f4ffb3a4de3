/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{PaymentOrder, Plan};

/// Envelope of `GET /plans/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResponse {
    pub plan: Plan,
}

/// Response of `POST /auth/register`. `refreshToken` is optional on the
/// wire; when absent only the access token is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    #[serde(rename = "refreshToken", default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

/// Order payload nested inside the order-creation response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDetails {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

/// Response of `POST /payments/create-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order: OrderDetails,
    pub transaction: String,
}

impl CreateOrderResponse {
    /// Flatten into the [`PaymentOrder`] the gateway consumes.
    pub fn into_payment_order(self) -> PaymentOrder {
        PaymentOrder {
            order_id: self.order.id,
            amount: self.order.amount,
            currency: self.order.currency,
            transaction_id: self.transaction,
        }
    }
}

/// Response of `POST /payments/verify`. Only the status is consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_response_without_refresh_token() {
        let parsed: RegisterResponse =
            serde_json::from_str(r#"{"token": "T1"}"#).expect("parse register response");
        assert_eq!(parsed.token, "T1");
        assert!(parsed.refresh_token.is_none());
    }

    #[test]
    fn test_create_order_response_flattens() {
        let parsed: CreateOrderResponse = serde_json::from_str(
            r#"{"order": {"id": "order_1", "amount": 99900, "currency": "INR"}, "transaction": "tx_1"}"#,
        )
        .expect("parse order response");
        let order = parsed.into_payment_order();
        assert_eq!(order.order_id, "order_1");
        assert_eq!(order.amount, 99900);
        assert_eq!(order.currency, "INR");
        assert_eq!(order.transaction_id, "tx_1");
    }
}
