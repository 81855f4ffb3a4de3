/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::BillingCycle;
use super::models::PaymentConfirmation;

/// Body of `POST /auth/register`. The password confirmation is validated
/// locally and never transmitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /payments/create-order`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "planId")]
    pub plan_id: String,
    #[serde(rename = "billingType")]
    pub billing_type: BillingCycle,
}

/// Body of `POST /payments/verify`. Field names follow the gateway's wire
/// convention; the backend matches the signature against them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    pub razorpay_order_id: String,
    pub razorpay_payment_id: String,
    pub razorpay_signature: String,
    #[serde(rename = "transactionId")]
    pub transaction_id: String,
}

impl VerifyPaymentRequest {
    pub fn new(confirmation: PaymentConfirmation, transaction_id: String) -> Self {
        Self {
            razorpay_order_id: confirmation.gateway_order_id,
            razorpay_payment_id: confirmation.gateway_payment_id,
            razorpay_signature: confirmation.gateway_signature,
            transaction_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_order_request_wire_names() {
        let req = CreateOrderRequest {
            plan_id: "plan_pro".to_string(),
            billing_type: BillingCycle::Yearly,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["planId"], "plan_pro");
        assert_eq!(json["billingType"], "yearly");
    }

    #[test]
    fn test_verify_request_from_confirmation() {
        let confirmation = PaymentConfirmation {
            gateway_order_id: "order_1".to_string(),
            gateway_payment_id: "pay_1".to_string(),
            gateway_signature: "sig_1".to_string(),
        };
        let req = VerifyPaymentRequest::new(confirmation, "tx_1".to_string());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["razorpay_order_id"], "order_1");
        assert_eq!(json["razorpay_payment_id"], "pay_1");
        assert_eq!(json["razorpay_signature"], "sig_1");
        assert_eq!(json["transactionId"], "tx_1");
    }
}
