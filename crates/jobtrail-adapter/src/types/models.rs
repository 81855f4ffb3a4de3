/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust domain models with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::BillingCycle;

/// Canonical name of the free tier. The comparison is case-sensitive:
/// "Free" is a paid plan as far as this client is concerned.
pub const FREE_PLAN_NAME: &str = "free";

/// Per-cycle price of a plan, in major currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanPrice {
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub yearly: Decimal,
}

/// Subscription plan metadata as returned by `GET /plans/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: PlanPrice,
}

impl Plan {
    /// A plan is free iff its canonical name equals "free", regardless of
    /// what the price fields say.
    pub fn is_free(&self) -> bool {
        self.name == FREE_PLAN_NAME
    }

    pub fn price_for(&self, cycle: BillingCycle) -> Decimal {
        match cycle {
            BillingCycle::Monthly => self.price.monthly,
            BillingCycle::Yearly => self.price.yearly,
        }
    }
}

/// Order created by the backend ahead of a gateway checkout.
///
/// `amount` is in minor units (paise for INR). Consumed exactly once by
/// the payment gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOrder {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub transaction_id: String,
}

/// Raw result of a gateway checkout. Any field may be absent when the
/// checkout was interrupted (closed window, network drop mid-handshake).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "razorpay_order_id")]
    pub order_id: Option<String>,
    #[serde(rename = "razorpay_payment_id")]
    pub payment_id: Option<String>,
    #[serde(rename = "razorpay_signature")]
    pub signature: Option<String>,
}

impl GatewayResponse {
    /// Upgrade to a [`PaymentConfirmation`] iff all three identifiers are
    /// present. An incomplete response must never reach verification.
    pub fn complete(&self) -> Option<PaymentConfirmation> {
        match (&self.order_id, &self.payment_id, &self.signature) {
            (Some(order_id), Some(payment_id), Some(signature)) => Some(PaymentConfirmation {
                gateway_order_id: order_id.clone(),
                gateway_payment_id: payment_id.clone(),
                gateway_signature: signature.clone(),
            }),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.order_id.is_some() && self.payment_id.is_some() && self.signature.is_some()
    }
}

/// Proof of a charge attempt, forwarded verbatim to server-side
/// verification before being trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub gateway_order_id: String,
    pub gateway_payment_id: String,
    pub gateway_signature: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(name: &str) -> Plan {
        Plan {
            name: name.to_string(),
            price: PlanPrice {
                monthly: Decimal::new(999, 0),
                yearly: Decimal::new(9990, 0),
            },
        }
    }

    #[test]
    fn test_free_plan_match_is_case_sensitive() {
        assert!(plan("free").is_free());
        assert!(!plan("Free").is_free());
        assert!(!plan("pro").is_free());
    }

    #[test]
    fn test_free_plan_ignores_price_fields() {
        // A plan named "free" with non-zero prices is still free.
        assert!(plan("free").price.monthly > Decimal::ZERO);
        assert!(plan("free").is_free());
    }

    #[test]
    fn test_price_for_cycle() {
        let p = plan("pro");
        assert_eq!(p.price_for(BillingCycle::Monthly), Decimal::new(999, 0));
        assert_eq!(p.price_for(BillingCycle::Yearly), Decimal::new(9990, 0));
    }

    #[test]
    fn test_gateway_response_complete() {
        let full = GatewayResponse {
            order_id: Some("order_1".to_string()),
            payment_id: Some("pay_1".to_string()),
            signature: Some("sig_1".to_string()),
        };
        let confirmation = full.complete().expect("complete response");
        assert_eq!(confirmation.gateway_order_id, "order_1");
        assert_eq!(confirmation.gateway_payment_id, "pay_1");
        assert_eq!(confirmation.gateway_signature, "sig_1");
    }

    #[test]
    fn test_gateway_response_incomplete_when_any_field_missing() {
        let missing_signature = GatewayResponse {
            order_id: Some("order_1".to_string()),
            payment_id: Some("pay_1".to_string()),
            signature: None,
        };
        assert!(!missing_signature.is_complete());
        assert!(missing_signature.complete().is_none());

        assert!(!GatewayResponse::default().is_complete());
    }

    #[test]
    fn test_gateway_response_wire_field_names() {
        let full = GatewayResponse {
            order_id: Some("order_1".to_string()),
            payment_id: Some("pay_1".to_string()),
            signature: Some("sig_1".to_string()),
        };
        let json = serde_json::to_value(&full).unwrap();
        assert_eq!(json["razorpay_order_id"], "order_1");
        assert_eq!(json["razorpay_payment_id"], "pay_1");
        assert_eq!(json["razorpay_signature"], "sig_1");
    }
}
