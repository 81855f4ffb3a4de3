/*
[INPUT]:  Mock gateway outcomes
[OUTPUT]: Test results for the gateway seam
[POS]:    Integration tests - payment gateway contract
[UPDATE]: When the gateway contract changes
*/

mod common;

use common::sample_order;
use jobtrail_adapter::{ApiError, CustomerInfo, MockPaymentGateway, PaymentGateway};

fn customer() -> CustomerInfo {
    CustomerInfo {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
    }
}

#[tokio::test]
async fn test_gateway_consumes_order_once() {
    let gateway = MockPaymentGateway::confirming();
    let order = sample_order();

    let response = gateway
        .process_payment(&order, &customer())
        .await
        .expect("checkout");

    assert_eq!(response.order_id.as_deref(), Some("order_1"));
    let confirmation = response.complete().expect("complete confirmation");
    assert!(confirmation.gateway_payment_id.starts_with("pay_"));
    assert_eq!(gateway.call_count(), 1);
}

#[tokio::test]
async fn test_interrupted_checkout_never_yields_confirmation() {
    let gateway = MockPaymentGateway::interrupting();
    let response = gateway
        .process_payment(&sample_order(), &customer())
        .await
        .expect("checkout");

    assert!(response.complete().is_none());
}

#[tokio::test]
async fn test_cancelled_checkout_carries_user_message() {
    let gateway = MockPaymentGateway::failing("Payment cancelled by user");
    let err = gateway
        .process_payment(&sample_order(), &customer())
        .await
        .unwrap_err();

    match err {
        ApiError::Gateway(message) => assert_eq!(message, "Payment cancelled by user"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(gateway.call_count(), 1);
}
