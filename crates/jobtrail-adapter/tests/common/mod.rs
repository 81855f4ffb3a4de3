/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for jobtrail-adapter tests

use jobtrail_adapter::PaymentOrder;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Mock access token for testing
#[allow(dead_code)]
pub fn mock_access_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}

/// A payment order matching the canonical paid-plan scenario
#[allow(dead_code)]
pub fn sample_order() -> PaymentOrder {
    PaymentOrder {
        order_id: "order_1".to_string(),
        amount: 99_900,
        currency: "INR".to_string(),
        transaction_id: "tx_1".to_string(),
    }
}
