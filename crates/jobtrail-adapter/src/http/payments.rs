/*
[INPUT]:  Plan selection and gateway confirmations, with a bearer token
[OUTPUT]: Payment orders and verification results
[POS]:    HTTP layer - payment endpoints (require bearer auth)
[UPDATE]: When adding new payment endpoints or changing order flow
*/

use reqwest::Method;
use tracing::{debug, info};

use crate::http::{ApiClient, Result};
use crate::types::{
    CreateOrderRequest, CreateOrderResponse, PaymentOrder, VerifyPaymentRequest,
    VerifyPaymentResponse,
};

impl ApiClient {
    /// Create a payment order for a paid plan
    ///
    /// POST /payments/create-order
    /// Requires: Authorization bearer token (the one issued by the
    /// registration that precedes this call)
    pub async fn create_order(
        &self,
        access_token: &str,
        req: CreateOrderRequest,
    ) -> Result<PaymentOrder> {
        let builder = self
            .request_with_bearer(Method::POST, "/payments/create-order", access_token)?
            .json(&req);
        let response: CreateOrderResponse = self.send_json(builder).await?;
        let order = response.into_payment_order();
        info!(
            order_id = %order.order_id,
            amount = order.amount,
            currency = %order.currency,
            "payment order created"
        );
        Ok(order)
    }

    /// Verify a gateway confirmation server-side
    ///
    /// POST /payments/verify
    /// Requires: Authorization bearer token
    pub async fn verify_payment(
        &self,
        access_token: &str,
        req: VerifyPaymentRequest,
    ) -> Result<VerifyPaymentResponse> {
        let builder = self
            .request_with_bearer(Method::POST, "/payments/verify", access_token)?
            .json(&req);
        let response: VerifyPaymentResponse = self.send_json(builder).await?;
        debug!(status = %response.status, "payment verified");
        Ok(response)
    }
}
