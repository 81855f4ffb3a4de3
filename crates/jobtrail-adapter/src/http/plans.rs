/*
[INPUT]:  Plan identifiers from navigation context
[OUTPUT]: Plan metadata (name, per-cycle prices)
[POS]:    HTTP layer - public plan endpoints (no auth required)
[UPDATE]: When adding new plan endpoints or changing response format
*/

use reqwest::Method;
use tracing::debug;

use crate::http::{ApiClient, Result};
use crate::types::{Plan, PlanResponse};

impl ApiClient {
    /// Fetch plan metadata
    ///
    /// GET /plans/{id}
    pub async fn get_plan(&self, plan_id: &str) -> Result<Plan> {
        let endpoint = format!("/plans/{plan_id}");
        let builder = self.request(Method::GET, &endpoint)?;
        let response: PlanResponse = self.send_json(builder).await?;
        debug!(plan_id, plan_name = %response.plan.name, "plan fetched");
        Ok(response.plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_plan() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plans/plan_pro"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "plan": {
                    "name": "pro",
                    "price": { "monthly": 999, "yearly": 9990 },
                },
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client init");
        let plan = client.get_plan("plan_pro").await.expect("get_plan failed");

        assert_eq!(plan.name, "pro");
        assert_eq!(plan.price.monthly, Decimal::new(999, 0));
        assert_eq!(plan.price.yearly, Decimal::new(9990, 0));
        assert!(!plan.is_free());
    }

    #[tokio::test]
    async fn test_get_plan_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/plans/plan_missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "message": "Plan not found",
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(&server.uri()).expect("client init");
        let err = client.get_plan("plan_missing").await.unwrap_err();
        assert_eq!(err.server_message(), Some("Plan not found"));
    }
}
