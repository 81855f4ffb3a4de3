/*
[INPUT]:  Registration data (name, email, password)
[OUTPUT]: Freshly issued access/refresh tokens
[POS]:    HTTP layer - account endpoints (no auth required)
[UPDATE]: When the registration contract changes
*/

use reqwest::Method;
use tracing::info;

use crate::http::{ApiClient, Result};
use crate::types::{RegisterRequest, RegisterResponse};

impl ApiClient {
    /// Register a new account
    ///
    /// POST /auth/register
    pub async fn register(&self, req: RegisterRequest) -> Result<RegisterResponse> {
        let builder = self.request(Method::POST, "/auth/register")?.json(&req);
        let response: RegisterResponse = self.send_json(builder).await?;
        info!(email = %req.email, "account registered");
        Ok(response)
    }
}
