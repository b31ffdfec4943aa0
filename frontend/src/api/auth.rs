use async_trait::async_trait;
use reqwest::Method;

use super::{
    client::ApiClient,
    gateway::AuthGateway,
    types::{ApiError, LoginRequest, RegisterRequest, SessionIdentity},
};

#[async_trait(?Send)]
impl AuthGateway for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "auth/register").json(request);
        Self::send_empty(builder).await
    }

    async fn login(&self, request: &LoginRequest) -> Result<SessionIdentity, ApiError> {
        let builder = self.request(Method::POST, "auth/login").json(request);
        let identity: SessionIdentity = Self::send_json(builder).await?;
        log::info!("Logged in as {}", identity.username);
        Ok(identity)
    }
}
