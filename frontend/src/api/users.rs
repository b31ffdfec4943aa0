use async_trait::async_trait;
use reqwest::Method;

use super::{
    client::ApiClient,
    gateway::UserGateway,
    types::{ApiError, User},
};

#[async_trait(?Send)]
impl UserGateway for ApiClient {
    async fn get_by_id(&self, id: u64) -> Result<User, ApiError> {
        Self::send_json(self.request(Method::GET, &format!("user/{}", id))).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        Self::send_empty(self.request(Method::DELETE, &format!("user/{}", id))).await
    }
}
