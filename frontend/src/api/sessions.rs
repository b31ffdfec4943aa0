use async_trait::async_trait;
use reqwest::Method;

use super::{
    client::ApiClient,
    gateway::SessionGateway,
    types::{ApiError, Session},
};

const PATH: &str = "session";

#[async_trait(?Send)]
impl SessionGateway for ApiClient {
    async fn all(&self) -> Result<Vec<Session>, ApiError> {
        Self::send_json(self.request(Method::GET, PATH)).await
    }

    async fn detail(&self, id: u64) -> Result<Session, ApiError> {
        Self::send_json(self.request(Method::GET, &format!("{}/{}", PATH, id))).await
    }

    async fn create(&self, session: &Session) -> Result<Session, ApiError> {
        let builder = self.request(Method::POST, PATH).json(session);
        Self::send_json(builder).await
    }

    async fn update(&self, id: u64, session: &Session) -> Result<Session, ApiError> {
        let builder = self
            .request(Method::PUT, &format!("{}/{}", PATH, id))
            .json(session);
        Self::send_json(builder).await
    }

    async fn delete(&self, id: u64) -> Result<(), ApiError> {
        Self::send_empty(self.request(Method::DELETE, &format!("{}/{}", PATH, id))).await
    }

    async fn participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        let builder = self
            .request(
                Method::POST,
                &format!("{}/{}/participate/{}", PATH, session_id, user_id),
            )
            .json(&serde_json::Value::Null);
        Self::send_empty(builder).await
    }

    async fn un_participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError> {
        let builder = self.request(
            Method::DELETE,
            &format!("{}/{}/participate/{}", PATH, session_id, user_id),
        );
        Self::send_empty(builder).await
    }
}
