use async_trait::async_trait;
use reqwest::Method;

use super::{
    client::ApiClient,
    gateway::TeacherGateway,
    types::{ApiError, Teacher},
};

#[async_trait(?Send)]
impl TeacherGateway for ApiClient {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError> {
        Self::send_json(self.request(Method::GET, "teacher")).await
    }

    async fn detail(&self, id: u64) -> Result<Teacher, ApiError> {
        Self::send_json(self.request(Method::GET, &format!("teacher/{}", id))).await
    }
}
