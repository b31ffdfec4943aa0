use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session::SessionStore};

/// HTTP client for the studio API. Implements every gateway trait.
///
/// When built `with_session`, requests carry the logged-in user's bearer
/// token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Option<SessionStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session: None,
        }
    }

    pub fn with_session(mut self, session: SessionStore) -> Self {
        self.session = Some(session);
        self
    }

    pub(crate) fn resolved_base_url(&self) -> String {
        match &self.base_url {
            Some(base) => base.clone(),
            None => config::api_base_url().to_string(),
        }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.resolved_base_url().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.endpoint(path);
        log::debug!("{} {}", method, url);
        let builder = self.client.request(method, url);
        match self.session.as_ref().and_then(SessionStore::identity) {
            Some(identity) => builder.bearer_auth(&identity.token),
            None => builder,
        }
    }

    pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        log::warn!("API responded with {}: {}", status, body);
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    pub(crate) async fn send_json<T: DeserializeOwned>(
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        Self::send(builder)
            .await?
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Success bodies of mutating calls carry nothing the client uses.
    pub(crate) async fn send_empty(builder: RequestBuilder) -> Result<(), ApiError> {
        Self::send(builder).await.map(|_| ())
    }
}
