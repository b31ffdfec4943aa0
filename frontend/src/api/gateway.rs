//! Request/response contracts of the studio API.
//!
//! View models depend on these traits rather than on `ApiClient` directly.
//! Every method issues exactly one request; none retry.

use async_trait::async_trait;

use super::types::{
    ApiError, LoginRequest, RegisterRequest, Session, SessionIdentity, Teacher, User,
};

#[async_trait(?Send)]
pub trait AuthGateway {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    async fn login(&self, request: &LoginRequest) -> Result<SessionIdentity, ApiError>;
}

#[async_trait(?Send)]
pub trait SessionGateway {
    async fn all(&self) -> Result<Vec<Session>, ApiError>;

    async fn detail(&self, id: u64) -> Result<Session, ApiError>;

    /// The server assigns the id of the returned session.
    async fn create(&self, session: &Session) -> Result<Session, ApiError>;

    async fn update(&self, id: u64, session: &Session) -> Result<Session, ApiError>;

    async fn delete(&self, id: u64) -> Result<(), ApiError>;

    async fn participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError>;

    async fn un_participate(&self, session_id: u64, user_id: u64) -> Result<(), ApiError>;
}

#[async_trait(?Send)]
pub trait TeacherGateway {
    async fn all(&self) -> Result<Vec<Teacher>, ApiError>;

    async fn detail(&self, id: u64) -> Result<Teacher, ApiError>;
}

#[async_trait(?Send)]
pub trait UserGateway {
    async fn get_by_id(&self, id: u64) -> Result<User, ApiError>;

    async fn delete(&self, id: u64) -> Result<(), ApiError>;
}
