use thiserror::Error;
use validator::ValidationErrors;

use crate::api::ApiError;

/// Fixed text shown whenever a view's error flag is set. Server messages are
/// never displayed.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

pub fn error_message(on_error: bool) -> Option<&'static str> {
    on_error.then_some(GENERIC_ERROR_MESSAGE)
}

/// Why a view model action did not complete.
#[derive(Debug, Error)]
pub enum ViewError {
    /// The form failed validation; nothing was sent.
    #[error("form is invalid")]
    Invalid(#[from] ValidationErrors),
    #[error("no user is logged in")]
    NotLoggedIn,
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ViewError {
    pub fn is_invalid(&self) -> bool {
        matches!(self, ViewError::Invalid(_))
    }
}
