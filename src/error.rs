use crate::common::{ApiError, ErrorCode};
use crate::modules::user::validation::ValidationError;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UserError>;

/// Failures a user operation can end in.
///
/// Each variant maps onto exactly one transport outcome in
/// [`IntoResponse`]; store failures never carry their cause to the caller.
#[derive(Debug, Error)]
pub enum UserError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("User not found: {email}")]
    NotFound { email: String },

    #[error("User already exists: {email}")]
    Conflict { email: String },

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Store error: {0}")]
    Store(String),
}

impl UserError {
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::Validation(_) => ErrorCode::ValidationFailed,
            UserError::MalformedRequest(_) => ErrorCode::MalformedRequest,
            UserError::NotFound { .. } => ErrorCode::NotFound,
            UserError::Conflict { .. } => ErrorCode::Conflict,
            UserError::MethodNotAllowed => ErrorCode::MethodNotAllowed,
            UserError::Store(_) => ErrorCode::InternalError,
        }
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Store(format!("Database error: {}", err))
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let code = self.code();
        let message = match &self {
            UserError::Store(cause) => {
                tracing::error!(error = %cause, "store failure while handling request");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        ApiError::new(code, message).into_response()
    }
}
