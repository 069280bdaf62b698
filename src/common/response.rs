use crate::common::ErrorCode;
use axum::{
    Json,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standard error body
///
/// Every failed request answers with the same JSON shape:
///
/// ```json
/// {"statusCode":404,"code":"NotFound","message":"User not found: a@x.com","timestamp":"..."}
/// ```
///
/// Successful requests do not use an envelope; they return the bare record(s).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub status_code: u16,
    pub code: String,
    pub message: String,
    pub timestamp: String,

    #[serde(skip)]
    pub http_status: HttpStatusCode,
}

impl ApiError {
    /// Build an error body, deriving both the HTTP status and the `code`
    /// string from the [`ErrorCode`].
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        let http_status: HttpStatusCode = code.into();
        Self {
            status_code: http_status.as_u16(),
            code: code.to_string(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            http_status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.http_status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case_without_http_status() {
        let error = ApiError::new(ErrorCode::Conflict, "User already exists: a@x.com");
        let value = serde_json::to_value(&error).unwrap();

        assert_eq!(value["statusCode"], 409);
        assert_eq!(value["code"], "Conflict");
        assert_eq!(value["message"], "User already exists: a@x.com");
        assert!(value.get("timestamp").is_some());
        assert!(value.get("httpStatus").is_none());
    }

    #[test]
    fn test_into_response_uses_code_status() {
        let response = ApiError::new(ErrorCode::MethodNotAllowed, "Method not allowed").into_response();
        assert_eq!(response.status(), HttpStatusCode::METHOD_NOT_ALLOWED);
    }
}
