use axum::http::StatusCode as HttpStatusCode;
use strum_macros::{AsRefStr, Display, EnumIter};

/// Machine-readable error codes carried in every error body.
///
/// The `Display` output (via `strum`) is the variant name, e.g. `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumIter)]
pub enum ErrorCode {
    ValidationFailed,
    MalformedRequest,
    NotFound,
    Conflict,
    MethodNotAllowed,
    InternalError,
}

impl From<ErrorCode> for HttpStatusCode {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::ValidationFailed | ErrorCode::MalformedRequest => HttpStatusCode::BAD_REQUEST,
            ErrorCode::NotFound => HttpStatusCode::NOT_FOUND,
            ErrorCode::Conflict => HttpStatusCode::CONFLICT,
            ErrorCode::MethodNotAllowed => HttpStatusCode::METHOD_NOT_ALLOWED,
            ErrorCode::InternalError => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display_is_variant_name() {
        assert_eq!(ErrorCode::NotFound.to_string(), "NotFound");
        assert_eq!(ErrorCode::ValidationFailed.as_ref(), "ValidationFailed");
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(HttpStatusCode::from(ErrorCode::MalformedRequest), HttpStatusCode::BAD_REQUEST);
        assert_eq!(HttpStatusCode::from(ErrorCode::Conflict), HttpStatusCode::CONFLICT);
        assert_eq!(
            HttpStatusCode::from(ErrorCode::MethodNotAllowed),
            HttpStatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_every_code_is_an_error_status() {
        for code in ErrorCode::iter() {
            let status = HttpStatusCode::from(code);
            assert!(status.is_client_error() || status.is_server_error(), "{}", code);
        }
    }
}
