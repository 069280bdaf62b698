//! Presence checks for inbound user payloads.
//!
//! These are pure functions: they inspect a candidate and report the wire
//! names of whatever is missing. Nothing here touches the store.

use super::domain::{CreateUserRequest, UpdateUserRequest};
use thiserror::Error;

pub const EMAIL: &str = "email";
pub const FIRST_NAME: &str = "firstName";
pub const LAST_NAME: &str = "lastName";
/// Reported when an update names neither of the two optional fields.
pub const FIRST_OR_LAST_NAME: &str = "firstName|lastName";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required field(s): {}", .missing_fields.join(", "))]
pub struct ValidationError {
    pub missing_fields: Vec<&'static str>,
}

impl ValidationError {
    pub fn new(missing_fields: Vec<&'static str>) -> Self {
        Self { missing_fields }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

/// All three fields must be non-empty.
pub fn validate_create(candidate: &CreateUserRequest) -> ValidationResult {
    let missing: Vec<&'static str> = [
        (EMAIL, candidate.email.is_empty()),
        (FIRST_NAME, candidate.first_name.is_empty()),
        (LAST_NAME, candidate.last_name.is_empty()),
    ]
    .into_iter()
    .filter_map(|(field, is_missing)| is_missing.then_some(field))
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::new(missing))
    }
}

/// The key must be present, and at least one name override must be given.
pub fn validate_update(candidate: &UpdateUserRequest) -> ValidationResult {
    if candidate.email.is_empty() {
        return Err(ValidationError::new(vec![EMAIL]));
    }

    let has_first = candidate.first_name.as_deref().is_some_and(|v| !v.is_empty());
    let has_last = candidate.last_name.as_deref().is_some_and(|v| !v.is_empty());
    if !has_first && !has_last {
        return Err(ValidationError::new(vec![FIRST_OR_LAST_NAME]));
    }

    Ok(())
}

pub fn validate_lookup(email: &str) -> ValidationResult {
    if email.is_empty() {
        Err(ValidationError::new(vec![EMAIL]))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(first: &str, last: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
        }
    }

    #[test]
    fn test_create_accepts_complete_candidate() {
        assert!(validate_create(&create("John", "Doe", "john@x.com")).is_ok());
    }

    #[test]
    fn test_create_reports_every_missing_field() {
        let err = validate_create(&create("John", "", "")).unwrap_err();
        assert_eq!(err.missing_fields, vec![EMAIL, LAST_NAME]);

        let err = validate_create(&CreateUserRequest::default()).unwrap_err();
        assert_eq!(err.missing_fields, vec![EMAIL, FIRST_NAME, LAST_NAME]);
    }

    #[test]
    fn test_update_requires_email_first() {
        let candidate = UpdateUserRequest {
            email: String::new(),
            first_name: None,
            last_name: None,
        };
        assert_eq!(validate_update(&candidate).unwrap_err().missing_fields, vec![EMAIL]);
    }

    #[test]
    fn test_update_requires_one_override() {
        let mut candidate = UpdateUserRequest {
            email: "john@x.com".into(),
            first_name: Some(String::new()),
            last_name: None,
        };
        assert_eq!(
            validate_update(&candidate).unwrap_err().missing_fields,
            vec![FIRST_OR_LAST_NAME]
        );

        candidate.last_name = Some("Doe".into());
        assert!(validate_update(&candidate).is_ok());
    }

    #[test]
    fn test_lookup_requires_email() {
        assert!(validate_lookup("").is_err());
        assert!(validate_lookup("john@x.com").is_ok());
    }

    #[test]
    fn test_error_message_lists_fields() {
        let err = ValidationError::new(vec![FIRST_OR_LAST_NAME]);
        assert_eq!(err.to_string(), "Missing required field(s): firstName|lastName");
    }
}
