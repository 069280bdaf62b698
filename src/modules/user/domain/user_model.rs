use serde::{Deserialize, Serialize};

/// A persisted user record, keyed by `email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Body of `POST /example/create/user`.
///
/// Absent fields deserialize to empty strings so that the validator, not the
/// JSON parser, reports which of them are missing.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<CreateUserRequest> for User {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
        }
    }
}

/// Body of `PUT /example/update/user`.
///
/// `first_name` and `last_name` are overrides: `None` leaves the stored value
/// untouched. An empty string on the wire means the same thing as omitting the
/// field, so clearing a name is not expressible.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateUserRequest {
    pub email: String,
    #[serde(deserialize_with = "empty_as_none")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "empty_as_none")]
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    /// Apply the overrides on top of an existing record.
    ///
    /// The key is always taken from `existing`.
    pub fn merge_into(&self, existing: &User) -> User {
        User {
            first_name: non_empty(&self.first_name).unwrap_or(&existing.first_name).to_string(),
            last_name: non_empty(&self.last_name).unwrap_or(&existing.last_name).to_string(),
            email: existing.email.clone(),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}
