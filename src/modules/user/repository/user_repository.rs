use crate::error::Result;
use crate::modules::user::domain::User;
use async_trait::async_trait;

/// The record store for users, keyed by email.
///
/// Implementations must make `insert` and `update` individually atomic;
/// nothing above this trait coordinates concurrent writers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Fails with `UserError::Conflict` if the email is already stored.
    async fn insert(&self, user: &User) -> Result<()>;

    /// Overwrites the names of the record keyed by `user.email`.
    ///
    /// Fails with `UserError::NotFound` if no record was touched.
    async fn update(&self, user: &User) -> Result<()>;
}
