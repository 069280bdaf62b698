use crate::di::{Container, Injectable, ResolveError};
use crate::error::{Result, UserError};
use crate::modules::user::domain::{CreateUserRequest, UpdateUserRequest, User};
use crate::modules::user::repository::UserRepository;
use crate::modules::user::validation;
use std::sync::Arc;

/// The four user operations.
///
/// Each call validates its input, talks to the injected store, and returns a
/// transient copy of the record; the store stays the only owner of state.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl Injectable for UserService {
    fn inject(container: &Container) -> std::result::Result<Self, ResolveError> {
        Ok(Self::new(container.resolve_trait::<dyn UserRepository>()?))
    }
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Every stored record, in no particular order.
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = self.repository.find_all().await?;
        tracing::debug!(count = users.len(), "listed users");
        Ok(users)
    }

    pub async fn lookup(&self, email: &str) -> Result<User> {
        validation::validate_lookup(email)?;
        self.repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| UserError::NotFound {
                email: email.to_string(),
            })
    }

    /// Persist a new record and echo it back as given.
    pub async fn create(&self, req: CreateUserRequest) -> Result<User> {
        validation::validate_create(&req)?;
        let user = User::from(req);

        if let Err(e) = self.repository.insert(&user).await {
            if let UserError::Conflict { email } = &e {
                tracing::warn!(email = %email, "create rejected: email already registered");
            }
            return Err(e);
        }

        tracing::info!(email = %user.email, "user created");
        Ok(user)
    }

    /// Apply name overrides to an existing record and return the merged result.
    pub async fn update(&self, req: UpdateUserRequest) -> Result<User> {
        validation::validate_update(&req)?;

        let existing = self
            .repository
            .find_by_email(&req.email)
            .await?
            .ok_or_else(|| UserError::NotFound {
                email: req.email.clone(),
            })?;

        let merged = req.merge_into(&existing);
        self.repository.update(&merged).await?;

        tracing::info!(email = %merged.email, "user updated");
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::user::MemoryUserRepository;
    use async_trait::async_trait;

    fn service() -> UserService {
        UserService::new(Arc::new(MemoryUserRepository::new()))
    }

    fn create_req(first: &str, last: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
        }
    }

    fn update_req(email: &str, first: Option<&str>, last: Option<&str>) -> UpdateUserRequest {
        UpdateUserRequest {
            email: email.into(),
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    /// A store that fails every call.
    struct BrokenRepository;

    #[async_trait]
    impl UserRepository for BrokenRepository {
        async fn find_all(&self) -> Result<Vec<User>> {
            Err(UserError::Store("connection reset".into()))
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<User>> {
            Err(UserError::Store("connection reset".into()))
        }
        async fn insert(&self, _user: &User) -> Result<()> {
            Err(UserError::Store("connection reset".into()))
        }
        async fn update(&self, _user: &User) -> Result<()> {
            Err(UserError::Store("connection reset".into()))
        }
    }

    #[tokio::test]
    async fn test_list_on_empty_store_is_empty() {
        assert!(service().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_echoes_record_and_lookup_round_trips() {
        let service = service();
        let created = service
            .create(create_req("John", "Doe", "john@x.com"))
            .await
            .unwrap();
        assert_eq!(
            created,
            User {
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john@x.com".into(),
            }
        );

        assert_eq!(service.lookup("john@x.com").await.unwrap(), created);
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_only_first_create_per_email_succeeds() {
        let service = service();
        service
            .create(create_req("John", "Doe", "john@x.com"))
            .await
            .unwrap();

        for _ in 0..3 {
            let err = service
                .create(create_req("Jane", "Roe", "john@x.com"))
                .await
                .unwrap_err();
            assert!(matches!(err, UserError::Conflict { .. }));
        }
        assert_eq!(service.lookup("john@x.com").await.unwrap().first_name, "John");
    }

    #[tokio::test]
    async fn test_invalid_create_persists_nothing() {
        let service = service();
        for req in [
            create_req("", "Doe", "john@x.com"),
            create_req("John", "", "john@x.com"),
            create_req("John", "Doe", ""),
        ] {
            let err = service.create(req).await.unwrap_err();
            assert!(matches!(err, UserError::Validation(_)));
        }
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_first_name_only_keeps_last_name() {
        let service = service();
        service
            .create(create_req("John", "Doe", "john@x.com"))
            .await
            .unwrap();

        let updated = service
            .update(update_req("john@x.com", Some("Johnny"), None))
            .await
            .unwrap();
        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.last_name, "Doe");
        assert_eq!(updated.email, "john@x.com");
        assert_eq!(service.lookup("john@x.com").await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_last_name_only() {
        let service = service();
        service
            .create(create_req("John", "Doe", "john@x.com"))
            .await
            .unwrap();

        let updated = service
            .update(update_req("john@x.com", Some(""), Some("Smith")))
            .await
            .unwrap();
        assert_eq!(updated.first_name, "John");
        assert_eq!(updated.last_name, "Smith");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let err = service()
            .update(update_req("missing@x.com", Some("X"), None))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::NotFound { ref email } if email == "missing@x.com"));
    }

    #[tokio::test]
    async fn test_update_validation_runs_before_lookup() {
        let service = UserService::new(Arc::new(BrokenRepository));
        let err = service
            .update(update_req("john@x.com", None, None))
            .await
            .unwrap_err();
        assert!(matches!(err, UserError::Validation(_)));
    }

    #[tokio::test]
    async fn test_lookup_validation_and_not_found() {
        let service = service();
        assert!(matches!(
            service.lookup("").await.unwrap_err(),
            UserError::Validation(_)
        ));
        assert!(matches!(
            service.lookup("missing@x.com").await.unwrap_err(),
            UserError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_store_failures_propagate() {
        let service = UserService::new(Arc::new(BrokenRepository));
        assert!(matches!(service.list().await.unwrap_err(), UserError::Store(_)));
        assert!(matches!(
            service
                .create(create_req("John", "Doe", "john@x.com"))
                .await
                .unwrap_err(),
            UserError::Store(_)
        ));
    }
}
