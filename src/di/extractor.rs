use crate::di::Container;
use crate::error::UserError;
use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

/// Axum extractor for dependency injection
///
/// Handlers receive their services as parameters instead of reaching for
/// process-wide state:
///
/// ```ignore
/// async fn list(Inject(service): Inject<UserService>) -> Result<Json<Vec<User>>> {
///     Ok(Json(service.list().await?))
/// }
/// ```
pub struct Inject<T>(pub Arc<T>);

/// Trait that the router state must implement to provide the DI container
pub trait HasContainer {
    fn get_container(&self) -> &Container;
}

impl<S, T> FromRequestParts<S> for Inject<T>
where
    S: Send + Sync + HasContainer,
    T: 'static + Send + Sync,
{
    type Rejection = UserError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        state
            .get_container()
            .resolve::<T>()
            .map(Inject)
            .map_err(|e| UserError::Store(format!("Dependency injection failed: {}", e)))
    }
}

impl<T> std::ops::Deref for Inject<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Inject(Arc::clone(&self.0))
    }
}
