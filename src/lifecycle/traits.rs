//! Lifecycle hook traits

use super::LifecycleError;
use async_trait::async_trait;

/// Called once before the server starts accepting requests
///
/// The store uses it to create its tables:
///
/// ```rust,ignore
/// #[async_trait]
/// impl OnModuleInit for Database {
///     async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
///         self.ensure_schema()
///             .await
///             .map_err(|e| LifecycleError::init_failed(e.to_string()))
///     }
/// }
/// ```
#[async_trait]
pub trait OnModuleInit: Send + Sync {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError>;
}

/// Called during shutdown, after the server has stopped taking requests
///
/// Services are destroyed in **reverse order** of registration.
#[async_trait]
pub trait OnModuleDestroy: Send + Sync {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError>;
}
