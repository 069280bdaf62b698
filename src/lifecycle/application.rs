//! Application bootstrap
//!
//! Ties the DI container to the lifecycle hooks so `main` only has to build,
//! serve, and shut down.

use super::{LifecycleError, LifecycleManager, OnModuleDestroy, OnModuleInit, Result};
use crate::di::Container;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// An initialized application: every init hook has already run.
pub struct Application {
    container: Arc<Container>,
    lifecycle_manager: Arc<LifecycleManager>,
}

impl Application {
    pub fn builder() -> ApplicationBuilder {
        ApplicationBuilder::new()
    }

    pub fn container(&self) -> &Arc<Container> {
        &self.container
    }

    /// Run the OnModuleDestroy hooks.
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down application...");
        self.lifecycle_manager.call_module_destroy().await?;
        tracing::info!("Application shutdown complete");
        Ok(())
    }
}

#[derive(Default)]
pub struct ApplicationBuilder {
    container: Option<Container>,
    lifecycle_manager: LifecycleManager,
    init_timeout: Option<Duration>,
}

impl ApplicationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Bound the total time spent in OnModuleInit hooks
    pub fn init_timeout(mut self, timeout: Duration) -> Self {
        self.init_timeout = Some(timeout);
        self
    }

    pub fn on_init<T>(mut self, service: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + 'static,
    {
        self.lifecycle_manager.register_init(service, name);
        self
    }

    pub fn on_destroy<T>(mut self, service: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleDestroy + 'static,
    {
        self.lifecycle_manager.register_destroy(service, name);
        self
    }

    /// Register a service for both its init and destroy hooks
    pub fn register_lifecycle<T>(self, service: Arc<RwLock<T>>, name: impl Into<String>) -> Self
    where
        T: OnModuleInit + OnModuleDestroy + 'static,
    {
        let name = name.into();
        self.on_init(Arc::clone(&service), name.clone())
            .on_destroy(service, name)
    }

    /// Run every OnModuleInit hook and hand back the application
    ///
    /// # Errors
    ///
    /// Fails if no container was given, if a hook fails, or if the hooks
    /// exceed the configured init timeout.
    pub async fn build(self) -> Result<Application> {
        let container = self
            .container
            .ok_or_else(|| LifecycleError::init_failed("Container not provided"))?;

        tracing::info!("Starting application initialization...");

        if let Some(timeout) = self.init_timeout {
            self.lifecycle_manager
                .call_module_init_with_timeout(timeout)
                .await?;
        } else {
            self.lifecycle_manager.call_module_init().await?;
        }

        tracing::info!("Application initialization complete");

        Ok(Application {
            container: Arc::new(container),
            lifecycle_manager: Arc::new(self.lifecycle_manager),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Default)]
    struct Tracked {
        inits: usize,
        destroys: usize,
    }

    #[async_trait]
    impl OnModuleInit for Tracked {
        async fn on_module_init(&mut self) -> Result<()> {
            self.inits += 1;
            Ok(())
        }
    }

    #[async_trait]
    impl OnModuleDestroy for Tracked {
        async fn on_module_destroy(&mut self) -> Result<()> {
            self.destroys += 1;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_build_requires_container() {
        let err = Application::builder().build().await.err().unwrap();
        assert!(matches!(err, LifecycleError::InitializationFailed(_)));
    }

    #[tokio::test]
    async fn test_build_runs_init_and_shutdown_runs_destroy() {
        let tracked = Arc::new(RwLock::new(Tracked::default()));

        let app = Application::builder()
            .container(Container::new())
            .register_lifecycle(Arc::clone(&tracked), "Tracked")
            .init_timeout(Duration::from_secs(1))
            .build()
            .await
            .unwrap();
        assert_eq!(tracked.read().await.inits, 1);
        assert_eq!(tracked.read().await.destroys, 0);

        app.shutdown().await.unwrap();
        assert_eq!(tracked.read().await.destroys, 1);
        assert!(app.container().is_empty());
    }
}
