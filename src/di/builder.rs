use crate::di::{Container, Injectable, ResolveError};
use std::sync::Arc;

/// Builder for constructing a dependency injection container
///
/// Registration order matters for [`ContainerBuilder::provide`]: a provider can
/// only resolve what was registered before it.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use user_registry::di::ContainerBuilder;
/// use user_registry::modules::user::{MemoryUserRepository, UserRepository, UserService};
///
/// let container = ContainerBuilder::new()
///     .register(MemoryUserRepository::new())
///     .bind::<dyn UserRepository, MemoryUserRepository, _>(|r| r as Arc<dyn UserRepository>)
///     .provide::<UserService>()
///     .unwrap()
///     .build();
///
/// assert!(container.contains::<UserService>());
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    /// Create a new container builder
    pub fn new() -> Self {
        Self {
            container: Container::new(),
        }
    }

    /// Register a service instance
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.register(instance);
        self
    }

    /// Build `T` from what is already registered and register the result
    pub fn provide<T: Injectable>(mut self) -> Result<Self, ResolveError> {
        let instance = T::inject(&self.container)?;
        self.container.register(instance);
        Ok(self)
    }

    /// Bind a trait to a concrete implementation
    ///
    /// This enables resolving `Arc<dyn Trait>` to the registered implementation.
    pub fn bind<Trait, Impl, F>(mut self, caster: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        self.container.register_trait::<Trait, Impl, F>(caster);
        self
    }

    /// Build the container
    pub fn build(self) -> Container {
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
