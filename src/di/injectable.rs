use crate::di::{Container, ResolveError};

/// Trait for types that can be built from the DI container
///
/// Implement this for any service whose dependencies live in the container,
/// so that wiring happens in one place at startup instead of through globals.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use user_registry::di::{Container, Injectable, ResolveError};
///
/// struct Clock;
///
/// struct Greeter {
///     clock: Arc<Clock>,
/// }
///
/// impl Injectable for Greeter {
///     fn inject(container: &Container) -> Result<Self, ResolveError> {
///         Ok(Self { clock: container.resolve::<Clock>()? })
///     }
/// }
///
/// let mut container = Container::new();
/// container.register(Clock);
/// assert!(Greeter::inject(&container).is_ok());
/// ```
pub trait Injectable: Sized + Send + Sync + 'static {
    /// Create an instance by resolving dependencies from the container
    ///
    /// # Errors
    /// Returns an error if any required dependency is not found in the container.
    fn inject(container: &Container) -> Result<Self, ResolveError>;
}
