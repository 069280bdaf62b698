use thiserror::Error;

/// Failure to hand out a registered service.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Dependency not found: {type_name}")]
    DependencyNotFound { type_name: String },

    #[error("Failed to downcast type: {type_name}")]
    DowncastFailed { type_name: String },
}
