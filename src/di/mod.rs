mod builder;
mod container;
mod error;
mod extractor;
mod injectable;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use error::ResolveError;
pub use extractor::{HasContainer, Inject};
pub use injectable::Injectable;
