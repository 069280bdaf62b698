//! Startup and shutdown hooks
//!
//! ```text
//! 1. Configuration loading
//! 2. Store connection + DI container
//! 3. OnModuleInit (each registered service, in order)   <- e.g. create tables
//! 4. Server start
//!    [running...]
//! 5. Shutdown signal (SIGTERM/SIGINT), in-flight requests drain
//! 6. OnModuleDestroy (reverse order)                    <- e.g. close pool
//! ```

mod application;
mod error;
mod manager;
mod shutdown;
mod traits;

pub use application::{Application, ApplicationBuilder};
pub use error::{LifecycleError, Result};
pub use manager::LifecycleManager;
pub use shutdown::shutdown_signal;
pub use traits::{OnModuleDestroy, OnModuleInit};
