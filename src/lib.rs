//! # User registry
//!
//! A small HTTP service exposing CRUD operations over user records, keyed by
//! email and kept in a relational store.
//!
//! The interesting part is the request layer in [`modules::user`]: presence
//! validation, the partial-update merge, and the mapping of each outcome onto
//! an HTTP status (see [`error::UserError`]). Everything else is wiring:
//!
//! - [`di`] hands the store to the handlers instead of a global handle.
//! - [`lifecycle`] creates the table on startup and closes the pool on shutdown.
//! - [`config`] reads the environment.
//!
//! ```rust,no_run
//! use user_registry::app_module::{AppModule, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let container = AppModule::in_memory()?;
//!     let router = AppModule::router(AppState::new(container));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

pub mod app_module;
pub mod common;
pub mod config;
pub mod di;
pub mod error;
pub mod infrastructure;
pub mod lifecycle;
pub mod modules;

pub use app_module::{AppModule, AppState};
pub use error::{Result, UserError};
