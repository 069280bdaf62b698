use crate::di::{Container, ContainerBuilder, HasContainer, ResolveError};
use crate::infrastructure::database::Database;
use crate::modules::user::{
    MemoryUserRepository, SeaOrmUserRepository, UserController, UserRepository, UserService,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Router state: the DI container every handler resolves its services from.
#[derive(Clone)]
pub struct AppState {
    container: Arc<Container>,
}

impl AppState {
    pub fn new(container: impl Into<Arc<Container>>) -> Self {
        Self {
            container: container.into(),
        }
    }
}

impl HasContainer for AppState {
    fn get_container(&self) -> &Container {
        &self.container
    }
}

/// Root application module
///
/// Owns the bindings (which store backs `dyn UserRepository`) and the route
/// table. Both store flavours end up with the same `UserService` on top.
pub struct AppModule;

impl AppModule {
    /// Wire the services against the relational store.
    pub fn relational(db: Database) -> Result<Container, ResolveError> {
        Ok(ContainerBuilder::new()
            .register(db)
            .provide::<SeaOrmUserRepository>()?
            .bind::<dyn UserRepository, SeaOrmUserRepository, _>(|r| r as Arc<dyn UserRepository>)
            .provide::<UserService>()?
            .build())
    }

    /// Wire the services against a process-local map.
    pub fn in_memory() -> Result<Container, ResolveError> {
        Ok(ContainerBuilder::new()
            .register(MemoryUserRepository::new())
            .bind::<dyn UserRepository, MemoryUserRepository, _>(|r| r as Arc<dyn UserRepository>)
            .provide::<UserService>()?
            .build())
    }

    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/", get(home))
            .merge(UserController::router())
            .with_state(state)
    }
}

async fn home() -> &'static str {
    "Welcome to the user registry!"
}
