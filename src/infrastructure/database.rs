use crate::lifecycle::{LifecycleError, OnModuleDestroy, OnModuleInit};
use crate::modules::user::UserEntity;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, DatabaseConnection, DbErr, Schema};

/// Shared handle to the relational store.
///
/// Opened once at startup; every clone talks to the same connection pool.
#[derive(Clone)]
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    /// Open a pool for `url`.
    ///
    /// An in-memory SQLite database exists per connection, so such URLs get a
    /// pool of exactly one connection that is never reaped.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(url.to_owned());
        options.sqlx_logging(false);
        if url.contains(":memory:") {
            options.max_connections(1).min_connections(1);
        }

        tracing::info!(url = %url, "Database: connecting");
        let conn = sea_orm::Database::connect(options).await?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Create the `users` table if it is not there yet.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.conn.get_database_backend();
        let mut statement = Schema::new(backend).create_table_from_entity(UserEntity);
        statement.if_not_exists();
        self.conn.execute(backend.build(&statement)).await?;
        Ok(())
    }
}

#[async_trait]
impl OnModuleInit for Database {
    async fn on_module_init(&mut self) -> Result<(), LifecycleError> {
        tracing::info!("Database: ensuring schema...");
        self.ensure_schema()
            .await
            .map_err(|e| LifecycleError::init_failed(e.to_string()))?;
        tracing::info!("Database: schema ready");
        Ok(())
    }
}

#[async_trait]
impl OnModuleDestroy for Database {
    async fn on_module_destroy(&mut self) -> Result<(), LifecycleError> {
        tracing::info!("Database: closing connection pool...");
        self.conn
            .clone()
            .close()
            .await
            .map_err(|e| LifecycleError::shutdown_failed(e.to_string()))?;
        tracing::info!("Database: connection pool closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.ensure_schema().await.unwrap();
        db.ensure_schema().await.unwrap();

        let count = UserEntity::find().count(db.connection()).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn test_init_hook_creates_table() {
        let mut db = Database::connect("sqlite::memory:").await.unwrap();
        db.on_module_init().await.unwrap();

        assert!(UserEntity::find().all(db.connection()).await.unwrap().is_empty());
        db.on_module_destroy().await.unwrap();
    }
}
