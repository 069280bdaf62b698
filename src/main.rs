use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use user_registry::config::{AppConfig, ConfigService, StoreKind};
use user_registry::infrastructure::database::Database;
use user_registry::lifecycle::{Application, shutdown_signal};
use user_registry::{AppModule, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; the real environment still applies.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::from_service(&ConfigService::from_env())?;
    tracing::info!(store = ?config.store, "Starting user registry...");

    // 1. Open the store and wire the services around it
    let builder = Application::builder().init_timeout(config.init_timeout);
    let builder = match config.store {
        StoreKind::Memory => builder.container(AppModule::in_memory()?),
        StoreKind::Sqlite => {
            let db = Database::connect(&config.database_url).await?;
            builder
                .container(AppModule::relational(db.clone())?)
                .register_lifecycle(Arc::new(RwLock::new(db)), "Database")
        }
    };

    // 2. Run init hooks (table creation)
    let app = builder.build().await?;

    // 3. Serve until a shutdown signal arrives
    let router = AppModule::router(AppState::new(Arc::clone(app.container())))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server running on http://{}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 4. In-flight requests have drained; release the store
    tracing::info!("Initiating graceful shutdown...");
    if let Err(e) = app.shutdown().await {
        tracing::error!("Error during shutdown: {}", e);
    }

    tracing::info!("Server stopped");
    Ok(())
}
