//! # Employee Directory API Server
//!
//! REST API for listing, searching, creating, editing and deleting employees.
//!
//! ## Startup
//!
//! 1. Load configuration from the environment
//! 2. Open the record store (PostgreSQL pool + migrations, or in-memory)
//! 3. Serve the router until Ctrl+C
//! 4. Close the store
//!
//! ## Usage
//!
//! ```bash
//! DATABASE_URL=postgresql://localhost/directory cargo run -p directory-api
//! DATABASE_URL=memory cargo run -p directory-api
//! ```

use directory_api::{
    app::{build_router, AppState},
    config::Config,
};
use directory_shared::{
    db::{
        migrations::run_migrations,
        pool::{close_pool, create_pool, DatabaseConfig},
    },
    store::{MemoryStore, PgStore, RecordStore},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "directory_api=debug,directory_shared=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Employee Directory API v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pg_store = if config.database.is_memory() {
        tracing::warn!("Using in-memory store; data will not survive a restart");
        None
    } else {
        let pool = create_pool(DatabaseConfig {
            url: config.database.url.clone(),
            max_connections: config.database.max_connections,
            ..Default::default()
        })
        .await?;

        if config.database.run_migrations {
            run_migrations(&pool).await?;
        }

        Some(PgStore::new(pool))
    };

    let store: Arc<dyn RecordStore> = match &pg_store {
        Some(pg) => Arc::new(pg.clone()),
        None => Arc::new(MemoryStore::new()),
    };

    let bind_address = config.bind_address();
    let app = build_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(pg) = pg_store {
        close_pool(pg.pool().clone()).await;
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received, draining connections...");
}
