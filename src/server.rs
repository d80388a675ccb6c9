//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, hash store selection and the Axum
//! server lifecycle.

use crate::config::Config;
use crate::domain::repositories::EntityRepository;
use crate::infrastructure::hash_store::{ContentHashStore, InMemoryHashStore, RedisHashStore};
use crate::infrastructure::persistence::PgEntityRepository;
use crate::routes::app_router;
use crate::state::{AppState, AuditSettings};

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens the PostgreSQL pool with the configured limits.
///
/// # Errors
///
/// Returns an error if the database is unreachable.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    tracing::info!("Connected to database");
    Ok(pool)
}

/// Picks Redis when configured and reachable, the in-memory store otherwise.
pub async fn build_hash_store(config: &Config) -> Arc<dyn ContentHashStore> {
    if let Some(redis_url) = &config.redis_url {
        match RedisHashStore::connect(redis_url).await {
            Ok(redis) => {
                tracing::info!("Hash store: Redis");
                return Arc::new(redis);
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using in-memory hash store.", e);
            }
        }
    } else {
        tracing::info!("Hash store: in-memory");
    }

    Arc::new(InMemoryHashStore::new())
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Content hash store (Redis or in-memory fallback)
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    let hash_store = build_hash_store(&config).await;

    let repository: Arc<dyn EntityRepository> = Arc::new(PgEntityRepository::new(Arc::new(pool)));
    let state = AppState::new(repository, hash_store, AuditSettings::from(&config));

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
