//! HTTP server initialization and runtime setup.
//!
//! Handles storage setup, migrations, and the Axum server lifecycle.

use crate::config::{Config, StorageBackend};
use crate::domain::repositories::{BookRepository, LoanRepository};
use crate::infrastructure::memory::MemoryStore;
use crate::infrastructure::persistence::{PgBookRepository, PgLoanRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Opens a PostgreSQL pool with the configured limits and applies migrations.
pub async fn connect_database(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(pool)
}

/// Builds the application state for the configured storage backend.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let (books, loans): (Arc<dyn BookRepository>, Arc<dyn LoanRepository>) =
        match config.storage_backend {
            StorageBackend::Postgres => {
                let pool = Arc::new(connect_database(config).await?);
                (
                    Arc::new(PgBookRepository::new(pool.clone())),
                    Arc::new(PgLoanRepository::new(pool)),
                )
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage, data is lost on restart");
                let store = MemoryStore::new();
                (
                    Arc::new(store.book_repository()),
                    Arc::new(store.loan_repository()),
                )
            }
        };

    Ok(AppState::new(books, loans, config.page_limits()))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Storage backend (PostgreSQL pool and migrations, or in-memory store)
/// - Book and loan services
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
