//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, migrations, worker spawning, and Axum server lifecycle.

use crate::config::{Config, DatabaseKind};
use crate::domain::store::{LinkStore, VisitStore};
use crate::domain::visit_worker::run_visit_worker;
use crate::infrastructure::persistence::{PgStore, SqliteStore};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::code_generator::ShortCodeGenerator;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL or SQLite store, selected by the database URL
/// - Apply migrations
/// - Background visit worker
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let (link_store, visit_store) = open_stores(&config).await?;

    let (visit_tx, visit_rx) = mpsc::channel(config.visit_queue_capacity);
    let worker = tokio::spawn(run_visit_worker(visit_rx, Arc::clone(&visit_store)));
    tracing::info!("Visit worker started");

    let generator = Arc::new(ShortCodeGenerator::new(
        config.short_code_min_len,
        config.short_code_max_len,
    ));
    let state = AppState::new(
        link_store,
        visit_store,
        generator,
        visit_tx,
        config.base_url.clone(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router (and with it every visit sender) is gone; let the worker drain.
    match tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "visit worker terminated abnormally"),
        Err(_) => tracing::warn!("visit worker did not drain in time, pending visits dropped"),
    }

    tracing::info!("Server stopped");
    Ok(())
}

async fn open_stores(config: &Config) -> Result<(Arc<dyn LinkStore>, Arc<dyn VisitStore>)> {
    match config.database_kind() {
        Some(DatabaseKind::Postgres) => {
            let store = PgStore::connect(
                &config.database_url,
                config.db_max_connections,
                Duration::from_secs(config.db_connect_timeout),
            )
            .await
            .context("Failed to connect to PostgreSQL")?;
            tracing::info!("Connected to PostgreSQL");

            store.migrate().await.context("Failed to migrate")?;

            let store = Arc::new(store);
            let link_store: Arc<dyn LinkStore> = store.clone();
            let visit_store: Arc<dyn VisitStore> = store;
            Ok((link_store, visit_store))
        }
        Some(DatabaseKind::Sqlite) => {
            let store = SqliteStore::connect(&config.database_url)
                .await
                .context("Failed to open SQLite database")?;
            tracing::info!("Opened SQLite database");

            store.migrate().await.context("Failed to migrate")?;

            let store = Arc::new(store);
            let link_store: Arc<dyn LinkStore> = store.clone();
            let visit_store: Arc<dyn VisitStore> = store;
            Ok((link_store, visit_store))
        }
        None => anyhow::bail!("Unsupported DATABASE_URL scheme"),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
