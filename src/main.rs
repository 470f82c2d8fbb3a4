//! Benchmark data-collection endpoint binary.
//!
//! Accepts HTTP requests on `/dump` and persists each raw JSON body to a
//! file named after the payload's `title` field. Runs until SIGINT/SIGTERM,
//! then drains in-flight requests for a bounded grace period.
//!
//! # Environment Variables
//! - `DUMP_DATA_DIR`: Directory dump files are written to (default: ".")
//! - `RUST_LOG`: Tracing filter directives
//!
//! The listen address is fixed at `0.0.0.0:9091` by design.

use anyhow::Context;
use dump_core::{constants::DEFAULT_DATA_DIR, CoreConfig, DumpService};
use dump_endpoint::{router, shutdown_signal, AppState, Server, LISTEN_ADDR, SHUTDOWN_GRACE};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("dump_endpoint=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data_dir = std::env::var("DUMP_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.into());
    let cfg = Arc::new(
        CoreConfig::new(PathBuf::from(data_dir)).context("failed to resolve data directory")?,
    );

    let state = AppState {
        dump_service: Arc::new(DumpService::new(cfg)),
    };
    let app = router(state);

    let server = Server::bind(LISTEN_ADDR)
        .await
        .with_context(|| format!("failed to bind {LISTEN_ADDR}"))?;

    tracing::info!("++ Dump endpoint ready on {}", LISTEN_ADDR);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let serve_task = tokio::spawn(server.serve(app, async {
        shutdown_rx.await.ok();
    }));

    shutdown_signal().await;
    tracing::info!("-- Shutdown requested, draining in-flight requests");

    // Stop accepting; in-flight requests get SHUTDOWN_GRACE to finish, then
    // the process exits regardless of their write state.
    let _ = shutdown_tx.send(());
    match tokio::time::timeout(SHUTDOWN_GRACE, serve_task).await {
        Ok(joined) => joined
            .context("server task panicked")?
            .context("server error during shutdown")?,
        Err(_) => anyhow::bail!(
            "server shutdown failed: grace period of {}s elapsed",
            SHUTDOWN_GRACE.as_secs()
        ),
    }

    tracing::info!("-- Server stopped");
    Ok(())
}
