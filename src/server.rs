//! Server lifecycle: bind, serve, signal-driven graceful shutdown.

use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};

/// Fixed listen address (all interfaces, port 9091); deliberately not
/// configurable.
pub const LISTEN_ADDR: &str = "0.0.0.0:9091";

/// Grace period for in-flight requests after shutdown is requested.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// A bound listener ready to serve a router.
pub struct Server {
    listener: TcpListener,
}

impl Server {
    /// Bind the TCP listener.
    ///
    /// # Errors
    ///
    /// Returns the bind error (e.g. port already in use). A bind failure is
    /// unrecoverable within this process's lifetime; callers propagate it and
    /// terminate.
    pub async fn bind(addr: &str) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    /// The address the listener is actually bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve `app` until `shutdown` resolves, then stop accepting new
    /// connections and drain requests still in flight. The drain is unbounded
    /// here; callers bound it with [`SHUTDOWN_GRACE`].
    pub async fn serve<F>(self, app: Router, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, app)
            .with_graceful_shutdown(shutdown)
            .await
    }
}

/// Resolve when the process receives SIGINT or SIGTERM. No other signals are
/// handled.
pub async fn shutdown_signal() {
    let mut sigint = signal(SignalKind::interrupt()).expect("failed to register SIGINT handler");
    let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM handler");

    tokio::select! {
        _ = sigint.recv() => {
            tracing::debug!("received SIGINT");
        }
        _ = sigterm.recv() => {
            tracing::debug!("received SIGTERM");
        }
    }
}
