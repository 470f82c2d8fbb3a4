//! # Dump Endpoint
//!
//! HTTP surface and server lifecycle for the benchmark data-collection
//! endpoint.
//!
//! Handles:
//! - The `/dump` route with axum (read body, extract title, persist)
//! - Listener bind and signal-driven graceful shutdown
//!
//! Uses `dump-core` for persistence; this crate holds no domain logic.

#![warn(rust_2018_idioms)]

pub mod routes;
pub mod server;

pub use routes::{router, AppState};
pub use server::{shutdown_signal, Server, LISTEN_ADDR, SHUTDOWN_GRACE};
