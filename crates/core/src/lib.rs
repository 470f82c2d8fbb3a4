//! # Dump Core
//!
//! Core persistence logic for the benchmark data-collection endpoint.
//!
//! This crate contains pure data operations and file management:
//! - Extracting the `title` field from a posted JSON payload
//! - Writing the raw payload bytes to `<title>.json` under the data directory
//!
//! **No API concerns**: HTTP routing, server lifecycle, and signal handling
//! belong in the `dump-endpoint` package.

pub mod config;
pub mod constants;
pub mod dump;
mod error;

pub use config::CoreConfig;
pub use dump::{DumpRequest, DumpService};
pub use error::{DumpError, DumpResult};
