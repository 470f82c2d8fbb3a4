//! Dump persistence service.
//!
//! A dump is one raw request body persisted to a file named after the
//! payload's `title` field. The body bytes are written verbatim — the parsed
//! structure is only used to derive the filename, never re-serialised.
//!
//! # Concurrency
//!
//! The service takes no locks. Two concurrent dumps with the same title race;
//! the file's final contents are whichever write lands last.

use crate::constants::DUMP_FILE_MODE;
use crate::{CoreConfig, DumpError, DumpResult};
use std::fs::OpenOptions;
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::PathBuf;
use std::sync::Arc;

/// Deserialised view of a posted payload.
///
/// Only `title` is consumed; all other fields are ignored. A missing title
/// deserialises to the empty string.
#[derive(Debug, Default, serde::Deserialize)]
pub struct DumpRequest {
    #[serde(default)]
    pub title: String,
}

/// Service that persists raw payload bytes to title-named files.
///
/// Stateless between calls: each dump is an independent whole-file write into
/// the configured data directory, truncating any previous file with the same
/// title.
#[derive(Clone, Debug)]
pub struct DumpService {
    cfg: Arc<CoreConfig>,
}

impl DumpService {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }

    /// Write `body` verbatim to `<title>.json` in the data directory.
    ///
    /// The file is created with mode 0644 and truncated if it already exists.
    /// Returns the path that was written.
    ///
    /// # Errors
    ///
    /// Returns `DumpError::FileWrite` if the file cannot be opened or written,
    /// including when the title contains path components that do not resolve
    /// to an existing directory.
    pub fn dump(&self, title: &str, body: &[u8]) -> DumpResult<PathBuf> {
        let path = self.cfg.dump_path(title);

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(DUMP_FILE_MODE)
            .open(&path)
            .map_err(DumpError::FileWrite)?;

        file.write_all(body).map_err(DumpError::FileWrite)?;

        Ok(path)
    }
}
