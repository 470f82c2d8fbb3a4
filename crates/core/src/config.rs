//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core
//! services. This avoids reading process-wide environment variables during
//! request handling, which can lead to inconsistent behaviour in
//! multi-threaded runtimes and test harnesses.

use crate::constants::DUMP_FILE_EXTENSION;
use crate::{DumpError, DumpResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    data_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `DumpError::InvalidDataDir` if the directory does not exist or
    /// is not a directory.
    pub fn new(data_dir: PathBuf) -> DumpResult<Self> {
        if !data_dir.exists() {
            return Err(DumpError::InvalidDataDir(format!(
                "directory does not exist: {}",
                data_dir.display()
            )));
        }

        if !data_dir.is_dir() {
            return Err(DumpError::InvalidDataDir(format!(
                "path is not a directory: {}",
                data_dir.display()
            )));
        }

        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the dump file for a given payload title.
    ///
    /// The title is used verbatim as a path component; an empty title yields a
    /// file literally named `.json`. No sanitisation is applied.
    pub fn dump_path(&self, title: &str) -> PathBuf {
        self.data_dir
            .join(format!("{}{}", title, DUMP_FILE_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_new_success() {
        let temp = TempDir::new().unwrap();
        let cfg = CoreConfig::new(temp.path().to_path_buf()).unwrap();

        assert_eq!(cfg.data_dir(), temp.path());
    }

    #[test]
    fn test_config_dir_not_exists() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("non-existent");

        let cfg = CoreConfig::new(missing);

        assert!(matches!(cfg, Err(DumpError::InvalidDataDir(_))));
    }

    #[test]
    fn test_config_dir_not_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "not a directory").unwrap();

        let cfg = CoreConfig::new(file);

        assert!(matches!(cfg, Err(DumpError::InvalidDataDir(_))));
    }

    #[test]
    fn test_dump_path_appends_extension() {
        let temp = TempDir::new().unwrap();
        let cfg = CoreConfig::new(temp.path().to_path_buf()).unwrap();

        assert_eq!(cfg.dump_path("bench1"), temp.path().join("bench1.json"));
    }

    #[test]
    fn test_dump_path_empty_title() {
        let temp = TempDir::new().unwrap();
        let cfg = CoreConfig::new(temp.path().to_path_buf()).unwrap();

        assert_eq!(cfg.dump_path(""), temp.path().join(".json"));
    }
}
