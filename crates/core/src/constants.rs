//! Shared constants for dump persistence.

/// Extension appended to the payload title to form the output filename.
pub const DUMP_FILE_EXTENSION: &str = ".json";

/// Default data directory when no override is supplied (process working directory).
pub const DEFAULT_DATA_DIR: &str = ".";

/// Unix mode for dump files: owner read/write, group/other read.
pub const DUMP_FILE_MODE: u32 = 0o644;
