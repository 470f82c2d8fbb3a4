#[derive(Debug, thiserror::Error)]
pub enum DumpError {
    #[error("invalid data directory: {0}")]
    InvalidDataDir(String),
    #[error("failed to write dump file: {0}")]
    FileWrite(std::io::Error),
}

pub type DumpResult<T> = std::result::Result<T, DumpError>;
