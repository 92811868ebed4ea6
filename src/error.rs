use thiserror::Error;

/// All error types for linesearch
#[derive(Error, Debug)]
pub enum Error {
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for linesearch operations
pub type Result<T> = std::result::Result<T, Error>;
