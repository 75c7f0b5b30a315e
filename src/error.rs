use thiserror::Error;

/// Errors produced while generating, writing or reading a sequence.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (unwritable path, missing file, broken pipe)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed FASTA input
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Input stream ended before a value was supplied
    #[error("input closed while waiting for {0}")]
    InputClosed(String),
}

pub type Result<T> = std::result::Result<T, Error>;
