use std::io::Error as IoError;
use thiserror::Error;

/// Crate-wide error type.
#[derive(Error, Debug)]
pub enum FilterError {
    // Configuration errors, all reported before any input is read
    #[error("invalid define name \"{0}\"")]
    InvalidDefineName(String),
    #[error("config file error: {0}")]
    Config(String),
    #[error("response file error: {0}")]
    ResponseFile(String),

    // Directive-balance errors, reported at the offending line
    #[error("@else without @ifdef")]
    ElseWithoutIfdef,
    #[error("@endif without @ifdef")]
    EndifWithoutIfdef,
    #[error("end of input with {0} unterminated @ifdef block(s)")]
    UnterminatedBlocks(usize),

    #[error("IO error: {0}")]
    Io(#[from] IoError),
}

/// Result alias used across the crate.
pub type FilterResult<T> = Result<T, FilterError>;
