//! Error types for the batch reader.

use thiserror::Error;

/// Errors from reading a batch input file. Line numbers are 1-based
/// positions in the input text.
#[derive(Error, Debug)]
pub enum BatchError {
    /// A line that does not fit the declared format, or a sheet the
    /// engine rejected.
    #[error("error in the input at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The input declared more sheets or rows than it contains.
    #[error("input ended at line {line}: {message}")]
    Truncated { line: usize, message: String },
}

pub type Result<T> = std::result::Result<T, BatchError>;
