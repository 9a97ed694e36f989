//! Error types for sheet construction.

use thiserror::Error;

/// Errors that can occur while building a sheet.
///
/// All of these are terminal for the sheet under construction: a sheet is
/// either fully valid or rejected outright.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SheetError {
    /// Cell text is neither an integer literal nor a sum formula.
    #[error("malformed cell {text:?}")]
    MalformedCell { text: String },

    /// A column label outside the A..ZZZ domain.
    #[error("unknown column {name:?}")]
    UnknownColumn { name: String },

    /// A reference that falls outside the sheet's extent.
    #[error("reference {reference} is outside the sheet")]
    OutOfBounds { reference: String },

    /// A formula chain that leads back to one of its own cells.
    #[error("circular reference involving cell {cell}")]
    CircularReference { cell: String },

    /// The raw matrix is empty or not rectangular.
    #[error("sheet shape mismatch: {message}")]
    ShapeMismatch { message: String },
}

pub type Result<T> = std::result::Result<T, SheetError>;
