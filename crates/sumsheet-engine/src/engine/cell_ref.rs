//! Cell coordinates.

use super::columns::ColumnCodec;

/// A cell position as zero-based row and column indices.
///
/// Equality and hashing are by the index pair; the canonical A1-style
/// name can always be reconstructed with [`CellRef::to_a1`].
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// A1-style name for this coordinate (row 0, col 0 -> "A1").
    ///
    /// Columns past ZZZ cannot be named by a reference, so those fall
    /// back to an R1C1-style rendering for diagnostics.
    pub fn to_a1(&self, codec: &ColumnCodec) -> String {
        match codec.name(self.col as u32 + 1) {
            Some(letters) => format!("{}{}", letters, self.row + 1),
            None => format!("R{}C{}", self.row + 1, self.col + 1),
        }
    }
}
