//! Column label codec.
//!
//! Spreadsheet columns are labelled A, B, ..., Z, AA, AB, ..., ZZ,
//! AAA, ..., ZZZ, corresponding to the numbers 1 through 18278. The
//! letters act as a bijective base-26 numeral system: there is no zero
//! digit, so "A" is 1 and "AA" is 27, not 0 and 00.

use std::collections::HashMap;

/// Number of addressable columns (26 + 26^2 + 26^3).
pub const COLUMN_COUNT: u32 = 18_278;

/// Bidirectional mapping between column labels and 1-based indices.
///
/// Built once and shared by reference into whatever needs it; never
/// mutated after construction.
#[derive(Debug)]
pub struct ColumnCodec {
    names: Vec<String>,
    indices: HashMap<String, u32>,
}

impl ColumnCodec {
    pub fn new() -> ColumnCodec {
        let mut names = Vec::with_capacity(COLUMN_COUNT as usize);
        for a in 'A'..='Z' {
            names.push(a.to_string());
        }
        for a in 'A'..='Z' {
            for b in 'A'..='Z' {
                names.push(format!("{a}{b}"));
            }
        }
        for a in 'A'..='Z' {
            for b in 'A'..='Z' {
                for c in 'A'..='Z' {
                    names.push(format!("{a}{b}{c}"));
                }
            }
        }

        let indices = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i as u32 + 1))
            .collect();

        ColumnCodec { names, indices }
    }

    /// 1-based index of a column label, if it is in the A..ZZZ domain.
    pub fn index(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    /// Label for a 1-based index in `[1, COLUMN_COUNT]`.
    pub fn name(&self, index: u32) -> Option<&str> {
        index
            .checked_sub(1)
            .and_then(|i| self.names.get(i as usize))
            .map(String::as_str)
    }
}

impl Default for ColumnCodec {
    fn default() -> Self {
        Self::new()
    }
}
