//! Cell data structures.

use super::cell_ref::CellRef;

/// The content of a cell after parsing and reference resolution.
#[derive(Clone, Debug)]
pub enum CellKind {
    /// An integer literal.
    Literal(i64),
    /// A sum over other cells. Coordinates are resolved at sheet
    /// construction, kept in formula source order, and never empty.
    Formula(Vec<CellRef>),
}

/// One grid position.
#[derive(Clone, Debug)]
pub struct Cell {
    /// The original token as it appeared in the input.
    pub raw: String,
    pub kind: CellKind,
    /// Resolved value: `Some` from construction for literals, filled in
    /// by the evaluation pass for formulas. An explicit flag rather than
    /// a sentinel, so a computed 0 is never mistaken for "not yet
    /// computed".
    pub value: Option<i64>,
}

impl Cell {
    pub fn literal(raw: &str, value: i64) -> Cell {
        Cell {
            raw: raw.to_string(),
            kind: CellKind::Literal(value),
            value: Some(value),
        }
    }

    pub fn formula(raw: &str, refs: Vec<CellRef>) -> Cell {
        Cell {
            raw: raw.to_string(),
            kind: CellKind::Formula(refs),
            value: None,
        }
    }

    /// Coordinates this cell depends on (empty for literals).
    pub fn depends_on(&self) -> &[CellRef] {
        match &self.kind {
            CellKind::Literal(_) => &[],
            CellKind::Formula(refs) => refs,
        }
    }
}
