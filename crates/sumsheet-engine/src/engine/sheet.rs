//! Sheet construction, reference resolution, and evaluation.
//!
//! A sheet is built in one shot from a matrix of raw cell tokens:
//! every cell is parsed, every formula reference is resolved to a
//! coordinate, and the reference graph is checked for cycles, in that
//! order. Values are then filled in by a single explicit [`Sheet::compute`]
//! pass; after that the sheet is read-only.

use regex::Regex;
use std::sync::OnceLock;

use super::cell::Cell;
use super::cell_ref::CellRef;
use super::columns::ColumnCodec;
use super::cycle::detect_cycle;
use super::parse::{ParsedCell, parse_cell};
use crate::error::SheetError;

fn ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Z]{1,3})(\d{1,3})$").unwrap())
}

/// A fixed-size grid of cells.
#[derive(Debug)]
pub struct Sheet {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
}

impl Sheet {
    /// Build a sheet from a matrix of raw cell tokens.
    ///
    /// Fails on the first problem found: a non-rectangular matrix, a
    /// malformed cell (all cells are parsed before any reference is
    /// resolved), a reference outside the sheet, or a circular
    /// reference. There is no partial construction.
    pub fn new(codec: &ColumnCodec, matrix: &[Vec<String>]) -> Result<Sheet, SheetError> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(SheetError::ShapeMismatch {
                message: "sheet has no cells".to_string(),
            });
        }

        let mut parsed = Vec::with_capacity(rows);
        for row in matrix {
            if row.len() != cols {
                return Err(SheetError::ShapeMismatch {
                    message: format!("row has {} cells, expected {}", row.len(), cols),
                });
            }
            let mut parsed_row = Vec::with_capacity(cols);
            for text in row {
                parsed_row.push((text.as_str(), parse_cell(text)?));
            }
            parsed.push(parsed_row);
        }

        let mut sheet = Sheet {
            rows,
            cols,
            grid: Vec::with_capacity(rows),
        };
        for parsed_row in parsed {
            let mut cells = Vec::with_capacity(cols);
            for (text, cell) in parsed_row {
                cells.push(match cell {
                    ParsedCell::Literal(n) => Cell::literal(text, n),
                    ParsedCell::Formula(refs) => {
                        let coords = refs
                            .iter()
                            .map(|r| sheet.resolve(codec, r))
                            .collect::<Result<Vec<_>, _>>()?;
                        Cell::formula(text, coords)
                    }
                });
            }
            sheet.grid.push(cells);
        }

        // Every cell runs its own depth-first search; no visited state
        // is carried across starting cells.
        for row in 0..rows {
            for col in 0..cols {
                if let Some(path) = detect_cycle(CellRef::new(row, col), &sheet) {
                    let on_cycle = path.last().copied().unwrap_or(CellRef::new(row, col));
                    return Err(SheetError::CircularReference {
                        cell: on_cycle.to_a1(codec),
                    });
                }
            }
        }

        Ok(sheet)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell at a coordinate, if in bounds.
    pub fn get(&self, coord: CellRef) -> Option<&Cell> {
        self.grid.get(coord.row)?.get(coord.col)
    }

    /// Resolve an A1-style reference to a coordinate within this sheet.
    pub fn resolve(&self, codec: &ColumnCodec, reference: &str) -> Result<CellRef, SheetError> {
        let caps = ref_re()
            .captures(reference)
            .ok_or_else(|| SheetError::MalformedCell {
                text: reference.to_string(),
            })?;
        let letters = &caps[1];
        let digits = &caps[2];

        let col = codec.index(letters).ok_or_else(|| SheetError::UnknownColumn {
            name: letters.to_string(),
        })?;
        // 1-3 digits always parse; row 0 has no cell.
        let row: usize = digits.parse().map_err(|_| SheetError::MalformedCell {
            text: reference.to_string(),
        })?;
        if row == 0 {
            return Err(SheetError::OutOfBounds {
                reference: reference.to_string(),
            });
        }

        let coord = CellRef::new(row - 1, col as usize - 1);
        if coord.row >= self.rows || coord.col >= self.cols {
            return Err(SheetError::OutOfBounds {
                reference: reference.to_string(),
            });
        }
        Ok(coord)
    }

    /// Fill in every formula's value.
    ///
    /// Each cell is computed exactly once: a cell whose value is already
    /// known (a literal, or a formula reached earlier through another
    /// cell) returns it from the memo, so shared ancestors are never
    /// summed twice. Construction has ruled out cycles, so the recursion
    /// terminates without re-checking.
    pub fn compute(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                self.compute_cell(CellRef::new(row, col));
            }
        }
    }

    fn compute_cell(&mut self, coord: CellRef) -> i64 {
        if let Some(value) = self.grid[coord.row][coord.col].value {
            return value;
        }

        let deps = self.grid[coord.row][coord.col].depends_on().to_vec();
        let mut total = 0;
        for dep in deps {
            total += self.compute_cell(dep);
        }
        self.grid[coord.row][coord.col].value = Some(total);
        total
    }

    /// Render the grid as rows of space-separated values, in input
    /// order, with formulas replaced by their computed value. A cell
    /// that has not been computed falls back to its raw text.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.grid {
            let line: Vec<String> = row
                .iter()
                .map(|cell| match cell.value {
                    Some(v) => v.to_string(),
                    None => cell.raw.clone(),
                })
                .collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }
}
