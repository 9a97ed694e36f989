//! Spreadsheet engine API.

mod cell;
mod cell_ref;
mod columns;
mod cycle;
mod parse;
mod sheet;

pub use cell::{Cell, CellKind};
pub use cell_ref::CellRef;
pub use columns::{COLUMN_COUNT, ColumnCodec};
pub use cycle::detect_cycle;
pub use parse::{ParsedCell, parse_cell};
pub use sheet::Sheet;
