//! Batch input reader.
//!
//! Wire format: the first line holds the number of sheets. Each sheet
//! starts with a "cols rows" header, followed by that many rows of
//! whitespace-separated cell tokens. The reader validates the shape
//! against the headers and hands complete token matrices to the
//! engine; the first bad sheet aborts the whole batch.

use crate::error::{BatchError, Result};
use sumsheet_engine::{ColumnCodec, Sheet};

/// Parse a whole batch of sheets.
pub fn read_batch(input: &str, codec: &ColumnCodec) -> Result<Vec<Sheet>> {
    let mut lines = input.lines().enumerate();

    let (_, count_line) = lines.next().ok_or_else(|| BatchError::Truncated {
        line: 1,
        message: "expected a sheet count".to_string(),
    })?;
    let count: usize = count_line
        .trim()
        .parse()
        .map_err(|_| BatchError::Parse {
            line: 1,
            message: format!("expected a sheet count, got {:?}", count_line.trim()),
        })?;

    let mut last_line = 1;
    let mut sheets = Vec::with_capacity(count);
    for _ in 0..count {
        let (header_idx, header) = lines.next().ok_or_else(|| BatchError::Truncated {
            line: last_line,
            message: format!("expected {} sheets, found {}", count, sheets.len()),
        })?;
        let header_line = header_idx + 1;
        last_line = header_line;

        let (cols, rows) = parse_header(header).ok_or_else(|| BatchError::Parse {
            line: header_line,
            message: format!("expected \"cols rows\", got {:?}", header.trim()),
        })?;

        let mut matrix = Vec::with_capacity(rows);
        for _ in 0..rows {
            let (row_idx, row_line) = lines.next().ok_or_else(|| BatchError::Truncated {
                line: last_line,
                message: format!("expected {} rows, found {}", rows, matrix.len()),
            })?;
            last_line = row_idx + 1;

            let tokens: Vec<String> = row_line.split_whitespace().map(str::to_string).collect();
            if tokens.len() != cols {
                return Err(BatchError::Parse {
                    line: last_line,
                    message: format!("row has {} cells, expected {}", tokens.len(), cols),
                });
            }
            matrix.push(tokens);
        }

        let sheet = Sheet::new(codec, &matrix).map_err(|e| BatchError::Parse {
            line: header_line,
            message: format!("sheet starting here is invalid: {}", e),
        })?;
        sheets.push(sheet);
    }

    Ok(sheets)
}

/// Parse a "cols rows" header into two positive counts.
fn parse_header(line: &str) -> Option<(usize, usize)> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.as_slice() {
        [cols, rows] => {
            let cols = cols.parse().ok().filter(|&c: &usize| c > 0)?;
            let rows = rows.parse().ok().filter(|&r: &usize| r > 0)?;
            Some((cols, rows))
        }
        _ => None,
    }
}
