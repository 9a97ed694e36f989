//! Cell text parsing.
//!
//! A cell is either an integer literal ("7", leading zeros allowed) or
//! a sum formula: an equals sign followed by one or more cell
//! references joined by plus signs ("=A1+B2+C3").

use regex::Regex;
use std::sync::OnceLock;

use crate::error::SheetError;

/// A cell as parsed from its raw text. Formula references are still
/// textual at this point; resolution to coordinates happens when the
/// sheet is built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedCell {
    Literal(i64),
    /// References in source order, never empty.
    Formula(Vec<String>),
}

fn literal_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+$").unwrap())
}

fn formula_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^=[A-Z]{1,3}\d{1,3}(?:\+[A-Z]{1,3}\d{1,3})*$").unwrap())
}

/// Parse one cell's raw text.
///
/// Checks syntax only: whether a reference actually lands inside the
/// sheet is decided later, when it is resolved to a coordinate.
pub fn parse_cell(text: &str) -> Result<ParsedCell, SheetError> {
    if literal_re().is_match(text) {
        // A digit run too long for i64 is rejected rather than wrapped.
        return match text.parse::<i64>() {
            Ok(n) => Ok(ParsedCell::Literal(n)),
            Err(_) => Err(SheetError::MalformedCell {
                text: text.to_string(),
            }),
        };
    }

    if formula_re().is_match(text) {
        let refs = text[1..].split('+').map(str::to_string).collect();
        return Ok(ParsedCell::Formula(refs));
    }

    Err(SheetError::MalformedCell {
        text: text.to_string(),
    })
}
