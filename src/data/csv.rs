//! CSV parsing for labelled tabular data.
//!
//! Supported format:
//! - UTF-8, comma-separated
//! - Optional header row (auto-detected: first row is a header if it contains
//!   any non-numeric, non-empty cell)
//! - Double-quoted fields with embedded commas are handled correctly
//! - A numeric cell with a trailing `%` is read as a percentage (`12.5%` → 0.125)
//! - The last column is the raw class value (an integer, `2` or `2.0`); all
//!   other columns are features

use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Rows exactly as read from the file, before any class remapping.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub features: Vec<Vec<f64>>,
    pub classes: Vec<i64>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Parses CSV bytes into feature rows and raw class values.
pub fn parse_csv(data: &[u8]) -> Result<RawTable> {
    let text = std::str::from_utf8(data)
        .map_err(|_| Error::Parse("CSV file is not valid UTF-8".into()))?;

    let mut lines = text.lines().peekable();

    // Auto-detect header: skip first line if any cell is non-numeric.
    if let Some(first) = lines.peek() {
        if is_header(first) {
            lines.next();
        }
    }

    let mut features: Vec<Vec<f64>> = Vec::new();
    let mut classes: Vec<i64> = Vec::new();

    for (row_idx, line) in lines.enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells = parse_csv_row(line);
        let row_num = row_idx + 1;
        let Some((class_cell, feature_cells)) = cells.split_last() else {
            continue;
        };
        if feature_cells.is_empty() {
            return Err(Error::Parse(format!(
                "Row {}: expected at least 2 columns (features + class), got {}",
                row_num,
                cells.len()
            )));
        }

        features.push(parse_floats(feature_cells, row_num)?);
        classes.push(parse_class(class_cell, row_num)?);
    }

    if features.is_empty() {
        return Err(Error::Parse("CSV contains no data rows after parsing".into()));
    }

    // Verify all rows have the same feature width.
    let n_feats = features[0].len();
    for (i, row) in features.iter().enumerate() {
        if row.len() != n_feats {
            return Err(Error::Parse(format!(
                "Row {}: feature count {} does not match first row's {}",
                i + 1, row.len(), n_feats
            )));
        }
    }

    Ok(RawTable { features, classes })
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Returns `true` if the row looks like a header (any cell non-numeric).
fn is_header(line: &str) -> bool {
    let cells = parse_csv_row(line);
    cells.iter().any(|c| {
        let t = c.trim();
        !t.is_empty() && parse_number(t).is_none()
    })
}

/// Parses a single CSV row, handling double-quoted fields.
fn parse_csv_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                // Escaped quote inside quoted field.
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// A plain float, or a percentage scaled down by 100.
fn parse_number(cell: &str) -> Option<f64> {
    match cell.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok().map(|v| v / 100.0),
        None => cell.parse::<f64>().ok(),
    }
}

/// Parses a slice of string cells as `f64`, returning an error with row info on failure.
fn parse_floats(cells: &[String], row_num: usize) -> Result<Vec<f64>> {
    cells.iter()
        .map(|c| match parse_number(c.trim()) {
            Some(v) if v.is_finite() => Ok(v),
            Some(_) => Err(Error::Parse(format!(
                "Row {}: '{}' is not a finite number",
                row_num, c
            ))),
            None => Err(Error::Parse(format!(
                "Row {}: '{}' is not a valid number",
                row_num, c
            ))),
        })
        .collect()
}

/// Largest magnitude at which every integer is still exact in an `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn parse_class(cell: &str, row_num: usize) -> Result<i64> {
    let t = cell.trim();
    if let Ok(v) = t.parse::<i64>() {
        return Ok(v);
    }
    match t.parse::<f64>() {
        Ok(v) if v.fract() == 0.0 && v.abs() <= MAX_EXACT_INTEGER => Ok(v as i64),
        _ => Err(Error::Parse(format!(
            "Row {}: class '{}' is not an integer",
            row_num, cell
        ))),
    }
}
