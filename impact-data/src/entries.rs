//! CSV loader for purchase submissions.
//!
//! Each row is one "add purchase" submission. Impact is not read from the
//! file; it is computed when the entry is added to a session.
//!
//! ## CSV Format
//!
//! Column order does **not** matter (headers are matched by name). Unknown
//! columns, such as `impact` in a file produced by the exporter, are ignored.
//!
//! | Column         | Required | Type    | Notes                                       |
//! |----------------|----------|---------|---------------------------------------------|
//! | `date`         | yes      | date    | `YYYY-MM-DD`                                |
//! | `product_type` | yes      | string  | Category name                               |
//! | `product_name` | no       | string  |                                             |
//! | `brand`        | no       | string  | Required later if the session policy says so|
//! | `price`        | yes      | decimal | `,` thousands separators are accepted       |
//! | `eco_brand`    | no       | boolean | `true/false`, `yes/no`, `1/0`; empty = false|
//!
//! ### Minimal example
//!
//! ```csv
//! date,product_type,brand,price
//! 2025-03-02,Electronics,Acme,100.00
//! ```

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use impact_core::PurchaseInput;
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EntryRow {
    date: String,
    product_type: String,
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    brand: Option<String>,
    price: String,
    #[serde(default)]
    eco_brand: Option<String>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading purchase entries.
///
/// Row numbers are 1-based and count data rows only (the header is row 0).
#[derive(Debug, Error)]
pub enum EntryLoadError {
    /// Bad CSV structure, a missing required column, etc.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("invalid date '{value}' on row {row}, expected YYYY-MM-DD")]
    InvalidDate { value: String, row: usize },

    #[error("invalid price '{value}' on row {row}")]
    InvalidPrice { value: String, row: usize },

    #[error("invalid eco_brand flag '{value}' on row {row}")]
    InvalidFlag { value: String, row: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EntryLoadError {
    /// Data row the error refers to, when known.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::InvalidDate { row, .. }
            | Self::InvalidPrice { row, .. }
            | Self::InvalidFlag { row, .. } => Some(*row),
            // The header is record 0, so the record index is the data row.
            Self::Parse(err) => err.position().map(|pos| pos.record() as usize),
            Self::Io(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

/// Trims whitespace and removes `,` thousands separators.
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

fn parse_price(
    value: &str,
    row: usize,
) -> Result<Decimal, EntryLoadError> {
    let normalized = normalize_decimal_input(value);
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %value, row, "invalid price: {}", e);
        EntryLoadError::InvalidPrice {
            value: value.to_string(),
            row,
        }
    })
}

fn parse_date(
    value: &str,
    row: usize,
) -> Result<NaiveDate, EntryLoadError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EntryLoadError::InvalidDate {
        value: value.to_string(),
        row,
    })
}

fn parse_flag(
    value: Option<&str>,
    row: usize,
) -> Result<bool, EntryLoadError> {
    let Some(value) = value else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "false" | "no" | "n" | "0" => Ok(false),
        "true" | "yes" | "y" | "1" => Ok(true),
        _ => Err(EntryLoadError::InvalidFlag {
            value: value.to_string(),
            row,
        }),
    }
}

/// Convert a single CSV row into a PurchaseInput.
///
/// row_number is 1-based (for error messages).
fn convert_row(
    row: EntryRow,
    row_number: usize,
) -> Result<PurchaseInput, EntryLoadError> {
    Ok(PurchaseInput {
        date: parse_date(&row.date, row_number)?,
        category: row.product_type,
        product_name: row.product_name,
        brand: row.brand,
        price: parse_price(&row.price, row_number)?,
        eco_brand: parse_flag(row.eco_brand.as_deref(), row_number)?,
    })
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parses every row independently, in file order.
///
/// A malformed row yields an `Err` in its slot without stopping the rest, so
/// a caller can report it as a rejected submission and carry on.
pub fn parse_entries<R: Read>(reader: R) -> Vec<Result<PurchaseInput, EntryLoadError>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All) // tolerate whitespace around values
        .flexible(false) // strict column count
        .from_reader(reader);

    reader
        .deserialize::<EntryRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            let row_number = idx + 1; // 1-based for user-facing messages
            convert_row(row, row_number)
        })
        .collect()
}

/// Parses all rows, failing on the first malformed one.
///
/// # Errors
///
/// * [`EntryLoadError::Parse`] if the CSV is structurally invalid or a
///   required column is missing.
/// * [`EntryLoadError::InvalidDate`], [`EntryLoadError::InvalidPrice`],
///   [`EntryLoadError::InvalidFlag`] for malformed cells.
pub fn load_entries<R: Read>(reader: R) -> Result<Vec<PurchaseInput>, EntryLoadError> {
    parse_entries(reader).into_iter().collect()
}

/// Convenience wrapper: open a file and delegate to [`parse_entries`].
///
/// # Errors
///
/// Returns [`EntryLoadError::Io`] when the file cannot be opened.
pub fn load_entries_from_file(
    path: &Path
) -> Result<Vec<Result<PurchaseInput, EntryLoadError>>, EntryLoadError> {
    let file = std::fs::File::open(path)?;
    Ok(parse_entries(file))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
