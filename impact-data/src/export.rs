//! CSV export of purchase records.
//!
//! ## CSV Format
//!
//! | Column         | Type    | Notes                                  |
//! |----------------|---------|----------------------------------------|
//! | `date`         | date    | ISO-8601, e.g. `2025-03-14`            |
//! | `product_type` | string  | Category name                          |
//! | `product_name` | string  | `—` when no name was given             |
//! | `brand`        | string  | Empty when no brand was given          |
//! | `price`        | decimal | `.` as decimal separator               |
//! | `impact`       | decimal | Rounded to two places                  |
//! | `eco_brand`    | boolean | `true` / `false`                       |
//!
//! The header row is always written, even for an empty export.
//!
//! ```csv
//! date,product_type,product_name,brand,price,impact,eco_brand
//! 2025-03-02,Electronics,Laptop,Acme,100.00,35.00,false
//! ```

use std::io::{Read, Write};

use impact_core::PurchaseRecord;
use thiserror::Error;
use tracing::debug;

/// Column order of every export.
pub const CSV_HEADER: [&str; 7] = [
    "date",
    "product_type",
    "product_name",
    "brand",
    "price",
    "impact",
    "eco_brand",
];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes the header and one row per record to `writer`.
pub fn write_csv<'a, W, I>(
    writer: W,
    records: I,
) -> Result<usize, ExportError>
where
    W: Write,
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;

    let mut rows = 0;
    for record in records {
        csv_writer.serialize(record)?;
        rows += 1;
    }
    csv_writer.flush()?;

    debug!(rows, "wrote purchase CSV");
    Ok(rows)
}

/// Encodes records as UTF-8 CSV bytes.
///
/// # Errors
///
/// Returns [`ExportError`] only if serialization itself fails; an empty
/// input produces just the header row.
pub fn to_csv<'a, I>(records: I) -> Result<Vec<u8>, ExportError>
where
    I: IntoIterator<Item = &'a PurchaseRecord>,
{
    let mut buffer = Vec::new();
    write_csv(&mut buffer, records)?;
    Ok(buffer)
}

/// Reads records back from the export format, in file order.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<PurchaseRecord>, ExportError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: PurchaseRecord = result?;
        records.push(record);
    }

    Ok(records)
}
