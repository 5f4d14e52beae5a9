use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ByteRecord;
use log::debug;

use crate::categorizer::category::{CategoryList, CategoryRecord};

pub const CATEGORY_COLUMN: &str = "Category";

/// Rows of a transactions file with the header, if any, split off. Fields are
/// raw bytes so files in legacy encodings pass through untouched.
#[derive(Debug, Default, PartialEq)]
pub struct Transactions {
    pub header: Option<ByteRecord>,
    pub rows: Vec<ByteRecord>,
}

/// Reads a headerless `name,pattern` file. Rows without exactly two fields are
/// ignored, and patterns that fail to compile are skipped.
pub fn load_categories(file_path: impl AsRef<Path>) -> Result<CategoryList> {
    let file_path = file_path.as_ref();
    let file =
        File::open(file_path).with_context(|| format!("failed to open categories file {}", file_path.display()))?;
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = Vec::new();
    for record in csv_reader.byte_records() {
        let record = record.with_context(|| format!("failed to read categories file {}", file_path.display()))?;
        if record.len() != 2 {
            debug!("ignoring category row with {} fields, record={:?}", record.len(), record);
            continue;
        }

        records.push(CategoryRecord::new(&record[0], &record[1]));
    }

    Ok(CategoryList::from_records(records))
}

/// Reads the whole transactions file. Every row must have as many fields as
/// the first one, otherwise the file is rejected.
pub fn load_transactions(file_path: impl AsRef<Path>, separator: u8, has_header: bool) -> Result<Transactions> {
    let file_path = file_path.as_ref();
    let file =
        File::open(file_path).with_context(|| format!("failed to open transactions file {}", file_path.display()))?;
    let csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(separator)
        .from_reader(file);

    let mut rows = csv_reader
        .into_byte_records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read transactions file {}", file_path.display()))?;

    let header = if has_header && !rows.is_empty() {
        Some(rows.remove(0))
    } else {
        None
    };

    Ok(Transactions { header, rows })
}

/// Writes the annotated rows, appending the category column to the header.
pub fn write_output(
    file_path: impl AsRef<Path>,
    header: Option<&ByteRecord>,
    rows: &[ByteRecord],
    separator: u8,
) -> Result<()> {
    let file_path = file_path.as_ref();
    let mut csv_writer = csv::WriterBuilder::new()
        .delimiter(separator)
        .from_path(file_path)
        .with_context(|| format!("failed to create output file {}", file_path.display()))?;

    if let Some(header) = header {
        let mut header = header.clone();
        header.push_field(CATEGORY_COLUMN.as_bytes());
        csv_writer.write_byte_record(&header)?;
    }

    for row in rows {
        csv_writer.write_byte_record(row)?;
    }

    csv_writer
        .flush()
        .with_context(|| format!("failed to write output file {}", file_path.display()))?;

    Ok(())
}
