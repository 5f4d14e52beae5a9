use csv::ByteRecord;
use log::debug;
use thiserror::Error;

pub mod category;

use category::CategoryList;

#[derive(Debug, Error)]
pub enum CategorizeError {
    #[error("invalid pattern for category '{name}': {source}")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("pattern for category '{name}' is not valid UTF-8")]
    NonUtf8Pattern { name: String },
    #[error("column index {column} is out of range for row {row} with {len} fields")]
    ColumnOutOfRange { row: usize, column: usize, len: usize },
}

/// Returns the name of the first category matching the row, or an empty slice.
///
/// Columns are tested in the given order and, for each column, categories in
/// list order. The first (column, category) pair that matches stops the scan,
/// so an earlier column always takes precedence over a later one.
///
/// Every column index is checked against the row before matching starts.
/// `row_number` is only used to report an out of range column.
pub fn classify<'a>(
    row: &ByteRecord,
    row_number: usize,
    columns: &[usize],
    categories: &'a CategoryList,
) -> Result<&'a [u8], CategorizeError> {
    if let Some(&column) = columns.iter().find(|&&column| column >= row.len()) {
        return Err(CategorizeError::ColumnOutOfRange {
            row: row_number,
            column,
            len: row.len(),
        });
    }

    for &column in columns {
        if let Some(category) = categories.find_match(&row[column]) {
            debug!(
                "row {} matched category={} on column={}",
                row_number,
                String::from_utf8_lossy(category.name()),
                column
            );
            return Ok(category.name().as_slice());
        }
    }

    Ok(&[][..])
}

/// Appends the matched category to a copy of every row. Rows are numbered
/// from 1 in error messages.
pub fn annotate(
    rows: &[ByteRecord],
    columns: &[usize],
    categories: &CategoryList,
) -> Result<Vec<ByteRecord>, CategorizeError> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| {
            let category = classify(row, idx + 1, columns, categories)?;
            let mut annotated = row.clone();
            annotated.push_field(category);
            Ok(annotated)
        })
        .collect()
}
