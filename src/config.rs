use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

pub const DEFAULT_COLUMNS: &str = "1";
pub const DEFAULT_SEPARATOR: &str = ",";

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid column index '{0}'")]
    InvalidColumnIndex(String),
    #[error("no column index given")]
    NoColumns,
    #[error("separator must be a single ASCII character other than a quote or line break, got {0:?}")]
    InvalidSeparator(String),
}

#[derive(Debug, Parser)]
#[command(name = "categorize")]
#[command(about = "Add a category column to a transactions CSV by matching columns against regular expressions")]
#[command(version)]
pub struct Cli {
    /// Categories file, one `name,regex` pair per line, no header
    pub categories: PathBuf,

    /// Transactions file to categorize
    pub transactions: PathBuf,

    /// Output file, the transactions plus a Category column
    pub output: PathBuf,

    /// Comma-separated 0-based indices of the columns to match, in priority order
    #[arg(default_value = DEFAULT_COLUMNS)]
    pub columns: String,

    /// Field separator of the transactions file (`\t` or `tab` for tabs)
    #[arg(default_value = DEFAULT_SEPARATOR)]
    pub separator: String,

    /// The transactions file has no header row
    #[arg(long)]
    pub no_header: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub categories_path: PathBuf,
    pub transactions_path: PathBuf,
    pub output_path: PathBuf,
    pub column_indices: Vec<usize>,
    pub separator: u8,
    pub has_header: bool,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Config {
            column_indices: parse_column_indices(&cli.columns)?,
            separator: parse_separator(&cli.separator)?,
            categories_path: cli.categories,
            transactions_path: cli.transactions,
            output_path: cli.output,
            has_header: !cli.no_header,
        })
    }
}

/// Parses `"2,1"` into `[2, 1]`, keeping the given order.
pub fn parse_column_indices(value: &str) -> Result<Vec<usize>, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::NoColumns);
    }

    value
        .split(',')
        .map(|index| {
            index
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidColumnIndex(index.to_string()))
        })
        .collect()
}

pub fn parse_separator(value: &str) -> Result<u8, ConfigError> {
    match value {
        "\\t" | "tab" => Ok(b'\t'),
        _ => match value.as_bytes() {
            [b'"' | b'\r' | b'\n'] => Err(ConfigError::InvalidSeparator(value.to_string())),
            [byte] if byte.is_ascii() => Ok(*byte),
            _ => Err(ConfigError::InvalidSeparator(value.to_string())),
        },
    }
}
