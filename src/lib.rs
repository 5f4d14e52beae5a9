use anyhow::{Context, Result};
use log::info;

pub mod categorizer;
pub mod config;
pub mod data;

use config::Config;

/// Counts reported after a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub categories: usize,
    pub rows: usize,
    pub matched: usize,
}

/// Loads the categories and transactions, categorizes every row and writes the
/// output file. Nothing is written if a row fails to categorize.
pub fn run(config: &Config) -> Result<Summary> {
    let categories = data::load_categories(&config.categories_path)?;
    info!("loaded {} categories from {}", categories.len(), config.categories_path.display());

    let transactions = data::load_transactions(&config.transactions_path, config.separator, config.has_header)?;
    info!("loaded {} transactions from {}", transactions.rows.len(), config.transactions_path.display());

    let annotated = categorizer::annotate(&transactions.rows, &config.column_indices, &categories)
        .with_context(|| format!("failed to categorize {}", config.transactions_path.display()))?;

    data::write_output(&config.output_path, transactions.header.as_ref(), &annotated, config.separator)?;

    let matched = annotated
        .iter()
        .filter(|row| row.iter().last().is_some_and(|category| !category.is_empty()))
        .count();
    info!("categorized {} of {} transactions", matched, annotated.len());

    Ok(Summary {
        categories: categories.len(),
        rows: annotated.len(),
        matched,
    })
}
