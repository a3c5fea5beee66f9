//! Column pruning for response files.

use polars::prelude::DataFrame;
use tracing::debug;

use crate::error::Result;

/// Name fragments of system-generated columns, matched case-insensitively.
pub const METADATA_KEYWORDS: [&str; 4] = ["requestid", "timestamp", "merchantid", "statuscode"];

/// Remove every column without a single present value.
///
/// A table with no rows therefore loses all its columns.
pub fn drop_empty_columns(df: &DataFrame) -> Result<DataFrame> {
    keep_columns(df, |df, name| {
        df.column(name)
            .is_ok_and(|column| column.null_count() < column.len())
    })
}

/// Remove columns whose name contains a metadata keyword.
pub fn drop_metadata_columns(df: &DataFrame) -> Result<DataFrame> {
    keep_columns(df, |_, name| !is_metadata_column(name))
}

/// Empty columns first, then metadata columns.
pub fn clean_metadata(df: &DataFrame) -> Result<DataFrame> {
    drop_metadata_columns(&drop_empty_columns(df)?)
}

pub fn is_metadata_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    METADATA_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
}

fn keep_columns(df: &DataFrame, keep: impl Fn(&DataFrame, &str) -> bool) -> Result<DataFrame> {
    let names = df.get_column_names();
    let selection: Vec<&str> = names
        .iter()
        .map(|name| name.as_str())
        .filter(|name| keep(df, name))
        .collect();
    if selection.len() < names.len() {
        debug!(
            dropped = names.len() - selection.len(),
            kept = selection.len(),
            "columns pruned"
        );
    }
    Ok(df.select(selection)?)
}
