//! Shared utilities for the data tools crates.
//!
//! Every table handled by the workspace is a Polars `DataFrame` whose
//! columns are all `String` typed, with nulls standing for absent values.
//! This crate holds the helpers that read and build such frames.

pub mod frame;

// Re-export commonly used functions at crate root for convenience
pub use frame::{
    any_to_string, column_names, format_numeric, frame_from_columns, is_blank, string_column,
    string_values,
};
