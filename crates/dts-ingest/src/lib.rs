//! Loading and writing record tables.
//!
//! Uploaded files are CSV or Excel workbooks. Every cell is read as text so
//! identifiers such as phone numbers and PANs are never reinterpreted as
//! numbers; empty cells become nulls.

mod csv_reader;
pub mod error;
mod excel;
mod writer;

use std::collections::HashMap;
use std::path::Path;

use polars::prelude::DataFrame;
use tracing::info;

pub use csv_reader::{read_csv, read_csv_from_reader};
pub use error::{IngestError, Result};
pub use excel::{read_excel, read_excel_from_bytes};
pub use writer::{write_csv, write_csv_to};

/// Kind of upload, decided from the file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Excel,
}

impl SourceFormat {
    /// Excel for `.xlsx`, `.xlsm` and `.xls` names (any case), CSV otherwise.
    pub fn from_name(name: &str) -> Self {
        let lower = name.to_ascii_lowercase();
        if [".xlsx", ".xlsm", ".xls"]
            .iter()
            .any(|ext| lower.ends_with(ext))
        {
            Self::Excel
        } else {
            Self::Csv
        }
    }
}

/// Load a table from disk, dispatching on the file extension.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    let name = path.to_string_lossy();
    let df = match SourceFormat::from_name(&name) {
        SourceFormat::Excel => read_excel(path)?,
        SourceFormat::Csv => read_csv(path)?,
    };
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "table loaded"
    );
    Ok(df)
}

/// Load a table from uploaded bytes and the uploaded file name.
pub fn load_upload(name: &str, bytes: &[u8]) -> Result<DataFrame> {
    let df = match SourceFormat::from_name(name) {
        SourceFormat::Excel => read_excel_from_bytes(name, bytes)?,
        SourceFormat::Csv => read_csv_from_reader(name, bytes)?,
    };
    info!(
        upload = %name,
        rows = df.height(),
        columns = df.width(),
        "upload loaded"
    );
    Ok(df)
}

/// Make header names usable as column names.
///
/// Blank names become `Unnamed: {idx}`. A repeated name gets the next free
/// `.{n}` suffix, so `a, a, a.1` loads as `a, a.1, a.1.1`.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    headers
        .into_iter()
        .enumerate()
        .map(|(idx, header)| {
            let mut name = if header.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                header
            };
            let mut count = counts.get(&name).copied().unwrap_or(0);
            while count > 0 {
                counts.insert(name.clone(), count + 1);
                name = format!("{name}.{count}");
                count = counts.get(&name).copied().unwrap_or(0);
            }
            counts.insert(name.clone(), count + 1);
            name
        })
        .collect()
}

/// Turn parsed header and rows into a frame with unique column names.
pub(crate) fn build_frame(
    origin: &str,
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
) -> Result<DataFrame> {
    if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
        return Err(IngestError::NoHeader {
            origin: origin.to_string(),
        });
    }
    let headers = unique_headers(headers);
    let mut columns: Vec<(String, Vec<Option<String>>)> = headers
        .into_iter()
        .map(|header| (header, Vec::with_capacity(rows.len())))
        .collect();
    for row in rows {
        for (idx, value) in row.into_iter().enumerate() {
            columns[idx].1.push(value);
        }
    }
    Ok(dts_common::frame_from_columns(columns)?)
}
