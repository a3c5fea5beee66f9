//! Error types for record table ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or writing a table.
///
/// `origin` is the file path or the uploaded file name.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write output file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Parsing Errors ===
    /// Encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {origin}")]
    UnsupportedEncoding {
        origin: String,
        encoding: &'static str,
    },

    /// Malformed CSV content.
    #[error("failed to parse CSV {origin}: {message}")]
    CsvParse { origin: String, message: String },

    /// Failed to open or read an Excel workbook.
    #[error("failed to read workbook {origin}: {message}")]
    Excel { origin: String, message: String },

    /// File has no content at all.
    #[error("file is empty: {origin}")]
    EmptyFile { origin: String },

    /// Header row missing or made only of blank names.
    #[error("no header row in {origin}")]
    NoHeader { origin: String },

    /// A data row has more cells than the header.
    #[error("row {row} of {origin} has {found} cells, header has {expected}")]
    RaggedRow {
        origin: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    /// Failed CSV serialization.
    #[error("failed to encode CSV: {message}")]
    CsvWrite { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
