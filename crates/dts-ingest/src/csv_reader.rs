//! CSV reading with every cell kept as text.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::build_frame;
use crate::error::{IngestError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Reject UTF-16 encoded input, which the CSV reader would mangle.
fn check_encoding(origin: &str, bytes: &[u8]) -> Result<()> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                origin: origin.to_string(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                origin: origin.to_string(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

/// Read a CSV file from disk.
pub fn read_csv(path: &Path) -> Result<DataFrame> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    read_csv_from_reader(&path.display().to_string(), bytes.as_slice())
}

/// Read CSV content from any reader. `origin` names the source in errors.
///
/// The first record is the header. Empty cells become nulls, short rows are
/// padded with nulls and rows longer than the header are rejected.
pub fn read_csv_from_reader<R: Read>(origin: &str, mut reader: R) -> Result<DataFrame> {
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| IngestError::CsvParse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
    check_encoding(origin, &content)?;
    let body = content.strip_prefix(UTF8_BOM).unwrap_or(&content);
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyFile {
            origin: origin.to_string(),
        });
    }

    let parse_error = |e: csv::Error| IngestError::CsvParse {
        origin: origin.to_string(),
        message: e.to_string(),
    };
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body);
    let headers: Vec<String> = csv_reader
        .headers()
        .map_err(parse_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(parse_error)?;
        if record.len() > headers.len() {
            return Err(IngestError::RaggedRow {
                origin: origin.to_string(),
                row: idx + 1,
                expected: headers.len(),
                found: record.len(),
            });
        }
        let mut row: Vec<Option<String>> = record
            .iter()
            .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
            .collect();
        row.resize(headers.len(), None);
        rows.push(row);
    }
    debug!(origin = %origin, rows = rows.len(), columns = headers.len(), "csv parsed");
    build_frame(origin, headers, rows)
}
