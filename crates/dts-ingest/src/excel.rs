//! Excel loading: first worksheet, all cells as text.

use std::io::Cursor;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto, open_workbook_auto_from_rs};
use dts_common::format_numeric;
use polars::prelude::DataFrame;
use tracing::debug;

use crate::build_frame;
use crate::error::{IngestError, Result};

/// Text form of a worksheet cell. Empty cells and empty strings are absent.
///
/// Numeric cells holding whole numbers are written without a decimal part
/// so phone numbers survive the spreadsheet round trip.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(v) => Some(v.to_string()),
        Data::Float(v) => Some(format_numeric(*v)),
        Data::Bool(b) => Some(if *b { "True" } else { "False" }.to_string()),
        other => Some(other.to_string()),
    }
}

fn rows_to_frame<'a, I>(origin: &str, mut rows: I) -> Result<DataFrame>
where
    I: Iterator<Item = &'a [Data]>,
{
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            origin: origin.to_string(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_text(cell).unwrap_or_default())
        .collect();
    let body: Vec<Vec<Option<String>>> = rows
        .map(|row| {
            let mut values: Vec<Option<String>> = row.iter().map(cell_text).collect();
            values.resize(headers.len(), None);
            values
        })
        .filter(|row| row.iter().any(Option::is_some))
        .collect();
    debug!(origin = %origin, rows = body.len(), columns = headers.len(), "worksheet parsed");
    build_frame(origin, headers, body)
}

/// Read the first worksheet of a workbook on disk.
pub fn read_excel(path: &Path) -> Result<DataFrame> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let origin = path.display().to_string();
    let excel_error = |message: String| IngestError::Excel {
        origin: origin.clone(),
        message,
    };
    let mut workbook = open_workbook_auto(path).map_err(|e| excel_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| excel_error("workbook has no worksheets".to_string()))?
        .map_err(|e| excel_error(e.to_string()))?;
    rows_to_frame(&origin, range.rows())
}

/// Read the first worksheet of an uploaded workbook.
pub fn read_excel_from_bytes(origin: &str, bytes: &[u8]) -> Result<DataFrame> {
    let excel_error = |message: String| IngestError::Excel {
        origin: origin.to_string(),
        message,
    };
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
        .map_err(|e| excel_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| excel_error("workbook has no worksheets".to_string()))?
        .map_err(|e| excel_error(e.to_string()))?;
    rows_to_frame(origin, range.rows())
}
