//! CSV export: UTF-8, header row, nulls as empty fields.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use dts_common::{column_names, string_values};
use polars::prelude::DataFrame;
use tracing::info;

use crate::error::{IngestError, Result};

/// Write a table as CSV to any writer.
///
/// A table without columns writes nothing, whatever its height.
pub fn write_csv_to<W: Write>(df: &DataFrame, writer: W) -> Result<()> {
    let encode_error = |e: csv::Error| IngestError::CsvWrite {
        message: e.to_string(),
    };
    let names = column_names(df);
    if names.is_empty() {
        return Ok(());
    }
    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        columns.push(string_values(df, name)?);
    }
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&names).map_err(encode_error)?;
    for idx in 0..df.height() {
        let record = columns
            .iter()
            .map(|values| values[idx].as_deref().unwrap_or(""));
        csv_writer.write_record(record).map_err(encode_error)?;
    }
    csv_writer.flush().map_err(|e| IngestError::CsvWrite {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Write a table as a CSV file, replacing any existing file.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    write_csv_to(df, file)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dts_common::frame_from_columns;

    #[test]
    fn writes_nulls_as_empty_fields() {
        let df = frame_from_columns(vec![
            (
                "name".to_string(),
                vec![Some("Rao, Asha".to_string()), None],
            ),
            (
                "phone".to_string(),
                vec![Some("919876543210".to_string()), Some(String::new())],
            ),
        ])
        .unwrap();
        let mut out = Vec::new();
        write_csv_to(&df, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        insta::assert_snapshot!(text, @r#"
        name,phone
        "Rao, Asha",919876543210
        ,
        "#);
    }

    #[test]
    fn writes_header_for_empty_table() {
        let df = frame_from_columns(vec![
            ("pan".to_string(), Vec::new()),
            ("gst".to_string(), Vec::new()),
        ])
        .unwrap();
        let mut out = Vec::new();
        write_csv_to(&df, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "pan,gst\n");
    }

    #[test]
    fn writes_nothing_for_table_without_columns() {
        let df = frame_from_columns(vec![(
            "requestId".to_string(),
            vec![None, None],
        )])
        .unwrap();
        let df = df.select(Vec::<String>::new()).unwrap();
        assert_eq!(df.width(), 0);
        let mut out = Vec::new();
        write_csv_to(&df, &mut out).unwrap();
        assert!(out.is_empty());
    }
}
