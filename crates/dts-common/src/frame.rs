//! Polars helpers for all-string record tables.
//!
//! Values are extracted as `Option<String>` so that callers can work on
//! plain vectors and rebuild a frame afterwards with [`frame_from_columns`].

use polars::prelude::{
    AnyValue, Column, DataFrame, DataType, IntoColumn, NamedFrom, PolarsResult, Series,
};

/// Converts a Polars `AnyValue` to its text form.
///
/// Returns `None` for `Null`. Floats are rendered without trailing zeros and
/// booleans as `True`/`False`, which is how the tabular exports we consume
/// spell them.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use dts_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), None);
/// assert_eq!(any_to_string(AnyValue::Int64(42)), Some("42".to_string()));
/// assert_eq!(any_to_string(AnyValue::Float64(9876543210.0)), Some("9876543210".to_string()));
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> Option<String> {
    let text = match value {
        AnyValue::Null => return None,
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => if b { "True" } else { "False" }.to_string(),
        other => other.to_string(),
    };
    Some(text)
}

/// Formats a floating-point number without a trailing fractional zero part.
///
/// # Examples
///
/// ```
/// use dts_common::format_numeric;
///
/// assert_eq!(format_numeric(10.0), "10");
/// assert_eq!(format_numeric(1.50), "1.5");
/// assert_eq!(format_numeric(9876543210.0), "9876543210");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// True when a value is absent or holds only whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Column names of a frame, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Extract every value of a column as optional text.
///
/// String columns are read directly; any other dtype goes through
/// [`any_to_string`] so numeric identifiers keep an integer rendering.
pub fn string_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    if column.dtype() == &DataType::String {
        let ca = column.str()?;
        return Ok(ca.into_iter().map(|v| v.map(str::to_string)).collect());
    }
    let mut values = Vec::with_capacity(column.len());
    for idx in 0..column.len() {
        values.push(any_to_string(column.get(idx)?));
    }
    Ok(values)
}

/// Build a nullable string column.
pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}

/// Build a frame from named string columns, preserving the given order.
pub fn frame_from_columns(columns: Vec<(String, Vec<Option<String>>)>) -> PolarsResult<DataFrame> {
    let columns: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| string_column(&name, values))
        .collect();
    DataFrame::new(columns)
}
