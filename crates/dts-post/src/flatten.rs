//! Wide-to-long flattening of repeated response blocks.

use std::collections::{BTreeSet, HashSet};
use std::sync::LazyLock;

use polars::prelude::DataFrame;
use regex::Regex;
use tracing::debug;

use dts_common::{column_names, frame_from_columns, is_blank, string_values};

use crate::error::{PostError, Result};

pub const PHONE_COLUMN: &str = "phoneNumber";
pub const RC_NUMBER_COLUMN: &str = "rcNumber";
pub const PAN_COLUMN: &str = "pan";
pub const GST_COLUMN: &str = "gst";

/// Fragment shared by every RC number column of a Phone to RC response.
pub const RC_NUMBER_MARKER: &str = "Phone To RC.rcNumber";

static RESULT_INDEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"result\.(\d+)\.").expect("valid result index pattern"));

fn gstin_column(index: u64) -> String {
    format!("PAN Based GST Search.result.{index}.gstinId")
}

/// Gather all RC number columns into `{phoneNumber, rcNumber}` pairs.
///
/// Columns are taken one after another, all rows of each. Absent RC numbers
/// are skipped and repeated pairs keep their first position.
pub fn flatten_phone_to_rc(df: &DataFrame) -> Result<DataFrame> {
    if df.column(PHONE_COLUMN).is_err() {
        return Err(PostError::ColumnNotFound {
            column: PHONE_COLUMN.to_string(),
        });
    }
    let phones = string_values(df, PHONE_COLUMN)?;
    let rc_columns: Vec<String> = column_names(df)
        .into_iter()
        .filter(|name| name.contains(RC_NUMBER_MARKER))
        .collect();
    debug!(columns = rc_columns.len(), "rc number columns found");

    let mut seen: HashSet<(Option<String>, String)> = HashSet::new();
    let mut out_phones = Vec::new();
    let mut out_rcs = Vec::new();
    for name in &rc_columns {
        for (phone, rc) in phones.iter().zip(string_values(df, name)?) {
            let Some(rc) = rc else { continue };
            if seen.insert((phone.clone(), rc.clone())) {
                out_phones.push(phone.clone());
                out_rcs.push(Some(rc));
            }
        }
    }

    Ok(frame_from_columns(vec![
        (PHONE_COLUMN.to_string(), out_phones),
        (RC_NUMBER_COLUMN.to_string(), out_rcs),
    ])?)
}

/// Block indices `N` found in `result.N.` column name fragments.
pub fn result_indices(df: &DataFrame) -> BTreeSet<u64> {
    df.get_column_names()
        .into_iter()
        .filter_map(|name| RESULT_INDEX.captures(name.as_str()))
        .filter_map(|caps| caps[1].parse().ok())
        .collect()
}

/// Emit one `{pan, gst}` row per non-blank GSTIN of every input row.
///
/// For each row the blocks are visited in ascending index order. A file
/// without any GSTIN gives an empty table that still has both columns.
pub fn flatten_pan_to_gst_csv(df: &DataFrame) -> Result<DataFrame> {
    let indices = result_indices(df);
    let pans = if df.column(PAN_COLUMN).is_ok() {
        string_values(df, PAN_COLUMN)?
    } else {
        vec![None; df.height()]
    };

    let mut gstin_columns = Vec::with_capacity(indices.len());
    for index in &indices {
        let name = gstin_column(*index);
        if df.column(&name).is_ok() {
            gstin_columns.push(string_values(df, &name)?);
        }
    }
    debug!(
        blocks = indices.len(),
        gstin_columns = gstin_columns.len(),
        "gst result blocks found"
    );

    let mut out_pans = Vec::new();
    let mut out_gsts = Vec::new();
    for (row, pan) in pans.iter().enumerate() {
        for values in &gstin_columns {
            let gstin = &values[row];
            if !is_blank(gstin.as_deref()) {
                out_pans.push(pan.clone());
                out_gsts.push(gstin.clone());
            }
        }
    }

    Ok(frame_from_columns(vec![
        (PAN_COLUMN.to_string(), out_pans),
        (GST_COLUMN.to_string(), out_gsts),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
        frame_from_columns(
            columns
                .into_iter()
                .map(|(name, values)| {
                    (
                        name.to_string(),
                        values.into_iter().map(|v| v.map(str::to_string)).collect(),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn result_indices_sorted_and_unique() {
        let df = frame(vec![
            ("PAN Based GST Search.result.10.gstinId", vec![None]),
            ("PAN Based GST Search.result.2.gstinId", vec![None]),
            ("PAN Based GST Search.result.2.state", vec![None]),
            ("result.x.gstinId", vec![None]),
        ]);
        assert_eq!(result_indices(&df).into_iter().collect::<Vec<_>>(), vec![2, 10]);
    }

    #[test]
    fn gstin_column_name() {
        assert_eq!(gstin_column(0), "PAN Based GST Search.result.0.gstinId");
    }
}
