//! Request table construction.
//!
//! A request table is built in four passes over the mapped input:
//!
//! 1. projection of every required field from its source column, or an empty
//!    value for fields that are not provided
//! 2. first/middle/last name derivation from the full name (credit prefill)
//! 3. phone normalization on the phone-like fields present
//! 4. injection of the constant auto fields
//!
//! Columns are kept in the mapping's field order followed by the auto fields
//! in table order.

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use dts_common::{frame_from_columns, string_values};
use dts_map::MappingPlan;
use dts_model::{
    AUTO_FIELDS, ColumnChoice, FIRST_NAME_FIELD, LAST_NAME_FIELD, MIDDLE_NAME_FIELD, NAME_FIELD,
    PHONE_FIELDS,
};

use crate::error::{Result, TransformError};
use crate::normalization::{normalize_phone, split_name};

type Values = Vec<Option<String>>;

/// Ordered named columns under construction.
#[derive(Debug, Default)]
struct RequestColumns {
    columns: Vec<(String, Values)>,
}

impl RequestColumns {
    fn get(&self, name: &str) -> Option<&Values> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values)
    }

    /// Replace the values of an existing column or append a new one.
    fn set(&mut self, name: &str, values: Values) {
        match self.columns.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, slot)) => *slot = values,
            None => self.columns.push((name.to_string(), values)),
        }
    }

    fn update(&mut self, name: &str, f: impl Fn(Option<&str>) -> String) -> bool {
        match self.columns.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, values)) => {
                for value in values.iter_mut() {
                    *value = Some(f(value.as_deref()));
                }
                true
            }
            None => false,
        }
    }
}

/// Build the bulk query request table for a resolved mapping.
pub fn build_request_table(df: &DataFrame, plan: &MappingPlan) -> Result<DataFrame> {
    let span = info_span!("build_request_table", rows = df.height(), schemas = ?plan.schemas());
    let _guard = span.enter();

    let height = df.height();
    let mut columns = project(df, plan)?;

    if plan.derive_name_parts() {
        derive_name_parts(&mut columns, height);
    }

    for field in PHONE_FIELDS {
        if columns.update(field, normalize_phone) {
            debug!(field, "phone numbers normalized");
        }
    }

    for auto in AUTO_FIELDS {
        columns.set(auto.name, constant(auto.value.as_text(), height));
    }

    let out = frame_from_columns(columns.columns)?;
    info!(
        rows = out.height(),
        columns = out.width(),
        "request table built"
    );
    Ok(out)
}

fn project(df: &DataFrame, plan: &MappingPlan) -> Result<RequestColumns> {
    let mut columns = RequestColumns::default();
    for (field, choice) in plan.mapping().iter() {
        let values = match choice {
            ColumnChoice::Column(source) => {
                if df.column(source).is_err() {
                    return Err(TransformError::ColumnNotFound {
                        field: field.to_string(),
                        column: source.clone(),
                    });
                }
                string_values(df, source)?
            }
            ColumnChoice::NotProvided => constant("", df.height()),
        };
        columns.set(field, values);
    }
    Ok(columns)
}

fn derive_name_parts(columns: &mut RequestColumns, height: usize) {
    let Some(names) = columns.get(NAME_FIELD) else {
        debug!("no full name column to split");
        return;
    };
    let mut first = Vec::with_capacity(height);
    let mut middle = Vec::with_capacity(height);
    let mut last = Vec::with_capacity(height);
    for name in names {
        let (f, m, l) = split_name(name.as_deref());
        first.push(Some(f));
        middle.push(Some(m));
        last.push(Some(l));
    }
    columns.set(FIRST_NAME_FIELD, first);
    columns.set(MIDDLE_NAME_FIELD, middle);
    columns.set(LAST_NAME_FIELD, last);
    debug!(rows = height, "name parts derived from full name");
}

fn constant(text: &str, height: usize) -> Values {
    vec![Some(text.to_string()); height]
}
