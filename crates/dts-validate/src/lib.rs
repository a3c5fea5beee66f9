//! Contact field validation.
//!
//! - **validators**: tri-state classifiers for names, phones, emails and PANs
//! - **summary**: per-column counts (missing, duplicates, invalid, valid)
//!
//! [`run_validation`] ties them together for a whole table: it classifies
//! every selected column, appends one `Valid_*` annotation column per field
//! and returns one summary row per field.

pub mod summary;
pub mod validators;

use polars::prelude::DataFrame;
use thiserror::Error;
use tracing::{debug, info, info_span};

use dts_common::{string_column, string_values};
use dts_model::{ColumnChoice, ValidationSummaryRow, Validity};

pub use summary::summarize_column;
pub use validators::{
    EMAIL_PATTERN, PAN_PATTERN, clean_name, validate_email, validate_name, validate_pan,
    validate_phone,
};

#[derive(Debug, Error)]
pub enum ValidateError {
    #[error("column '{column}' selected for {field} not found")]
    ColumnNotFound { field: &'static str, column: String },
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ValidateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidateError>;

/// Fields the validation tool knows how to judge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValidatedField {
    Name,
    Phone,
    Email,
    Pan,
}

impl ValidatedField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Phone, Self::Email, Self::Pan];

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::Email => "Email",
            Self::Pan => "PAN",
        }
    }

    /// Column appended to the annotated table.
    pub fn annotation_column(self) -> &'static str {
        match self {
            Self::Name => "Valid_Name",
            Self::Phone => "Valid_Phone",
            Self::Email => "Valid_Email",
            Self::Pan => "Valid_PAN",
        }
    }

    pub fn classify(self, value: Option<&str>) -> Validity {
        match self {
            Self::Name => validate_name(value),
            Self::Phone => validate_phone(value),
            Self::Email => validate_email(value),
            Self::Pan => validate_pan(value),
        }
    }
}

/// Column chosen for each validated field.
#[derive(Debug, Clone)]
pub struct FieldSelection {
    choices: [ColumnChoice; 4],
    /// Replace the name column with its cleaned form in the annotated table.
    pub write_clean_names: bool,
}

impl Default for FieldSelection {
    fn default() -> Self {
        Self {
            choices: std::array::from_fn(|_| ColumnChoice::NotProvided),
            write_clean_names: false,
        }
    }
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, field: ValidatedField, choice: ColumnChoice) -> Self {
        self.choices[field as usize] = choice;
        self
    }

    #[must_use]
    pub fn with_clean_names(mut self, enable: bool) -> Self {
        self.write_clean_names = enable;
        self
    }

    pub fn choice(&self, field: ValidatedField) -> &ColumnChoice {
        &self.choices[field as usize]
    }
}

/// Result of validating a table.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// One row per field, in [`ValidatedField::ALL`] order.
    pub summary: Vec<ValidationSummaryRow>,
    /// Input table plus one annotation column per selected field.
    pub annotated: DataFrame,
}

/// Classify every value of a column.
pub fn classify_column(values: &[Option<String>], field: ValidatedField) -> Vec<Validity> {
    values
        .iter()
        .map(|value| field.classify(value.as_deref()))
        .collect()
}

/// Validate the selected columns of a table.
pub fn run_validation(df: &DataFrame, selection: &FieldSelection) -> Result<ValidationRun> {
    let span = info_span!("validate", rows = df.height());
    let _guard = span.enter();

    let mut annotated = df.clone();
    let mut summary = Vec::with_capacity(ValidatedField::ALL.len());
    for field in ValidatedField::ALL {
        let Some(column) = selection.choice(field).column() else {
            debug!(field = field.label(), "field not selected");
            summary.push(ValidationSummaryRow::not_selected(field.label()));
            continue;
        };
        let raw = string_values(df, column).map_err(|_| ValidateError::ColumnNotFound {
            field: field.label(),
            column: column.to_string(),
        })?;
        let validity = classify_column(&raw, field);
        let counts = summarize_column(&raw, &validity);
        debug!(
            field = field.label(),
            column,
            valid = counts.valid,
            invalid = counts.invalid,
            missing = counts.missing,
            "field validated"
        );

        let labels = validity
            .iter()
            .map(|v| v.label().map(str::to_string))
            .collect();
        annotated.with_column(string_column(field.annotation_column(), labels))?;
        if field == ValidatedField::Name && selection.write_clean_names {
            let cleaned = raw
                .iter()
                .map(|value| value.as_deref().map(clean_name))
                .collect();
            annotated.with_column(string_column(column, cleaned))?;
        }
        summary.push(ValidationSummaryRow::computed(field.label(), counts));
    }

    info!(
        fields = summary.iter().filter(|row| row.counts.is_some()).count(),
        "validation complete"
    );
    Ok(ValidationRun { summary, annotated })
}
