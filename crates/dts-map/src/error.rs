//! Error types for mapping operations.

use thiserror::Error;

/// Errors from mapping operations.
///
/// Every variant blocks request generation; no partial output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// No target schema selected.
    #[error("no target schema selected")]
    NoSchemaSelected,
    /// Schema name not present in the schema table.
    #[error("unknown target schema: {0}")]
    UnknownSchema(String),
    /// Column chosen for a field is not in the uploaded data.
    #[error("column '{column}' mapped to '{field}' not found in input")]
    ColumnNotFound { field: String, column: String },
    /// Credit prefill needs a full name or both name parts.
    #[error("credit_prefill_eq requires either a full name or first and last name")]
    CreditPrefillNameMissing,
}

pub type Result<T> = std::result::Result<T, MappingError>;
