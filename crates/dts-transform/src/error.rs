use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors raised while building a request table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A mapped source column is absent from the input table.
    #[error("source column '{column}' for field '{field}' not found")]
    ColumnNotFound { field: String, column: String },
    #[error("dataframe error: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TransformError>;
