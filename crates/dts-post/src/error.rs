//! Error types for post-processing operations.

use polars::prelude::PolarsError;
use thiserror::Error;

/// Failure of one post-processing operation.
///
/// Per-value decryption failures are not errors; they fall back to the
/// input value.
#[derive(Debug, Error)]
pub enum PostError {
    /// An operation needs a column the response file does not have.
    #[error("Column '{column}' not found in file")]
    ColumnNotFound { column: String },
    #[error("dataframe error: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for PostError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_not_found_message() {
        let err = PostError::ColumnNotFound {
            column: "phoneNumber".to_string(),
        };
        assert_eq!(err.to_string(), "Column 'phoneNumber' not found in file");
    }
}
