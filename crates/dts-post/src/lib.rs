//! Post-processing of enriched API response files.
//!
//! Every operation reads a loaded response table and returns a new one:
//! metadata cleanup, wide-to-long flattening of repeated result blocks and
//! token decryption.

pub mod detokenise;
pub mod error;
pub mod flatten;
pub mod prune;

use std::fmt;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

pub use detokenise::{DECRYPTED_SUFFIX, detokenise, detokenise_column};
pub use error::{PostError, Result};
pub use flatten::{flatten_pan_to_gst_csv, flatten_phone_to_rc, result_indices};
pub use prune::{
    METADATA_KEYWORDS, clean_metadata, drop_empty_columns, drop_metadata_columns,
    is_metadata_column,
};

/// A named post-processing operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostOperation {
    MetadataCleanup,
    FlattenPanToGst,
    FlattenPhoneToRc,
    Decrypt { column: String },
}

impl PostOperation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MetadataCleanup => "Metadata Cleanup",
            Self::FlattenPanToGst => "Flatten PAN → GST",
            Self::FlattenPhoneToRc => "Flatten Phone → RC",
            Self::Decrypt { .. } => "Decryption Tool",
        }
    }
}

impl fmt::Display for PostOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decrypt { column } => write!(f, "{} ({column})", self.label()),
            other => f.write_str(other.label()),
        }
    }
}

/// Run one operation on a response table.
pub fn run_post_operation(df: &DataFrame, operation: &PostOperation) -> Result<DataFrame> {
    let span = info_span!("post_operation", operation = operation.label());
    let _guard = span.enter();

    let out = match operation {
        PostOperation::MetadataCleanup => clean_metadata(df)?,
        PostOperation::FlattenPanToGst => flatten_pan_to_gst_csv(df)?,
        PostOperation::FlattenPhoneToRc => flatten_phone_to_rc(df)?,
        PostOperation::Decrypt { column } => detokenise_column(df, column)?,
    };
    info!(
        rows_in = df.height(),
        columns_in = df.width(),
        rows_out = out.height(),
        columns_out = out.width(),
        "post-processing complete"
    );
    Ok(out)
}
