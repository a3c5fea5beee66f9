//! Bulk query request construction.
//!
//! - **normalization**: phone formatting and full-name splitting
//! - **pipeline**: projection, name derivation, phone normalization and
//!   constant field injection over a mapped record table

pub mod error;
pub mod normalization;
pub mod pipeline;

pub use error::{Result, TransformError};
pub use normalization::{normalize_phone, split_name};
pub use pipeline::build_request_table;
