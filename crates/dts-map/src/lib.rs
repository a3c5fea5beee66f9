#![deny(unsafe_code)]

//! Resolves user column choices against the target schema table.
//!
//! The mapper unions the required fields of the selected schemas, tells the
//! front end which fields to ask for, and turns the answers into a
//! [`MappingPlan`] that the transform pipeline consumes.

pub mod engine;
pub mod error;

pub use engine::{FieldMapper, MappingPlan};
pub use error::{MappingError, Result};
