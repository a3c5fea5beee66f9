//! Scalar normalization applied to request fields.

pub mod name;
pub mod phone;

pub use name::split_name;
pub use phone::{COUNTRY_CODE, normalize_phone};
