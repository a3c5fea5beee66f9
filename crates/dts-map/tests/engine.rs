//! Mapping resolution against uploaded columns.

use std::collections::BTreeMap;

use dts_map::{FieldMapper, MappingError};
use dts_model::{ColumnChoice, NOT_PROVIDED};

const COLUMNS: &[&str] = &["Full Name", "First", "Last", "Mobile", "Mail"];

fn assignments(pairs: &[(&str, &str)]) -> BTreeMap<String, ColumnChoice> {
    pairs
        .iter()
        .map(|(field, column)| (field.to_string(), ColumnChoice::parse(column)))
        .collect()
}

#[test]
fn every_required_field_has_an_entry() {
    let mapper = FieldMapper::new(&["email_name_attributes"]).unwrap();
    let plan = mapper
        .resolve(&assignments(&[("email", "Mail")]), COLUMNS)
        .unwrap();
    let fields: Vec<&str> = plan.mapping().fields().collect();
    assert_eq!(fields, vec!["email", "firstName", "lastName", "name"]);
    assert_eq!(plan.mapping().source("email"), Some("Mail"));
    assert_eq!(
        plan.mapping().get("name").map(ToString::to_string),
        Some(NOT_PROVIDED.to_string())
    );
    assert!(!plan.derive_name_parts());
}

#[test]
fn credit_prefill_with_full_name_derives_parts() {
    let mapper = FieldMapper::new(&["credit_prefill_eq"]).unwrap();
    let plan = mapper
        .resolve(
            &assignments(&[
                ("name", "Full Name"),
                ("firstName", "First"),
                ("mobileNumber", "Mobile"),
            ]),
            COLUMNS,
        )
        .unwrap();
    assert!(plan.is_credit_prefill());
    assert!(plan.derive_name_parts());
    // The direct first-name choice is suppressed in favour of the split.
    assert!(!plan.mapping().is_mapped("firstName"));
    assert_eq!(plan.mapping().source("name"), Some("Full Name"));
}

#[test]
fn credit_prefill_with_split_name_is_accepted() {
    let mapper = FieldMapper::new(&["credit_prefill_eq"]).unwrap();
    let plan = mapper
        .resolve(
            &assignments(&[("firstName", "First"), ("lastName", "Last")]),
            COLUMNS,
        )
        .unwrap();
    assert!(!plan.derive_name_parts());
    assert_eq!(plan.mapping().source("lastName"), Some("Last"));
    assert!(!plan.mapping().is_mapped("middleName"));
}

#[test]
fn credit_prefill_without_any_name_is_blocked() {
    let mapper = FieldMapper::new(&["credit_prefill_eq", "phone_network"]).unwrap();
    let err = mapper
        .resolve(
            &assignments(&[("firstName", "First"), ("mobileNumber", "Mobile")]),
            COLUMNS,
        )
        .unwrap_err();
    assert_eq!(err, MappingError::CreditPrefillNameMissing);
}

#[test]
fn missing_source_column_is_an_input_error() {
    let mapper = FieldMapper::new(&["phone_network"]).unwrap();
    let err = mapper
        .resolve(&assignments(&[("phoneNumber", "Phone")]), COLUMNS)
        .unwrap_err();
    assert_eq!(
        err,
        MappingError::ColumnNotFound {
            field: "phoneNumber".to_string(),
            column: "Phone".to_string(),
        }
    );
}

#[test]
fn assignments_for_unrequired_fields_are_ignored() {
    let mapper = FieldMapper::new(&["pan_to_gst"]).unwrap();
    let plan = mapper
        .resolve(&assignments(&[("email", "Nope"), ("pan", NOT_PROVIDED)]), COLUMNS)
        .unwrap();
    assert_eq!(plan.mapping().len(), 1);
    assert!(!plan.mapping().contains("email"));
}
