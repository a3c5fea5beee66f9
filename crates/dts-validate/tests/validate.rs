//! Whole-table validation runs.

use dts_common::{column_names, frame_from_columns, string_values};
use dts_model::ColumnChoice;
use dts_validate::{FieldSelection, ValidateError, ValidatedField, run_validation};
use polars::prelude::DataFrame;

fn contacts() -> DataFrame {
    let col = |values: &[Option<&str>]| -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    };
    frame_from_columns(vec![
        (
            "Full Name".to_string(),
            col(&[Some("Asha Rao"), Some("AAAA"), None, Some("Asha Rao"), Some("R#a")]),
        ),
        (
            "Mobile".to_string(),
            col(&[
                Some("9876543210"),
                Some("919876543210"),
                Some("1234567890"),
                Some(""),
                Some("nan"),
            ]),
        ),
        (
            "PAN".to_string(),
            col(&[Some("abcpe1234f"), None, None, None, Some("ABCZE1234F")]),
        ),
    ])
    .unwrap()
}

fn column(name: &str) -> ColumnChoice {
    ColumnChoice::Column(name.to_string())
}

#[test]
fn summary_has_one_row_per_field_with_sentinels() {
    let selection = FieldSelection::new()
        .with(ValidatedField::Name, column("Full Name"))
        .with(ValidatedField::Phone, column("Mobile"))
        .with(ValidatedField::Pan, column("PAN"));
    let run = run_validation(&contacts(), &selection).unwrap();

    let fields: Vec<&str> = run.summary.iter().map(|row| row.field.as_str()).collect();
    assert_eq!(fields, vec!["Name", "Phone", "Email", "PAN"]);

    let name = run.summary[0].counts.expect("name counts");
    assert_eq!(name.total, 5);
    assert_eq!(name.missing, 1);
    assert_eq!(name.duplicates, 2);
    assert_eq!(name.valid, 2);
    assert_eq!(name.invalid, 2);

    let phone = run.summary[1].counts.expect("phone counts");
    assert_eq!(phone.missing, 1);
    assert_eq!(phone.valid, 2);
    assert_eq!(phone.invalid, 1);

    assert!(run.summary[2].counts.is_none());
    assert_eq!(run.summary[2].cells()[1], "-");

    let pan = run.summary[3].counts.expect("pan counts");
    assert_eq!(pan.missing, 3);
    assert_eq!(pan.valid, 1);
    assert_eq!(pan.invalid, 1);
    for row in &run.summary {
        if let Some(counts) = row.counts {
            assert!(counts.is_consistent(), "{} counts overlap", row.field);
        }
    }
}

#[test]
fn annotated_table_gets_tri_state_columns() {
    let selection = FieldSelection::new().with(ValidatedField::Phone, column("Mobile"));
    let run = run_validation(&contacts(), &selection).unwrap();

    assert_eq!(
        column_names(&run.annotated),
        vec!["Full Name", "Mobile", "PAN", "Valid_Phone"]
    );
    let flags = string_values(&run.annotated, "Valid_Phone").unwrap();
    assert_eq!(
        flags,
        vec![
            Some("True".to_string()),
            Some("True".to_string()),
            Some("False".to_string()),
            None,
            None,
        ]
    );
}

#[test]
fn clean_names_written_back_only_on_request() {
    let selection = FieldSelection::new().with(ValidatedField::Name, column("Full Name"));
    let run = run_validation(&contacts(), &selection).unwrap();
    let names = string_values(&run.annotated, "Full Name").unwrap();
    assert_eq!(names[4], Some("R#a".to_string()));

    let run = run_validation(&contacts(), &selection.with_clean_names(true)).unwrap();
    let names = string_values(&run.annotated, "Full Name").unwrap();
    assert_eq!(names[4], Some("Ra".to_string()));
    assert_eq!(names[2], None);
}

#[test]
fn unknown_column_is_reported() {
    let selection = FieldSelection::new().with(ValidatedField::Email, column("E-mail"));
    let err = run_validation(&contacts(), &selection).unwrap_err();
    assert!(matches!(
        err,
        ValidateError::ColumnNotFound { field: "Email", ref column } if column == "E-mail"
    ));
}
