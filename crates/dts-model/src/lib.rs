pub mod mapping;
pub mod schema;
pub mod summary;
pub mod validity;

pub use mapping::{ColumnChoice, ColumnMapping, NOT_PROVIDED};
pub use schema::{
    AUTO_FIELDS, AutoField, AutoValue, CREDIT_PREFILL_SCHEMA, FIRST_NAME_FIELD, FieldSchema,
    LAST_NAME_FIELD, MIDDLE_NAME_FIELD, NAME_FIELD, NAME_PART_FIELDS, PHONE_FIELDS, SCHEMAS,
    find_schema,
};
pub use summary::{SENTINEL_COUNT, SummaryCounts, ValidationSummaryRow};
pub use validity::Validity;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_row_counts_consistent() {
        let row = ValidationSummaryRow::computed(
            "Phone",
            SummaryCounts {
                total: 5,
                missing: 2,
                duplicates: 2,
                invalid: 1,
                valid: 2,
            },
        );
        assert!(row.counts.as_ref().is_some_and(SummaryCounts::is_consistent));
        assert_eq!(row.cells()[0], "Phone");
    }

    #[test]
    fn summary_row_serializes() {
        let row = ValidationSummaryRow::computed(
            "PAN",
            SummaryCounts {
                total: 3,
                missing: 0,
                duplicates: 0,
                invalid: 1,
                valid: 2,
            },
        );
        let json = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(json["Field"], "PAN");
        assert_eq!(json["Total"], 3);
        assert_eq!(json["Valid"], 2);
        let round: ValidationSummaryRow = serde_json::from_value(json).expect("deserialize row");
        assert_eq!(round, row);
    }

    #[test]
    fn sentinel_row_serializes_dashes() {
        let row = ValidationSummaryRow::not_selected("Email");
        let json = serde_json::to_value(&row).expect("serialize row");
        assert_eq!(json["Field"], "Email");
        for key in &ValidationSummaryRow::HEADERS[1..] {
            assert_eq!(json[*key], SENTINEL_COUNT);
        }
        let round: ValidationSummaryRow = serde_json::from_value(json).expect("deserialize row");
        assert_eq!(round, row);
    }

    #[test]
    fn summary_row_rejects_mixed_counts() {
        let json = serde_json::json!({
            "Field": "PAN",
            "Total": 3,
            "Missing": "-",
            "Duplicates": 0,
            "Invalid": 0,
            "Valid": 3
        });
        assert!(serde_json::from_value::<ValidationSummaryRow>(json).is_err());
    }
}
