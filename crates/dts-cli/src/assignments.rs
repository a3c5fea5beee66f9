//! Field-to-column assignments from flags and mapping files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use dts_model::ColumnChoice;
use tracing::debug;

/// Parse a `FIELD=COLUMN` flag value. The column may itself contain `=`.
pub fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    let (field, column) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=COLUMN, got '{raw}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{raw}'"));
    }
    Ok((field.to_string(), column.trim().to_string()))
}

/// Read a JSON object of field names to column names.
pub fn load_mapping_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read mapping file {}", path.display()))?;
    let entries: BTreeMap<String, String> = serde_json::from_str(&text)
        .with_context(|| format!("parse mapping file {}", path.display()))?;
    debug!(path = %path.display(), entries = entries.len(), "mapping file loaded");
    Ok(entries)
}

/// Merge file entries and flag entries; flags override the file.
pub fn collect_assignments(
    file_entries: BTreeMap<String, String>,
    flags: &[(String, String)],
) -> BTreeMap<String, ColumnChoice> {
    let mut merged = file_entries;
    for (field, column) in flags {
        merged.insert(field.clone(), column.clone());
    }
    merged
        .into_iter()
        .map(|(field, column)| {
            let choice = ColumnChoice::parse(&column);
            (field, choice)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("name = Full Name").unwrap(),
            ("name".to_string(), "Full Name".to_string())
        );
        assert_eq!(
            parse_assignment("docNumber=RC=No").unwrap(),
            ("docNumber".to_string(), "RC=No".to_string())
        );
        assert!(parse_assignment("name").is_err());
        assert!(parse_assignment("=Name").is_err());
    }

    #[test]
    fn flags_override_file_entries() {
        let mut file = BTreeMap::new();
        file.insert("pan".to_string(), "PAN".to_string());
        file.insert("name".to_string(), "Name".to_string());
        let flags = vec![
            ("name".to_string(), "Not provided".to_string()),
            ("phone".to_string(), "Mobile".to_string()),
        ];
        let merged = collect_assignments(file, &flags);
        assert_eq!(merged["pan"], ColumnChoice::Column("PAN".to_string()));
        assert_eq!(merged["name"], ColumnChoice::NotProvided);
        assert_eq!(merged["phone"], ColumnChoice::Column("Mobile".to_string()));
    }

    #[test]
    fn mapping_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"email": "Mail", "name": "Not provided"}}"#).unwrap();
        let entries = load_mapping_file(file.path()).unwrap();
        assert_eq!(entries["email"], "Mail");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn mapping_file_must_be_string_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["email"]"#).unwrap();
        let err = load_mapping_file(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("parse mapping file"));
    }
}
