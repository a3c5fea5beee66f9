use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for fields that have no source column.
pub const NOT_PROVIDED: &str = "Not provided";

/// Source of a required field: a dataset column or the "not provided" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnChoice {
    NotProvided,
    Column(String),
}

impl ColumnChoice {
    /// Parse a user selection; the sentinel label (any case) and blank text mean not provided.
    pub fn parse(selection: &str) -> Self {
        let trimmed = selection.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_PROVIDED) {
            Self::NotProvided
        } else {
            Self::Column(trimmed.to_string())
        }
    }

    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Column(name) => Some(name.as_str()),
            Self::NotProvided => None,
        }
    }

    pub fn is_provided(&self) -> bool {
        matches!(self, Self::Column(_))
    }
}

impl fmt::Display for ColumnChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Column(name) => f.write_str(name),
            Self::NotProvided => f.write_str(NOT_PROVIDED),
        }
    }
}

/// Required field name mapped to its chosen source.
///
/// Built from a fixed required-field list, so every required field has an
/// entry (possibly the sentinel). Iteration is in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    entries: BTreeMap<String, ColumnChoice>,
}

impl ColumnMapping {
    /// Start a mapping where every required field is not provided.
    pub fn for_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = fields
            .into_iter()
            .map(|field| (field.into(), ColumnChoice::NotProvided))
            .collect();
        Self { entries }
    }

    /// Assign a source to a field that is part of the mapping.
    ///
    /// Returns false and leaves the mapping unchanged for unknown fields.
    pub fn assign(&mut self, field: &str, choice: ColumnChoice) -> bool {
        match self.entries.get_mut(field) {
            Some(slot) => {
                *slot = choice;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, field: &str) -> Option<&ColumnChoice> {
        self.entries.get(field)
    }

    /// Source column of a field, if one was chosen.
    pub fn source(&self, field: &str) -> Option<&str> {
        self.entries.get(field).and_then(ColumnChoice::column)
    }

    pub fn is_mapped(&self, field: &str) -> bool {
        self.source(field).is_some()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnChoice)> {
        self.entries
            .iter()
            .map(|(field, choice)| (field.as_str(), choice))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_sentinel() {
        assert_eq!(ColumnChoice::parse("Not provided"), ColumnChoice::NotProvided);
        assert_eq!(ColumnChoice::parse("not PROVIDED"), ColumnChoice::NotProvided);
        assert_eq!(ColumnChoice::parse("  "), ColumnChoice::NotProvided);
        assert_eq!(
            ColumnChoice::parse(" Mobile "),
            ColumnChoice::Column("Mobile".to_string())
        );
    }

    #[test]
    fn mapping_covers_every_field() {
        let mut mapping = ColumnMapping::for_fields(["pan", "fatherName"]);
        assert_eq!(mapping.len(), 2);
        assert!(!mapping.is_mapped("pan"));
        assert!(mapping.assign("pan", ColumnChoice::Column("PAN No".into())));
        assert!(!mapping.assign("email", ColumnChoice::Column("Mail".into())));
        assert_eq!(mapping.source("pan"), Some("PAN No"));
        assert_eq!(mapping.fields().collect::<Vec<_>>(), vec!["fatherName", "pan"]);
        assert_eq!(mapping.get("fatherName").unwrap().to_string(), NOT_PROVIDED);
    }
}
