//! Mapping engine implementation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, info, warn};

use dts_model::{
    CREDIT_PREFILL_SCHEMA, ColumnChoice, ColumnMapping, FIRST_NAME_FIELD, FieldSchema,
    LAST_NAME_FIELD, NAME_FIELD, NAME_PART_FIELDS, find_schema,
};

use crate::error::{MappingError, Result};

/// Finalized mapping, ready for the transform pipeline.
///
/// Only [`FieldMapper::resolve`] builds a plan, so a plan always passed the
/// configuration checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingPlan {
    schemas: Vec<&'static str>,
    mapping: ColumnMapping,
    derive_name_parts: bool,
}

impl MappingPlan {
    pub fn schemas(&self) -> &[&'static str] {
        &self.schemas
    }

    /// Every required field with its source, in field-name order.
    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    /// Whether first, middle and last name are split from the full name.
    pub fn derive_name_parts(&self) -> bool {
        self.derive_name_parts
    }

    pub fn is_credit_prefill(&self) -> bool {
        self.schemas.contains(&CREDIT_PREFILL_SCHEMA)
    }
}

/// Field mapper for one selection of target schemas.
#[derive(Debug, Clone)]
pub struct FieldMapper {
    schemas: Vec<&'static FieldSchema>,
    required: BTreeSet<&'static str>,
}

impl FieldMapper {
    /// Look up the selected schemas. Repeated names are kept once.
    pub fn new<S: AsRef<str>>(selected: &[S]) -> Result<Self> {
        if selected.is_empty() {
            return Err(MappingError::NoSchemaSelected);
        }
        let mut schemas: Vec<&'static FieldSchema> = Vec::with_capacity(selected.len());
        for name in selected {
            let name = name.as_ref();
            let schema =
                find_schema(name).ok_or_else(|| MappingError::UnknownSchema(name.to_string()))?;
            if !schemas.iter().any(|s| s.name == schema.name) {
                schemas.push(schema);
            }
        }
        let required = schemas
            .iter()
            .flat_map(|schema| schema.fields.iter().copied())
            .collect();
        Ok(Self { schemas, required })
    }

    pub fn is_credit_prefill(&self) -> bool {
        self.schemas
            .iter()
            .any(|schema| schema.name == CREDIT_PREFILL_SCHEMA)
    }

    /// Union of the required fields of all selected schemas, sorted.
    pub fn required_fields(&self) -> Vec<&'static str> {
        self.required.iter().copied().collect()
    }

    /// Fields the front end should ask a column for, in asking order.
    ///
    /// With credit prefill selected the full `name` comes first on its own;
    /// once it is mapped the name parts are not asked for since they will be
    /// derived.
    pub fn prompt_fields(&self, full_name_mapped: bool) -> Vec<&'static str> {
        if !self.is_credit_prefill() {
            return self.required_fields();
        }
        let mut prompts = vec![NAME_FIELD];
        for field in self.required.iter().copied() {
            if field == NAME_FIELD {
                continue;
            }
            if full_name_mapped && NAME_PART_FIELDS.contains(&field) {
                continue;
            }
            prompts.push(field);
        }
        prompts
    }

    /// Turn user assignments into a plan.
    ///
    /// Required fields without an assignment get the sentinel. Assignments
    /// for fields no selected schema requires are ignored.
    pub fn resolve<S: AsRef<str>>(
        &self,
        assignments: &BTreeMap<String, ColumnChoice>,
        available_columns: &[S],
    ) -> Result<MappingPlan> {
        let available: BTreeSet<&str> = available_columns.iter().map(|c| c.as_ref()).collect();
        let mut mapping = ColumnMapping::for_fields(self.required.iter().copied());

        for (field, choice) in assignments {
            if !mapping.contains(field) {
                warn!(field = %field, "assignment for field not required by selected schemas ignored");
                continue;
            }
            if let Some(column) = choice.column()
                && !available.contains(column)
            {
                return Err(MappingError::ColumnNotFound {
                    field: field.clone(),
                    column: column.to_string(),
                });
            }
            mapping.assign(field, choice.clone());
        }

        let mut derive_name_parts = false;
        if self.is_credit_prefill() {
            if mapping.is_mapped(NAME_FIELD) {
                for part in NAME_PART_FIELDS {
                    if mapping.is_mapped(part) {
                        debug!(field = part, "direct mapping replaced by full name split");
                    }
                    mapping.assign(part, ColumnChoice::NotProvided);
                }
                derive_name_parts = true;
            } else if !(mapping.is_mapped(FIRST_NAME_FIELD) && mapping.is_mapped(LAST_NAME_FIELD))
            {
                return Err(MappingError::CreditPrefillNameMissing);
            }
        }

        let plan = MappingPlan {
            schemas: self.schemas.iter().map(|schema| schema.name).collect(),
            mapping,
            derive_name_parts,
        };
        info!(
            schemas = plan.schemas.len(),
            fields = plan.mapping.len(),
            mapped = plan.mapping.iter().filter(|(_, c)| c.is_provided()).count(),
            derive_name_parts,
            "mapping resolved"
        );
        Ok(plan)
    }
}
