//! Static target-schema table and injected constant fields.
//!
//! Each schema is the input profile of one bulk query API. The table is
//! business data shared with the request consumers and is not configurable.

/// A named target API profile and the fields it requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

pub const CREDIT_PREFILL_SCHEMA: &str = "credit_prefill_eq";

pub const NAME_FIELD: &str = "name";
pub const FIRST_NAME_FIELD: &str = "firstName";
pub const MIDDLE_NAME_FIELD: &str = "middleName";
pub const LAST_NAME_FIELD: &str = "lastName";

/// Fields derived from a full name for credit prefill requests.
pub const NAME_PART_FIELDS: [&str; 3] = [FIRST_NAME_FIELD, MIDDLE_NAME_FIELD, LAST_NAME_FIELD];

/// Output columns that receive phone normalization.
pub const PHONE_FIELDS: [&str; 3] = ["phoneNumber", "mobileNumber", "phone"];

pub const SCHEMAS: &[FieldSchema] = &[
    FieldSchema {
        name: CREDIT_PREFILL_SCHEMA,
        fields: &["name", "firstName", "middleName", "lastName", "mobileNumber"],
    },
    FieldSchema {
        name: "phone_network",
        fields: &["phoneNumber"],
    },
    FieldSchema {
        name: "phone_name_attributes",
        fields: &["name", "firstName", "lastName", "phoneNumber"],
    },
    FieldSchema {
        name: "phone_social_advance",
        fields: &["phoneNumber"],
    },
    FieldSchema {
        name: "phone_to_name",
        fields: &["phoneNumber"],
    },
    FieldSchema {
        name: "phone_to_pan",
        fields: &["name", "phone"],
    },
    FieldSchema {
        name: "phone_to_uan",
        fields: &["phoneNumber"],
    },
    FieldSchema {
        name: "email_attributes",
        fields: &["email"],
    },
    FieldSchema {
        name: "email_name_attributes",
        fields: &["email", "firstName", "lastName", "name"],
    },
    FieldSchema {
        name: "email_social_advance",
        fields: &["email"],
    },
    FieldSchema {
        name: "pan_profile",
        fields: &["fatherName", "pan"],
    },
    FieldSchema {
        name: "pan_to_gst",
        fields: &["pan"],
    },
    FieldSchema {
        name: "gst_advance",
        fields: &["gst"],
    },
    FieldSchema {
        name: "phone_to_rc",
        fields: &["phoneNumber"],
    },
    FieldSchema {
        name: "rc_authentication",
        fields: &["docNumber"],
    },
    FieldSchema {
        name: "epfo_advance",
        fields: &["phoneNumber", "pan"],
    },
];

/// Look up a schema by its exact name.
pub fn find_schema(name: &str) -> Option<&'static FieldSchema> {
    SCHEMAS.iter().find(|schema| schema.name == name)
}

/// Constant value of an injected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoValue {
    Text(&'static str),
    Flag(bool),
}

impl AutoValue {
    /// Cell text written to every output row.
    pub fn as_text(self) -> &'static str {
        match self {
            Self::Text(text) => text,
            Self::Flag(true) => "True",
            Self::Flag(false) => "False",
        }
    }
}

/// A field injected into every request row regardless of the source data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoField {
    pub name: &'static str,
    pub value: AutoValue,
}

pub const AUTO_FIELDS: &[AutoField] = &[
    AutoField {
        name: "aadhaarUnmask",
        value: AutoValue::Text(""),
    },
    AutoField {
        name: "serviceType",
        value: AutoValue::Text(""),
    },
    AutoField {
        name: "requestedServices",
        value: AutoValue::Text(""),
    },
    AutoField {
        name: "derivedSignals",
        value: AutoValue::Flag(true),
    },
    AutoField {
        name: "enhancedCoverage",
        value: AutoValue::Flag(true),
    },
    AutoField {
        name: "isCorrectionRequired",
        value: AutoValue::Flag(true),
    },
    AutoField {
        name: "countryCode",
        value: AutoValue::Text("IND"),
    },
];
