use serde::{Deserialize, Serialize};

/// Cell text used for counts of a field that was not selected.
pub const SENTINEL_COUNT: &str = "-";

/// Descriptive counts for one validated column.
///
/// `missing`, `invalid` and `valid` partition at most `total` rows.
/// `duplicates` is counted separately over non-missing values and overlaps
/// the other counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SummaryCounts {
    pub total: usize,
    pub missing: usize,
    pub duplicates: usize,
    pub invalid: usize,
    pub valid: usize,
}

impl SummaryCounts {
    pub fn is_consistent(&self) -> bool {
        self.missing + self.invalid + self.valid <= self.total
    }
}

/// One row of the validation summary table.
///
/// Serializes with every count key present; an unselected field writes
/// [`SENTINEL_COUNT`] in place of each number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "SummaryRecord", try_from = "SummaryRecord")]
pub struct ValidationSummaryRow {
    pub field: String,
    /// `None` when no source column was selected for the field.
    pub counts: Option<SummaryCounts>,
}

/// A count as written to the JSON summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
enum CountCell {
    Count(usize),
    Sentinel(String),
}

impl CountCell {
    fn count(&self) -> Option<usize> {
        match self {
            Self::Count(n) => Some(*n),
            Self::Sentinel(_) => None,
        }
    }

    fn is_sentinel(&self) -> bool {
        matches!(self, Self::Sentinel(text) if text == SENTINEL_COUNT)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRecord {
    field: String,
    total: CountCell,
    missing: CountCell,
    duplicates: CountCell,
    invalid: CountCell,
    valid: CountCell,
}

impl From<ValidationSummaryRow> for SummaryRecord {
    fn from(row: ValidationSummaryRow) -> Self {
        let cell = |pick: fn(&SummaryCounts) -> usize| match &row.counts {
            Some(counts) => CountCell::Count(pick(counts)),
            None => CountCell::Sentinel(SENTINEL_COUNT.to_string()),
        };
        Self {
            total: cell(|c| c.total),
            missing: cell(|c| c.missing),
            duplicates: cell(|c| c.duplicates),
            invalid: cell(|c| c.invalid),
            valid: cell(|c| c.valid),
            field: row.field,
        }
    }
}

impl TryFrom<SummaryRecord> for ValidationSummaryRow {
    type Error = String;

    fn try_from(record: SummaryRecord) -> Result<Self, Self::Error> {
        let cells = [
            &record.total,
            &record.missing,
            &record.duplicates,
            &record.invalid,
            &record.valid,
        ];
        if cells.iter().all(|cell| cell.is_sentinel()) {
            return Ok(Self::not_selected(&record.field));
        }
        match cells.map(CountCell::count) {
            [Some(total), Some(missing), Some(duplicates), Some(invalid), Some(valid)] => {
                Ok(Self::computed(
                    &record.field,
                    SummaryCounts {
                        total,
                        missing,
                        duplicates,
                        invalid,
                        valid,
                    },
                ))
            }
            _ => Err(format!(
                "summary row '{}' mixes counts and '{SENTINEL_COUNT}'",
                record.field
            )),
        }
    }
}

impl ValidationSummaryRow {
    pub fn computed(field: &str, counts: SummaryCounts) -> Self {
        Self {
            field: field.to_string(),
            counts: Some(counts),
        }
    }

    pub fn not_selected(field: &str) -> Self {
        Self {
            field: field.to_string(),
            counts: None,
        }
    }

    pub const HEADERS: [&'static str; 6] =
        ["Field", "Total", "Missing", "Duplicates", "Invalid", "Valid"];

    /// Row rendered as table cells, in [`Self::HEADERS`] order.
    pub fn cells(&self) -> [String; 6] {
        let count = |pick: fn(&SummaryCounts) -> usize| {
            self.counts
                .as_ref()
                .map_or_else(|| SENTINEL_COUNT.to_string(), |c| pick(c).to_string())
        };
        [
            self.field.clone(),
            count(|c| c.total),
            count(|c| c.missing),
            count(|c| c.duplicates),
            count(|c| c.invalid),
            count(|c| c.valid),
        ]
    }
}
