use serde::{Deserialize, Serialize};

/// Outcome of classifying a single value.
///
/// `NotApplicable` means the value was absent or blank. It is never used to
/// signal that a validator did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    Valid,
    Invalid,
    NotApplicable,
}

impl Validity {
    pub fn from_bool(valid: bool) -> Self {
        if valid { Self::Valid } else { Self::Invalid }
    }

    /// `Some(true)`/`Some(false)` for a judged value, `None` when not applicable.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Self::Valid => Some(true),
            Self::Invalid => Some(false),
            Self::NotApplicable => None,
        }
    }

    /// Text written into annotation columns (`True`, `False` or null).
    pub fn label(self) -> Option<&'static str> {
        self.as_bool()
            .map(|valid| if valid { "True" } else { "False" })
    }
}

impl From<Option<bool>> for Validity {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::NotApplicable, Self::from_bool)
    }
}
