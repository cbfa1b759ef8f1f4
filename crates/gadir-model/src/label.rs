//! Binary class labels and the cohort mapping.

use std::fmt;

use serde::{Serialize, Serializer};

/// Group value excluded as ambiguous (compared case-insensitively).
pub const UNCLEAR_GROUP: &str = "unclear";

/// Binary classification target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Label {
    /// Negative class (`0`).
    Control,
    /// Positive class (`1`).
    FoodAllergy,
}

impl Label {
    /// Integer encoding written to the output file.
    pub const fn value(self) -> u8 {
        match self {
            Self::Control => 0,
            Self::FoodAllergy => 1,
        }
    }

    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Control),
            1 => Some(Self::FoodAllergy),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl Serialize for Label {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

const COHORT_LABELS: &[(&str, Label)] = &[
    ("FoodAllergy", Label::FoodAllergy),
    ("Control", Label::Control),
    ("ControlHiRisk", Label::Control),
];

/// Fixed, case-sensitive mapping from cohort `Group` values to labels.
///
/// Values outside the mapping resolve to `None`; there is no fallback label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelMapping {
    entries: &'static [(&'static str, Label)],
}

impl Default for LabelMapping {
    fn default() -> Self {
        Self {
            entries: COHORT_LABELS,
        }
    }
}

impl LabelMapping {
    /// Look up the label for a group value.
    pub fn lookup(&self, group: &str) -> Option<Label> {
        self.entries
            .iter()
            .find(|(name, _)| *name == group)
            .map(|(_, label)| *label)
    }

    /// Iterate mapping entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Label)> + '_ {
        self.entries.iter().copied()
    }
}

/// True when a group value is the ambiguous `unclear` cohort.
pub fn is_unclear_group(group: &str) -> bool {
    group.to_lowercase() == UNCLEAR_GROUP
}
