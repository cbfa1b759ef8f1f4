//! Projected output records.

use serde::Serialize;

use crate::diagnostics::DatasetDiagnostics;
use crate::label::Label;

/// One output row: sample identifier and its derived label.
///
/// Serializes as the `Run,label` column pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledSample {
    #[serde(rename = "Run")]
    pub run: String,
    pub label: Label,
}

impl LabeledSample {
    pub fn new(run: impl Into<String>, label: Label) -> Self {
        Self {
            run: run.into(),
            label,
        }
    }
}

/// The labeled dataset plus the counts gathered while building it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabeledDataset {
    pub records: Vec<LabeledSample>,
    pub diagnostics: DatasetDiagnostics,
}

impl LabeledDataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records carrying `label`.
    pub fn count_label(&self, label: Label) -> usize {
        self.records
            .iter()
            .filter(|record| record.label == label)
            .count()
    }
}
