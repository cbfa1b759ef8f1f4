//! Cohort label assignment.

use gadir_model::{Label, LabelMapping, SampleRecord};

/// A filtered sample with its looked-up label.
///
/// `label` is `None` when the group is missing or outside the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledRow {
    pub run: Option<String>,
    pub group: Option<String>,
    pub label: Option<Label>,
}

/// Attach a label to every record, preserving order.
pub fn assign_labels(records: Vec<SampleRecord>, mapping: &LabelMapping) -> Vec<LabeledRow> {
    records
        .into_iter()
        .map(|record| {
            let label = record
                .group
                .as_deref()
                .and_then(|group| mapping.lookup(group));
            LabeledRow {
                run: record.run,
                group: record.group,
                label,
            }
        })
        .collect()
}
