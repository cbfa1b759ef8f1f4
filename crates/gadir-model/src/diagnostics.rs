//! Row accounting for a single transform run.

use std::collections::BTreeSet;

/// Counts collected at each stage of dataset construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetDiagnostics {
    /// Rows read from the input table.
    pub input_rows: usize,
    /// Rows removed because `HOST` did not name a human host.
    pub dropped_host: usize,
    /// Rows removed because `Organism` did not name a human organism.
    pub dropped_organism: usize,
    /// Rows removed as the ambiguous `unclear` cohort.
    pub dropped_unclear: usize,
    /// Surviving rows with no sample identifier.
    pub missing_run: usize,
    /// Surviving rows whose group has no label.
    pub missing_label: usize,
    /// Distinct group values without a label; blank groups are not listed.
    pub unmapped_groups: BTreeSet<String>,
    /// Rows in the projected output.
    pub output_rows: usize,
}

impl DatasetDiagnostics {
    /// True when any surviving row lacked an identifier or a label.
    pub fn has_missing_values(&self) -> bool {
        self.missing_run > 0 || self.missing_label > 0
    }

    /// Rows remaining after the organism and ambiguity filters.
    pub fn retained_rows(&self) -> usize {
        self.input_rows
            .saturating_sub(self.dropped_host)
            .saturating_sub(self.dropped_organism)
            .saturating_sub(self.dropped_unclear)
    }
}
