//! Row filters applied before labeling.
//!
//! Both filters preserve input order and record how many rows they removed
//! in [`DatasetDiagnostics`].

use gadir_model::{DatasetDiagnostics, OrganismColumns, SampleRecord, is_unclear_group};

/// Substring a `HOST` value must contain (case-insensitive).
pub const HUMAN_HOST: &str = "Homo sapiens";
/// Substring an `Organism` value must contain (case-insensitive).
pub const HUMAN_ORGANISM: &str = "human";

fn contains_ignore_case(value: &str, needle: &str) -> bool {
    value.to_lowercase().contains(&needle.to_lowercase())
}

/// True when a `HOST` cell names a human host. Missing cells never match.
pub fn is_human_host(host: Option<&str>) -> bool {
    host.is_some_and(|value| contains_ignore_case(value, HUMAN_HOST))
}

/// True when an `Organism` cell names a human organism. Missing cells never match.
pub fn is_human_organism(organism: Option<&str>) -> bool {
    organism.is_some_and(|value| contains_ignore_case(value, HUMAN_ORGANISM))
}

/// Keep only human samples.
///
/// Each organism column present in the input must match; with neither
/// column the records pass through unchanged.
pub fn retain_human(
    mut records: Vec<SampleRecord>,
    columns: OrganismColumns,
    diagnostics: &mut DatasetDiagnostics,
) -> Vec<SampleRecord> {
    if columns.host {
        let before = records.len();
        records.retain(|record| is_human_host(record.host.as_deref()));
        diagnostics.dropped_host += before - records.len();
    }
    if columns.organism {
        let before = records.len();
        records.retain(|record| is_human_organism(record.organism.as_deref()));
        diagnostics.dropped_organism += before - records.len();
    }

    tracing::debug!(
        host_column = columns.host,
        organism_column = columns.organism,
        dropped_host = diagnostics.dropped_host,
        dropped_organism = diagnostics.dropped_organism,
        remaining = records.len(),
        "organism filter applied"
    );
    records
}

/// Drop rows in the ambiguous `unclear` cohort.
///
/// Rows with a missing `Group` are kept; they surface later as missing labels.
pub fn drop_unclear(
    mut records: Vec<SampleRecord>,
    diagnostics: &mut DatasetDiagnostics,
) -> Vec<SampleRecord> {
    let before = records.len();
    records.retain(|record| !record.group.as_deref().is_some_and(is_unclear_group));
    diagnostics.dropped_unclear += before - records.len();

    tracing::debug!(
        dropped = diagnostics.dropped_unclear,
        remaining = records.len(),
        "unclear cohort removed"
    );
    records
}
