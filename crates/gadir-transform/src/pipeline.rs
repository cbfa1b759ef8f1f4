//! Dataset construction entry points.

use std::path::Path;

use tracing::{info, info_span};

use gadir_ingest::read_sample_table;
use gadir_model::{DatasetDiagnostics, LabelMapping, LabeledDataset, SampleTable};

use crate::error::Result;
use crate::filter::{drop_unclear, retain_human};
use crate::labeling::assign_labels;
use crate::options::TransformOptions;
use crate::output::write_dataset;
use crate::projection::{project, report_missing_values};

/// Build the labeled dataset from an in-memory table.
///
/// Stages run in order: organism filter, `unclear` removal, label
/// assignment, projection, missing-value report. Filtering always precedes
/// labeling.
pub fn prepare_table(table: SampleTable, options: &TransformOptions) -> Result<LabeledDataset> {
    let mut diagnostics = DatasetDiagnostics {
        input_rows: table.len(),
        ..DatasetDiagnostics::default()
    };

    let records = retain_human(table.records, table.columns, &mut diagnostics);
    let records = drop_unclear(records, &mut diagnostics);
    let rows = assign_labels(records, &LabelMapping::default());
    let records = project(rows, options.missing_label_policy, &mut diagnostics)?;
    report_missing_values(&diagnostics);

    info!(
        input_rows = diagnostics.input_rows,
        retained_rows = diagnostics.retained_rows(),
        output_rows = diagnostics.output_rows,
        "labeled dataset built"
    );

    Ok(LabeledDataset {
        records,
        diagnostics,
    })
}

/// Read `input` and build the labeled dataset without writing it.
pub fn prepare(input: &Path, options: &TransformOptions) -> Result<LabeledDataset> {
    let table = read_sample_table(input)?;
    prepare_table(table, options)
}

/// Read `input`, build the labeled dataset and write it as CSV.
///
/// The output goes to `options.output_path`, or next to the input when
/// unset (see [`default_output_path`](crate::default_output_path)). Nothing
/// is written when reading or labeling fails.
pub fn transform(input: &Path, options: &TransformOptions) -> Result<LabeledDataset> {
    let span = info_span!("transform", input = %input.display());
    let _guard = span.enter();

    let dataset = prepare(input, options)?;
    let output_path = options.resolve_output_path(input);
    write_dataset(&output_path, &dataset.records)?;
    Ok(dataset)
}
