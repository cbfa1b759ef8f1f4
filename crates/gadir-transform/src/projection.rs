//! Reduction to `(Run, label)` records and missing-value reporting.

use gadir_model::{DatasetDiagnostics, LabeledSample};

use crate::error::{Result, TransformError};
use crate::labeling::LabeledRow;
use crate::options::MissingLabelPolicy;

/// Project labeled rows onto output records.
///
/// A row becomes a record only when both its identifier and its label are
/// present. Rows missing either are counted in `diagnostics`; under
/// [`MissingLabelPolicy::Fail`] any missing label is an error instead.
pub fn project(
    rows: Vec<LabeledRow>,
    policy: MissingLabelPolicy,
    diagnostics: &mut DatasetDiagnostics,
) -> Result<Vec<LabeledSample>> {
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        if row.run.is_none() {
            diagnostics.missing_run += 1;
        }
        if row.label.is_none() {
            diagnostics.missing_label += 1;
            if let Some(group) = &row.group {
                diagnostics.unmapped_groups.insert(group.clone());
            }
        }
        if let (Some(run), Some(label)) = (row.run, row.label) {
            records.push(LabeledSample { run, label });
        }
    }

    if policy == MissingLabelPolicy::Fail && diagnostics.missing_label > 0 {
        return Err(TransformError::TypeCoercion {
            missing_labels: diagnostics.missing_label,
            unmapped_groups: diagnostics.unmapped_groups.iter().cloned().collect(),
        });
    }

    diagnostics.output_rows = records.len();
    Ok(records)
}

/// Emit a warning when any retained row lacked an identifier or a label.
///
/// Returns whether a warning was emitted. Never blocks output.
pub fn report_missing_values(diagnostics: &DatasetDiagnostics) -> bool {
    if !diagnostics.has_missing_values() {
        return false;
    }

    let unmapped: Vec<&str> = diagnostics
        .unmapped_groups
        .iter()
        .map(String::as_str)
        .collect();
    tracing::warn!(
        missing_run = diagnostics.missing_run,
        missing_label = diagnostics.missing_label,
        unmapped_groups = ?unmapped,
        "found missing values; affected rows are excluded from the output"
    );
    true
}

#[cfg(test)]
mod tests {
    use gadir_model::Label;

    use super::*;

    fn row(run: Option<&str>, group: Option<&str>, label: Option<Label>) -> LabeledRow {
        LabeledRow {
            run: run.map(str::to_string),
            group: group.map(str::to_string),
            label,
        }
    }

    #[test]
    fn complete_rows_are_projected_in_order() {
        let mut diagnostics = DatasetDiagnostics::default();
        let records = project(
            vec![
                row(Some("R2"), Some("Control"), Some(Label::Control)),
                row(Some("R1"), Some("FoodAllergy"), Some(Label::FoodAllergy)),
            ],
            MissingLabelPolicy::Exclude,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(
            records,
            vec![
                LabeledSample::new("R2", Label::Control),
                LabeledSample::new("R1", Label::FoodAllergy),
            ]
        );
        assert_eq!(diagnostics.output_rows, 2);
        assert!(!report_missing_values(&diagnostics));
    }

    #[test]
    fn incomplete_rows_are_counted_and_excluded() {
        let mut diagnostics = DatasetDiagnostics::default();
        let records = project(
            vec![
                row(Some("R1"), Some("Unknown"), None),
                row(None, Some("Control"), Some(Label::Control)),
                row(Some("R3"), None, None),
                row(Some("R4"), Some("Unknown"), None),
                row(Some("R5"), Some("Control"), Some(Label::Control)),
            ],
            MissingLabelPolicy::Exclude,
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(records, vec![LabeledSample::new("R5", Label::Control)]);
        assert_eq!(diagnostics.missing_run, 1);
        assert_eq!(diagnostics.missing_label, 3);
        assert_eq!(
            diagnostics.unmapped_groups.iter().collect::<Vec<_>>(),
            vec!["Unknown"]
        );
        assert!(report_missing_values(&diagnostics));
    }

    #[test]
    fn strict_policy_rejects_missing_labels() {
        let mut diagnostics = DatasetDiagnostics::default();
        let result = project(
            vec![
                row(Some("R1"), Some("Control"), Some(Label::Control)),
                row(Some("R2"), Some("Pending"), None),
            ],
            MissingLabelPolicy::Fail,
            &mut diagnostics,
        );

        match result {
            Err(TransformError::TypeCoercion {
                missing_labels,
                unmapped_groups,
            }) => {
                assert_eq!(missing_labels, 1);
                assert_eq!(unmapped_groups, vec!["Pending".to_string()]);
            }
            other => panic!("expected TypeCoercion, got {other:?}"),
        }
    }

    #[test]
    fn strict_policy_allows_missing_run() {
        let mut diagnostics = DatasetDiagnostics::default();
        let records = project(
            vec![row(None, Some("Control"), Some(Label::Control))],
            MissingLabelPolicy::Fail,
            &mut diagnostics,
        )
        .unwrap();

        assert!(records.is_empty());
        assert_eq!(diagnostics.missing_run, 1);
    }
}
