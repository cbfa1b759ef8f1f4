//! End-to-end tests for reading, labeling and writing a dataset.

use std::fs;
use std::path::{Path, PathBuf};

use gadir_ingest::IngestError;
use gadir_model::{Label, LabeledSample};
use gadir_transform::{MissingLabelPolicy, TransformError, TransformOptions, prepare, transform};
use tempfile::TempDir;

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn host_filter_and_unclear_removal() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "gadir_metadata.csv",
        "Run,HOST,Group\n\
         R1,Homo sapiens,FoodAllergy\n\
         R2,Mus musculus,Control\n\
         R3,Homo sapiens,unclear\n\
         R4,Homo sapiens,ControlHiRisk\n",
    );

    let dataset = transform(&input, &TransformOptions::default()).unwrap();

    assert_eq!(
        dataset.records,
        vec![
            LabeledSample::new("R1", Label::FoodAllergy),
            LabeledSample::new("R4", Label::Control),
        ]
    );
    let output = read(&dir.path().join("gadir_preprocessed.csv"));
    insta::assert_snapshot!(output.trim_end(), @r"
    Run,label
    R1,1
    R4,0
    ");
}

#[test]
fn no_organism_columns_keeps_every_row() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "cohort.csv",
        "Run,Group,Age\nA1,Control,4\nA2,FoodAllergy,7\nA3,ControlHiRisk,2\n",
    );

    let dataset = transform(&input, &TransformOptions::default()).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.diagnostics.dropped_host, 0);
    assert_eq!(dataset.diagnostics.dropped_organism, 0);
    assert_eq!(
        read(&dir.path().join("cohort_preprocessed.csv")),
        "Run,label\nA1,0\nA2,1\nA3,0\n"
    );
}

#[test]
fn host_and_organism_both_apply() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "meta.csv",
        "Run,HOST,Organism,Group\n\
         R1,Homo sapiens,human gut metagenome,Control\n\
         R2,Homo sapiens,mouse gut metagenome,Control\n\
         R3,,human gut metagenome,FoodAllergy\n\
         R4,homo sapiens,Human,FoodAllergy\n",
    );

    let dataset = prepare(&input, &TransformOptions::default()).unwrap();

    assert_eq!(
        dataset.records,
        vec![
            LabeledSample::new("R1", Label::Control),
            LabeledSample::new("R4", Label::FoodAllergy),
        ]
    );
    assert_eq!(dataset.diagnostics.dropped_host, 1);
    assert_eq!(dataset.diagnostics.dropped_organism, 1);
}

#[test]
fn unmapped_group_is_reported_and_excluded() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "meta.csv",
        "Run,Group\nR1,Control\nR2,Unknown\nR3,FoodAllergy\n",
    );

    let dataset = transform(&input, &TransformOptions::default()).unwrap();

    assert_eq!(dataset.diagnostics.missing_label, 1);
    assert_eq!(dataset.diagnostics.missing_run, 0);
    assert!(dataset.diagnostics.unmapped_groups.contains("Unknown"));
    assert_eq!(
        read(&dir.path().join("meta_preprocessed.csv")),
        "Run,label\nR1,0\nR3,1\n"
    );
}

#[test]
fn missing_group_column_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "meta.csv", "Run,HOST\nR1,Homo sapiens\n");

    let err = transform(&input, &TransformOptions::default()).unwrap_err();

    assert!(matches!(
        err,
        TransformError::DataFormat(IngestError::MissingColumn { ref column, .. }) if column == "Group"
    ));
    assert!(!dir.path().join("meta_preprocessed.csv").exists());
}

#[test]
fn strict_policy_writes_nothing_on_missing_label() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "meta.csv", "Run,Group\nR1,Control\nR2,Pending\n");
    let output = dir.path().join("labels.csv");
    let options = TransformOptions::new()
        .with_output_path(Some(output.clone()))
        .with_missing_label_policy(MissingLabelPolicy::Fail);

    let err = transform(&input, &options).unwrap_err();

    assert!(matches!(
        err,
        TransformError::TypeCoercion {
            missing_labels: 1,
            ..
        }
    ));
    assert!(!output.exists());
}

#[test]
fn explicit_output_path_is_used() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "meta.csv", "Run,Group\nR1,FoodAllergy\n");
    let output = dir.path().join("labels.csv");
    let options = TransformOptions::new().with_output_path(Some(output.clone()));

    transform(&input, &options).unwrap();

    assert_eq!(read(&output), "Run,label\nR1,1\n");
    assert!(!dir.path().join("meta_preprocessed.csv").exists());
}

#[test]
fn rerun_produces_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "meta.csv",
        "Run,Organism,Group\nR9,human,Control\nR1,human,FoodAllergy\nR5,mouse,Control\n",
    );
    let output = dir.path().join("meta_preprocessed.csv");

    transform(&input, &TransformOptions::default()).unwrap();
    let first = fs::read(&output).unwrap();
    transform(&input, &TransformOptions::default()).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), "Run,label\nR9,0\nR1,1\n");
}

#[test]
fn extra_columns_are_dropped() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "meta.csv",
        "BioSample,Run,Age,Sex,Group,Country\nS1,R1,3,F,Control,US\n",
    );

    transform(&input, &TransformOptions::default()).unwrap();

    let output = read(&dir.path().join("meta_preprocessed.csv"));
    for line in output.lines() {
        assert_eq!(line.split(',').count(), 2);
    }
    assert_eq!(output, "Run,label\nR1,0\n");
}
