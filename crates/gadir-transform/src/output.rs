//! Labeled dataset output.

use std::io::Write;
use std::path::{Path, PathBuf};

use gadir_model::{LABEL_COLUMN, LabeledSample, RUN_COLUMN};

use crate::error::{Result, TransformError};

/// Suffix appended to the input stem for the default output file.
pub const OUTPUT_SUFFIX: &str = "_preprocessed";

const METADATA_SUFFIX: &str = "_metadata";

/// Default output location for `input`.
///
/// A sibling CSV in the input's directory named after the input stem with
/// a trailing `_metadata` removed, plus [`OUTPUT_SUFFIX`]:
/// `data/gadir_metadata.csv` becomes `data/gadir_preprocessed.csv` and
/// `data/cohort.tsv` becomes `data/cohort_preprocessed.csv`.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset");
    let base = match stem.strip_suffix(METADATA_SUFFIX) {
        Some(base) if !base.is_empty() => base,
        _ => stem,
    };
    let file_name = format!("{base}{OUTPUT_SUFFIX}.csv");
    match input.parent() {
        Some(parent) => parent.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Write records as `Run,label` CSV to any writer.
///
/// The header is always written, even when there are no records.
pub fn write_dataset_to<W: Write>(writer: W, records: &[LabeledSample]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    writer.write_record([RUN_COLUMN, LABEL_COLUMN])?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write records to `path`, replacing any existing file.
pub fn write_dataset(path: &Path, records: &[LabeledSample]) -> Result<()> {
    let file = std::fs::File::create(path).map_err(|source| TransformError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_dataset_to(std::io::BufWriter::new(file), records).map_err(|e| {
        TransformError::Write {
            path: path.to_path_buf(),
            source: e.into(),
        }
    })?;

    tracing::info!(path = %path.display(), rows = records.len(), "wrote labeled dataset");
    Ok(())
}
