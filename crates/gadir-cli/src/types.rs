use std::path::PathBuf;

use gadir_model::LabeledDataset;

/// Outcome of one CLI run.
#[derive(Debug)]
pub struct RunResult {
    pub input: PathBuf,
    /// Written output file; `None` on a dry run.
    pub output: Option<PathBuf>,
    pub dataset: LabeledDataset,
}
