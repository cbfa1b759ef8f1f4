use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use gadir_transform::{MissingLabelPolicy, TransformOptions, prepare, transform};

use crate::cli::Cli;
use crate::types::RunResult;

/// Input file looked up next to the executable when no INPUT is given.
pub const DEFAULT_INPUT_FILE: &str = "gadir_metadata.csv";

/// `gadir_metadata.csv` in the directory containing the running executable.
pub fn default_input_path() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("locate gadir executable")?;
    Ok(default_input_in(exe.parent().unwrap_or_else(|| Path::new("."))))
}

/// `gadir_metadata.csv` inside `dir`.
pub fn default_input_in(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_INPUT_FILE)
}

/// Map CLI flags onto transform options.
pub fn transform_options(cli: &Cli) -> TransformOptions {
    let policy = if cli.strict {
        MissingLabelPolicy::Fail
    } else {
        MissingLabelPolicy::Exclude
    };
    TransformOptions::new()
        .with_output_path(cli.output.clone())
        .with_missing_label_policy(policy)
}

pub fn run(cli: &Cli) -> Result<RunResult> {
    let input = match &cli.input {
        Some(path) => path.clone(),
        None => default_input_path()?,
    };
    let span = info_span!("run", input = %input.display(), dry_run = cli.dry_run);
    let _guard = span.enter();
    let start = Instant::now();

    let options = transform_options(cli);
    let (dataset, output) = if cli.dry_run {
        let dataset = prepare(&input, &options)
            .with_context(|| format!("build dataset from {}", input.display()))?;
        (dataset, None)
    } else {
        let dataset = transform(&input, &options)
            .with_context(|| format!("build dataset from {}", input.display()))?;
        (dataset, Some(options.resolve_output_path(&input)))
    };

    info!(
        records = dataset.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "run complete"
    );
    Ok(RunResult {
        input,
        output,
        dataset,
    })
}
