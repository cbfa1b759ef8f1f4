//! CLI argument definitions for the cohort label builder.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gadir",
    version,
    about = "Build a Run,label dataset from sample metadata",
    long_about = "Build a binary classification dataset from a sample metadata CSV.\n\n\
                  Keeps human samples (HOST contains 'Homo sapiens', Organism contains \
                  'human'), drops the 'unclear' cohort and labels FoodAllergy as 1, \
                  Control and ControlHiRisk as 0."
)]
pub struct Cli {
    /// Sample metadata CSV (default: gadir_metadata.csv next to the executable).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output CSV (default: <INPUT stem>_preprocessed.csv beside the input).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Fail instead of dropping rows whose Group has no label.
    #[arg(long = "strict")]
    pub strict: bool,

    /// Build and report the dataset without writing the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
