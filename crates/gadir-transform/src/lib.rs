//! Labeled dataset construction.
//!
//! This crate turns a sample metadata table into a `Run,label` dataset for
//! binary classification:
//!
//! - **filter**: human-host/organism restriction and `unclear` cohort removal
//! - **labeling**: `Group` to [`Label`](gadir_model::Label) assignment
//! - **projection**: guarded reduction to `(Run, label)` records with
//!   missing-value accounting
//! - **output**: default output path rule and CSV writing
//! - **pipeline**: the `prepare` / `transform` entry points
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gadir_transform::{TransformOptions, transform};
//!
//! let dataset = transform(Path::new("gadir_metadata.csv"), &TransformOptions::default())?;
//! println!("{} labeled samples", dataset.len());
//! ```

mod error;
pub mod filter;
pub mod labeling;
mod options;
pub mod output;
pub mod pipeline;
pub mod projection;

pub use error::{Result, TransformError};
pub use options::{MissingLabelPolicy, TransformOptions};
pub use output::{OUTPUT_SUFFIX, default_output_path, write_dataset, write_dataset_to};
pub use pipeline::{prepare, prepare_table, transform};
