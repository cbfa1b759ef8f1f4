//! Configuration options for dataset construction.

use std::path::{Path, PathBuf};

use crate::output::default_output_path;

/// How rows whose `Group` has no label are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingLabelPolicy {
    /// Drop the rows before projection and report them as a warning.
    #[default]
    Exclude,
    /// Abort with [`TransformError::TypeCoercion`](crate::TransformError::TypeCoercion).
    Fail,
}

/// Options for [`transform`](crate::transform) and [`prepare`](crate::prepare).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformOptions {
    /// Output destination; `None` derives a sibling of the input file.
    pub output_path: Option<PathBuf>,
    pub missing_label_policy: MissingLabelPolicy,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_path(mut self, path: Option<PathBuf>) -> Self {
        self.output_path = path;
        self
    }

    #[must_use]
    pub fn with_missing_label_policy(mut self, policy: MissingLabelPolicy) -> Self {
        self.missing_label_policy = policy;
        self
    }

    /// The output path for `input`: the explicit path if set, otherwise
    /// [`default_output_path`].
    pub fn resolve_output_path(&self, input: &Path) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| default_output_path(input))
    }
}
