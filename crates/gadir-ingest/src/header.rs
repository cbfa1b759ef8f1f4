//! Header resolution for sample metadata files.

use std::path::Path;

use gadir_model::{GROUP_COLUMN, HOST_COLUMN, ORGANISM_COLUMN, OrganismColumns, RUN_COLUMN};

use crate::error::{IngestError, Result};

/// Positions of the columns the transform reads.
///
/// Column names match exactly (case-sensitive). When a name repeats, the
/// first occurrence wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub run: usize,
    pub group: usize,
    pub host: Option<usize>,
    pub organism: Option<usize>,
}

impl ColumnLayout {
    /// Resolve column positions from a header row.
    ///
    /// Fails with [`IngestError::MissingColumn`] when `Group` or `Run` is absent.
    pub fn resolve(headers: &[String], path: &Path) -> Result<Self> {
        let position = |name: &str| headers.iter().position(|header| header == name);
        let required = |name: &str| {
            position(name).ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
        };

        Ok(Self {
            group: required(GROUP_COLUMN)?,
            run: required(RUN_COLUMN)?,
            host: position(HOST_COLUMN),
            organism: position(ORGANISM_COLUMN),
        })
    }

    pub fn organism_columns(&self) -> OrganismColumns {
        OrganismColumns {
            host: self.host.is_some(),
            organism: self.organism.is_some(),
        }
    }
}

/// Trim whitespace and a stray byte-order mark from a header cell.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}
