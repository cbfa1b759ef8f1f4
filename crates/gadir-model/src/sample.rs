//! Sample metadata rows.

/// Sample identifier column.
pub const RUN_COLUMN: &str = "Run";
/// Clinical cohort column.
pub const GROUP_COLUMN: &str = "Group";
/// Host species column (optional).
pub const HOST_COLUMN: &str = "HOST";
/// Source organism column (optional).
pub const ORGANISM_COLUMN: &str = "Organism";
/// Derived label column in the output.
pub const LABEL_COLUMN: &str = "label";

/// One row of the sample metadata table.
///
/// Every field is optional at the cell level: a column can exist in the
/// header while an individual row leaves it blank. Whether the optional
/// organism columns exist at all is tracked by [`OrganismColumns`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleRecord {
    pub run: Option<String>,
    pub host: Option<String>,
    pub organism: Option<String>,
    pub group: Option<String>,
}

impl SampleRecord {
    pub fn new(run: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            run: Some(run.into()),
            group: Some(group.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    #[must_use]
    pub fn with_organism(mut self, organism: impl Into<String>) -> Self {
        self.organism = Some(organism.into());
        self
    }
}

/// Which organism-related columns are present in the input header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganismColumns {
    pub host: bool,
    pub organism: bool,
}

impl OrganismColumns {
    pub const NONE: Self = Self {
        host: false,
        organism: false,
    };
    pub const BOTH: Self = Self {
        host: true,
        organism: true,
    };

    /// True when at least one organism column exists.
    pub fn any(self) -> bool {
        self.host || self.organism
    }
}

/// The full input table, in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SampleTable {
    pub columns: OrganismColumns,
    pub records: Vec<SampleRecord>,
}

impl SampleTable {
    pub fn new(columns: OrganismColumns, records: Vec<SampleRecord>) -> Self {
        Self { columns, records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
