//! Data model for the cohort label builder.
//!
//! - **sample**: typed sample metadata rows and input column presence
//! - **label**: binary class labels and the fixed group-to-label mapping
//! - **dataset**: projected `(Run, label)` records and the labeled dataset
//! - **diagnostics**: per-stage row counts gathered while building a dataset

pub mod dataset;
pub mod diagnostics;
pub mod label;
pub mod sample;

pub use dataset::{LabeledDataset, LabeledSample};
pub use diagnostics::DatasetDiagnostics;
pub use label::{Label, LabelMapping, UNCLEAR_GROUP, is_unclear_group};
pub use sample::{
    GROUP_COLUMN, HOST_COLUMN, LABEL_COLUMN, ORGANISM_COLUMN, OrganismColumns, RUN_COLUMN,
    SampleRecord, SampleTable,
};
