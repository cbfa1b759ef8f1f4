//! Sample metadata ingestion.
//!
//! Loads a delimited sample metadata file into a typed
//! [`SampleTable`](gadir_model::SampleTable), checking the required
//! `Run` and `Group` columns and recording which optional organism columns
//! exist.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use gadir_ingest::read_sample_table;
//!
//! let table = read_sample_table(Path::new("gadir_metadata.csv"))?;
//! println!("{} samples", table.len());
//! ```

mod error;
mod header;
mod missing;
mod reader;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use header::ColumnLayout;
pub use reader::{
    MAX_CSV_FILE_SIZE, check_file_size, check_file_size_with_limit, read_sample_table,
    validate_encoding,
};

// === Missing Values ===
pub use missing::{MISSING_VALUE_TOKENS, is_missing_value};
