//! CSV loading into typed sample records.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use gadir_model::{SampleRecord, SampleTable};

use crate::error::{IngestError, Result};
use crate::header::{ColumnLayout, normalize_header};
use crate::missing::is_missing_value;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the header)
    Ok(())
}

fn cell(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    let value = record.get(index?)?.trim();
    if is_missing_value(value) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Reads a sample metadata CSV into a [`SampleTable`].
///
/// The first row is the header. Only `Run`, `Group`, `HOST` and `Organism`
/// are kept; other columns are ignored. Row order follows the file.
pub fn read_sample_table(path: &Path) -> Result<SampleTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| IngestError::csv(path, &e))?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::csv(path, &e))?
        .iter()
        .map(normalize_header)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let layout = ColumnLayout::resolve(&headers, path)?;
    let columns = layout.organism_columns();

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| IngestError::csv(path, &e))?;
        records.push(SampleRecord {
            run: cell(&record, Some(layout.run)),
            host: cell(&record, layout.host),
            organism: cell(&record, layout.organism),
            group: cell(&record, Some(layout.group)),
        });
    }

    tracing::debug!(
        path = %path.display(),
        rows = records.len(),
        columns = headers.len(),
        host_column = columns.host,
        organism_column = columns.organism,
        "loaded sample metadata"
    );

    Ok(SampleTable::new(columns, records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_sample_table_keeps_row_order() {
        let file = create_temp_csv(
            "Run,HOST,Group,Age\nR2,Homo sapiens,Control,30\nR1,Mus musculus,FoodAllergy,2\n",
        );
        let table = read_sample_table(file.path()).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.columns.host);
        assert!(!table.columns.organism);
        assert_eq!(table.records[0].run.as_deref(), Some("R2"));
        assert_eq!(table.records[1].run.as_deref(), Some("R1"));
        assert_eq!(table.records[1].host.as_deref(), Some("Mus musculus"));
        assert!(table.records[0].organism.is_none());
    }

    #[test]
    fn test_blank_and_null_cells_are_missing() {
        let file = create_temp_csv("Run,Organism,Group\n,NA,Control\nR2, human gut ,\n");
        let table = read_sample_table(file.path()).unwrap();

        assert!(table.records[0].run.is_none());
        assert!(table.records[0].organism.is_none());
        assert_eq!(table.records[1].organism.as_deref(), Some("human gut"));
        assert!(table.records[1].group.is_none());
    }

    #[test]
    fn test_bom_prefixed_header() {
        let file = create_temp_csv("\u{feff}Run,Group\nR1,Control\n");
        let table = read_sample_table(file.path()).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.records[0].run.as_deref(), Some("R1"));
    }

    #[test]
    fn test_missing_group_column() {
        let file = create_temp_csv("Run,HOST\nR1,Homo sapiens\n");
        let result = read_sample_table(file.path());

        assert!(matches!(
            result,
            Err(IngestError::MissingColumn { ref column, .. }) if column == "Group"
        ));
    }

    #[test]
    fn test_empty_file() {
        let file = create_temp_csv("");
        let result = read_sample_table(file.path());

        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_ragged_row_is_parse_error() {
        let file = create_temp_csv("Run,Group\nR1,Control,extra\n");
        let result = read_sample_table(file.path());

        assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    }

    #[test]
    fn test_file_not_found() {
        let result = read_sample_table(Path::new("/nonexistent/gadir_metadata.csv"));

        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_utf16_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xFE, b'R', 0]).unwrap();
        let result = validate_encoding(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_file_size_limit() {
        let file = create_temp_csv("Run,Group\nR1,Control\n");

        assert!(check_file_size_with_limit(file.path(), 1024).is_ok());
        assert!(matches!(
            check_file_size_with_limit(file.path(), 4),
            Err(IngestError::FileTooLarge { max_size: 4, .. })
        ));
    }
}
