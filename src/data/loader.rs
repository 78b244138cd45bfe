//! CSV ingestion for experiment data
//!
//! Reads a comma-separated table with a header row into a
//! [`SampleTable`]. Only the presence of the required `time` and
//! `concentration` columns is validated; every other column is carried
//! through unexamined as row metadata.
//!
//! Malformed numeric cells are not handled specially: they surface as the
//! standard parser's error, wrapped in [`DataError::Parse`].
//!
//! # Example
//!
//! ```rust,ignore
//! use transport_rs::data::loader::load_samples;
//!
//! let table = load_samples("experiment.csv")?;
//! println!("{} samples", table.len());
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use thiserror::Error;

use super::table::{SampleRow, SampleTable};

/// Error raised while loading experiment data
///
/// `MissingColumn` is the one recoverable kind the entry point reports as a
/// clean failure; the other variants carry the underlying library errors
/// through unchanged.
#[derive(Debug, Error)]
pub enum DataError {
    /// A required column is absent from the header row
    #[error("required column '{0}' not found in CSV")]
    MissingColumn(&'static str),

    /// The file could not be opened or a record could not be read
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A `time` or `concentration` cell is not a valid float
    #[error(transparent)]
    Parse(#[from] std::num::ParseFloatError),
}

/// Load experiment samples from a CSV file
///
/// Expected layout: header row naming at least `time` and `concentration`;
/// one sample per record, in chronological order. Additional columns
/// (e.g. `bulk_density`, `colloid_concentration`) are kept as per-row text
/// metadata and ignored by the computation.
///
/// # Errors
///
/// - [`DataError::MissingColumn`] when `time` or `concentration` is absent
/// - [`DataError::Csv`] when the file cannot be opened or read
/// - [`DataError::Parse`] when a required cell is not a valid float
pub fn load_samples(path: impl AsRef<Path>) -> Result<SampleTable, DataError> {
    let path = path.as_ref();
    let mut reader = csv::Reader::from_path(path)?;

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let time_idx = headers
        .iter()
        .position(|h| h == "time")
        .ok_or(DataError::MissingColumn("time"))?;
    let conc_idx = headers
        .iter()
        .position(|h| h == "concentration")
        .ok_or(DataError::MissingColumn("concentration"))?;

    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;

        let time: f64 = record.get(time_idx).unwrap_or("").parse()?;
        let concentration: f64 = record.get(conc_idx).unwrap_or("").parse()?;

        let mut extra = BTreeMap::new();
        for (i, cell) in record.iter().enumerate() {
            if i == time_idx || i == conc_idx {
                continue;
            }
            if let Some(name) = headers.get(i) {
                extra.insert(name.clone(), cell.to_string());
            }
        }

        rows.push(SampleRow::with_extra(time, concentration, extra));
    }

    log::debug!("loaded {} samples from {}", rows.len(), path.display());

    Ok(SampleTable::from_rows(rows))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_minimal_table() {
        let file = write_csv("time,concentration\n0.0,0.0\n1.0,5.0\n2.0,10.0\n");
        let table = load_samples(file.path()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.times(), vec![0.0, 1.0, 2.0]);
        assert_eq!(table.concentrations(), vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn test_load_preserves_row_order() {
        // Deliberately non-monotonic times: loader must not reorder
        let file = write_csv("time,concentration\n2.0,1.0\n0.0,2.0\n1.0,3.0\n");
        let table = load_samples(file.path()).unwrap();
        assert_eq!(table.times(), vec![2.0, 0.0, 1.0]);
    }

    #[test]
    fn test_load_keeps_extra_columns_as_metadata() {
        let file = write_csv(
            "time,bulk_density,concentration,label\n1.0,1.6,5.0,run-a\n2.0,1.7,6.0,run-b\n",
        );
        let table = load_samples(file.path()).unwrap();
        let rows = table.rows();
        assert_eq!(rows[0].extra.get("bulk_density").unwrap(), "1.6");
        assert_eq!(rows[1].extra.get("label").unwrap(), "run-b");
        assert!(rows[0].extra.get("time").is_none());
        assert!(rows[0].extra.get("concentration").is_none());
    }

    #[test]
    fn test_missing_time_column() {
        let file = write_csv("t,concentration\n0.0,1.0\n");
        let err = load_samples(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("time")));
    }

    #[test]
    fn test_missing_concentration_column() {
        let file = write_csv("time,conc\n0.0,1.0\n");
        let err = load_samples(file.path()).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("concentration")));
    }

    #[test]
    fn test_missing_column_message_names_the_column() {
        let file = write_csv("time,conc\n0.0,1.0\n");
        let err = load_samples(file.path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required column 'concentration' not found in CSV"
        );
    }

    #[test]
    fn test_malformed_cell_is_a_parse_error() {
        let file = write_csv("time,concentration\n0.0,not-a-number\n");
        let err = load_samples(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }

    #[test]
    fn test_unreadable_file_is_a_csv_error() {
        let err = load_samples("/nonexistent/experiment.csv").unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }
}
