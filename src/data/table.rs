//! Sample table and experiment parameters
//!
//! The sample table is the unit of exchange between pipeline stages: the
//! loader produces it, the transform consumes it. Rows stay in source-file
//! order throughout.

use std::collections::BTreeMap;

/// One measured sample of the experiment
///
/// # Fields
///
/// - `time`: elapsed time since injection (minutes)
/// - `concentration`: effluent concentration (mg/L)
/// - `extra`: any additional columns of the source table, kept as text and
///   never examined by the computation
#[derive(Debug, Clone, PartialEq)]
pub struct SampleRow {
    /// Elapsed time (minutes)
    pub time: f64,

    /// Effluent concentration (mg/L)
    pub concentration: f64,

    /// Passthrough metadata columns (header name → cell text)
    pub extra: BTreeMap<String, String>,
}

impl SampleRow {
    /// Create a row with no metadata columns

    pub fn new(time: f64, concentration: f64) -> Self {
        Self {
            time,
            concentration,
            extra: BTreeMap::new(),
        }
    }

    /// Create a row carrying metadata columns
    pub fn with_extra(time: f64, concentration: f64, extra: BTreeMap<String, String>) -> Self {
        Self {
            time,
            concentration,
            extra,
        }
    }
}

/// Ordered sequence of measured samples
///
/// Order is chronological and must match the source table: the
/// cumulative-volume transform and the half-maximum search both walk the
/// rows in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    rows: Vec<SampleRow>,
}

impl SampleTable {
    /// Build a table from rows, preserving their order
    pub fn from_rows(rows: Vec<SampleRow>) -> Self {
        Self { rows }
    }

    /// Number of rows

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check the table has no rows

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Borrow the rows in order

    pub fn rows(&self) -> &[SampleRow] {
        &self.rows
    }

    /// The `time` column in row order
    pub fn times(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.time).collect()
    }

    /// The `concentration` column in row order
    pub fn concentrations(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.concentration).collect()
    }

    /// Maximum of the `concentration` column
    ///
    /// Returns negative infinity for an empty table.
    pub fn max_concentration(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| r.concentration)
            .fold(f64::NEG_INFINITY, f64::max)
    }
}

/// Scalar inputs of a column-transport run
///
/// These are configuration, not derived values. The column cross-sectional
/// area is not a parameter in this version; see
/// [`COLUMN_AREA_CM2`](crate::analysis::breakthrough::COLUMN_AREA_CM2).
///
/// # Defaults
///
/// | Field           | Default | Unit          |
/// |-----------------|---------|---------------|
/// | `column_length` | 10.0    | cm            |
/// | `flow_rate`     | 1.0     | mL/min        |
/// | `porosity`      | 0.4     | dimensionless |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperimentParams {
    /// Column length (cm)
    pub column_length: f64,

    /// Flow rate (mL/min)
    pub flow_rate: f64,

    /// Soil porosity, 0–1 (dimensionless)
    pub porosity: f64,
}

impl Default for ExperimentParams {
    fn default() -> Self {
        Self {
            column_length: 10.0,
            flow_rate: 1.0,
            porosity: 0.4,
        }
    }
}

impl ExperimentParams {
    /// Create parameters for a run
    pub fn new(column_length: f64, flow_rate: f64, porosity: f64) -> Self {
        Self {
            column_length,
            flow_rate,
            porosity,
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn three_rows() -> SampleTable {
        SampleTable::from_rows(vec![
            SampleRow::new(0.0, 0.0),
            SampleRow::new(1.0, 7.5),
            SampleRow::new(2.0, 3.0),
        ])
    }

    #[test]
    fn test_table_len_and_empty() {
        assert_eq!(three_rows().len(), 3);
        assert!(!three_rows().is_empty());
        assert!(SampleTable::default().is_empty());
    }

    #[test]
    fn test_columns_preserve_row_order() {
        let table = three_rows();
        assert_eq!(table.times(), vec![0.0, 1.0, 2.0]);
        assert_eq!(table.concentrations(), vec![0.0, 7.5, 3.0]);
    }

    #[test]
    fn test_max_concentration() {
        assert_eq!(three_rows().max_concentration(), 7.5);
    }

    #[test]
    fn test_max_concentration_empty_is_neg_infinity() {
        assert_eq!(SampleTable::default().max_concentration(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_row_with_extra_keeps_metadata() {
        let mut extra = BTreeMap::new();
        extra.insert("bulk_density".to_string(), "1.6".to_string());
        let row = SampleRow::with_extra(1.0, 2.0, extra);
        assert_eq!(row.extra.get("bulk_density").unwrap(), "1.6");
    }

    #[test]
    fn test_params_defaults() {
        let params = ExperimentParams::default();
        assert_eq!(params.column_length, 10.0);
        assert_eq!(params.flow_rate, 1.0);
        assert_eq!(params.porosity, 0.4);
    }
}
