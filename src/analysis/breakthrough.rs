//! Breakthrough-curve transform
//!
//! Derives the dimensionless breakthrough curve from raw samples:
//!
//! - `cumulative_volume = flow_rate * time` (mL)
//! - `pore_volumes = cumulative_volume / pore_volume_total`
//! - `C_normalized = concentration / C0`
//!
//! where `pore_volume_total = column_area * column_length * porosity` and
//! `C0` is the maximum observed concentration (1.0 when that maximum is
//! exactly zero, so normalization stays defined).
//!
//! The transform is a pure function: same table and parameters, same derived
//! columns. A zero `pore_volume_total` (zero porosity or column length) is
//! NOT guarded; the division follows IEEE-754 and `pore_volumes` becomes
//! infinite or NaN.

use crate::data::table::{ExperimentParams, SampleTable};

/// Column cross-sectional area (cm²), fixed in this version
pub const COLUMN_AREA_CM2: f64 = 1.0;

/// A sample table with its derived breakthrough columns
///
/// Produced by [`compute_breakthrough_curve`] and consumed by the estimator
/// and the reporters. The derived vectors are index-aligned with
/// `samples.rows()`.
#[derive(Debug, Clone)]
pub struct BreakthroughCurve {
    /// The source samples, unchanged and in original order
    pub samples: SampleTable,

    /// Cumulative effluent volume per row (mL)
    pub cumulative_volume: Vec<f64>,

    /// Cumulative volume expressed in pore volumes (dimensionless)
    pub pore_volumes: Vec<f64>,

    /// Concentration normalized by `C0` (dimensionless)
    pub c_normalized: Vec<f64>,

    /// Normalization constant: maximum observed concentration (mg/L),
    /// substituted with 1.0 when the maximum is exactly zero
    pub c0: f64,

    /// Total pore volume of the column (mL)
    pub pore_volume_total: f64,
}

impl BreakthroughCurve {
    /// Number of rows

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check the curve has no rows

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterate `(pore_volumes, C_normalized)` pairs in row order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.pore_volumes
            .iter()
            .zip(self.c_normalized.iter())
            .map(|(pv, c)| (*pv, *c))
    }
}

/// Compute the breakthrough curve from samples and run parameters
///
/// # Arguments
///
/// * `samples` — measured rows, chronological order
/// * `params`  — column length (cm), flow rate (mL/min), porosity
///
/// # Example
///
/// ```rust
/// use transport_rs::prelude::*;
///
/// let table = SampleTable::from_rows(vec![
///     SampleRow::new(0.0, 0.0),
///     SampleRow::new(1.0, 5.0),
///     SampleRow::new(2.0, 10.0),
/// ]);
/// let curve = compute_breakthrough_curve(table, &ExperimentParams::default());
///
/// assert_eq!(curve.c0, 10.0);
/// assert_eq!(curve.pore_volume_total, 4.0); // 1.0 cm² * 10 cm * 0.4
/// ```
pub fn compute_breakthrough_curve(
    samples: SampleTable,
    params: &ExperimentParams,
) -> BreakthroughCurve {
    // C0 is the maximum observed concentration; a zero maximum would make
    // every normalized value 0/0, so it is replaced by 1.0.
    let max_concentration = samples.max_concentration();
    let c0 = if max_concentration == 0.0 {
        1.0
    } else {
        max_concentration
    };

    let pore_volume_total = COLUMN_AREA_CM2 * params.column_length * params.porosity;

    let cumulative_volume: Vec<f64> = samples
        .rows()
        .iter()
        .map(|row| params.flow_rate * row.time)
        .collect();

    let pore_volumes: Vec<f64> = cumulative_volume
        .iter()
        .map(|v| v / pore_volume_total)
        .collect();

    let c_normalized: Vec<f64> = samples
        .rows()
        .iter()
        .map(|row| row.concentration / c0)
        .collect();

    BreakthroughCurve {
        samples,
        cumulative_volume,
        pore_volumes,
        c_normalized,
        c0,
        pore_volume_total,
    }
}

// =================================================================================================
// Tests
// =================================================================================================
