//! Retardation-factor estimation
//!
//! Walks the breakthrough curve in row order for the first point where
//! `C_normalized` reaches half of the maximum. The pore-volume coordinate of
//! that point, divided by the ideal non-retarded tracer peak (one pore
//! volume, plug-flow assumption), is the retardation factor `R`.
//!
//! When the curve never reaches the half maximum, the last row's pore-volume
//! value is used. That fallback is part of the heuristic, not an error.
//!
//! The estimator is total over any non-empty curve. An empty curve panics
//! (index out of range); emptiness is not guarded here.

use crate::analysis::breakthrough::BreakthroughCurve;

/// Threshold on `C_normalized` defining the breakthrough midpoint
pub const HALF_MAX_THRESHOLD: f64 = 0.5;

/// Pore volumes at which an ideal non-retarded tracer peaks (plug flow)
pub const NON_RETARDED_PEAK_PORE_VOLUMES: f64 = 1.0;

/// Result of the half-maximum scan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetardationEstimate {
    /// Retardation factor `R`
    pub retardation_factor: f64,

    /// Pore volumes at the first `C/C0 >= 0.5` crossing (or at the last row
    /// when the curve never crosses)
    pub half_max_pore_volume: f64,
}

/// Estimate the retardation factor from a breakthrough curve
///
/// # Panics
///
/// Panics when the curve has no rows.
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
/// let estimate = estimate_retardation(&curve);
///
/// assert_eq!(estimate.retardation_factor, 0.25);
/// ```
pub fn estimate_retardation(curve: &BreakthroughCurve) -> RetardationEstimate {
    let crossing = curve
        .c_normalized
        .iter()
        .position(|&c| c >= HALF_MAX_THRESHOLD);

    // No crossing: fall back to the final row of the curve.
    let idx = crossing.unwrap_or(curve.len() - 1);

    let half_max_pore_volume = curve.pore_volumes[idx];
    let retardation_factor = half_max_pore_volume / NON_RETARDED_PEAK_PORE_VOLUMES;

    RetardationEstimate {
        retardation_factor,
        half_max_pore_volume,
    }
}

// =================================================================================================
// Tests
// =================================================================================================
