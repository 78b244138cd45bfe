//! Breakthrough-curve analysis
//!
//! Two stages, both pure over in-memory data:
//!
//! - [`breakthrough`] — the transform: derives `cumulative_volume`,
//!   `pore_volumes` and `C_normalized` from the sample table and the
//!   experiment parameters.
//! - [`retardation`] — the estimator: scans the normalized sequence for the
//!   half-maximum crossing and derives the retardation factor `R`.
//!
//! The normalization constant `C0` and the last-row fallback of the
//! estimator are heuristic policy choices carried over from established
//! practice; they are preserved exactly, not refined.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod breakthrough;
pub mod retardation;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use breakthrough::{compute_breakthrough_curve, BreakthroughCurve, COLUMN_AREA_CM2};
pub use retardation::{estimate_retardation, RetardationEstimate, HALF_MAX_THRESHOLD};
