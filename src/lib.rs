//! transport-rs: Breakthrough-Curve Analysis for Column Transport Experiments
//!
//! A small analysis pipeline for laboratory column-transport data: it reads a
//! delimited sample table, derives the breakthrough curve (normalized
//! concentration vs. pore volumes), estimates the retardation factor from the
//! half-maximum crossing, and reports the results as a plot and a text
//! summary.
//!
//! # Architecture
//!
//! Four stages, executed strictly in sequence:
//!
//! 1. **Loader** ([`data::loader`]) — CSV → [`SampleTable`](data::SampleTable)
//! 2. **Transform** ([`analysis::breakthrough`]) — derived columns
//!    (`cumulative_volume`, `pore_volumes`, `C_normalized`)
//! 3. **Estimator** ([`analysis::retardation`]) — half-maximum crossing →
//!    retardation factor `R`
//! 4. **Reporter** ([`output`]) — breakthrough plot + key-value summary file
//!
//! Each stage consumes the previous stage's output; there is no feedback and
//! no shared mutable state.
//!
//! # Quick Start
//!
//! ```rust
//! use transport_rs::prelude::*;
//!
//! // 1. Build a sample table (normally loaded from CSV with `load_samples`)
//! let table = SampleTable::from_rows(vec![
//!     SampleRow::new(0.0, 0.0),
//!     SampleRow::new(1.0, 5.0),
//!     SampleRow::new(2.0, 10.0),
//!     SampleRow::new(3.0, 5.0),
//! ]);
//!
//! // 2. Derive the breakthrough curve
//! let params = ExperimentParams::default();
//! let curve = compute_breakthrough_curve(table, &params);
//!
//! // 3. Estimate the retardation factor
//! let estimate = estimate_retardation(&curve);
//! println!("R = {:.3}", estimate.retardation_factor);
//! ```
//!
//! # Modules
//!
//! - [`data`]: Sample table, experiment parameters, CSV loader
//! - [`analysis`]: Breakthrough transform and retardation estimator
//! - [`output`]: Plot rendering and summary export

pub mod data;

pub mod analysis;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use transport_rs::prelude::*;
    //! ```
    pub use crate::data::{loader::load_samples,
                          loader::DataError,
                          table::ExperimentParams,
                          table::SampleRow,
                          table::SampleTable};
    pub use crate::analysis::{compute_breakthrough_curve,
                              estimate_retardation,
                              BreakthroughCurve,
                              RetardationEstimate};
    pub use crate::output::{plot_breakthrough,
                            write_summary,
                            PlotConfig,
                            TransportSummary};
}
