//! Visualization of breakthrough curves
//!
//! Renders `C_normalized` against `pore_volumes` with the `plotters`
//! library, overlaid with the half-maximum reference line the retardation
//! estimate is read from.
//!
//! All rendering goes through an explicit [`PlotConfig`] context — there is
//! no process-global figure state. The lifecycle is explicit: create the
//! drawing area, draw, present, release.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use transport_rs::output::visualization::{plot_breakthrough, PlotConfig};
//!
//! // Defaults: 2400×1500 px (an 8×5 in figure at 300 dpi)
//! plot_breakthrough(&curve, "breakthrough_curve.png", None)?;
//!
//! // Or with a custom config
//! let mut config = PlotConfig::breakthrough("Column 3, tracer run");
//! config.width = 1200;
//! config.height = 750;
//! plot_breakthrough(&curve, "run3.png", Some(&config))?;
//! ```
//!
//! The output format follows the file extension: `.svg` produces a vector
//! file, anything else a bitmap.

pub mod config;
pub mod breakthrough;

pub use config::{PlotConfig, NO_TITLE};

pub use breakthrough::plot_breakthrough;
