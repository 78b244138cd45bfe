//! Text summary export
//!
//! Writes the fixed-format key-value report of an analysis run. The layout
//! is exactly nine newline-terminated lines, in fixed order:
//!
//! ```text
//! === Colloid-Facilitated Transport Analysis ===
//! Input file: experiment.csv
//! Column length: 10 cm
//! Flow rate: 1 mL/min
//! Porosity: 0.4
//! Retardation factor R: 0.250
//! Pore volume at C/C0 = 0.5: 0.250
//! Maximum concentration C0: 10.000 mg/L
//! Number of data points: 5
//! ```
//!
//! `R`, the half-maximum pore volume and `C0` use three decimal places; the
//! echoed parameters keep their plain formatting.

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::analysis::breakthrough::BreakthroughCurve;
use crate::analysis::retardation::RetardationEstimate;
use crate::data::table::ExperimentParams;

/// Flat record of one analysis run
///
/// Write-once: produced at the end of the pipeline, never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportSummary {
    /// Path of the input table, as given on the command line
    pub input_file: String,

    /// Echoed experiment parameters
    pub params: ExperimentParams,

    /// Retardation factor `R`
    pub retardation_factor: f64,

    /// Pore volumes at the half-maximum crossing
    pub half_max_pore_volume: f64,

    /// Normalization constant `C0` (mg/L)
    pub c0: f64,

    /// Number of data rows
    pub n_points: usize,
}

impl TransportSummary {
    /// Assemble the summary record from the pipeline outputs
    pub fn new(
        input_file: impl Into<String>,
        params: ExperimentParams,
        curve: &BreakthroughCurve,
        estimate: &RetardationEstimate,
    ) -> Self {
        Self {
            input_file: input_file.into(),
            params,
            retardation_factor: estimate.retardation_factor,
            half_max_pore_volume: estimate.half_max_pore_volume,
            c0: curve.c0,
            n_points: curve.len(),
        }
    }
}

/// Write the summary to a text file
///
/// Overwrites the target unconditionally. Lines and order are fixed; see the
/// module documentation.
///
/// # Errors
///
/// Returns `Err` when the file cannot be created or written.
pub fn write_summary(summary: &TransportSummary, output_path: &str) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(output_path)?;

    writeln!(file, "=== Colloid-Facilitated Transport Analysis ===")?;
    writeln!(file, "Input file: {}", summary.input_file)?;
    writeln!(file, "Column length: {} cm", summary.params.column_length)?;
    writeln!(file, "Flow rate: {} mL/min", summary.params.flow_rate)?;
    writeln!(file, "Porosity: {}", summary.params.porosity)?;
    writeln!(file, "Retardation factor R: {:.3}", summary.retardation_factor)?;
    writeln!(
        file,
        "Pore volume at C/C0 = 0.5: {:.3}",
        summary.half_max_pore_volume
    )?;
    writeln!(file, "Maximum concentration C0: {:.3} mg/L", summary.c0)?;
    writeln!(file, "Number of data points: {}", summary.n_points)?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
