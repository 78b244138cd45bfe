use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

use transport_rs::analysis::{compute_breakthrough_curve, estimate_retardation};
use transport_rs::data::{load_samples, ExperimentParams};
use transport_rs::output::{plot_breakthrough, write_summary, TransportSummary};

#[derive(Parser)]
#[command(name = "transport-rs")]
#[command(about = "Analyze colloid-facilitated contaminant transport data", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to input CSV file
    #[arg(value_name = "INPUT_CSV")]
    input_csv: PathBuf,

    /// Column length (cm)
    #[arg(long = "column_length", value_name = "FLOAT", default_value_t = 10.0)]
    column_length: f64,

    /// Flow rate (mL/min)
    #[arg(long = "flow_rate", value_name = "FLOAT", default_value_t = 1.0)]
    flow_rate: f64,

    /// Soil porosity (dimensionless)
    #[arg(long = "porosity", value_name = "FLOAT", default_value_t = 0.4)]
    porosity: f64,

    /// Filename for output plot
    #[arg(long = "output_plot", value_name = "FILE", default_value = "breakthrough_curve.png")]
    output_plot: String,

    /// Filename for summary text file
    #[arg(long = "output_summary", value_name = "FILE", default_value = "transport_summary.txt")]
    output_summary: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    // Loading is the one stage with a recoverable failure: report and exit
    // before any output file is touched.
    let samples = match load_samples(&cli.input_csv) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error loading data: {e}");
            std::process::exit(1);
        }
    };

    let params = ExperimentParams::new(cli.column_length, cli.flow_rate, cli.porosity);

    let curve = compute_breakthrough_curve(samples, &params);
    let estimate = estimate_retardation(&curve);
    log::info!(
        "half-maximum crossing at {:.3} pore volumes",
        estimate.half_max_pore_volume
    );

    plot_breakthrough(&curve, &cli.output_plot, None)?;
    println!("Plot saved to {}", cli.output_plot);

    let summary = TransportSummary::new(
        cli.input_csv.display().to_string(),
        params,
        &curve,
        &estimate,
    );
    write_summary(&summary, &cli.output_summary)?;

    println!("Analysis complete. Summary written to {}", cli.output_summary);
    println!("Retardation factor R = {:.3}", estimate.retardation_factor);

    Ok(())
}
