//! Breakthrough-curve rendering
//!
//! Draws `C_normalized` (y) against `pore_volumes` (x) as a connected line,
//! with a horizontal reference at the half-maximum threshold, axis labels,
//! legend, and grid. Output format follows the file extension: `.svg` for a
//! vector file, anything else for a bitmap.

use plotters::prelude::*;
use std::error::Error;

use crate::analysis::breakthrough::BreakthroughCurve;
use crate::analysis::retardation::HALF_MAX_THRESHOLD;
use super::config::{PlotConfig, NO_TITLE};

/// Plot a breakthrough curve to an image file
///
/// # Arguments
///
/// * `curve`       — transformed table with `pore_volumes` / `C_normalized`
/// * `output_path` — output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      — optional plot configuration; `None` uses defaults
///                   (2400×1500 px, an 8×5 in figure at 300 dpi)
///
/// # Errors
///
/// Returns `Err` if the backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use transport_rs::output::visualization::plot_breakthrough;
///
/// plot_breakthrough(&curve, "breakthrough_curve.png", None)?;
/// ```
pub fn plot_breakthrough(
    curve: &BreakthroughCurve,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::breakthrough(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let max_pore_volumes = curve.pore_volumes.last().copied().unwrap_or(1.0);
    // Keep the half-maximum reference inside the frame even when the curve
    // stays flat at zero.
    let max_c_normalized = curve
        .c_normalized
        .iter()
        .cloned()
        .fold(f64::NEG_INFINITY, f64::max)
        .max(HALF_MAX_THRESHOLD);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_breakthrough_impl(backend, curve, config, max_pore_volumes, max_c_normalized)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_breakthrough_impl(backend, curve, config, max_pore_volumes, max_c_normalized)
        }
    }
}

/// Render the breakthrough curve with the given drawing backend
fn plot_breakthrough_impl<DB: DrawingBackend>(
    backend: DB,
    curve: &BreakthroughCurve,
    config: &PlotConfig,
    max_pore_volumes: f64,
    max_c_normalized: f64,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..max_pore_volumes, 0.0..(max_c_normalized * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    // ── 1. C/C0 data line ────────────────────────────────────────────────────
    chart
        .draw_series(LineSeries::new(
            curve.points(),
            ShapeStyle::from(&config.line_color).stroke_width(config.line_width),
        ))?
        .label("C/C0")
        .legend(|(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], &config.line_color)
        });

    // ── 2. Half-maximum reference line ───────────────────────────────────────
    // DashedLineSeries is not available in all plotters versions; a dashed
    // look is emulated by sampling the span and keeping alternate points.
    let n_samples = 80usize;
    let reference = (0..=n_samples)
        .map(|i| {
            (
                max_pore_volumes * i as f64 / n_samples as f64,
                HALF_MAX_THRESHOLD,
            )
        })
        .enumerate()
        .filter_map(|(i, point)| if i % 2 == 0 { Some(point) } else { None });

    let reference_color = config.reference_color;
    chart
        .draw_series(LineSeries::new(
            reference,
            ShapeStyle::from(&reference_color).stroke_width(config.line_width),
        ))?
        .label("C/C0 = 0.5")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], &reference_color)
        });

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::breakthrough::compute_breakthrough_curve;
    use crate::data::table::{ExperimentParams, SampleRow, SampleTable};

    fn tracer_curve() -> BreakthroughCurve {
        let table = SampleTable::from_rows(vec![
            SampleRow::new(0.0, 0.0),
            SampleRow::new(1.0, 5.0),
            SampleRow::new(2.0, 10.0),
            SampleRow::new(3.0, 5.0),
            SampleRow::new(4.0, 0.0),
        ]);
        compute_breakthrough_curve(table, &ExperimentParams::default())
    }

    #[test]
    fn test_plot_breakthrough_png() {
        let curve = tracer_curve();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_breakthrough(&curve, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_breakthrough_svg() {
        let curve = tracer_curve();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("svg");
        plot_breakthrough(&curve, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_breakthrough_custom_config() {
        let curve = tracer_curve();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        let mut config = PlotConfig::breakthrough("Tracer run");
        config.width = 800;
        config.height = 500;
        config.line_color = GREEN;
        plot_breakthrough(&curve, path.to_str().unwrap(), Some(&config)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_overwrites_existing_file() {
        let curve = tracer_curve();
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_breakthrough(&curve, path.to_str().unwrap(), None).unwrap();
        let first_len = std::fs::metadata(&path).unwrap().len();
        plot_breakthrough(&curve, path.to_str().unwrap(), None).unwrap();
        let second_len = std::fs::metadata(&path).unwrap().len();
        assert_eq!(first_len, second_len);
    }

    #[test]
    fn test_plot_all_zero_curve() {
        // Flat curve at C/C0 = 0: the reference line still fits the frame
        let table = SampleTable::from_rows(vec![
            SampleRow::new(0.0, 0.0),
            SampleRow::new(1.0, 0.0),
        ]);
        let curve = compute_breakthrough_curve(table, &ExperimentParams::default());
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let path = tmp.path().with_extension("png");
        plot_breakthrough(&curve, path.to_str().unwrap(), None).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_plot_unwritable_path_is_an_error() {
        let curve = tracer_curve();
        let result = plot_breakthrough(&curve, "/nonexistent/dir/plot.png", None);
        assert!(result.is_err());
    }
}
