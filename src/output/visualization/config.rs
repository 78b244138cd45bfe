//! Plot configuration
//!
//! An explicit plotting context object passed to the rendering operation,
//! replacing any implicit process-wide figure state.

use plotters::prelude::*;

/// Configuration for the breakthrough-curve plot
///
/// # Fields
///
/// - `width`, `height`: dimensions in pixels
/// - `title`: plot title
/// - `xlabel`, `ylabel`: axis labels
/// - `line_color`: color of the data line
/// - `reference_color`: color of the half-maximum reference line
/// - `background`: background color
/// - `line_width`: line thickness in pixels
/// - `show_grid`: whether to draw grid lines
///
/// # Example
///
/// ```rust,ignore
/// use transport_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::breakthrough("Tracer run 7");
/// config.line_color = GREEN;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 2400)
    pub width: u32,

    /// Image height in pixels (default: 1500)
    pub height: u32,

    /// Plot title (default: "Breakthrough curve")
    pub title: String,

    /// X-axis label (default: "Pore volumes")
    pub xlabel: String,

    /// Y-axis label (default: "Normalized concentration (C/C0)")
    pub ylabel: String,

    /// Color of the C/C0 data line (default: BLUE)
    pub line_color: RGBColor,

    /// Color of the half-maximum reference line (default: RED)
    pub reference_color: RGBColor,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        // 2400×1500 px is an 8×5 inch figure at 300 dpi.
        Self {
            width: 2400,
            height: 1500,
            title: "Breakthrough curve".to_string(),
            xlabel: "Pore volumes".to_string(),
            ylabel: "Normalized concentration (C/C0)".to_string(),
            line_color: BLUE,
            reference_color: RED,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::breakthrough(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create a breakthrough-plot config with an optional custom title
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// // With a custom title (no Some() needed)
    /// let config = PlotConfig::breakthrough("Column 3, tracer run");
    /// let config = PlotConfig::breakthrough(format!("Run {}", run_id));
    ///
    /// // With the default title
    /// let config = PlotConfig::breakthrough(NO_TITLE);
    /// ```
    pub fn breakthrough(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        if let Some(title) = title.into_optional_title() {
            config.title = title;
        }
        config
    }
}

// =================================================================================================
// Tests
// =================================================================================================
