// File: crates/benchplot/src/lib.rs
// Summary: Line and contour chart operations routed to a window or a PNG file, and the embedded benchmark data.

use std::path::{Path, PathBuf};

use anyhow::Context;
use benchplot_core::{
    AxisConfig, ChartError, ContourChart, Figure, Grid, LineChart, LineChartSpec, RenderOptions, Series,
};
use tracing::info;

pub use benchplot_core::load_grid;

/// Measurements shown by the chart programs, as JSON line chart specs.
pub mod data {
    pub const ARRAY_SUM: &str = include_str!("../data/array_sum.json");
    pub const MATMUL_SIZES: &str = include_str!("../data/matmul_sizes.json");
    pub const LAPLACE: &str = include_str!("../data/laplace.json");
}

/// Grid read by `matmul-contour` when no path is given.
pub const DEFAULT_GRID_PATH: &str = "matrixMul_Serial.csv";
pub const CONTOUR_TITLE: &str = "Contour Plot of Matrix C (from CSV)";

/// Where a rendered chart goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
    /// Interactive window; blocks until closed.
    Window { title: String },
    /// PNG file; parent directories are created.
    Png(PathBuf),
}

impl OutputTarget {
    /// A PNG target when an output path argument is present, a window otherwise.
    pub fn from_arg(arg: Option<String>, title: &str) -> Self {
        match arg.filter(|a| !a.trim().is_empty()) {
            Some(path) => OutputTarget::Png(PathBuf::from(path)),
            None => OutputTarget::Window { title: title.to_string() },
        }
    }
}

/// Validate `figure`, then show it or write it according to `target`.
pub fn present(figure: &dyn Figure, opts: &RenderOptions, target: &OutputTarget) -> Result<(), ChartError> {
    match target {
        OutputTarget::Png(path) => figure.render_to_png(opts, path),
        OutputTarget::Window { title } => benchplot_window::show(figure, opts, title),
    }
}

/// Overlay `series` on one set of axes configured by `axes`.
///
/// Every series is checked against the axis scales before anything is drawn;
/// the inputs are copied, never modified.
pub fn render_line_chart(
    series: &[Series],
    axes: &AxisConfig,
    opts: &RenderOptions,
    target: &OutputTarget,
) -> Result<(), ChartError> {
    let chart = LineChart::new(axes.clone()).with_series(series.iter().cloned());
    present(&chart, opts, target)
}

/// Filled contour of `grid` over its column/row index mesh, with a colour bar.
pub fn render_contour_chart(
    grid: &Grid,
    axes: &AxisConfig,
    opts: &RenderOptions,
    target: &OutputTarget,
) -> Result<(), ChartError> {
    let chart = ContourChart::new(grid.clone(), axes.clone());
    present(&chart, opts, target)
}

/// Render a JSON-described line chart, honouring its legend, size and theme.
pub fn render_spec(spec: &LineChartSpec, target: &OutputTarget) -> Result<(), ChartError> {
    let chart = spec.to_chart()?;
    present(&chart, &spec.render_options()?, target)
}

/// Entry point shared by the line chart programs: parse the embedded data,
/// then render to the window or to the PNG path given as first argument.
pub fn run_line_program(json: &str, output_arg: Option<String>) -> anyhow::Result<()> {
    let spec = LineChartSpec::from_json_str(json).context("embedded chart data is invalid")?;
    let target = OutputTarget::from_arg(output_arg, &spec.title);
    render_spec(&spec, &target).with_context(|| format!("failed to render '{}'", spec.title))?;
    log_done(&spec.title, &target);
    Ok(())
}

fn log_done(title: &str, target: &OutputTarget) {
    match target {
        OutputTarget::Png(path) => info!(title, path = %path.display(), "chart written"),
        OutputTarget::Window { .. } => info!(title, "window closed"),
    }
}

/// Entry point of the contour program: load `input`, then render it.
pub fn run_contour_program(input: &Path, output_arg: Option<String>) -> anyhow::Result<()> {
    let grid = load_grid(input).with_context(|| format!("failed to load grid '{}'", input.display()))?;
    info!(rows = grid.rows(), cols = grid.cols(), path = %input.display(), "loaded grid");

    let axes = AxisConfig::new(
        CONTOUR_TITLE,
        benchplot_core::Axis::new("Column Index"),
        benchplot_core::Axis::new("Row Index"),
    )
    .without_grid();
    let target = OutputTarget::from_arg(output_arg, CONTOUR_TITLE);
    render_contour_chart(&grid, &axes, &RenderOptions::contour(), &target)
        .with_context(|| format!("failed to render contour of '{}'", input.display()))?;
    log_done(CONTOUR_TITLE, &target);
    Ok(())
}
