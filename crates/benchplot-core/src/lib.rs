// File: crates/benchplot-core/src/lib.rs
// Summary: Core library entry point; exports chart construction, grid loading and rendering.

pub mod axis;
pub mod chart;
pub mod colormap;
pub mod contour;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod render;
pub mod scale;
pub mod series;
pub mod spec;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod ticks;
pub mod types;

pub use axis::{Axis, AxisConfig, ScaleKind};
pub use chart::{LegendPosition, LineChart, LineLayout};
pub use colormap::Colormap;
pub use contour::{ContourChart, ContourLayout, Levels};
pub use error::{AxisId, ChartError, Result};
pub use grid::{load_grid, read_grid, Grid};
pub use render::Figure;
pub use series::{Marker, Series};
pub use spec::{LineChartSpec, SeriesSpec};
pub use theme::Theme;
pub use types::{Insets, RenderOptions};
