// File: crates/benchplot-core/src/spec.rs
// Summary: JSON-described line charts (series data, axes, styling) deserialized with serde.

use std::path::Path;

use serde::Deserialize;

use crate::axis::{Axis, AxisConfig, ScaleKind};
use crate::chart::{LegendPosition, LineChart};
use crate::error::{ChartError, Result};
use crate::series::{Marker, Series};
use crate::theme::{self, parse_color};
use crate::types::RenderOptions;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineChartSpec {
    pub title: String,
    #[serde(default)]
    pub x_label: String,
    #[serde(default)]
    pub y_label: String,
    /// `"linear"` or `"log"`.
    #[serde(default = "linear")]
    pub x_scale: String,
    #[serde(default = "linear")]
    pub y_scale: String,
    #[serde(default)]
    pub x_limits: Option<[f64; 2]>,
    #[serde(default)]
    pub y_limits: Option<[f64; 2]>,
    #[serde(default = "default_true")]
    pub grid: bool,
    /// Corner name such as `"upper left"`, or `"none"` to hide the legend.
    #[serde(default)]
    pub legend: Option<String>,
    #[serde(default)]
    pub title_size: Option<f32>,
    #[serde(default)]
    pub label_size: Option<f32>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub theme: Option<String>,
    pub series: Vec<SeriesSpec>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesSpec {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    #[serde(default)]
    pub marker: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub line_width: Option<f32>,
}

fn linear() -> String { "linear".to_string() }
fn default_true() -> bool { true }

fn scale(name: &str) -> Result<ScaleKind> {
    ScaleKind::from_name(name).ok_or_else(|| ChartError::Spec(format!("unknown axis scale '{name}'")))
}

impl LineChartSpec {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ChartError::io(path, e))?;
        Self::from_json_str(&json)
    }

    pub fn axis_config(&self) -> Result<AxisConfig> {
        let mut x = Axis::new(&self.x_label).with_kind(scale(&self.x_scale)?);
        let mut y = Axis::new(&self.y_label).with_kind(scale(&self.y_scale)?);
        if let Some([lo, hi]) = self.x_limits {
            x = x.with_limits(lo, hi);
        }
        if let Some([lo, hi]) = self.y_limits {
            y = y.with_limits(lo, hi);
        }
        let mut axes = AxisConfig::new(&self.title, x, y);
        if !self.grid {
            axes = axes.without_grid();
        }
        let (title, label) = (self.title_size.unwrap_or(axes.title_size), self.label_size.unwrap_or(axes.label_size));
        Ok(axes.with_font_sizes(title, label))
    }

    /// Build every series, enforcing the same shape rules as `Series::new`.
    pub fn series(&self) -> Result<Vec<Series>> {
        self.series.iter().map(SeriesSpec::to_series).collect()
    }

    pub fn legend(&self) -> Result<Option<LegendPosition>> {
        match self.legend.as_deref() {
            None => Ok(Some(LegendPosition::default())),
            Some(name) if name.eq_ignore_ascii_case("none") => Ok(None),
            Some(name) => LegendPosition::from_name(name)
                .map(Some)
                .ok_or_else(|| ChartError::Spec(format!("unknown legend position '{name}'"))),
        }
    }

    pub fn to_chart(&self) -> Result<LineChart> {
        Ok(LineChart::new(self.axis_config()?)
            .with_series(self.series()?)
            .with_legend(self.legend()?))
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        let mut opts = RenderOptions::default();
        if let Some(name) = &self.theme {
            opts.theme = theme::find(name).ok_or_else(|| ChartError::Spec(format!("unknown theme '{name}'")))?;
        }
        let (w, h) = (self.width.unwrap_or(opts.width), self.height.unwrap_or(opts.height));
        if w <= 0 || h <= 0 {
            return Err(ChartError::Spec(format!("canvas size {w}x{h} must be positive")));
        }
        Ok(opts.with_size(w, h))
    }
}

impl SeriesSpec {
    pub fn to_series(&self) -> Result<Series> {
        let mut s = Series::new(&self.label, self.x.clone(), self.y.clone())?;
        if let Some(name) = &self.marker {
            let marker = Marker::from_name(name)
                .ok_or_else(|| ChartError::Spec(format!("series '{}': unknown marker '{name}'", self.label)))?;
            s = s.with_marker(marker);
        }
        if let Some(name) = &self.color {
            let color = parse_color(name)
                .ok_or_else(|| ChartError::Spec(format!("series '{}': unknown colour '{name}'", self.label)))?;
            s = s.with_color(color);
        }
        if let Some(w) = self.line_width {
            s = s.with_line_width(w);
        }
        Ok(s)
    }
}
