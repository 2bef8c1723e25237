// File: crates/benchplot-core/src/series.rs
// Summary: Named (x, y) series with marker, colour and stroke width.
// Notes:
// - Fields are private so the equal-length, non-empty invariant set by
//   `Series::new` holds for every instance.

use skia_safe as skia;

use crate::error::{ChartError, Result};

/// Marker drawn at every data point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    None,
    Circle,
    Square,
    TriangleUp,
}

impl Marker {
    /// Parse a marker by name; accepts the single-character plotting shorthands too.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Some(Marker::None),
            "circle" | "o" => Some(Marker::Circle),
            "square" | "s" => Some(Marker::Square),
            "triangle-up" | "triangle" | "^" => Some(Marker::TriangleUp),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    label: String,
    xs: Vec<f64>,
    ys: Vec<f64>,
    marker: Marker,
    color: skia::Color,
    line_width: f32,
}

impl Series {
    /// Build a series. Fails with `ChartError::Shape` when `xs` and `ys`
    /// differ in length or are empty.
    pub fn new(label: impl Into<String>, xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        let label = label.into();
        if xs.is_empty() || ys.is_empty() {
            return Err(ChartError::shape(
                format!("series '{label}'"),
                format!("needs at least one point (x has {}, y has {})", xs.len(), ys.len()),
            ));
        }
        if xs.len() != ys.len() {
            return Err(ChartError::shape(
                format!("series '{label}'"),
                format!("x has {} values but y has {}", xs.len(), ys.len()),
            ));
        }
        Ok(Self {
            label,
            xs,
            ys,
            marker: Marker::Circle,
            color: skia::Color::from_rgb(0x1f, 0x77, 0xb4),
            line_width: 1.5,
        })
    }

    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = marker;
        self
    }

    pub fn with_color(mut self, color: skia::Color) -> Self {
        self.color = color;
        self
    }

    /// Stroke width in pixels; clamped to a visible minimum.
    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width.max(0.1);
        self
    }

    pub fn label(&self) -> &str { &self.label }
    pub fn xs(&self) -> &[f64] { &self.xs }
    pub fn ys(&self) -> &[f64] { &self.ys }
    pub fn marker(&self) -> Marker { self.marker }
    pub fn color(&self) -> skia::Color { self.color }
    pub fn line_width(&self) -> f32 { self.line_width }

    pub fn len(&self) -> usize { self.xs.len() }

    /// Always false for a constructed series; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool { self.xs.is_empty() }

    /// Iterate points in their authored order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}
