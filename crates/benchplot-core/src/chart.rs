// File: crates/benchplot-core/src/chart.rs
// Summary: Line chart (one or more series over shared linear/log axes): validation, layout and painting.

use skia_safe as skia;
use tracing::debug;

use crate::axis::{Axis, AxisConfig, ScaleKind};
use crate::error::{AxisId, ChartError, Result};
use crate::geometry::PlotRect;
use crate::render::{dashed_paint, fill_paint, stroke_paint, Figure};
use crate::scale::{autoscale, AxisScale};
use crate::series::{Marker, Series};
use crate::text::{Anchor, TextShaper};
use crate::ticks::{ticks, Tick};
use crate::types::RenderOptions;

/// Margin added around autoscaled data, as a fraction of the transformed span.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

const MARKER_SIZE: f32 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperLeft,
    UpperRight,
    LowerLeft,
    LowerRight,
}

impl LegendPosition {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "upper left" | "upper-left" => Some(LegendPosition::UpperLeft),
            "upper right" | "upper-right" => Some(LegendPosition::UpperRight),
            "lower left" | "lower-left" => Some(LegendPosition::LowerLeft),
            "lower right" | "lower-right" => Some(LegendPosition::LowerRight),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineChart {
    series: Vec<Series>,
    axes: AxisConfig,
    legend: Option<LegendPosition>,
}

/// Pixel-space result of laying out a line chart.
#[derive(Clone, Debug)]
pub struct LineLayout {
    pub plot: PlotRect,
    pub x: AxisScale,
    pub y: AxisScale,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// Projected points, one list per series, in authored order.
    pub points: Vec<Vec<(f32, f32)>>,
}

impl LineChart {
    pub fn new(axes: AxisConfig) -> Self {
        Self { series: Vec::new(), axes, legend: Some(LegendPosition::default()) }
    }

    pub fn with_series(mut self, series: impl IntoIterator<Item = Series>) -> Self {
        self.series.extend(series);
        self
    }

    /// `None` hides the legend.
    pub fn with_legend(mut self, legend: Option<LegendPosition>) -> Self {
        self.legend = legend;
        self
    }

    pub fn series(&self) -> &[Series] { &self.series }
    pub fn axes(&self) -> &AxisConfig { &self.axes }
    pub fn legend(&self) -> Option<LegendPosition> { self.legend }

    /// Data range for one axis: fixed limits or padded autoscale.
    pub fn range(&self, id: AxisId) -> (f64, f64) {
        let axis = self.axis(id);
        if let Some(limits) = axis.limits {
            return limits;
        }
        let values = self.series.iter().flat_map(|s| match id {
            AxisId::X => s.xs().iter().copied(),
            AxisId::Y => s.ys().iter().copied(),
        });
        autoscale(axis.kind, values, AUTOSCALE_MARGIN).unwrap_or((1.0, 10.0))
    }

    fn axis(&self, id: AxisId) -> &Axis {
        match id {
            AxisId::X => &self.axes.x,
            AxisId::Y => &self.axes.y,
        }
    }

    /// Compute plot rectangle, scales, ticks and projected points.
    pub fn layout(&self, opts: &RenderOptions) -> Result<LineLayout> {
        self.validate()?;
        let plot = plot_rect(opts);
        let (x_min, x_max) = self.range(AxisId::X);
        let (y_min, y_max) = self.range(AxisId::Y);
        let x = AxisScale::new(self.axes.x.kind, x_min, x_max, plot.left, plot.right);
        let y = AxisScale::new(self.axes.y.kind, y_min, y_max, plot.bottom, plot.top);

        let x_ticks = ticks(x.kind, x_min, x_max, (plot.width() / 110.0).round().max(2.0) as usize);
        let y_ticks = ticks(y.kind, y_min, y_max, (plot.height() / 80.0).round().max(2.0) as usize);

        let points = self
            .series
            .iter()
            .map(|s| s.points().map(|(px, py)| (x.to_px(px), y.to_px(py))).collect())
            .collect();

        debug!(
            series = self.series.len(),
            x_min, x_max, y_min, y_max,
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            "line chart layout"
        );
        Ok(LineLayout { plot, x, y, x_ticks, y_ticks, points })
    }
}

impl Figure for LineChart {
    fn validate(&self) -> Result<()> {
        if self.series.is_empty() {
            return Err(ChartError::shape("line chart", "needs at least one series"));
        }
        for id in [AxisId::X, AxisId::Y] {
            let axis = self.axis(id);
            if let Some((lo, hi)) = axis.limits {
                check_limits(id, axis.kind, lo, hi)?;
            }
            for s in &self.series {
                let values = match id {
                    AxisId::X => s.xs(),
                    AxisId::Y => s.ys(),
                };
                for (index, &value) in values.iter().enumerate() {
                    check_value(id, axis.kind, s.label(), index, value)?;
                }
            }
        }
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) -> Result<()> {
        let layout = self.layout(opts)?;
        let theme = &opts.theme;
        let plot = layout.plot;

        canvas.draw_rect(plot.to_skia(), &fill_paint(theme.plot_background));

        if self.axes.grid {
            draw_grid(canvas, &layout, theme.grid);
        }

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (series, pts) in self.series.iter().zip(&layout.points) {
            draw_series(canvas, series, pts);
        }
        canvas.restore();

        canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.frame, 1.0));
        draw_tick_marks(canvas, &layout, theme.tick);

        if opts.draw_labels {
            draw_tick_labels(canvas, text, &layout, &self.axes, theme.text);
            draw_titles(canvas, text, plot, opts, &self.axes);
        }
        if let Some(pos) = self.legend {
            draw_legend(canvas, text, plot, &self.series, pos, opts, self.axes.tick_size);
        }
        Ok(())
    }
}

pub(crate) fn check_value(axis: AxisId, kind: ScaleKind, series: &str, index: usize, value: f64) -> Result<()> {
    let reason = if !value.is_finite() {
        "value is not finite"
    } else if kind.is_log() && value <= 0.0 {
        "log scale needs values greater than zero"
    } else {
        return Ok(());
    };
    Err(ChartError::Domain { axis, series: series.to_string(), index, value, reason })
}

pub(crate) fn check_limits(axis: AxisId, kind: ScaleKind, lo: f64, hi: f64) -> Result<()> {
    check_value(axis, kind, "axis limits", 0, lo)?;
    check_value(axis, kind, "axis limits", 1, hi)?;
    if lo >= hi {
        return Err(ChartError::shape(format!("{axis} axis limits"), format!("min {lo} is not below max {hi}")));
    }
    Ok(())
}

pub(crate) fn plot_rect(opts: &RenderOptions) -> PlotRect {
    let i = opts.insets;
    PlotRect::from_ltrb(
        i.left as f32,
        i.top as f32,
        (opts.width - i.right as i32) as f32,
        (opts.height - i.bottom as i32) as f32,
    )
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(canvas: &skia::Canvas, layout: &LineLayout, color: skia::Color) {
    let plot = layout.plot;
    let major = dashed_paint(color, 0.8);
    let minor = dashed_paint(color, 0.5);
    for t in &layout.x_ticks {
        let x = layout.x.to_px(t.value);
        let paint = if t.major { &major } else { &minor };
        canvas.draw_line((x, plot.top), (x, plot.bottom), paint);
    }
    for t in &layout.y_ticks {
        let y = layout.y.to_px(t.value);
        let paint = if t.major { &major } else { &minor };
        canvas.draw_line((plot.left, y), (plot.right, y), paint);
    }
}

fn draw_series(canvas: &skia::Canvas, series: &Series, pts: &[(f32, f32)]) {
    if let Some(&first) = pts.first() {
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in pts.iter().skip(1) {
            path.line_to(p);
        }
        let mut stroke = stroke_paint(series.color(), series.line_width());
        stroke.set_stroke_join(skia::paint::Join::Round);
        canvas.draw_path(&path, &stroke);
    }
    for &p in pts {
        draw_marker(canvas, series.marker(), p, MARKER_SIZE, series.color());
    }
}

pub(crate) fn draw_marker(canvas: &skia::Canvas, marker: Marker, (x, y): (f32, f32), size: f32, color: skia::Color) {
    let half = size * 0.5;
    let paint = fill_paint(color);
    match marker {
        Marker::None => {}
        Marker::Circle => {
            canvas.draw_circle((x, y), half, &paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(x - half, y - half, x + half, y + half), &paint);
        }
        Marker::TriangleUp => {
            let mut path = skia::Path::new();
            path.move_to((x, y - half * 1.15));
            path.line_to((x + half, y + half * 0.85));
            path.line_to((x - half, y + half * 0.85));
            path.close();
            canvas.draw_path(&path, &paint);
        }
    }
}

fn draw_tick_marks(canvas: &skia::Canvas, layout: &LineLayout, color: skia::Color) {
    let plot = layout.plot;
    let paint = stroke_paint(color, 1.0);
    for t in &layout.x_ticks {
        let x = layout.x.to_px(t.value);
        let len = if t.major { 5.0 } else { 3.0 };
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + len), &paint);
    }
    for t in &layout.y_ticks {
        let y = layout.y.to_px(t.value);
        let len = if t.major { 5.0 } else { 3.0 };
        canvas.draw_line((plot.left - len, y), (plot.left, y), &paint);
    }
}

fn draw_tick_labels(canvas: &skia::Canvas, text: &TextShaper, layout: &LineLayout, axes: &AxisConfig, color: skia::Color) {
    let plot = layout.plot;
    let size = axes.tick_size;
    for t in &layout.x_ticks {
        if let Some(label) = &t.label {
            let x = layout.x.to_px(t.value);
            text.draw(canvas, label, x, plot.bottom + 8.0 + size * 0.6, size, color, Anchor::Center);
        }
    }
    for t in &layout.y_ticks {
        if let Some(label) = &t.label {
            let y = layout.y.to_px(t.value);
            text.draw(canvas, label, plot.left - 8.0, y, size, color, Anchor::Right);
        }
    }
}

pub(crate) fn draw_titles(canvas: &skia::Canvas, text: &TextShaper, plot: PlotRect, opts: &RenderOptions, axes: &AxisConfig) {
    let color = opts.theme.text;
    if !axes.title.is_empty() {
        text.draw(canvas, &axes.title, plot.center_x(), plot.top * 0.5, axes.title_size, color, Anchor::Center);
    }
    if !axes.x.label.is_empty() {
        let y = plot.bottom + (opts.height as f32 - plot.bottom) * 0.62;
        text.draw(canvas, &axes.x.label, plot.center_x(), y, axes.label_size, color, Anchor::Center);
    }
    if !axes.y.label.is_empty() {
        text.draw_vertical(canvas, &axes.y.label, plot.left * 0.22, plot.center_y(), axes.label_size, color);
    }
}

fn draw_legend(
    canvas: &skia::Canvas,
    text: &TextShaper,
    plot: PlotRect,
    series: &[Series],
    pos: LegendPosition,
    opts: &RenderOptions,
    size: f32,
) {
    let pad = 8.0;
    let sample = 28.0;
    let row = size * 1.7;
    let label_w = if opts.draw_labels {
        series.iter().map(|s| text.measure_width(s.label(), size)).fold(0.0, f32::max)
    } else {
        0.0
    };
    let w = pad + sample + pad + label_w + pad;
    let h = pad * 2.0 + row * series.len() as f32;
    let offset = 10.0;
    let (left, top) = match pos {
        LegendPosition::UpperLeft => (plot.left + offset, plot.top + offset),
        LegendPosition::UpperRight => (plot.right - offset - w, plot.top + offset),
        LegendPosition::LowerLeft => (plot.left + offset, plot.bottom - offset - h),
        LegendPosition::LowerRight => (plot.right - offset - w, plot.bottom - offset - h),
    };
    let rect = skia::Rect::from_xywh(left, top, w, h);
    let rrect = skia::RRect::new_rect_xy(rect, 3.0, 3.0);
    canvas.draw_rrect(&rrect, &fill_paint(opts.theme.legend_background));
    canvas.draw_rrect(&rrect, &stroke_paint(opts.theme.legend_border, 1.0));

    for (i, s) in series.iter().enumerate() {
        let cy = top + pad + row * (i as f32 + 0.5);
        let x0 = left + pad;
        canvas.draw_line((x0, cy), (x0 + sample, cy), &stroke_paint(s.color(), s.line_width()));
        draw_marker(canvas, s.marker(), (x0 + sample * 0.5, cy), MARKER_SIZE, s.color());
        if opts.draw_labels {
            text.draw(canvas, s.label(), x0 + sample + pad, cy, size, opts.theme.text, Anchor::Left);
        }
    }
}
