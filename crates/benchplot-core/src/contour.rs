// File: crates/benchplot-core/src/contour.rs
// Summary: Filled contour chart: level selection, triangle-clipped isobands, colour bar and painting.

use skia_safe as skia;
use tracing::debug;

use crate::axis::AxisConfig;
use crate::chart::{check_value, draw_titles, plot_rect};
use crate::colormap::Colormap;
use crate::error::{AxisId, ChartError, Result};
use crate::geometry::PlotRect;
use crate::grid::Grid;
use crate::render::{dashed_paint, fill_paint, stroke_paint, Figure};
use crate::scale::AxisScale;
use crate::text::{Anchor, TextShaper};
use crate::ticks::{linear_ticks, nice_step, format_value, Tick};
use crate::types::RenderOptions;

/// Upper bound on automatically chosen bands.
pub const DEFAULT_MAX_BANDS: usize = 7;

/// Horizontal room reserved right of the plot for the colour bar and its labels.
const COLORBAR_SPACE: f32 = 90.0;
const COLORBAR_GAP: f32 = 25.0;
const COLORBAR_WIDTH: f32 = 18.0;

#[derive(Clone, Debug, PartialEq)]
pub enum Levels {
    /// "Nice" levels covering the data with at most this many bands.
    Auto(usize),
    /// Strictly increasing level values; at least two.
    Explicit(Vec<f64>),
}

impl Default for Levels {
    fn default() -> Self { Levels::Auto(DEFAULT_MAX_BANDS) }
}

/// Region between two consecutive levels, as polygons in mesh coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub lo: f64,
    pub hi: f64,
    pub polygons: Vec<Vec<(f64, f64)>>,
}

/// Levels on nice round values that enclose `[min, max]` in at most `max_bands` bands.
pub fn nice_levels(min: f64, max: f64, max_bands: usize) -> Vec<f64> {
    let max_bands = max_bands.max(1);
    if !(max > min) {
        return vec![min, min + 1.0];
    }
    let mut step = nice_step((max - min) / max_bands as f64);
    loop {
        let mut first = (min / step).floor();
        let mut last = (max / step).ceil();
        // division rounding can land one step inside the data
        if first * step > min {
            first -= 1.0;
        }
        if last * step < max {
            last += 1.0;
        }
        let n = ((last - first).round() as usize).max(1);
        if n <= max_bands || !step.is_finite() {
            return (0..=n).map(|k| (first + k as f64) * step).collect();
        }
        // rounding outward added a band; widen the step
        step = nice_step(step * 1.01);
    }
}

type Vertex = (f64, f64, f64);

/// Split every mesh cell into two triangles and clip each triangle against
/// every band's value range, interpolating linearly along edges. Bands are
/// half-open `[lo, hi)` except the last, which also takes `hi`, so every
/// point inside the level range lands in exactly one band.
pub fn isobands(grid: &Grid, levels: &[f64]) -> Vec<Band> {
    let mut bands: Vec<Band> = levels
        .windows(2)
        .map(|w| Band { lo: w[0], hi: w[1], polygons: Vec::new() })
        .collect();
    let (rows, cols) = grid.shape();
    if rows < 2 || cols < 2 || bands.is_empty() {
        return bands;
    }
    let n_bands = bands.len();
    let z = |r: usize, c: usize| grid.values()[r * cols + c];

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let (x0, x1, y0, y1) = (c as f64, (c + 1) as f64, r as f64, (r + 1) as f64);
            let p00 = (x0, y0, z(r, c));
            let p10 = (x1, y0, z(r, c + 1));
            let p11 = (x1, y1, z(r + 1, c + 1));
            let p01 = (x0, y1, z(r + 1, c));
            for tri in [[p00, p10, p11], [p00, p11, p01]] {
                let tmin = tri.iter().map(|v| v.2).fold(f64::INFINITY, f64::min);
                let tmax = tri.iter().map(|v| v.2).fold(f64::NEG_INFINITY, f64::max);
                for (k, band) in bands.iter_mut().enumerate() {
                    let (lo, hi) = (band.lo, band.hi);
                    let closed_top = k + 1 == n_bands;
                    let below_top = |v: f64| if closed_top { v <= hi } else { v < hi };
                    if lo > tmax || !below_top(tmin) {
                        continue;
                    }
                    let poly = if lo <= tmin && below_top(tmax) {
                        tri.to_vec()
                    } else {
                        let lower = clip(&tri, lo, |v| v >= lo);
                        clip(&lower, hi, below_top)
                    };
                    if poly.len() >= 3 {
                        band.polygons.push(poly.into_iter().map(|(x, y, _)| (x, y)).collect());
                    }
                }
            }
        }
    }
    bands
}

/// Sutherland-Hodgman against the half-space of vertices whose value passes `inside`;
/// `level` is the boundary value where edges are cut.
fn clip(poly: &[Vertex], level: f64, inside: impl Fn(f64) -> bool) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(poly.len() + 2);
    for i in 0..poly.len() {
        let a = poly[i];
        let b = poly[(i + 1) % poly.len()];
        let (a_in, b_in) = (inside(a.2), inside(b.2));
        if a_in {
            out.push(a);
        }
        if a_in != b_in {
            let t = (level - a.2) / (b.2 - a.2);
            out.push((a.0 + (b.0 - a.0) * t, a.1 + (b.1 - a.1) * t, level));
        }
    }
    out
}

/// Filled contour of a grid over its index mesh.
///
/// Both axes always span the full mesh (`0..C-1` and `0..R-1`); fixed axis
/// limits are rejected by `validate`. `AxisConfig::grid` draws dashed lines
/// at the major ticks over the bands.
#[derive(Clone, Debug, PartialEq)]
pub struct ContourChart {
    grid: Grid,
    axes: AxisConfig,
    levels: Levels,
    colormap: Colormap,
}

#[derive(Clone, Debug)]
pub struct ContourLayout {
    pub plot: PlotRect,
    pub colorbar: PlotRect,
    pub x: AxisScale,
    pub y: AxisScale,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// Mesh coordinates: column indices and row indices.
    pub mesh_x: Vec<f64>,
    pub mesh_y: Vec<f64>,
    pub levels: Vec<f64>,
    pub colors: Vec<skia::Color>,
    pub bands: Vec<Band>,
}

impl ContourChart {
    pub fn new(grid: Grid, axes: AxisConfig) -> Self {
        Self { grid, axes, levels: Levels::default(), colormap: Colormap::default() }
    }

    pub fn with_levels(mut self, levels: Levels) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_colormap(mut self, colormap: Colormap) -> Self {
        self.colormap = colormap;
        self
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn axes(&self) -> &AxisConfig { &self.axes }
    pub fn colormap(&self) -> Colormap { self.colormap }

    /// Resolved level values.
    pub fn levels(&self) -> Vec<f64> {
        match &self.levels {
            Levels::Auto(n) => {
                let (lo, hi) = self.grid.extent();
                nice_levels(lo, hi, *n)
            }
            Levels::Explicit(v) => v.clone(),
        }
    }

    pub fn layout(&self, opts: &RenderOptions) -> Result<ContourLayout> {
        self.validate()?;
        let full = plot_rect(opts);
        let plot = PlotRect::from_ltrb(full.left, full.top, full.right - COLORBAR_SPACE, full.bottom);
        let colorbar = PlotRect::from_ltrb(
            plot.right + COLORBAR_GAP,
            plot.top,
            plot.right + COLORBAR_GAP + COLORBAR_WIDTH,
            plot.bottom,
        );

        let (rows, cols) = self.grid.shape();
        let (mesh_x, mesh_y) = self.grid.mesh_axes();
        let (x_max, y_max) = ((cols - 1) as f64, (rows - 1) as f64);
        let x = AxisScale::new(self.axes.x.kind, 0.0, x_max, plot.left, plot.right);
        let y = AxisScale::new(self.axes.y.kind, 0.0, y_max, plot.bottom, plot.top);
        let x_ticks = linear_ticks(0.0, x_max, (plot.width() / 90.0).round().max(2.0) as usize);
        let y_ticks = linear_ticks(0.0, y_max, (plot.height() / 70.0).round().max(2.0) as usize);

        let levels = self.levels();
        let bands = isobands(&self.grid, &levels);
        let colors = self.colormap.band_colors(bands.len());

        debug!(rows, cols, levels = levels.len(), bands = bands.len(), "contour layout");
        Ok(ContourLayout { plot, colorbar, x, y, x_ticks, y_ticks, mesh_x, mesh_y, levels, colors, bands })
    }
}

impl Figure for ContourChart {
    fn validate(&self) -> Result<()> {
        let (rows, cols) = self.grid.shape();
        if rows < 2 || cols < 2 {
            return Err(ChartError::shape(
                "contour grid",
                format!("needs at least 2 x 2 values, got {rows} x {cols}"),
            ));
        }
        // the mesh starts at index 0 on both axes
        check_value(AxisId::X, self.axes.x.kind, "mesh", 0, 0.0)?;
        check_value(AxisId::Y, self.axes.y.kind, "mesh", 0, 0.0)?;
        for (id, axis) in [(AxisId::X, &self.axes.x), (AxisId::Y, &self.axes.y)] {
            if axis.limits.is_some() {
                return Err(ChartError::shape(
                    format!("contour {id} axis"),
                    "fixed limits are not supported; the axis spans the grid indices",
                ));
            }
        }

        if let Levels::Explicit(levels) = &self.levels {
            if levels.len() < 2 {
                return Err(ChartError::shape("contour levels", "need at least two levels"));
            }
            if levels.iter().any(|v| !v.is_finite()) || levels.windows(2).any(|w| w[0] >= w[1]) {
                return Err(ChartError::shape("contour levels", "must be finite and strictly increasing"));
            }
        }
        Ok(())
    }

    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) -> Result<()> {
        let layout = self.layout(opts)?;
        let theme = &opts.theme;
        let plot = layout.plot;

        canvas.draw_rect(plot.to_skia(), &fill_paint(theme.plot_background));

        canvas.save();
        canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);
        for (band, &color) in layout.bands.iter().zip(&layout.colors) {
            let mut path = skia::Path::new();
            for poly in &band.polygons {
                let mut pts = poly.iter().map(|&(gx, gy)| (layout.x.to_px(gx), layout.y.to_px(gy)));
                if let Some(first) = pts.next() {
                    path.move_to(first);
                    for p in pts {
                        path.line_to(p);
                    }
                    path.close();
                }
            }
            // a hairline of the same colour hides seams between neighbouring cells
            let mut paint = fill_paint(color);
            paint.set_style(skia::paint::Style::StrokeAndFill);
            paint.set_stroke_width(0.6);
            canvas.draw_path(&path, &paint);
        }
        if self.axes.grid {
            let paint = dashed_paint(theme.grid, 0.8);
            for t in &layout.x_ticks {
                let x = layout.x.to_px(t.value);
                canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
            }
            for t in &layout.y_ticks {
                let y = layout.y.to_px(t.value);
                canvas.draw_line((plot.left, y), (plot.right, y), &paint);
            }
        }
        canvas.restore();

        canvas.draw_rect(plot.to_skia(), &stroke_paint(theme.frame, 1.0));
        draw_axis_ticks(canvas, text, &layout, opts, self.axes.tick_size);
        draw_colorbar(canvas, text, &layout, opts, self.axes.tick_size);
        if opts.draw_labels {
            draw_titles(canvas, text, plot, opts, &self.axes);
        }
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_axis_ticks(canvas: &skia::Canvas, text: &TextShaper, layout: &ContourLayout, opts: &RenderOptions, size: f32) {
    let plot = layout.plot;
    let paint = stroke_paint(opts.theme.tick, 1.0);
    for t in &layout.x_ticks {
        let x = layout.x.to_px(t.value);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + 5.0), &paint);
        if let (true, Some(label)) = (opts.draw_labels, &t.label) {
            text.draw(canvas, label, x, plot.bottom + 8.0 + size * 0.6, size, opts.theme.text, Anchor::Center);
        }
    }
    for t in &layout.y_ticks {
        let y = layout.y.to_px(t.value);
        canvas.draw_line((plot.left - 5.0, y), (plot.left, y), &paint);
        if let (true, Some(label)) = (opts.draw_labels, &t.label) {
            text.draw(canvas, label, plot.left - 8.0, y, size, opts.theme.text, Anchor::Right);
        }
    }
}

fn draw_colorbar(canvas: &skia::Canvas, text: &TextShaper, layout: &ContourLayout, opts: &RenderOptions, size: f32) {
    let bar = layout.colorbar;
    let (Some(&first), Some(&last)) = (layout.levels.first(), layout.levels.last()) else {
        return;
    };
    let span = (last - first).max(f64::MIN_POSITIVE);
    let to_px = |v: f64| bar.bottom - ((v - first) / span) as f32 * bar.height();

    for (band, &color) in layout.bands.iter().zip(&layout.colors) {
        let rect = skia::Rect::from_ltrb(bar.left, to_px(band.hi), bar.right, to_px(band.lo));
        let mut paint = fill_paint(color);
        paint.set_anti_alias(false);
        canvas.draw_rect(rect, &paint);
    }
    canvas.draw_rect(bar.to_skia(), &stroke_paint(opts.theme.frame, 1.0));

    let step = layout
        .levels
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min);
    let tick = stroke_paint(opts.theme.tick, 1.0);
    for &level in &layout.levels {
        let y = to_px(level);
        canvas.draw_line((bar.right, y), (bar.right + 4.0, y), &tick);
        if opts.draw_labels {
            text.draw(canvas, &format_value(level, step), bar.right + 7.0, y, size, opts.theme.text, Anchor::Left);
        }
    }
}
