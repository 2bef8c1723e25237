// File: crates/benchplot-core/src/scale.rs
// Summary: Linear and log10 transforms from data values to pixels, plus data-range autoscaling.

use crate::axis::ScaleKind;

/// Maps a data interval onto a pixel interval. `px_start` corresponds to
/// `min`, so a Y scale passes the plot bottom as `px_start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub kind: ScaleKind,
    pub min: f64,
    pub max: f64,
    pub px_start: f32,
    pub px_end: f32,
    // cached transformed endpoints
    t_min: f64,
    t_max: f64,
}

impl AxisScale {
    /// Callers validate the range first; for log scales both ends must be > 0.
    pub fn new(kind: ScaleKind, min: f64, max: f64, px_start: f32, px_end: f32) -> Self {
        let t_min = forward(kind, min);
        let mut t_max = forward(kind, max);
        if (t_max - t_min).abs() < 1e-12 {
            t_max = t_min + 1.0;
        }
        Self { kind, min, max, px_start, px_end, t_min, t_max }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (forward(self.kind, v) - self.t_min) / (self.t_max - self.t_min);
        self.px_start + (t as f32) * (self.px_end - self.px_start)
    }

    /// True when `v` lies inside the visible data interval (inclusive, with a little slack).
    pub fn contains(&self, v: f64) -> bool {
        let t = forward(self.kind, v);
        let eps = (self.t_max - self.t_min).abs() * 1e-9;
        t >= self.t_min.min(self.t_max) - eps && t <= self.t_max.max(self.t_min) + eps
    }
}

#[inline]
fn forward(kind: ScaleKind, v: f64) -> f64 {
    match kind {
        ScaleKind::Linear => v,
        ScaleKind::Log10 => v.max(f64::MIN_POSITIVE).log10(),
    }
}

#[inline]
fn inverse(kind: ScaleKind, t: f64) -> f64 {
    match kind {
        ScaleKind::Linear => t,
        ScaleKind::Log10 => 10f64.powf(t),
    }
}

/// Autoscale `values` to a `(min, max)` range padded by `margin` (fraction of the
/// span) in transformed space. Returns `None` for an empty iterator.
pub fn autoscale(kind: ScaleKind, values: impl IntoIterator<Item = f64>, margin: f64) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        let t = forward(kind, v);
        lo = lo.min(t);
        hi = hi.max(t);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    if (hi - lo).abs() < 1e-12 {
        // single value: one unit (a decade on log axes) either side
        let pad = match kind {
            ScaleKind::Linear => lo.abs().max(1.0) * 0.5,
            ScaleKind::Log10 => 1.0,
        };
        return Some((inverse(kind, lo - pad), inverse(kind, hi + pad)));
    }
    let pad = (hi - lo) * margin;
    Some((inverse(kind, lo - pad), inverse(kind, hi + pad)))
}
