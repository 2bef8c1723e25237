// File: crates/benchplot-core/src/axis.rs
// Summary: Axis model (label, scale mode, optional limits) and the per-chart axis configuration.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
}

impl ScaleKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Some(ScaleKind::Linear),
            "log" | "log10" => Some(ScaleKind::Log10),
            _ => None,
        }
    }

    pub fn is_log(self) -> bool { self == ScaleKind::Log10 }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub kind: ScaleKind,
    /// Fixed `(min, max)`; autoscaled from the data when `None`.
    pub limits: Option<(f64, f64)>,
}

impl Axis {
    pub fn new(label: impl Into<String>) -> Self {
        Self { label: label.into(), kind: ScaleKind::Linear, limits: None }
    }

    pub fn log(mut self) -> Self {
        self.kind = ScaleKind::Log10;
        self
    }

    pub fn with_kind(mut self, kind: ScaleKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_limits(mut self, min: f64, max: f64) -> Self {
        self.limits = Some((min, max));
        self
    }
}

/// Title, both axes and the decorations shared by every chart kind.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisConfig {
    pub title: String,
    pub x: Axis,
    pub y: Axis,
    /// Draw major (and, on log axes, minor) grid lines.
    pub grid: bool,
    pub title_size: f32,
    pub label_size: f32,
    pub tick_size: f32,
}

impl AxisConfig {
    pub fn new(title: impl Into<String>, x: Axis, y: Axis) -> Self {
        Self { title: title.into(), x, y, grid: true, title_size: 17.0, label_size: 14.0, tick_size: 12.0 }
    }

    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }

    pub fn with_font_sizes(mut self, title: f32, label: f32) -> Self {
        self.title_size = title.max(1.0);
        self.label_size = label.max(1.0);
        self
    }
}
