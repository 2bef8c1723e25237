// File: crates/benchplot-core/src/types.rs
// Summary: Shared types and constants (canvas sizes, paddings, render options).

use crate::theme::Theme;

/// Default line-chart canvas width in pixels (a 10 x 6 inch figure at 100 dpi).
pub const WIDTH: i32 = 1000;
/// Default line-chart canvas height in pixels.
pub const HEIGHT: i32 = 600;

/// Contour charts use a squarer 8 x 6 inch canvas.
pub const CONTOUR_WIDTH: i32 = 800;
pub const CONTOUR_HEIGHT: i32 = 600;

/// Screen margins around the plot area, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Default for Insets {
    fn default() -> Self {
        // room for tick labels + rotated y label on the left, title on top
        Self { left: 90, right: 30, top: 50, bottom: 70 }
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Turn off to get font-independent output (tests, snapshots).
    pub draw_labels: bool,
}

impl RenderOptions {
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn contour() -> Self {
        Self::default().with_size(CONTOUR_WIDTH, CONTOUR_HEIGHT)
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
        }
    }
}
