// File: crates/benchplot-core/src/render.rs
// Summary: Headless rendering pipeline shared by every chart kind: Skia CPU raster surface -> RGBA -> PNG.

use std::io::Cursor;
use std::path::Path;

use image::RgbaImage;
use skia_safe as skia;
use tracing::{debug, info};

use crate::error::{ChartError, Result};
use crate::text::TextShaper;
use crate::types::RenderOptions;

/// A chart that can validate its inputs and paint itself onto a canvas.
///
/// Rendering always validates first, so an invalid chart never produces
/// pixels or files.
pub trait Figure {
    /// Check every input contract the painter relies on.
    fn validate(&self) -> Result<()>;

    /// Paint onto a cleared canvas of `opts.width` x `opts.height`.
    fn paint(&self, canvas: &skia::Canvas, opts: &RenderOptions, text: &TextShaper) -> Result<()>;

    /// Render to an RGBA8 (unpremultiplied) buffer.
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<RgbaImage> {
        rasterize(self, opts)
    }

    /// Render and encode as PNG in memory.
    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let img = self.render_to_rgba8(opts)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: &Path) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ChartError::io(parent, e))?;
        }
        std::fs::write(output_png_path, &bytes).map_err(|e| ChartError::io(output_png_path, e))?;
        info!(path = %output_png_path.display(), bytes = bytes.len(), "wrote png");
        Ok(())
    }
}

fn rasterize<F: Figure + ?Sized>(figure: &F, opts: &RenderOptions) -> Result<RgbaImage> {
    figure.validate()?;

    let (w, h) = (opts.width.max(1), opts.height.max(1));
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| ChartError::Render(format!("failed to create {w}x{h} raster surface")))?;
    {
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);
        let text = TextShaper::new();
        figure.paint(canvas, opts, &text)?;
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::Render("failed to read back surface pixels".into()));
    }
    debug!(width = w, height = h, "rasterized figure");
    RgbaImage::from_raw(w as u32, h as u32, pixels)
        .ok_or_else(|| ChartError::Render("pixel buffer does not match surface size".into()))
}

// ---- paint helpers shared by the chart painters -------------------------------

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Thin dashed stroke used for grid lines.
pub(crate) fn dashed_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = stroke_paint(color, width);
    paint.set_path_effect(skia::PathEffect::dash(&[4.0, 2.5], 0.0));
    paint
}
