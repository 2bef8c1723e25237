// File: crates/benchplot-window/src/lib.rs
// Summary: Shows a rendered figure in a native window by blitting the CPU raster with winit + softbuffer.

use std::num::NonZeroU32;

use benchplot_core::{ChartError, Figure, RenderOptions};
use tracing::{debug, info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyboardInput, VirtualKeyCode, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::platform::run_return::EventLoopExtRunReturn;
use winit::window::WindowBuilder;

fn render_err(what: &str, e: impl std::fmt::Debug) -> ChartError {
    ChartError::Render(format!("{what}: {e:?}"))
}

/// Pack unpremultiplied RGBA8 pixels into softbuffer's `0RGB` words.
///
/// Copies `min(frame.len(), rgba.len() / 4)` pixels; the rest of `frame` is untouched.
pub fn blit_rgba(rgba: &[u8], frame: &mut [u32]) {
    for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
    }
}

/// Open a window sized like `opts`, paint `figure` into it and block until
/// the window is closed (or Escape is pressed).
///
/// The figure is validated before any window appears, so invalid input
/// fails without side effects. Resizing re-renders at the new size.
pub fn show(figure: &dyn Figure, opts: &RenderOptions, title: &str) -> Result<(), ChartError> {
    figure.validate()?;

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(title)
        .with_inner_size(PhysicalSize::new(opts.width.max(1) as u32, opts.height.max(1) as u32))
        .build(&event_loop)
        .map_err(|e| render_err("failed to create window", e))?;

    // SAFETY: `window` outlives both the context and the surface; all three drop at the end of this function.
    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| render_err("softbuffer context", e))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| render_err("softbuffer surface", e))?;

    info!(title, width = opts.width, height = opts.height, "showing chart window");
    let mut failure: Option<ChartError> = None;
    let mut size = window.inner_size();

    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    input: KeyboardInput {
                        state: ElementState::Pressed,
                        virtual_keycode: Some(VirtualKeyCode::Escape),
                        ..
                    },
                    ..
                } => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return; // minimized
                };
                let frame_opts = opts.clone().with_size(w.get() as i32, h.get() as i32);
                let result = figure.render_to_rgba8(&frame_opts).and_then(|img| {
                    surface.resize(w, h).map_err(|e| render_err("resize surface", e))?;
                    let mut frame = surface.buffer_mut().map_err(|e| render_err("map frame", e))?;
                    blit_rgba(img.as_raw(), &mut frame);
                    frame.present().map_err(|e| render_err("present frame", e))
                });
                match result {
                    Ok(()) => debug!(width = w.get(), height = h.get(), "presented frame"),
                    Err(e) => {
                        warn!(error = %e, "closing window after render failure");
                        failure = Some(e);
                        *control_flow = ControlFlow::Exit;
                    }
                }
            }
            _ => {}
        }
    });

    failure.map_or(Ok(()), Err)
}
