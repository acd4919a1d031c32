//! Frontend using the `minifb` crate for window creation and event handling.

use std::{
    ops::ControlFlow::{self, Break},
    time::Instant,
};

use log::{debug, info};
use minifb::{Key, WindowOptions};

use quadrast_core::render::{Pipeline, ctx::Context, target::Framebuf};

use crate::{Dims, Frame};

/// A desktop window showing the framebuffer of a pipeline.
pub struct Window {
    /// The wrapped minifb window.
    pub imp: minifb::Window,
    /// The width and height of the framebuffer.
    pub dims: Dims,
    /// Rendering settings of the pipeline.
    pub ctx: Context,
    /// Pixels in `0x00_RR_GG_BB` format, reused between frames.
    px: Vec<u32>,
}

impl Window {
    /// Opens a window with a `dims` framebuffer, capped at 60 fps.
    ///
    /// The framebuffer is scaled up on screen according to `opts.scale`.
    pub fn open(
        title: &str,
        dims: Dims,
        opts: WindowOptions,
    ) -> minifb::Result<Self> {
        debug!("opening {}×{} window {title:?}", dims.0, dims.1);
        let mut imp = minifb::Window::new(title, dims.0, dims.1, opts)?;
        imp.set_target_fps(60);
        Ok(Self {
            imp,
            dims,
            ctx: Context::default(),
            px: Vec::new(),
        })
    }

    /// Updates the window content with the color buffer of `fb`.
    ///
    /// Color channels are clamped to 0..=1 before conversion.
    pub fn present(&mut self, fb: &Framebuf) -> minifb::Result<()> {
        let (w, h) = fb.color_buf.dims();
        self.px.clear();
        self.px.extend(
            fb.color_buf.data().iter().map(|c| c.to_color3().to_rgb_u32()),
        );
        self.imp.update_with_buffer(&self.px, w, h)
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to compute and draw the next frame.
    ///
    /// The main loop stops and this function returns if:
    /// * the user closes the window;
    /// * the Esc key is pressed; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// Returns any error from updating the window.
    pub fn run<F>(&mut self, mut frame_fn: F) -> minifb::Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let (w, h) = self.dims;
        let mut pl = Pipeline::with_context(self.ctx, w, h);

        let start = Instant::now();
        let mut last = start;
        let mut nr = 0;
        while self.imp.is_open() && !self.imp.is_key_down(Key::Escape) {
            pl.clear_color(0.0, 0.0, 0.0);
            pl.begin();
            let frame = &mut Frame {
                t: start.elapsed(),
                dt: last.elapsed(),
                nr,
                pipeline: &mut pl,
                win: self,
            };
            last = Instant::now();
            let flow = frame_fn(frame);
            pl.end();
            self.present(pl.framebuf())?;
            nr += 1;

            if let Break(()) = flow {
                break;
            }
        }
        info!("\n{}", pl.stats());
        Ok(())
    }
}
