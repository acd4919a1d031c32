//! Frontend rendering into a text terminal with ANSI escape sequences.

use std::{
    fmt,
    io::{self, Write},
    ops::ControlFlow::{self, Break},
    thread,
    time::{Duration, Instant},
};

use log::info;

use quadrast_core::{
    render::{Pipeline, ctx::Context},
    util::{
        ansi::{self, Ansi, Sequence},
        ascii,
    },
};

use crate::{Dims, Frame};

/// How pixels are turned into characters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Style {
    /// `#` for pixels whose red channel exceeds the threshold, space
    /// otherwise. One pixel per character cell.
    Threshold(f32),
    /// A character of [`ascii::RAMP`] by luma. One pixel per cell.
    Ramp,
    /// Colored half blocks, two pixels per cell. Needs a terminal with
    /// 24-bit color support.
    HalfBlocks,
}

/// A text terminal used as a display.
pub struct Terminal<W> {
    /// Where the frames are written.
    pub out: W,
    /// The width and height of the framebuffer in pixels.
    pub dims: Dims,
    pub style: Style,
    /// Frame rate cap. `None` means unlimited.
    pub target_fps: Option<u32>,
    /// Number of frames after which the main loop stops. `None` means
    /// run until the callback breaks.
    pub max_frames: Option<usize>,
    /// Rendering settings of the pipeline.
    pub ctx: Context,
    /// Whether to redraw in place instead of printing frames one after
    /// another.
    pub animate: bool,
}

impl Terminal<io::Stdout> {
    /// Returns a terminal writing to stdout with default settings.
    pub fn stdout(dims: Dims) -> Self {
        Self::new(io::stdout(), dims)
    }
}

impl<W: Write> Terminal<W> {
    /// Returns a terminal writing to `out`. The defaults draw a single
    /// frame in [`Style::Threshold`] with threshold 0.1.
    pub fn new(out: W, dims: Dims) -> Self {
        Self {
            out,
            dims,
            style: Style::Threshold(0.1),
            target_fps: None,
            max_frames: Some(1),
            ctx: Context::default(),
            animate: false,
        }
    }

    /// Converts the current contents of the framebuffer of `pl` into text.
    pub fn draw(&self, pl: &Pipeline) -> Result<String, fmt::Error> {
        let (w, _) = pl.dims();
        let px = pl.read_pixels();
        Ok(match self.style {
            Style::Threshold(t) => ascii::threshold(&px, w, t),
            Style::Ramp => ascii::ramp(&px, w),
            Style::HalfBlocks => {
                let mut s = String::new();
                ansi::write_half_blocks(&mut s, &px, w)?;
                s
            }
        })
    }

    /// Runs the main loop of the program, invoking the callback on each
    /// iteration to draw the next frame, then writing the frame out.
    ///
    /// The main loop stops and this function returns if:
    /// * `max_frames` frames have been drawn; or
    /// * the callback returns `ControlFlow::Break`.
    ///
    /// # Errors
    /// Returns any error from writing into `out`.
    pub fn run<F>(&mut self, mut frame_fn: F) -> io::Result<()>
    where
        F: FnMut(&mut Frame<Self>) -> ControlFlow<()>,
    {
        let (w, h) = self.dims;
        let mut pl = Pipeline::with_context(self.ctx, w, h);
        let period = self
            .target_fps
            .map(|fps| Duration::from_secs(1) / fps.max(1));

        if self.animate {
            self.escape(|seq| seq.clear_screen().cursor_hide())?;
        }

        let start = Instant::now();
        let mut last = start;
        let mut nr = 0;
        let res = loop {
            if self.max_frames.is_some_and(|max| nr >= max) {
                break Ok(());
            }
            let frame_start = Instant::now();
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

            if let Err(e) = self.present(&pl) {
                break Err(e);
            }
            nr += 1;
            if let Break(_) = flow {
                break Ok(());
            }
            if let Some(period) = period {
                thread::sleep(period.saturating_sub(frame_start.elapsed()));
            }
        };
        if self.animate {
            self.escape(|seq| seq.reset().cursor_show())?;
        }
        info!("\n{}", pl.stats());
        res
    }

    fn present(&mut self, pl: &Pipeline) -> io::Result<()> {
        let text = self.draw(pl).map_err(io::Error::other)?;
        if self.animate {
            self.escape(|seq| seq.cursor_pos(1, 1))?;
        }
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }

    fn escape<F>(&mut self, f: F) -> io::Result<()>
    where
        F: for<'s> FnOnce(Sequence<'s, String>) -> Sequence<'s, String>,
    {
        let mut s = String::new();
        f(Ansi::start(&mut s)).finish().map_err(io::Error::other)?;
        self.out.write_all(s.as_bytes())
    }
}
