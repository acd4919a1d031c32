//! Frontends for creating simple applications with `quadrast`.
//!
//! A frontend owns the main loop. On every iteration it clears the
//! pipeline's framebuffer, hands the pipeline to a callback in a
//! [`Frame`], and presents the result: on a terminal by
//! [`term::Terminal`], or in a desktop window by `minifb::Window` if
//! the `minifb` feature is enabled.

use std::time::Duration;

use quadrast_core::render::Pipeline;

#[cfg(feature = "minifb")]
pub mod minifb;
pub mod term;

/// Per-frame state. The run method of a frontend passes an instance of
/// `Frame` to the callback function on every iteration of the main loop.
pub struct Frame<'a, Win> {
    /// Elapsed time since the start of the first frame.
    pub t: Duration,
    /// Elapsed time since the start of the previous frame.
    pub dt: Duration,
    /// Index of the current frame, starting from zero.
    pub nr: usize,
    /// The pipeline to submit quads to. Cleared before every frame.
    pub pipeline: &'a mut Pipeline,
    /// Reference to the frontend object.
    pub win: &'a mut Win,
}

/// Width and height of a framebuffer in pixels.
pub type Dims = (usize, usize);
