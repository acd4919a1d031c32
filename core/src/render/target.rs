//! Render targets.
//!
//! The typical render target is a [framebuffer][Framebuf], comprising a
//! color buffer and a depth buffer. Fragments can also be [deferred] and
//! written into a framebuffer later.

use alloc::vec::Vec;

use crate::math::{Color3f, Vec2i, vec2i};
use crate::util::buf::Buf2;

use super::raster::Scanline;
use super::stats::Throughput;

/// A fragment, or a single candidate pixel write.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Frag {
    pub pos: Vec2i,
    /// Distance used for depth testing. Smaller is closer.
    pub depth: f32,
    pub color: Color3f,
}

/// Trait for types that can be used as render targets.
pub trait Target {
    /// Returns the width and height of `self` in pixels.
    fn dims(&self) -> (usize, usize);

    /// Writes a single fragment into `self`.
    ///
    /// Returns whether the fragment was accepted. Fragments outside the
    /// bounds of `self` are never accepted.
    fn write(&mut self, frag: Frag) -> bool;

    /// Writes a scanline of fragments with uniform depth and color.
    ///
    /// Returns count of fragments input and output.
    fn rasterize(&mut self, sl: Scanline, depth: f32, color: Color3f) -> Throughput {
        let mut io = Throughput { i: sl.xs.len(), o: 0 };
        for x in sl.xs {
            let pos = vec2i(x as i32, sl.y as i32);
            if self.write(Frag { pos, depth, color }) {
                io.o += 1;
            }
        }
        io
    }
}

/// Framebuffer, combining a color (pixel) buffer and a depth buffer.
///
/// A fragment is written, color and depth both, if and only if its depth
/// is strictly less than the depth currently stored at its position.
#[derive(Clone, Debug, PartialEq)]
pub struct Framebuf {
    pub color_buf: Buf2<Color3f>,
    pub depth_buf: Buf2<f32>,
}

/// A render target that queues fragments in submission order, to be
/// written into another target later with [`resolve`][Self::resolve].
#[derive(Clone, Debug, Default)]
pub struct Deferred {
    dims: (usize, usize),
    frags: Vec<Frag>,
}

impl Framebuf {
    /// Returns a `w` × `h` framebuffer with black color and every depth
    /// set to `depth_clear`.
    pub fn new(w: usize, h: usize, depth_clear: f32) -> Self {
        Self {
            color_buf: Buf2::new(w, h, Color3f::BLACK),
            depth_buf: Buf2::new(w, h, depth_clear),
        }
    }

    /// Fills the color buffer with `color` and the depth buffer with `depth`.
    pub fn clear(&mut self, color: Color3f, depth: f32) {
        self.color_buf.fill(color);
        self.depth_buf.fill(depth);
    }

    /// Returns a copy of the color buffer as RGB triples, row-major and
    /// top row first.
    pub fn read_pixels(&self) -> Vec<[f32; 3]> {
        self.color_buf.data().iter().map(|c| c.0).collect()
    }
}

impl Target for Framebuf {
    fn dims(&self) -> (usize, usize) {
        self.color_buf.dims()
    }

    fn write(&mut self, frag: Frag) -> bool {
        let Some(i) = self.depth_buf.index_of(frag.pos) else {
            return false;
        };
        let z = &mut self.depth_buf.data_mut()[i];
        if frag.depth < *z {
            *z = frag.depth;
            self.color_buf.data_mut()[i] = frag.color;
            true
        } else {
            false
        }
    }

    /// Rasterizes `sl` into this framebuffer.
    ///
    /// The part of `sl` outside the bounds of `self` is skipped.
    fn rasterize(&mut self, sl: Scanline, depth: f32, color: Color3f) -> Throughput {
        let Scanline { y, xs } = sl;
        let mut io = Throughput { i: xs.len(), o: 0 };

        let (w, h) = self.dims();
        if y >= h {
            return io;
        }
        let xs = xs.start.min(w)..xs.end.min(w);
        let cbuf_span = &mut self.color_buf[y][xs.clone()];
        let zbuf_span = &mut self.depth_buf[y][xs];
        for (c, z) in cbuf_span.iter_mut().zip(zbuf_span) {
            if depth < *z {
                *c = color;
                *z = depth;
                io.o += 1;
            }
        }
        io
    }
}

impl Deferred {
    /// Returns an empty queue accepting fragments within `dims`.
    pub fn new(dims: (usize, usize)) -> Self {
        Self { dims, frags: Vec::new() }
    }

    /// Returns the number of queued fragments.
    pub fn len(&self) -> usize {
        self.frags.len()
    }
    /// Returns whether no fragments are queued.
    pub fn is_empty(&self) -> bool {
        self.frags.is_empty()
    }

    /// Discards all queued fragments.
    pub fn clear(&mut self) {
        self.frags.clear();
    }

    /// Writes all queued fragments into `target` in the order they were
    /// queued, leaving `self` empty.
    ///
    /// Returns count of fragments input and output.
    pub fn resolve(&mut self, target: &mut impl Target) -> Throughput {
        let mut io = Throughput { i: self.frags.len(), o: 0 };
        for frag in self.frags.drain(..) {
            if target.write(frag) {
                io.o += 1;
            }
        }
        io
    }
}

impl Target for Deferred {
    fn dims(&self) -> (usize, usize) {
        self.dims
    }

    fn write(&mut self, frag: Frag) -> bool {
        let (w, h) = self.dims;
        let in_bounds = usize::try_from(frag.pos.x).is_ok_and(|x| x < w)
            && usize::try_from(frag.pos.y).is_ok_and(|y| y < h);
        if in_bounds {
            self.frags.push(frag);
        }
        in_bounds
    }
}
