//! The immediate-mode rendering pipeline.

use alloc::vec::Vec;
use core::mem;

use log::{debug, trace, warn};

use crate::error::{Error, Result};
use crate::math::{Color3f, Mat4, Vec3, rgb};

use super::ctx::{Compositing, Context, Face, PolygonMode};
use super::light::{self, Light, LightAttrib, LightId};
use super::prim::{Assembler, Quad};
use super::proj::{perspective_divide, viewport_transform};
use super::stats::Stats;
use super::target::{Deferred, Framebuf, Target};
use super::{ScreenQuad, render};

/// A software rendering pipeline with immediate-mode submission.
///
/// Owns all rendering state: the combined transform, four light slots,
/// the pending vertices, and a color and depth framebuffer. Vertices are
/// submitted one at a time with [`submit_vertex`][Self::submit_vertex];
/// every fourth vertex completes a quad, which is transformed, lit,
/// projected and rasterized into the framebuffer right away.
///
/// Independent pipelines share no state.
///
/// # Examples
/// ```
/// use quadrast_core::prelude::*;
///
/// let mut pl = Pipeline::new(80, 24);
/// pl.set_camera(
///     &perspective(degs(45.0), 80.0 / 24.0, 0.1, 100.0),
///     &look_at(vec3(0.0, 0.0, 7.0), Vec3::ZERO),
/// );
/// pl.clear_color(0.0, 0.0, 0.0);
///
/// pl.set_flat_color(1.0, 0.0, 0.0);
/// pl.submit_vertex(0.0, 1.0, 0.0);
/// pl.submit_vertex(-1.0, -1.0, 0.0);
/// pl.submit_vertex(1.0, -1.0, 0.0);
/// pl.submit_vertex(1.0, -1.0, 0.0);
///
/// assert_eq!(pl.pending_vertices(), 0);
/// assert!(pl.read_pixels().contains(&[1.0, 0.0, 0.0]));
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline {
    ctx: Context,
    transform: Mat4,
    lights: [Light; 4],
    asm: Assembler,
    flat_color: Color3f,
    framebuf: Framebuf,
    deferred: Deferred,
    /// Stats of completed frames.
    stats: Stats,
    /// Stats of the current frame.
    frame: Stats,
}

impl Pipeline {
    /// Creates a pipeline with a `width` × `height` framebuffer and
    /// default settings.
    ///
    /// See [`Context::default`] for the defaults. The transform is the
    /// identity, all lights are disabled, and the flat color is white.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_context(Context::default(), width, height)
    }

    /// Creates a pipeline with a `width` × `height` framebuffer and the
    /// settings in `ctx`.
    pub fn with_context(ctx: Context, width: usize, height: usize) -> Self {
        debug!("creating {width}×{height} pipeline with {ctx:?}");
        Self {
            ctx,
            transform: Mat4::IDENTITY,
            lights: [Light::default(); 4],
            asm: Assembler::new(),
            flat_color: Color3f::WHITE,
            framebuf: Framebuf::new(width, height, ctx.depth_clear),
            deferred: Deferred::new((width, height)),
            stats: Stats::new(),
            frame: Stats::new(),
        }
    }

    /// Returns the current settings.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    //
    // Viewport and framebuffer
    //

    /// Replaces the framebuffer with a new `width` × `height` one.
    ///
    /// The old color and depth buffers are discarded along with any
    /// deferred fragments. The new color buffer is black and the new depth
    /// buffer is cleared to [`Context::depth_clear`].
    pub fn configure_viewport(&mut self, width: usize, height: usize) {
        debug!("configuring {width}×{height} viewport");
        self.framebuf = Framebuf::new(width, height, self.ctx.depth_clear);
        self.deferred = Deferred::new((width, height));
    }

    /// Returns the width and height of the framebuffer.
    pub fn dims(&self) -> (usize, usize) {
        self.framebuf.dims()
    }

    /// Fills the color buffer with `(r, g, b)` and resets every depth to
    /// [`Context::depth_clear`]. Discards any deferred fragments.
    pub fn clear_color(&mut self, r: f32, g: f32, b: f32) {
        self.framebuf.clear(rgb(r, g, b), self.ctx.depth_clear);
        self.deferred.clear();
    }

    /// Returns a copy of the color buffer as RGB triples, in row-major
    /// order with the top row first.
    ///
    /// In deferred mode, fragments only show up after [`end`][Self::end].
    pub fn read_pixels(&self) -> Vec<[f32; 3]> {
        self.framebuf.read_pixels()
    }

    /// Returns the framebuffer.
    pub fn framebuf(&self) -> &Framebuf {
        &self.framebuf
    }

    //
    // Rasterization state
    //

    /// Sets how faces are rasterized.
    ///
    /// Only the front mode affects the output.
    pub fn set_polygon_mode(&mut self, face: Face, mode: PolygonMode) {
        debug!("setting {face:?} polygon mode to {mode:?}");
        self.ctx.set_polygon_mode(face, mode);
    }

    /// Returns the polygon mode of `face`.
    pub fn polygon_mode(&self, face: Face) -> PolygonMode {
        self.ctx.polygon_mode(face)
    }

    /// Sets when fragments are written into the framebuffer.
    ///
    /// When switching away from deferred compositing, the fragments queued
    /// so far are resolved first.
    pub fn set_compositing(&mut self, mode: Compositing) {
        debug!("setting compositing to {mode:?}");
        if self.ctx.compositing == Compositing::Deferred {
            self.resolve();
        }
        self.ctx.compositing = mode;
    }

    //
    // Lights
    //

    /// Returns the light in slot `id`.
    pub fn light(&self, id: LightId) -> &Light {
        &self.lights[id.index()]
    }

    /// Enables the light in slot `id`.
    pub fn enable_light(&mut self, id: LightId) {
        debug!("enabling light {id:?}");
        self.lights[id.index()].enabled = true;
    }

    /// Disables the light in slot `id`.
    pub fn disable_light(&mut self, id: LightId) {
        debug!("disabling light {id:?}");
        self.lights[id.index()].enabled = false;
    }

    /// Sets the position of the light in slot `id`.
    ///
    /// If `w` is greater than 0.99, the light becomes a point light at
    /// `(x, y, z)`, otherwise a directional light shining from direction
    /// `(x, y, z)`. The position is in the same space as the transformed
    /// vertices; it is not itself transformed.
    pub fn set_light_position(&mut self, id: LightId, pos: [f32; 4]) {
        self.lights[id.index()].set_position(pos);
    }

    /// Sets the diffuse color of the light in slot `id`.
    pub fn set_light_color(&mut self, id: LightId, r: f32, g: f32, b: f32) {
        self.lights[id.index()].color = rgb(r, g, b);
    }

    /// Sets the attribute `attrib` of the light in slot `id` from a slice
    /// of values.
    ///
    /// [`Position`][LightAttrib::Position] takes four values and
    /// [`Diffuse`][LightAttrib::Diffuse] three. Any extra values are
    /// ignored.
    ///
    /// # Errors
    /// Returns [`Error::ValueCount`] if `vals` is too short, leaving the
    /// light unchanged.
    pub fn light_fv(
        &mut self,
        id: LightId,
        attrib: LightAttrib,
        vals: &[f32],
    ) -> Result<()> {
        let expected = attrib.value_count();
        if vals.len() < expected {
            warn!(
                "light {id:?} {} needs {expected} values, got {vals:?}",
                attrib.name()
            );
            return Err(Error::ValueCount {
                attrib: attrib.name(),
                expected,
                actual: vals.len(),
            });
        }
        match attrib {
            LightAttrib::Position => {
                self.set_light_position(id, [vals[0], vals[1], vals[2], vals[3]])
            }
            LightAttrib::Diffuse => {
                self.set_light_color(id, vals[0], vals[1], vals[2])
            }
        }
        Ok(())
    }

    //
    // Transform
    //

    /// Sets the combined transform to `projection * view`.
    pub fn set_camera(&mut self, projection: &Mat4, view: &Mat4) {
        self.transform = projection.compose(view);
        debug!("camera set, transform now {:?}", self.transform);
    }

    /// Returns the combined transform applied to submitted vertices.
    pub fn transform(&self) -> &Mat4 {
        &self.transform
    }

    /// Replaces the combined transform with `m`.
    pub fn load_transform(&mut self, m: Mat4) {
        self.transform = m;
    }

    /// Composes a rotation by `angle` about `axis` onto the combined
    /// transform, so that it applies to vertices before the current
    /// transform.
    ///
    /// The axis need not be normalized, but a zero axis gives NaNs.
    #[cfg(feature = "fp")]
    pub fn rotate(&mut self, angle: crate::math::Angle, axis: Vec3) {
        self.transform *= crate::math::rotate(angle, axis);
    }

    /// Composes a translation by `offset` onto the combined transform, so
    /// that it applies to vertices before the current transform.
    pub fn translate(&mut self, offset: Vec3) {
        self.transform *= crate::math::translate(offset);
    }

    //
    // Submission
    //

    /// Sets the color of subsequently completed quads.
    ///
    /// A quad gets the flat color in effect when its fourth vertex is
    /// submitted.
    pub fn set_flat_color(&mut self, r: f32, g: f32, b: f32) {
        self.flat_color = rgb(r, g, b);
    }

    /// Submits the vertex `(x, y, z)`.
    ///
    /// Every fourth vertex completes a quad, which is then transformed
    /// with the combined transform, lit, projected and rasterized
    /// according to the front polygon mode.
    pub fn submit_vertex(&mut self, x: f32, y: f32, z: f32) {
        self.frame.verts.i += 1;
        if let Some(quad) = self.asm.push([x, y, z], self.flat_color) {
            self.frame.verts.o += 4;
            self.draw(quad);
        }
    }

    /// Returns the number of vertices submitted since the last completed
    /// quad, in `0..4`.
    pub fn pending_vertices(&self) -> usize {
        self.asm.pending()
    }

    //
    // Frames
    //

    /// Marks the start of a frame and starts timing it.
    pub fn begin(&mut self) {
        trace!("begin frame");
        self.stats += mem::replace(&mut self.frame, Stats::start()).finish();
    }

    /// Marks the end of a frame.
    ///
    /// In deferred mode, writes the queued fragments into the framebuffer
    /// in the order they were rasterized. Otherwise only records stats.
    pub fn end(&mut self) {
        if self.ctx.compositing == Compositing::Deferred {
            self.resolve();
        }
        let mut frame = mem::take(&mut self.frame).finish();
        frame.frames += 1;
        trace!("end frame: {} fragments written", frame.frags.o);
        self.stats += frame;
    }

    /// Returns the accumulated stats, including the current frame.
    pub fn stats(&self) -> Stats {
        let mut stats = self.stats.clone();
        stats += self.frame.clone();
        stats
    }

    //
    // Internals
    //

    fn resolve(&mut self) {
        let io = self.deferred.resolve(&mut self.framebuf);
        debug!("resolved {} deferred fragments, {} written", io.i, io.o);
        self.frame.frags.o += io.o;
    }

    fn draw(&mut self, quad: Quad) {
        let tf = &self.transform;
        let quad = Quad {
            verts: quad.verts.map(|v| tf.apply(v)),
            color: quad.color,
        };
        let lit =
            light::shade(quad.color, quad.normal(), quad.center(), &self.lights);

        let dims = self.dims();
        let sq = ScreenQuad {
            verts: quad
                .verts
                .map(|v| viewport_transform(perspective_divide(v), dims)),
            depth: quad.distance(),
            unlit: quad.color,
            lit,
        };
        let mode = self.ctx.polygon_mode_front;
        trace!("{mode:?} quad {:?} at depth {}, lit {lit:?}", sq.verts, sq.depth);

        let io = match self.ctx.compositing {
            Compositing::Immediate => {
                let io = render(&sq, mode, &mut self.framebuf);
                self.frame.frags.o += io.o;
                io
            }
            Compositing::Deferred => render(&sq, mode, &mut self.deferred),
        };
        self.frame.frags.i += io.i;
        self.frame.quads.i += 1;
        self.frame.quads.o += usize::from(io.o > 0);
    }
}
