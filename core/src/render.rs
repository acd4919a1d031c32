//! Turning quads into raster images.
//!
//! This module constitutes the rendering pipeline of `quadrast`. It
//! contains code for [assembling][prim] vertices into quads,
//! [lighting][light] them, [projecting][proj] them to the screen,
//! [rasterizing][raster] them, and [outputting][target] the resulting
//! fragments. The [`Pipeline`] ties the stages together behind an
//! immediate-mode API.

use ctx::PolygonMode;
use raster::{Scanline, line, tri_fill};
use stats::Throughput;
use target::{Frag, Target};

use crate::math::{Color3f, Vec2i};

pub mod ctx;
pub mod light;
pub mod pipeline;
pub mod prim;
pub mod proj;
pub mod raster;
pub mod stats;
pub mod target;

pub use pipeline::Pipeline;

/// A quad after transformation, lighting, and projection to the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScreenQuad {
    /// The vertices in pixel coordinates.
    pub verts: [Vec2i; 4],
    /// The distance every fragment of the quad is depth tested with.
    pub depth: f32,
    /// The color as submitted.
    pub unlit: Color3f,
    /// The color after lighting.
    pub lit: Color3f,
}

/// Renders `quad` into `target` in the given polygon mode.
///
/// In [`Fill`][PolygonMode::Fill] mode, the quad is split into triangles
/// (v0, v1, v2) and (v0, v2, v3) and filled with the lit color. In
/// [`Line`][PolygonMode::Line] mode, the edges v0–v1, v1–v2, v2–v3, and
/// v3–v0 are drawn, and in [`Point`][PolygonMode::Point] mode only the
/// four vertices, in both cases with the unlit color.
///
/// Returns count of fragments input and output.
pub fn render<Tgt: Target>(
    quad: &ScreenQuad,
    mode: PolygonMode,
    target: &mut Tgt,
) -> Throughput {
    let ScreenQuad { verts: [v0, v1, v2, v3], depth, unlit, lit } = *quad;
    let dims = target.dims();
    let mut io = Throughput::default();

    let mut plot = |target: &mut Tgt, pos| {
        io.i += 1;
        if target.write(Frag { pos, depth, color: unlit }) {
            io.o += 1;
        }
    };
    match mode {
        PolygonMode::Point => {
            for pos in [v0, v1, v2, v3] {
                plot(target, pos);
            }
        }
        PolygonMode::Line => {
            for edge in [[v0, v1], [v1, v2], [v2, v3], [v3, v0]] {
                line(edge, dims, |pos| plot(target, pos));
            }
        }
        PolygonMode::Fill => {
            for tri in [[v0, v1, v2], [v0, v2, v3]] {
                tri_fill(tri, dims, |sl: Scanline| {
                    io += target.rasterize(sl, depth, lit);
                });
            }
        }
    }
    io
}

#[cfg(test)]
mod tests {
    use crate::math::gray;

    use super::target::Framebuf;
    use super::*;

    fn quad(verts: [(i32, i32); 4]) -> ScreenQuad {
        ScreenQuad {
            verts: verts.map(Vec2i::from),
            depth: 1.0,
            unlit: gray(0.25),
            lit: gray(0.75),
        }
    }

    fn lit_pixels(fb: &Framebuf) -> usize {
        fb.color_buf.data().iter().filter(|&&c| c != Color3f::BLACK).count()
    }

    #[test]
    fn fill_covers_quad_with_lit_color() {
        let mut fb = Framebuf::new(8, 8, 100.0);
        let q = quad([(1, 1), (4, 1), (4, 4), (1, 4)]);
        let io = render(&q, PolygonMode::Fill, &mut fb);

        assert_eq!(lit_pixels(&fb), 16);
        assert_eq!(io.o, 16);
        // The shared diagonal is rasterized twice
        assert!(io.i > 16);
        assert_eq!(fb.color_buf[[2, 3]], gray(0.75));
        assert_eq!(fb.color_buf[[0, 0]], Color3f::BLACK);
        assert_eq!(fb.color_buf[[5, 4]], Color3f::BLACK);
    }

    #[test]
    fn line_outlines_quad_with_unlit_color() {
        let mut fb = Framebuf::new(8, 8, 100.0);
        let q = quad([(1, 1), (4, 1), (4, 4), (1, 4)]);
        render(&q, PolygonMode::Line, &mut fb);

        assert_eq!(lit_pixels(&fb), 12);
        assert_eq!(fb.color_buf[[1, 2]], gray(0.25));
        assert_eq!(fb.color_buf[[2, 2]], Color3f::BLACK);
    }

    #[test]
    fn point_plots_vertices_with_unlit_color() {
        let mut fb = Framebuf::new(8, 8, 100.0);
        let q = quad([(1, 1), (4, 1), (4, 4), (9, 9)]);
        let io = render(&q, PolygonMode::Point, &mut fb);

        assert_eq!((io.i, io.o), (4, 3));
        assert_eq!(lit_pixels(&fb), 3);
        assert_eq!(fb.color_buf[[4, 1]], gray(0.25));
        assert_eq!(fb.depth_buf[[4, 4]], 1.0);
        assert_eq!(fb.depth_buf[[2, 2]], 100.0);
    }
}
