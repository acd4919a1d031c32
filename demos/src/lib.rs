//! Shared command-line options and scenes of the demo programs.

use clap::{Args, ValueEnum};

use qr::prelude::*;
use qr_front::term::Style;

/// Rendering options common to all demos.
#[derive(Args, Debug)]
pub struct RenderOpts {
    /// Framebuffer width in pixels.
    #[arg(long, default_value_t = 80)]
    pub width: usize,
    /// Framebuffer height in pixels.
    #[arg(long, default_value_t = 24)]
    pub height: usize,
    /// How quads are rasterized.
    #[arg(long, value_enum, default_value_t = Mode::Fill)]
    pub mode: Mode,
    /// Write fragments at the end of each frame instead of right away.
    #[arg(long)]
    pub deferred: bool,
}

/// Options of the terminal demos.
#[derive(Args, Debug)]
pub struct TermOpts {
    /// How pixels are turned into characters.
    #[arg(long, value_enum, default_value_t = Chars::Threshold)]
    pub chars: Chars,
    /// Red channel threshold of `--chars threshold`.
    #[arg(long, default_value_t = 0.1)]
    pub threshold: f32,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Fill,
    Line,
    Point,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Chars {
    /// `#` or space.
    Threshold,
    /// Ten shades of gray.
    Ramp,
    /// Colored half blocks, two pixels per character.
    Blocks,
}

impl From<Mode> for PolygonMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Fill => PolygonMode::Fill,
            Mode::Line => PolygonMode::Line,
            Mode::Point => PolygonMode::Point,
        }
    }
}

impl RenderOpts {
    /// Returns the framebuffer width and height.
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the rendering settings selected by the options.
    pub fn context(&self) -> Context {
        let mut ctx = Context::default();
        ctx.set_polygon_mode(Face::FrontAndBack, self.mode.into());
        if self.deferred {
            ctx.compositing = Compositing::Deferred;
        }
        ctx
    }
}

impl TermOpts {
    pub fn style(&self) -> Style {
        match self.chars {
            Chars::Threshold => Style::Threshold(self.threshold),
            Chars::Ramp => Style::Ramp,
            Chars::Blocks => Style::HalfBlocks,
        }
    }

    /// Returns the width-to-height ratio of the image on a terminal whose
    /// character cells are 5 units wide and 8 units high.
    pub fn aspect(&self, (w, h): (usize, usize)) -> f32 {
        let px_h = if self.chars == Chars::Blocks { 4.0 } else { 8.0 };
        (w as f32 * 5.0) / (h as f32 * px_h)
    }
}

/// Initializes logging to stderr at level `info` unless overridden with
/// the `RUST_LOG` environment variable.
pub fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();
}

/// Faces of a cube with corners at ±1, each with its own color.
pub const CUBE: [([[f32; 3]; 4], [f32; 3]); 6] = [
    // +x
    (
        [[1.0, -1.0, -1.0], [1.0, 1.0, -1.0], [1.0, 1.0, 1.0], [1.0, -1.0, 1.0]],
        [1.0, 0.2, 0.2],
    ),
    // -x
    (
        [[-1.0, -1.0, -1.0], [-1.0, -1.0, 1.0], [-1.0, 1.0, 1.0], [-1.0, 1.0, -1.0]],
        [0.2, 1.0, 1.0],
    ),
    // +y
    (
        [[-1.0, 1.0, -1.0], [-1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [1.0, 1.0, -1.0]],
        [0.2, 1.0, 0.2],
    ),
    // -y
    (
        [[-1.0, -1.0, -1.0], [1.0, -1.0, -1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, 1.0]],
        [1.0, 0.2, 1.0],
    ),
    // +z
    (
        [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 1.0, 1.0]],
        [0.2, 0.2, 1.0],
    ),
    // -z
    (
        [[-1.0, -1.0, -1.0], [-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [1.0, -1.0, -1.0]],
        [1.0, 1.0, 0.2],
    ),
];

/// Submits the faces of [`CUBE`] to `pl`.
pub fn submit_cube(pl: &mut Pipeline) {
    for (verts, [r, g, b]) in CUBE {
        pl.set_flat_color(r, g, b);
        for [x, y, z] in verts {
            pl.submit_vertex(x, y, z);
        }
    }
}

/// Sets up two colored directional lights and a white point light.
pub fn setup_lights(pl: &mut Pipeline) {
    let lights = [
        (LightId::L0, [0.5, 1.0, -1.0, 0.0], [0.9, 0.8, 0.7]),
        (LightId::L1, [-0.5, -1.0, 1.0, 0.0], [0.3, 0.3, 0.5]),
        (LightId::L2, [0.0, 0.0, -3.0, 1.0], [0.4, 0.4, 0.4]),
    ];
    for (id, pos, [r, g, b]) in lights {
        pl.set_light_position(id, pos);
        pl.set_light_color(id, r, g, b);
        pl.enable_light(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_faces_are_unit_squares() {
        for (verts, _) in CUBE {
            for i in 0..4 {
                let [a, b] = [verts[i], verts[(i + 1) % 4]];
                let d: f32 = (0..3).map(|j| (a[j] - b[j]).abs()).sum();
                assert_eq!(d, 2.0);
            }
        }
    }

    #[test]
    fn opts_select_context() {
        let opts = RenderOpts {
            width: 10,
            height: 5,
            mode: Mode::Line,
            deferred: true,
        };
        let ctx = opts.context();
        assert_eq!(ctx.polygon_mode(Face::Front), PolygonMode::Line);
        assert_eq!(ctx.polygon_mode(Face::Back), PolygonMode::Line);
        assert_eq!(ctx.compositing, Compositing::Deferred);
        assert_eq!(opts.dims(), (10, 5));
    }

    #[test]
    fn terminal_aspect() {
        let mut opts = TermOpts {
            chars: Chars::Threshold,
            threshold: 0.1,
        };
        assert_eq!(opts.aspect((80, 24)), 400.0 / 192.0);
        opts.chars = Chars::Blocks;
        assert_eq!(opts.aspect((80, 48)), 400.0 / 192.0);
    }

    #[test]
    fn cube_renders_in_all_modes() {
        for mode in [Mode::Fill, Mode::Line, Mode::Point] {
            let opts = RenderOpts {
                width: 40,
                height: 20,
                mode,
                deferred: false,
            };
            let mut pl = Pipeline::with_context(opts.context(), 40, 20);
            pl.set_camera(
                &perspective(degs(45.0), 2.0, 0.1, 100.0),
                &look_at(vec3(3.0, 4.0, 5.0), Vec3::ZERO),
            );
            setup_lights(&mut pl);
            submit_cube(&mut pl);
            assert_eq!(pl.stats().quads.i, 6);
            assert!(pl.read_pixels().iter().any(|&p| p != [0.0; 3]), "{mode:?}");
        }
    }
}
