//! Rendering context and parameters.

use crate::error::Error;

/// Context and parameters used by the pipeline.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Context {
    /// How to rasterize faces whose vertices are submitted in the default
    /// winding order.
    ///
    /// This is the only mode consulted by the rasterizer.
    pub polygon_mode_front: PolygonMode,

    /// How to rasterize back faces.
    ///
    /// Stored and reported, but currently no primitive is classified as a
    /// back face, so it has no effect on the output.
    pub polygon_mode_back: PolygonMode,

    /// When fragments reach the framebuffer.
    ///
    /// With [`Compositing::Immediate`], every fragment is depth tested and
    /// written as soon as its quad is rasterized. With
    /// [`Compositing::Deferred`], fragments are queued until
    /// [`Pipeline::end`][super::Pipeline::end] resolves them, in submission
    /// order, through the same depth test. Both produce identical images.
    pub compositing: Compositing,

    /// The value with which to fill the depth buffer to clear it.
    ///
    /// A fragment is written only if its distance is strictly less than the
    /// stored depth, so anything farther than this is never drawn.
    pub depth_clear: f32,
}

/// Selects one or both faces of a primitive.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    Front,
    Back,
    FrontAndBack,
}

/// How a face is rasterized.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PolygonMode {
    /// Filled with the lit face color.
    #[default]
    Fill,
    /// Outlined with the unlit face color.
    Line,
    /// Only the vertices are plotted, with the unlit face color.
    Point,
}

/// When rasterized fragments are written into the framebuffer.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Compositing {
    #[default]
    Immediate,
    Deferred,
}

impl Context {
    /// Returns the polygon mode of `face`.
    ///
    /// For [`Face::FrontAndBack`], returns the front mode.
    pub fn polygon_mode(&self, face: Face) -> PolygonMode {
        match face {
            Face::Front | Face::FrontAndBack => self.polygon_mode_front,
            Face::Back => self.polygon_mode_back,
        }
    }

    /// Sets the polygon mode of `face`, or of both faces.
    pub fn set_polygon_mode(&mut self, face: Face, mode: PolygonMode) {
        match face {
            Face::Front => self.polygon_mode_front = mode,
            Face::Back => self.polygon_mode_back = mode,
            Face::FrontAndBack => {
                self.polygon_mode_front = mode;
                self.polygon_mode_back = mode;
            }
        }
    }
}

impl Default for Context {
    /// Creates a rendering context with default settings.
    ///
    /// The default values are:
    /// * Front polygon mode: Fill
    /// * Back polygon mode:  Fill
    /// * Compositing:        Immediate
    /// * Depth clear:        999 999 999.0
    fn default() -> Self {
        Self {
            polygon_mode_front: PolygonMode::Fill,
            polygon_mode_back: PolygonMode::Fill,
            compositing: Compositing::Immediate,
            depth_clear: 999_999_999.0,
        }
    }
}

//
// Raw enumerants
//

// Values of the integer enumerant API. No two enumerants share a value.

impl Face {
    pub const FRONT_AND_BACK: u32 = 2;
    pub const FRONT: u32 = 3;
    pub const BACK: u32 = 4;
}

impl PolygonMode {
    pub const FILL: u32 = 5;
    pub const LINE: u32 = 6;
    pub const POINT: u32 = 7;
}

impl TryFrom<u32> for Face {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            Self::FRONT => Ok(Self::Front),
            Self::BACK => Ok(Self::Back),
            Self::FRONT_AND_BACK => Ok(Self::FrontAndBack),
            _ => Err(Error::InvalidEnum { kind: "face", value }),
        }
    }
}

impl TryFrom<u32> for PolygonMode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Error> {
        match value {
            Self::POINT => Ok(Self::Point),
            Self::LINE => Ok(Self::Line),
            Self::FILL => Ok(Self::Fill),
            _ => Err(Error::InvalidEnum { kind: "polygon mode", value }),
        }
    }
}
