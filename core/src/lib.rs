//! Core functionality of the `quadrast` project.
//!
//! `quadrast` is an immediate-mode software rasterizer in the style of the
//! old fixed-function graphics APIs: vertices are submitted one at a time,
//! four at a time they form a flat-colored *quad*, and every completed quad
//! is transformed, lit, projected and rasterized into a color and depth
//! buffer owned by a [`Pipeline`][render::Pipeline]. No GPU is involved.
//!
//! ```
//! use quadrast_core::prelude::*;
//!
//! let mut pl = Pipeline::new(16, 8);
//! pl.clear_color(0.0, 0.0, 0.0);
//! pl.set_flat_color(1.0, 0.0, 0.0);
//! for (x, y) in [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)] {
//!     pl.submit_vertex(x, y, 0.0);
//! }
//! let pixels = pl.read_pixels();
//! assert_eq!(pixels.len(), 16 * 8);
//! assert!(pixels.contains(&[1.0, 0.0, 0.0]));
//! ```
//!
//! # Crate features
//!
//! * `std`:
//!   Uses the floating-point functions of the standard library and enables
//!   `std::error::Error` for [`Error`]. Enabled by default.
//!
//!   If this feature is disabled, the crate only depends on `alloc`.
//!
//! * `libm`:
//!   Provides software implementations of floating-point functions via the
//!   [libm](https://crates.io/crates/libm) crate.
//!
//! * `mm`:
//!   Provides fast approximate implementations of floating-point functions
//!   via the [micromath](https://crates.io/crates/micromath) crate.
//!
//! Any of the three also enables the internal `fp` feature, which gates the
//! items that need trigonometry, such as rotation matrices.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;
extern crate core;

pub mod error;
pub mod math;
pub mod render;
pub mod util;

pub use error::{Error, Result};

pub mod prelude {
    #[cfg(feature = "fp")]
    pub use crate::math::mat::{perspective, rotate};
    pub use crate::math::{
        angle::{degs, rads, Angle},
        color::{gray, rgb, Color3, Color3f},
        mat::{frustum, look_at, translate, Mat4},
        vec::{cross, dot, normalize, vec2i, vec3, vec4, Vec2i, Vec3, Vec4},
    };

    pub use crate::render::{
        ctx::{Compositing, Context, Face, PolygonMode},
        light::{LightAttrib, LightId},
        Pipeline,
    };

    pub use crate::util::buf::Buf2;
}
