//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat], [colors][color] and
//! [angles][angle], as well as a floating-point [compatibility layer][float]
//! for `no_std` use and utilities for approximate equality comparisons.
//!
//! Matrices are stored in column-major order and act on column vectors,
//! so that in the product `a * b` the transform `b` is applied first.

pub use {
    angle::{Angle, degs, rads},
    approx::ApproxEq,
    color::{Color3, Color3f, gray, rgb},
    mat::{Mat4, frustum, look_at, translate},
    vec::{Vec2i, Vec3, Vec4, cross, dot, normalize, vec2i, vec3, vec4},
};
#[cfg(feature = "fp")]
pub use mat::{perspective, rotate};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod vec;
