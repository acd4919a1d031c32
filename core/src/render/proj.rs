//! Projection from homogeneous clip coordinates to pixel coordinates.

use crate::math::{Vec2i, Vec3, Vec4, vec2i, vec3};

/// Divides the `x`, `y`, and `z` components of `v` by `w`, yielding
/// normalized device coordinates.
///
/// No clipping is done; a `w` of zero yields infinite or NaN components.
#[inline]
pub fn perspective_divide(v: Vec4) -> Vec3 {
    vec3(v.x / v.w, v.y / v.w, v.z / v.w)
}

/// Maps normalized device coordinates to the pixel grid of a `w` × `h`
/// viewport.
///
/// NDC x from -1 to 1 maps to columns 0 to `w`, and y from -1 to 1 maps to
/// rows `h` to 0, so that +y points up. The results are truncated toward
/// zero. Out-of-range values saturate and NaN maps to zero.
#[inline]
pub fn viewport_transform(ndc: Vec3, (w, h): (usize, usize)) -> Vec2i {
    let sx = (ndc.x + 1.0) * 0.5 * w as f32;
    let sy = (1.0 - (ndc.y + 1.0) * 0.5) * h as f32;
    vec2i(sx as i32, sy as i32)
}
