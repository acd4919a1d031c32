//! Primitive assembly.

use crate::math::{Color3f, Vec3, Vec4, cross, normalize, vec4};

/// A flat-colored quadrilateral.
///
/// A triangle can be expressed as a quad with two coincident vertices.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quad {
    pub verts: [Vec4; 4],
    pub color: Color3f,
}

/// Collects submitted vertices into quads.
///
/// Holds at most three pending vertices between calls to
/// [`push`][Self::push].
#[derive(Copy, Clone, Debug, Default)]
pub struct Assembler {
    verts: [Vec4; 4],
    len: usize,
}

impl Quad {
    /// Returns the unit normal of the plane through the first three
    /// vertices of `self`, ignoring `w`.
    ///
    /// Collinear vertices yield NaN components.
    pub fn normal(&self) -> Vec3 {
        let [v0, v1, v2, _] = self.verts.map(Vec4::xyz);
        normalize(cross(v1 - v0, v2 - v0))
    }

    /// Returns the average of the vertices of `self`, ignoring `w`.
    pub fn center(&self) -> Vec3 {
        let sum = self.verts.iter().fold(Vec3::ZERO, |s, v| s + v.xyz());
        sum / 4.0
    }

    /// Returns the mean squared distance of the vertices of `self` from
    /// the origin, ignoring `w`.
    ///
    /// Every fragment of the quad is depth tested with this value.
    pub fn distance(&self) -> f32 {
        self.verts.iter().map(|v| v.xyz().len_sqr()).sum::<f32>() / 4.0
    }
}

impl Assembler {
    /// Returns a new assembler with no pending vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the vertex `(x, y, z, 1)`.
    ///
    /// Returns the completed quad, colored with `color`, if this was the
    /// fourth vertex. Otherwise returns `None`.
    pub fn push(&mut self, [x, y, z]: [f32; 3], color: Color3f) -> Option<Quad> {
        self.verts[self.len] = vec4(x, y, z, 1.0);
        self.len += 1;
        (self.len == 4).then(|| {
            self.len = 0;
            Quad { verts: self.verts, color }
        })
    }

    /// Returns the number of pending vertices, in `0..4`.
    pub fn pending(&self) -> usize {
        self.len
    }
}
