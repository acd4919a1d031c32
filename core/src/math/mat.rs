//! Matrices and linear transforms.
//!
//! [`Mat4`] stores its sixteen elements in column-major order and acts on
//! column vectors. Products compose right to left: in `a * b`, `b` is
//! applied first and `a` second, so a combined projection-view transform
//! is written `proj * view`.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Mul, MulAssign};

use super::approx::ApproxEq;
#[cfg(feature = "fp")]
use super::angle::Angle;
use super::vec::{Vec3, Vec4, cross, dot, normalize, vec4};

/// A 4×4 matrix of `f32`, stored as an array of four columns.
#[derive(Copy, Clone, PartialEq)]
pub struct Mat4(pub [[f32; 4]; 4]);

impl Mat4 {
    /// The identity matrix.
    pub const IDENTITY: Self = Self([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Returns a matrix with the given columns.
    pub const fn from_cols(cols: [Vec4; 4]) -> Self {
        let [a, b, c, d] = cols;
        Self([
            [a.x, a.y, a.z, a.w],
            [b.x, b.y, b.z, b.w],
            [c.x, c.y, c.z, c.w],
            [d.x, d.y, d.z, d.w],
        ])
    }

    /// Returns a matrix with elements taken from `els` in column-major
    /// order, the layout of the classic fixed-function APIs.
    pub const fn from_cols_array(els: [f32; 16]) -> Self {
        let mut m = [[0.0; 4]; 4];
        let mut i = 0;
        while i < 16 {
            m[i / 4][i % 4] = els[i];
            i += 1;
        }
        Self(m)
    }

    /// Returns the elements of `self` in column-major order.
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut els = [0.0; 16];
        for (i, e) in els.iter_mut().enumerate() {
            *e = self.0[i / 4][i % 4];
        }
        els
    }

    /// Returns the column at index `i`.
    #[inline]
    pub fn col(&self, i: usize) -> Vec4 {
        self.0[i].into()
    }

    /// Returns the row at index `i`.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        let c = &self.0;
        vec4(c[0][i], c[1][i], c[2][i], c[3][i])
    }

    /// Returns the transpose of `self`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self::from_cols([0, 1, 2, 3].map(|i| self.row(i)))
    }

    /// Returns the composition of `self` and `other`.
    ///
    /// Element-wise, `R[col][row] = Σₖ self[k][row] * other[col][k]`;
    /// the resulting transform applies `other` first, then `self`.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let mut res = [[0.0; 4]; 4];
        for (col, res_col) in res.iter_mut().enumerate() {
            for (row, r) in res_col.iter_mut().enumerate() {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.0[k][row] * other.0[col][k];
                }
                *r = sum;
            }
        }
        Self(res)
    }

    /// Transforms the column vector `v` by `self`.
    #[inline]
    pub fn apply(&self, v: Vec4) -> Vec4 {
        let m = &self.0;
        vec4(
            v.x * m[0][0] + v.y * m[1][0] + v.z * m[2][0] + v.w * m[3][0],
            v.x * m[0][1] + v.y * m[1][1] + v.z * m[2][1] + v.w * m[3][1],
            v.x * m[0][2] + v.y * m[1][2] + v.z * m[2][2] + v.w * m[3][2],
            v.x * m[0][3] + v.y * m[1][3] + v.z * m[2][3] + v.w * m[3][3],
        )
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(&rhs)
    }
}

impl MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.compose(&rhs);
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        self.apply(rhs)
    }
}

impl Debug for Mat4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for i in 0..4 {
            let r = self.row(i);
            writeln!(f, "    {:6.2?}", [r.x, r.y, r.z, r.w])?;
        }
        write!(f, "]")
    }
}

impl ApproxEq for Mat4 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

//
// Transform constructors
//

/// Returns a view matrix for a camera at `eye` looking at `center`.
///
/// The world up direction is fixed to +y. If `eye - center` is parallel
/// to it, the camera basis collapses and the matrix contains NaNs.
pub fn look_at(eye: Vec3, center: Vec3) -> Mat4 {
    let up = Vec3::Y;

    let z = normalize(eye - center);
    let x = normalize(cross(up, z));
    let y = cross(z, x);

    Mat4([
        [x.x, y.x, z.x, 0.0],
        [x.y, y.y, z.y, 0.0],
        [x.z, y.z, z.z, 0.0],
        [-dot(x, eye), -dot(y, eye), -dot(z, eye), 1.0],
    ])
}

/// Returns an off-center perspective projection matrix.
///
/// The view frustum has its apex at the origin, looks toward −z, and
/// is bounded by the given planes; `near` and `far` are distances.
/// Equal bounds on any axis divide by zero, giving infinite or NaN
/// elements.
pub fn frustum(
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f32,
    far: f32,
) -> Mat4 {
    let (w, h, d) = (right - left, top - bottom, far - near);
    Mat4([
        [2.0 * near / w, 0.0, 0.0, 0.0],
        [0.0, 2.0 * near / h, 0.0, 0.0],
        [(right + left) / w, (top + bottom) / h, -(far + near) / d, -1.0],
        [0.0, 0.0, -2.0 * far * near / d, 0.0],
    ])
}

/// Returns a symmetric perspective projection matrix with vertical field
/// of view `fov_y` and width-to-height ratio `aspect`.
#[cfg(feature = "fp")]
pub fn perspective(fov_y: Angle, aspect: f32, near: f32, far: f32) -> Mat4 {
    let top = near * (fov_y / 2.0).tan();
    let right = top * aspect;
    frustum(-right, right, -top, top, near, far)
}

/// Returns a matrix rotating by `angle` counter-clockwise about `axis`.
///
/// The axis need not be normalized, but a zero axis gives NaNs.
#[cfg(feature = "fp")]
pub fn rotate(angle: Angle, axis: Vec3) -> Mat4 {
    let Vec3 { x, y, z } = normalize(axis);
    let (s, c) = angle.sin_cos();
    let ic = 1.0 - c;
    Mat4([
        [c + x * x * ic, y * x * ic + z * s, z * x * ic - y * s, 0.0],
        [x * y * ic - z * s, c + y * y * ic, z * y * ic + x * s, 0.0],
        [x * z * ic + y * s, y * z * ic - x * s, c + z * z * ic, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix translating by `offset`.
pub fn translate(offset: Vec3) -> Mat4 {
    let mut m = Mat4::IDENTITY;
    m.0[3] = offset.to_vec4(1.0).into();
    m
}

/// Returns a matrix scaling each axis by the matching component of `s`.
pub fn scale(s: Vec3) -> Mat4 {
    Mat4::from_cols([
        vec4(s.x, 0.0, 0.0, 0.0),
        vec4(0.0, s.y, 0.0, 0.0),
        vec4(0.0, 0.0, s.z, 0.0),
        vec4(0.0, 0.0, 0.0, 1.0),
    ])
}
