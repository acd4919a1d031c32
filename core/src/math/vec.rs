//! Real and integer vectors.
//!
//! [`Vec3`] is used for directions and positions in 3D space, [`Vec4`] for
//! homogeneous coordinates that matrices act on, and [`Vec2i`] for integer
//! pixel coordinates in screen space.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Div, Index, Mul, Neg, Sub, SubAssign};

use super::approx::ApproxEq;

//
// Types
//

/// A vector in ℝ³.
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// A vector in ℝ⁴, usually a point or direction in homogeneous coordinates.
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// An integer vector in ℤ², used as a pixel coordinate.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

/// Returns a new 3D vector with components `x`, `y`, and `z`.
pub const fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3 { x, y, z }
}

/// Returns a new 4D vector with components `x`, `y`, `z`, and `w`.
pub const fn vec4(x: f32, y: f32, z: f32, w: f32) -> Vec4 {
    Vec4 { x, y, z, w }
}

/// Returns a new integer 2D vector with components `x` and `y`.
pub const fn vec2i(x: i32, y: i32) -> Vec2i {
    Vec2i { x, y }
}

//
// Free functions
//

/// Returns `v` divided by its length.
///
/// The zero vector has no direction; normalizing it yields NaN components
/// rather than panicking, and the NaNs propagate into whatever uses them.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    v / v.len()
}

/// Returns the cross product of `a` and `b`.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    vec3(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Returns the dot product of `a` and `b`.
#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

//
// Inherent impls
//

impl Vec3 {
    pub const ZERO: Self = vec3(0.0, 0.0, 0.0);
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(self) -> f32 {
        super::float::sqrt(self.len_sqr())
    }
    /// Returns the squared length of `self`. Cheaper than [`len`][Self::len].
    #[inline]
    pub fn len_sqr(self) -> f32 {
        dot(self, self)
    }
    /// Returns `self` divided by its length. See [`normalize`].
    #[must_use]
    #[inline]
    pub fn normalize(self) -> Self {
        normalize(self)
    }
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        dot(self, other)
    }
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        cross(self, other)
    }
    /// Returns `self` component-wise mapped with `f`.
    #[inline]
    pub fn map(self, mut f: impl FnMut(f32) -> f32) -> Self {
        vec3(f(self.x), f(self.y), f(self.z))
    }
    /// Returns the result of `f` applied component-wise to `self` and `rhs`.
    #[inline]
    pub fn zip_map(self, rhs: Self, f: impl Fn(f32, f32) -> f32) -> Self {
        vec3(f(self.x, rhs.x), f(self.y, rhs.y), f(self.z, rhs.z))
    }
    /// Returns `self` as a homogeneous vector with the given `w`.
    #[inline]
    pub const fn to_vec4(self, w: f32) -> Vec4 {
        vec4(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// Returns the `x`, `y`, and `z` components of `self`, ignoring `w`.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        vec3(self.x, self.y, self.z)
    }
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

//
// Foreign trait impls
//

impl Debug for Vec3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec3{:?}", [self.x, self.y, self.z])
    }
}
impl Debug for Vec4 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec4{:?}", [self.x, self.y, self.z, self.w])
    }
}
impl Debug for Vec2i {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Vec2i[{}, {}]", self.x, self.y)
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        vec3(x, y, z)
    }
}
impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(Vec3 { x, y, z }: Vec3) -> Self {
        [x, y, z]
    }
}
impl From<[f32; 4]> for Vec4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        vec4(x, y, z, w)
    }
}
impl From<Vec4> for [f32; 4] {
    #[inline]
    fn from(Vec4 { x, y, z, w }: Vec4) -> Self {
        [x, y, z, w]
    }
}
impl From<(i32, i32)> for Vec2i {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        vec2i(x, y)
    }
}

impl Index<usize> for Vec3 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        [&self.x, &self.y, &self.z][i]
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;

    #[inline]
    fn index(&self, i: usize) -> &f32 {
        [&self.x, &self.y, &self.z, &self.w][i]
    }
}

impl Add for Vec3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, Add::add)
    }
}
impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Sub for Vec3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, Sub::sub)
    }
}
impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl Neg for Vec3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(Neg::neg)
    }
}
impl Mul<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|c| c * rhs)
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}
impl Div<f32> for Vec3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|c| c / rhs)
    }
}

impl Add for Vec2i {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        vec2i(self.x + rhs.x, self.y + rhs.y)
    }
}
impl Sub for Vec2i {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        vec2i(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ApproxEq for Vec3 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        <[f32; 3]>::from(*self).approx_eq_eps(&(*other).into(), eps)
    }
}
impl ApproxEq for Vec4 {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        <[f32; 4]>::from(*self).approx_eq_eps(&(*other).into(), eps)
    }
}
