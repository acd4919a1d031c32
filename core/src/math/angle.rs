//! Angular quantities.

use core::f32::consts::PI;
use core::fmt::{self, Debug, Display};
use core::ops::{Div, Mul, Neg};

use crate::math::approx::ApproxEq;

/// An angle, stored in radians.
///
/// Constructed with [`degs`] or [`rads`] and read back with
/// [`to_degs`][Self::to_degs] or [`to_rads`][Self::to_rads], so the unit
/// is always explicit at the call site.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

const RADS_PER_DEG: f32 = PI / 180.0;

impl Angle {
    pub const ZERO: Self = Self(0.0);
    /// 90°.
    pub const RIGHT: Self = Self(PI / 2.0);
    /// 180°.
    pub const STRAIGHT: Self = Self(PI);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use quadrast_core::{assert_approx_eq, math::angle::degs};
    /// assert_approx_eq!(degs(180.0).to_rads(), core::f32::consts::PI);
    /// ```
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
}

#[cfg(feature = "fp")]
impl Angle {
    /// Returns the sine of `self`.
    pub fn sin(self) -> f32 {
        super::float::sin(self.0)
    }
    /// Returns the cosine of `self`.
    pub fn cos(self) -> f32 {
        super::float::cos(self.0)
    }
    /// Returns the sine and cosine of `self`, in that order.
    pub fn sin_cos(self) -> (f32, f32) {
        (self.sin(), self.cos())
    }
    /// Returns the tangent of `self`.
    pub fn tan(self) -> f32 {
        super::float::tan(self.0)
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({:?}°)", self.to_degs())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.to_degs())
    }
}

impl Neg for Angle {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f32> for Angle {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f32> for Angle {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self(self.0 / rhs)
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn degrees_and_radians() {
        assert_approx_eq!(degs(90.0), Angle::RIGHT);
        assert_approx_eq!(degs(180.0).to_rads(), PI);
        assert_approx_eq!(rads(PI / 4.0).to_degs(), 45.0);
        assert_eq!(-degs(30.0), degs(-30.0));
        assert_approx_eq!(degs(45.0) / 2.0, degs(22.5));
    }

    #[cfg(feature = "fp")]
    #[test]
    fn trigonometry() {
        assert_approx_eq!(degs(30.0).sin(), 0.5);
        assert_approx_eq!(degs(60.0).cos(), 0.5);
        assert_approx_eq!(degs(45.0).tan(), 1.0);
        assert_approx_eq!(Angle::ZERO.cos(), 1.0);
    }

    #[test]
    fn display() {
        use alloc::format;
        assert_eq!(format!("{}", Angle::ZERO), "0°");
    }
}
