//! Colors and color channels.
//!
//! Pipeline colors are [`Color3f`] values with unnormalized `f32` channels:
//! lighting may push them above one, and they are only clamped when
//! converted to eight-bit [`Color3`] for output.

use core::fmt::{self, Debug, Formatter};
use core::ops::{Add, AddAssign, Index, Mul};

use super::approx::ApproxEq;

/// An RGB color with `f32` channels.
#[repr(transparent)]
#[derive(Copy, Clone, Default, PartialEq)]
pub struct Color3f(pub [f32; 3]);

/// An RGB color with `u8` channels.
#[repr(transparent)]
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Color3(pub [u8; 3]);

/// Returns a new RGB color with `r`, `g`, and `b` channels.
pub const fn rgb(r: f32, g: f32, b: f32) -> Color3f {
    Color3f([r, g, b])
}

/// Returns a gray color with all channels equal to `lum`.
pub const fn gray(lum: f32) -> Color3f {
    Color3f([lum; 3])
}

impl Color3f {
    pub const BLACK: Self = gray(0.0);
    pub const WHITE: Self = gray(1.0);

    /// Returns the red channel of `self`.
    #[inline]
    pub const fn r(self) -> f32 {
        self.0[0]
    }
    /// Returns the green channel of `self`.
    #[inline]
    pub const fn g(self) -> f32 {
        self.0[1]
    }
    /// Returns the blue channel of `self`.
    #[inline]
    pub const fn b(self) -> f32 {
        self.0[2]
    }

    /// Returns `self` with every channel greater than `max` set to `max`.
    ///
    /// Unlike [`f32::min`], a NaN channel stays NaN.
    #[inline]
    pub fn clamp_max(self, max: f32) -> Self {
        Self(self.0.map(|c| if c > max { max } else { c }))
    }

    /// Returns the perceived brightness of `self`, using the Rec. 601
    /// luma coefficients.
    #[inline]
    pub fn luma(self) -> f32 {
        let [r, g, b] = self.0;
        0.299 * r + 0.587 * g + 0.114 * b
    }

    /// Returns a `Color3` with the channels of `self` mapped to `u8`
    /// with `(c.clamp(0.0, 1.0) * 255.0) as u8`.
    #[inline]
    pub fn to_color3(self) -> Color3 {
        Color3(self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8))
    }
}

impl Color3 {
    /// Returns a `u32` containing the channel bytes of `self`
    /// in format `0x00_RR_GG_BB`.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        let [r, g, b] = self.0;
        u32::from_be_bytes([0x00, r, g, b])
    }
}

impl Debug for Color3f {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "rgb{:?}", self.0)
    }
}
impl Debug for Color3 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb(#{r:02X}{g:02X}{b:02X})")
    }
}

impl From<[f32; 3]> for Color3f {
    fn from(chs: [f32; 3]) -> Self {
        Self(chs)
    }
}
impl From<Color3f> for [f32; 3] {
    fn from(c: Color3f) -> Self {
        c.0
    }
}

impl Index<usize> for Color3f {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        &self.0[i]
    }
}

impl Add for Color3f {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        let [r, g, b] = rhs.0;
        Self([self.r() + r, self.g() + g, self.b() + b])
    }
}
impl AddAssign for Color3f {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Channel-wise product, used to modulate a surface color by a light color.
impl Mul for Color3f {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let [r, g, b] = rhs.0;
        Self([self.r() * r, self.g() * g, self.b() * b])
    }
}
impl Mul<f32> for Color3f {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self(self.0.map(|c| c * rhs))
    }
}

impl ApproxEq for Color3f {
    fn approx_eq_eps(&self, other: &Self, eps: f32) -> bool {
        self.0.approx_eq_eps(&other.0, eps)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn channels() {
        let c = rgb(0.1, 0.2, 0.3);
        assert_eq!([c.r(), c.g(), c.b()], [0.1, 0.2, 0.3]);
        assert_eq!(c[1], 0.2);
    }

    #[test]
    fn modulate_and_accumulate() {
        let c = rgb(1.0, 0.5, 0.0) * rgb(0.5, 0.5, 1.0);
        assert_eq!(c, rgb(0.5, 0.25, 0.0));

        let mut acc = Color3f::BLACK;
        acc += c * 2.0;
        acc += c;
        assert_eq!(acc, rgb(1.5, 0.75, 0.0));
    }

    #[test]
    fn clamp_max_keeps_nan_and_small_values() {
        let c = rgb(1.5, 0.25, f32::NAN).clamp_max(1.0);
        assert_eq!(c.r(), 1.0);
        assert_eq!(c.g(), 0.25);
        assert!(c.b().is_nan());
    }

    #[test]
    fn to_color3_clamps() {
        assert_eq!(rgb(2.0, 0.5, -1.0).to_color3(), Color3([255, 127, 0]));
        assert_eq!(Color3([0x12, 0x34, 0x56]).to_rgb_u32(), 0x00_12_34_56);
    }

    #[test]
    fn luma_of_white_is_one() {
        assert!((Color3f::WHITE.luma() - 1.0).abs() < 1e-6);
        assert_eq!(Color3f::BLACK.luma(), 0.0);
    }

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", Color3([255, 0, 16])), "rgb(#FF0010)");
        assert_eq!(format!("{:?}", rgb(1.0, 0.0, 0.5)), "rgb[1.0, 0.0, 0.5]");
    }
}
