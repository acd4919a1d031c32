//! Floating-point functions that `core` lacks.
//!
//! Each function dispatches to the implementation selected by the crate
//! features, in order of preference: `std`, `libm`, then `mm` (micromath).
//! [`sqrt`] is available even without any of them, as an approximation
//! accurate to about six significant digits, so that vectors can always
//! be normalized. The trigonometric functions need the `fp` feature.

#[cfg(all(feature = "mm", not(any(feature = "std", feature = "libm"))))]
use micromath::F32Ext;

/// Returns the square root of `x`.
#[inline]
pub fn sqrt(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.sqrt();

    #[cfg(all(feature = "libm", not(feature = "std")))]
    return libm::sqrtf(x);

    #[cfg(all(feature = "mm", not(any(feature = "std", feature = "libm"))))]
    return newton_sqrt(x, F32Ext::sqrt(x));

    #[cfg(not(feature = "fp"))]
    return newton_sqrt(x, 1.0 / fast_recip_sqrt(x));
}

/// Returns the sine of `x` radians.
#[cfg(feature = "fp")]
#[inline]
pub fn sin(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(all(feature = "libm", not(feature = "std")))]
    return libm::sinf(x);

    #[cfg(all(feature = "mm", not(any(feature = "std", feature = "libm"))))]
    return F32Ext::sin(x);
}

/// Returns the cosine of `x` radians.
#[cfg(feature = "fp")]
#[inline]
pub fn cos(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(all(feature = "libm", not(feature = "std")))]
    return libm::cosf(x);

    #[cfg(all(feature = "mm", not(any(feature = "std", feature = "libm"))))]
    return F32Ext::cos(x);
}

/// Returns the tangent of `x` radians.
#[cfg(feature = "fp")]
#[inline]
pub fn tan(x: f32) -> f32 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(all(feature = "libm", not(feature = "std")))]
    return libm::tanf(x);

    #[cfg(all(feature = "mm", not(any(feature = "std", feature = "libm"))))]
    return F32Ext::tan(x);
}

/// Refines the estimate `y` of the square root of `x` with two steps of
/// Newton's method.
#[allow(dead_code)]
#[inline]
fn newton_sqrt(x: f32, y: f32) -> f32 {
    let y = 0.5 * (y + x / y);
    0.5 * (y + x / y)
}

/// Returns a fast approximation of `1 / sqrt(x)`.
///
/// Accurate to about 1e-5 relative error for positive normal `x`.
#[inline]
pub fn fast_recip_sqrt(x: f32) -> f32 {
    // https://en.wikipedia.org/wiki/Fast_inverse_square_root
    const MAGIC: u32 = 0x5f37_5a86;
    let y = f32::from_bits(MAGIC.saturating_sub(x.to_bits() >> 1));
    let y = y * (1.5 - 0.5 * x * y * y);
    y * (1.5 - 0.5 * x * y * y)
}
