//! Approximate equality of floating-point values.

/// The default relative epsilon.
///
/// Looser when floating-point functions come from `micromath`, whose
/// approximations are only accurate to a few decimal places.
pub const EPSILON: f32 = if cfg!(any(feature = "std", feature = "libm")) {
    1e-6
} else {
    5e-3
};

/// Trait for comparing values that may differ by rounding errors.
///
/// Two floats are approximately equal if their absolute difference is at
/// most `rel_eps` times the larger of 1.0 and the magnitude of `self`.
/// Composite values are approximately equal if all their components are.
/// NaN is not approximately equal to anything.
pub trait ApproxEq<Other: ?Sized = Self> {
    /// Returns whether `self` and `other` are equal up to `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: f32) -> bool;

    /// Returns whether `self` and `other` are equal up to [`EPSILON`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, EPSILON)
    }
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        // Not f32::abs, which needs std
        let diff = if self > other { self - other } else { other - self };
        let mag = if *self < 0.0 { -self } else { *self };
        diff <= rel_eps * mag.max(1.0)
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self.len() == other.len()
            && self.iter().zip(other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: f32) -> bool {
        self[..].approx_eq_eps(&other[..], rel_eps)
    }
}

/// Asserts that two values are approximately equal according to their
/// [`ApproxEq`] impl, optionally with a custom relative epsilon.
///
/// # Panics
/// If the values are not approximately equal.
///
/// # Examples
/// ```
/// # use quadrast_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr $(,)?) => {
        $crate::assert_approx_eq!($a, $b, eps = $crate::math::approx::EPSILON)
    };
    ($a:expr, $b:expr, eps = $eps:expr $(,)?) => {{
        let (a, b, eps) = (&$a, &$b, $eps);
        assert!(
            $crate::math::approx::ApproxEq::approx_eq_eps(a, b, eps),
            "assertion `left ≅ right` failed (relative epsilon {eps})\n  \
             left: {a:?}\n right: {b:?}"
        );
    }};
}
