//! Approximate equality of floating-point values.

use core::iter::zip;

/// Trait for testing approximate equality.
///
/// Rounding errors accumulate in every transform, divide, and interpolation
/// step, so two floats that "should" be equal rarely are. Two values compare
/// approximately equal if their difference is at most an epsilon scaled by
/// the magnitude of the values (but never less than the plain epsilon).
pub trait ApproxEq<Other: ?Sized = Self, Epsilon = f32> {
    /// Returns whether `self` and `other` are approximately equal,
    /// using the epsilon returned by [`Self::relative_epsilon`].
    fn approx_eq(&self, other: &Other) -> bool {
        self.approx_eq_eps(other, &Self::relative_epsilon())
    }

    /// Returns whether `self` and `other` are approximately equal,
    /// using the relative epsilon `rel_eps`.
    fn approx_eq_eps(&self, other: &Other, rel_eps: &Epsilon) -> bool;

    /// Returns the default relative epsilon.
    fn relative_epsilon() -> Epsilon;
}

impl ApproxEq for f32 {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        (self - other).abs() <= *rel_eps * self.abs().max(1.0)
    }

    fn relative_epsilon() -> f32 {
        // micromath is only accurate to a couple of decimals
        if cfg!(any(feature = "std", feature = "libm")) {
            1e-6
        } else {
            5e-3
        }
    }
}

impl<T: ApproxEq> ApproxEq for [T] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.len() == other.len()
            && zip(self, other).all(|(s, o)| s.approx_eq_eps(o, rel_eps))
    }
    fn relative_epsilon() -> f32 {
        T::relative_epsilon()
    }
}

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.as_slice().approx_eq_eps(other, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        T::relative_epsilon()
    }
}

impl<T: ApproxEq> ApproxEq for Option<T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        match (self, other) {
            (Some(s), Some(o)) => s.approx_eq_eps(o, rel_eps),
            (None, None) => true,
            _ => false,
        }
    }
    fn relative_epsilon() -> f32 {
        T::relative_epsilon()
    }
}

/// Asserts that two values are approximately equal.
///
/// Requires that the left operand has an applicable [`ApproxEq`] impl
/// and that both operands impl `Debug` unless a custom message is given.
///
/// # Panics
/// If the given values are not approximately equal.
///
/// # Examples
/// ```
/// # use rastlab_core::assert_approx_eq;
/// assert_ne!(0.1 + 0.2, 0.3);
/// assert_approx_eq!(0.1 + 0.2, 0.3);
///
/// // Custom epsilon
/// assert_approx_eq!(100.0, 101.0, eps = 0.01);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, eps = $eps:literal) => {
        match (&$a, &$b) {
            (a, b) => $crate::assert_approx_eq!(
                *a, *b, eps = $eps,
                "assertion failed: `{a:?} ≅ {b:?}`"
            )
        }
    };
    ($a:expr, $b:expr, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(ApproxEq::approx_eq(a, b), $fmt $(, $args)*)
        }
    }};
    ($a:expr, $b:expr, eps = $eps:literal, $fmt:literal $(, $args:expr)*) => {{
        use $crate::math::approx::ApproxEq;
        match (&$a, &$b) {
            (a, b) => assert!(
                ApproxEq::approx_eq_eps(a, b, &$eps),
                $fmt $(, $args)*
            )
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn signed_zeros_are_equal() {
        assert_approx_eq!(0.0, -0.0);
        assert_approx_eq!(-0.0, 0.0);
    }

    #[test]
    fn epsilon_is_relative_to_magnitude() {
        assert_approx_eq!(1.0, 1.0000001);
        assert_approx_eq!(-1.0e10, -1.0000001e10);
        assert_approx_eq!(0.0, 0.0000001);
    }

    #[test]
    fn custom_epsilon() {
        assert_approx_eq!(1.0, 0.995, eps = 0.01);
        assert_approx_eq!(255.0, 254.0, eps = 0.01);
    }

    #[test]
    #[should_panic]
    fn one_is_not_approx_two() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    fn arrays_and_options() {
        assert_approx_eq!([0.1 + 0.2, 1.0], [0.3, 1.0]);
        assert_approx_eq!(Some(0.1 + 0.2), Some(0.3));
        assert!(!crate::math::ApproxEq::approx_eq(&None::<f32>, &Some(1.0)));
    }

    #[test]
    #[should_panic]
    fn arrays_of_different_values() {
        assert_approx_eq!([1.0, 2.0], [1.0, 2.1]);
    }
}
