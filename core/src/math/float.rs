//! Floating-point compatibility API.
//!
//! Most floating-point functions are unavailable in `no_std`. This module
//! exposes them under a common name, `f32`, backed by either the standard
//! library, the `libm` crate, or the `micromath` crate, depending on which
//! feature is enabled. Call sites use paths like `float::f32::sqrt(x)`.

#[cfg(feature = "libm")]
pub mod libm {
    pub use libm::ceilf as ceil;
    pub use libm::floorf as floor;
    pub use libm::roundf as round;

    pub use libm::powf;
    pub use libm::sqrtf as sqrt;

    pub use libm::cosf as cos;
    pub use libm::sinf as sin;
    pub use libm::tanf as tan;
}

#[cfg(feature = "mm")]
pub mod mm {
    use micromath::F32Ext as mm;

    #[inline]
    pub fn floor(x: f32) -> f32 {
        mm::floor(x)
    }
    #[inline]
    pub fn ceil(x: f32) -> f32 {
        mm::ceil(x)
    }
    /// Rounds half-way cases away from zero, like `f32::round` in `std`.
    #[inline]
    pub fn round(x: f32) -> f32 {
        mm::round(x)
    }
    /// Returns the approximate square root of `x`.
    #[inline]
    pub fn sqrt(x: f32) -> f32 {
        let y = mm::sqrt(x);
        if y == 0.0 {
            return y;
        }
        // Two rounds of Newton's method
        let y = 0.5 * (y + (x / y));
        0.5 * (y + (x / y))
    }
    #[inline]
    pub fn powf(x: f32, y: f32) -> f32 {
        mm::powf(x, y)
    }
    #[inline]
    pub fn sin(x: f32) -> f32 {
        mm::sin(x)
    }
    #[inline]
    pub fn cos(x: f32) -> f32 {
        mm::cos(x)
    }
    #[inline]
    pub fn tan(x: f32) -> f32 {
        mm::tan(x)
    }
}

#[cfg(feature = "std")]
#[allow(non_camel_case_types)]
pub type f32 = core::primitive::f32;

#[cfg(all(feature = "libm", not(feature = "std")))]
pub use libm as f32;

#[cfg(all(feature = "mm", not(feature = "std"), not(feature = "libm")))]
pub use mm as f32;

#[cfg(test)]
#[allow(unused_imports)]
mod tests {
    use core::f32::consts::*;

    use super::*;
    use crate::assert_approx_eq;

    #[cfg(feature = "libm")]
    #[test]
    fn libm_functions() {
        assert_eq!(libm::floor(-1.1), -2.0);
        assert_eq!(libm::ceil(1.1), 2.0);
        assert_eq!(libm::round(2.5), 3.0);
        assert_eq!(libm::round(-2.5), -3.0);
        assert_eq!(libm::sqrt(16.0), 4.0);
        assert_eq!(libm::powf(2.0, 5.0), 32.0);
        assert_approx_eq!(libm::sin(FRAC_PI_6), 0.5);
        assert_approx_eq!(libm::tan(FRAC_PI_4), 1.0);
    }

    #[cfg(feature = "mm")]
    #[test]
    fn mm_functions() {
        assert_eq!(mm::floor(-1.1), -2.0);
        assert_eq!(mm::ceil(1.1), 2.0);
        assert_approx_eq!(mm::sqrt(9.0), 3.0);
        assert_eq!(mm::sqrt(0.0), 0.0);
        assert_approx_eq!(mm::powf(3.0, 2.0), 9.0, eps = 1e-2);
        assert_approx_eq!(mm::sin(FRAC_PI_6), 0.5, eps = 1e-2);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_functions() {
        assert_eq!(f32::floor(-0.5), -1.0);
        assert_eq!(f32::ceil(-0.5), -0.0);
        assert_eq!(f32::round(-0.5), -1.0);
        assert_eq!(f32::sqrt(9.0), 3.0);
        assert_eq!(f32::cos(PI), -1.0);
    }
}
