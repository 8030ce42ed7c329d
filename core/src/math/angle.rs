//! Angular quantities.

use core::f32::consts::{PI, TAU};
use core::fmt::{self, Debug, Display};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use crate::math::{Lerp, approx::ApproxEq, float};

/// A scalar angular quantity.
///
/// Prevents confusion between degrees and radians by requiring the use of
/// one of the named constructors to create an `Angle`, as well as one of
/// the named getter methods to obtain the angle as a raw `f32` value.
#[derive(Copy, Clone, Default, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Angle(f32);

const RADS_PER_DEG: f32 = PI / 180.0;
const RADS_PER_TURN: f32 = TAU;

/// Returns an angle of `a` radians.
pub const fn rads(a: f32) -> Angle {
    Angle(a)
}

/// Returns an angle of `a` degrees.
pub const fn degs(a: f32) -> Angle {
    Angle(a * RADS_PER_DEG)
}

/// Returns an angle of `a` turns.
pub const fn turns(a: f32) -> Angle {
    Angle(a * RADS_PER_TURN)
}

impl Angle {
    /// A zero angle.
    pub const ZERO: Self = Self(0.0);
    /// A 90° angle.
    pub const RIGHT: Self = Self(PI / 2.0);
    /// A full turn, 360°.
    pub const FULL: Self = Self(TAU);

    /// Returns the value of `self` in radians.
    /// # Examples
    /// ```
    /// # use rastlab_core::math::degs;
    /// assert_eq!(degs(90.0).to_rads(), core::f32::consts::FRAC_PI_2);
    /// ```
    pub const fn to_rads(self) -> f32 {
        self.0
    }
    /// Returns the value of `self` in degrees.
    pub fn to_degs(self) -> f32 {
        self.0 / RADS_PER_DEG
    }
    /// Returns the value of `self` in turns.
    pub fn to_turns(self) -> f32 {
        self.0 / RADS_PER_TURN
    }

    pub fn sin(self) -> f32 {
        float::f32::sin(self.0)
    }
    pub fn cos(self) -> f32 {
        float::f32::cos(self.0)
    }
    pub fn tan(self) -> f32 {
        float::f32::tan(self.0)
    }
    /// Returns the sine and cosine of `self`.
    pub fn sin_cos(self) -> (f32, f32) {
        (self.sin(), self.cos())
    }

    /// Returns `self` wrapped to the range [0, 360°).
    pub fn wrap(self) -> Self {
        let r = self.0 % TAU;
        Self(if r < 0.0 { r + TAU } else { r })
    }
}

impl Debug for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Angle({}°)", self.to_degs())
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.to_degs(), f)?;
        f.write_str("°")
    }
}

impl Add for Angle {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}
impl Sub for Angle {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
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

impl Lerp for Angle {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Self(Lerp::lerp(&self.0, &other.0, t))
    }
}

impl ApproxEq for Angle {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use core::f32::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn unit_conversions() {
        assert_approx_eq!(degs(180.0).to_rads(), PI);
        assert_approx_eq!(turns(0.25).to_degs(), 90.0);
        assert_approx_eq!(rads(FRAC_PI_2).to_turns(), 0.25);
        assert_approx_eq!(degs(45.0), turns(0.125));
    }

    #[test]
    fn trig() {
        assert_approx_eq!(degs(30.0).sin(), 0.5);
        assert_approx_eq!(degs(60.0).cos(), 0.5);
        assert_approx_eq!(degs(45.0).tan(), 1.0);
    }

    #[test]
    fn wrapping() {
        assert_approx_eq!(degs(370.0).wrap(), degs(10.0), eps = 1e-5);
        assert_approx_eq!(degs(-90.0).wrap(), degs(270.0), eps = 1e-5);
    }

    #[test]
    fn arithmetic() {
        let mut a = degs(30.0) + degs(15.0) - degs(5.0);
        a += degs(10.0);
        assert_approx_eq!(a, degs(50.0), eps = 1e-5);
        assert_approx_eq!(-a * 2.0 / 4.0, degs(-25.0), eps = 1e-5);
    }

    #[test]
    fn display() {
        use alloc::format;
        assert_eq!(format!("{:.1}", degs(90.0)), "90.0°");
        assert_eq!(format!("{:?}", rads(0.0)), "Angle(0°)");
    }
}
