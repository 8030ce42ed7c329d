//! Linear algebra and other useful mathematics.
//!
//! Includes [vectors][self::vec], [matrices][mat], [colors][color], and
//! [angles][angle], as well as the [`Lerp`] trait for values that can be
//! interpolated across a primitive and utilities such as approximate
//! equality comparisons.
//!
//! Vectors are tagged with a type that represents the *space* they live in,
//! and values in different spaces cannot be mixed without an explicit
//! transformation. Matrices are tagged by both source and destination space
//! and can only be applied to matching vectors. This turns many errors that
//! would otherwise show up as garbled pixels into compile errors.

pub use {
    angle::{Angle, degs, rads, turns},
    approx::ApproxEq,
    color::{Color3, Color3f, Color4, gray, rgb, rgba},
    mat::{
        Mat4, frustum, look_at, orthographic, perspective, rotate, scale,
        translate, viewport,
    },
    vec::{Vec2, Vec2i, Vec3, Vec4, Vector, splat, vec2, vec3, vec4},
};

pub mod angle;
pub mod approx;
pub mod color;
pub mod float;
pub mod mat;
pub mod vec;

/// Trait for linear interpolation between two values.
///
/// Every per-vertex value that the rasterizer interpolates across a
/// triangle (a *varying*) implements this trait.
pub trait Lerp: Sized {
    /// Linearly interpolates between `self` and `other`.
    ///
    /// If `t` = 0, returns `self`; if `t` = 1, returns `other`.
    /// For 0 < `t` < 1, returns the weighted average
    /// ```text
    /// (1 - t) * self + t * other
    /// ```
    /// The endpoints are reproduced exactly. Values of `t` outside the unit
    /// interval extrapolate.
    ///
    /// # Examples
    /// ```
    /// use rastlab_core::math::Lerp;
    ///
    /// assert_eq!(f32::lerp(&1.0, &5.0, 0.25), 2.0);
    /// ```
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Returns the (unweighted) average of `self` and `other`.
    fn midpoint(&self, other: &Self) -> Self {
        self.lerp(other, 0.5)
    }
}

/// Linearly interpolates between two values.
///
/// For more information, see [`Lerp::lerp`].
#[inline]
pub fn lerp<T: Lerp>(t: f32, from: T, to: T) -> T {
    from.lerp(&to, t)
}

/// Returns the relative position of `t` between `min` and `max`.
///
/// That is, returns 0 when `t` = `min`, 1 when `t` = `max`, and linearly
/// interpolates in between. If `min` = `max`, returns 0 rather than
/// dividing by zero; the rasterizer relies on this for horizontal edges.
///
/// # Examples
/// ```
/// use rastlab_core::math::inv_lerp;
///
/// assert_eq!(inv_lerp(2.0, 1.0, 5.0), 0.25);
/// assert_eq!(inv_lerp(3.0, 3.0, 3.0), 0.0);
/// ```
#[inline]
pub fn inv_lerp(t: f32, min: f32, max: f32) -> f32 {
    let d = max - min;
    if d == 0.0 { 0.0 } else { (t - min) / d }
}

impl Lerp for f32 {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        (1.0 - t) * self + t * other
    }
}

impl Lerp for () {
    fn lerp(&self, _: &Self, _: f32) {}
}

impl<U: Lerp, V: Lerp> Lerp for (U, V) {
    fn lerp(&self, (u, v): &Self, t: f32) -> Self {
        (self.0.lerp(u, t), self.1.lerp(v, t))
    }
}

impl<U: Lerp, V: Lerp, W: Lerp> Lerp for (U, V, W) {
    fn lerp(&self, (u, v, w): &Self, t: f32) -> Self {
        (self.0.lerp(u, t), self.1.lerp(v, t), self.2.lerp(w, t))
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn f32_lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(0.0, 0.1, 7.3), 0.1);
        assert_eq!(lerp(1.0, 0.1, 7.3), 7.3);
        assert_approx_eq!(lerp(0.5, -2.0, 4.0), 1.0);
    }

    #[test]
    fn tuple_lerp_is_componentwise() {
        let (a, b) = lerp(0.25, (0.0, 4.0), (4.0, 0.0));
        assert_eq!(a, 1.0);
        assert_eq!(b, 3.0);
    }

    #[test]
    fn inv_lerp_degenerate_range() {
        assert_eq!(inv_lerp(0.5, 0.0, 2.0), 0.25);
        assert_eq!(inv_lerp(1.0, 1.0, 1.0), 0.0);
    }
}
