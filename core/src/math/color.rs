//! Colors and color spaces.

use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Index, Mul};

use crate::math::{Lerp, approx::ApproxEq, vec::Vector};

//
// Types
//

/// A generic color type, similar to [`Vector`].
///
/// `Repr` is typically an array of scalars, `Space` a marker type
/// for the color space.
#[repr(transparent)]
pub struct Color<Repr, Space>(pub Repr, PhantomData<Space>);

/// The RGB color space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgb;

/// The RGB color space with an alpha channel.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Rgba;

/// An RGB color with `u8` components.
pub type Color3 = Color<[u8; 3], Rgb>;
/// An RGBA color with `u8` components.
pub type Color4 = Color<[u8; 4], Rgba>;
/// An RGB color with `f32` components.
///
/// Channels are nominally in the range [0, 1], but lighting computations
/// may overshoot in either direction. Values are clamped only when they are
/// converted to bytes.
pub type Color3f = Color<[f32; 3], Rgb>;

//
// Free fns
//

/// Returns a new RGB color with `r`, `g`, and `b` components.
pub const fn rgb<Sc>(r: Sc, g: Sc, b: Sc) -> Color<[Sc; 3], Rgb> {
    Color::new([r, g, b])
}

/// Returns a new RGBA color with `r`, `g`, `b`, and `a` components.
pub const fn rgba<Sc>(r: Sc, g: Sc, b: Sc, a: Sc) -> Color<[Sc; 4], Rgba> {
    Color::new([r, g, b, a])
}

/// Returns a gray RGB color with all channels equal to `lum`.
pub const fn gray(lum: f32) -> Color3f {
    rgb(lum, lum, lum)
}

/// Converts a float channel to a byte, clamping to [0, 1] first.
///
/// Values above 1 become 255, values below 0 (and NaN) become 0.
#[inline]
pub fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0) as u8
}

//
// Inherent impls
//

impl<R, Sp> Color<R, Sp> {
    /// Returns a new color with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, PhantomData)
    }
}

impl<Sc: Copy> Color<[Sc; 3], Rgb> {
    #[inline]
    pub const fn r(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub const fn g(&self) -> Sc {
        self.0[1]
    }
    #[inline]
    pub const fn b(&self) -> Sc {
        self.0[2]
    }
}

impl<Sc: Copy> Color<[Sc; 4], Rgba> {
    #[inline]
    pub const fn r(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub const fn g(&self) -> Sc {
        self.0[1]
    }
    #[inline]
    pub const fn b(&self) -> Sc {
        self.0[2]
    }
    #[inline]
    pub const fn a(&self) -> Sc {
        self.0[3]
    }
}

impl Color3f {
    /// Returns `self` with each channel clamped to [0, 1].
    pub fn clamp(self) -> Self {
        Self::new(self.0.map(|c| c.clamp(0.0, 1.0)))
    }

    /// Converts `self` to bytes, clamping each channel to [0, 1] first.
    ///
    /// # Examples
    /// ```
    /// # use rastlab_core::math::color::rgb;
    /// assert_eq!(rgb(1.5, 0.5, -0.2).to_color3(), rgb(255, 127, 0));
    /// ```
    pub fn to_color3(self) -> Color3 {
        Color::new(self.0.map(channel_to_u8))
    }

    /// Converts `self` to an opaque RGBA byte color.
    pub fn to_color4(self) -> Color4 {
        let [r, g, b] = self.to_color3().0;
        rgba(r, g, b, 0xFF)
    }

    /// Returns the componentwise product of `self` and `other`.
    pub fn mul_color(self, other: Self) -> Self {
        let [r, g, b] = self.0;
        let [s, h, c] = other.0;
        rgb(r * s, g * h, b * c)
    }
}

impl Color3 {
    /// Converts `self` to floats in the range [0, 1].
    pub fn to_color3f(self) -> Color3f {
        Color::new(self.0.map(|c| c as f32 / 255.0))
    }
}

impl Color4 {
    /// Returns `self` packed as `0x00_RR_GG_BB`.
    ///
    /// This is the pixel format expected by `minifb`.
    pub fn to_xrgb_u32(self) -> u32 {
        let [r, g, b, _] = self.0;
        u32::from_be_bytes([0, r, g, b])
    }

    /// Drops the alpha channel.
    pub fn to_rgb(self) -> Color3 {
        let [r, g, b, _] = self.0;
        rgb(r, g, b)
    }
}

//
// Trait impls
//

impl<R: Copy, Sp> Copy for Color<R, Sp> {}

impl<R: Clone, Sp> Clone for Color<R, Sp> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<R: PartialEq, Sp> PartialEq for Color<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Eq, Sp> Eq for Color<R, Sp> {}

impl<R: Default, Sp> Default for Color<R, Sp> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Debug, Sp: Debug + Default> Debug for Color<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", Sp::default())?;
        Debug::fmt(&self.0, f)
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Color<[Sc; N], Sp> {
    type Output = Sc;
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<B> From<Vector<[f32; 3], B>> for Color3f {
    /// Reinterprets the components of a 3-vector as RGB channels.
    fn from(v: Vector<[f32; 3], B>) -> Self {
        Self::new(v.0)
    }
}

impl Add for Color3f {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        let [r, g, b] = self.0;
        let [s, h, c] = rhs.0;
        rgb(r + s, g + h, b + c)
    }
}

impl AddAssign for Color3f {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Mul<f32> for Color3f {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.0.map(|c| c * rhs))
    }
}

impl Mul for Color3f {
    type Output = Self;
    /// Multiplies `self` and `rhs` componentwise.
    fn mul(self, rhs: Self) -> Self {
        self.mul_color(rhs)
    }
}

impl Div<f32> for Color3f {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.0.map(|c| c / rhs))
    }
}

impl Lerp for Color3f {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let [r, g, b] = self.0;
        let [s, h, c] = other.0;
        rgb(
            Lerp::lerp(&r, &s, t),
            Lerp::lerp(&g, &h, t),
            Lerp::lerp(&b, &c, t),
        )
    }
}

impl ApproxEq for Color3f {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
