//! Real vectors tagged with the space they live in.

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::iter::zip;
use core::marker::PhantomData;
use core::ops::{
    Add, AddAssign, Div, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::math::{Lerp, approx::ApproxEq, float};

//
// Types
//

/// Tag type for a real vector space of dimension `DIM` with basis `Basis`.
///
/// The basis is a marker such as [`Model`][crate::render::Model] or
/// [`World`][crate::render::World] that keeps vectors of different
/// coordinate systems apart.
pub struct Real<const DIM: usize, Basis = ()>(PhantomData<Basis>);

/// A generic vector type, with representation `Repr` and space `Space`.
///
/// The representation is usually an array `[Scalar; N]`.
#[repr(transparent)]
pub struct Vector<Repr, Space = ()>(pub Repr, PhantomData<Space>);

/// A 2-vector with `f32` components.
pub type Vec2<Basis = ()> = Vector<[f32; 2], Real<2, Basis>>;
/// A 3-vector with `f32` components.
pub type Vec3<Basis = ()> = Vector<[f32; 3], Real<3, Basis>>;
/// A 4-vector with `f32` components.
pub type Vec4<Basis = ()> = Vector<[f32; 4], Real<4, Basis>>;

/// A 2-vector with `i32` components, used for pixel coordinates.
pub type Vec2i<Basis = ()> = Vector<[i32; 2], Real<2, Basis>>;

//
// Free fns
//

/// Returns a 2-vector with components `x` and `y`.
pub const fn vec2<Sc, B>(x: Sc, y: Sc) -> Vector<[Sc; 2], Real<2, B>> {
    Vector::new([x, y])
}

/// Returns a 3-vector with components `x`, `y`, and `z`.
pub const fn vec3<Sc, B>(x: Sc, y: Sc, z: Sc) -> Vector<[Sc; 3], Real<3, B>> {
    Vector::new([x, y, z])
}

/// Returns a 4-vector with components `x`, `y`, `z`, and `w`.
pub const fn vec4<Sc, B>(
    x: Sc,
    y: Sc,
    z: Sc,
    w: Sc,
) -> Vector<[Sc; 4], Real<4, B>> {
    Vector::new([x, y, z, w])
}

/// Returns a vector with all components equal to `s`.
pub fn splat<Sp, const N: usize>(s: f32) -> Vector<[f32; N], Sp> {
    Vector::new([s; N])
}

//
// Inherent impls
//

impl<R, Sp> Vector<R, Sp> {
    /// Returns a new vector with representation `repr`.
    #[inline]
    pub const fn new(repr: R) -> Self {
        Self(repr, PhantomData)
    }

    /// Returns `self` reinterpreted as a vector in space `S`.
    ///
    /// This is a type-level cast only; no transformation is performed.
    #[inline]
    pub fn to<S>(self) -> Vector<R, S> {
        Vector::new(self.0)
    }
}

impl<Sp, const N: usize> Vector<[f32; N], Sp> {
    /// Returns the dot product of `self` and `other`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        zip(&self.0, &other.0).map(|(a, b)| a * b).sum()
    }

    /// Returns the squared Euclidean length of `self`.
    #[inline]
    pub fn len_sqr(&self) -> f32 {
        self.dot(self)
    }

    /// Returns the Euclidean length of `self`.
    #[inline]
    pub fn len(&self) -> f32 {
        float::f32::sqrt(self.len_sqr())
    }

    /// Returns `self` scaled to unit length.
    ///
    /// A zero vector is returned unchanged.
    ///
    /// # Examples
    /// ```
    /// # use rastlab_core::math::{vec3, Vec3};
    /// let v: Vec3 = vec3(3.0, 0.0, 4.0);
    /// assert_eq!(v.normalize(), vec3(0.6, 0.0, 0.8));
    ///
    /// let zero: Vec3 = vec3(0.0, 0.0, 0.0);
    /// assert_eq!(zero.normalize(), zero);
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        let len = self.len();
        if len == 0.0 { *self } else { *self / len }
    }

    /// Reflects `self` about the plane perpendicular to `normal`.
    ///
    /// `normal` must be of unit length.
    /// ```text
    /// r = v - 2 (n · v) n
    /// ```
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * (2.0 * self.dot(&normal))
    }

    /// Returns a vector with `f` applied to each component of `self`.
    #[inline]
    pub fn map(self, f: impl FnMut(f32) -> f32) -> Self {
        Self::new(self.0.map(f))
    }

    /// Returns a vector with `f` applied to each pair of components
    /// of `self` and `other`.
    #[inline]
    pub fn zip_map(self, other: Self, mut f: impl FnMut(f32, f32) -> f32) -> Self {
        Self::new(array::from_fn(|i| f(self.0[i], other.0[i])))
    }
}

impl<Sc: Copy, B> Vector<[Sc; 2], Real<2, B>> {
    #[inline]
    pub const fn x(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> Sc {
        self.0[1]
    }
}

impl<Sc: Copy, B> Vector<[Sc; 3], Real<3, B>> {
    #[inline]
    pub const fn x(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> Sc {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> Sc {
        self.0[2]
    }
}

impl<Sc: Copy, B> Vector<[Sc; 4], Real<4, B>> {
    #[inline]
    pub const fn x(&self) -> Sc {
        self.0[0]
    }
    #[inline]
    pub const fn y(&self) -> Sc {
        self.0[1]
    }
    #[inline]
    pub const fn z(&self) -> Sc {
        self.0[2]
    }
    #[inline]
    pub const fn w(&self) -> Sc {
        self.0[3]
    }
}

impl<B> Vec3<B> {
    /// Unit vector codirectional with the positive x-axis.
    pub const X: Self = vec3(1.0, 0.0, 0.0);
    /// Unit vector codirectional with the positive y-axis.
    pub const Y: Self = vec3(0.0, 1.0, 0.0);
    /// Unit vector codirectional with the positive z-axis.
    pub const Z: Self = vec3(0.0, 0.0, 1.0);

    /// Returns the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both, with length equal to the area
    /// of the parallelogram they span, following the right-hand rule.
    pub fn cross(&self, other: &Self) -> Self {
        let [a, b, c] = self.0;
        let [d, e, f] = other.0;
        vec3(b * f - c * e, c * d - a * f, a * e - b * d)
    }

    /// Returns the homogeneous 4-vector `(x, y, z, w)`.
    #[inline]
    pub fn to_vec4(self, w: f32) -> Vec4<B> {
        let [x, y, z] = self.0;
        vec4(x, y, z, w)
    }
}

impl<B> Vec4<B> {
    /// Drops the w component.
    #[inline]
    pub fn xyz(self) -> Vec3<B> {
        let [x, y, z, _] = self.0;
        vec3(x, y, z)
    }
}

impl<B> Vec2<B> {
    /// Returns the z component of the cross product of `self` and `other`
    /// extended to 3D, or the signed area of the parallelogram they span.
    pub fn perp_dot(&self, other: &Self) -> f32 {
        self.x() * other.y() - self.y() * other.x()
    }
}

//
// Trait impls
//

// Manual impls to avoid bounds on the space type

impl<R: Copy, Sp> Copy for Vector<R, Sp> {}

impl<R: Clone, Sp> Clone for Vector<R, Sp> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<R: PartialEq, Sp> PartialEq for Vector<R, Sp> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<R: Default, Sp> Default for Vector<R, Sp> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Debug, Sp> Debug for Vector<R, Sp> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("Vec")?;
        Debug::fmt(&self.0, f)
    }
}

impl<R, Sp> From<R> for Vector<R, Sp> {
    #[inline]
    fn from(repr: R) -> Self {
        Self::new(repr)
    }
}

impl<Sc, Sp, const N: usize> Index<usize> for Vector<[Sc; N], Sp> {
    type Output = Sc;
    #[inline]
    fn index(&self, i: usize) -> &Sc {
        &self.0[i]
    }
}

impl<Sc, Sp, const N: usize> IndexMut<usize> for Vector<[Sc; N], Sp> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Sc {
        &mut self.0[i]
    }
}

impl<Sp, const N: usize> Add for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a + b)
    }
}

impl<Sp, const N: usize> Sub for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.zip_map(rhs, |a, b| a - b)
    }
}

impl<Sp, const N: usize> Mul<f32> for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.map(|a| a * rhs)
    }
}

impl<Sp, const N: usize> Div<f32> for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.map(|a| a / rhs)
    }
}

impl<Sp, const N: usize> Neg for Vector<[f32; N], Sp> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|a| -a)
    }
}

impl<Sp, const N: usize> AddAssign for Vector<[f32; N], Sp> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Sp, const N: usize> SubAssign for Vector<[f32; N], Sp> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Sp, const N: usize> MulAssign<f32> for Vector<[f32; N], Sp> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<Sp, const N: usize> Lerp for Vector<[f32; N], Sp> {
    #[inline]
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self.zip_map(*other, |a, b| Lerp::lerp(&a, &b, t))
    }
}

impl<Sp, const N: usize> ApproxEq for Vector<[f32; N], Sp> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}
