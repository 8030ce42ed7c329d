//! Matrices and linear transforms.
//!
//! Matrices are stored in *column-major* order, as in OpenGL: element
//! `m.0[col][row]`, with the translation in the last column. The sixteen
//! elements are contiguous and can be handed to a graphics API as a uniform
//! without conversion, see [`Mat4::as_slice`].

use core::array;
use core::fmt::{self, Debug, Formatter};
use core::marker::PhantomData;
use core::ops::Mul;

use crate::math::{
    Angle,
    approx::ApproxEq,
    vec::{Vec3, Vec4},
};
use crate::render::{Ndc, Proj, Screen, View, World};
use crate::util::Dims;

/// A 4×4 matrix of `f32`s mapping vectors from basis `Src` to basis `Dst`.
#[repr(transparent)]
pub struct Mat4<Src = (), Dst = ()>(pub [[f32; 4]; 4], PhantomData<(Src, Dst)>);

//
// Inherent impls
//

impl<F, T> Mat4<F, T> {
    /// Returns a matrix with the given columns.
    #[inline]
    pub const fn new(cols: [[f32; 4]; 4]) -> Self {
        Self(cols, PhantomData)
    }

    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Returns the column with index `c`.
    #[inline]
    pub fn col(&self, c: usize) -> [f32; 4] {
        self.0[c]
    }

    /// Returns the row with index `r`.
    #[inline]
    pub fn row(&self, r: usize) -> [f32; 4] {
        self.0.map(|col| col[r])
    }

    /// Returns the elements of `self` as a contiguous column-major slice.
    ///
    /// # Examples
    /// ```
    /// # use rastlab_core::math::{translate, vec3, Mat4};
    /// let m: Mat4 = translate(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(&m.as_slice()[12..], &[1.0, 2.0, 3.0, 1.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.0.as_flattened()
    }

    /// Returns the elements of `self` as a column-major array.
    pub fn to_cols_array(&self) -> [f32; 16] {
        array::from_fn(|i| self.0[i / 4][i % 4])
    }

    /// Returns `self` retagged to map from basis `G` to basis `U`.
    ///
    /// This is a type-level cast only; the elements are unchanged.
    #[inline]
    pub fn to<G, U>(&self) -> Mat4<G, U> {
        Mat4::new(self.0)
    }

    /// Returns the composition of `self` and `other`: a matrix that
    /// first applies `self`, then `other`.
    #[inline]
    pub fn then<U>(&self, other: &Mat4<T, U>) -> Mat4<F, U> {
        *other * *self
    }

    /// Applies `self` to a homogeneous 4-vector.
    pub fn apply4(&self, v: &Vec4<F>) -> Vec4<T> {
        let m = &self.0;
        Vec4::new(array::from_fn(|r| {
            m[0][r] * v.0[0]
                + m[1][r] * v.0[1]
                + m[2][r] * v.0[2]
                + m[3][r] * v.0[3]
        }))
    }

    /// Applies `self` to a point, that is, a 3-vector with implicit w = 1.
    ///
    /// The resulting w is discarded, so this is only meaningful for affine
    /// transforms. Use [`apply4`][Self::apply4] for projections.
    #[inline]
    pub fn apply(&self, pt: &Vec3<F>) -> Vec3<T> {
        self.apply4(&pt.to_vec4(1.0)).xyz()
    }

    /// Applies `self` to a direction, that is, a 3-vector with implicit
    /// w = 0. Translation has no effect on directions.
    #[inline]
    pub fn apply_dir(&self, dir: &Vec3<F>) -> Vec3<T> {
        self.apply4(&dir.to_vec4(0.0)).xyz()
    }

    /// Returns the transpose of `self`.
    pub fn transpose(&self) -> Mat4<T, F> {
        Mat4::new(array::from_fn(|c| self.row(c)))
    }

    /// Returns the determinant of `self`.
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        let det3 = |a: usize, b: usize, c: usize| {
            let [x, y, z] = [m[a], m[b], m[c]];
            x[1] * (y[2] * z[3] - y[3] * z[2])
                - x[2] * (y[1] * z[3] - y[3] * z[1])
                + x[3] * (y[1] * z[2] - y[2] * z[1])
        };
        m[0][0] * det3(1, 2, 3) - m[1][0] * det3(0, 2, 3)
            + m[2][0] * det3(0, 1, 3)
            - m[3][0] * det3(0, 1, 2)
    }

    /// Returns the inverse of `self`, or `None` if `self` is singular.
    ///
    /// Uses Gauss–Jordan elimination with partial pivoting.
    pub fn inverse(&self) -> Option<Mat4<T, F>> {
        // Inverting the transpose in place yields the transpose of the
        // inverse, so the column-major layout needs no special handling.
        let mut this = self.0;
        let mut inv = Mat4::<T, F>::identity().0;

        for idx in 0..4 {
            let pivot = (idx..4).max_by(|&a, &b| {
                this[a][idx].abs().total_cmp(&this[b][idx].abs())
            })?;
            if this[pivot][idx] == 0.0 {
                return None;
            }
            this.swap(idx, pivot);
            inv.swap(idx, pivot);

            let div = this[idx][idx];
            for c in 0..4 {
                this[idx][c] /= div;
                inv[idx][c] /= div;
            }
            for r in (0..4).filter(|&r| r != idx) {
                let x = this[r][idx];
                for c in 0..4 {
                    this[r][c] -= x * this[idx][c];
                    inv[r][c] -= x * inv[idx][c];
                }
            }
        }
        Some(Mat4::new(inv))
    }

    /// Returns the matrix that transforms normals consistently with `self`,
    /// the transpose of the inverse.
    ///
    /// Normals transformed with `self` directly would not stay perpendicular
    /// to their surface under nonuniform scaling. If `self` is singular,
    /// returns `self` unchanged.
    pub fn normal_matrix(&self) -> Mat4<F, T> {
        match self.inverse() {
            Some(inv) => inv.transpose(),
            None => *self,
        }
    }
}

//
// Free fns
//

/// Returns a matrix applying a translation by `t`.
pub fn translate(t: Vec3) -> Mat4 {
    let [x, y, z] = t.0;
    Mat4::new([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [x, y, z, 1.0],
    ])
}

/// Returns a matrix applying a scaling by `s` along the coordinate axes.
pub fn scale(s: Vec3) -> Mat4 {
    let [x, y, z] = s.0;
    Mat4::new([
        [x, 0.0, 0.0, 0.0],
        [0.0, y, 0.0, 0.0],
        [0.0, 0.0, z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a counterclockwise rotation by `angle` about
/// `axis`, as given by Rodrigues' rotation formula.
///
/// `axis` need not be normalized, but must be nonzero.
pub fn rotate(axis: Vec3, angle: Angle) -> Mat4 {
    let a = axis.normalize();
    let (s, c) = angle.sin_cos();
    let [x, y, z] = a.0;
    let [tx, ty, tz] = (a * (1.0 - c)).0;
    Mat4::new([
        [c + tx * x, tx * y + s * z, tx * z - s * y, 0.0],
        [ty * x - s * z, c + ty * y, ty * z + s * x, 0.0],
        [tz * x + s * y, tz * y - s * x, c + tz * z, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Returns a matrix applying a perspective projection.
///
/// Follows the OpenGL convention: the camera looks down the negative
/// z-axis, and points between the `near` and `far` planes are mapped to
/// the NDC depth range [-1, 1].
///
/// # Parameters
/// * `fov_y`: Vertical field of view.
/// * `aspect`: Ratio of viewport width to height.
/// * `near`, `far`: Distances to the near and far clipping planes.
pub fn perspective(
    fov_y: Angle,
    aspect: f32,
    near: f32,
    far: f32,
) -> Mat4<View, Proj> {
    let f = 1.0 / (fov_y / 2.0).tan();
    let depth = far - near;
    Mat4::new([
        [f / aspect, 0.0, 0.0, 0.0],
        [0.0, f, 0.0, 0.0],
        [0.0, 0.0, -(far + near) / depth, -1.0],
        [0.0, 0.0, -2.0 * far * near / depth, 0.0],
    ])
}

/// Returns a matrix applying an orthographic projection of the box
/// spanned by `min` (left, bottom, near) and `max` (right, top, far).
pub fn orthographic(min: Vec3<View>, max: Vec3<View>) -> Mat4<View, Proj> {
    let [l, b, n] = min.0;
    let [r, t, f] = max.0;
    Mat4::new([
        [2.0 / (r - l), 0.0, 0.0, 0.0],
        [0.0, 2.0 / (t - b), 0.0, 0.0],
        [0.0, 0.0, -2.0 / (f - n), 0.0],
        [
            -(r + l) / (r - l),
            -(t + b) / (t - b),
            -(f + n) / (f - n),
            1.0,
        ],
    ])
}

/// Returns a matrix applying a perspective projection of the frustum
/// whose near rectangle is spanned by `min` (left, bottom, near) and
/// `max` (right, top, far), like `glFrustum`.
pub fn frustum(min: Vec3<View>, max: Vec3<View>) -> Mat4<View, Proj> {
    let [l, b, n] = min.0;
    let [r, t, f] = max.0;
    Mat4::new([
        [2.0 * n / (r - l), 0.0, 0.0, 0.0],
        [0.0, 2.0 * n / (t - b), 0.0, 0.0],
        [
            (r + l) / (r - l),
            (t + b) / (t - b),
            -(f + n) / (f - n),
            -1.0,
        ],
        [0.0, 0.0, -2.0 * f * n / (f - n), 0.0],
    ])
}

/// Returns a view matrix for a camera at `eye` looking at `target`,
/// with `up` giving the approximate upward direction.
pub fn look_at(
    eye: Vec3<World>,
    target: Vec3<World>,
    up: Vec3<World>,
) -> Mat4<World, View> {
    let f = (target - eye).normalize();
    let s = f.cross(&up).normalize();
    let u = s.cross(&f);
    Mat4::new([
        [s.x(), u.x(), -f.x(), 0.0],
        [s.y(), u.y(), -f.y(), 0.0],
        [s.z(), u.z(), -f.z(), 0.0],
        [-s.dot(&eye), -u.dot(&eye), f.dot(&eye), 1.0],
    ])
}

/// Returns a matrix mapping NDC to screen coordinates of a viewport of
/// size `dims`.
///
/// The y-axis is flipped so that the origin is at the top left:
/// ```text
/// x = (ndc.x + 1) / 2 * width
/// y = (1 - ndc.y) / 2 * height
/// z = ndc.z
/// ```
pub fn viewport(dims: Dims) -> Mat4<Ndc, Screen> {
    let (w, h) = (dims.0 as f32 / 2.0, dims.1 as f32 / 2.0);
    Mat4::new([
        [w, 0.0, 0.0, 0.0],
        [0.0, -h, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [w, h, 0.0, 1.0],
    ])
}

//
// Trait impls
//

impl<F, T> Copy for Mat4<F, T> {}

impl<F, T> Clone for Mat4<F, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F, T> PartialEq for Mat4<F, T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<F, T> Default for Mat4<F, T> {
    /// Returns the identity matrix.
    fn default() -> Self {
        Self::identity()
    }
}

impl<F, T> Debug for Mat4<F, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mat4[")?;
        for r in 0..4 {
            writeln!(f, "    {:6.2?}", self.row(r))?;
        }
        write!(f, "]")
    }
}

impl<F, T, U> Mul<Mat4<F, T>> for Mat4<T, U> {
    type Output = Mat4<F, U>;

    /// Returns the matrix product `self * rhs`, which applies `rhs` first.
    fn mul(self, rhs: Mat4<F, T>) -> Mat4<F, U> {
        let (a, b) = (&self.0, &rhs.0);
        Mat4::new(array::from_fn(|c| {
            array::from_fn(|r| (0..4).map(|k| a[k][r] * b[c][k]).sum())
        }))
    }
}

impl<F, T> ApproxEq for Mat4<F, T> {
    fn approx_eq_eps(&self, other: &Self, rel_eps: &f32) -> bool {
        self.0.approx_eq_eps(&other.0, rel_eps)
    }
    fn relative_epsilon() -> f32 {
        f32::relative_epsilon()
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use crate::assert_approx_eq;
    use crate::math::{
        degs,
        vec::{vec3, vec4},
    };

    use super::*;

    #[test]
    fn column_major_layout() {
        let m = translate(vec3(1.0, 2.0, 3.0));
        assert_eq!(m.0[3], [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(m.row(0), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(
            m.to_cols_array(),
            [
                1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, 1.0, 2.0, 3.0, 1.0
            ]
        );
        assert_eq!(m.as_slice(), &m.to_cols_array());
    }

    #[test]
    fn identity_is_noop() {
        let v = vec3(1.0, -2.0, 3.5);
        assert_eq!(Mat4::<(), ()>::identity().apply(&v), v);
    }

    #[test]
    fn translate_points_not_directions() {
        let m = translate(vec3(1.0, 2.0, 3.0));
        assert_eq!(m.apply(&vec3(0.0, 5.0, -3.0)), vec3(1.0, 7.0, 0.0));
        assert_eq!(m.apply_dir(&vec3(0.0, 5.0, -3.0)), vec3(0.0, 5.0, -3.0));
    }

    #[test]
    fn scale_vector() {
        let m = scale(vec3(1.0, -2.0, 3.0));
        assert_eq!(m.apply(&vec3(0.0, 4.0, -3.0)), vec3(0.0, -8.0, -9.0));
    }

    #[test]
    fn rotate_about_z_is_counterclockwise() {
        let m = rotate(Vec3::Z, degs(90.0));
        assert_approx_eq!(m.apply(&Vec3::X), Vec3::Y);
        assert_approx_eq!(m.apply(&Vec3::Y), -Vec3::X);
        assert_approx_eq!(m.apply(&Vec3::Z), Vec3::Z);
    }

    #[test]
    fn rotate_about_arbitrary_axis() {
        // A third of a turn about the main diagonal cycles the axes
        let m = rotate(vec3(1.0, 1.0, 1.0), degs(120.0));
        assert_approx_eq!(m.apply(&Vec3::X), Vec3::Y, eps = 1e-5);
        assert_approx_eq!(m.apply(&Vec3::Y), Vec3::Z, eps = 1e-5);
    }

    #[test]
    fn product_applies_right_operand_first() {
        let t = translate(vec3(1.0, 0.0, 0.0));
        let s = scale(vec3(2.0, 2.0, 2.0));
        let v = vec3(1.0, 1.0, 1.0);
        assert_eq!((t * s).apply(&v), vec3(3.0, 2.0, 2.0));
        assert_eq!(s.then(&t).apply(&v), vec3(3.0, 2.0, 2.0));
        assert_eq!((s * t).apply(&v), vec3(4.0, 2.0, 2.0));
    }

    #[test]
    fn perspective_elements() {
        let m = perspective(degs(90.0), 2.0, 1.0, 3.0);
        assert_approx_eq!(m.0[0][0], 0.5);
        assert_approx_eq!(m.0[1][1], 1.0);
        assert_eq!(m.0[2][2], -2.0);
        assert_eq!(m.0[2][3], -1.0);
        assert_eq!(m.0[3][2], -3.0);
        assert_eq!(m.0[3][3], 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let m = perspective(degs(45.0), 1.0, 0.1, 100.0);
        let near = m.apply4(&vec4(0.0, 0.0, -0.1, 1.0));
        let far = m.apply4(&vec4(0.0, 0.0, -100.0, 1.0));
        assert_approx_eq!(near.z() / near.w(), -1.0, eps = 1e-5);
        assert_approx_eq!(far.z() / far.w(), 1.0, eps = 1e-5);
        assert_approx_eq!(near.w(), 0.1);
    }

    #[test]
    fn orthographic_maps_box_to_unit_cube() {
        let m = orthographic(vec3(-4.0, -2.0, 0.1), vec3(4.0, 2.0, 100.0));
        let lbn = m.apply4(&vec4(-4.0, -2.0, -0.1, 1.0));
        let rtf = m.apply4(&vec4(4.0, 2.0, -100.0, 1.0));
        assert_approx_eq!(lbn, vec4(-1.0, -1.0, -1.0, 1.0));
        assert_approx_eq!(rtf, vec4(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn frustum_matches_symmetric_perspective() {
        let (n, f) = (1.0, 10.0);
        let p = perspective(degs(90.0), 1.0, n, f);
        let q = frustum(vec3(-1.0, -1.0, n), vec3(1.0, 1.0, f));
        assert_approx_eq!(p, q);
    }

    #[test]
    fn look_at_moves_eye_to_origin() {
        let m = look_at(vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 0.0), Vec3::Y);
        assert_approx_eq!(m.apply(&vec3(0.0, 0.0, 5.0)), vec3(0.0, 0.0, 0.0));
        assert_approx_eq!(m.apply(&vec3(0.0, 0.0, 0.0)), vec3(0.0, 0.0, -5.0));
        assert_approx_eq!(m.apply(&vec3(1.0, 2.0, 0.0)), vec3(1.0, 2.0, -5.0));
    }

    #[test]
    fn look_at_from_the_side() {
        let m = look_at(vec3(5.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0), Vec3::Y);
        // Looking down -x, so +z is to the left
        assert_approx_eq!(m.apply(&vec3(0.0, 0.0, 1.0)), vec3(-1.0, 0.0, -5.0));
    }

    #[test]
    fn viewport_flips_y() {
        let m = viewport((600, 400));
        assert_eq!(m.apply(&vec3(-1.0, 1.0, 0.5)), vec3(0.0, 0.0, 0.5));
        assert_eq!(m.apply(&vec3(1.0, -1.0, -0.5)), vec3(600.0, 400.0, -0.5));
        assert_eq!(m.apply(&vec3(0.0, 0.0, 0.0)), vec3(300.0, 200.0, 0.0));
    }

    #[test]
    fn inverse_times_self_is_identity() {
        let m: Mat4 = translate(vec3(1.0, -2.0, 3.0))
            * rotate(vec3(0.5, 1.0, 0.0), degs(33.0))
            * scale(vec3(2.0, 0.5, 4.0));
        let inv = m.inverse().expect("matrix should be invertible");
        assert_approx_eq!(inv * m, Mat4::identity(), eps = 1e-5);
        assert_approx_eq!(m * inv, Mat4::identity(), eps = 1e-5);
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = scale(vec3(1.0, 0.0, 1.0));
        assert_eq!(m.inverse(), None);
        assert_eq!(m.determinant(), 0.0);
    }

    #[test]
    fn determinant_of_scale() {
        assert_eq!(scale(vec3(2.0, 3.0, 4.0)).determinant(), 24.0);
        assert_eq!(translate(vec3(9.0, 9.0, 9.0)).determinant(), 1.0);
    }

    #[test]
    fn normal_matrix_keeps_normals_perpendicular() {
        let m = scale(vec3(1.0, 4.0, 1.0));
        // Surface along the line y = x has normal (1, -1)
        let tangent = m.apply_dir(&vec3(1.0, 1.0, 0.0));
        let normal = m.normal_matrix().apply_dir(&vec3(1.0, -1.0, 0.0));
        assert_approx_eq!(tangent.dot(&normal), 0.0);
    }

    #[test]
    fn transpose_swaps_rows_and_cols() {
        let m = translate(vec3(1.0, 2.0, 3.0));
        let t = m.transpose();
        assert_eq!(t.0[0], [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn debug_prints_rows() {
        let m = translate(vec3(1.0, 2.0, 3.0));
        let expected = "Mat4[
    [  1.00,   0.00,   0.00,   1.00]
    [  0.00,   1.00,   0.00,   2.00]
    [  0.00,   0.00,   1.00,   3.00]
    [  0.00,   0.00,   0.00,   1.00]
]";
        assert_eq!(format!("{m:?}"), expected);
    }
}
