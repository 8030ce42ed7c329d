//! Two-dimensional buffers.

use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut};

use super::Dims;

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in row-major order with the
/// origin at the top left, such that element (x, y) maps to index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use rastlab_core::util::buf::Buf2;
/// let mut buf = Buf2::new((4, 3));
/// // Indexing with [x, y] yields the element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with a single usize yields a whole row:
/// assert_eq!(&buf[1], &[0, 0, 123, 0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Buf2<T> {
    dims: Dims,
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer of size `dims` with every element initialized
    /// to `T::default()`.
    pub fn new((w, h): Dims) -> Self
    where
        T: Clone + Default,
    {
        Self::filled((w, h), T::default())
    }

    /// Returns a buffer of size `dims` with every element equal to `val`.
    pub fn filled((w, h): Dims, val: T) -> Self
    where
        T: Clone,
    {
        Self {
            dims: (w, h),
            data: vec![val; w as usize * h as usize],
        }
    }

    /// Returns a buffer of size `dims`, with every element initialized by
    /// calling `init_fn(x, y)`.
    pub fn new_with<F>((w, h): Dims, mut init_fn: F) -> Self
    where
        F: FnMut(u32, u32) -> T,
    {
        let data = (0..h)
            .flat_map(|y| (0..w).map(move |x| (x, y)))
            .map(|(x, y)| init_fn(x, y))
            .collect();
        Self { dims: (w, h), data }
    }

    /// Returns a buffer of size `dims` backed by `data`, or `None` if the
    /// length of `data` does not equal `w * h`.
    pub fn from_vec((w, h): Dims, data: Vec<T>) -> Option<Self> {
        (data.len() == w as usize * h as usize)
            .then_some(Self { dims: (w, h), data })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.0
    }
    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.1
    }
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Returns whether (x, y) is inside the bounds of `self`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        0 <= x && x < self.dims.0 as i32 && 0 <= y && y < self.dims.1 as i32
    }

    /// Returns a reference to the element at (x, y), or `None` if out of
    /// bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        let i = self.index_of(x, y)?;
        self.data.get(i)
    }

    /// Returns a mutable reference to the element at (x, y), or `None` if
    /// out of bounds.
    #[inline]
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let i = self.index_of(x, y)?;
        self.data.get_mut(i)
    }

    /// Sets every element of `self` to `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }

    /// Returns an iterator over the rows of `self`, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.chunks_exact(self.dims.0.max(1) as usize)
    }

    /// Returns the backing data of `self` in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns the backing data of `self` mutably, in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline]
    fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.dims.0 as usize + x as usize)
    }
}

impl<T: Debug> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buf2")
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];
    /// Returns the row with index `y`.
    ///
    /// # Panics
    /// If `y >= self.height()`.
    fn index(&self, y: usize) -> &[T] {
        let w = self.dims.0 as usize;
        &self.data[y * w..][..w]
    }
}

impl<T> IndexMut<usize> for Buf2<T> {
    fn index_mut(&mut self, y: usize) -> &mut [T] {
        let w = self.dims.0 as usize;
        &mut self.data[y * w..][..w]
    }
}

impl<T> Index<[u32; 2]> for Buf2<T> {
    type Output = T;
    /// Returns the element at column x, row y.
    ///
    /// # Panics
    /// If x or y is out of bounds.
    fn index(&self, [x, y]: [u32; 2]) -> &T {
        &self[y as usize][x as usize]
    }
}

impl<T> IndexMut<[u32; 2]> for Buf2<T> {
    fn index_mut(&mut self, [x, y]: [u32; 2]) -> &mut T {
        &mut self[y as usize][x as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_default_filled() {
        let buf: Buf2<f32> = Buf2::new((3, 2));
        assert_eq!(buf.dims(), (3, 2));
        assert_eq!(buf.data(), &[0.0; 6]);
    }

    #[test]
    fn new_with_is_row_major() {
        let buf = Buf2::new_with((3, 2), |x, y| 10 * y + x);
        assert_eq!(buf.data(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(&buf[1], &[10, 11, 12]);
        assert_eq!(buf[[2, 0]], 2);
    }

    #[test]
    fn get_out_of_bounds() {
        let mut buf = Buf2::filled((4, 4), 1u8);
        assert_eq!(buf.get(3, 3), Some(&1));
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.get(0, -1), None);
        assert_eq!(buf.get_mut(-1, 2), None);
    }

    #[test]
    fn fill_and_rows() {
        let mut buf = Buf2::new((2, 3));
        buf.fill(7);
        buf[[1, 2]] = 9;
        let rows: Vec<_> = buf.rows().collect();
        assert_eq!(rows, [&[7, 7], &[7, 7], &[7, 9]]);
    }

    #[test]
    fn from_vec_checks_len() {
        assert!(Buf2::from_vec((2, 2), vec![0; 4]).is_some());
        assert!(Buf2::from_vec((2, 2), vec![0; 3]).is_none());
    }
}
