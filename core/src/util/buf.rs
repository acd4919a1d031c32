//! Two-dimensional buffers.

use alloc::vec::Vec;
use core::fmt::{self, Debug, Formatter};
use core::ops::{Index, IndexMut};

use crate::math::vec::Vec2i;

/// A rectangular 2D buffer that owns its elements, backed by a `Vec`.
///
/// `Buf2` stores its elements contiguously, in standard row-major order,
/// such that element (x, y) maps to element at index
/// ```text
/// buf.width() * y + x
/// ```
/// in the backing vector.
///
/// # Examples
/// ```
/// # use quadrast_core::util::buf::Buf2;
/// let mut buf = Buf2::new(4, 3, 0);
/// // Indexing with [x, y] yields the element at row y, column x:
/// buf[[2, 1]] = 123;
/// // Indexing with a single usize yields row as a slice:
/// assert_eq!(&buf[1], &[0, 0, 123, 0]);
/// ```
#[derive(Clone, PartialEq)]
pub struct Buf2<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T> Buf2<T> {
    /// Returns a buffer with size `w` × `h`, every element a clone of `init`.
    pub fn new(w: usize, h: usize, init: T) -> Self
    where
        T: Clone,
    {
        Self { width: w, height: h, data: alloc::vec![init; w * h] }
    }

    /// Returns a buffer with size `w` × `h`, with every element
    /// initialized by calling `init_fn(x, y)` where x is the column index
    /// and y the row index of the element being initialized.
    pub fn new_with<F>(w: usize, h: usize, mut init_fn: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(w * h);
        for y in 0..h {
            for x in 0..w {
                data.push(init_fn(x, y));
            }
        }
        Self { width: w, height: h, data }
    }

    /// Returns the width of `self`.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    /// Returns the height of `self`.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    /// Returns the width and height of `self`.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the index of `pos` in the backing data, or `None` if `pos`
    /// lies outside the buffer.
    #[inline]
    pub fn index_of(&self, pos: Vec2i) -> Option<usize> {
        let (x, y) = (usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?);
        (x < self.width && y < self.height).then(|| self.width * y + x)
    }

    /// Returns a reference to the element at `pos`, if in bounds.
    #[inline]
    pub fn get(&self, pos: Vec2i) -> Option<&T> {
        self.index_of(pos).map(|i| &self.data[i])
    }
    /// Returns a mutable reference to the element at `pos`, if in bounds.
    #[inline]
    pub fn get_mut(&mut self, pos: Vec2i) -> Option<&mut T> {
        self.index_of(pos).map(|i| &mut self.data[i])
    }

    /// Sets every element of `self` to a clone of `val`.
    pub fn fill(&mut self, val: T)
    where
        T: Clone,
    {
        self.data.fill(val);
    }

    /// Returns an iterator over the rows of `self`, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on zero
        self.data.chunks(self.width.max(1))
    }

    /// Returns the backing data of `self`, in row-major order.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
    /// Returns the backing data of `self` mutably, in row-major order.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> Index<usize> for Buf2<T> {
    type Output = [T];

    /// Returns the row with index `y`.
    ///
    /// # Panics
    /// If `y >= self.height()`.
    #[inline]
    fn index(&self, y: usize) -> &[T] {
        assert!(y < self.height, "row {y} out of bounds 0..{}", self.height);
        let start = self.width * y;
        &self.data[start..start + self.width]
    }
}
impl<T> IndexMut<usize> for Buf2<T> {
    #[inline]
    fn index_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.height, "row {y} out of bounds 0..{}", self.height);
        let start = self.width * y;
        &mut self.data[start..start + self.width]
    }
}

impl<T> Index<[usize; 2]> for Buf2<T> {
    type Output = T;

    /// Returns the element at column `x`, row `y`.
    ///
    /// # Panics
    /// If `x` or `y` is out of bounds.
    #[inline]
    fn index(&self, [x, y]: [usize; 2]) -> &T {
        &self[y][x]
    }
}
impl<T> IndexMut<[usize; 2]> for Buf2<T> {
    #[inline]
    fn index_mut(&mut self, [x, y]: [usize; 2]) -> &mut T {
        &mut self[y][x]
    }
}

impl<T: Debug> Debug for Buf2<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Buf2({}×{})[", self.width, self.height)?;
        for row in self.rows() {
            writeln!(f, "    {row:?}")?;
        }
        write!(f, "]")
    }
}
