/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The [`Matrix`] container.

use crate::element::Element;
use crate::error::MatrixError;
use core::ops::{Index, IndexMut};

/// A generic dense matrix stored as a flat vector in row-major order.
///
/// The element at position `(i, j)` is stored at offset `i * cols + j` of
/// the [backing storage](Matrix::as_slice), whose length is always exactly
/// `rows * cols`. The storage is owned exclusively by the matrix, so two
/// distinct matrices never alias.
///
/// A matrix with no rows and no columns is the *empty* matrix: it is what
/// [`Default`] returns and what [`take`](Matrix::take) leaves behind, and it
/// owns no storage.
///
/// Copies are made with [`Clone`]; [`clone_from`](Clone::clone_from) reuses
/// the allocation of the destination when possible. Ownership is transferred
/// either by a plain Rust move or, when the source must remain usable, by
/// [`take`](Matrix::take).
///
/// # Examples
///
/// ```
/// use dense_matrix::Matrix;
///
/// let mut m = Matrix::<i32>::new(2, 3);
/// m[(1, 2)] = 7;
/// assert_eq!(m.as_slice(), &[0, 0, 0, 0, 0, 7]);
///
/// let moved = m.take();
/// assert_eq!((m.rows(), m.cols()), (0, 0));
/// assert_eq!(moved[(1, 2)], 7);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixParts<T>"))]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    /// Row-major storage of exactly `rows * cols` elements.
    data: Vec<T>,
}

/// Unvalidated serialized form, checked by `TryFrom` on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct MatrixParts<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<MatrixParts<T>> for Matrix<T> {
    type Error = MatrixError;

    fn try_from(parts: MatrixParts<T>) -> Result<Self, Self::Error> {
        Matrix::from_vec(parts.rows, parts.cols, parts.data)
    }
}

/// Returns the number of elements of a `rows` x `cols` matrix, or an
/// allocation failure if it does not fit in a `usize`.
#[inline]
fn checked_len(rows: usize, cols: usize) -> Result<usize, MatrixError> {
    rows.checked_mul(cols)
        .ok_or(MatrixError::AllocationFailure { rows, cols })
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            data: self.data.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.data.clone_from(&source.data);
    }
}

impl<T: Clone + Default> Matrix<T> {
    /// Creates a new `rows` x `cols` matrix with all elements set to
    /// `T::default()`, that is, zero for numeric types.
    ///
    /// If either extent is zero no storage is allocated, but the extents are
    /// kept as given.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows; use [`try_new`](Matrix::try_new) to
    /// handle this case.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = checked_len(rows, cols).unwrap_or_else(|err| panic!("{err}"));
        Self {
            rows,
            cols,
            data: vec![T::default(); len],
        }
    }

    /// Like [`new`](Matrix::new), but returns
    /// [`MatrixError::AllocationFailure`] if the number of elements overflows
    /// or the allocator cannot satisfy the request.
    pub fn try_new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let len = checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatrixError::AllocationFailure { rows, cols })?;
        data.resize(len, T::default());
        Ok(Self { rows, cols, data })
    }
}

impl<T: Element> Matrix<T> {
    /// Creates the `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T> Matrix<T> {
    /// Creates the empty matrix, with no rows, no columns, and no storage.
    pub const fn empty() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// Creates a matrix adopting `data` as its row-major storage.
    ///
    /// Returns [`MatrixError::InvalidLength`] if `data.len()` is not
    /// `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        match rows.checked_mul(cols) {
            Some(len) if len == data.len() => Ok(Self { rows, cols, data }),
            _ => Err(MatrixError::InvalidLength {
                rows,
                cols,
                len: data.len(),
            }),
        }
    }

    /// Creates a `rows` x `cols` matrix whose element `(i, j)` is `f(i, j)`.
    ///
    /// Elements are generated in memory order.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let len = checked_len(rows, cols).unwrap_or_else(|err| panic!("{err}"));
        let mut data = Vec::with_capacity(len);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        debug_assert_eq!(data.len(), len);
        Self { rows, cols, data }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the shape as `(rows, cols)`.
    #[inline(always)]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of elements, that is, `rows * cols`.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the matrix has no elements.
    ///
    /// Note that this happens whenever one of the extents is zero, not only
    /// for the [empty](Matrix::empty) matrix.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Transfers the storage and the extents of this matrix to a new matrix
    /// in constant time, leaving `self` empty.
    ///
    /// Transfer assignment is written `dst = src.take()`: the previous
    /// contents of `dst` are dropped.
    #[must_use = "the storage moves into the returned matrix"]
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Resets the matrix to the empty state, releasing its storage.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }

    #[inline(always)]
    fn offset(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Returns a reference to the element at `(row, col)`, or `None` if the
    /// position is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.try_get(row, col).ok()
    }

    /// Returns a mutable reference to the element at `(row, col)`, or `None`
    /// if the position is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.try_get_mut(row, col).ok()
    }

    /// Returns a reference to the element at `(row, col)`, or
    /// [`MatrixError::OutOfBounds`].
    #[inline]
    pub fn try_get(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let offset = self.offset(row, col)?;
        Ok(&self.data[offset])
    }

    /// Returns a mutable reference to the element at `(row, col)`, or
    /// [`MatrixError::OutOfBounds`].
    #[inline]
    pub fn try_get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let offset = self.offset(row, col)?;
        Ok(&mut self.data[offset])
    }

    /// Returns a reference to the element at `(row, col)` without bounds
    /// checks.
    ///
    /// # Safety
    ///
    /// `row < self.rows()` and `col < self.cols()` must hold.
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        debug_assert!(row < self.rows && col < self.cols);
        // SAFETY: the caller guarantees the position is in bounds, so the
        // offset is smaller than rows * cols == data.len().
        unsafe { self.data.get_unchecked(row * self.cols + col) }
    }

    /// Returns a mutable reference to the element at `(row, col)` without
    /// bounds checks.
    ///
    /// # Safety
    ///
    /// `row < self.rows()` and `col < self.cols()` must hold.
    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        debug_assert!(row < self.rows && col < self.cols);
        let cols = self.cols;
        // SAFETY: see get_unchecked.
        unsafe { self.data.get_unchecked_mut(row * cols + col) }
    }

    /// Returns the row-major storage.
    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the row-major storage as a mutable slice.
    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Returns a pointer to the first element of the storage.
    ///
    /// The pointer is dangling if the matrix [is empty](Matrix::is_empty).
    #[inline(always)]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns a mutable pointer to the first element of the storage.
    ///
    /// The pointer is dangling if the matrix [is empty](Matrix::is_empty).
    #[inline(always)]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Consumes the matrix, returning its row-major storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the matrix, returning `(rows, cols, storage)`.
    pub fn into_parts(self) -> (usize, usize, Vec<T>) {
        (self.rows, self.cols, self.data)
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(
            row < self.rows,
            "row {row} is out of bounds (max: {})",
            self.rows
        );
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.rows,
            "row {row} is out of bounds (max: {})",
            self.rows
        );
        &mut self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Returns an iterator over the rows.
    ///
    /// The iterator returns exactly `rows` slices, even when there are no
    /// columns.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[T]> {
        let cols = self.cols;
        (0..self.rows).map(move |i| &self.data[i * cols..(i + 1) * cols])
    }

    /// Returns an iterator over the rows as mutable slices.
    pub fn row_iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [T]> {
        let cols = self.cols;
        let mut rest: &mut [T] = &mut self.data;
        (0..self.rows).map(move |_| {
            let (head, tail) = core::mem::take(&mut rest).split_at_mut(cols);
            rest = tail;
            head
        })
    }

    /// Returns an iterator over the elements in row-major order.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns a mutable iterator over the elements in row-major order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
    }

    pub(crate) fn set_raw(&mut self, rows: usize, cols: usize, data: Vec<T>) {
        debug_assert_eq!(data.len(), rows * cols);
        self.rows = rows;
        self.cols = cols;
        self.data = data;
    }
}

/// Returns a reference to the element at `(row, col)`.
///
/// # Panics
///
/// Panics if `row >= self.rows()` or `col >= self.cols()`; an invalid column
/// is never wrapped into the next row.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        match self.offset(row, col) {
            Ok(offset) => &self.data[offset],
            Err(err) => panic!("{err}"),
        }
    }
}

/// Returns a mutable reference to the element at `(row, col)`.
///
/// # Panics
///
/// Panics if `row >= self.rows()` or `col >= self.cols()`.
impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        match self.offset(row, col) {
            Ok(offset) => &mut self.data[offset],
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
