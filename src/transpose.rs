/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transposition.
//!
//! Both the in-place [`Matrix::transpose`] and the non-mutating
//! [`Matrix::transposed`] walk the matrix in square tiles, so that both the
//! source and the destination are accessed with reasonable locality even
//! for large matrices.

use crate::matrix::Matrix;

/// Side of the square tiles used when walking the matrix.
const BLOCK: usize = 32;

/// Transposes in place the `n` x `n` row-major matrix stored in `data`.
fn transpose_square<T>(data: &mut [T], n: usize) {
    debug_assert_eq!(data.len(), n * n);
    for ib in (0..n).step_by(BLOCK) {
        for jb in (ib..n).step_by(BLOCK) {
            for i in ib..(ib + BLOCK).min(n) {
                // on diagonal tiles only the upper triangle is swapped
                let start = if ib == jb { i + 1 } else { jb };
                for j in start..(jb + BLOCK).min(n) {
                    data.swap(i * n + j, j * n + i);
                }
            }
        }
    }
}

/// Returns the transpose of the `rows` x `cols` row-major matrix stored in
/// `src`, that is, a `cols` x `rows` row-major buffer.
fn transpose_into<T: Clone>(src: &[T], rows: usize, cols: usize) -> Vec<T> {
    debug_assert_eq!(src.len(), rows * cols);
    // every position is overwritten below; cloning just avoids uninit memory
    let mut dst = src.to_vec();
    for ib in (0..rows).step_by(BLOCK) {
        for jb in (0..cols).step_by(BLOCK) {
            for i in ib..(ib + BLOCK).min(rows) {
                for j in jb..(jb + BLOCK).min(cols) {
                    dst[j * rows + i] = src[i * cols + j].clone();
                }
            }
        }
    }
    dst
}

impl<T: Clone> Matrix<T> {
    /// Transposes the matrix in place: the element at `(i, j)` moves to
    /// `(j, i)` and the extents are swapped.
    ///
    /// Square matrices are transposed by swapping elements; for rectangular
    /// matrices the transposed elements are gathered in a new buffer of the
    /// same size, which replaces the current one.
    ///
    /// # Examples
    ///
    /// ```
    /// use dense_matrix::Matrix;
    ///
    /// let mut m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6])?;
    /// m.transpose();
    /// assert_eq!(m.shape(), (3, 2));
    /// assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// # Ok::<(), dense_matrix::MatrixError>(())
    /// ```
    pub fn transpose(&mut self) {
        let (rows, cols) = self.shape();
        if rows == cols {
            transpose_square(self.as_mut_slice(), rows);
            return;
        }
        let data = transpose_into(self.as_slice(), rows, cols);
        self.set_raw(cols, rows, data);
    }

    /// Returns the transpose of this matrix, leaving it untouched.
    pub fn transposed(&self) -> Self {
        let (rows, cols) = self.shape();
        Matrix::from_raw(cols, rows, transpose_into(self.as_slice(), rows, cols))
    }
}
