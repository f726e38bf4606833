/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Element-wise addition and subtraction, and matrix multiplication.
//!
//! Each operation comes in a checked form returning a [`Result`]
//! ([`Matrix::checked_add`], [`Matrix::checked_sub`],
//! [`Matrix::checked_mul`]) and as the corresponding operator, which panics
//! on incompatible shapes. Operators are implemented for all combinations of
//! owned and borrowed operands:
//!
//! ```
//! use dense_matrix::Matrix;
//!
//! let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4])?;
//! let i = Matrix::identity(2);
//! assert_eq!(&a * &i, a);
//! assert_eq!((&a + &a).as_slice(), &[2, 4, 6, 8]);
//! assert!(a.checked_mul(&Matrix::new(3, 1)).is_err());
//! # Ok::<(), dense_matrix::MatrixError>(())
//! ```
//!
//! All operations are pure: operands are never modified and the result is a
//! newly allocated matrix. Shapes are checked before any element is
//! computed.

use crate::element::Element;
use crate::error::{Dims, MatrixError, Op};
use crate::matrix::Matrix;
use core::ops::{Add, Mul, Sub};

impl<T> Matrix<T> {
    #[inline]
    pub(crate) fn dims(&self) -> Dims {
        Dims {
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    pub(crate) fn check_same_shape(&self, rhs: &Self, op: Op) -> Result<(), MatrixError> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                op,
                left: self.dims(),
                right: rhs.dims(),
            })
        }
    }

    /// Returns the matrix of zeros that receives the product `self * rhs`.
    pub(crate) fn product_accumulator(&self, rhs: &Self) -> Self
    where
        T: Element,
    {
        Matrix::from_fn(self.rows(), rhs.cols(), |_, _| T::zero())
    }

    pub(crate) fn check_mul_shape(&self, rhs: &Self) -> Result<(), MatrixError> {
        if self.cols() == rhs.rows() {
            Ok(())
        } else {
            Err(MatrixError::DimensionMismatch {
                op: Op::Mul,
                left: self.dims(),
                right: rhs.dims(),
            })
        }
    }
}

/// Accumulates into `out` the product of `a_row` (a row of the left operand)
/// by `b`.
///
/// `out` must be zeroed and have `b.cols()` elements. Every output element
/// is accumulated in increasing order of the inner index, starting from zero,
/// so the result is the same as the textbook triple loop even for
/// floating-point types; the loop order only improves locality on `b`.
#[inline]
pub(crate) fn mul_row<T: Element>(a_row: &[T], b: &Matrix<T>, out: &mut [T]) {
    debug_assert_eq!(a_row.len(), b.rows());
    debug_assert_eq!(out.len(), b.cols());
    for (&a, b_row) in a_row.iter().zip(b.row_iter()) {
        for (o, &x) in out.iter_mut().zip(b_row) {
            *o = *o + a * x;
        }
    }
}

impl<T: Element> Matrix<T> {
    fn zip_map(&self, rhs: &Self, f: impl Fn(T, T) -> T) -> Self {
        let data = self
            .iter()
            .zip(rhs.iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_raw(self.rows(), self.cols(), data)
    }

    /// Returns the element-wise sum `self + rhs`, or
    /// [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn checked_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs, Op::Add)?;
        Ok(self.zip_map(rhs, |a, b| a + b))
    }

    /// Returns the element-wise difference `self - rhs`, or
    /// [`MatrixError::DimensionMismatch`] if the shapes differ.
    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs, Op::Sub)?;
        Ok(self.zip_map(rhs, |a, b| a - b))
    }

    /// Returns the matrix product `self * rhs`, or
    /// [`MatrixError::DimensionMismatch`] if `self.cols() != rhs.rows()`.
    ///
    /// The result has shape `(self.rows(), rhs.cols())`, and its element
    /// `(i, j)` is the sum over `k` of `self[(i, k)] * rhs[(k, j)]`,
    /// accumulated sequentially from `k = 0`.
    pub fn checked_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_mul_shape(rhs)?;
        let mut res = self.product_accumulator(rhs);
        for (a_row, out) in self.row_iter().zip(res.row_iter_mut()) {
            mul_row(a_row, rhs, out);
        }
        Ok(res)
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        /// # Panics
        ///
        /// Panics if the shapes of the operands are incompatible.
        impl<T: Element> $trait<&Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                self.$checked(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: Element> $trait<Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                self.$checked(&rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: Element> $trait<&Matrix<T>> for Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: &Matrix<T>) -> Matrix<T> {
                self.$checked(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: Element> $trait<Matrix<T>> for &Matrix<T> {
            type Output = Matrix<T>;

            fn $method(self, rhs: Matrix<T>) -> Matrix<T> {
                self.$checked(&rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

impl_binop!(Add, add, checked_add);
impl_binop!(Sub, sub, checked_sub);
impl_binop!(Mul, mul, checked_mul);
