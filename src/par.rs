/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Parallel arithmetic.
//!
//! The methods in this module have the same preconditions, errors, and
//! results as their sequential counterparts in [`ops`](crate::ops), but
//! compute the result in parallel on the current [rayon] thread pool. To
//! control the number of threads, run them inside
//! [`ThreadPool::install`](rayon::ThreadPool::install).
//!
//! Products are split by rows of the result, and each element is still
//! accumulated sequentially over the inner index, so [`Matrix::par_mul`]
//! returns exactly the same values as [`Matrix::checked_mul`], even for
//! floating-point types.

use crate::element::Element;
use crate::error::{MatrixError, Op};
use crate::matrix::Matrix;
use crate::ops::mul_row;
use rayon::prelude::*;

impl<T: Element> Matrix<T> {
    fn par_zip_map(&self, rhs: &Self, f: impl Fn(T, T) -> T + Sync + Send) -> Self {
        let data = self
            .as_slice()
            .par_iter()
            .zip(rhs.as_slice().par_iter())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Matrix::from_raw(self.rows(), self.cols(), data)
    }

    /// Parallel version of [`checked_add`](Matrix::checked_add).
    pub fn par_add(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs, Op::Add)?;
        Ok(self.par_zip_map(rhs, |a, b| a + b))
    }

    /// Parallel version of [`checked_sub`](Matrix::checked_sub).
    pub fn par_sub(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_same_shape(rhs, Op::Sub)?;
        Ok(self.par_zip_map(rhs, |a, b| a - b))
    }

    /// Parallel version of [`checked_mul`](Matrix::checked_mul).
    pub fn par_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        self.check_mul_shape(rhs)?;
        let mut res = self.product_accumulator(rhs);
        if res.is_empty() {
            return Ok(res);
        }
        let cols = res.cols();
        res.as_mut_slice()
            .par_chunks_exact_mut(cols)
            .enumerate()
            .for_each(|(i, out)| mul_row(self.row(i), rhs, out));
        Ok(res)
    }
}
