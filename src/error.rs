/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Errors reported by [`Matrix`](crate::Matrix) operations.

use thiserror::Error;

/// The arithmetic operation whose operands were found incompatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Sub,
    Mul,
}

impl core::fmt::Display for Op {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Op::Add => "addition",
            Op::Sub => "subtraction",
            Op::Mul => "multiplication",
        })
    }
}

/// The extents of an operand, as reported by
/// [`MatrixError::DimensionMismatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl core::fmt::Display for Dims {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Error types that can occur while building, accessing, or combining
/// matrices.
///
/// These are caller errors: they are reported before any element is
/// computed or written, so no operand is ever left partially modified.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatrixError {
    /// The operands of `+`, `-`, or `*` have incompatible shapes.
    #[error("Dimension mismatch in {op}: left operand is {left}, right operand is {right}")]
    DimensionMismatch { op: Op, left: Dims, right: Dims },

    /// A checked access fell outside `[0, rows) x [0, cols)`.
    #[error("Index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// The storage for a `rows` x `cols` matrix could not be allocated,
    /// either because the element count overflows or because the allocator
    /// refused the request.
    #[error("Cannot allocate storage for a {rows}x{cols} matrix")]
    AllocationFailure { rows: usize, cols: usize },

    /// A buffer of the wrong length was offered as the storage of a
    /// `rows` x `cols` matrix.
    #[error("Tried to build a {rows}x{cols} matrix over a buffer of length {len}")]
    InvalidLength { rows: usize, cols: usize, len: usize },
}
