/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dense_matrix::prelude::*;

/// Fills `m` so that `m[(i, j)] == i * cols + j + offset`.
fn fill_row_major(m: &mut Matrix<i32>, offset: i32) {
    let cols = m.cols();
    for i in 0..m.rows() {
        for j in 0..cols {
            m[(i, j)] = (i * cols + j) as i32 + offset;
        }
    }
}

#[test]
fn test_copy() {
    let mut m1 = Matrix::<i32>::new(128, 512);
    fill_row_major(&mut m1, 0);

    let mut m2 = m1.clone();
    assert_eq!(m2.shape(), m1.shape());
    for i in 0..m1.rows() {
        for j in 0..m1.cols() {
            assert_eq!(m1[(i, j)], m2[(i, j)]);
        }
    }

    // the copy is independent
    m2[(3, 7)] = -1;
    assert_eq!(m1[(3, 7)], (3 * 512 + 7) as i32);
    assert_ne!(m1.as_ptr(), m2.as_ptr());
}

#[test]
fn test_transfer_construction() {
    let (rows, cols) = (512, 256);
    let mut m1 = Matrix::<i32>::new(rows, cols);
    fill_row_major(&mut m1, 0);

    let m2 = m1.take();
    assert_eq!(m1.rows(), 0);
    assert_eq!(m1.cols(), 0);
    assert!(m1.is_empty());
    assert_eq!(m2.shape(), (rows, cols));
    for i in 0..m2.rows() {
        for j in 0..m2.cols() {
            assert_eq!((i * cols + j) as i32, m2[(i, j)]);
        }
    }
}

#[test]
fn test_copy_assignment() {
    let mut m1 = Matrix::<i32>::new(512, 256);
    fill_row_major(&mut m1, 0);

    let mut m2 = Matrix::default();
    m2.clone_from(&m1);
    assert_eq!(m2.shape(), m1.shape());
    for i in 0..m1.rows() {
        for j in 0..m1.cols() {
            assert_eq!(m1[(i, j)], m2[(i, j)]);
        }
    }

    // assigning over a populated matrix replaces everything
    let small = Matrix::from_vec(1, 2, vec![5, 6]).unwrap();
    m2.clone_from(&small);
    assert_eq!(m2, small);
}

#[test]
fn test_transfer_assignment() {
    let (rows, cols) = (512, 256);
    let mut m1 = Matrix::<i32>::new(rows, cols);
    fill_row_major(&mut m1, 0);

    let mut m2 = Matrix::from_fn(3, 3, |_, _| 42);
    assert_eq!(m2.shape(), (3, 3));
    m2 = m1.take();
    assert_eq!(m1.rows(), 0);
    assert_eq!(m1.cols(), 0);
    for i in 0..m2.rows() {
        for j in 0..m2.cols() {
            assert_eq!((i * cols + j) as i32, m2[(i, j)]);
        }
    }

    // a moved-from matrix is a valid empty matrix and can be reused
    m1 = Matrix::new(2, 2);
    m1[(1, 1)] = 9;
    assert_eq!(m1.as_slice(), &[0, 0, 0, 9]);
}

#[test]
fn test_add() {
    let mut m1 = Matrix::<i32>::new(512, 256);
    let mut m2 = Matrix::<i32>::new(512, 256);
    let total = (m2.rows() * m2.cols()) as i32;
    fill_row_major(&mut m1, 0);
    for i in 0..m2.rows() {
        for j in 0..m2.cols() {
            m2[(i, j)] = total - (i * m2.cols()) as i32 - j as i32;
        }
    }

    let res = &m1 + &m2;
    assert_eq!(res.shape(), m1.shape());
    for i in 0..res.rows() {
        for j in 0..res.cols() {
            assert_eq!(total, res[(i, j)]);
        }
    }
}

#[test]
fn test_sub() {
    let mut m1 = Matrix::<i32>::new(512, 128);
    let mut m2 = Matrix::<i32>::new(512, 128);
    let total = (m1.rows() * m1.cols()) as i32;
    fill_row_major(&mut m1, total);
    fill_row_major(&mut m2, 0);

    let res = &m1 - &m2;
    assert_eq!(res.shape(), m1.shape());
    for i in 0..res.rows() {
        for j in 0..res.cols() {
            assert_eq!(total, res[(i, j)]);
        }
    }
}

#[test]
fn test_mul_identity() {
    let mut m1 = Matrix::<i32>::new(200, 200);
    fill_row_major(&mut m1, 0);
    let id = Matrix::<i32>::identity(200);

    let id2 = &id * &id;
    assert_eq!(id2.shape(), id.shape());
    assert_eq!(id2, id);

    let m1_id = &m1 * &id;
    assert_eq!(m1_id, m1);
}

#[test]
fn test_mul_int() {
    let mut m1 = Matrix::<i32>::new(4, 4);
    let mut m2 = Matrix::<i32>::new(4, 8);
    fill_row_major(&mut m1, 1);
    fill_row_major(&mut m2, 1);

    let res = &m1 * &m2;
    #[rustfmt::skip]
    let gold: [i32; 32] = [
        170, 180, 190, 200,  210,  220,  230,  240,
        378, 404, 430, 456,  482,  508,  534,  560,
        586, 628, 670, 712,  754,  796,  838,  880,
        794, 852, 910, 968, 1026, 1084, 1142, 1200,
    ];
    assert_eq!(res.shape(), (4, 8));
    for i in 0..res.rows() {
        for j in 0..res.cols() {
            assert_eq!(gold[i * res.cols() + j], res[(i, j)]);
        }
    }
}

#[test]
fn test_mul_float() {
    let m1 = Matrix::<f32>::from_fn(2, 2, |i, j| (i * 2 + j) as f32 + 1.5);
    let m2 = Matrix::<f32>::from_fn(2, 2, |i, j| (i * 2 + j) as f32 + 1.5 + 4.0);

    let res = &m1 * &m2;
    assert_eq!(res.as_slice(), &[27.0, 31.0, 53.0, 61.0]);
}

#[test]
fn test_transpose() {
    let mut m1 = Matrix::<i32>::new(512, 256);
    fill_row_major(&mut m1, 0);
    let m2 = Matrix::<i32>::from_fn(256, 512, |i, j| (j * 256 + i) as i32);

    m1.transpose();
    assert_eq!(m1.shape(), (256, 512));
    for i in 0..m1.rows() {
        for j in 0..m1.cols() {
            assert_eq!(m2[(i, j)], m1[(i, j)]);
        }
    }
}

#[test]
fn test_dimension_mismatch() -> Result<()> {
    let a = Matrix::<i32>::new(4, 3);
    let b = Matrix::<i32>::new(3, 4);

    let err = a.checked_add(&b).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: Op::Add,
            left: Dims { rows: 4, cols: 3 },
            right: Dims { rows: 3, cols: 4 },
        }
    );
    assert_eq!(
        err.to_string(),
        "Dimension mismatch in addition: left operand is 4x3, right operand is 3x4"
    );
    assert!(a.checked_sub(&b).is_err());
    assert!(a.checked_mul(&a).is_err());
    // no truncation or padding: compatible shapes still work
    assert_eq!(a.checked_mul(&b)?.shape(), (4, 4));
    Ok(())
}

#[test]
#[should_panic(expected = "Dimension mismatch in subtraction")]
fn test_sub_operator_mismatch_panics() {
    let a = Matrix::<f64>::new(2, 2);
    let b = Matrix::<f64>::new(2, 3);
    let _ = a - b;
}

#[test]
#[should_panic(expected = "Index (4, 0) is out of bounds for a 4x3 matrix")]
fn test_index_row_out_of_bounds() {
    let m = Matrix::<u16>::new(4, 3);
    let _ = m[(4, 0)];
}
