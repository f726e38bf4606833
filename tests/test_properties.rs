/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Algebraic properties checked on pseudorandom matrices of assorted shapes.

use dense_matrix::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x8c2b_781f_2866_90fd;
const TRIALS: usize = 50;

fn random_matrix(rng: &mut SmallRng, rows: usize, cols: usize) -> Matrix<i64> {
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(-1000..1000))
}

fn random_shape(rng: &mut SmallRng) -> (usize, usize) {
    (rng.random_range(0..40), rng.random_range(0..40))
}

#[test]
fn test_add_preserves_shape_and_values() {
    let mut rng = SmallRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, cols);
        let b = random_matrix(&mut rng, rows, cols);
        let sum = &a + &b;
        assert_eq!(sum.shape(), a.shape());
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(sum[(i, j)], a[(i, j)] + b[(i, j)]);
            }
        }
    }
}

#[test]
fn test_sub_inverts_add() {
    let mut rng = SmallRng::seed_from_u64(SEED + 1);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, cols);
        let b = random_matrix(&mut rng, rows, cols);
        assert_eq!(&(&a + &b) - &b, a);
    }
}

#[test]
fn test_identity_is_neutral() {
    let mut rng = SmallRng::seed_from_u64(SEED + 2);
    for _ in 0..TRIALS {
        let n = rng.random_range(0..40);
        let a = random_matrix(&mut rng, n, n);
        let id = Matrix::identity(n);
        assert_eq!(&a * &id, a);
        assert_eq!(&id * &a, a);
        assert_eq!(&id * &id, id);
    }
}

#[test]
fn test_mul_matches_definition() {
    let mut rng = SmallRng::seed_from_u64(SEED + 3);
    for _ in 0..TRIALS {
        let (rows, inner) = random_shape(&mut rng);
        let cols = rng.random_range(0..40);
        let a = random_matrix(&mut rng, rows, inner);
        let b = random_matrix(&mut rng, inner, cols);
        let c = &a * &b;
        assert_eq!(c.shape(), (rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                let expected: i64 = (0..inner).map(|k| a[(i, k)] * b[(k, j)]).sum();
                assert_eq!(c[(i, j)], expected);
            }
        }
    }
}

#[test]
fn test_float_mul_accumulates_sequentially() {
    let mut rng = SmallRng::seed_from_u64(SEED + 4);
    let a = Matrix::from_fn(17, 33, |_, _| rng.random_range(-1.0..1.0_f32));
    let b = Matrix::from_fn(33, 9, |_, _| rng.random_range(-1.0..1.0_f32));
    let c = a.checked_mul(&b).unwrap();
    for i in 0..a.rows() {
        for j in 0..b.cols() {
            let mut acc = 0.0_f32;
            for k in 0..a.cols() {
                acc += a[(i, k)] * b[(k, j)];
            }
            // bitwise, not approximate
            assert_eq!(c[(i, j)].to_bits(), acc.to_bits());
        }
    }
}

#[test]
fn test_transpose_is_an_involution() {
    let mut rng = SmallRng::seed_from_u64(SEED + 5);
    for _ in 0..TRIALS {
        let (rows, cols) = (rng.random_range(0..100), rng.random_range(0..100));
        let original = random_matrix(&mut rng, rows, cols);
        let mut m = original.clone();
        m.transpose();
        assert_eq!(m.shape(), (cols, rows));
        for i in 0..cols {
            for j in 0..rows {
                assert_eq!(m[(i, j)], original[(j, i)]);
            }
        }
        m.transpose();
        assert_eq!(m, original);
    }
}

#[test]
fn test_mismatched_shapes_are_rejected() {
    let mut rng = SmallRng::seed_from_u64(SEED + 6);
    for _ in 0..TRIALS {
        let (rows, cols) = random_shape(&mut rng);
        let (other_rows, other_cols) = random_shape(&mut rng);
        let a = random_matrix(&mut rng, rows, cols);
        let b = random_matrix(&mut rng, other_rows, other_cols);
        let same_shape = a.shape() == b.shape();
        assert_eq!(a.checked_add(&b).is_ok(), same_shape);
        assert_eq!(a.checked_sub(&b).is_ok(), same_shape);
        assert_eq!(a.par_add(&b).is_ok(), same_shape);
        assert_eq!(a.checked_mul(&b).is_ok(), cols == other_rows);
        if let Err(err) = a.checked_mul(&b) {
            assert!(matches!(
                err,
                MatrixError::DimensionMismatch { op: Op::Mul, .. }
            ));
        }
    }
}

#[test]
fn test_parallel_agrees_with_sequential() {
    let mut rng = SmallRng::seed_from_u64(SEED + 7);
    let thread_pool = rayon::ThreadPoolBuilder::new()
        .num_threads(3)
        .build()
        .unwrap();
    for _ in 0..TRIALS {
        let (rows, inner) = random_shape(&mut rng);
        let cols = rng.random_range(0..40);
        let a = Matrix::from_fn(rows, inner, |_, _| rng.random_range(-1.0..1.0_f64));
        let b = Matrix::from_fn(inner, cols, |_, _| rng.random_range(-1.0..1.0_f64));
        let par = thread_pool.install(|| a.par_mul(&b)).unwrap();
        assert_eq!(par, a.checked_mul(&b).unwrap());
    }
}

#[cfg(feature = "slow_tests")]
#[test]
fn test_large_transpose() {
    let (rows, cols) = (3001, 1999);
    let mut m = Matrix::from_fn(rows, cols, |i, j| (i * cols + j) as u64);
    m.transpose();
    for i in 0..cols {
        for j in 0..rows {
            assert_eq!(m[(i, j)], (j * cols + i) as u64);
        }
    }
}
