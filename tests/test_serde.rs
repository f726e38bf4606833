/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![cfg(feature = "serde")]

use anyhow::Result;
use dense_matrix::Matrix;

#[test]
fn test_json_layout() -> Result<()> {
    let m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4])?;
    let json = serde_json::to_string(&m)?;
    assert_eq!(json, r#"{"rows":2,"cols":2,"data":[1,2,3,4]}"#);
    let back: Matrix<i32> = serde_json::from_str(&json)?;
    assert_eq!(back, m);
    Ok(())
}

#[test]
fn test_invalid_length_is_rejected() {
    let err = serde_json::from_str::<Matrix<i32>>(r#"{"rows":2,"cols":3,"data":[1,2,3,4]}"#)
        .unwrap_err();
    assert!(
        err.to_string()
            .contains("Tried to build a 2x3 matrix over a buffer of length 4"),
        "{err}"
    );
}
