/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! The bound on matrix elements used by arithmetic.

use num_traits::Num;

/// A numeric type that can be stored in a [`Matrix`](crate::Matrix) and
/// combined by the arithmetic operations.
///
/// The trait is implemented automatically for every `Copy` type with
/// [`Num`] arithmetic and a [`Default`] value, which covers all primitive
/// signed and unsigned integers and floating-point types. [`Default`] fills
/// newly sized matrices; sums of products start from
/// [`Zero::zero`](num_traits::Zero::zero).
///
/// `Send + Sync` are required so that the [parallel](crate::par) operations
/// can share operands across threads.
pub trait Element: Num + Copy + Default + Send + Sync {}

impl<T: Num + Copy + Default + Send + Sync> Element for T {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_element<T: Element>() {}

    #[test]
    fn test_primitives_are_elements() {
        assert_element::<i8>();
        assert_element::<i32>();
        assert_element::<i64>();
        assert_element::<u8>();
        assert_element::<u32>();
        assert_element::<usize>();
        assert_element::<f32>();
        assert_element::<f64>();
    }
}
