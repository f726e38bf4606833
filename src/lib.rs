/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
// for now we don't need any new feature but we might remove this in the future
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_pub)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod element;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod par;
pub mod transpose;
pub mod utils;

#[cfg(feature = "cli")]
pub mod cli;

pub use element::Element;
pub use error::MatrixError;
pub use matrix::Matrix;

pub mod prelude {
    pub use crate::element::Element;
    pub use crate::error::{Dims, MatrixError, Op};
    pub use crate::matrix::Matrix;
    pub use crate::utils::{load_ascii, store_ascii};
}

#[cfg(feature = "cli")]
pub mod build_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));

    pub fn version_string() -> String {
        format!(
            "{}
git info: {} {} {}
build info: built on {} for {} with {}",
            PKG_VERSION,
            GIT_VERSION.unwrap_or(""),
            GIT_COMMIT_HASH.unwrap_or(""),
            match GIT_DIRTY {
                None => "",
                Some(true) => "(dirty)",
                Some(false) => "(clean)",
            },
            BUILT_TIME_UTC,
            TARGET,
            RUSTC_VERSION
        )
    }
}
