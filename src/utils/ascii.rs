/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! A plain-text format for matrices.
//!
//! A matrix is stored one row per line, with values separated by spaces and
//! written using their [`Display`] implementation. When loading, values may
//! be separated by any amount of whitespace, and blank lines or lines
//! starting with `#` are skipped. A file with no data lines is the
//! [empty](crate::Matrix::empty) matrix; as a consequence, a matrix with
//! rows but no columns does not survive a store/load round trip.

use super::create_parent_dir;
use crate::Matrix;
use anyhow::{anyhow, ensure, Context, Result};
use std::fmt::Display;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Stores `matrix` in ASCII format at `path`, creating parent directories as
/// needed.
pub fn store_ascii<T: Display>(matrix: &Matrix<T>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    create_parent_dir(path)?;
    let path_display = path.display();
    log::info!(
        "Storing {}x{} matrix in ASCII format at {}",
        matrix.rows(),
        matrix.cols(),
        path_display
    );
    let file = File::create(path)
        .with_context(|| format!("Could not create matrix file at {}", path_display))?;
    let mut file = BufWriter::new(file);

    for row in matrix.row_iter() {
        let mut values = row.iter();
        if let Some(first) = values.next() {
            write!(file, "{first}")
                .with_context(|| format!("Could not write matrix to {}", path_display))?;
        }
        for value in values {
            write!(file, " {value}")
                .with_context(|| format!("Could not write matrix to {}", path_display))?;
        }
        writeln!(file).with_context(|| format!("Could not write matrix to {}", path_display))?;
    }
    file.flush()
        .with_context(|| format!("Could not flush {}", path_display))?;
    Ok(())
}

/// Loads a matrix in ASCII format from `path`.
///
/// Fails if a value cannot be parsed or if two data lines contain a
/// different number of values.
pub fn load_ascii<T>(path: impl AsRef<Path>) -> Result<Matrix<T>>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    let path = path.as_ref();
    let path_display = path.display();
    log::info!("Loading ASCII matrix from {}", path_display);
    let file = File::open(path).with_context(|| format!("Could not open {}", path_display))?;
    let reader = BufReader::new(file);

    let mut data = Vec::new();
    let mut rows = 0;
    let mut cols = None;
    for (i, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("Error reading line {} of {}", i + 1, path_display))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let start = data.len();
        for (j, token) in line.split_whitespace().enumerate() {
            data.push(token.parse::<T>().map_err(|e| {
                anyhow!(
                    "Error parsing value {} of line {} of {}: {}",
                    j + 1,
                    i + 1,
                    path_display,
                    e
                )
            })?);
        }
        let width = data.len() - start;
        match cols {
            None => cols = Some(width),
            Some(cols) => ensure!(
                width == cols,
                "Line {} of {} has {} values, but previous lines have {}",
                i + 1,
                path_display,
                width,
                cols
            ),
        }
        rows += 1;
    }

    let cols = cols.unwrap_or(0);
    log::debug!("Loaded {}x{} matrix from {}", rows, cols, path_display);
    Ok(Matrix::from_vec(rows, cols, data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_and_blank_lines() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("m.txt");
        std::fs::write(&path, "# a 2x3 matrix\n\n1 2   3\n\t4 5 6 \n")?;
        let m = load_ascii::<i32>(&path)?;
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
        Ok(())
    }

    #[test]
    fn test_empty_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.txt");
        std::fs::write(&path, "# nothing here\n")?;
        let m = load_ascii::<f64>(&path)?;
        assert_eq!(m.shape(), (0, 0));
        Ok(())
    }
}
