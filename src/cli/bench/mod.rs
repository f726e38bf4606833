/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::{Element, Matrix};
use anyhow::{bail, Result};
use clap::{ArgMatches, Args, Command};
use rand::rngs::SmallRng;
use rand::Rng;

pub mod mul;
pub mod transpose;

pub const COMMAND_NAME: &str = "bench";

/// Shared CLI arguments for benchmarks.
#[derive(Args, Debug)]
pub struct BenchArgs {
    #[arg(short = 'R', long, default_value_t = 1)]
    /// Number of repeats (usually to warm up the cache).
    pub repeats: usize,

    #[arg(short, long, default_value_t = 0)]
    /// The seed of the pseudorandom number generator filling the matrices.
    pub seed: u64,
}

/// Elements that can be drawn at random to fill benchmark matrices.
pub trait RandomElement: Element {
    fn random(rng: &mut SmallRng) -> Self;
}

impl RandomElement for i64 {
    fn random(rng: &mut SmallRng) -> Self {
        rng.random_range(-1000..1000)
    }
}

impl RandomElement for f64 {
    fn random(rng: &mut SmallRng) -> Self {
        rng.random_range(-1.0..1.0)
    }
}

/// Returns a `rows` x `cols` matrix of random elements.
pub fn random_matrix<T: RandomElement>(rows: usize, cols: usize, rng: &mut SmallRng) -> Matrix<T> {
    Matrix::from_fn(rows, cols, |_, _| T::random(rng))
}

pub fn cli(command: Command) -> Command {
    let sub_command = Command::new(COMMAND_NAME)
        .about("A few benchmark utilities.")
        .subcommand_required(true)
        .arg_required_else_help(true);
    let sub_command = mul::cli(sub_command);
    let sub_command = transpose::cli(sub_command);
    command.subcommand(sub_command)
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    match submatches.subcommand() {
        Some((mul::COMMAND_NAME, sub_m)) => mul::main(sub_m),
        Some((transpose::COMMAND_NAME, sub_m)) => transpose::main(sub_m),
        Some((command_name, _)) => bail!("Unknown command: {:?}", command_name),
        None => bail!("No command given for bench"),
    }
}
