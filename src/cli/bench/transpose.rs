/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{random_matrix, BenchArgs, RandomElement};
use crate::cli::{ElemArg, ElemType};
use anyhow::Result;
use clap::{ArgMatches, Args, Command, FromArgMatches};
use dsi_progress_logger::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const COMMAND_NAME: &str = "transpose";

#[derive(Args, Debug)]
#[command(about = "Benchmarks in-place transposition of a random matrix.", long_about = None)]
struct CliArgs {
    #[arg(long, default_value_t = 4096)]
    /// The number of rows of the matrix.
    rows: usize,

    #[arg(long, default_value_t = 4096)]
    /// The number of columns of the matrix.
    cols: usize,

    #[clap(flatten)]
    bench: BenchArgs,

    #[clap(flatten)]
    elem: ElemArg,
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;

    match args.elem.elem {
        ElemType::Int => bench::<i64>(args),
        ElemType::Float => bench::<f64>(args),
    }
}

fn bench<T: RandomElement>(args: CliArgs) -> Result<()> {
    let mut rng = SmallRng::seed_from_u64(args.bench.seed);
    let mut m = random_matrix::<T>(args.rows, args.cols, &mut rng);

    let mut pl = ProgressLogger::default();
    pl.display_memory(true)
        .item_name("element")
        .local_speed(true)
        .expected_updates(Some(args.bench.repeats * m.len()));
    pl.start(format!("Transposing {}x{}...", args.rows, args.cols));

    for _ in 0..args.bench.repeats {
        m.transpose();
        pl.update_with_count(m.len());
    }
    pl.done();

    std::hint::black_box(&m);
    Ok(())
}
