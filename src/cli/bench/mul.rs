/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{random_matrix, BenchArgs, RandomElement};
use crate::cli::{get_thread_pool, ElemArg, ElemType, NumThreadsArg};
use anyhow::Result;
use clap::{ArgMatches, Args, Command, FromArgMatches};
use dsi_progress_logger::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

pub const COMMAND_NAME: &str = "mul";

#[derive(Args, Debug)]
#[command(about = "Benchmarks the product of two random matrices.", long_about = None)]
struct CliArgs {
    #[arg(long, default_value_t = 512)]
    /// The number of rows of the left operand.
    rows: usize,

    #[arg(long, default_value_t = 512)]
    /// The number of columns of the left operand, which is also the number
    /// of rows of the right operand.
    inner: usize,

    #[arg(long, default_value_t = 512)]
    /// The number of columns of the right operand.
    cols: usize,

    #[arg(long)]
    /// Benchmarks the parallel product.
    par: bool,

    #[clap(flatten)]
    num_threads: NumThreadsArg,

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
    let a = random_matrix::<T>(args.rows, args.inner, &mut rng);
    let b = random_matrix::<T>(args.inner, args.cols, &mut rng);
    let thread_pool = get_thread_pool(args.num_threads.num_threads)?;

    let mut pl = ProgressLogger::default();
    pl.item_name("product")
        .expected_updates(Some(args.bench.repeats));
    pl.start(format!(
        "Multiplying {}x{} by {}x{} ({})...",
        args.rows,
        args.inner,
        args.inner,
        args.cols,
        if args.par { "parallel" } else { "sequential" }
    ));

    let start = std::time::Instant::now();
    for _ in 0..args.bench.repeats {
        let product = match args.par {
            true => thread_pool.install(|| a.par_mul(&b))?,
            false => a.checked_mul(&b)?,
        };
        std::hint::black_box(product);
        pl.update();
    }
    pl.done();

    if let Some(gops) = throughput(
        args.rows,
        args.inner,
        args.cols,
        args.bench.repeats,
        start.elapsed(),
    ) {
        log::info!("{:.3} Gop/s", gops);
    }

    Ok(())
}

/// Returns the number of billions of multiply-add operations per second, or
/// `None` if nothing was measured.
fn throughput(
    rows: usize,
    inner: usize,
    cols: usize,
    repeats: usize,
    elapsed: std::time::Duration,
) -> Option<f64> {
    let elapsed = elapsed.as_secs_f64();
    if repeats == 0 || elapsed == 0.0 {
        return None;
    }
    // in floating point, as the product of the extents may overflow
    let ops = 2.0 * rows as f64 * inner as f64 * cols as f64 * repeats as f64;
    Some(ops / elapsed / 1E9)
}
