/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{get_thread_pool, load_operands, ElemArg, ElemType, NumThreadsArg};
use crate::utils::store_ascii;
use crate::Element;
use anyhow::{Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const COMMAND_NAME: &str = "mul";

#[derive(Args, Debug)]
#[command(about = "Multiplies two matrices stored in ASCII format.", long_about = None)]
struct CliArgs {
    /// The left operand.
    left: PathBuf,
    /// The right operand.
    right: PathBuf,

    #[arg(short, long)]
    /// Where to store the product.
    output: PathBuf,

    #[arg(long)]
    /// Computes the product in parallel.
    par: bool,

    #[clap(flatten)]
    num_threads: NumThreadsArg,

    #[clap(flatten)]
    elem: ElemArg,
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;

    match args.elem.elem {
        ElemType::Int => mul::<i64>(args),
        ElemType::Float => mul::<f64>(args),
    }
}

fn mul<T>(args: CliArgs) -> Result<()>
where
    T: Element + FromStr + Display,
    <T as FromStr>::Err: Display,
{
    let (left, right) = load_operands::<T>(&args.left, &args.right)?;
    let product = if args.par {
        log::info!(
            "Multiplying in parallel using {} threads",
            args.num_threads.num_threads
        );
        get_thread_pool(args.num_threads.num_threads)?.install(|| left.par_mul(&right))
    } else {
        left.checked_mul(&right)
    };
    let product = product.with_context(|| {
        format!(
            "Cannot multiply {} by {}",
            args.left.display(),
            args.right.display()
        )
    })?;
    store_ascii(&product, &args.output)
}
