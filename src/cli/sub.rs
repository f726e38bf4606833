/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{load_operands, ElemArg, ElemType};
use crate::utils::store_ascii;
use crate::Element;
use anyhow::{Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const COMMAND_NAME: &str = "sub";

#[derive(Args, Debug)]
#[command(about = "Subtracts a matrix from another, both stored in ASCII format.", long_about = None)]
struct CliArgs {
    /// The minuend.
    left: PathBuf,
    /// The subtrahend.
    right: PathBuf,

    #[arg(short, long)]
    /// Where to store the difference.
    output: PathBuf,

    #[clap(flatten)]
    elem: ElemArg,
}

pub fn cli(command: Command) -> Command {
    command.subcommand(CliArgs::augment_args(Command::new(COMMAND_NAME)))
}

pub fn main(submatches: &ArgMatches) -> Result<()> {
    let args = CliArgs::from_arg_matches(submatches)?;

    match args.elem.elem {
        ElemType::Int => sub::<i64>(args),
        ElemType::Float => sub::<f64>(args),
    }
}

fn sub<T>(args: CliArgs) -> Result<()>
where
    T: Element + FromStr + Display,
    <T as FromStr>::Err: Display,
{
    let (left, right) = load_operands::<T>(&args.left, &args.right)?;
    let difference = left.checked_sub(&right).with_context(|| {
        format!(
            "Cannot subtract {} from {}",
            args.right.display(),
            args.left.display()
        )
    })?;
    store_ascii(&difference, &args.output)
}
