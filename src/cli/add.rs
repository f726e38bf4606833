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

pub const COMMAND_NAME: &str = "add";

#[derive(Args, Debug)]
#[command(about = "Adds two matrices stored in ASCII format.", long_about = None)]
struct CliArgs {
    /// The left operand.
    left: PathBuf,
    /// The right operand.
    right: PathBuf,

    #[arg(short, long)]
    /// Where to store the sum.
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
        ElemType::Int => add::<i64>(args),
        ElemType::Float => add::<f64>(args),
    }
}

fn add<T>(args: CliArgs) -> Result<()>
where
    T: Element + FromStr + Display,
    <T as FromStr>::Err: Display,
{
    let (left, right) = load_operands::<T>(&args.left, &args.right)?;
    let sum = left.checked_add(&right).with_context(|| {
        format!(
            "Cannot add {} and {}",
            args.left.display(),
            args.right.display()
        )
    })?;
    store_ascii(&sum, &args.output)
}
