/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{ElemArg, ElemType};
use crate::utils::{load_ascii, store_ascii};
use anyhow::{Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

pub const COMMAND_NAME: &str = "transpose";

#[derive(Args, Debug)]
#[command(about = "Transposes a matrix stored in ASCII format.", long_about = None)]
struct CliArgs {
    /// The matrix to transpose.
    input: PathBuf,

    #[arg(short, long)]
    /// Where to store the transposed matrix.
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
        ElemType::Int => transpose::<i64>(args),
        ElemType::Float => transpose::<f64>(args),
    }
}

fn transpose<T>(args: CliArgs) -> Result<()>
where
    T: Clone + FromStr + Display,
    <T as FromStr>::Err: Display,
{
    let mut matrix = load_ascii::<T>(&args.input)
        .with_context(|| format!("Could not load {}", args.input.display()))?;
    matrix.transpose();
    store_ascii(&matrix, &args.output)
}
