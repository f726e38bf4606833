/*
 * SPDX-FileCopyrightText: 2026 The dense-matrix developers
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Command-line interface structs, functions, and methods.
//!
//! Each module corresponds to a command (or a group of commands), and
//! provides a `cli` function adding the command to a [`Command`] and a `main`
//! function executing it.

use crate::build_info;
use crate::utils::load_ascii;
use crate::{Element, Matrix};
use anyhow::{bail, ensure, Context, Result};
use clap::{Args, Command, ValueEnum};
use jiff::fmt::friendly::{Designator, Spacing, SpanPrinter};
use jiff::SpanRound;
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

pub mod add;
pub mod bench;
pub mod mul;
pub mod sub;
pub mod transpose;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
/// The element types supported by the command-line tools.
pub enum ElemType {
    /// 64-bit signed integers.
    Int,
    /// 64-bit floating-point numbers.
    Float,
}

/// Shared CLI arguments for commands that read or generate matrices.
#[derive(Args, Debug)]
pub struct ElemArg {
    #[arg(short = 'e', long = "elem", value_enum, default_value_t = ElemType::Float)]
    /// The type of the matrix elements.
    pub elem: ElemType,
}

/// Parses the number of threads from a string.
///
/// This function is meant to be used with `#[arg(...,  value_parser =
/// num_threads_parser)]`.
pub fn num_threads_parser(arg: &str) -> Result<usize> {
    let num_threads = arg.parse::<usize>()?;
    ensure!(num_threads > 0, "Number of threads must be greater than 0");
    Ok(num_threads)
}

/// Shared CLI arguments for commands that specify a number of threads.
#[derive(Args, Debug)]
pub struct NumThreadsArg {
    #[arg(short = 'j', long, default_value_t = rayon::current_num_threads().max(1), value_parser = num_threads_parser)]
    /// The number of threads to use for parallel operations.
    pub num_threads: usize,
}

/// Creates a threadpool with the given number of threads.
pub fn get_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .context("Failed to create thread pool")
}

/// Loads the two operands of a binary operation.
pub fn load_operands<T>(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<(Matrix<T>, Matrix<T>)>
where
    T: Element + FromStr,
    <T as FromStr>::Err: Display,
{
    let left = load_ascii(left.as_ref())
        .with_context(|| format!("Could not load left operand {}", left.as_ref().display()))?;
    let right = load_ascii(right.as_ref())
        .with_context(|| format!("Could not load right operand {}", right.as_ref().display()))?;
    Ok((left, right))
}

/// Formats a duration the same way the logger prints elapsed times.
fn format_elapsed(elapsed: Duration) -> Result<String> {
    let printer = SpanPrinter::new()
        .spacing(Spacing::None)
        .designator(Designator::Compact);
    let span = jiff::Span::new()
        .seconds(elapsed.as_secs() as i64)
        .milliseconds(elapsed.subsec_millis() as i64)
        .round(
            SpanRound::new()
                .largest(jiff::Unit::Day)
                .smallest(jiff::Unit::Millisecond)
                .days_are_24_hours(),
        )?;
    Ok(printer.span_to_string(&span))
}

/// Installs an [`env_logger`] logger printing a timestamp, the elapsed time
/// since the start of the program, the level, the thread, and the target.
///
/// The default level is `info`; it can be changed with `RUST_LOG`.
pub fn init_envlogger() -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

    let start = std::time::Instant::now();
    builder.format(move |buf, record| {
        let Ok(ts) = jiff::Timestamp::try_from(SystemTime::now()) else {
            return Err(std::io::Error::other("Failed to get timestamp"));
        };
        let style = buf.default_level_style(record.level());
        let elapsed = format_elapsed(start.elapsed()).map_err(std::io::Error::other)?;
        writeln!(
            buf,
            "{} {} {style}{}{style:#} [{:?}] {} - {}",
            ts.strftime("%F %T%.3f"),
            elapsed,
            record.level(),
            std::thread::current().id(),
            record.target(),
            record.args()
        )
    });
    builder.try_init()?;
    Ok(())
}

/// The entry point of the command-line interface.
pub fn main<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let start = std::time::Instant::now();

    let command = Command::new("dense-matrix")
        .about("Tools to combine, transpose, and benchmark dense matrices stored in ASCII format.")
        .version(build_info::version_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .after_help(
            "Environment (noteworthy environment variables used):
RUST_LOG: configuration for env_logger, pass `info` to see what is being loaded
  and stored, `debug` for more details. You can also use
  `RUST_LOG=dense_matrix=debug` to see only the logs of this crate.
",
        );
    let command = add::cli(command);
    let command = sub::cli(command);
    let command = mul::cli(command);
    let command = transpose::cli(command);
    let command = bench::cli(command);
    let command = command.display_order(0); // sort args alphabetically

    let matches = command.get_matches_from(args);
    match matches.subcommand() {
        Some((add::COMMAND_NAME, sub_m)) => add::main(sub_m),
        Some((sub::COMMAND_NAME, sub_m)) => sub::main(sub_m),
        Some((mul::COMMAND_NAME, sub_m)) => mul::main(sub_m),
        Some((transpose::COMMAND_NAME, sub_m)) => transpose::main(sub_m),
        Some((bench::COMMAND_NAME, sub_m)) => bench::main(sub_m),
        // clap should catch this
        Some((command_name, _)) => bail!("Unknown command: {:?}", command_name),
        None => bail!("No command given"),
    }?;

    log::info!("The command took {}", format_elapsed(start.elapsed())?);

    Ok(())
}
