//! Command-line interface for the Q-AOP route optimizer.
//!
//! Two subcommands are exposed: `solve` reads a network or solve request
//! from JSON and prints the optimized route, and `generate` writes a
//! synthetic Arctic network for experimentation.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod generate;
mod logging;
mod solve;

pub use error::CliError;

use generate::GenerateArgs;
use solve::SolveArgs;

pub(crate) const ARG_SOLVE_REQUEST: &str = "request-path";
pub(crate) const ARG_SOLVE_MODE: &str = "mode";
pub(crate) const ARG_SOLVE_TIMEOUT: &str = "timeout-secs";
pub(crate) const ARG_SOLVE_QUANTUM_DELAY: &str = "quantum-delay-secs";
pub(crate) const ENV_SOLVE_REQUEST: &str = "QAOP_CMDS_SOLVE_REQUEST_PATH";
pub(crate) const ARG_GENERATE_NODES: &str = "nodes";
pub(crate) const ARG_GENERATE_K_NEAREST: &str = "k-nearest";
pub(crate) const ARG_GENERATE_SEED: &str = "seed";
pub(crate) const ARG_GENERATE_OUT: &str = "out";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] describing the first failure. Argument parsing
/// failures are returned as [`CliError::ArgumentParsing`] so the caller can
/// let Clap render help and version output.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    logging::init(cli.log_level.as_deref())?;
    match cli.command {
        Command::Solve(args) => solve::run_solve(args),
        Command::Generate(args) => generate::run_generate(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "qaop",
    about = "Round-trip route optimization over great-circle distances",
    version
)]
struct Cli {
    /// Log filter, e.g. `debug` or `qaop_solver=trace` (overrides `QAOP_LOG_LEVEL`).
    #[arg(long, global = true, value_name = "filter")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a network and print the route with its KPIs as JSON.
    Solve(SolveArgs),
    /// Write a synthetic Arctic network to disk.
    Generate(GenerateArgs),
}

#[cfg(test)]
mod tests;
