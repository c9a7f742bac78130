//! Shared test harness modules for the `qaop` CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::generate::{GenerateConfig, run_generate_with};
use crate::solve::{
    DefaultSolveSolverBuilder, SolveConfig, SolveSolverBuilder, config_from_layers_for_test,
    load_solve_request, run_solve_with,
};

mod helpers;
mod solve_steps;
