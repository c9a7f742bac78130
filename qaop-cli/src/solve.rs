//! Solve command implementation for the `qaop` CLI.

use std::io::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use qaop_core::{Mode, Network, SolveRequest, SolveResult, Solver};
use qaop_service::SolveService;
use qaop_solver::{CheapestArcSolver, SolverConfig};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_SOLVE_MODE, ARG_SOLVE_QUANTUM_DELAY, ARG_SOLVE_REQUEST, ARG_SOLVE_TIMEOUT, CliError,
    ENV_SOLVE_REQUEST,
};

/// CLI arguments for the `solve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "solve",
    long_about = "Solve a round trip over a network of nodes. The input is a \
                 JSON-encoded solve request ({\"network\": ..., \"mode\": ...}) \
                 or a bare network document, which is solved in classical \
                 mode unless --mode says otherwise.",
    about = "Solve a round-trip routing request"
)]
#[ortho_config(prefix = "QAOP")]
pub(crate) struct SolveArgs {
    /// Path to a JSON file containing a solve request or a network.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Override the mode named in the request (`classical` or `quantum-mode`).
    #[arg(long = ARG_SOLVE_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) mode: Option<String>,
    /// Give up waiting for the solver after this many seconds.
    #[arg(long = ARG_SOLVE_TIMEOUT, value_name = "seconds")]
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    /// Simulated latency of the quantum-mode stub, in seconds.
    #[arg(long = ARG_SOLVE_QUANTUM_DELAY, value_name = "seconds")]
    #[serde(default)]
    pub(crate) quantum_delay_secs: Option<u64>,
}

impl SolveArgs {
    pub(crate) fn into_config(self) -> Result<SolveConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SolveConfig::try_from(merged)
    }
}

/// Resolved `solve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SolveConfig {
    /// Path to the JSON input.
    pub(crate) request_path: Utf8PathBuf,
    /// Mode overriding the one in the request.
    pub(crate) mode: Option<Mode>,
    /// How long to wait for the solver.
    pub(crate) timeout: Option<Duration>,
    /// Delay applied by the quantum-mode stub.
    pub(crate) quantum_delay: Duration,
}

impl SolveConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        match qaop_fs::is_regular_file(&self.request_path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::MissingSourceFile {
                field: ARG_SOLVE_REQUEST,
                path: self.request_path.clone(),
            }),
            Err(source) => Err(CliError::InspectSourcePath {
                field: ARG_SOLVE_REQUEST,
                path: self.request_path.clone(),
                source,
            }),
        }
    }

    fn solver_config(&self) -> SolverConfig {
        SolverConfig {
            quantum_delay: self.quantum_delay,
            ..SolverConfig::default()
        }
    }
}

impl TryFrom<SolveArgs> for SolveConfig {
    type Error = CliError;

    fn try_from(args: SolveArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_SOLVE_REQUEST,
            env: ENV_SOLVE_REQUEST,
        })?;
        let mode = args
            .mode
            .map(|name| name.parse::<Mode>())
            .transpose()
            .map_err(|source| CliError::InvalidMode { source })?;
        let quantum_delay = args
            .quantum_delay_secs
            .map_or(SolverConfig::default().quantum_delay, Duration::from_secs);
        let timeout = match args.timeout_secs {
            Some(0) => {
                return Err(CliError::ZeroTimeout {
                    field: ARG_SOLVE_TIMEOUT,
                });
            }
            secs => secs.map(Duration::from_secs),
        };
        Ok(Self {
            request_path,
            mode,
            timeout,
            quantum_delay,
        })
    }
}

/// Builds a solver instance for the current solve invocation.
pub(crate) trait SolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Arc<dyn Solver>;
}

pub(crate) struct DefaultSolveSolverBuilder;

impl SolveSolverBuilder for DefaultSolveSolverBuilder {
    fn build(&self, config: &SolveConfig) -> Arc<dyn Solver> {
        Arc::new(CheapestArcSolver::with_config(&config.solver_config()))
    }
}

pub(crate) fn run_solve(args: SolveArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_solve_with(args, &DefaultSolveSolverBuilder, &mut stdout)
}

pub(crate) fn run_solve_with(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let result = execute_solve(args, builder)?;
    write_solve_result(writer, &result)
}

fn execute_solve(
    args: SolveArgs,
    builder: &dyn SolveSolverBuilder,
) -> Result<SolveResult, CliError> {
    let config = resolve_solve_config(args)?;
    let mut request = load_solve_request(&config.request_path)?;
    if let Some(mode) = config.mode {
        request.mode = mode.as_str().to_owned();
    }
    let mode = request
        .validate()
        .map_err(|source| CliError::InvalidSolveRequest {
            path: config.request_path.clone(),
            source,
        })?;
    log::info!(
        "solving {} with {} nodes in {mode} mode",
        config.request_path,
        request.network.len()
    );

    let mut service = SolveService::from_shared(builder.build(&config));
    if let Some(after) = config.timeout {
        service = service.with_deadline(after);
    }
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    let started = Instant::now();
    let outcome = runtime.block_on(service.solve(request));
    // A timed-out worker cannot be interrupted; do not wait for it.
    runtime.shutdown_background();
    let result = outcome.map_err(|source| CliError::Service { source })?;
    log::info!(
        "solved in {:?}: {} stops, {} nm, {} h",
        started.elapsed(),
        result.route.len(),
        result.fuel_nm,
        result.block_time_h
    );
    Ok(result)
}

fn resolve_solve_config(args: SolveArgs) -> Result<SolveConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`SolveRequest`] or bare [`Network`] from disk.
///
/// A document with a top-level `network` key is a request; anything else is
/// decoded as a network and solved in classical mode.
pub(crate) fn load_solve_request(path: &Utf8Path) -> Result<SolveRequest, CliError> {
    let text = qaop_fs::read_utf8_file(path).map_err(|source| CliError::OpenSolveRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let parse_error = |source: serde_json::Error| CliError::ParseSolveRequest {
        path: path.to_path_buf(),
        source,
    };
    let document: serde_json::Value = serde_json::from_str(&text).map_err(parse_error)?;
    if document.get("network").is_some() {
        serde_json::from_value(document).map_err(parse_error)
    } else {
        let network: Network = serde_json::from_value(document).map_err(parse_error)?;
        Ok(SolveRequest::new(network, Mode::Classical))
    }
}

fn write_solve_result(writer: &mut dyn Write, result: &SolveResult) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(result).map_err(CliError::SerializeSolveResult)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SolveConfig, CliError> {
    let merged = SolveArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SolveConfig::try_from(merged)
}
