//! Error types emitted by the `qaop` CLI.
//!
//! Keep this error type reasonably small, as many CLI helpers return
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use qaop_core::SolveError;
use qaop_netgen::GenerateError;
use qaop_service::ServiceError;
use thiserror::Error;

/// Errors emitted by the `qaop` CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Long flag name.
        field: &'static str,
        /// Environment variable that can supply the value.
        env: &'static str,
    },
    /// The `--mode` override named an unknown mode.
    #[error("invalid --mode: {source}")]
    InvalidMode {
        /// Parse failure.
        #[source]
        source: SolveError,
    },
    /// A timeout of zero would fail every solve before it starts.
    #[error("--{field} must be at least 1 second (omit it to wait indefinitely)")]
    ZeroTimeout {
        /// Long flag name.
        field: &'static str,
    },
    /// A referenced input path does not exist on disk or is not a file.
    #[error("{field} path {path:?} does not exist or is not a file")]
    MissingSourceFile {
        /// Argument that named the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Argument that named the path.
        field: &'static str,
        /// Path as given.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Reading the solve request file failed.
    #[error("failed to open solve request at {path:?}: {source}")]
    OpenSolveRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// Solve request JSON could not be decoded.
    #[error("failed to parse solve request JSON at {path:?}: {source}")]
    ParseSolveRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// The solve request payload failed validation.
    #[error("solve request in {path:?} failed validation: {source}")]
    InvalidSolveRequest {
        /// Request path.
        path: Utf8PathBuf,
        /// First validation failure.
        #[source]
        source: SolveError,
    },
    /// The async runtime could not be started.
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    /// The solve service failed or timed out.
    #[error("solver failed: {source}")]
    Service {
        /// Service failure.
        #[source]
        source: ServiceError,
    },
    /// Serializing the solve result failed.
    #[error("failed to serialize solve result: {0}")]
    SerializeSolveResult(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Network generation failed.
    #[error("failed to generate network: {0}")]
    Generate(#[from] GenerateError),
    /// A logger was already installed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[from] log::SetLoggerError),
}
