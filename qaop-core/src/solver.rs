use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::distance::DistanceError;
use crate::{CoordinateField, Mode, Network, NodeId};

fn default_mode_name() -> String {
    Mode::Classical.as_str().to_owned()
}

/// Parameters for a solve request.
///
/// The mode is kept as the caller sent it so that an unrecognised value
/// surfaces as [`SolveError::UnknownMode`] from [`SolveRequest::validate`]
/// rather than as a decoding failure. It defaults to `classical`.
///
/// # Examples
/// ```rust
/// use qaop_core::{Mode, Network, Node, SolveRequest};
///
/// let request: SolveRequest = serde_json::from_str(
///     r#"{"network": {"nodes": [{"id": 1, "lat": 70.0, "lon": -150.0}]}}"#,
/// )?;
/// assert_eq!(request.mode, "classical");
/// assert_eq!(request.validate(), Ok(Mode::Classical));
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Nodes to route over.
    pub network: Network,
    /// Requested mode name.
    #[serde(default = "default_mode_name")]
    pub mode: String,
}

impl SolveRequest {
    /// Construct a request for a known mode.
    #[must_use]
    pub fn new(network: Network, mode: Mode) -> Self {
        Self {
            network,
            mode: mode.as_str().to_owned(),
        }
    }

    /// Parse the requested mode.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnknownMode`] for anything other than
    /// `classical` or `quantum-mode`.
    pub fn parsed_mode(&self) -> Result<Mode, SolveError> {
        self.mode.parse()
    }

    /// Validate the whole request before any computation and return the
    /// parsed mode.
    ///
    /// An empty network is reported first, then an unknown mode, then
    /// per-node problems.
    ///
    /// # Errors
    ///
    /// Returns the first [`SolveError`] found.
    pub fn validate(&self) -> Result<Mode, SolveError> {
        if self.network.is_empty() {
            return Err(SolveError::EmptyNetwork);
        }
        let mode = self.parsed_mode()?;
        self.network.validate()?;
        Ok(mode)
    }
}

/// Diagnostic information about a solve.
///
/// Not part of the wire payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Diagnostics {
    /// Wall-clock time spent inside the solver, including any mode delay.
    pub solve_time: Duration,
    /// Number of nodes routed.
    pub nodes_evaluated: u64,
    /// Number of auxiliary edges received and ignored.
    pub ignored_edges: u64,
}

/// Response from a successful solve.
///
/// `route` lists node ids, starts and ends at the first node, and has
/// `n + 1` entries. KPIs are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    /// Closed visiting order by node id.
    pub route: Vec<NodeId>,
    /// Distance travelled, in nautical miles.
    pub fuel_nm: f64,
    /// Transit duration, in hours.
    pub block_time_h: f64,
    /// Mode that produced the result.
    pub mode: Mode,
    /// Timing and input statistics.
    #[serde(skip)]
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The network had no nodes.
    #[error("network must contain at least one node")]
    EmptyNetwork,
    /// The construction heuristic could not place every node.
    #[error("no solution found: {reason}")]
    NoSolutionFound {
        /// What went wrong during construction.
        reason: String,
    },
    /// The requested mode is not recognised.
    #[error("unknown mode {mode:?} (expected \"classical\" or \"quantum-mode\")")]
    UnknownMode {
        /// Mode string as received.
        mode: String,
    },
    /// A coordinate was outside its valid range or not finite.
    #[error("node {id} has invalid {field} {value}")]
    InvalidCoordinate {
        /// Node carrying the coordinate.
        id: NodeId,
        /// Offending field.
        field: CoordinateField,
        /// Offending value.
        value: f64,
    },
    /// Two nodes shared an id.
    #[error("node id {id} appears more than once")]
    DuplicateNodeId {
        /// Repeated id.
        id: NodeId,
    },
    /// The distance model failed.
    #[error("distance computation failed: {0}")]
    Distance(#[from] DistanceError),
}

/// Compute a closed route and its KPIs for a request.
///
/// Implementations validate eagerly and never return partial results.
/// Solvers must be `Send + Sync` so independent requests can run on separate
/// worker threads.
pub trait Solver: Send + Sync {
    /// Solve a request, producing a result or an error.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] when the request is invalid or no tour can
    /// be built.
    fn solve(&self, request: &SolveRequest) -> Result<SolveResult, SolveError>;
}
