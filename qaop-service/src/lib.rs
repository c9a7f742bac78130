//! Async dispatch for synchronous solvers.
//!
//! [`SolveService`] runs each solve on Tokio's blocking pool so a slow mode
//! (the quantum-mode stub sleeps on its thread) never stalls the runtime that
//! dispatched it. An optional deadline bounds how long a caller waits; the
//! solver itself cannot be interrupted, so a timed-out worker keeps running
//! in the background until it finishes.

#![forbid(unsafe_code)]

use std::sync::Arc;
use std::time::Duration;

use qaop_core::{SolveError, SolveRequest, SolveResult, Solver};
use thiserror::Error;
use tokio::task::JoinSet;

/// Errors returned by [`SolveService`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// The solver rejected the request or found no tour.
    #[error(transparent)]
    Solve(#[from] SolveError),
    /// The deadline passed before the solver returned.
    #[error("solve did not finish within {after:?}")]
    Timeout {
        /// Configured deadline.
        after: Duration,
    },
    /// The worker panicked or was cancelled.
    #[error("solver worker failed: {0}")]
    WorkerFailed(String),
}

/// Settings for [`SolveService`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Longest a caller waits for one solve; `None` waits indefinitely.
    pub deadline: Option<Duration>,
}

/// Dispatches solves to worker threads.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use qaop_core::{Mode, Network, Node, SolveRequest};
/// use qaop_service::SolveService;
/// use qaop_solver::CheapestArcSolver;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
/// let service = SolveService::new(CheapestArcSolver::new()).with_deadline(Duration::from_secs(5));
/// let network = Network::from_nodes(vec![Node::new(1, 70.0, -150.0)]);
/// let result = runtime.block_on(service.solve(SolveRequest::new(network, Mode::Classical)))?;
/// assert_eq!(result.route, vec![1, 1]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SolveService<S: ?Sized> {
    solver: Arc<S>,
    config: ServiceConfig,
}

impl<S: ?Sized> Clone for SolveService<S> {
    fn clone(&self) -> Self {
        Self {
            solver: Arc::clone(&self.solver),
            config: self.config,
        }
    }
}

impl<S> SolveService<S>
where
    S: Solver + 'static,
{
    /// Wrap a solver with no deadline.
    pub fn new(solver: S) -> Self {
        Self::from_shared(Arc::new(solver))
    }
}

impl<S> SolveService<S>
where
    S: Solver + ?Sized + 'static,
{
    /// Wrap an already shared solver, possibly a trait object, with no
    /// deadline.
    pub const fn from_shared(solver: Arc<S>) -> Self {
        Self::with_config(solver, ServiceConfig { deadline: None })
    }

    /// Wrap a shared solver with explicit settings.
    pub const fn with_config(solver: Arc<S>, config: ServiceConfig) -> Self {
        Self { solver, config }
    }

    /// Bound each solve by `deadline`.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.config.deadline = Some(deadline);
        self
    }

    /// Configured deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.config.deadline
    }

    /// Solve one request on a blocking worker.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Solve`] for solver errors,
    /// [`ServiceError::Timeout`] when the deadline passes first and
    /// [`ServiceError::WorkerFailed`] if the worker panics.
    pub async fn solve(&self, request: SolveRequest) -> Result<SolveResult, ServiceError> {
        dispatch(Arc::clone(&self.solver), self.config.deadline, request).await
    }

    /// Solve independent requests concurrently.
    ///
    /// Results come back in the order the requests were given; each request
    /// gets its own deadline.
    pub async fn solve_all(
        &self,
        requests: Vec<SolveRequest>,
    ) -> Vec<Result<SolveResult, ServiceError>> {
        let mut tasks = JoinSet::new();
        let count = requests.len();
        for (index, request) in requests.into_iter().enumerate() {
            let solver = Arc::clone(&self.solver);
            let deadline = self.config.deadline;
            tasks.spawn(async move { (index, dispatch(solver, deadline, request).await) });
        }

        let mut slots: Vec<Option<Result<SolveResult, ServiceError>>> =
            (0..count).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => {
                    if let Some(slot) = slots.get_mut(index) {
                        *slot = Some(outcome);
                    }
                }
                Err(err) => log::error!("dispatch task failed: {err}"),
            }
        }
        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(ServiceError::WorkerFailed(
                        "dispatch task did not report a result".to_owned(),
                    ))
                })
            })
            .collect()
    }
}

async fn dispatch<S>(
    solver: Arc<S>,
    deadline: Option<Duration>,
    request: SolveRequest,
) -> Result<SolveResult, ServiceError>
where
    S: Solver + ?Sized + 'static,
{
    let worker = tokio::task::spawn_blocking(move || solver.solve(&request));
    let joined = match deadline {
        Some(after) => tokio::time::timeout(after, worker).await.map_err(|_| {
            log::warn!("solve exceeded deadline of {after:?}; worker left to finish");
            ServiceError::Timeout { after }
        })?,
        None => worker.await,
    };
    let outcome = joined.map_err(|err| {
        log::error!("solver worker failed: {err}");
        ServiceError::WorkerFailed(err.to_string())
    })?;
    outcome.map_err(ServiceError::from)
}
