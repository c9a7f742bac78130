//! `CheapestArcSolver` implementation.
//!
//! A solve runs entirely on the calling thread. The quantum-mode stub may
//! block that thread for its configured delay.

use std::time::{Duration, Instant};

use qaop_core::{
    CRUISE_SPEED_KTS, Diagnostics, DistanceModel, HaversineDistanceModel, ModeStrategies,
    ModeStrategy, Network, NodeId, QUANTUM_DELAY, QUANTUM_MULTIPLIER, SolveError, SolveRequest,
    SolveResult, Solver, Tour,
};

use crate::construction::{
    CheapestArcConstructor, DEFAULT_COST_SCALE, NoImprovement, TourConstructor, TourImprover,
};

/// Position every tour starts from.
const START_POSITION: usize = 0;

/// Configuration for [`CheapestArcSolver`].
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Cruise speed used to derive block time, in knots.
    pub cruise_speed_kts: f64,
    /// Multiplier applied to distances before integer arc comparison.
    pub cost_scale: f64,
    /// Simulated latency of the quantum-mode stub.
    pub quantum_delay: Duration,
    /// KPI multiplier applied by the quantum-mode stub.
    pub quantum_multiplier: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            cruise_speed_kts: CRUISE_SPEED_KTS,
            cost_scale: DEFAULT_COST_SCALE,
            quantum_delay: QUANTUM_DELAY,
            quantum_multiplier: QUANTUM_MULTIPLIER,
        }
    }
}

impl SolverConfig {
    /// Mode strategies described by this configuration.
    #[must_use]
    pub fn strategies(&self) -> ModeStrategies {
        ModeStrategies::new(
            self.cruise_speed_kts,
            self.quantum_delay,
            self.quantum_multiplier,
        )
    }
}

/// Greedy round-trip solver.
///
/// The solver is generic over its seams: the distance model, the tour
/// constructor and the post-construction improver. Mode handling is
/// delegated to a [`ModeStrategies`] registry.
///
/// # Examples
/// ```
/// use qaop_core::{Mode, Network, Node, SolveRequest, Solver};
/// use qaop_solver::CheapestArcSolver;
///
/// let network = Network::from_nodes(vec![
///     Node::new(0, 70.0, -150.0),
///     Node::new(1, 71.0, -149.0),
///     Node::new(2, 72.0, -148.0),
/// ]);
/// let result = CheapestArcSolver::new().solve(&SolveRequest::new(network, Mode::Classical))?;
/// assert_eq!(result.route, vec![0, 1, 2, 0]);
/// assert_eq!(result.fuel_nm, 252.55);
/// assert_eq!(result.block_time_h, 1.01);
/// # Ok::<(), qaop_core::SolveError>(())
/// ```
#[derive(Debug)]
pub struct CheapestArcSolver<
    D = HaversineDistanceModel,
    C = CheapestArcConstructor,
    I = NoImprovement,
> where
    D: DistanceModel,
    C: TourConstructor,
    I: TourImprover,
{
    distance_model: D,
    constructor: C,
    improver: I,
    strategies: ModeStrategies,
}

impl CheapestArcSolver {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&SolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub fn with_config(config: &SolverConfig) -> Self {
        Self::with_parts(
            HaversineDistanceModel,
            CheapestArcConstructor::new(config.cost_scale),
            NoImprovement,
            config.strategies(),
        )
    }
}

impl Default for CheapestArcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl<D, C, I> CheapestArcSolver<D, C, I>
where
    D: DistanceModel,
    C: TourConstructor,
    I: TourImprover,
{
    /// Assemble a solver from explicit components.
    pub const fn with_parts(
        distance_model: D,
        constructor: C,
        improver: I,
        strategies: ModeStrategies,
    ) -> Self {
        Self {
            distance_model,
            constructor,
            improver,
            strategies,
        }
    }

    /// Replace the strategy serving `strategy.mode()`.
    #[must_use]
    pub fn with_strategy(self, strategy: Box<dyn ModeStrategy>) -> Self {
        let Self {
            distance_model,
            constructor,
            improver,
            strategies,
        } = self;
        Self {
            distance_model,
            constructor,
            improver,
            strategies: strategies.with_strategy(strategy),
        }
    }

    fn build_tour(&self, matrix: &qaop_core::DistanceMatrix) -> Result<Tour, SolveError> {
        let constructed = self
            .constructor
            .construct(matrix, START_POSITION)
            .map_err(|err| {
                log::error!("tour construction failed: {err}");
                SolveError::NoSolutionFound {
                    reason: err.to_string(),
                }
            })?;
        Ok(self.improver.improve(matrix, constructed))
    }
}

impl<D, C, I> Solver for CheapestArcSolver<D, C, I>
where
    D: DistanceModel,
    C: TourConstructor,
    I: TourImprover,
{
    fn solve(&self, request: &SolveRequest) -> Result<SolveResult, SolveError> {
        let started_at = Instant::now();
        let mode = request.validate()?;
        let network = &request.network;
        log::info!(
            "solve request received: mode={mode}, nodes={}",
            network.len()
        );
        if !network.edges.is_empty() {
            log::debug!("ignoring {} auxiliary edges", network.edges.len());
        }

        let matrix = self.distance_model.distance_matrix(&network.nodes)?;
        let tour = self.build_tour(&matrix)?;
        let kpis = self.strategies.strategy(mode).compute(&matrix, &tour)?.rounded();
        let route = route_ids(network, &tour)?;

        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            nodes_evaluated: count(network.len()),
            ignored_edges: count(network.edges.len()),
        };
        log::info!(
            "solve completed: mode={mode}, fuel_nm={}, block_time_h={}, elapsed={:?}",
            kpis.fuel_nm,
            kpis.block_time_h,
            diagnostics.solve_time
        );

        Ok(SolveResult {
            route,
            fuel_nm: kpis.fuel_nm,
            block_time_h: kpis.block_time_h,
            mode,
            diagnostics,
        })
    }
}

fn count(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

fn route_ids(network: &Network, tour: &Tour) -> Result<Vec<NodeId>, SolveError> {
    tour.positions()
        .iter()
        .map(|&position| network.nodes.get(position).map(|node| node.id))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| {
            log::error!("tour addresses a position outside the network");
            SolveError::NoSolutionFound {
                reason: format!(
                    "tour over {} positions does not fit a network of {} nodes",
                    tour.node_count(),
                    network.len()
                ),
            }
        })
}
