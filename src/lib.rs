//! Facade crate for the Q-AOP route optimizer.
//!
//! This crate re-exports the core domain types and exposes the greedy
//! solver, the async solve service and the network generator behind feature
//! flags.

#![forbid(unsafe_code)]

pub use qaop_core::{
    Diagnostics, DistanceError, DistanceMatrix, DistanceModel, EARTH_RADIUS_NM, Edge,
    HaversineDistanceModel, Kpis, Mode, ModeStrategy, Network, Node, NodeId, SolveError,
    SolveRequest, SolveResult, Solver, Tour,
};

#[cfg(feature = "solver")]
pub use qaop_solver::{CheapestArcSolver, SolverConfig};

#[cfg(feature = "service")]
pub use qaop_service::{ServiceConfig, ServiceError, SolveService};

#[cfg(feature = "netgen")]
pub use qaop_netgen::{GenerateError, GeneratorConfig, generate_network, write_network};
