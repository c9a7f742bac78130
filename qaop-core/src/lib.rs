//! Core domain types for the Q-AOP route optimizer.
//!
//! The crate defines the node network accepted by the engine, the geodesic
//! [`DistanceModel`] that turns coordinates into a [`DistanceMatrix`], the
//! closed [`Tour`] produced by a construction heuristic, and the [`Kpis`]
//! reported for it. Solve modes are modelled as [`ModeStrategy`]
//! implementations so an alternate solver can replace the `quantum-mode` stub
//! without touching the rest of the pipeline.
//!
//! Solvers implement the synchronous [`Solver`] trait. Everything is owned by
//! a single solve call; no state is shared between calls.

#![forbid(unsafe_code)]

pub mod distance;
pub mod kpi;
pub mod mode;
mod network;
mod solver;
pub mod tour;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use distance::{
    DistanceError, DistanceMatrix, DistanceModel, EARTH_RADIUS_NM, HaversineDistanceModel,
    haversine_nm,
};
pub use kpi::{CRUISE_SPEED_KTS, Kpis, round_2dp};
pub use mode::{
    ClassicalStrategy, Mode, ModeStrategies, ModeStrategy, QUANTUM_DELAY, QUANTUM_MULTIPLIER,
    QuantumStubStrategy,
};
pub use network::{CoordinateField, Edge, Network, Node, NodeId};
pub use solver::{Diagnostics, SolveError, SolveRequest, SolveResult, Solver};
pub use tour::{Tour, TourError};
