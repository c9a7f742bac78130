//! Greedy round-trip solver for Q-AOP.
//!
//! This crate provides [`CheapestArcSolver`], the default implementation of
//! the [`Solver`](qaop_core::Solver) trait. A solve validates the request,
//! builds a geodesic distance matrix, grows a closed tour from the first node
//! by always taking the cheapest arc to an unvisited node, and hands the tour
//! to the [`ModeStrategy`](qaop_core::ModeStrategy) registered for the
//! requested mode to derive the reported KPIs.
//!
//! Tour construction sits behind [`TourConstructor`] and an optional
//! post-construction pass behind [`TourImprover`]. The only shipped improver
//! is [`NoImprovement`].

#![forbid(unsafe_code)]

pub mod construction;
mod solver;

pub use construction::{
    CheapestArcConstructor, ConstructionError, DEFAULT_COST_SCALE, NoImprovement,
    TourConstructor, TourImprover,
};
pub use solver::{CheapestArcSolver, SolverConfig};
