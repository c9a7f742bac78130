//! Behavioural tests for `CheapestArcSolver` using rstest-bdd.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use qaop_core::test_support::triangle_network;
use qaop_core::{Mode, Network, Node, SolveError, SolveRequest, SolveResult, Solver};
use qaop_solver::{CheapestArcSolver, SolverConfig};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

const SIMULATED_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug)]
struct SolverWorld {
    solver: RefCell<CheapestArcSolver>,
    network: RefCell<Network>,
    classical: RefCell<Option<Result<SolveResult, SolveError>>>,
    quantum: RefCell<Option<Result<SolveResult, SolveError>>>,
    elapsed: RefCell<Duration>,
}

impl SolverWorld {
    fn new() -> Self {
        Self {
            solver: RefCell::new(CheapestArcSolver::new()),
            network: RefCell::new(Network::default()),
            classical: RefCell::new(None),
            quantum: RefCell::new(None),
            elapsed: RefCell::new(Duration::ZERO),
        }
    }

    fn solve(&self, mode: Mode) -> Result<SolveResult, SolveError> {
        let request = SolveRequest::new(self.network.borrow().clone(), mode);
        let started = Instant::now();
        let outcome = self.solver.borrow().solve(&request);
        self.elapsed.replace(started.elapsed());
        outcome
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn classical_result(&self) -> SolveResult {
        self.classical
            .borrow()
            .clone()
            .expect("classical solve should run before assertions")
            .expect("classical solve should succeed")
    }

    #[expect(
        clippy::expect_used,
        reason = "behaviour tests use expect for readable failures"
    )]
    fn quantum_result(&self) -> SolveResult {
        self.quantum
            .borrow()
            .clone()
            .expect("quantum solve should run before assertions")
            .expect("quantum solve should succeed")
    }
}

#[fixture]
fn world() -> SolverWorld {
    SolverWorld::new()
}

#[given("a solver whose quantum stub waits briefly")]
fn given_solver(world: &SolverWorld) {
    world
        .solver
        .replace(CheapestArcSolver::with_config(&SolverConfig {
            quantum_delay: SIMULATED_DELAY,
            ..SolverConfig::default()
        }));
}

#[given("the arctic triangle network")]
fn given_triangle(world: &SolverWorld) {
    world.network.replace(triangle_network());
}

#[given("a network with one node")]
fn given_single(world: &SolverWorld) {
    world
        .network
        .replace(Network::from_nodes(vec![Node::new(7, 78.2, 15.6)]));
}

#[given("an empty network")]
fn given_empty(world: &SolverWorld) {
    world.network.replace(Network::default());
}

#[when("I solve in classical mode")]
fn when_classical(world: &SolverWorld) {
    let outcome = world.solve(Mode::Classical);
    world.classical.replace(Some(outcome));
}

#[when("I solve in quantum mode")]
fn when_quantum(world: &SolverWorld) {
    let outcome = world.solve(Mode::QuantumMode);
    world.quantum.replace(Some(outcome));
}

#[then("the route is 0, 1, 2 and back to 0")]
fn then_route(world: &SolverWorld) {
    assert_eq!(world.classical_result().route, vec![0, 1, 2, 0]);
}

#[then("the fuel is between 250 and 255 nautical miles")]
fn then_fuel_range(world: &SolverWorld) {
    let fuel = world.classical_result().fuel_nm;
    assert!((250.0..=255.0).contains(&fuel), "fuel {fuel} out of range");
}

#[then("the block time is between 1.0 and 1.02 hours")]
fn then_block_range(world: &SolverWorld) {
    let block = world.classical_result().block_time_h;
    assert!((1.0..=1.02).contains(&block), "block time {block} out of range");
}

#[then("the solve finished before the simulated delay")]
fn then_fast(world: &SolverWorld) {
    let elapsed = *world.elapsed.borrow();
    assert!(elapsed < SIMULATED_DELAY, "classical solve took {elapsed:?}");
}

#[then("the solve took at least the simulated delay")]
fn then_slow(world: &SolverWorld) {
    let elapsed = *world.elapsed.borrow();
    assert!(elapsed >= SIMULATED_DELAY, "quantum solve took {elapsed:?}");
}

#[then("the quantum fuel is nine tenths of the classical fuel")]
fn then_scaled(world: &SolverWorld) {
    let classical = world.classical_result();
    let quantum = world.quantum_result();
    let expected = (classical.fuel_nm * 0.9 * 100.0).round() / 100.0;
    assert!(
        (quantum.fuel_nm - expected).abs() <= 0.01 + 1e-9,
        "quantum fuel {} not within 0.01 of {expected}",
        quantum.fuel_nm
    );
    assert_eq!(quantum.route, classical.route);
    assert_eq!(quantum.mode, Mode::QuantumMode);
}

#[then("the route starts and ends at that node")]
fn then_single_route(world: &SolverWorld) {
    assert_eq!(world.classical_result().route, vec![7, 7]);
}

#[then("the fuel is zero")]
fn then_zero(world: &SolverWorld) {
    let result = world.classical_result();
    assert!(result.fuel_nm.abs() < f64::EPSILON);
    assert!(result.block_time_h.abs() < f64::EPSILON);
}

#[then("the solve fails because the network is empty")]
fn then_empty_error(world: &SolverWorld) {
    let outcome = world.classical.borrow().clone();
    assert_eq!(outcome, Some(Err(SolveError::EmptyNetwork)));
}

#[scenario(path = "tests/features/solver.feature", index = 0)]
fn classical_triangle(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solver.feature", index = 1)]
fn quantum_scaling(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solver.feature", index = 2)]
fn single_node(world: SolverWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/solver.feature", index = 3)]
fn empty_network(world: SolverWorld) {
    let _ = world;
}
