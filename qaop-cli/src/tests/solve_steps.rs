//! Behaviour-driven step definitions driving the solve CLI scenarios.

use super::helpers::{workspace, write_triangle_network, write_triangle_request, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use qaop_core::{Mode, SolveError, SolveResult};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct SolveWorld {
    _tmp: TempDir,
    request_path: Utf8PathBuf,
    include_request: RefCell<bool>,
    cli_args: RefCell<Vec<String>>,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl SolveWorld {
    fn new() -> Self {
        let (tmp, root) = workspace();
        Self {
            _tmp: tmp,
            request_path: root.join("request.json"),
            include_request: RefCell::new(true),
            cli_args: RefCell::new(Vec::new()),
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn build_command_line(&self) -> Vec<String> {
        let mut argv = vec!["qaop".to_owned(), "solve".to_owned()];
        if *self.include_request.borrow() {
            argv.push(self.request_path.as_str().to_owned());
        }
        argv.extend([format!("--{ARG_SOLVE_QUANTUM_DELAY}"), "0".to_owned()]);
        argv.extend(self.cli_args.borrow().iter().cloned());
        argv
    }

    fn printed_result(&self) -> SolveResult {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        if let Err(err) = result {
            panic!("expected success, found {err:?}");
        }
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        assert!(stdout.ends_with('\n'));
        serde_json::from_str(&stdout).expect("output should be a JSON solve result")
    }
}

#[fixture]
fn world() -> SolveWorld {
    SolveWorld::new()
}

#[given("a triangle network exists on disk")]
fn triangle_network_exists(#[from(world)] world: &SolveWorld) {
    write_triangle_network(&world.request_path);
}

#[given("a quantum-mode triangle request exists on disk")]
fn quantum_request_exists(#[from(world)] world: &SolveWorld) {
    write_triangle_request(&world.request_path, Mode::QuantumMode);
}

#[given("I ask for quantum-mode on the command line")]
fn ask_for_quantum_mode(#[from(world)] world: &SolveWorld) {
    world
        .cli_args
        .borrow_mut()
        .extend([format!("--{ARG_SOLVE_MODE}"), "quantum-mode".to_owned()]);
}

#[given("the solve request contains invalid JSON")]
fn solve_request_contains_invalid_json(#[from(world)] world: &SolveWorld) {
    write_utf8(&world.request_path, "{ not valid json");
}

#[given("a request naming an unknown mode exists on disk")]
fn unknown_mode_request_exists(#[from(world)] world: &SolveWorld) {
    write_utf8(
        &world.request_path,
        r#"{"network": {"nodes": [{"id": 0, "lat": 70.0, "lon": -150.0}]}, "mode": "foo"}"#,
    );
}

#[given("a network without nodes exists on disk")]
fn empty_network_exists(#[from(world)] world: &SolveWorld) {
    write_utf8(&world.request_path, r#"{"nodes": [], "edges": []}"#);
}

#[given("I omit the solve request path")]
fn omit_solve_request_path(#[from(world)] world: &SolveWorld) {
    *world.include_request.borrow_mut() = false;
}

#[when("I run the solve command")]
fn run_solve_command(#[from(world)] world: &SolveWorld) {
    let invocation = world.build_command_line();
    let parsed = Cli::try_parse_from(invocation).map_err(CliError::from);
    let outcome = parsed.and_then(|cli| match cli.command {
        Command::Solve(args) => {
            let mut buffer = world.stdout.borrow_mut();
            run_solve_with(args, &DefaultSolveSolverBuilder, &mut *buffer)
        }
        Command::Generate(_) => panic!("expected solve command"),
    });

    world.result.replace(Some(outcome));
}

#[then("the command succeeds with the classical triangle route")]
fn command_prints_classical_route(#[from(world)] world: &SolveWorld) {
    let result = world.printed_result();
    assert_eq!(result.route, vec![0, 1, 2, 0]);
    assert_eq!(result.fuel_nm, 252.55);
    assert_eq!(result.block_time_h, 1.01);
    assert_eq!(result.mode, Mode::Classical);
}

#[then("the command succeeds with the quantum triangle KPIs")]
fn command_prints_quantum_kpis(#[from(world)] world: &SolveWorld) {
    let result = world.printed_result();
    assert_eq!(result.route, vec![0, 1, 2, 0]);
    assert_eq!(result.fuel_nm, 227.3);
    assert_eq!(result.block_time_h, 0.91);
    assert_eq!(result.mode, Mode::QuantumMode);
}

#[then("the command fails because the request JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::ParseSolveRequest { path, .. }) => assert_eq!(*path, world.request_path),
        other => panic!("expected ParseSolveRequest, found {other:?}"),
    }
}

#[then("the command fails because the mode is unknown")]
fn command_fails_unknown_mode(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::InvalidSolveRequest { source, .. }) => assert_eq!(
            *source,
            SolveError::UnknownMode {
                mode: "foo".to_owned()
            }
        ),
        other => panic!("expected InvalidSolveRequest, found {other:?}"),
    }
}

#[then("the command fails because the network is empty")]
fn command_fails_empty_network(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::InvalidSolveRequest { source, .. }) => {
            assert_eq!(*source, SolveError::EmptyNetwork);
        }
        other => panic!("expected InvalidSolveRequest, found {other:?}"),
    }
    assert!(world.stdout.borrow().is_empty());
}

#[then("the command fails because the request path is missing")]
fn command_fails_missing_request_path(#[from(world)] world: &SolveWorld) {
    let borrowed = world.result.borrow();
    match borrowed.as_ref().expect("result recorded") {
        Err(CliError::MissingArgument { field, .. }) => assert_eq!(*field, ARG_SOLVE_REQUEST),
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_solve_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/solve_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: SolveWorld) {
            let _ = world;
        }
    };
}

register_solve_scenario!(solve_bare_network, "solving a bare network in classical mode");
register_solve_scenario!(solve_quantum_request, "solving a quantum-mode request");
register_solve_scenario!(
    solve_mode_override,
    "overriding the request mode on the command line"
);
register_solve_scenario!(solve_invalid_json, "rejecting invalid JSON input");
register_solve_scenario!(solve_unknown_mode, "rejecting unknown modes");
register_solve_scenario!(solve_empty_network, "rejecting empty networks");
register_solve_scenario!(solve_missing_request, "rejecting missing request paths");
