//! Solve modes and their KPI strategies.
//!
//! A [`Mode`] names a variant of the solve pipeline; a [`ModeStrategy`] turns
//! a distance matrix and a constructed tour into [`Kpis`]. Two strategies
//! ship:
//!
//! - [`ClassicalStrategy`] reports the tour's KPIs as computed.
//! - [`QuantumStubStrategy`] blocks for a fixed simulated latency and then
//!   scales the classical KPIs by a fixed multiplier. It does not run a
//!   different algorithm.
//!
//! [`ModeStrategies`] maps each mode to its strategy. An alternate solver for
//! a mode is registered with [`ModeStrategies::with_strategy`].

use std::fmt;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::distance::{DistanceError, DistanceMatrix};
use crate::kpi::{CRUISE_SPEED_KTS, Kpis};
use crate::tour::Tour;
use crate::SolveError;

/// Simulated latency of the `quantum-mode` stub.
pub const QUANTUM_DELAY: Duration = Duration::from_secs(20);

/// KPI multiplier applied by the `quantum-mode` stub.
pub const QUANTUM_MULTIPLIER: f64 = 0.9;

/// Named solve variant selected by the caller.
///
/// # Examples
/// ```
/// use qaop_core::Mode;
///
/// let mode: Mode = "quantum-mode".parse()?;
/// assert_eq!(mode, Mode::QuantumMode);
/// assert_eq!(mode.to_string(), "quantum-mode");
/// assert!("quantum".parse::<Mode>().is_err());
/// # Ok::<(), qaop_core::SolveError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// KPIs exactly as computed.
    #[default]
    Classical,
    /// Simulated alternate solver: fixed delay, fixed KPI multiplier.
    QuantumMode,
}

impl Mode {
    /// Wire name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classical => "classical",
            Self::QuantumMode => "quantum-mode",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "classical" => Ok(Self::Classical),
            "quantum-mode" => Ok(Self::QuantumMode),
            other => Err(SolveError::UnknownMode {
                mode: other.to_owned(),
            }),
        }
    }
}

/// Turn a constructed tour into reported KPIs for one mode.
///
/// Strategies run on the solving thread and may block it.
pub trait ModeStrategy: Send + Sync + fmt::Debug {
    /// Mode this strategy serves.
    fn mode(&self) -> Mode;

    /// Compute unrounded KPIs for `tour`.
    ///
    /// # Errors
    ///
    /// Returns a [`DistanceError`] if the tour does not fit `matrix`.
    fn compute(&self, matrix: &DistanceMatrix, tour: &Tour) -> Result<Kpis, DistanceError>;
}

/// Reports the tour's distance and block time unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassicalStrategy {
    /// Cruise speed used to derive block time, in knots.
    pub cruise_speed_kts: f64,
}

impl Default for ClassicalStrategy {
    fn default() -> Self {
        Self {
            cruise_speed_kts: CRUISE_SPEED_KTS,
        }
    }
}

impl ModeStrategy for ClassicalStrategy {
    fn mode(&self) -> Mode {
        Mode::Classical
    }

    fn compute(&self, matrix: &DistanceMatrix, tour: &Tour) -> Result<Kpis, DistanceError> {
        Kpis::from_tour(tour, matrix, self.cruise_speed_kts)
    }
}

/// Placeholder for an alternate solver.
///
/// Computes the classical KPIs, sleeps for `delay` on the calling thread and
/// scales both KPIs by `multiplier`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumStubStrategy {
    /// Strategy producing the KPIs before scaling.
    pub classical: ClassicalStrategy,
    /// Simulated solver latency.
    pub delay: Duration,
    /// Factor applied to both KPIs.
    pub multiplier: f64,
}

impl Default for QuantumStubStrategy {
    fn default() -> Self {
        Self {
            classical: ClassicalStrategy::default(),
            delay: QUANTUM_DELAY,
            multiplier: QUANTUM_MULTIPLIER,
        }
    }
}

impl ModeStrategy for QuantumStubStrategy {
    fn mode(&self) -> Mode {
        Mode::QuantumMode
    }

    fn compute(&self, matrix: &DistanceMatrix, tour: &Tour) -> Result<Kpis, DistanceError> {
        let kpis = self.classical.compute(matrix, tour)?;
        if !self.delay.is_zero() {
            log::debug!("quantum-mode stub sleeping for {:?}", self.delay);
            thread::sleep(self.delay);
        }
        Ok(kpis.scaled(self.multiplier))
    }
}

/// Strategy registry keyed by [`Mode`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use qaop_core::{Mode, ModeStrategies};
///
/// let strategies = ModeStrategies::new(250.0, Duration::ZERO, 0.9);
/// assert_eq!(strategies.strategy(Mode::QuantumMode).mode(), Mode::QuantumMode);
/// ```
#[derive(Debug)]
pub struct ModeStrategies {
    classical: Box<dyn ModeStrategy>,
    quantum: Box<dyn ModeStrategy>,
}

impl ModeStrategies {
    /// Register the classical strategy and the quantum-mode stub.
    #[must_use]
    pub fn new(cruise_speed_kts: f64, quantum_delay: Duration, quantum_multiplier: f64) -> Self {
        let classical = ClassicalStrategy { cruise_speed_kts };
        Self {
            classical: Box::new(classical),
            quantum: Box::new(QuantumStubStrategy {
                classical,
                delay: quantum_delay,
                multiplier: quantum_multiplier,
            }),
        }
    }

    /// Replace the strategy serving `strategy.mode()`.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Box<dyn ModeStrategy>) -> Self {
        match strategy.mode() {
            Mode::Classical => self.classical = strategy,
            Mode::QuantumMode => self.quantum = strategy,
        }
        self
    }

    /// Strategy registered for `mode`.
    #[must_use]
    pub fn strategy(&self, mode: Mode) -> &dyn ModeStrategy {
        match mode {
            Mode::Classical => self.classical.as_ref(),
            Mode::QuantumMode => self.quantum.as_ref(),
        }
    }
}

impl Default for ModeStrategies {
    fn default() -> Self {
        Self::new(CRUISE_SPEED_KTS, QUANTUM_DELAY, QUANTUM_MULTIPLIER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use std::time::Instant;

    #[fixture]
    fn square() -> (DistanceMatrix, Tour) {
        let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 125.0], vec![125.0, 0.0]])
            .expect("square matrix");
        let tour = Tour::new(vec![0, 1, 0], 2).expect("tour");
        (matrix, tour)
    }

    #[rstest]
    #[case("classical", Mode::Classical)]
    #[case("quantum-mode", Mode::QuantumMode)]
    fn known_modes_parse(#[case] name: &str, #[case] expected: Mode) {
        assert_eq!(name.parse::<Mode>(), Ok(expected));
    }

    #[rstest]
    #[case("foo")]
    #[case("quantum")]
    #[case("Classical")]
    #[case("")]
    fn unknown_modes_are_rejected(#[case] name: &str) {
        assert_eq!(
            name.parse::<Mode>(),
            Err(SolveError::UnknownMode {
                mode: name.to_owned()
            })
        );
    }

    #[rstest]
    fn modes_serialise_with_wire_names() {
        let json = serde_json::to_string(&Mode::QuantumMode).expect("serialise mode");
        assert_eq!(json, "\"quantum-mode\"");
    }

    #[rstest]
    fn classical_reports_kpis_unchanged(square: (DistanceMatrix, Tour)) {
        let (matrix, tour) = square;
        let kpis = ClassicalStrategy::default()
            .compute(&matrix, &tour)
            .expect("kpis");
        assert!((kpis.fuel_nm - 250.0).abs() < 1e-9);
        assert!((kpis.block_time_h - 1.0).abs() < 1e-9);
    }

    #[rstest]
    fn quantum_stub_scales_and_waits(square: (DistanceMatrix, Tour)) {
        let (matrix, tour) = square;
        let stub = QuantumStubStrategy {
            delay: Duration::from_millis(30),
            ..QuantumStubStrategy::default()
        };
        let started = Instant::now();
        let kpis = stub.compute(&matrix, &tour).expect("kpis");
        assert!(started.elapsed() >= Duration::from_millis(30));
        assert!((kpis.fuel_nm - 225.0).abs() < 1e-9);
        assert!((kpis.block_time_h - 0.9).abs() < 1e-9);
    }

    #[derive(Debug)]
    struct HalvingStrategy;

    impl ModeStrategy for HalvingStrategy {
        fn mode(&self) -> Mode {
            Mode::QuantumMode
        }

        fn compute(&self, matrix: &DistanceMatrix, tour: &Tour) -> Result<Kpis, DistanceError> {
            Ok(ClassicalStrategy::default()
                .compute(matrix, tour)?
                .scaled(0.5))
        }
    }

    #[rstest]
    fn registry_accepts_replacement_strategy(square: (DistanceMatrix, Tour)) {
        let (matrix, tour) = square;
        let strategies = ModeStrategies::default().with_strategy(Box::new(HalvingStrategy));
        let kpis = strategies
            .strategy(Mode::QuantumMode)
            .compute(&matrix, &tour)
            .expect("kpis");
        assert!((kpis.fuel_nm - 125.0).abs() < 1e-9);
    }
}
