//! Operational KPIs derived from a tour.

use crate::distance::{DistanceError, DistanceMatrix};
use crate::tour::Tour;

/// Assumed cruising speed in knots (nautical miles per hour).
pub const CRUISE_SPEED_KTS: f64 = 250.0;

/// Round to two decimal places, half away from zero.
///
/// # Examples
/// ```
/// use qaop_core::round_2dp;
///
/// assert_eq!(round_2dp(252.551_436), 252.55);
/// assert_eq!(round_2dp(1.0102), 1.01);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "reporting rounds floating-point KPIs"
)]
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Distance and duration for a tour.
///
/// Values stay unrounded inside the engine; [`Kpis::rounded`] is applied once
/// when a result is reported.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kpis {
    /// Distance travelled along the tour, in nautical miles.
    pub fuel_nm: f64,
    /// Transit duration at cruise speed, in hours.
    pub block_time_h: f64,
}

impl Kpis {
    /// Sum the tour's legs, including the closing leg, and derive the block
    /// time at `cruise_speed_kts`.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::OutOfBounds`] when the tour addresses a
    /// position outside `matrix`.
    ///
    /// # Examples
    /// ```
    /// use qaop_core::{DistanceMatrix, Kpis, Tour};
    ///
    /// let matrix = DistanceMatrix::from_rows(vec![vec![0.0, 125.0], vec![125.0, 0.0]])?;
    /// let tour = Tour::new(vec![0, 1, 0], 2).expect("valid tour");
    /// let kpis = Kpis::from_tour(&tour, &matrix, 250.0)?;
    /// assert_eq!(kpis.fuel_nm, 250.0);
    /// assert_eq!(kpis.block_time_h, 1.0);
    /// # Ok::<(), qaop_core::DistanceError>(())
    /// ```
    pub fn from_tour(
        tour: &Tour,
        matrix: &DistanceMatrix,
        cruise_speed_kts: f64,
    ) -> Result<Self, DistanceError> {
        let fuel_nm = matrix.path_length(tour.positions())?;
        Ok(Self::from_distance(fuel_nm, cruise_speed_kts))
    }

    /// Derive KPIs from an already summed distance.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "block time is distance over speed")]
    pub fn from_distance(fuel_nm: f64, cruise_speed_kts: f64) -> Self {
        Self {
            fuel_nm,
            block_time_h: fuel_nm / cruise_speed_kts,
        }
    }

    /// Multiply both KPIs by `factor`.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "KPI scaling is a float product")]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            fuel_nm: self.fuel_nm * factor,
            block_time_h: self.block_time_h * factor,
        }
    }

    /// Both KPIs rounded to two decimal places.
    #[must_use]
    pub fn rounded(self) -> Self {
        Self {
            fuel_nm: round_2dp(self.fuel_nm),
            block_time_h: round_2dp(self.block_time_h),
        }
    }
}
