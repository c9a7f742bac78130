//! Generator settings.

use std::ops::{Range, RangeInclusive};

use crate::GenerateError;

/// Where generated networks are written unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "data/arctic_net_50.json";

const LATITUDE_BOUNDS: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_BOUNDS: RangeInclusive<f64> = -180.0..=180.0;

/// Settings for [`generate_network`](crate::generate_network).
///
/// Ranges are half-open and sampled uniformly.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of nodes; ids run from `0` to `nodes - 1`.
    pub nodes: usize,
    /// Auxiliary edges per node, capped at `nodes - 1`.
    pub k_nearest: usize,
    /// Seed for the random number generator.
    pub seed: u64,
    /// Latitude band in degrees.
    pub lat_range: Range<f64>,
    /// Longitude band in degrees.
    pub lon_range: Range<f64>,
    /// Weather multiplier band.
    pub weather_range: Range<f64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            nodes: 50,
            k_nearest: 3,
            seed: 42,
            lat_range: 60.0..80.0,
            lon_range: -150.0..50.0,
            weather_range: 1.0..2.0,
        }
    }
}

impl GeneratorConfig {
    /// Check the settings before sampling.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NoNodes`] for an empty network and
    /// [`GenerateError::InvalidRange`] for a range that cannot be sampled or
    /// leaves the valid coordinate bounds.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.nodes == 0 {
            return Err(GenerateError::NoNodes);
        }
        check_range("lat", &self.lat_range, Some(&LATITUDE_BOUNDS))?;
        check_range("lon", &self.lon_range, Some(&LONGITUDE_BOUNDS))?;
        check_range("weather", &self.weather_range, None)
    }
}

fn check_range(
    field: &'static str,
    range: &Range<f64>,
    bounds: Option<&RangeInclusive<f64>>,
) -> Result<(), GenerateError> {
    let within = bounds.is_none_or(|b| b.contains(&range.start) && b.contains(&range.end));
    if range.start.is_finite() && range.end.is_finite() && range.start < range.end && within {
        Ok(())
    } else {
        Err(GenerateError::InvalidRange {
            field,
            start: range.start,
            end: range.end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn defaults_describe_the_arctic_box() {
        let config = GeneratorConfig::default();
        assert_eq!(config.nodes, 50);
        assert_eq!(config.k_nearest, 3);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[rstest]
    fn zero_nodes_are_rejected() {
        let config = GeneratorConfig {
            nodes: 0,
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(GenerateError::NoNodes)));
    }

    #[rstest]
    #[case(GeneratorConfig { lat_range: 80.0..60.0, ..GeneratorConfig::default() }, "lat")]
    #[case(GeneratorConfig { lat_range: 60.0..95.0, ..GeneratorConfig::default() }, "lat")]
    #[case(GeneratorConfig { lon_range: 10.0..10.0, ..GeneratorConfig::default() }, "lon")]
    #[case(GeneratorConfig { lon_range: -200.0..0.0, ..GeneratorConfig::default() }, "lon")]
    #[case(GeneratorConfig { weather_range: 1.0..f64::INFINITY, ..GeneratorConfig::default() }, "weather")]
    fn unusable_ranges_are_rejected(#[case] config: GeneratorConfig, #[case] expected: &str) {
        match config.validate() {
            Err(GenerateError::InvalidRange { field, .. }) => assert_eq!(field, expected),
            other => panic!("expected InvalidRange, found {other:?}"),
        }
    }
}
