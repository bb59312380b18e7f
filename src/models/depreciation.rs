//! Two-phase exponential vehicle depreciation
//!
//! New vehicles lose value at the first-year rate for their first twelve months,
//! then at the slower rate. Used vehicles depreciate at the slower rate throughout.

use serde::{Deserialize, Serialize};

/// Monthly depreciation rate during a new vehicle's first year (25% annual / 12)
pub const FIRST_YEAR_DEPR_RATE: f64 = 0.25 / 12.0;

/// Monthly depreciation rate after the first year, and for used vehicles (12.5% annual / 12)
pub const OTHER_DEPR_RATE: f64 = 0.125 / 12.0;

/// Length of the first-year phase in months
pub const FIRST_YEAR_MONTHS: u32 = 12;

/// Exponential decay: `initial_value * (1 - rate)^time`.
///
/// Non-positive `time` leaves the value unchanged.
pub fn calc_decay(initial_value: f64, rate: f64, time: i32) -> f64 {
    if time > 0 {
        initial_value * (1.0 - rate).powi(time)
    } else {
        initial_value
    }
}

/// Depreciation rates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepreciationConfig {
    /// Monthly rate during a new vehicle's first phase
    pub first_year_rate: f64,
    /// Monthly rate for all other months
    pub other_rate: f64,
    /// Months in the first phase
    pub first_year_months: u32,
}

impl Default for DepreciationConfig {
    fn default() -> Self {
        Self {
            first_year_rate: FIRST_YEAR_DEPR_RATE,
            other_rate: OTHER_DEPR_RATE,
            first_year_months: FIRST_YEAR_MONTHS,
        }
    }
}

fn months_exponent(months: u32) -> i32 {
    i32::try_from(months).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DepreciationModel {
    pub config: DepreciationConfig,
}

impl DepreciationModel {
    pub fn new(config: DepreciationConfig) -> Self {
        Self { config }
    }

    /// Market value of the vehicle `months` after origination
    pub fn vehicle_value(&self, initial_value: f64, months: u32, is_new: bool) -> f64 {
        let cfg = &self.config;

        if is_new {
            let first_phase = months_exponent(months.min(cfg.first_year_months));
            let value_after_first_phase = calc_decay(initial_value, cfg.first_year_rate, first_phase);
            // Negative inside the first phase, which calc_decay treats as no change
            let remaining = i64::from(months) - i64::from(cfg.first_year_months);
            let remaining = i32::try_from(remaining).unwrap_or(i32::MAX);
            return calc_decay(value_after_first_phase, cfg.other_rate, remaining);
        }

        calc_decay(initial_value, cfg.other_rate, months_exponent(months))
    }
}

/// Vehicle value under the default depreciation rates
pub fn calc_vehicle_value(initial_value: f64, months: u32, is_new: bool) -> f64 {
    DepreciationModel::default().vehicle_value(initial_value, months, is_new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_decay_at_time_zero_is_identity() {
        assert_eq!(calc_decay(30_000.0, FIRST_YEAR_DEPR_RATE, 0), 30_000.0);
        assert_eq!(calc_decay(30_000.0, OTHER_DEPR_RATE, -5), 30_000.0);
    }

    #[test]
    fn test_decay_strictly_decreasing() {
        for rate in [FIRST_YEAR_DEPR_RATE, OTHER_DEPR_RATE, 0.5] {
            let values: Vec<f64> = (0..60).map(|t| calc_decay(20_000.0, rate, t)).collect();
            assert!(values.windows(2).all(|w| w[1] < w[0]), "rate {}", rate);
        }
    }

    #[test]
    fn test_new_vehicle_phase_boundary() {
        let at_boundary = calc_vehicle_value(30_000.0, 12, true);
        assert_eq!(at_boundary, calc_decay(30_000.0, FIRST_YEAR_DEPR_RATE, 12));
    }

    #[test]
    fn test_new_vehicle_first_year_checkpoint() {
        // Roughly 77-78% retained after one year
        let value = calc_vehicle_value(30_000.0, 12, true);
        assert!((value - 23_300.0).abs() < 100.0, "value = {}", value);
    }

    #[test]
    fn test_new_vehicle_second_phase() {
        let after_year = calc_decay(30_000.0, FIRST_YEAR_DEPR_RATE, 12);
        let expected = calc_decay(after_year, OTHER_DEPR_RATE, 12);
        assert_relative_eq!(calc_vehicle_value(30_000.0, 24, true), expected);
        assert!((calc_vehicle_value(30_000.0, 24, true) - 20_550.82).abs() < 0.01);
    }

    #[test]
    fn test_new_vehicle_within_first_year_uses_first_rate_only() {
        let value = calc_vehicle_value(30_000.0, 5, true);
        assert_relative_eq!(value, calc_decay(30_000.0, FIRST_YEAR_DEPR_RATE, 5));
    }

    #[test]
    fn test_used_vehicle_single_phase() {
        let value = calc_vehicle_value(30_000.0, 12, false);
        assert_relative_eq!(value, calc_decay(30_000.0, OTHER_DEPR_RATE, 12));
        assert!(value > calc_vehicle_value(30_000.0, 12, true));
    }

    #[test]
    fn test_value_non_increasing_in_months() {
        for is_new in [true, false] {
            let values: Vec<f64> = (0..96).map(|m| calc_vehicle_value(25_000.0, m, is_new)).collect();
            assert!(values.windows(2).all(|w| w[1] <= w[0]));
        }
    }

    #[test]
    fn test_very_long_horizon_does_not_wrap() {
        for is_new in [true, false] {
            let value = calc_vehicle_value(30_000.0, 3_000_000_000, is_new);
            assert!(value >= 0.0 && value < 1.0, "value = {}", value);
        }
    }

    #[test]
    fn test_custom_config() {
        let model = DepreciationModel::new(DepreciationConfig {
            first_year_rate: 0.03,
            other_rate: 0.01,
            first_year_months: 6,
        });

        let expected = calc_decay(calc_decay(10_000.0, 0.03, 6), 0.01, 4);
        assert_relative_eq!(model.vehicle_value(10_000.0, 10, true), expected);
    }
}
