//! Threshold policy turning gap statistics into a GAP recommendation

use serde::{Deserialize, Serialize};

use super::gap::{find_gap_stats, GapStats};
use crate::error::GapResult;

/// Minimum peak gap (currency units) that justifies offering GAP
pub const MINIMUM_AMOUNT_SHOULD_OFFER: f64 = 1000.0;

/// The gap must still be positive after this many months
pub const SHORTEST_TIME_SHOULD_OFFER: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionThresholds {
    pub minimum_amount: f64,
    pub shortest_time: u32,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            minimum_amount: MINIMUM_AMOUNT_SHOULD_OFFER,
            shortest_time: SHORTEST_TIME_SHOULD_OFFER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GapDecisionPolicy {
    pub thresholds: DecisionThresholds,
}

impl GapDecisionPolicy {
    pub fn new(thresholds: DecisionThresholds) -> Self {
        Self { thresholds }
    }

    /// Both thresholds must be exceeded (strictly)
    pub fn should_offer(&self, stats: &GapStats) -> bool {
        stats.latest_positive_month > self.thresholds.shortest_time
            && stats.max_gap > self.thresholds.minimum_amount
    }
}

/// Recommendation for a loan under the default rates and thresholds
pub fn should_offer_gap(
    car_value: f64,
    model_year: i32,
    amount_financed: f64,
    apr: f64,
    loan_term_months: u32,
) -> GapResult<bool> {
    let stats = find_gap_stats(car_value, model_year, amount_financed, apr, loan_term_months)?;
    Ok(GapDecisionPolicy::default().should_offer(&stats))
}
