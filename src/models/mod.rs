//! Financial models: amortization, depreciation, gap series, and the offer decision

pub mod amortization;
pub mod depreciation;
pub mod gap;
pub mod decision;

pub use amortization::{calc_balance, calc_payment, balance_by_recurrence};
pub use depreciation::{
    calc_decay, calc_vehicle_value, DepreciationConfig, DepreciationModel,
    FIRST_YEAR_DEPR_RATE, OTHER_DEPR_RATE,
};
pub use gap::{calc_gap, find_gap_stats, GapPoint, GapSeries, GapSeriesCalculator, GapStats};
pub use decision::{
    should_offer_gap, DecisionThresholds, GapDecisionPolicy,
    MINIMUM_AMOUNT_SHOULD_OFFER, SHORTEST_TIME_SHOULD_OFFER,
};
