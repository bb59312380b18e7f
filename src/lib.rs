//! GAP Advisor - Loan amortization and vehicle depreciation engine for GAP insurance
//!
//! This library provides:
//! - Closed-form level-payment amortization (payment and remaining balance)
//! - Two-phase exponential vehicle depreciation
//! - Monthly gap series (balance minus vehicle value) and its summary statistics
//! - Threshold policy deciding whether to offer GAP coverage
//! - Batch evaluation over loaded or sample loans

pub mod error;
pub mod loan;
pub mod models;
pub mod scenario;

// Re-export commonly used types
pub use error::{GapError, GapResult};
pub use loan::{LoanParameters, DEFAULT_REFERENCE_NEW_YEAR};
pub use models::{
    calc_balance, calc_gap, calc_payment, calc_vehicle_value, find_gap_stats, should_offer_gap,
    GapDecisionPolicy, GapPoint, GapSeriesCalculator, GapStats,
};
pub use scenario::{GapEvaluation, ScenarioRunner};
