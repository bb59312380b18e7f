//! Scenario runner for batch loan evaluation
//!
//! Holds the models and the new-vehicle reference year once, then evaluates
//! any number of loans. Evaluations share no mutable state, so batches can run
//! in parallel.

use rayon::prelude::*;
use serde::Serialize;

use crate::error::GapResult;
use crate::loan::{LoanParameters, DEFAULT_REFERENCE_NEW_YEAR};
use crate::models::{GapDecisionPolicy, GapSeries, GapSeriesCalculator, GapStats};

/// Outcome of evaluating one loan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GapEvaluation {
    pub loan: LoanParameters,
    pub is_new: bool,
    pub monthly_payment: f64,
    pub stats: GapStats,
    pub should_offer: bool,
}

/// Pre-configured evaluator
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for result in runner.run_batch_parallel(&sample_loans()) {
///     println!("{:?}", result?.should_offer);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    calculator: GapSeriesCalculator,
    policy: GapDecisionPolicy,
    reference_year: i32,
}

impl ScenarioRunner {
    /// Runner with the default rates, thresholds, and reference year
    pub fn new() -> Self {
        Self::with_models(
            GapSeriesCalculator::default(),
            GapDecisionPolicy::default(),
            DEFAULT_REFERENCE_NEW_YEAR,
        )
    }

    pub fn with_models(
        calculator: GapSeriesCalculator,
        policy: GapDecisionPolicy,
        reference_year: i32,
    ) -> Self {
        Self {
            calculator,
            policy,
            reference_year,
        }
    }

    pub fn with_reference_year(mut self, reference_year: i32) -> Self {
        self.reference_year = reference_year;
        self
    }

    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Gap series for a single loan
    pub fn series(&self, loan: &LoanParameters) -> GapResult<GapSeries> {
        self.calculator.series(loan, loan.is_new(self.reference_year))
    }

    /// Evaluate a single loan
    pub fn evaluate(&self, loan: &LoanParameters) -> GapResult<GapEvaluation> {
        let is_new = loan.is_new(self.reference_year);
        let series = self.calculator.series(loan, is_new)?;
        let monthly_payment = series.payment();
        let stats = GapStats::from_points(series);
        let should_offer = self.policy.should_offer(&stats);

        log::debug!(
            "{}: max gap {:.2}, latest positive month {}, offer {}",
            loan.label, stats.max_gap, stats.latest_positive_month, should_offer
        );

        Ok(GapEvaluation {
            loan: loan.clone(),
            is_new,
            monthly_payment,
            stats,
            should_offer,
        })
    }

    /// Evaluate loans in order
    pub fn run_batch(&self, loans: &[LoanParameters]) -> Vec<GapResult<GapEvaluation>> {
        loans.iter().map(|loan| self.logged_evaluate(loan)).collect()
    }

    /// Evaluate loans in parallel; results keep the input order
    pub fn run_batch_parallel(&self, loans: &[LoanParameters]) -> Vec<GapResult<GapEvaluation>> {
        loans.par_iter().map(|loan| self.logged_evaluate(loan)).collect()
    }

    fn logged_evaluate(&self, loan: &LoanParameters) -> GapResult<GapEvaluation> {
        let result = self.evaluate(loan);
        if let Err(ref e) = result {
            log::warn!("Skipping loan '{}': {}", loan.label, e);
        }
        result
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
