//! Monthly gap series: remaining loan balance minus vehicle value

use serde::{Deserialize, Serialize};

use super::amortization::{calc_balance, calc_payment};
use super::depreciation::DepreciationModel;
use crate::error::{GapError, GapResult};
use crate::loan::{LoanParameters, DEFAULT_REFERENCE_NEW_YEAR};

/// Gap at a single month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapPoint {
    pub month: u32,
    pub gap: f64,
}

/// Summary of the months where the balance exceeds the vehicle value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GapStats {
    /// Largest positive gap, 0 if none
    pub max_gap: f64,
    /// Last month index with a positive gap, 0 if none.
    /// Not a count: an interrupted gap still reports its latest month.
    pub latest_positive_month: u32,
}

impl GapStats {
    /// Reduce a series to its positive-gap summary
    pub fn from_points<I: IntoIterator<Item = GapPoint>>(points: I) -> Self {
        points
            .into_iter()
            .filter(|p| p.gap > 0.0)
            .fold(GapStats::default(), |stats, p| GapStats {
                max_gap: stats.max_gap.max(p.gap),
                latest_positive_month: stats.latest_positive_month.max(p.month),
            })
    }
}

/// Iterator over `GapPoint`s for months `[0, loan_term_months)`.
///
/// Cloning yields an independent series starting from the same position.
#[derive(Debug, Clone)]
pub struct GapSeries {
    depreciation: DepreciationModel,
    car_value: f64,
    principal: f64,
    monthly_rate: f64,
    payment: f64,
    is_new: bool,
    month: u32,
    term: u32,
}

impl GapSeries {
    /// Level monthly payment used for the balance side of the series
    pub fn payment(&self) -> f64 {
        self.payment
    }
}

impl Iterator for GapSeries {
    type Item = GapPoint;

    fn next(&mut self) -> Option<GapPoint> {
        if self.month >= self.term {
            return None;
        }

        let month = self.month;
        self.month += 1;

        let gap = calc_balance(self.principal, self.monthly_rate, self.payment, month)
            - self.depreciation.vehicle_value(self.car_value, month, self.is_new);
        log::trace!("month {:>3}: gap {:.2}", month, gap);

        Some(GapPoint { month, gap })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.term.saturating_sub(self.month) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GapSeries {}

/// Combines the amortization and depreciation models
#[derive(Debug, Clone, Copy, Default)]
pub struct GapSeriesCalculator {
    pub depreciation: DepreciationModel,
}

impl GapSeriesCalculator {
    pub fn new(depreciation: DepreciationModel) -> Self {
        Self { depreciation }
    }

    /// Balance minus vehicle value at `month`
    pub fn gap_at(
        &self,
        car_value: f64,
        principal: f64,
        monthly_rate: f64,
        payment: f64,
        is_new: bool,
        month: u32,
    ) -> f64 {
        calc_balance(principal, monthly_rate, payment, month)
            - self.depreciation.vehicle_value(car_value, month, is_new)
    }

    /// Gap series over the full loan term
    pub fn series(&self, loan: &LoanParameters, is_new: bool) -> GapResult<GapSeries> {
        loan.validate()?;

        let monthly_rate = loan.monthly_rate();
        let payment = calc_payment(loan.amount_financed, monthly_rate, loan.loan_term_months);

        // The last month carries the largest growth factor; if its balance is finite, all are
        let last_balance = calc_balance(
            loan.amount_financed,
            monthly_rate,
            payment,
            loan.loan_term_months - 1,
        );
        if !payment.is_finite() || !last_balance.is_finite() {
            return Err(GapError::UndefinedRate(loan.apr));
        }

        Ok(GapSeries {
            depreciation: self.depreciation,
            car_value: loan.car_value,
            principal: loan.amount_financed,
            monthly_rate,
            payment,
            is_new,
            month: 0,
            term: loan.loan_term_months,
        })
    }

    /// Scan every month of the term; the gap is not monotone so there is no early exit
    pub fn find_gap_stats(&self, loan: &LoanParameters, is_new: bool) -> GapResult<GapStats> {
        let series = self.series(loan, is_new)?;
        let payment = series.payment();
        let stats = GapStats::from_points(series);

        log::debug!(
            "{}: payment {:.2}, max gap {:.2}, latest positive month {}",
            loan.label, payment, stats.max_gap, stats.latest_positive_month
        );
        Ok(stats)
    }
}

/// Balance minus vehicle value at `month`, using the default depreciation rates
pub fn calc_gap(
    car_value: f64,
    principal: f64,
    monthly_rate: f64,
    payment: f64,
    is_new: bool,
    month: u32,
) -> f64 {
    GapSeriesCalculator::default().gap_at(car_value, principal, monthly_rate, payment, is_new, month)
}

/// Gap statistics for a loan; the vehicle is new when `model_year` is the reference year
pub fn find_gap_stats(
    car_value: f64,
    model_year: i32,
    amount_financed: f64,
    apr: f64,
    loan_term_months: u32,
) -> GapResult<GapStats> {
    let loan = LoanParameters::new("", car_value, model_year, amount_financed, apr, loan_term_months);
    let is_new = loan.is_new(DEFAULT_REFERENCE_NEW_YEAR);
    GapSeriesCalculator::default().find_gap_stats(&loan, is_new)
}
