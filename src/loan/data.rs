//! Loan record used as input to every evaluation

use serde::{Deserialize, Serialize};

use crate::error::{GapError, GapResult};

/// Model year treated as "new" by the sample scenarios
pub const DEFAULT_REFERENCE_NEW_YEAR: i32 = 2019;

/// Terms of a single auto loan and the vehicle securing it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanParameters {
    /// Free-form description, used in reports only
    #[serde(default)]
    pub label: String,

    /// Vehicle value at loan origination
    pub car_value: f64,

    /// Vehicle model year
    pub model_year: i32,

    /// Loan principal
    pub amount_financed: f64,

    /// Annual percentage rate as a decimal (0.05 = 5%)
    pub apr: f64,

    /// Loan term in months
    pub loan_term_months: u32,
}

impl LoanParameters {
    pub fn new(
        label: impl Into<String>,
        car_value: f64,
        model_year: i32,
        amount_financed: f64,
        apr: f64,
        loan_term_months: u32,
    ) -> Self {
        Self {
            label: label.into(),
            car_value,
            model_year,
            amount_financed,
            apr,
            loan_term_months,
        }
    }

    /// Monthly compounding rate: APR / 12
    pub fn monthly_rate(&self) -> f64 {
        self.apr / 12.0
    }

    /// A vehicle counts as new only when its model year equals the reference year
    pub fn is_new(&self, reference_year: i32) -> bool {
        self.model_year == reference_year
    }

    /// Check the preconditions every formula relies on
    pub fn validate(&self) -> GapResult<()> {
        if self.loan_term_months == 0 {
            return Err(GapError::invalid("loan_term_months", "must be greater than zero"));
        }
        if !self.car_value.is_finite() || self.car_value < 0.0 {
            return Err(GapError::invalid(
                "car_value",
                format!("must be a non-negative number, got {}", self.car_value),
            ));
        }
        if !self.amount_financed.is_finite() || self.amount_financed < 0.0 {
            return Err(GapError::invalid(
                "amount_financed",
                format!("must be a non-negative number, got {}", self.amount_financed),
            ));
        }
        if !self.apr.is_finite() || self.apr < 0.0 {
            return Err(GapError::UndefinedRate(self.apr));
        }
        Ok(())
    }
}
