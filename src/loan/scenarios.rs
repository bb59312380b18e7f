//! Sample loan scenarios
//!
//! A default new-car loan plus labeled variants. Variants compose, so
//! `long_term_loan(&no_down_payment(&base))` yields
//! `"default + no down payment + long term loan"`.

use super::{LoanParameters, DEFAULT_REFERENCE_NEW_YEAR};

/// 30k new vehicle, 10% down, 5% APR over 48 months
pub fn default_new_car_loan() -> LoanParameters {
    LoanParameters::new(
        "default",
        30_000.0,
        DEFAULT_REFERENCE_NEW_YEAR,
        27_000.0,
        0.05,
        48,
    )
}

fn modify(loan: &LoanParameters, label: &str, f: impl FnOnce(&mut LoanParameters)) -> LoanParameters {
    let mut modified = loan.clone();
    modified.label = format!("{} + {}", loan.label, label);
    f(&mut modified);
    modified
}

/// Finance the full vehicle value
pub fn no_down_payment(loan: &LoanParameters) -> LoanParameters {
    modify(loan, "no down payment", |l| l.amount_financed = l.car_value)
}

/// Stretch the term to 72 months
pub fn long_term_loan(loan: &LoanParameters) -> LoanParameters {
    modify(loan, "long term loan", |l| l.loan_term_months = 72)
}

/// Raise the APR to 10%
pub fn high_interest_loan(loan: &LoanParameters) -> LoanParameters {
    modify(loan, "high interest loan", |l| l.apr = 0.10)
}

/// The default loan and its variants
pub fn sample_loans() -> Vec<LoanParameters> {
    let base = default_new_car_loan();
    let long_term = long_term_loan(&base);
    let no_down = no_down_payment(&base);
    let high_interest = high_interest_loan(&base);
    let long_term_no_down = long_term_loan(&no_down);
    vec![base, long_term, no_down, high_interest, long_term_no_down]
}
