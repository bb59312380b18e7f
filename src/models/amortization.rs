//! Level-payment loan amortization
//!
//! Closed forms of the monthly recurrence `b(n) = b(n-1) * (1 + r) - payment`
//! with `b(0) = principal`:
//!
//! - balance: `b(n) = P * (1 + r)^n - payment * ((1 + r)^n - 1) / r`
//! - payment: `P * r * (1 + r)^n / ((1 + r)^n - 1)`, the payment that makes `b(n) = 0`
//!
//! A zero rate uses the limiting case: equal principal payments `P / n`.

/// Rates below this magnitude are treated as zero
const ZERO_RATE_EPSILON: f64 = 1e-10;

fn is_zero_rate(monthly_rate: f64) -> bool {
    monthly_rate.abs() < ZERO_RATE_EPSILON
}

/// `(1 + r)^months`, saturating the exponent at `i32::MAX`
fn growth_factor(monthly_rate: f64, months: u32) -> f64 {
    let exponent = i32::try_from(months).unwrap_or(i32::MAX);
    (1.0 + monthly_rate).powi(exponent)
}

/// Monthly payment that fully amortizes `principal` over `months`
///
/// `months` must be positive; callers validate this at the loan boundary.
pub fn calc_payment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if is_zero_rate(monthly_rate) {
        return principal / months as f64;
    }

    let multiplier = growth_factor(monthly_rate, months);
    if multiplier.is_infinite() {
        // Limit as months grows: interest-only payment
        return principal * monthly_rate;
    }
    principal * monthly_rate * multiplier / (multiplier - 1.0)
}

/// Remaining balance after `months` level payments
pub fn calc_balance(principal: f64, monthly_rate: f64, payment: f64, months: u32) -> f64 {
    if is_zero_rate(monthly_rate) {
        return principal - payment * months as f64;
    }

    let multiplier = growth_factor(monthly_rate, months);
    principal * multiplier - payment * (multiplier - 1.0) / monthly_rate
}

/// One month of the balance recurrence
fn next_balance(balance: f64, monthly_rate: f64, payment: f64) -> f64 {
    balance * (1.0 + monthly_rate) - payment
}

/// Balance by iterating the recurrence month by month.
///
/// O(n) reference for [`calc_balance`]; both agree to within floating-point error.
pub fn balance_by_recurrence(principal: f64, monthly_rate: f64, payment: f64, months: u32) -> f64 {
    (0..months).fold(principal, |balance, _| next_balance(balance, monthly_rate, payment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_closed_form_matches_recurrence() {
        for n in 0..12 {
            let closed = calc_balance(100.0, 0.01, 10.0, n);
            let iterated = balance_by_recurrence(100.0, 0.01, 10.0, n);
            assert_abs_diff_eq!(closed, iterated, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_balance_at_month_zero_is_principal() {
        assert_eq!(calc_balance(27_000.0, 0.05 / 12.0, 621.79, 0), 27_000.0);
    }

    #[test]
    fn test_payment_checkpoint() {
        // 27k at 5% over 48 months
        let payment = calc_payment(27_000.0, 0.05 / 12.0, 48);
        assert!((payment - 621.7).abs() < 1.0, "payment = {}", payment);
    }

    #[test]
    fn test_payment_fully_amortizes() {
        let cases = [
            (27_000.0, 0.05 / 12.0, 48),
            (30_000.0, 0.10 / 12.0, 72),
            (1_000.0, 0.20 / 12.0, 1),
            (45_500.0, 0.0349 / 12.0, 84),
        ];

        for (principal, rate, months) in cases {
            let payment = calc_payment(principal, rate, months);
            let balance = calc_balance(principal, rate, payment, months);
            assert!(
                balance.abs() < 1e-5 * principal,
                "residual balance {} for ({}, {}, {})",
                balance, principal, rate, months
            );
        }
    }

    #[test]
    fn test_balance_decreases_over_term() {
        let rate = 0.05 / 12.0;
        let payment = calc_payment(27_000.0, rate, 48);
        let balances: Vec<f64> = (0..=48).map(|n| calc_balance(27_000.0, rate, payment, n)).collect();
        assert!(balances.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_zero_rate_uses_equal_principal() {
        let payment = calc_payment(24_000.0, 0.0, 48);
        assert_relative_eq!(payment, 500.0);

        let balance = calc_balance(24_000.0, 0.0, payment, 12);
        assert_relative_eq!(balance, 18_000.0);
        assert_abs_diff_eq!(calc_balance(24_000.0, 0.0, payment, 48), 0.0, epsilon = 1e-9);

        assert!(payment.is_finite());
    }

    #[test]
    fn test_very_long_term_payment_approaches_interest_only() {
        let rate = 0.05 / 12.0;
        let payment = calc_payment(30_000.0, rate, 3_000_000_000);
        assert_relative_eq!(payment, 30_000.0 * rate);

        // Exponent saturates instead of wrapping negative
        let long = calc_payment(30_000.0, rate, i32::MAX as u32);
        let longer = calc_payment(30_000.0, rate, u32::MAX);
        assert_eq!(long, longer);
    }

    #[test]
    fn test_zero_rate_recurrence_agrees() {
        let closed = calc_balance(1_200.0, 0.0, 100.0, 7);
        let iterated = balance_by_recurrence(1_200.0, 0.0, 100.0, 7);
        assert_abs_diff_eq!(closed, iterated, epsilon = 1e-9);
    }
}
