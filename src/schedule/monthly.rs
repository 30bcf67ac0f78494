//! Monthly schedule generation
//!
//! The fixed payment comes from the standard annuity-amortization formula;
//! the schedule is then a single forward pass carrying the balance month
//! by month.

use super::{PeriodEntry, BALANCE_EPSILON, MONTHS_PER_YEAR};

/// Fixed level payment that retires `principal` over `total_months` at
/// monthly rate `monthly_rate` (a decimal, e.g. 0.005 for 6% annual):
///
/// `payment = P * (r * (1+r)^n) / ((1+r)^n - 1)`
///
/// Well-defined for any `monthly_rate > 0` since the denominator stays
/// strictly positive; callers guard the zero-rate case upstream.
pub fn monthly_payment(principal: f64, monthly_rate: f64, total_months: u32) -> f64 {
    let growth = (1.0 + monthly_rate).powi(total_months as i32);
    principal * (monthly_rate * growth) / (growth - 1.0)
}

/// Generate the month-by-month principal/interest split.
///
/// Each month pays `balance * rate` of interest, the rest of the fixed
/// payment retires principal. Once the balance falls below
/// [`BALANCE_EPSILON`] it is set to exactly zero, so the final row always
/// reports the loan as fully paid rather than carrying float residue.
pub fn generate_monthly_schedule(
    principal: f64,
    monthly_rate: f64,
    total_months: u32,
    payment: f64,
) -> Vec<PeriodEntry> {
    let mut schedule = Vec::with_capacity(total_months as usize);
    let mut remaining = principal;

    for month in 1..=total_months {
        let interest_portion = remaining * monthly_rate;
        let principal_portion = payment - interest_portion;
        remaining -= principal_portion;

        if remaining < BALANCE_EPSILON {
            remaining = 0.0;
        }

        schedule.push(PeriodEntry {
            period: month,
            principal_portion,
            interest_portion,
            total_payment: payment,
            remaining_balance: remaining,
        });
    }

    schedule
}

/// 1-based year a given month number falls in (months 1-12 are year 1)
pub fn year_of_month(month: u32) -> u32 {
    (month + MONTHS_PER_YEAR - 1) / MONTHS_PER_YEAR
}

/// Position of a month within its year, 1-12. Used by table renderers
/// for the per-year monthly drill-down.
pub fn month_in_year(month: u32) -> u32 {
    (month - 1) % MONTHS_PER_YEAR + 1
}
