//! Loan input and schedule row types

use serde::{Deserialize, Serialize};

/// Loan parameters supplied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Amount borrowed, in currency units
    pub principal: f64,

    /// Annual interest rate in percent (6 means 6%)
    pub annual_rate_percent: f64,

    /// Loan term in whole years
    pub term_years: u32,
}

impl LoanInputs {
    pub fn new(principal: f64, annual_rate_percent: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_years,
        }
    }

    /// Whether the inputs describe a computable loan.
    ///
    /// Non-positive or non-finite values are how a half-filled form shows
    /// up here; they mean "nothing to compute yet", not an error.
    pub fn is_computable(&self) -> bool {
        self.principal.is_finite()
            && self.principal > 0.0
            && self.annual_rate_percent.is_finite()
            && self.annual_rate_percent > 0.0
            && self.term_years > 0
    }
}

/// One row of an amortization schedule, at monthly or annual granularity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodEntry {
    /// 1-based period index: month number for monthly rows, year number
    /// for annual rows
    pub period: u32,

    /// Amount of this period's payment applied to principal
    pub principal_portion: f64,

    /// Amount of this period's payment applied to interest
    pub interest_portion: f64,

    /// The fixed payment for monthly rows; the sum of the year's twelve
    /// payments for annual rows
    pub total_payment: f64,

    /// Outstanding principal immediately after this period's payment
    pub remaining_balance: f64,
}

/// Full output of a schedule computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Fixed level payment, constant across every month
    pub monthly_payment: f64,

    /// Nominal annual outlay, `monthly_payment * 12`
    pub annual_payment: f64,

    /// Sum of every month's interest portion
    pub total_interest: f64,

    /// `principal + total_interest`
    pub total_paid: f64,

    /// One entry per month, length `term_years * 12`
    pub monthly_schedule: Vec<PeriodEntry>,

    /// One entry per year, each aggregating its twelve months
    pub annual_schedule: Vec<PeriodEntry>,
}

impl ScheduleResult {
    /// Zeroed result returned while inputs are incomplete. Callers render
    /// this as a neutral placeholder state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True for the placeholder result produced by incomplete inputs
    pub fn is_empty(&self) -> bool {
        self.monthly_schedule.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computable_guard() {
        assert!(LoanInputs::new(800_000.0, 6.0, 30).is_computable());

        assert!(!LoanInputs::new(0.0, 6.0, 30).is_computable());
        assert!(!LoanInputs::new(-1.0, 6.0, 30).is_computable());
        assert!(!LoanInputs::new(800_000.0, 0.0, 30).is_computable());
        assert!(!LoanInputs::new(800_000.0, -0.5, 30).is_computable());
        assert!(!LoanInputs::new(800_000.0, 6.0, 0).is_computable());
        assert!(!LoanInputs::new(f64::NAN, 6.0, 30).is_computable());
        assert!(!LoanInputs::new(800_000.0, f64::INFINITY, 30).is_computable());
    }

    #[test]
    fn test_empty_result() {
        let result = ScheduleResult::empty();
        assert!(result.is_empty());
        assert_eq!(result.monthly_payment, 0.0);
        assert_eq!(result.total_paid, 0.0);
        assert!(result.annual_schedule.is_empty());
    }
}
