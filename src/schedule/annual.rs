//! Annual aggregation of the monthly schedule
//!
//! Annual figures are sums over the monthly rows, never recomputed from
//! the loan parameters. That keeps the two granularities exactly
//! consistent: a year's principal and interest are by construction the
//! totals of its twelve months.

use super::{PeriodEntry, MONTHS_PER_YEAR};

/// Collapse a monthly schedule into one entry per year.
///
/// Each year's portions are the sums of its months; the year's balance is
/// the balance after the year's last month.
pub fn aggregate_to_annual(monthly: &[PeriodEntry]) -> Vec<PeriodEntry> {
    monthly
        .chunks(MONTHS_PER_YEAR as usize)
        .enumerate()
        .map(|(i, months)| PeriodEntry {
            period: i as u32 + 1,
            principal_portion: months.iter().map(|m| m.principal_portion).sum(),
            interest_portion: months.iter().map(|m| m.interest_portion).sum(),
            total_payment: months.iter().map(|m| m.total_payment).sum(),
            remaining_balance: months.last().map_or(0.0, |m| m.remaining_balance),
        })
        .collect()
}
