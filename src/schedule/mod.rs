//! Amortization schedule engine for fixed-rate level-payment loans

mod annual;
mod engine;
mod monthly;
mod rows;

pub use annual::aggregate_to_annual;
pub use engine::calculate;
pub use monthly::{generate_monthly_schedule, month_in_year, monthly_payment, year_of_month};
pub use rows::{LoanInputs, PeriodEntry, ScheduleResult};

// ============================================================================
// Schedule Constants
// ============================================================================

/// Payment periods per year; payments are monthly throughout.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Balance floor in currency units (one cent). The final payment leaves
/// floating-point residue on the balance; anything below this threshold is
/// reported as exactly zero so the loan shows as fully paid off.
pub const BALANCE_EPSILON: f64 = 0.01;
