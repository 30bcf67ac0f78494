//! Amortization engine for a fixed-rate mortgage calculator
//!
//! Given a principal, an annual interest rate, and a term in years, the
//! engine derives the fixed level payment and produces a full
//! payment-by-payment breakdown of principal and interest at both monthly
//! and annual granularity. Annual figures are always derived from the
//! monthly schedule, so the two granularities cannot drift apart.
//!
//! The crate is organized as:
//! - [`schedule`]: the computation itself (payment formula, monthly
//!   schedule generation, annual aggregation)
//! - [`validation`]: per-field bounds checking for raw form values
//! - [`input`]: parsing of raw form text into engine inputs
//! - [`report`]: summary/worked-example views and CSV export for
//!   presentation layers

pub mod input;
pub mod report;
pub mod schedule;
pub mod validation;

pub use schedule::{calculate, LoanInputs, PeriodEntry, ScheduleResult};
pub use validation::validate_field;
