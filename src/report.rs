//! Presentation-facing views of a schedule result
//!
//! The engine's output is consumed by summary panels, an annotated
//! payment-formula display, and chart/table renderers. This module
//! prepares those views and exports schedules as CSV.

use serde::Serialize;
use thiserror::Error;

use crate::schedule::{LoanInputs, PeriodEntry, ScheduleResult, MONTHS_PER_YEAR};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write schedule CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Headline figures for the summary panel
#[derive(Debug, Clone, Serialize)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub annual_payment: f64,
    /// Monthly rate in percent, annual rate / 12
    pub monthly_rate_percent: f64,
    pub total_interest: f64,
    pub total_paid: f64,
}

impl LoanSummary {
    pub fn from_result(inputs: &LoanInputs, result: &ScheduleResult) -> Self {
        Self {
            monthly_payment: result.monthly_payment,
            annual_payment: result.annual_payment,
            monthly_rate_percent: inputs.annual_rate_percent / MONTHS_PER_YEAR as f64,
            total_interest: result.total_interest,
            total_paid: result.total_paid,
        }
    }
}

/// First-month figures for the worked payment-formula example
#[derive(Debug, Clone, Serialize)]
pub struct WorkedExample {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub term_years: u32,
    pub monthly_payment: f64,
    pub first_month_interest: f64,
    pub first_month_principal: f64,
}

impl WorkedExample {
    /// `None` for an empty result (incomplete form)
    pub fn from_result(inputs: &LoanInputs, result: &ScheduleResult) -> Option<Self> {
        let first = result.monthly_schedule.first()?;
        Some(Self {
            principal: inputs.principal,
            annual_rate_percent: inputs.annual_rate_percent,
            term_years: inputs.term_years,
            monthly_payment: result.monthly_payment,
            first_month_interest: first.interest_portion,
            first_month_principal: first.principal_portion,
        })
    }
}

/// Write one schedule granularity as CSV, amounts rounded to cents
pub fn write_schedule_csv<W: std::io::Write>(
    writer: W,
    schedule: &[PeriodEntry],
) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Period", "Principal", "Interest", "Payment", "Balance"])?;

    for row in schedule {
        wtr.write_record([
            row.period.to_string(),
            format!("{:.2}", row.principal_portion),
            format!("{:.2}", row.interest_portion),
            format!("{:.2}", row.total_payment),
            format!("{:.2}", row.remaining_balance),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
