//! Top-level schedule computation

use log::debug;

use super::{
    aggregate_to_annual, generate_monthly_schedule, monthly_payment, LoanInputs, ScheduleResult,
    MONTHS_PER_YEAR,
};

/// Compute the fixed payment and both schedule granularities for a loan.
///
/// Incomplete inputs (non-positive or non-finite principal/rate, zero
/// term) produce [`ScheduleResult::empty`] rather than an error, so a
/// caller can feed a half-filled form straight through and render a
/// placeholder. For computable inputs the result is deterministic:
/// identical inputs give bit-identical output.
pub fn calculate(inputs: &LoanInputs) -> ScheduleResult {
    if !inputs.is_computable() {
        return ScheduleResult::empty();
    }

    let monthly_rate = inputs.annual_rate_percent / 100.0 / MONTHS_PER_YEAR as f64;
    let total_months = inputs.term_years * MONTHS_PER_YEAR;
    let payment = monthly_payment(inputs.principal, monthly_rate, total_months);

    debug!(
        "calculate: principal={:.2} rate={:.3}% months={} payment={:.2}",
        inputs.principal, inputs.annual_rate_percent, total_months, payment
    );

    let monthly_schedule =
        generate_monthly_schedule(inputs.principal, monthly_rate, total_months, payment);
    let annual_schedule = aggregate_to_annual(&monthly_schedule);

    let total_interest: f64 = monthly_schedule.iter().map(|m| m.interest_portion).sum();

    ScheduleResult {
        monthly_payment: payment,
        annual_payment: payment * MONTHS_PER_YEAR as f64,
        total_interest,
        total_paid: inputs.principal + total_interest,
        monthly_schedule,
        annual_schedule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_inputs_return_empty() {
        for inputs in [
            LoanInputs::new(0.0, 6.0, 30),
            LoanInputs::new(-100_000.0, 6.0, 30),
            LoanInputs::new(800_000.0, 0.0, 30),
            LoanInputs::new(800_000.0, -1.0, 30),
            LoanInputs::new(800_000.0, 6.0, 0),
            LoanInputs::new(f64::NAN, 6.0, 30),
            LoanInputs::new(800_000.0, f64::NAN, 30),
        ] {
            let result = calculate(&inputs);
            assert!(result.is_empty(), "expected empty result for {:?}", inputs);
            assert_eq!(result.monthly_payment, 0.0);
            assert_eq!(result.annual_payment, 0.0);
            assert_eq!(result.total_interest, 0.0);
            assert_eq!(result.total_paid, 0.0);
            assert!(result.annual_schedule.is_empty());
        }
    }

    #[test]
    fn test_full_scenario_800k_6pct_30yr() {
        let result = calculate(&LoanInputs::new(800_000.0, 6.0, 30));

        assert_eq!(result.monthly_schedule.len(), 360);
        assert_eq!(result.annual_schedule.len(), 30);

        // Closed-form payment for 800k / 6% / 30yr
        assert!((result.monthly_payment - 4796.40).abs() < 0.01);
        assert!((result.annual_payment - result.monthly_payment * 12.0).abs() < 1e-9);

        // Total interest = 360 payments minus the principal retired
        let expected_interest = result.monthly_payment * 360.0 - 800_000.0;
        assert!((result.total_interest - expected_interest).abs() < 1e-4);
        assert!((result.total_interest - 926_705.7).abs() < 1.0);

        // Fully amortized
        assert_eq!(result.monthly_schedule[359].remaining_balance, 0.0);
        assert_eq!(result.annual_schedule[29].remaining_balance, 0.0);
    }

    #[test]
    fn test_conservation() {
        let inputs = LoanInputs::new(350_000.0, 4.25, 15);
        let result = calculate(&inputs);

        let interest_sum: f64 = result
            .monthly_schedule
            .iter()
            .map(|m| m.interest_portion)
            .sum();

        assert!((result.total_interest - interest_sum).abs() < 1e-9);
        assert!((result.total_paid - (inputs.principal + result.total_interest)).abs() < 1e-9);
    }

    #[test]
    fn test_payment_invariance_across_schedule() {
        let result = calculate(&LoanInputs::new(500_000.0, 7.0, 20));

        for entry in &result.monthly_schedule {
            assert!((entry.total_payment - result.monthly_payment).abs() < 1e-6);
        }
    }

    #[test]
    fn test_cross_granularity_consistency() {
        let result = calculate(&LoanInputs::new(800_000.0, 6.0, 30));

        for (y, year) in result.annual_schedule.iter().enumerate() {
            let months = &result.monthly_schedule[y * 12..(y + 1) * 12];
            let principal: f64 = months.iter().map(|m| m.principal_portion).sum();
            let interest: f64 = months.iter().map(|m| m.interest_portion).sum();

            assert!((year.principal_portion - principal).abs() < 1e-9);
            assert!((year.interest_portion - interest).abs() < 1e-9);
            assert_eq!(year.remaining_balance, months[11].remaining_balance);
        }
    }

    #[test]
    fn test_determinism() {
        let inputs = LoanInputs::new(275_000.0, 5.875, 30);
        assert_eq!(calculate(&inputs), calculate(&inputs));
    }

    #[test]
    fn test_one_year_term() {
        let result = calculate(&LoanInputs::new(12_000.0, 3.0, 1));

        assert_eq!(result.monthly_schedule.len(), 12);
        assert_eq!(result.annual_schedule.len(), 1);
        assert_eq!(result.monthly_schedule[11].remaining_balance, 0.0);

        // Single annual row covers the whole loan
        let year = &result.annual_schedule[0];
        assert!((year.principal_portion - 12_000.0).abs() < 0.01);
        assert!((year.interest_portion - result.total_interest).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_rate_still_amortizes() {
        // Near-zero but positive rate stays on the closed-form path
        let result = calculate(&LoanInputs::new(100_000.0, 0.001, 10));

        assert_eq!(result.monthly_schedule.len(), 120);
        assert_eq!(result.monthly_schedule[119].remaining_balance, 0.0);
        // Payment approaches principal / months as rate tends to zero
        assert!((result.monthly_payment - 100_000.0 / 120.0).abs() < 1.0);
    }
}
