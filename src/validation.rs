//! Field-level validation for raw form values
//!
//! Bounds are product choices for a consumer-mortgage form, not derived
//! constraints; they live in one table so they can be retuned without
//! touching the checking logic.

/// Inclusive bounds and display label for one form field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    /// Field identifier used by the form
    pub field: &'static str,
    /// Human-readable name used in messages
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Validation rules for the three loan fields
pub const FIELD_RULES: [FieldRule; 3] = [
    FieldRule {
        field: "principal",
        label: "Loan amount",
        min: 1000.0,
        max: 10_000_000.0,
    },
    FieldRule {
        field: "rate",
        label: "Interest rate",
        min: 0.1,
        max: 20.0,
    },
    FieldRule {
        field: "years",
        label: "Loan term",
        min: 1.0,
        max: 40.0,
    },
];

/// Check a single field value against its bounds.
///
/// Returns a message describing the violation, or `None` when the value
/// is in range. NaN (a failed parse or empty field) reports as required.
/// Fields with no rule have nothing to validate and also return `None`.
pub fn validate_field(field: &str, value: f64) -> Option<String> {
    let rule = FIELD_RULES.iter().find(|r| r.field == field)?;

    if value.is_nan() {
        Some(format!("{} is required", rule.label))
    } else if value < rule.min {
        Some(format!(
            "{} must be at least {}",
            rule.label,
            fmt_bound(rule.min)
        ))
    } else if value > rule.max {
        Some(format!(
            "{} must be no more than {}",
            rule.label,
            fmt_bound(rule.max)
        ))
    } else {
        None
    }
}

/// Format a bound without a trailing ".0" for whole numbers
fn fmt_bound(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
