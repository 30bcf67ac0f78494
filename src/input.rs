//! Raw form input parsing
//!
//! The engine wants clean numeric fields; this module turns the text a
//! form collects (possibly with thousands separators or a currency sign)
//! into those fields, and aggregates per-field validation feedback.

use serde::{Deserialize, Serialize};

use crate::schedule::LoanInputs;
use crate::validation::validate_field;

/// Parse a numeric form field, ignoring thousands separators, a leading
/// currency sign, and surrounding whitespace.
///
/// Returns NaN when the text does not parse; downstream validation
/// reports NaN as "required", and the engine treats it as not yet
/// computable.
pub fn parse_numeric(raw: &str) -> f64 {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '$')
        .collect();

    if cleaned.is_empty() {
        return f64::NAN;
    }
    cleaned.parse().unwrap_or(f64::NAN)
}

/// Raw text of the three loan form fields
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoanForm {
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub rate: String,
    #[serde(default)]
    pub years: String,
}

impl LoanForm {
    pub fn new(principal: &str, rate: &str, years: &str) -> Self {
        Self {
            principal: principal.to_string(),
            rate: rate.to_string(),
            years: years.to_string(),
        }
    }

    /// Per-field validation messages in field order; empty when every
    /// field is present and in bounds
    pub fn validation_messages(&self) -> Vec<String> {
        [
            ("principal", self.principal.as_str()),
            ("rate", self.rate.as_str()),
            ("years", self.years.as_str()),
        ]
        .into_iter()
        .filter_map(|(field, raw)| validate_field(field, parse_numeric(raw)))
        .collect()
    }

    /// Convert to engine inputs. Fields that fail to parse become values
    /// the engine's guard treats as "nothing to compute yet".
    pub fn to_inputs(&self) -> LoanInputs {
        let years = parse_numeric(&self.years);
        LoanInputs {
            principal: parse_numeric(&self.principal),
            annual_rate_percent: parse_numeric(&self.rate),
            term_years: if years.is_finite() && years >= 1.0 {
                years as u32
            } else {
                0
            },
        }
    }
}
