//! Query behaviour knobs.

use serde::{Deserialize, Serialize};

/// Placeholder written for missing or non-numeric values.
pub const MISSING_VALUE: &str = "-";

/// What to do with a `year` attribute that is not an integer when
/// resolving the dataset's year range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnparsableYearPolicy {
    /// Ignore the record.
    #[default]
    Skip,
    /// Count the year as `0`, which drags the minimum down to zero.
    TreatAsZero,
}

/// Configuration for extraction and formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Handling of unparsable years during range resolution.
    pub unparsable_years: UnparsableYearPolicy,
    /// Digits after the decimal point for formatted values.
    pub decimals: usize,
    /// Text used for missing or non-numeric values.
    pub placeholder: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            unparsable_years: UnparsableYearPolicy::default(),
            decimals: 3,
            placeholder: MISSING_VALUE.to_string(),
        }
    }
}

impl QueryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_unparsable_years(mut self, policy: UnparsableYearPolicy) -> Self {
        self.unparsable_years = policy;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Format a raw emission value.
    ///
    /// Values that parse as a finite number get exactly `decimals` digits
    /// after the point; anything else becomes the placeholder. Comma digit
    /// grouping (`1,234.5`) is accepted.
    pub fn format_value(&self, raw: Option<&str>) -> String {
        match raw.and_then(parse_number) {
            Some(v) if v.is_finite() => format!("{:.*}", self.decimals, v),
            _ => self.placeholder.clone(),
        }
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.contains(',') {
        text.replace(',', "").parse().ok()
    } else {
        text.parse().ok()
    }
}
