//! Precision-preserving display of metric values
//!
//! Values below 1 keep two decimals and larger values keep one, with
//! trailing zeros and a trailing decimal point removed. Absent, non-finite
//! and negative metrics display as [`NA`].

/// Sentinel for values that cannot be displayed
pub const NA: &str = "NA";

/// Two-tier precision rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrecisionRule {
    /// Magnitudes strictly below this use `fine_decimals`
    pub fine_below: f64,
    pub fine_decimals: usize,
    pub coarse_decimals: usize,
}

impl PrecisionRule {
    pub const DEFAULT: PrecisionRule = PrecisionRule {
        fine_below: 1.0,
        fine_decimals: 2,
        coarse_decimals: 1,
    };

    fn decimals_for(&self, magnitude: f64) -> usize {
        if magnitude < self.fine_below {
            self.fine_decimals
        } else {
            self.coarse_decimals
        }
    }
}

impl Default for PrecisionRule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricFormatter<'a> {
    rule: &'a PrecisionRule,
}

impl<'a> MetricFormatter<'a> {
    pub fn new(rule: &'a PrecisionRule) -> Self {
        Self { rule }
    }

    /// Display a metric; negative values are upstream errors and show as `NA`
    pub fn format(&self, value: Option<f64>) -> String {
        match value {
            Some(v) if v.is_finite() && v >= 0.0 => self.format_magnitude(v),
            _ => NA.to_string(),
        }
    }

    /// Display a signed difference: `+` for positive, `0` for zero
    pub fn format_delta(&self, delta: Option<f64>) -> String {
        match delta {
            Some(d) if d.is_finite() => {
                let magnitude = self.format_magnitude(d.abs());
                match magnitude.as_str() {
                    "0" => magnitude,
                    _ if d > 0.0 => format!("+{magnitude}"),
                    _ => format!("-{magnitude}"),
                }
            }
            _ => NA.to_string(),
        }
    }

    fn format_magnitude(&self, value: f64) -> String {
        // adding 0.0 turns -0.0 into 0.0
        let value = value + 0.0;
        let decimals = self.rule.decimals_for(value.abs());
        strip_trailing_zeros(format!("{value:.decimals$}"))
    }
}

impl Default for MetricFormatter<'static> {
    fn default() -> Self {
        Self::new(&PrecisionRule::DEFAULT)
    }
}

fn strip_trailing_zeros(formatted: String) -> String {
    if !formatted.contains('.') {
        return formatted;
    }
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Format with [`PrecisionRule::DEFAULT`]
pub fn format_metric(value: Option<f64>) -> String {
    MetricFormatter::default().format(value)
}

/// Format a signed difference with [`PrecisionRule::DEFAULT`]
pub fn format_delta(delta: Option<f64>) -> String {
    MetricFormatter::default().format_delta(delta)
}
