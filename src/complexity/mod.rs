pub mod cfg;
pub mod cyclomatic;
pub mod decision_points;
pub mod nesting;

pub use cfg::{cfg_metrics, CfgMetrics, ControlFlowGraph};
pub use cyclomatic::{
    cyclomatic_complexity, decision_complexity, region_estimate, ComplexityScores,
};
pub use decision_points::{
    count_decision_points, decision_tokens, scan_decision_points, DecisionPoints, DecisionToken,
};
pub use nesting::max_nesting_depth;

/// Threshold checks applied to the static complexity numbers
#[derive(Clone, Debug)]
pub struct ComplexityCalculator {
    cyclomatic_threshold: u32,
    nesting_threshold: u32,
}

impl ComplexityCalculator {
    pub fn new(cyclomatic_threshold: u32, nesting_threshold: u32) -> Self {
        Self {
            cyclomatic_threshold,
            nesting_threshold,
        }
    }

    pub fn is_complex(&self, c1: u32) -> bool {
        c1 > self.cyclomatic_threshold
    }

    pub fn is_deeply_nested(&self, nesting_depth: u32) -> bool {
        nesting_depth > self.nesting_threshold
    }
}

impl Default for ComplexityCalculator {
    fn default() -> Self {
        Self::new(10, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_checks_are_strict() {
        let calc = ComplexityCalculator::default();
        assert!(!calc.is_complex(10));
        assert!(calc.is_complex(11));
        assert!(!calc.is_deeply_nested(4));
        assert!(calc.is_deeply_nested(5));
    }
}
