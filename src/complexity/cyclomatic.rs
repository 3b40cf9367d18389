use serde::Serialize;

/// `c1`: cyclomatic complexity V(G) = E - N + 2, approximated by P + 1.
pub fn cyclomatic_complexity(decision_points: u32) -> u32 {
    decision_points.saturating_add(1).max(1)
}

/// `c2`: decision complexity. Same formula as `c1` today, computed on its own
/// path so the two metrics can diverge.
pub fn decision_complexity(decision_points: u32) -> u32 {
    decision_points.saturating_add(1).max(1)
}

/// `c3`: region count estimate, a rounded copy of `c1`.
pub fn region_estimate(c1: u32) -> u32 {
    let rounded = f64::from(c1).round();
    if rounded < 1.0 {
        1
    } else {
        rounded as u32
    }
}

/// The three complexity numbers derived from a decision point count.
///
/// Every field is at least 1, including for empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityScores {
    pub c1: u32,
    pub c2: u32,
    pub c3: u32,
}

impl ComplexityScores {
    pub fn from_decision_points(decision_points: u32) -> Self {
        let c1 = cyclomatic_complexity(decision_points);
        Self {
            c1,
            c2: decision_complexity(decision_points),
            c3: region_estimate(c1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_decision_points_floor() {
        let scores = ComplexityScores::from_decision_points(0);
        assert_eq!(scores, ComplexityScores { c1: 1, c2: 1, c3: 1 });
    }

    #[test]
    fn test_scores_follow_decision_points() {
        let scores = ComplexityScores::from_decision_points(6);
        assert_eq!(scores.c1, 7);
        assert_eq!(scores.c2, 7);
        assert_eq!(scores.c3, 7);
    }

    #[test]
    fn test_region_estimate_floor() {
        assert_eq!(region_estimate(0), 1);
        assert_eq!(region_estimate(12), 12);
    }

    #[test]
    fn test_saturation() {
        assert_eq!(cyclomatic_complexity(u32::MAX), u32::MAX);
    }
}
