use serde::{Deserialize, Serialize};

/// Raw score at or above which confidence is 1.0.
pub const MAX_RAW_SCORE: f32 = 10.0;

const DEFAULT_POINTS: [[f32; 2]; 11] = [
    [0.0, 0.0],
    [1.0, 0.05],
    [2.0, 0.12],
    [3.0, 0.22],
    [4.0, 0.35],
    [5.0, 0.50],
    [6.0, 0.64],
    [7.0, 0.76],
    [8.0, 0.86],
    [9.0, 0.94],
    [10.0, 1.0],
];

/// Monotone piecewise-linear map from a raw archetype score to a confidence.
///
/// Low scores grow slowly from 0 and high scores approach 1.0 quickly, so a
/// clearly matching deck separates from a deck that only touches a few signals.
///
/// Breakpoints are `[raw, confidence]` pairs. Any supplied table is sanitized
/// on construction: points outside `(0, 10)` are dropped, `[0, 0]` and
/// `[10, 1]` are always present, confidences are clamped to \[0.0, 1.0\] and
/// made non-decreasing. Whatever the input, the curve therefore satisfies
/// `confidence(0) == 0`, `confidence(x >= 10) == 1` and monotonicity.
///
/// ```
/// use crdeck_evaluator::archetype::ConfidenceCurve;
///
/// let curve = ConfidenceCurve::default();
/// assert!(curve.confidence(0.0).abs() < f32::EPSILON);
/// assert!((curve.confidence(12.0) - 1.0).abs() < f32::EPSILON);
/// assert!((0.4..=0.7).contains(&curve.confidence(5.0)));
/// assert!(curve.confidence(8.0) >= 0.7);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<[f32; 2]>", into = "Vec<[f32; 2]>")]
pub struct ConfidenceCurve {
    points: Vec<[f32; 2]>,
}

impl Default for ConfidenceCurve {
    fn default() -> Self {
        Self::new(DEFAULT_POINTS.to_vec())
    }
}

impl ConfidenceCurve {
    #[must_use]
    pub fn new(points: impl IntoIterator<Item = [f32; 2]>) -> Self {
        let mut inner = points
            .into_iter()
            .filter(|[x, y]| x.is_finite() && !y.is_nan() && *x > 0.0 && *x < MAX_RAW_SCORE)
            .collect::<Vec<_>>();
        inner.sort_by(|a, b| a[0].total_cmp(&b[0]));
        inner.dedup_by(|b, a| a[0].total_cmp(&b[0]).is_eq());

        let mut points = Vec::with_capacity(inner.len() + 2);
        points.push([0.0, 0.0]);
        let mut floor = 0.0_f32;
        for [x, y] in inner {
            floor = floor.max(y.clamp(0.0, 1.0));
            points.push([x, floor]);
        }
        points.push([MAX_RAW_SCORE, 1.0]);
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// Confidence in \[0.0, 1.0\] for a raw score. NaN maps to 0.0.
    #[must_use]
    pub fn confidence(&self, raw_score: f32) -> f32 {
        if raw_score.is_nan() || raw_score <= 0.0 {
            return 0.0;
        }
        if raw_score >= MAX_RAW_SCORE {
            return 1.0;
        }
        let upper = self
            .points
            .iter()
            .position(|[x, _]| *x >= raw_score)
            .unwrap_or(self.points.len() - 1);
        let [x1, y1] = self.points[upper];
        let [x0, y0] = self.points[upper.saturating_sub(1)];
        if x1 <= x0 {
            return y1;
        }
        let t = (raw_score - x0) / (x1 - x0);
        (y0 + (y1 - y0) * t).clamp(0.0, 1.0)
    }
}

impl From<Vec<[f32; 2]>> for ConfidenceCurve {
    fn from(points: Vec<[f32; 2]>) -> Self {
        Self::new(points)
    }
}

impl From<ConfidenceCurve> for Vec<[f32; 2]> {
    fn from(curve: ConfidenceCurve) -> Self {
        curve.points
    }
}

/// Confidence for a raw archetype score using the default curve.
///
/// ```
/// use crdeck_evaluator::archetype::normalize_confidence;
///
/// assert_eq!(normalize_confidence(0.0), 0.0);
/// assert_eq!(normalize_confidence(10.0), 1.0);
/// assert!(normalize_confidence(7.5) > normalize_confidence(7.0));
/// ```
#[must_use]
pub fn normalize_confidence(raw_score: f32) -> f32 {
    DEFAULT_CURVE.confidence(raw_score)
}

static DEFAULT_CURVE: std::sync::LazyLock<ConfidenceCurve> =
    std::sync::LazyLock::new(ConfidenceCurve::default);

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_monotone(curve: &ConfidenceCurve) {
        let mut previous = curve.confidence(-1.0);
        for step in 0..=1200_u16 {
            let current = curve.confidence(f32::from(step) / 100.0);
            assert!(current >= previous, "drop at {step}");
            assert!((0.0..=1.0).contains(&current));
            previous = current;
        }
    }

    #[test]
    fn test_default_curve_is_monotone() {
        assert_monotone(&ConfidenceCurve::default());
    }

    #[test]
    fn test_endpoints() {
        assert!(normalize_confidence(f32::NAN).abs() < f32::EPSILON);
        assert!(normalize_confidence(-5.0).abs() < f32::EPSILON);
        assert!((normalize_confidence(f32::INFINITY) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_interpolates_between_breakpoints() {
        let expected = (0.76 + 0.86) / 2.0;
        assert!((normalize_confidence(7.5) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_table_is_sanitized() {
        let curve = ConfidenceCurve::new([
            [8.0, 0.2],
            [2.0, 0.9],
            [5.0, f32::NAN],
            [-3.0, 0.5],
            [15.0, 0.1],
            [4.0, 3.0],
        ]);
        assert_monotone(&curve);
        assert!(curve.confidence(0.0).abs() < f32::EPSILON);
        assert!((curve.confidence(10.0) - 1.0).abs() < f32::EPSILON);
        assert!((curve.confidence(4.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_table_is_linear() {
        let curve = ConfidenceCurve::new([]);
        assert!((curve.confidence(5.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_deserialize() {
        let curve: ConfidenceCurve = serde_json::from_str("[[5.0, 0.6]]").unwrap();
        assert_eq!(curve.points().len(), 3);
        assert!((curve.confidence(5.0) - 0.6).abs() < 1e-6);
    }
}
