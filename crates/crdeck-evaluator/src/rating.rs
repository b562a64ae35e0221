//! Qualitative rating scale shared by category and overall scores.
//!
//! Star buckets are derived from the rating tier, so the two scales can never
//! disagree: 3 stars from [`Rating::Amazing`] up, 2 stars from [`Rating::Decent`]
//! up, 1 star below.

use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Rating {
    #[display("Awful")]
    Awful,
    #[display("Terrible")]
    Terrible,
    #[display("Bad")]
    Bad,
    #[display("Poor")]
    Poor,
    #[display("Mediocre")]
    Mediocre,
    #[display("Decent")]
    Decent,
    #[display("Good")]
    Good,
    #[display("Great")]
    Great,
    #[display("Amazing")]
    Amazing,
    #[display("Godly!")]
    Godly,
}

impl Rating {
    /// All tiers from lowest to highest.
    pub const ALL: [Self; 10] = [
        Self::Awful,
        Self::Terrible,
        Self::Bad,
        Self::Poor,
        Self::Mediocre,
        Self::Decent,
        Self::Good,
        Self::Great,
        Self::Amazing,
        Self::Godly,
    ];

    /// Maps a 0-10 score to its tier. Out-of-range scores are clamped first.
    ///
    /// ```
    /// use crdeck_evaluator::rating::Rating;
    ///
    /// assert_eq!(Rating::from_score(9.0), Rating::Godly);
    /// assert_eq!(Rating::from_score(8.99), Rating::Amazing);
    /// assert_eq!(Rating::from_score(-3.0), Rating::Awful);
    /// assert_eq!(Rating::from_score(42.0), Rating::Godly);
    /// ```
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        let score = clamp_score(score);
        match score {
            s if s >= 9.0 => Self::Godly,
            s if s >= 8.0 => Self::Amazing,
            s if s >= 7.0 => Self::Great,
            s if s >= 6.0 => Self::Good,
            s if s >= 5.0 => Self::Decent,
            s if s >= 4.0 => Self::Mediocre,
            s if s >= 3.0 => Self::Poor,
            s if s >= 2.0 => Self::Bad,
            s if s >= 1.0 => Self::Terrible,
            _ => Self::Awful,
        }
    }

    #[must_use]
    pub fn stars(self) -> u8 {
        if self >= Self::Amazing {
            3
        } else if self >= Self::Decent {
            2
        } else {
            1
        }
    }
}

/// Clamps a score into \[0.0, 10.0\], mapping NaN to 0.0.
#[must_use]
pub fn clamp_score(score: f32) -> f32 {
    if score.is_nan() {
        return 0.0;
    }
    score.clamp(0.0, 10.0)
}

#[must_use]
pub fn round_to_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        let expected = [
            (0.0, Rating::Awful),
            (0.99, Rating::Awful),
            (1.0, Rating::Terrible),
            (2.0, Rating::Bad),
            (3.0, Rating::Poor),
            (4.0, Rating::Mediocre),
            (5.0, Rating::Decent),
            (6.0, Rating::Good),
            (7.0, Rating::Great),
            (8.0, Rating::Amazing),
            (9.0, Rating::Godly),
            (10.0, Rating::Godly),
        ];
        for (score, rating) in expected {
            assert_eq!(Rating::from_score(score), rating, "score {score}");
        }
    }

    #[test]
    fn test_stars_follow_rating() {
        assert_eq!(Rating::from_score(4.9).stars(), 1);
        assert_eq!(Rating::from_score(5.0).stars(), 2);
        assert_eq!(Rating::from_score(7.9).stars(), 2);
        assert_eq!(Rating::from_score(8.0).stars(), 3);
        assert_eq!(Rating::from_score(10.0).stars(), 3);
    }

    #[test]
    fn test_rating_is_monotone() {
        let mut previous = Rating::Awful;
        for step in 0..=100_u8 {
            let rating = Rating::from_score(f32::from(step) / 10.0);
            assert!(rating >= previous);
            previous = rating;
        }
        assert_eq!(Rating::ALL.last(), Some(&previous));
    }

    #[test]
    fn test_clamp_score() {
        assert!(clamp_score(f32::NAN).abs() < f32::EPSILON);
        assert!((clamp_score(11.0) - 10.0).abs() < f32::EPSILON);
        assert!(clamp_score(-1.0).abs() < f32::EPSILON);
        assert!((round_to_tenth(7.46) - 7.5).abs() < 1e-6);
    }
}
