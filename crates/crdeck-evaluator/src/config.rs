//! Tunable constants for deck evaluation.
//!
//! All weights, penalty magnitudes and thresholds live here instead of being
//! scattered through the scoring code. [`EvaluationConfig::default()`] holds the
//! built-in values; every field is a serde value so a tuned configuration can be
//! loaded from JSON and injected into a [`DeckEvaluator`](crate::deck_evaluator::DeckEvaluator).
//!
//! ```
//! use crdeck_evaluator::config::EvaluationConfig;
//!
//! let config = EvaluationConfig::default();
//! assert!((config.weights.total() - 1.0).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};

use crate::archetype::ConfidenceCurve;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    pub weights: CategoryWeights,
    pub flaw_penalties: FlawPenalties,
    pub missing_card_penalties: MissingCardPenalties,
    pub hybrid: HybridThresholds,
    pub confidence_curve: ConfidenceCurve,
}

/// Share of each category in the overall score.
///
/// Attack, defense and synergy carry the largest shares. When a player profile
/// is supplied, the playability share is spent on ladder viability instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub attack: f32,
    pub defense: f32,
    pub synergy: f32,
    pub versatility: f32,
    pub f2p: f32,
    pub playability: f32,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            attack: 0.22,
            defense: 0.22,
            synergy: 0.22,
            versatility: 0.12,
            f2p: 0.12,
            playability: 0.10,
        }
    }
}

impl CategoryWeights {
    #[must_use]
    pub fn total(&self) -> f32 {
        self.attack + self.defense + self.synergy + self.versatility + self.f2p + self.playability
    }
}

/// Flat deductions for critical composition flaws.
///
/// Applied to the blended score independently of category weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlawPenalties {
    pub no_win_condition: f32,
    pub no_spell: f32,
    pub no_anti_air: f32,
}

impl Default for FlawPenalties {
    fn default() -> Self {
        Self {
            no_win_condition: 2.0,
            no_spell: 1.5,
            no_anti_air: 2.0,
        }
    }
}

/// Per-card deductions for cards the player does not own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MissingCardPenalties {
    /// Missing and not yet unlocked in the player's arena.
    pub locked: f32,
    /// Missing but obtainable.
    pub unlocked: f32,
}

impl Default for MissingCardPenalties {
    fn default() -> Self {
        Self {
            locked: 2.0,
            unlocked: 1.0,
        }
    }
}

/// Thresholds for declaring a hybrid (or unknown) archetype.
///
/// These values are empirical and known to under-detect hybrids. They are kept
/// configurable so they can be calibrated against labeled decks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridThresholds {
    /// Both confidences must exceed this.
    pub min_confidence: f32,
    /// Secondary confidence must be at least this fraction of the primary.
    pub min_secondary_ratio: f32,
    /// Raw score gap between the two must be below this.
    pub max_raw_score_gap: f32,
    /// Primary confidence below this relabels the deck as unknown.
    pub unknown_below_confidence: f32,
}

impl Default for HybridThresholds {
    fn default() -> Self {
        Self {
            min_confidence: 0.7,
            min_secondary_ratio: 0.7,
            max_raw_score_gap: 2.0,
            unknown_below_confidence: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "flaw_penalties": { "no_spell": 3.0 } }"#;
        let config: EvaluationConfig = serde_json::from_str(json).unwrap();
        assert!((config.flaw_penalties.no_spell - 3.0).abs() < f32::EPSILON);
        assert!((config.flaw_penalties.no_anti_air - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.weights, CategoryWeights::default());
        assert_eq!(config.hybrid, HybridThresholds::default());
    }

    #[test]
    fn test_largest_weights_on_core_categories() {
        let w = CategoryWeights::default();
        for minor in [w.versatility, w.f2p, w.playability] {
            for major in [w.attack, w.defense, w.synergy] {
                assert!(major > minor);
            }
        }
    }
}
