//! Card synergy through an injected [`SynergyLookup`].
//!
//! ```text
//! synergy = 10 * (0.5 * average_pair_score + 0.5 * min(known_pairs / target_pairs, 1))
//! ```
//!
//! `target_pairs` is 8 for a full deck, lowered to C(n, 2) for smaller ones so a
//! fully connected short deck can still reach 10. Without a lookup the score is
//! the neutral 5.0.

use super::{Category, CategoryScore, CategoryScorer, ScoringContext};
use crate::deck_analysis::DeckAnalysis;

pub const NEUTRAL_SCORE: f32 = 5.0;

const TARGET_PAIR_COUNT: usize = 8;

#[derive(Debug, Clone, Copy, Default)]
pub struct SynergyScorer;

impl CategoryScorer for SynergyScorer {
    fn category(&self) -> Category {
        Category::Synergy
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, analysis: &DeckAnalysis<'_>, context: &ScoringContext<'_>) -> CategoryScore {
        if analysis.is_empty() {
            return CategoryScore::empty_deck();
        }
        let Some(lookup) = context.synergy else {
            return CategoryScore::new(NEUTRAL_SCORE, "Synergy data not available");
        };

        let names = crdeck_cards::card_names(analysis.cards());
        let synergy = lookup.analyze_deck(&names);
        if synergy.pair_count == 0 {
            return CategoryScore::new(0.0, "No known synergies between these cards");
        }

        let n = analysis.len();
        let max_pairs = n * (n - 1) / 2;
        let target = TARGET_PAIR_COUNT.min(max_pairs).max(1);
        let coverage = (synergy.pair_count as f32 / target as f32).min(1.0);
        let score = 10.0 * (0.5 * synergy.average_score + 0.5 * coverage);
        tracing::trace!(
            pairs = synergy.pair_count,
            target,
            average = synergy.average_score,
            coverage,
            "synergy components"
        );

        let assessment = if score >= 8.0 {
            "Excellent card synergies with multiple strong combinations"
        } else if score >= 6.0 {
            "Good synergy between cards"
        } else if score >= 4.0 {
            "Moderate synergy, some cards work well together"
        } else {
            "Poor synergy, cards don't complement each other well"
        };
        CategoryScore::new(score, format!("{assessment} ({} pairs)", synergy.pair_count))
    }
}
