//! Budget friendliness.
//!
//! Expensive rarities accumulate a penalty (champion 4, legendary 3, epic 2,
//! rare and common 0) that is mapped onto a descending 10 → 0 curve. The common
//! share of the deck adds the remaining 30%:
//!
//! ```text
//! f2p = rarity_score(penalty) * 0.7 + common_ratio * 10 * 0.3
//! ```
//!
//! An all-common deck scores 10.0; an all-legendary deck scores 0.0.

use crdeck_cards::Rarity;

use super::{Category, CategoryScore, CategoryScorer, ScoringContext};
use crate::deck_analysis::DeckAnalysis;

#[derive(Debug, Clone, Copy, Default)]
pub struct F2pScorer;

impl CategoryScorer for F2pScorer {
    fn category(&self) -> Category {
        Category::F2p
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, analysis: &DeckAnalysis<'_>, _context: &ScoringContext<'_>) -> CategoryScore {
        if analysis.is_empty() {
            return CategoryScore::empty_deck();
        }

        let legendary = analysis.rarity_count(Rarity::Legendary);
        let epic = analysis.rarity_count(Rarity::Epic);
        let common = analysis.rarity_count(Rarity::Common);
        let penalty = analysis.rarity_count(Rarity::Champion) as f32 * 4.0
            + legendary as f32 * 3.0
            + epic as f32 * 2.0;
        let common_ratio = common as f32 / analysis.len() as f32;
        let score = rarity_score(penalty) * 0.7 + common_ratio * 10.0 * 0.3;

        let assessment = if score >= 8.0 {
            "Excellent for F2P players with easy upgrade path"
        } else if score >= 6.0 {
            "Good for F2P with manageable upgrade costs"
        } else if legendary >= 3 {
            "Difficult for F2P due to multiple legendaries"
        } else if epic >= 4 {
            "Challenging for F2P with many epic cards"
        } else {
            "Moderate F2P friendliness, some expensive upgrades"
        };
        CategoryScore::new(score, assessment)
    }
}

fn rarity_score(penalty: f32) -> f32 {
    if penalty <= 0.0 {
        10.0
    } else if penalty <= 2.0 {
        10.0 - penalty * 2.0
    } else if penalty <= 4.0 {
        6.0 - (penalty - 2.0) * 1.5
    } else {
        (3.0 - (penalty - 4.0) * 0.5).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use crdeck_cards::Card;

    use super::*;
    use crate::category::score_f2p;

    fn deck_of(rarity: Rarity) -> Vec<Card> {
        (0..8)
            .map(|i| Card::new(format!("Card {i}"), 3, rarity))
            .collect()
    }

    #[test]
    fn test_extremes() {
        let commons = score_f2p(&deck_of(Rarity::Common));
        assert!((commons.score - 10.0).abs() < f32::EPSILON);
        let legendaries = score_f2p(&deck_of(Rarity::Legendary));
        assert!(legendaries.score.abs() < f32::EPSILON);
        assert!(legendaries.assessment.contains("legendaries"));
    }

    #[test]
    fn test_rares_are_free_of_penalty_but_not_common() {
        let rares = score_f2p(&deck_of(Rarity::Rare));
        assert!((rares.score - 7.0).abs() < 1e-5);
    }

    #[test]
    fn test_rarity_curve_is_monotone() {
        let mut previous = rarity_score(0.0);
        for step in 1..=40_u8 {
            let current = rarity_score(f32::from(step) * 0.5);
            assert!(current <= previous);
            previous = current;
        }
        assert!(previous.abs() < f32::EPSILON);
    }
}
