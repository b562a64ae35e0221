//! Whether the player can actually field the deck.
//!
//! The [`MissingCardsAnalysis`](crate::player_context::MissingCardsAnalysis) in
//! the scoring context is the single source of truth for ownership. Without one
//! (no player profile) every card is assumed owned.
//!
//! ```text
//! playability = owned_ratio * 10 - 1.5 * locked - 0.5 * unlocked_missing
//! ```

use super::{Category, CategoryScore, CategoryScorer, ScoringContext};
use crate::deck_analysis::DeckAnalysis;

const LOCKED_PENALTY: f32 = 1.5;
const UNLOCKED_PENALTY: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayabilityScorer;

impl CategoryScorer for PlayabilityScorer {
    fn category(&self) -> Category {
        Category::Playability
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, analysis: &DeckAnalysis<'_>, context: &ScoringContext<'_>) -> CategoryScore {
        if analysis.is_empty() {
            return CategoryScore::empty_deck();
        }
        let Some(missing) = context.missing_cards else {
            return CategoryScore::new(10.0, "Player data not available, assuming all cards owned");
        };
        if missing.is_playable {
            return CategoryScore::new(10.0, "All cards available, deck is fully playable");
        }

        let locked = missing.locked_count();
        let unlocked = missing.missing_count - locked;
        let owned_ratio = missing.available_count as f32 / analysis.len() as f32;
        let score = owned_ratio * 10.0
            - LOCKED_PENALTY * locked as f32
            - UNLOCKED_PENALTY * unlocked as f32;

        let assessment = if score >= 8.0 {
            format!("Mostly playable, only {} card(s) missing", missing.missing_count)
        } else if score >= 5.0 && locked > 0 {
            format!("Partially playable, {locked} card(s) locked by arena, {unlocked} obtainable")
        } else if score >= 5.0 {
            format!("Partially playable, {unlocked} card(s) need to be obtained")
        } else if locked > 0 {
            format!("Not playable, {locked} card(s) locked by arena progression")
        } else {
            format!("Not playable, {} card(s) missing from collection", missing.missing_count)
        };
        CategoryScore::new(score, assessment)
    }
}

#[cfg(test)]
mod tests {
    use crdeck_cards::{Card, CardLevelInfo, PlayerProfile, Rarity};

    use super::*;
    use crate::category::score_playability;

    fn deck() -> Vec<Card> {
        ["Knight", "Archers", "Giant", "Musketeer", "Fireball", "Zap", "Miner", "Graveyard"]
            .into_iter()
            .map(|name| Card::new(name, 3, Rarity::Common))
            .collect()
    }

    fn owning(arena_id: u32, names: &[&str]) -> PlayerProfile {
        names.iter().fold(PlayerProfile::new(arena_id), |p, &name| {
            p.with_card(name, CardLevelInfo::new(11, 15))
        })
    }

    #[test]
    fn test_no_profile_is_fully_playable() {
        let score = score_playability(&deck(), None);
        assert!((score.score - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_all_owned() {
        let names = crdeck_cards::card_names(&deck());
        let names = names.iter().map(String::as_str).collect::<Vec<_>>();
        let profile = owning(0, &names);
        let score = score_playability(&deck(), Some(&profile));
        assert!((score.score - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_unlocked_missing_cards() {
        // Arena 0: nothing is locked, two cards are simply missing.
        let profile = owning(0, &["Knight", "Archers", "Giant", "Musketeer", "Fireball", "Zap"]);
        let score = score_playability(&deck(), Some(&profile));
        assert!((score.score - 6.5).abs() < 1e-5);
    }

    #[test]
    fn test_locked_cards_cost_more() {
        // Arena 2: Miner and Graveyard unlock at arena 6.
        let profile = owning(2, &["Knight", "Archers", "Giant", "Musketeer", "Fireball", "Zap"]);
        let score = score_playability(&deck(), Some(&profile));
        assert!((score.score - 4.5).abs() < 1e-5);
        assert!(score.assessment.contains("locked"));
    }
}
