//! Breadth of tactical options: role diversity, elixir spread and target coverage.

use super::{Category, CategoryScore, CategoryScorer, ScoringContext};
use crate::deck_analysis::DeckAnalysis;

#[derive(Debug, Clone, Copy, Default)]
pub struct VersatilityScorer;

impl CategoryScorer for VersatilityScorer {
    fn category(&self) -> Category {
        Category::Versatility
    }

    fn score(&self, analysis: &DeckAnalysis<'_>, _context: &ScoringContext<'_>) -> CategoryScore {
        if analysis.is_empty() {
            return CategoryScore::empty_deck();
        }

        let score = role_score(analysis.distinct_roles()) * 0.4
            + elixir_score(analysis.distinct_elixir_costs()) * 0.3
            + target_score(analysis.anti_air_count(), analysis.ground_count()) * 0.3;

        let assessment = if score >= 8.0 {
            "Highly versatile deck with diverse roles and elixir costs"
        } else if score >= 6.0 {
            "Good versatility with decent role coverage"
        } else if score >= 4.0 {
            "Moderate versatility, some gaps in role coverage"
        } else {
            "Limited versatility, narrow strategy focus"
        };
        CategoryScore::new(score, assessment)
    }
}

#[expect(clippy::cast_precision_loss)]
fn role_score(distinct_roles: usize) -> f32 {
    match distinct_roles {
        0..=2 => distinct_roles as f32 * 2.0,
        3 => 5.0,
        4 => 7.0,
        _ => 10.0,
    }
}

#[expect(clippy::cast_precision_loss)]
fn elixir_score(distinct_costs: usize) -> f32 {
    if distinct_costs >= 6 {
        10.0
    } else {
        distinct_costs as f32 * 1.5
    }
}

#[expect(clippy::cast_precision_loss)]
fn target_score(air: usize, ground: usize) -> f32 {
    if air >= 3 && ground >= 6 {
        10.0
    } else if air >= 2 && ground >= 5 {
        7.0
    } else {
        (air + ground) as f32 * 0.5
    }
}

#[cfg(test)]
mod tests {
    use crdeck_cards::{Card, CardRole, Rarity, TargetType};

    use super::*;
    use crate::category::score_versatility;

    #[test]
    fn test_component_breakpoints() {
        assert!(role_score(0).abs() < f32::EPSILON);
        assert!((role_score(2) - 4.0).abs() < f32::EPSILON);
        assert!((role_score(6) - 10.0).abs() < f32::EPSILON);
        assert!((elixir_score(4) - 6.0).abs() < f32::EPSILON);
        assert!((target_score(3, 6) - 10.0).abs() < f32::EPSILON);
        assert!((target_score(2, 5) - 7.0).abs() < f32::EPSILON);
        assert!((target_score(1, 3) - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_diverse_deck_beats_narrow_deck() {
        let narrow = vec![
            Card::new("Skeletons", 1, Rarity::Common).with_role(CardRole::Cycle);
            4
        ];
        let diverse = vec![
            Card::new("Hog Rider", 4, Rarity::Rare).with_role(CardRole::WinCondition),
            Card::new("Musketeer", 4, Rarity::Rare)
                .with_role(CardRole::Support)
                .with_stats(180, TargetType::AirAndGround),
            Card::new("Cannon", 3, Rarity::Common)
                .with_role(CardRole::Building)
                .with_stats(150, TargetType::Ground),
            Card::new("Fireball", 4, Rarity::Rare).with_role(CardRole::SpellBig),
            Card::new("The Log", 2, Rarity::Legendary).with_role(CardRole::SpellSmall),
            Card::new("Ice Spirit", 1, Rarity::Common).with_role(CardRole::Cycle),
        ];
        assert!(score_versatility(&diverse).score > score_versatility(&narrow).score);
    }
}
