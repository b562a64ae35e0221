//! Offensive potential.
//!
//! ```text
//! attack = win_conditions * 0.4 + big_spells * 0.3 + damage * 0.3 + evolution bonus
//! ```
//!
//! - win conditions: 3.0 with none, 7.0 + 3 * level ratio for one, 10.0 for two or more
//! - big spells: level-ratio sum `s`; 10.0 at `s >= 2`, 6 + 2s at `s >= 1`, else 2 + 4s
//! - damage: average level-scaled DPS; 10.0 at 200, linear 5-10 over 100-200, 0-5 below
//! - evolution: +0.15 per evolution level on win-condition cards

use crdeck_cards::CardRole;

use super::{Category, CategoryScore, CategoryScorer, ScoringContext};
use crate::deck_analysis::DeckAnalysis;

const EVOLUTION_BONUS_PER_LEVEL: f32 = 0.15;

#[derive(Debug, Clone, Copy, Default)]
pub struct AttackScorer;

impl CategoryScorer for AttackScorer {
    fn category(&self) -> Category {
        Category::Attack
    }

    #[expect(clippy::cast_precision_loss)]
    fn score(&self, analysis: &DeckAnalysis<'_>, _context: &ScoringContext<'_>) -> CategoryScore {
        if analysis.is_empty() {
            return CategoryScore::empty_deck();
        }

        let win_conditions = analysis.win_condition_count();
        let win_condition_quality = analysis
            .with_role(CardRole::WinCondition)
            .map(crdeck_cards::Card::level_ratio)
            .sum::<f32>();
        let spell_power = analysis
            .with_role(CardRole::SpellBig)
            .map(crdeck_cards::Card::level_ratio)
            .sum::<f32>();
        let total_damage = analysis
            .cards()
            .iter()
            .map(|c| c.damage_per_second() as f32 * c.level_ratio())
            .sum::<f32>();
        let evolution_bonus = analysis
            .with_role(CardRole::WinCondition)
            .map(|c| EVOLUTION_BONUS_PER_LEVEL * f32::from(c.evolution_level))
            .sum::<f32>();

        let average_damage = total_damage / analysis.len() as f32;
        let score = win_condition_score(win_conditions, win_condition_quality) * 0.4
            + spell_score(spell_power) * 0.3
            + damage_score(average_damage) * 0.3
            + evolution_bonus;

        CategoryScore::new(score, assessment(score, win_conditions, evolution_bonus))
    }
}

fn win_condition_score(count: usize, quality: f32) -> f32 {
    match count {
        0 => 3.0,
        1 => 7.0 + quality * 3.0,
        _ => 10.0,
    }
}

fn spell_score(power: f32) -> f32 {
    if power >= 2.0 {
        10.0
    } else if power >= 1.0 {
        6.0 + power * 2.0
    } else {
        2.0 + power * 4.0
    }
}

fn damage_score(average_dps: f32) -> f32 {
    if average_dps >= 200.0 {
        10.0
    } else if average_dps >= 100.0 {
        5.0 + (average_dps - 100.0) / 100.0 * 5.0
    } else {
        average_dps / 100.0 * 5.0
    }
}

fn assessment(score: f32, win_conditions: usize, evolution_bonus: f32) -> String {
    let evolution = if evolution_bonus > 0.0 {
        format!(" (+{evolution_bonus:.1} evolution bonus)")
    } else {
        String::new()
    };
    if win_conditions == 0 {
        return "Weak attack potential, lacks a reliable win condition".to_owned();
    }
    if score >= 8.0 {
        format!("Excellent offensive potential with strong win conditions{evolution}")
    } else if score >= 6.0 {
        format!("Good attack capabilities with decent win conditions{evolution}")
    } else if score >= 4.0 {
        format!("Moderate offensive pressure, could use stronger win conditions{evolution}")
    } else {
        "Weak attack potential, lacks reliable win conditions".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use crdeck_cards::{Card, Rarity, TargetType};

    use super::*;
    use crate::category::score_attack;

    fn hog() -> Card {
        Card::new("Hog Rider", 4, Rarity::Rare)
            .with_role(CardRole::WinCondition)
            .with_stats(150, TargetType::Buildings)
            .with_level(15, 15)
    }

    #[test]
    fn test_component_breakpoints() {
        assert!((win_condition_score(0, 0.0) - 3.0).abs() < f32::EPSILON);
        assert!((win_condition_score(1, 1.0) - 10.0).abs() < f32::EPSILON);
        assert!((win_condition_score(3, 0.0) - 10.0).abs() < f32::EPSILON);
        assert!((spell_score(0.0) - 2.0).abs() < f32::EPSILON);
        assert!((spell_score(1.0) - 8.0).abs() < f32::EPSILON);
        assert!((damage_score(150.0) - 7.5).abs() < 1e-6);
        assert!((damage_score(400.0) - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_win_condition_raises_score() {
        let filler = Card::new("Knight", 3, Rarity::Common).with_role(CardRole::Support);
        let without = score_attack(&[filler.clone(), filler.clone()]);
        let with = score_attack(&[hog(), filler]);
        assert!(with.score > without.score);
        assert!(without.assessment.contains("lacks"));
    }

    #[test]
    fn test_evolution_bonus_only_on_win_conditions() {
        let knight = Card::new("Knight", 3, Rarity::Common).with_role(CardRole::Support);
        let evolved_knight = knight.clone().with_evolution(1, 1);
        let base = score_attack(&[hog(), knight]);
        let support_evo = score_attack(&[hog(), evolved_knight]);
        assert!((base.score - support_evo.score).abs() < 0.2);

        let evolved_hog = hog().with_evolution(1, 1);
        let knight = Card::new("Knight", 3, Rarity::Common).with_role(CardRole::Support);
        let win_evo = score_attack(&[evolved_hog, knight]);
        assert!(win_evo.assessment.contains("evolution bonus"));
    }

    #[test]
    fn test_score_is_capped() {
        let pekka = Card::new("P.E.K.K.A", 7, Rarity::Epic)
            .with_role(CardRole::WinCondition)
            .with_stats(700, TargetType::Ground)
            .with_level(15, 15)
            .with_evolution(3, 3);
        let deck = vec![
            pekka.clone(),
            pekka,
            Card::new("Rocket", 6, Rarity::Rare)
                .with_role(CardRole::SpellBig)
                .with_level(15, 15),
            Card::new("Lightning", 6, Rarity::Epic)
                .with_role(CardRole::SpellBig)
                .with_level(15, 15),
        ];
        let score = score_attack(&deck);
        assert!((score.score - 10.0).abs() < f32::EPSILON);
        assert_eq!(score.stars, 3);
    }
}
