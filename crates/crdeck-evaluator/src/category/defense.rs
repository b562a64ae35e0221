//! Defensive coverage.
//!
//! ```text
//! defense = anti_air * 0.4 + buildings * 0.3 + support * 0.3 + evolution bonus + tank killer bonus
//! ```
//!
//! Missing anti-air and missing buildings are surfaced as warnings in the
//! assessment text in addition to lowering the score.

use crdeck_cards::{Card, CardRole};

use super::{Category, CategoryScore, CategoryScorer, ScoringContext};
use crate::deck_analysis::DeckAnalysis;

const TANK_KILLER_BONUS: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default)]
pub struct DefenseScorer;

impl CategoryScorer for DefenseScorer {
    fn category(&self) -> Category {
        Category::Defense
    }

    fn score(&self, analysis: &DeckAnalysis<'_>, _context: &ScoringContext<'_>) -> CategoryScore {
        if analysis.is_empty() {
            return CategoryScore::empty_deck();
        }

        let anti_air = analysis.anti_air_count();
        let buildings = analysis.building_count();
        let support = analysis.role_count(CardRole::Support);
        let quality = analysis
            .with_role(CardRole::Building)
            .map(Card::level_ratio)
            .sum::<f32>()
            + analysis
                .with_role(CardRole::Support)
                .map(|c| c.level_ratio() * 0.5)
                .sum::<f32>();
        let evolution_bonus = analysis.cards().iter().map(evolution_bonus).sum::<f32>();
        let tank_killer_bonus = if analysis.has_tank_killer() {
            TANK_KILLER_BONUS
        } else {
            0.0
        };

        let score = anti_air_score(anti_air) * 0.4
            + building_score(buildings, quality) * 0.3
            + support_score(support) * 0.3
            + evolution_bonus
            + tank_killer_bonus;

        let mut assessment = summary(score, evolution_bonus);
        if anti_air == 0 {
            assessment.push_str(". Warning: no anti-air defense");
        }
        if buildings == 0 {
            assessment.push_str(". Warning: no defensive building");
        }
        CategoryScore::new(score, assessment)
    }
}

/// Buildings and support troops earn 0.20 per evolution level; other
/// air-targeting cards earn 0.15.
fn evolution_bonus(card: &Card) -> f32 {
    let level = f32::from(card.evolution_level);
    if card.is_building() || card.has_role(CardRole::Support) {
        0.20 * level
    } else if card.targets_air() {
        0.15 * level
    } else {
        0.0
    }
}

fn anti_air_score(count: usize) -> f32 {
    match count {
        0 => 0.0,
        1 => 3.0,
        2 => 5.0,
        3 => 8.0,
        _ => 10.0,
    }
}

fn building_score(count: usize, quality: f32) -> f32 {
    match count {
        0 => 3.0,
        1 => 6.0 + quality * 2.0,
        _ => 10.0,
    }
}

fn support_score(count: usize) -> f32 {
    match count {
        0 | 1 => 2.0,
        2 => 5.0,
        3 => 7.0,
        _ => 10.0,
    }
}

fn summary(score: f32, evolution_bonus: f32) -> String {
    let evolution = if evolution_bonus > 0.0 {
        format!(" (+{evolution_bonus:.1} evolution bonus)")
    } else {
        String::new()
    };
    if score >= 8.0 {
        format!("Solid defensive setup with good air coverage{evolution}")
    } else if score >= 6.0 {
        format!("Decent defensive capabilities{evolution}")
    } else {
        "Weak defensive structure, vulnerable to heavy pushes".to_owned()
    }
}
