//! The evaluation orchestrator.
//!
//! # Pipeline
//!
//! ```text
//! cards ─▶ DeckAnalysis ─┬─▶ six CategoryScorers ─▶ weighted blend ─┐
//!                        └─▶ ArchetypeDetector                      │
//! profile ─▶ MissingCardsAnalysis, LevelGapStats ───────────────────┤
//!                                                                   ▼
//!            blend − flaw penalties − missing-card penalties, clamped to [0, 10]
//! ```
//!
//! # Player-context substitution
//!
//! With a [`PlayerProfile`], the playability term of the blend is replaced by the
//! ladder viability score at the same weight. Playability is still computed and
//! reported; it only stops contributing to the overall score. Missing cards are
//! then penalized directly instead.
//!
//! # Penalties
//!
//! Composition flaws (no win condition, no spell, no anti-air) and missing cards
//! are flat deductions from the blend, independent of category weights. They are
//! applied once, after blending, and the result is clamped at that single point.

use std::{collections::BTreeMap, sync::LazyLock};

use crdeck_cards::{Card, CardCatalog, PlayerProfile};
use serde::{Deserialize, Serialize};

use crate::{
    archetype::{ArchetypeDetector, ArchetypeResult, ArchetypeSignals},
    category::{Category, CategoryScore, ScoringContext, all_category_scorers},
    config::EvaluationConfig,
    deck_analysis::DeckAnalysis,
    player_context::{
        LevelGapStats, MissingCardsAnalysis, UpgradePriority, upgrade_priorities,
    },
    rating::{Rating, clamp_score, round_to_tenth},
    synergy::{DeckSynergy, SynergyLookup},
};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum CompositionFlaw {
    #[display("no win condition")]
    NoWinCondition,
    #[display("no spell")]
    NoSpell,
    #[display("no anti-air")]
    NoAntiAir,
}

/// How the overall score was derived from the blend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreAdjustments {
    /// Weighted sum of category scores before any penalty.
    pub weighted_blend: f32,
    pub flaws: Vec<CompositionFlaw>,
    pub flaw_penalty: f32,
    /// Zero without a player profile.
    pub missing_card_penalty: f32,
}

/// Level-aware part of the blend, present only with a player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelAwareBreakdown {
    /// Ladder viability scaled to \[0.0, 1.0\].
    pub normalization_factor: f32,
    /// Mean level ratio of the owned deck cards.
    pub deck_level_ratio: f32,
    /// Score that replaced playability in the blend.
    pub ladder_viability: f32,
    /// Overall score after all player-specific adjustments.
    pub final_score: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEvaluation {
    pub level_gaps: LevelGapStats,
    pub breakdown: LevelAwareBreakdown,
    pub missing_cards: MissingCardsAnalysis,
    pub upgrade_priorities: Vec<UpgradePriority>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub deck: Vec<String>,
    pub average_elixir: f32,
    pub attack: CategoryScore,
    pub defense: CategoryScore,
    pub synergy: CategoryScore,
    pub versatility: CategoryScore,
    pub f2p: CategoryScore,
    pub playability: CategoryScore,
    pub overall_score: f32,
    pub overall_rating: Rating,
    pub archetype: ArchetypeResult,
    pub adjustments: ScoreAdjustments,
    /// Present when a synergy lookup was supplied.
    pub synergy_summary: Option<DeckSynergy>,
    /// Present when a player profile was supplied.
    pub player: Option<PlayerEvaluation>,
}

impl EvaluationResult {
    #[must_use]
    pub fn category(&self, category: Category) -> &CategoryScore {
        match category {
            Category::Attack => &self.attack,
            Category::Defense => &self.defense,
            Category::Synergy => &self.synergy,
            Category::Versatility => &self.versatility,
            Category::F2p => &self.f2p,
            Category::Playability => &self.playability,
        }
    }
}

/// Blends category scores into an overall evaluation.
///
/// Holds only immutable configuration, so one evaluator can serve any number of
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct DeckEvaluator {
    config: EvaluationConfig,
    detector: ArchetypeDetector,
    catalog: CardCatalog,
}

impl Default for DeckEvaluator {
    fn default() -> Self {
        Self::new(EvaluationConfig::default())
    }
}

impl DeckEvaluator {
    #[must_use]
    pub fn new(config: EvaluationConfig) -> Self {
        let detector = ArchetypeDetector::new(
            ArchetypeSignals::default(),
            config.hybrid,
            config.confidence_curve.clone(),
        );
        Self {
            config,
            detector,
            catalog: CardCatalog::default(),
        }
    }

    #[must_use]
    pub fn with_signals(mut self, signals: ArchetypeSignals) -> Self {
        self.detector = ArchetypeDetector::new(
            signals,
            self.config.hybrid,
            self.config.confidence_curve.clone(),
        );
        self
    }

    #[must_use]
    pub fn with_catalog(mut self, catalog: CardCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    #[must_use]
    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    #[must_use]
    pub fn detector(&self) -> &ArchetypeDetector {
        &self.detector
    }

    /// Evaluates `cards`, optionally against a synergy lookup and a player profile.
    ///
    /// Never fails: absent inputs select documented fallbacks, and an empty deck
    /// yields zero scores and an unknown archetype.
    #[must_use]
    pub fn evaluate(
        &self,
        cards: &[Card],
        synergy: Option<&dyn SynergyLookup>,
        profile: Option<&PlayerProfile>,
    ) -> EvaluationResult {
        let analysis = DeckAnalysis::new(cards);
        let missing_cards =
            profile.map(|p| MissingCardsAnalysis::identify(cards, p, &self.catalog));
        let context = ScoringContext {
            synergy,
            missing_cards: missing_cards.as_ref(),
        };

        let mut scores = all_category_scorers()
            .into_iter()
            .map(|scorer| (scorer.category(), scorer.score(&analysis, &context)))
            .collect::<BTreeMap<_, _>>();
        let mut take = |category: Category| {
            scores
                .remove(&category)
                .unwrap_or_else(CategoryScore::empty_deck)
        };
        let attack = take(Category::Attack);
        let defense = take(Category::Defense);
        let synergy_score = take(Category::Synergy);
        let versatility = take(Category::Versatility);
        let f2p = take(Category::F2p);
        let playability = take(Category::Playability);

        let archetype = self.detector.detect_analyzed(&analysis);
        let level_gaps = profile.map(|p| LevelGapStats::compute(cards, p));
        let ladder_viability = level_gaps.map(|s| s.ladder_viability());

        let w = &self.config.weights;
        // Viability takes the playability slot when a profile is present.
        let last_term = ladder_viability.unwrap_or(playability.score);
        let weighted_blend = if analysis.is_empty() {
            0.0
        } else {
            attack.score * w.attack
                + defense.score * w.defense
                + synergy_score.score * w.synergy
                + versatility.score * w.versatility
                + f2p.score * w.f2p
                + last_term * w.playability
        };

        let flaws = if analysis.is_empty() {
            Vec::new()
        } else {
            composition_flaws(&analysis)
        };
        let flaw_penalty = flaws
            .iter()
            .map(|flaw| self.flaw_penalty(*flaw))
            .sum::<f32>();
        let missing_card_penalty = missing_cards
            .as_ref()
            .map_or(0.0, |m| self.missing_card_penalty(m));

        let overall_score =
            round_to_tenth(clamp_score(weighted_blend - flaw_penalty - missing_card_penalty));
        let overall_rating = Rating::from_score(overall_score);

        tracing::debug!(
            cards = cards.len(),
            weighted_blend,
            flaw_penalty,
            missing_card_penalty,
            overall_score,
            %overall_rating,
            level_aware = profile.is_some(),
            "deck evaluated"
        );

        let player = match (profile, level_gaps, ladder_viability, missing_cards) {
            (Some(profile), Some(level_gaps), Some(ladder_viability), Some(missing_cards)) => {
                Some(PlayerEvaluation {
                    level_gaps,
                    breakdown: LevelAwareBreakdown {
                        normalization_factor: ladder_viability / 10.0,
                        deck_level_ratio: level_gaps.average_level_ratio,
                        ladder_viability,
                        final_score: overall_score,
                    },
                    missing_cards,
                    upgrade_priorities: upgrade_priorities(cards, profile),
                })
            }
            _ => None,
        };

        EvaluationResult {
            deck: crdeck_cards::card_names(cards),
            average_elixir: analysis.average_elixir(),
            attack,
            defense,
            synergy: synergy_score,
            versatility,
            f2p,
            playability,
            overall_score,
            overall_rating,
            archetype,
            adjustments: ScoreAdjustments {
                weighted_blend,
                flaws,
                flaw_penalty,
                missing_card_penalty,
            },
            synergy_summary: synergy
                .filter(|_| !cards.is_empty())
                .map(|lookup| lookup.analyze_deck(&crdeck_cards::card_names(cards))),
            player,
        }
    }

    fn flaw_penalty(&self, flaw: CompositionFlaw) -> f32 {
        let p = &self.config.flaw_penalties;
        match flaw {
            CompositionFlaw::NoWinCondition => p.no_win_condition,
            CompositionFlaw::NoSpell => p.no_spell,
            CompositionFlaw::NoAntiAir => p.no_anti_air,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    fn missing_card_penalty(&self, missing: &MissingCardsAnalysis) -> f32 {
        let p = &self.config.missing_card_penalties;
        missing.locked_count() as f32 * p.locked
            + missing.unlocked_missing_count() as f32 * p.unlocked
    }
}

fn composition_flaws(analysis: &DeckAnalysis<'_>) -> Vec<CompositionFlaw> {
    let mut flaws = Vec::new();
    if analysis.win_condition_count() == 0 {
        flaws.push(CompositionFlaw::NoWinCondition);
    }
    if analysis.spell_count() == 0 {
        flaws.push(CompositionFlaw::NoSpell);
    }
    if analysis.anti_air_count() == 0 {
        flaws.push(CompositionFlaw::NoAntiAir);
    }
    flaws
}

static DEFAULT_EVALUATOR: LazyLock<DeckEvaluator> = LazyLock::new(DeckEvaluator::default);

/// Evaluates `cards` with the default configuration, signals and catalog.
#[must_use]
pub fn evaluate(
    cards: &[Card],
    synergy: Option<&dyn SynergyLookup>,
    profile: Option<&PlayerProfile>,
) -> EvaluationResult {
    DEFAULT_EVALUATOR.evaluate(cards, synergy, profile)
}
