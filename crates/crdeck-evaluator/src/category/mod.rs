//! Category scorers.
//!
//! Each scorer maps a deck to a [`CategoryScore`] in \[0.0, 10.0\]. Scorers are
//! independent of each other: none reads another's output.
//!
//! | Category | Scorer | Extra input |
//! |----------|--------|-------------|
//! | Attack | [`attack::AttackScorer`] | - |
//! | Defense | [`defense::DefenseScorer`] | - |
//! | Synergy | [`synergy::SynergyScorer`] | [`SynergyLookup`] |
//! | Versatility | [`versatility::VersatilityScorer`] | - |
//! | F2P | [`f2p::F2pScorer`] | - |
//! | Playability | [`playability::PlayabilityScorer`] | [`MissingCardsAnalysis`] |
//!
//! Every scorer returns exactly 0.0 for an empty deck. The free functions
//! ([`score_attack`], [`score_defense`], ...) build the [`DeckAnalysis`] and context
//! themselves and are the convenient entry points for tooling and tests; the
//! orchestrator uses [`all_category_scorers()`] with a shared analysis instead.

use std::fmt;

use crdeck_cards::{Card, CardCatalog, PlayerProfile};
use serde::{Deserialize, Serialize};

use crate::{
    deck_analysis::DeckAnalysis,
    player_context::MissingCardsAnalysis,
    rating::{Rating, clamp_score, round_to_tenth},
    synergy::SynergyLookup,
};

pub use self::{
    attack::AttackScorer, defense::DefenseScorer, f2p::F2pScorer,
    playability::PlayabilityScorer, synergy::SynergyScorer, versatility::VersatilityScorer,
};

pub mod attack;
pub mod defense;
pub mod f2p;
pub mod playability;
pub mod synergy;
pub mod versatility;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Attack,
    Defense,
    Synergy,
    Versatility,
    #[display("F2P")]
    F2p,
    Playability,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Attack,
        Self::Defense,
        Self::Synergy,
        Self::Versatility,
        Self::F2p,
        Self::Playability,
    ];
}

/// A finalized category score.
///
/// The score is clamped to \[0.0, 10.0\] and rounded to one decimal; rating and
/// stars are derived from the rounded value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: f32,
    pub rating: Rating,
    pub assessment: String,
    pub stars: u8,
}

impl CategoryScore {
    #[must_use]
    pub fn new(score: f32, assessment: impl Into<String>) -> Self {
        let score = round_to_tenth(clamp_score(score));
        let rating = Rating::from_score(score);
        Self {
            score,
            rating,
            assessment: assessment.into(),
            stars: rating.stars(),
        }
    }

    #[must_use]
    pub fn empty_deck() -> Self {
        Self::new(0.0, "No cards in deck")
    }
}

/// Optional inputs some scorers consult.
#[derive(Clone, Copy, Default)]
pub struct ScoringContext<'a> {
    pub synergy: Option<&'a dyn SynergyLookup>,
    /// Present only when a player profile was supplied.
    pub missing_cards: Option<&'a MissingCardsAnalysis>,
}

impl fmt::Debug for ScoringContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringContext")
            .field("synergy", &self.synergy.is_some())
            .field("missing_cards", &self.missing_cards)
            .finish()
    }
}

pub trait CategoryScorer: fmt::Debug + Send + Sync {
    fn category(&self) -> Category;

    /// Scores the analyzed deck. Must return 0.0 for an empty deck.
    #[must_use]
    fn score(&self, analysis: &DeckAnalysis<'_>, context: &ScoringContext<'_>) -> CategoryScore;
}

pub type BoxedCategoryScorer = Box<dyn CategoryScorer>;

#[must_use]
pub fn all_category_scorers() -> Vec<BoxedCategoryScorer> {
    vec![
        Box::new(AttackScorer),
        Box::new(DefenseScorer),
        Box::new(SynergyScorer),
        Box::new(VersatilityScorer),
        Box::new(F2pScorer),
        Box::new(PlayabilityScorer),
    ]
}

#[must_use]
pub fn score_attack(cards: &[Card]) -> CategoryScore {
    AttackScorer.score(&DeckAnalysis::new(cards), &ScoringContext::default())
}

#[must_use]
pub fn score_defense(cards: &[Card]) -> CategoryScore {
    DefenseScorer.score(&DeckAnalysis::new(cards), &ScoringContext::default())
}

/// Scores synergy through `lookup`, or returns the neutral 5.0 without one.
#[must_use]
pub fn score_synergy(cards: &[Card], lookup: Option<&dyn SynergyLookup>) -> CategoryScore {
    let context = ScoringContext {
        synergy: lookup,
        missing_cards: None,
    };
    SynergyScorer.score(&DeckAnalysis::new(cards), &context)
}

#[must_use]
pub fn score_versatility(cards: &[Card]) -> CategoryScore {
    VersatilityScorer.score(&DeckAnalysis::new(cards), &ScoringContext::default())
}

#[must_use]
pub fn score_f2p(cards: &[Card]) -> CategoryScore {
    F2pScorer.score(&DeckAnalysis::new(cards), &ScoringContext::default())
}

/// Scores playability against `profile` using the default card catalog.
///
/// Without a profile every card is assumed owned and the score is 10.0.
#[must_use]
pub fn score_playability(cards: &[Card], profile: Option<&PlayerProfile>) -> CategoryScore {
    let missing =
        profile.map(|p| MissingCardsAnalysis::identify(cards, p, &CardCatalog::default()));
    let context = ScoringContext {
        synergy: None,
        missing_cards: missing.as_ref(),
    };
    PlayabilityScorer.score(&DeckAnalysis::new(cards), &context)
}
