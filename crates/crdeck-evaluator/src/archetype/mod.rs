//! Archetype detection.
//!
//! Classification is a single pass:
//!
//! ```text
//! deck ──▶ raw score per archetype (0-10, heuristics over ArchetypeSignals)
//!      ──▶ confidence per archetype (ConfidenceCurve)
//!      ──▶ primary / secondary (highest raw score, declaration order breaks ties)
//!      ──▶ unknown / pure / hybrid decision (HybridThresholds)
//! ```
//!
//! A deck is **hybrid** when both top confidences exceed the minimum, the
//! secondary reaches the required fraction of the primary, the raw-score gap is
//! small, and the two archetypes are not a related pair. The primary tag then
//! becomes [`Archetype::Hybrid`]; the two underlying archetypes stay readable
//! through the secondary field and [`ArchetypeDetector::raw_scores`].
//!
//! A primary confidence below the unknown threshold relabels the primary as
//! [`Archetype::Unknown`] and is never hybrid.
//!
//! The hybrid thresholds are empirical and under-detect hybrids; they are
//! configuration, not constants, so they can be calibrated against labeled decks.

use std::sync::LazyLock;

use crdeck_cards::Card;
use serde::{Deserialize, Serialize};

use crate::{config::HybridThresholds, deck_analysis::DeckAnalysis};

pub use self::{confidence::*, heuristics::raw_score, signals::ArchetypeSignals};

mod confidence;
mod heuristics;
mod signals;

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
    derive_more::FromStr,
    derive_more::IsVariant,
)]
pub enum Archetype {
    Beatdown,
    Cycle,
    Siege,
    Bait,
    Bridge,
    Graveyard,
    Miner,
    Control,
    Hybrid,
    Unknown,
}

impl Archetype {
    /// The eight detectable patterns, in tie-break order.
    pub const PATTERNS: [Self; 8] = [
        Self::Beatdown,
        Self::Cycle,
        Self::Siege,
        Self::Bait,
        Self::Bridge,
        Self::Graveyard,
        Self::Miner,
        Self::Control,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeResult {
    pub primary: Archetype,
    pub primary_confidence: f32,
    pub secondary: Archetype,
    pub secondary_confidence: f32,
    pub is_hybrid: bool,
}

impl ArchetypeResult {
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            primary: Archetype::Unknown,
            primary_confidence: 0.0,
            secondary: Archetype::Unknown,
            secondary_confidence: 0.0,
            is_hybrid: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArchetypeScore {
    pub archetype: Archetype,
    pub raw_score: f32,
    pub confidence: f32,
}

#[derive(Debug, Clone, Default)]
pub struct ArchetypeDetector {
    signals: ArchetypeSignals,
    thresholds: HybridThresholds,
    curve: ConfidenceCurve,
}

impl ArchetypeDetector {
    #[must_use]
    pub fn new(signals: ArchetypeSignals, thresholds: HybridThresholds, curve: ConfidenceCurve) -> Self {
        Self {
            signals,
            thresholds,
            curve,
        }
    }

    #[must_use]
    pub fn signals(&self) -> &ArchetypeSignals {
        &self.signals
    }

    #[must_use]
    pub fn detect(&self, cards: &[Card]) -> ArchetypeResult {
        self.detect_analyzed(&DeckAnalysis::new(cards))
    }

    /// Raw score and confidence of every pattern, in [`Archetype::PATTERNS`] order.
    #[must_use]
    pub fn raw_scores(&self, cards: &[Card]) -> Vec<ArchetypeScore> {
        self.scores(&DeckAnalysis::new(cards))
    }

    pub(crate) fn detect_analyzed(&self, analysis: &DeckAnalysis<'_>) -> ArchetypeResult {
        if analysis.is_empty() {
            return ArchetypeResult::unknown();
        }

        let scores = self.scores(analysis);
        let Some(primary) = top_score(&scores, None) else {
            tracing::trace!("no archetype signals present");
            return ArchetypeResult::unknown();
        };
        let secondary = top_score(&scores, Some(primary.archetype)).unwrap_or(ArchetypeScore {
            archetype: Archetype::Unknown,
            raw_score: 0.0,
            confidence: 0.0,
        });

        let t = &self.thresholds;
        let meets_hybrid_thresholds = primary.confidence > t.min_confidence
            && secondary.confidence > t.min_confidence
            && secondary.confidence >= t.min_secondary_ratio * primary.confidence
            && primary.raw_score - secondary.raw_score < t.max_raw_score_gap;
        let related = self
            .signals
            .are_related(primary.archetype, secondary.archetype);

        let mut result = ArchetypeResult {
            primary: primary.archetype,
            primary_confidence: primary.confidence,
            secondary: secondary.archetype,
            secondary_confidence: secondary.confidence,
            is_hybrid: meets_hybrid_thresholds && !related,
        };
        if primary.confidence < t.unknown_below_confidence {
            result.primary = Archetype::Unknown;
            result.is_hybrid = false;
        }
        if result.is_hybrid {
            result.primary = Archetype::Hybrid;
        }

        tracing::debug!(
            primary = %primary.archetype,
            primary_raw = primary.raw_score,
            secondary = %secondary.archetype,
            secondary_raw = secondary.raw_score,
            meets_hybrid_thresholds,
            related,
            result = %result.primary,
            "archetype detected"
        );
        result
    }

    fn scores(&self, analysis: &DeckAnalysis<'_>) -> Vec<ArchetypeScore> {
        Archetype::PATTERNS
            .iter()
            .map(|&archetype| {
                let raw_score = raw_score(archetype, analysis, &self.signals);
                ArchetypeScore {
                    archetype,
                    raw_score,
                    confidence: self.curve.confidence(raw_score),
                }
            })
            .collect()
    }
}

/// Highest positive raw score, skipping `exclude`. Earlier entries win ties.
fn top_score(scores: &[ArchetypeScore], exclude: Option<Archetype>) -> Option<ArchetypeScore> {
    scores
        .iter()
        .filter(|s| Some(s.archetype) != exclude && s.raw_score > 0.0)
        .fold(None, |best: Option<ArchetypeScore>, s| match best {
            Some(b) if b.raw_score >= s.raw_score => Some(b),
            _ => Some(*s),
        })
}

static DEFAULT_DETECTOR: LazyLock<ArchetypeDetector> = LazyLock::new(ArchetypeDetector::default);

/// Detects the archetype of `cards` with the default signals, thresholds and curve.
///
/// ```
/// use crdeck_cards::{Card, Rarity};
/// use crdeck_evaluator::archetype::{Archetype, detect_archetype};
///
/// let empty = detect_archetype(&[]);
/// assert_eq!(empty.primary, Archetype::Unknown);
/// assert!(!empty.is_hybrid);
///
/// let deck = ["Golem", "Baby Dragon", "Night Witch", "Lumberjack", "Mega Minion"]
///     .map(|name| Card::new(name, 4, Rarity::Epic));
/// assert_eq!(detect_archetype(&deck).primary, Archetype::Beatdown);
/// ```
#[must_use]
pub fn detect_archetype(cards: &[Card]) -> ArchetypeResult {
    DEFAULT_DETECTOR.detect(cards)
}
