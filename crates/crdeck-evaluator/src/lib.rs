//! Scoring and archetype classification for 8-card decks.
//!
//! This crate turns a deck (plus an optional synergy lookup and an optional player
//! profile) into an [`EvaluationResult`](deck_evaluator::EvaluationResult): six category
//! scores, a blended overall score with rating, and a detected archetype.
//!
//! # Architecture
//!
//! ```text
//! Deck Evaluation (overall score, penalties, player context)
//!     ↓ uses
//! Category Scorers (attack, defense, synergy, versatility, f2p, playability)
//! Archetype Detector (raw heuristics → confidence → pure / hybrid / unknown)
//! Player Context (level gaps, ladder viability, upgrade order, missing cards)
//!     ↓ read
//! Deck Analysis (composition counts computed once per deck)
//! ```
//!
//! - [`deck_analysis`] - Role, rarity, targeting and elixir counts shared by all scorers
//! - [`category`] - The six independent category scorers, each mapping a deck to 0-10
//! - [`synergy`] - The injected pairwise synergy lookup and a table-backed implementation
//! - [`archetype`] - Archetype detection with a monotone confidence curve and hybrid rules
//! - [`player_context`] - Derivations over a [`PlayerProfile`](crdeck_cards::PlayerProfile)
//! - [`config`] - Category weights, penalty magnitudes and hybrid thresholds
//! - [`rating`] - The ten-tier rating scale and star buckets
//! - [`deck_evaluator`] - The orchestrator
//!
//! # Design Principles
//!
//! ## Total Functions
//!
//! Nothing in this crate returns an error. Empty decks score 0.0 everywhere, missing
//! role or combat data is "no signal", and an absent lookup or profile selects a
//! documented fallback. Scores are clamped to \[0.0, 10.0\] and confidences to
//! \[0.0, 1.0\] at the point they are finalized.
//!
//! ## Data Outside Logic
//!
//! Card-name tables (archetype signals, unlock arenas) and numeric tuning (weights,
//! penalties, thresholds, the confidence curve) are plain serde values with `Default`
//! implementations, injected into the components that use them.
//!
//! ## No Shared Mutable State
//!
//! Every call allocates its own result. Evaluators and lookups are `Send + Sync` and
//! may be shared across threads.
//!
//! # Example
//!
//! ```
//! use crdeck_cards::{Card, CardRole, Rarity, TargetType};
//! use crdeck_evaluator::deck_evaluator::evaluate;
//!
//! let deck = vec![
//!     Card::new("Hog Rider", 4, Rarity::Rare).with_role(CardRole::WinCondition),
//!     Card::new("Musketeer", 4, Rarity::Rare)
//!         .with_role(CardRole::Support)
//!         .with_stats(180, TargetType::AirAndGround),
//!     Card::new("Fireball", 4, Rarity::Rare).with_role(CardRole::SpellBig),
//!     Card::new("The Log", 2, Rarity::Legendary).with_role(CardRole::SpellSmall),
//!     Card::new("Ice Spirit", 1, Rarity::Common).with_role(CardRole::Cycle),
//!     Card::new("Skeletons", 1, Rarity::Common).with_role(CardRole::Cycle),
//!     Card::new("Cannon", 3, Rarity::Common).with_role(CardRole::Building),
//!     Card::new("Ice Golem", 2, Rarity::Rare).with_role(CardRole::Cycle),
//! ];
//!
//! let result = evaluate(&deck, None, None);
//! assert!((0.0..=10.0).contains(&result.overall_score));
//! assert!(result.player.is_none());
//! ```

pub mod archetype;
pub mod category;
pub mod config;
pub mod deck_analysis;
pub mod deck_evaluator;
pub mod player_context;
pub mod rating;
pub mod synergy;
