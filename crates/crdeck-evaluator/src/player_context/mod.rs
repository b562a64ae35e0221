//! Derivations over a player's card collection.
//!
//! Everything here is a pure function of a deck and a
//! [`PlayerProfile`](crdeck_cards::PlayerProfile):
//!
//! - [`LevelGapStats`] and [`ladder_viability_score`] - how far the player's copies
//!   of the deck cards are from max level, and what that means for ladder play
//! - [`upgrade_priorities`] - which owned cards to upgrade first, and why
//! - [`MissingCardsAnalysis`] - which deck cards the player lacks, and which of
//!   those their arena has not unlocked yet

pub use self::{level_gap::*, missing_cards::*, upgrade_priority::*};

mod level_gap;
mod missing_cards;
mod upgrade_priority;
