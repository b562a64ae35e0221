//! Card, deck and player-collection model for deck evaluation.
//!
//! Everything in this crate is plain, immutable input data. The evaluator never
//! mutates these types; it only reads them through the accessors defined here,
//! which return well-defined defaults when optional data is absent:
//!
//! - a card without a role contributes nothing to role-based counts
//! - a card without combat stats is treated as ground-only with zero DPS
//! - a card that is not in a [`PlayerProfile`] has no level data at all
//!
//! # Modules
//!
//! - [`card`]: [`Card`], [`CardRole`], [`Rarity`], [`TargetType`], [`CombatStats`] and [`Deck`]
//! - [`profile`]: [`PlayerProfile`] and per-card [`CardLevelInfo`]
//! - [`catalog`]: [`CardCatalog`], the swappable unlock-arena table

pub use self::{card::*, catalog::*, profile::*};

pub mod card;
pub mod catalog;
pub mod profile;
