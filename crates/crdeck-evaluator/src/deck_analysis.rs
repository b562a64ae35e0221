//! Composition counts for a deck.
//!
//! [`DeckAnalysis`] walks the card list once and records everything the category
//! scorers, the archetype detector and the flaw checks need: role counts, targeting
//! coverage, rarity distribution, elixir curve and damage signals.
//!
//! Absent data is "no signal": a card without a role is missing from every role
//! count, and a card without combat stats neither targets air nor counts as a tank
//! killer.
//!
//! ```
//! use crdeck_cards::{Card, CardRole, Rarity, TargetType};
//! use crdeck_evaluator::deck_analysis::DeckAnalysis;
//!
//! let cards = [
//!     Card::new("Hog Rider", 4, Rarity::Rare).with_role(CardRole::WinCondition),
//!     Card::new("Musketeer", 4, Rarity::Rare).with_stats(180, TargetType::AirAndGround),
//!     Card::new("Zap", 2, Rarity::Common).with_role(CardRole::SpellSmall),
//! ];
//! let analysis = DeckAnalysis::new(&cards);
//! assert_eq!(analysis.win_condition_count(), 1);
//! assert_eq!(analysis.anti_air_count(), 1);
//! assert_eq!(analysis.spell_count(), 1);
//! assert!(analysis.has_tank_killer());
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crdeck_cards::{Card, CardRole, Rarity};

/// DPS above which a card counts as a tank killer.
pub const TANK_KILLER_DPS: u32 = 150;

#[derive(Debug)]
pub struct DeckAnalysis<'a> {
    cards: &'a [Card],
    average_elixir: f32,
    role_counts: BTreeMap<CardRole, usize>,
    rarity_counts: BTreeMap<Rarity, usize>,
    elixir_curve: BTreeMap<u8, usize>,
    anti_air_count: usize,
    ground_count: usize,
    tank_killer_count: usize,
}

impl<'a> DeckAnalysis<'a> {
    #[must_use]
    pub fn new(cards: &'a [Card]) -> Self {
        let mut role_counts = BTreeMap::new();
        let mut rarity_counts = BTreeMap::new();
        let mut elixir_curve = BTreeMap::new();
        let mut anti_air_count = 0;
        let mut ground_count = 0;
        let mut tank_killer_count = 0;

        for card in cards {
            if let Some(role) = card.role {
                *role_counts.entry(role).or_default() += 1;
            }
            *rarity_counts.entry(card.rarity).or_default() += 1;
            *elixir_curve.entry(card.elixir).or_default() += 1;
            if card.targets_air() {
                anti_air_count += 1;
            }
            if card.targets_ground() {
                ground_count += 1;
            }
            if card.damage_per_second() > TANK_KILLER_DPS {
                tank_killer_count += 1;
            }
        }

        Self {
            cards,
            average_elixir: crdeck_cards::average_elixir(cards),
            role_counts,
            rarity_counts,
            elixir_curve,
            anti_air_count,
            ground_count,
            tank_killer_count,
        }
    }

    #[must_use]
    pub fn cards(&self) -> &'a [Card] {
        self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn average_elixir(&self) -> f32 {
        self.average_elixir
    }

    #[must_use]
    pub fn role_count(&self, role: CardRole) -> usize {
        self.role_counts.get(&role).copied().unwrap_or(0)
    }

    /// Number of distinct roles present. Role-less cards add nothing.
    #[must_use]
    pub fn distinct_roles(&self) -> usize {
        self.role_counts.len()
    }

    #[must_use]
    pub fn rarity_count(&self, rarity: Rarity) -> usize {
        self.rarity_counts.get(&rarity).copied().unwrap_or(0)
    }

    /// Number of distinct elixir costs.
    #[must_use]
    pub fn distinct_elixir_costs(&self) -> usize {
        self.elixir_curve.len()
    }

    #[must_use]
    pub fn elixir_curve(&self) -> &BTreeMap<u8, usize> {
        &self.elixir_curve
    }

    #[must_use]
    pub fn win_condition_count(&self) -> usize {
        self.role_count(CardRole::WinCondition)
    }

    /// Big and small spells combined.
    #[must_use]
    pub fn spell_count(&self) -> usize {
        self.role_count(CardRole::SpellBig) + self.role_count(CardRole::SpellSmall)
    }

    #[must_use]
    pub fn building_count(&self) -> usize {
        self.role_count(CardRole::Building)
    }

    #[must_use]
    pub fn anti_air_count(&self) -> usize {
        self.anti_air_count
    }

    #[must_use]
    pub fn ground_count(&self) -> usize {
        self.ground_count
    }

    #[must_use]
    pub fn tank_killer_count(&self) -> usize {
        self.tank_killer_count
    }

    #[must_use]
    pub fn has_tank_killer(&self) -> bool {
        self.tank_killer_count > 0
    }

    /// Cards costing at most `max_elixir`.
    #[must_use]
    pub fn count_at_most(&self, max_elixir: u8) -> usize {
        self.elixir_curve.range(..=max_elixir).map(|(_, n)| n).sum()
    }

    /// Cards whose name is in `names`.
    #[must_use]
    pub fn count_named(&self, names: &BTreeSet<String>) -> usize {
        self.cards.iter().filter(|c| names.contains(&c.name)).count()
    }

    #[must_use]
    pub fn contains_any(&self, names: &BTreeSet<String>) -> bool {
        self.cards.iter().any(|c| names.contains(&c.name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.name == name)
    }

    /// Cards with the given role.
    pub fn with_role(&self, role: CardRole) -> impl Iterator<Item = &'a Card> {
        self.cards.iter().filter(move |c| c.has_role(role))
    }
}
