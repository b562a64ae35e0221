use serde::{Deserialize, Serialize};

/// Tactical role of a card within a deck.
///
/// Roles form a closed set. A card with no role (`Card::role == None`) is simply
/// excluded from role-based counts.
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
#[serde(rename_all = "snake_case")]
pub enum CardRole {
    #[serde(alias = "win_conditions")]
    #[display("win condition")]
    WinCondition,
    #[display("support")]
    Support,
    #[serde(alias = "buildings")]
    #[display("building")]
    Building,
    #[serde(alias = "spells_big")]
    #[display("big spell")]
    SpellBig,
    #[serde(alias = "spells_small")]
    #[display("small spell")]
    SpellSmall,
    #[display("cycle")]
    Cycle,
}

impl CardRole {
    #[must_use]
    pub const fn is_spell(self) -> bool {
        matches!(self, Self::SpellBig | Self::SpellSmall)
    }
}

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
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Champion,
}

/// What a card's attacks can hit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum TargetType {
    Ground,
    Air,
    #[serde(rename = "Air & Ground")]
    #[display("Air & Ground")]
    AirAndGround,
    Buildings,
}

impl TargetType {
    #[must_use]
    pub const fn hits_air(self) -> bool {
        matches!(self, Self::Air | Self::AirAndGround)
    }

    #[must_use]
    pub const fn hits_ground(self) -> bool {
        matches!(self, Self::Ground | Self::AirAndGround | Self::Buildings)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatStats {
    pub damage_per_second: u32,
    pub targets: TargetType,
}

/// A single card as seen by the evaluator.
///
/// Level fields describe the card as it would be played. `max_evolution_level == 0`
/// means the card has no evolution path.
///
/// # Example
///
/// ```
/// use crdeck_cards::{Card, CardRole, Rarity};
///
/// let hog = Card::new("Hog Rider", 4, Rarity::Rare).with_role(CardRole::WinCondition);
/// assert!(hog.is_win_condition());
/// assert!(!hog.targets_air());
/// assert_eq!(hog.damage_per_second(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub elixir: u8,
    #[serde(default)]
    pub role: Option<CardRole>,
    pub rarity: Rarity,
    #[serde(default)]
    pub stats: Option<CombatStats>,
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub max_level: u8,
    #[serde(default)]
    pub evolution_level: u8,
    #[serde(default)]
    pub max_evolution_level: u8,
}

impl Card {
    /// Creates a role-less, stat-less card at level 11/15.
    #[must_use]
    pub fn new(name: impl Into<String>, elixir: u8, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            elixir,
            role: None,
            rarity,
            stats: None,
            level: 11,
            max_level: 15,
            evolution_level: 0,
            max_evolution_level: 0,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: CardRole) -> Self {
        self.role = Some(role);
        self
    }

    #[must_use]
    pub fn with_stats(mut self, damage_per_second: u32, targets: TargetType) -> Self {
        self.stats = Some(CombatStats {
            damage_per_second,
            targets,
        });
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: u8, max_level: u8) -> Self {
        self.level = level;
        self.max_level = max_level;
        self
    }

    #[must_use]
    pub fn with_evolution(mut self, evolution_level: u8, max_evolution_level: u8) -> Self {
        self.evolution_level = evolution_level;
        self.max_evolution_level = max_evolution_level;
        self
    }

    #[must_use]
    pub fn has_role(&self, role: CardRole) -> bool {
        self.role == Some(role)
    }

    #[must_use]
    pub fn is_win_condition(&self) -> bool {
        self.role.is_some_and(|r| r.is_win_condition())
    }

    #[must_use]
    pub fn is_spell(&self) -> bool {
        self.role.is_some_and(CardRole::is_spell)
    }

    #[must_use]
    pub fn is_building(&self) -> bool {
        self.role.is_some_and(|r| r.is_building())
    }

    /// Returns `true` if the card's attacks can hit air units.
    ///
    /// Cards without combat stats never count as air-targeting.
    #[must_use]
    pub fn targets_air(&self) -> bool {
        self.stats.is_some_and(|s| s.targets.hits_air())
    }

    #[must_use]
    pub fn targets_ground(&self) -> bool {
        self.stats.is_some_and(|s| s.targets.hits_ground())
    }

    /// Damage per second, or 0 when combat stats are absent.
    #[must_use]
    pub fn damage_per_second(&self) -> u32 {
        self.stats.map_or(0, |s| s.damage_per_second)
    }

    #[must_use]
    pub fn can_evolve(&self) -> bool {
        self.max_evolution_level > 0
    }

    /// Overall progression of the card in \[0.0, 1.0\].
    ///
    /// Card level counts 70% and evolution level 30% when the card has an
    /// evolution path; otherwise this is the plain level ratio. Returns 0.0
    /// when `max_level` is unknown (0).
    #[must_use]
    pub fn level_ratio(&self) -> f32 {
        if self.max_level == 0 {
            return 0.0;
        }
        let level_ratio = (f32::from(self.level) / f32::from(self.max_level)).min(1.0);
        if self.max_evolution_level == 0 {
            return level_ratio;
        }
        let evolution_ratio = (f32::from(self.evolution_level)
            / f32::from(self.max_evolution_level))
        .min(1.0);
        level_ratio * 0.7 + evolution_ratio * 0.3
    }
}

/// An ordered set of cards, conventionally 8.
///
/// Shorter decks are valid input. Duplicate names are not rejected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub const STANDARD_SIZE: usize = 8;

    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
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
    pub fn names(&self) -> Vec<String> {
        card_names(&self.cards)
    }

    #[must_use]
    pub fn average_elixir(&self) -> f32 {
        average_elixir(&self.cards)
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self::new(cards)
    }
}

#[must_use]
pub fn card_names(cards: &[Card]) -> Vec<String> {
    cards.iter().map(|c| c.name.clone()).collect()
}

/// Mean elixir cost, 0.0 for an empty card set.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn average_elixir(cards: &[Card]) -> f32 {
    if cards.is_empty() {
        return 0.0;
    }
    let total = cards.iter().map(|c| u32::from(c.elixir)).sum::<u32>();
    total as f32 / cards.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stats_defaults() {
        let card = Card::new("Mirror", 1, Rarity::Epic);
        assert!(!card.targets_air());
        assert!(!card.targets_ground());
        assert_eq!(card.damage_per_second(), 0);
        assert!(!card.is_win_condition());
        assert!(!card.is_spell());
    }

    #[test]
    fn test_air_targeting() {
        let musketeer =
            Card::new("Musketeer", 4, Rarity::Rare).with_stats(180, TargetType::AirAndGround);
        let minions = Card::new("Minions", 3, Rarity::Common).with_stats(150, TargetType::Air);
        let giant = Card::new("Giant", 5, Rarity::Rare).with_stats(120, TargetType::Buildings);
        assert!(musketeer.targets_air());
        assert!(minions.targets_air());
        assert!(!giant.targets_air());
        assert!(giant.targets_ground());
    }

    #[test]
    fn test_level_ratio() {
        let card = Card::new("Knight", 3, Rarity::Common).with_level(12, 15);
        assert!((card.level_ratio() - 0.8).abs() < 1e-6);

        let evolved = card.clone().with_evolution(1, 1);
        assert!((evolved.level_ratio() - (0.8 * 0.7 + 0.3)).abs() < 1e-6);

        let unknown = Card::new("Knight", 3, Rarity::Common).with_level(0, 0);
        assert!(unknown.level_ratio().abs() < f32::EPSILON);
    }

    #[test]
    fn test_average_elixir() {
        let deck = Deck::new(vec![
            Card::new("Skeletons", 1, Rarity::Common),
            Card::new("Hog Rider", 4, Rarity::Rare),
        ]);
        assert!((deck.average_elixir() - 2.5).abs() < 1e-6);
        assert!(Deck::default().average_elixir().abs() < f32::EPSILON);
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!("Cycle".parse::<CardRole>().ok(), Some(CardRole::Cycle));
        assert_eq!("Legendary".parse::<Rarity>().ok(), Some(Rarity::Legendary));
        assert!(CardRole::SpellSmall.is_spell());
        assert!(!CardRole::Building.is_spell());
    }

    #[test]
    fn test_deserialize_card() {
        let json = r#"{
            "name": "Baby Dragon",
            "elixir": 4,
            "role": "support",
            "rarity": "Epic",
            "stats": { "damage_per_second": 100, "targets": "Air & Ground" },
            "level": 12,
            "max_level": 15
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.role, Some(CardRole::Support));
        assert!(card.targets_air());
        assert_eq!(card.evolution_level, 0);

        let legacy = r#"{ "name": "Hog Rider", "elixir": 4, "role": "win_conditions", "rarity": "Rare" }"#;
        let card: Card = serde_json::from_str(legacy).unwrap();
        assert!(card.is_win_condition());
        assert!(card.stats.is_none());
    }
}
