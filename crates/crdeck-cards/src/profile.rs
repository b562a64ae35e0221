use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::{card::Rarity, catalog::CardCatalog};

/// Level and evolution record for one card in a player's collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardLevelInfo {
    pub level: u8,
    pub max_level: u8,
    #[serde(default)]
    pub evolution_level: u8,
    #[serde(default)]
    pub max_evolution_level: u8,
    #[serde(default)]
    pub rarity: Option<Rarity>,
    /// Number of copies owned.
    #[serde(default)]
    pub count: u32,
}

impl CardLevelInfo {
    #[must_use]
    pub const fn new(level: u8, max_level: u8) -> Self {
        Self {
            level,
            max_level,
            evolution_level: 0,
            max_evolution_level: 0,
            rarity: None,
            count: 0,
        }
    }

    #[must_use]
    pub const fn with_evolution(mut self, evolution_level: u8, max_evolution_level: u8) -> Self {
        self.evolution_level = evolution_level;
        self.max_evolution_level = max_evolution_level;
        self
    }

    /// Levels remaining until max. Never negative.
    #[must_use]
    pub const fn level_gap(&self) -> u8 {
        self.max_level.saturating_sub(self.level)
    }

    #[must_use]
    pub const fn is_maxed(&self) -> bool {
        self.level >= self.max_level
    }

    /// The card has an evolution path that is not fully unlocked yet.
    #[must_use]
    pub const fn needs_evolution(&self) -> bool {
        self.max_evolution_level > 0 && self.evolution_level < self.max_evolution_level
    }

    #[must_use]
    pub fn level_ratio(&self) -> f32 {
        if self.max_level == 0 {
            return 0.0;
        }
        (f32::from(self.level) / f32::from(self.max_level)).min(1.0)
    }
}

/// A player's card collection, read-only to the evaluator.
///
/// # Example
///
/// ```
/// use crdeck_cards::{CardCatalog, CardLevelInfo, PlayerProfile};
///
/// let profile = PlayerProfile::new(3)
///     .with_card("Knight", CardLevelInfo::new(12, 15))
///     .with_card("Hog Rider", CardLevelInfo::new(11, 15));
///
/// let catalog = CardCatalog::default();
/// assert!(profile.owns("Knight"));
/// assert!(!profile.owns("Miner"));
/// assert!(profile.is_card_unlocked("Rocket", &catalog)); // arena 3
/// assert!(!profile.is_card_unlocked("Miner", &catalog)); // arena 6
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Current arena. 0 means no arena restriction.
    #[serde(default)]
    pub arena_id: u32,
    #[serde(default)]
    pub collection: BTreeMap<String, CardLevelInfo>,
    #[serde(default)]
    pub unlocked_evolutions: BTreeSet<String>,
}

impl PlayerProfile {
    #[must_use]
    pub fn new(arena_id: u32) -> Self {
        Self {
            arena_id,
            collection: BTreeMap::new(),
            unlocked_evolutions: BTreeSet::new(),
        }
    }

    /// Adds a card to the collection, recording an unlocked evolution when the
    /// record has one.
    #[must_use]
    pub fn with_card(mut self, name: impl Into<String>, info: CardLevelInfo) -> Self {
        let name = name.into();
        if info.evolution_level > 0 {
            self.unlocked_evolutions.insert(name.clone());
        }
        self.collection.insert(name, info);
        self
    }

    #[must_use]
    pub fn owns(&self, name: &str) -> bool {
        self.collection.contains_key(name)
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&CardLevelInfo> {
        self.collection.get(name)
    }

    #[must_use]
    pub fn has_evolution(&self, name: &str) -> bool {
        self.unlocked_evolutions.contains(name)
    }

    /// Returns `true` if the player's arena has reached the card's unlock arena.
    ///
    /// Always `true` for arena 0.
    #[must_use]
    pub fn is_card_unlocked(&self, name: &str, catalog: &CardCatalog) -> bool {
        self.arena_id == 0 || self.arena_id >= catalog.unlock_arena(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_gap_saturates() {
        assert_eq!(CardLevelInfo::new(12, 15).level_gap(), 3);
        assert_eq!(CardLevelInfo::new(15, 15).level_gap(), 0);
        assert_eq!(CardLevelInfo::new(16, 15).level_gap(), 0);
        assert!(CardLevelInfo::new(15, 15).is_maxed());
    }

    #[test]
    fn test_needs_evolution() {
        assert!(!CardLevelInfo::new(14, 15).needs_evolution());
        assert!(CardLevelInfo::new(14, 15).with_evolution(0, 1).needs_evolution());
        assert!(!CardLevelInfo::new(14, 15).with_evolution(1, 1).needs_evolution());
    }

    #[test]
    fn test_unlocked_evolutions_tracked() {
        let profile = PlayerProfile::new(0)
            .with_card("Knight", CardLevelInfo::new(14, 15).with_evolution(1, 1))
            .with_card("Archers", CardLevelInfo::new(14, 15).with_evolution(0, 1));
        assert!(profile.has_evolution("Knight"));
        assert!(!profile.has_evolution("Archers"));
    }

    #[test]
    fn test_arena_zero_unlocks_everything() {
        let profile = PlayerProfile::new(0);
        let catalog = CardCatalog::default();
        assert!(profile.is_card_unlocked("Phoenix", &catalog));
    }

    #[test]
    fn test_deserialize_profile() {
        let json = r#"{
            "arena_id": 8,
            "collection": {
                "Knight": { "level": 13, "max_level": 15, "rarity": "Common", "count": 40 }
            }
        }"#;
        let profile: PlayerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.arena_id, 8);
        assert_eq!(profile.card("Knight").map(|c| c.level_gap()), Some(2));
        assert!(profile.unlocked_evolutions.is_empty());
    }
}
