use crdeck_cards::{Card, CardCatalog, PlayerProfile, Rarity};
use serde::{Deserialize, Serialize};

/// A deck card absent from the player's collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCard {
    pub name: String,
    pub rarity: Rarity,
    pub unlock_arena: u32,
    pub unlock_arena_name: String,
    /// The player's arena has not reached `unlock_arena` yet.
    pub is_locked: bool,
}

/// Ownership partition of a deck against a player profile.
///
/// `missing_count + available_count` always equals the deck size, and
/// `is_playable` holds exactly when nothing is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingCardsAnalysis {
    pub deck: Vec<String>,
    /// Sorted by unlock arena, earliest first.
    pub missing_cards: Vec<MissingCard>,
    pub missing_count: usize,
    pub available_count: usize,
    pub is_playable: bool,
}

impl Default for MissingCardsAnalysis {
    fn default() -> Self {
        Self {
            deck: Vec::new(),
            missing_cards: Vec::new(),
            missing_count: 0,
            available_count: 0,
            is_playable: true,
        }
    }
}

impl MissingCardsAnalysis {
    /// # Example
    ///
    /// ```
    /// use crdeck_cards::{Card, CardCatalog, CardLevelInfo, PlayerProfile, Rarity};
    /// use crdeck_evaluator::player_context::MissingCardsAnalysis;
    ///
    /// let deck = [
    ///     Card::new("Knight", 3, Rarity::Common),
    ///     Card::new("Miner", 3, Rarity::Legendary),
    /// ];
    /// let profile = PlayerProfile::new(4).with_card("Knight", CardLevelInfo::new(13, 15));
    ///
    /// let analysis = MissingCardsAnalysis::identify(&deck, &profile, &CardCatalog::default());
    /// assert_eq!(analysis.missing_count, 1);
    /// assert!(!analysis.is_playable);
    /// assert!(analysis.missing_cards[0].is_locked);
    /// ```
    #[must_use]
    pub fn identify(cards: &[Card], profile: &PlayerProfile, catalog: &CardCatalog) -> Self {
        let mut missing_cards = cards
            .iter()
            .filter(|c| !profile.owns(&c.name))
            .map(|c| {
                let unlock_arena = catalog.unlock_arena(&c.name);
                MissingCard {
                    name: c.name.clone(),
                    rarity: c.rarity,
                    unlock_arena,
                    unlock_arena_name: catalog.arena_name(unlock_arena),
                    is_locked: !profile.is_card_unlocked(&c.name, catalog),
                }
            })
            .collect::<Vec<_>>();
        // Stable: deck order among cards unlocking in the same arena.
        missing_cards.sort_by_key(|m| m.unlock_arena);

        let missing_count = missing_cards.len();
        Self {
            deck: crdeck_cards::card_names(cards),
            missing_cards,
            missing_count,
            available_count: cards.len() - missing_count,
            is_playable: missing_count == 0,
        }
    }

    #[must_use]
    pub fn locked_count(&self) -> usize {
        self.missing_cards.iter().filter(|m| m.is_locked).count()
    }

    #[must_use]
    pub fn unlocked_missing_count(&self) -> usize {
        self.missing_count - self.locked_count()
    }
}
