use crdeck_cards::{Card, PlayerProfile};
use serde::{Deserialize, Serialize};

use crate::deck_analysis::TANK_KILLER_DPS;

/// Upgrade urgency class. Lower tiers are upgraded first.
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
    derive_more::IsVariant,
)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeTier {
    #[display("evolution")]
    Evolution,
    #[display("win condition")]
    WinCondition,
    #[display("spell")]
    Spell,
    #[display("tank killer")]
    TankKiller,
    #[display("other")]
    Other,
}

impl UpgradeTier {
    /// Numeric tier, 0 (most urgent) to 4.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn classify(card: &Card, has_evolution: bool, needs_evolution: bool) -> Self {
        if has_evolution || needs_evolution {
            Self::Evolution
        } else if card.is_win_condition() {
            Self::WinCondition
        } else if card.is_spell() {
            Self::Spell
        } else if card.damage_per_second() > TANK_KILLER_DPS {
            Self::TankKiller
        } else {
            Self::Other
        }
    }

    fn reason(self) -> &'static str {
        match self {
            Self::Evolution => "Evolution card: levels multiply the evolved form's impact",
            Self::WinCondition => "Win condition: tower damage depends on its level",
            Self::Spell => "Spell: level decides which troops it can finish off",
            Self::TankKiller => "Tank killer: needed to stop heavy pushes",
            Self::Other => "Support card",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradePriority {
    pub card_name: String,
    pub tier: UpgradeTier,
    pub current_level: u8,
    pub max_level: u8,
    pub level_gap: u8,
    pub reason: String,
}

/// Orders the owned, not-maxed deck cards by upgrade urgency.
///
/// Sorted by tier ascending, then level gap descending, then name. Cards the
/// player does not own and maxed cards are excluded.
///
/// ```
/// use crdeck_cards::{Card, CardLevelInfo, CardRole, PlayerProfile, Rarity};
/// use crdeck_evaluator::player_context::{UpgradeTier, upgrade_priorities};
///
/// let deck = [
///     Card::new("Knight", 3, Rarity::Common),
///     Card::new("Hog Rider", 4, Rarity::Rare).with_role(CardRole::WinCondition),
///     Card::new("Zap", 2, Rarity::Common).with_role(CardRole::SpellSmall),
/// ];
/// let profile = PlayerProfile::new(0)
///     .with_card("Knight", CardLevelInfo::new(10, 15))
///     .with_card("Hog Rider", CardLevelInfo::new(13, 15))
///     .with_card("Zap", CardLevelInfo::new(15, 15));
///
/// let order = upgrade_priorities(&deck, &profile);
/// assert_eq!(order.len(), 2);
/// assert_eq!(order[0].card_name, "Hog Rider");
/// assert_eq!(order[0].tier, UpgradeTier::WinCondition);
/// ```
#[must_use]
pub fn upgrade_priorities(cards: &[Card], profile: &PlayerProfile) -> Vec<UpgradePriority> {
    let mut priorities = cards
        .iter()
        .filter_map(|card| {
            let info = profile.card(&card.name)?;
            if info.is_maxed() {
                return None;
            }
            let tier = UpgradeTier::classify(
                card,
                profile.has_evolution(&card.name),
                info.needs_evolution(),
            );
            Some(UpgradePriority {
                card_name: card.name.clone(),
                tier,
                current_level: info.level,
                max_level: info.max_level,
                level_gap: info.level_gap(),
                reason: tier.reason().to_owned(),
            })
        })
        .collect::<Vec<_>>();

    priorities.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.level_gap.cmp(&a.level_gap))
            .then_with(|| a.card_name.cmp(&b.card_name))
    });
    priorities
}

#[cfg(test)]
mod tests {
    use crdeck_cards::{CardLevelInfo, CardRole, Rarity, TargetType};

    use super::*;

    #[test]
    fn test_tier_ranks() {
        assert_eq!(UpgradeTier::Evolution.rank(), 0);
        assert_eq!(UpgradeTier::Other.rank(), 4);
    }

    #[test]
    fn test_classification_order() {
        let hog = Card::new("Hog Rider", 4, Rarity::Rare).with_role(CardRole::WinCondition);
        let fireball = Card::new("Fireball", 4, Rarity::Rare).with_role(CardRole::SpellBig);
        let pekka = Card::new("Mini P.E.K.K.A", 4, Rarity::Rare).with_stats(300, TargetType::Ground);
        let knight = Card::new("Knight", 3, Rarity::Common).with_stats(120, TargetType::Ground);

        assert_eq!(UpgradeTier::classify(&hog, true, false), UpgradeTier::Evolution);
        assert_eq!(UpgradeTier::classify(&knight, false, true), UpgradeTier::Evolution);
        assert_eq!(UpgradeTier::classify(&hog, false, false), UpgradeTier::WinCondition);
        assert_eq!(UpgradeTier::classify(&fireball, false, false), UpgradeTier::Spell);
        assert_eq!(UpgradeTier::classify(&pekka, false, false), UpgradeTier::TankKiller);
        assert_eq!(UpgradeTier::classify(&knight, false, false), UpgradeTier::Other);
    }

    #[test]
    fn test_sorted_by_tier_then_gap() {
        let deck = [
            Card::new("Knight", 3, Rarity::Common),
            Card::new("Archers", 3, Rarity::Common),
            Card::new("Bats", 2, Rarity::Common),
            Card::new("Cannon", 3, Rarity::Common),
            Card::new("Miner", 3, Rarity::Legendary),
        ];
        let profile = PlayerProfile::new(0)
            .with_card("Knight", CardLevelInfo::new(13, 15))
            .with_card("Archers", CardLevelInfo::new(10, 15))
            .with_card("Bats", CardLevelInfo::new(13, 15))
            .with_card("Cannon", CardLevelInfo::new(14, 15).with_evolution(0, 1));

        let order = upgrade_priorities(&deck, &profile)
            .into_iter()
            .map(|p| p.card_name)
            .collect::<Vec<_>>();
        assert_eq!(order, ["Cannon", "Archers", "Bats", "Knight"]);
    }

    #[test]
    fn test_maxed_and_unowned_excluded() {
        let deck = [
            Card::new("Knight", 3, Rarity::Common),
            Card::new("Miner", 3, Rarity::Legendary),
        ];
        let profile = PlayerProfile::new(0).with_card("Knight", CardLevelInfo::new(15, 15));
        assert!(upgrade_priorities(&deck, &profile).is_empty());
    }
}
