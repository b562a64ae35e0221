use crdeck_cards::{Card, PlayerProfile};
use serde::{Deserialize, Serialize};

use crate::rating::clamp_score;

/// Level-gap statistics over the deck cards the player owns.
///
/// Cards absent from the profile contribute nothing: they are not counted as
/// gap 0, and `cards_with_data` excludes them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelGapStats {
    pub average_gap: f32,
    pub max_gap: u8,
    pub cards_with_data: usize,
    /// Mean `level / max_level` of the owned cards, 0.0 when none are owned.
    pub average_level_ratio: f32,
}

impl LevelGapStats {
    /// # Example
    ///
    /// ```
    /// use crdeck_cards::{Card, CardLevelInfo, PlayerProfile, Rarity};
    /// use crdeck_evaluator::player_context::LevelGapStats;
    ///
    /// let deck = [
    ///     Card::new("Knight", 3, Rarity::Common),
    ///     Card::new("Archers", 3, Rarity::Common),
    ///     Card::new("Miner", 3, Rarity::Legendary),
    /// ];
    /// let profile = PlayerProfile::new(0)
    ///     .with_card("Knight", CardLevelInfo::new(14, 15))
    ///     .with_card("Archers", CardLevelInfo::new(10, 15));
    ///
    /// let stats = LevelGapStats::compute(&deck, &profile);
    /// assert_eq!(stats.cards_with_data, 2);
    /// assert_eq!(stats.max_gap, 5);
    /// assert!((stats.average_gap - 3.0).abs() < 1e-6);
    /// ```
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn compute(cards: &[Card], profile: &PlayerProfile) -> Self {
        let owned = cards
            .iter()
            .filter_map(|c| profile.card(&c.name))
            .collect::<Vec<_>>();
        if owned.is_empty() {
            return Self::default();
        }

        let count = owned.len() as f32;
        let total_gap = owned.iter().map(|i| f32::from(i.level_gap())).sum::<f32>();
        let total_ratio = owned.iter().map(|i| i.level_ratio()).sum::<f32>();
        Self {
            average_gap: total_gap / count,
            max_gap: owned.iter().map(|i| i.level_gap()).max().unwrap_or(0),
            cards_with_data: owned.len(),
            average_level_ratio: total_ratio / count,
        }
    }

    #[must_use]
    pub fn ladder_viability(&self) -> f32 {
        ladder_viability_score(self.average_gap, self.max_gap)
    }
}

/// Competitive readiness of a deck given its level gaps, in \[0.0, 10.0\].
///
/// Starts at `10 - average_gap`. The largest applicable step penalty for the
/// worst card is subtracted on top: 0.5 from a max gap of 3, 1.0 from 5, 1.5
/// from 7. Steps do not stack.
///
/// ```
/// use crdeck_evaluator::player_context::ladder_viability_score;
///
/// assert!((ladder_viability_score(0.0, 0) - 10.0).abs() < f32::EPSILON);
/// assert!((ladder_viability_score(2.0, 5) - 7.0).abs() < f32::EPSILON);
/// assert!(ladder_viability_score(12.0, 12).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn ladder_viability_score(average_gap: f32, max_gap: u8) -> f32 {
    let step_penalty = match max_gap {
        7.. => 1.5,
        5..=6 => 1.0,
        3..=4 => 0.5,
        _ => 0.0,
    };
    clamp_score(10.0 - average_gap - step_penalty)
}

#[cfg(test)]
mod tests {
    use crdeck_cards::{CardLevelInfo, Rarity};

    use super::*;

    #[test]
    fn test_no_owned_cards() {
        let deck = [Card::new("Knight", 3, Rarity::Common)];
        let stats = LevelGapStats::compute(&deck, &PlayerProfile::new(0));
        assert_eq!(stats, LevelGapStats::default());
    }

    #[test]
    fn test_maxed_profile() {
        let deck = [
            Card::new("Knight", 3, Rarity::Common),
            Card::new("Archers", 3, Rarity::Common),
        ];
        let profile = PlayerProfile::new(0)
            .with_card("Knight", CardLevelInfo::new(15, 15))
            .with_card("Archers", CardLevelInfo::new(15, 15));
        let stats = LevelGapStats::compute(&deck, &profile);
        assert!(stats.average_gap.abs() < f32::EPSILON);
        assert!((stats.average_level_ratio - 1.0).abs() < f32::EPSILON);
        assert!((stats.ladder_viability() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_step_penalties() {
        assert!((ladder_viability_score(1.0, 2) - 9.0).abs() < 1e-6);
        assert!((ladder_viability_score(1.0, 3) - 8.5).abs() < 1e-6);
        assert!((ladder_viability_score(1.0, 5) - 8.0).abs() < 1e-6);
        assert!((ladder_viability_score(1.0, 7) - 7.5).abs() < 1e-6);
        assert!((ladder_viability_score(1.0, 14) - 7.5).abs() < 1e-6);
    }

    #[test]
    fn test_viability_strictly_decreases_with_average_gap() {
        let mut previous = ladder_viability_score(0.0, 0);
        for tenths in 1..=95_u8 {
            let current = ladder_viability_score(f32::from(tenths) / 10.0, 0);
            assert!(current < previous, "gap {tenths}");
            previous = current;
        }
        assert!(ladder_viability_score(10.0, 0).abs() < f32::EPSILON);
        assert!(ladder_viability_score(25.0, 14).abs() < f32::EPSILON);
    }
}
