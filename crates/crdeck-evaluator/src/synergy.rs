//! Pairwise card synergy.
//!
//! The evaluator does not own synergy data. It consumes a [`SynergyLookup`],
//! an injected read-only collaborator that scores a pair of card names in
//! \[0.0, 1.0\] or reports that it knows nothing about the pair.
//!
//! [`SynergyTable`] is the bundled implementation, deserialized from a JSON list
//! of pairs:
//!
//! ```json
//! [
//!   { "card1": "Hog Rider", "card2": "Ice Spirit", "score": 0.8, "category": "cycle" },
//!   { "card1": "Golem", "card2": "Night Witch", "score": 0.95, "category": "tank_support" }
//! ]
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use serde::{Deserialize, Serialize};

/// Number of strongest pairs kept in a [`DeckSynergy`] summary.
pub const TOP_PAIR_COUNT: usize = 5;

/// Read-only source of pairwise synergy scores.
///
/// Implementations must be safe to share across threads; evaluation never writes
/// through this trait.
pub trait SynergyLookup: fmt::Debug + Send + Sync {
    /// Synergy between two cards in \[0.0, 1.0\], or `None` for an unknown pair.
    ///
    /// Must be symmetric in its arguments.
    fn pairwise_score(&self, card_a: &str, card_b: &str) -> Option<f32>;

    /// Scores every unordered pair of `names` and summarizes the result.
    fn analyze_deck(&self, names: &[String]) -> DeckSynergy {
        let mut pairs = Vec::new();
        let mut partnered = vec![false; names.len()];

        for (i, a) in names.iter().enumerate() {
            for (j, b) in names.iter().enumerate().skip(i + 1) {
                if let Some(score) = self.pairwise_score(a, b) {
                    pairs.push(ScoredPair {
                        card_a: a.clone(),
                        card_b: b.clone(),
                        score: score.clamp(0.0, 1.0),
                    });
                    partnered[i] = true;
                    partnered[j] = true;
                }
            }
        }

        DeckSynergy::from_pairs(pairs, names, &partnered)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPair {
    pub card_a: String,
    pub card_b: String,
    pub score: f32,
}

/// Aggregate synergy of one deck.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckSynergy {
    /// Strongest known pairs, best first, at most [`TOP_PAIR_COUNT`].
    pub top_pairs: Vec<ScoredPair>,
    /// Number of pairs the lookup knew about.
    pub pair_count: usize,
    /// Mean score over known pairs, 0.0 when there are none.
    pub average_score: f32,
    /// Cards that appear in no known pair.
    pub unpaired_cards: Vec<String>,
}

impl DeckSynergy {
    #[expect(clippy::cast_precision_loss)]
    fn from_pairs(mut pairs: Vec<ScoredPair>, names: &[String], partnered: &[bool]) -> Self {
        let pair_count = pairs.len();
        let average_score = if pair_count == 0 {
            0.0
        } else {
            pairs.iter().map(|p| p.score).sum::<f32>() / pair_count as f32
        };

        // Stable sort keeps deck order among equal scores.
        pairs.sort_by(|a, b| b.score.total_cmp(&a.score));
        pairs.truncate(TOP_PAIR_COUNT);

        let unpaired_cards = names
            .iter()
            .zip(partnered)
            .filter(|(_, paired)| !**paired)
            .map(|(name, _)| name.clone())
            .collect();

        Self {
            top_pairs: pairs,
            pair_count,
            average_score,
            unpaired_cards,
        }
    }
}

/// One entry of a synergy dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynergyPair {
    pub card1: String,
    pub card2: String,
    pub score: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A [`SynergyLookup`] backed by an in-memory list of pairs.
///
/// Pair order does not matter: `(a, b)` and `(b, a)` resolve to the same entry.
/// When a pair is listed twice the later entry wins.
///
/// ```
/// use crdeck_evaluator::synergy::{SynergyLookup, SynergyPair, SynergyTable};
///
/// let table = SynergyTable::new(vec![SynergyPair {
///     card1: "Hog Rider".into(),
///     card2: "Ice Spirit".into(),
///     score: 0.8,
///     category: None,
/// }]);
/// assert_eq!(table.pairwise_score("Ice Spirit", "Hog Rider"), Some(0.8));
/// assert_eq!(table.pairwise_score("Hog Rider", "Golem"), None);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SynergyPair>", into = "Vec<SynergyPair>")]
pub struct SynergyTable {
    pairs: Vec<SynergyPair>,
    index: HashMap<(String, String), usize>,
}

impl SynergyTable {
    #[must_use]
    pub fn new(pairs: Vec<SynergyPair>) -> Self {
        let index = pairs
            .iter()
            .enumerate()
            .map(|(i, p)| (pair_key(&p.card1, &p.card2), i))
            .collect();
        Self { pairs, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    #[must_use]
    pub fn pair(&self, card_a: &str, card_b: &str) -> Option<&SynergyPair> {
        self.index
            .get(&pair_key(card_a, card_b))
            .map(|&i| &self.pairs[i])
    }

    /// Number of known pairs per category. Uncategorized pairs are not counted.
    #[must_use]
    pub fn category_counts(&self, names: &[String]) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                if let Some(category) = self.pair(a, b).and_then(|p| p.category.as_ref()) {
                    *counts.entry(category.clone()).or_default() += 1;
                }
            }
        }
        counts
    }
}

impl SynergyLookup for SynergyTable {
    fn pairwise_score(&self, card_a: &str, card_b: &str) -> Option<f32> {
        self.pair(card_a, card_b).map(|p| p.score)
    }
}

impl From<Vec<SynergyPair>> for SynergyTable {
    fn from(pairs: Vec<SynergyPair>) -> Self {
        Self::new(pairs)
    }
}

impl From<SynergyTable> for Vec<SynergyPair> {
    fn from(table: SynergyTable) -> Self {
        table.pairs
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_owned(), b.to_owned())
    } else {
        (b.to_owned(), a.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> SynergyTable {
        let json = r#"[
            { "card1": "Hog Rider", "card2": "Ice Spirit", "score": 0.8, "category": "cycle" },
            { "card1": "Hog Rider", "card2": "Fireball", "score": 0.6, "category": "spell_combo" },
            { "card1": "Ice Spirit", "card2": "Skeletons", "score": 0.7, "category": "cycle" },
            { "card1": "Musketeer", "card2": "Ice Golem", "score": 0.9 }
        ]"#;
        serde_json::from_str(json).unwrap()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|&s| s.to_owned()).collect()
    }

    #[test]
    fn test_lookup_is_symmetric() {
        let table = table();
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.pairwise_score("Fireball", "Hog Rider"),
            table.pairwise_score("Hog Rider", "Fireball")
        );
        assert_eq!(table.pairwise_score("Golem", "Fireball"), None);
    }

    #[test]
    fn test_analyze_deck() {
        let deck = names(&["Hog Rider", "Ice Spirit", "Fireball", "Skeletons", "Cannon"]);
        let synergy = table().analyze_deck(&deck);
        assert_eq!(synergy.pair_count, 3);
        assert!((synergy.average_score - 0.7).abs() < 1e-6);
        assert!((synergy.top_pairs[0].score - 0.8).abs() < f32::EPSILON);
        assert_eq!(synergy.unpaired_cards, names(&["Cannon"]));
    }

    #[test]
    fn test_analyze_deck_without_pairs() {
        let deck = names(&["Golem", "Cannon"]);
        let synergy = table().analyze_deck(&deck);
        assert_eq!(synergy.pair_count, 0);
        assert!(synergy.average_score.abs() < f32::EPSILON);
        assert_eq!(synergy.unpaired_cards.len(), 2);
    }

    #[test]
    fn test_category_counts() {
        let deck = names(&["Hog Rider", "Ice Spirit", "Skeletons", "Musketeer", "Ice Golem"]);
        let counts = table().category_counts(&deck);
        assert_eq!(counts.get("cycle"), Some(&2));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_top_pairs_truncated() {
        let pairs = (0..8)
            .map(|i| SynergyPair {
                card1: "Hub".to_owned(),
                card2: format!("Card {i}"),
                score: 0.5,
                category: None,
            })
            .collect();
        let table = SynergyTable::new(pairs);
        let deck = std::iter::once("Hub".to_owned())
            .chain((0..8).map(|i| format!("Card {i}")))
            .collect::<Vec<_>>();
        let synergy = table.analyze_deck(&deck);
        assert_eq!(synergy.pair_count, 8);
        assert_eq!(synergy.top_pairs.len(), TOP_PAIR_COUNT);
        assert!(synergy.unpaired_cards.is_empty());
    }
}
