use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Archetype;

/// Card-name tables the archetype heuristics key off.
///
/// This is game knowledge, not classification logic: the heuristics only ask
/// "how many deck cards are in this set". The [`Default`] tables reflect the
/// current card pool; a JSON file with the same shape replaces any subset of
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchetypeSignals {
    pub beatdown_tanks: BTreeSet<String>,
    pub beatdown_support: BTreeSet<String>,

    pub control_win_conditions: BTreeSet<String>,
    pub control_buildings: BTreeSet<String>,
    pub control_spells: BTreeSet<String>,

    pub cycle_win_conditions: BTreeSet<String>,
    pub cycle_cards: BTreeSet<String>,

    pub bridge_win_conditions: BTreeSet<String>,
    pub bridge_spam_cards: BTreeSet<String>,

    pub siege_win_conditions: BTreeSet<String>,
    pub siege_defense: BTreeSet<String>,

    pub bait_win_conditions: BTreeSet<String>,
    /// Weaker bait win conditions used when none of `bait_win_conditions` is present.
    pub bait_fallback_win_conditions: BTreeSet<String>,
    pub bait_cards: BTreeSet<String>,

    pub graveyard_win_conditions: BTreeSet<String>,
    pub graveyard_support: BTreeSet<String>,
    pub graveyard_spells: BTreeSet<String>,

    pub miner_win_conditions: BTreeSet<String>,
    pub miner_support: BTreeSet<String>,

    /// Archetype pairs that share a game plan and never form a hybrid.
    pub related_pairs: Vec<[Archetype; 2]>,
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|&s| s.to_owned()).collect()
}

impl Default for ArchetypeSignals {
    fn default() -> Self {
        Self {
            beatdown_tanks: names(&["Golem", "Lava Hound", "Electro Giant", "Giant", "Mega Knight"]),
            beatdown_support: names(&[
                "Baby Dragon",
                "Night Witch",
                "Lumberjack",
                "Mega Minion",
                "Witch",
            ]),
            control_win_conditions: names(&["Graveyard"]),
            control_buildings: names(&["Tesla", "Cannon", "Inferno Tower", "Bomb Tower"]),
            control_spells: names(&["Poison", "Fireball", "Lightning", "Rocket"]),
            cycle_win_conditions: names(&["Hog Rider", "Royal Giant", "Royal Hogs"]),
            cycle_cards: names(&["Skeletons", "Ice Spirit", "Ice Golem", "Electro Spirit"]),
            bridge_win_conditions: names(&["P.E.K.K.A", "Mega Knight", "Royal Ghost", "Battle Ram"]),
            bridge_spam_cards: names(&[
                "Bandit",
                "Royal Ghost",
                "Battle Ram",
                "Wall Breakers",
                "Prince",
            ]),
            siege_win_conditions: names(&["X-Bow", "Mortar"]),
            siege_defense: names(&["Tesla", "Knight", "Archers", "Cannon"]),
            bait_win_conditions: names(&["Goblin Barrel"]),
            bait_fallback_win_conditions: names(&["Goblin Drill"]),
            bait_cards: names(&[
                "Goblin Gang",
                "Princess",
                "Goblin Barrel",
                "Dart Goblin",
                "Goblin Drill",
            ]),
            graveyard_win_conditions: names(&["Graveyard"]),
            graveyard_support: names(&["Ice Wizard", "Baby Dragon", "Bowler", "Bomb Tower", "Knight"]),
            graveyard_spells: names(&["Freeze", "Poison", "Tornado"]),
            miner_win_conditions: names(&["Miner"]),
            miner_support: names(&["Poison", "Valkyrie", "Electro Wizard", "Ice Golem"]),
            related_pairs: vec![
                [Archetype::Siege, Archetype::Control],
                [Archetype::Graveyard, Archetype::Control],
                [Archetype::Miner, Archetype::Cycle],
                [Archetype::Bridge, Archetype::Beatdown],
            ],
        }
    }
}

impl ArchetypeSignals {
    /// Order-independent membership in [`related_pairs`](Self::related_pairs).
    #[must_use]
    pub fn are_related(&self, a: Archetype, b: Archetype) -> bool {
        self.related_pairs
            .iter()
            .any(|&[x, y]| (x == a && y == b) || (x == b && y == a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_related_pairs_are_symmetric() {
        let signals = ArchetypeSignals::default();
        assert!(signals.are_related(Archetype::Cycle, Archetype::Miner));
        assert!(signals.are_related(Archetype::Miner, Archetype::Cycle));
        assert!(!signals.are_related(Archetype::Beatdown, Archetype::Siege));
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{ "siege_win_conditions": ["X-Bow"], "related_pairs": [["Bait", "Cycle"]] }"#;
        let signals: ArchetypeSignals = serde_json::from_str(json).unwrap();
        assert_eq!(signals.siege_win_conditions.len(), 1);
        assert!(signals.beatdown_tanks.contains("Golem"));
        assert!(signals.are_related(Archetype::Cycle, Archetype::Bait));
        assert!(!signals.are_related(Archetype::Miner, Archetype::Cycle));
    }
}
