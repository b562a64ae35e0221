//! Card unlock-arena table.
//!
//! Which arena unlocks which card is game data, not evaluation logic. The
//! [`Default`] catalog carries the built-in table; callers may deserialize
//! their own and inject it wherever a [`CardCatalog`] is accepted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

const DEFAULT_UNLOCK_ARENAS: &[(u32, &[&str])] = &[
    (
        0,
        &[
            "Knight",
            "Archers",
            "Goblins",
            "Giant",
            "P.E.K.K.A",
            "Minions",
            "Balloon",
            "Witch",
            "Barbarians",
            "Golem",
            "Skeletons",
            "Valkyrie",
            "Skeleton Army",
            "Bomber",
            "Musketeer",
            "Baby Dragon",
            "Prince",
            "Wizard",
            "Mini P.E.K.K.A",
            "Fireball",
            "Arrows",
            "Zap",
            "Cannon",
            "Tesla",
        ],
    ),
    (1, &["Spear Goblins", "Giant Skeleton", "Tombstone"]),
    (2, &["Hog Rider", "Minion Horde", "Rage", "Goblin Hut"]),
    (3, &["Ice Wizard", "Royal Giant", "Rocket", "Goblin Barrel"]),
    (
        4,
        &["Guards", "Princess", "Dark Prince", "Freeze", "Mirror", "Lightning"],
    ),
    (
        5,
        &["Three Musketeers", "Lava Hound", "Poison", "Elixir Collector"],
    ),
    (
        6,
        &["Ice Spirit", "Fire Spirit", "Miner", "Sparky", "Graveyard", "The Log"],
    ),
    (
        7,
        &["Bowler", "Lumberjack", "Battle Ram", "Inferno Dragon", "Tornado", "Clone"],
    ),
    (
        8,
        &[
            "Ice Golem",
            "Mega Minion",
            "Dart Goblin",
            "Goblin Gang",
            "Electro Wizard",
            "Earthquake",
        ],
    ),
    (9, &["Elite Barbarians", "Hunter", "Executioner", "Bandit"]),
    (10, &["Royal Recruits", "Night Witch", "Bats", "Royal Ghost"]),
    (
        11,
        &[
            "Ram Rider",
            "Zappies",
            "Rascals",
            "Cannon Cart",
            "Mega Knight",
            "Barbarian Barrel",
        ],
    ),
    (
        12,
        &[
            "Skeleton Barrel",
            "Flying Machine",
            "Wall Breakers",
            "Royal Hogs",
            "Goblin Giant",
            "Heal Spirit",
        ],
    ),
    (
        13,
        &["Fisherman", "Magic Archer", "Electro Dragon", "Firecracker", "Giant Snowball"],
    ),
    (
        14,
        &["Mighty Miner", "Elixir Golem", "Battle Healer", "Royal Delivery"],
    ),
    (
        15,
        &[
            "Skeleton King",
            "Archer Queen",
            "Golden Knight",
            "Monk",
            "Mother Witch",
            "Electro Spirit",
            "Electro Giant",
            "Phoenix",
        ],
    ),
];

const DEFAULT_ARENA_NAMES: [&str; 16] = [
    "Training Camp",
    "Goblin Stadium",
    "Bone Pit",
    "Barbarian Bowl",
    "P.E.K.K.A's Playhouse",
    "Spell Valley",
    "Builder's Workshop",
    "Royal Arena",
    "Frozen Peak",
    "Jungle Arena",
    "Hog Mountain",
    "Electro Valley",
    "Spooky Town",
    "Rascal's Hideout",
    "Serenity Peak",
    "Legendary Arena",
];

/// Maps card names to the arena that unlocks them.
///
/// Cards missing from the table unlock in arena 0.
///
/// # Example
///
/// ```
/// use crdeck_cards::CardCatalog;
///
/// let catalog = CardCatalog::default();
/// assert_eq!(catalog.unlock_arena("Miner"), 6);
/// assert_eq!(catalog.unlock_arena("Not A Card"), 0);
/// assert_eq!(catalog.arena_name(6), "Builder's Workshop");
/// assert_eq!(catalog.arena_name(42), "Arena 42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardCatalog {
    pub unlock_arenas: BTreeMap<String, u32>,
    #[serde(default)]
    pub arena_names: BTreeMap<u32, String>,
}

impl Default for CardCatalog {
    fn default() -> Self {
        let unlock_arenas = DEFAULT_UNLOCK_ARENAS
            .iter()
            .flat_map(|(arena, names)| names.iter().map(|name| ((*name).to_owned(), *arena)))
            .collect();
        let arena_names = (0..)
            .zip(DEFAULT_ARENA_NAMES)
            .map(|(id, name)| (id, name.to_owned()))
            .collect();
        Self {
            unlock_arenas,
            arena_names,
        }
    }
}

impl CardCatalog {
    #[must_use]
    pub fn unlock_arena(&self, name: &str) -> u32 {
        self.unlock_arenas.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn arena_name(&self, arena_id: u32) -> String {
        self.arena_names
            .get(&arena_id)
            .cloned()
            .unwrap_or_else(|| format!("Arena {arena_id}"))
    }
}
