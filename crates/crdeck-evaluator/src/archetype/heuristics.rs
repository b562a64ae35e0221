//! Raw per-archetype scores in \[0.0, 10.0\].
//!
//! Each heuristic is a weighted sum of a few 0-10 components. Siege, Graveyard
//! and Miner score 0 outright without one of their defining win conditions.

use std::collections::BTreeSet;

use super::{Archetype, ArchetypeSignals};
use crate::{deck_analysis::DeckAnalysis, rating::clamp_score};

/// Raw heuristic score of `archetype` for the analyzed deck.
///
/// [`Archetype::Hybrid`] and [`Archetype::Unknown`] are outcomes, not patterns,
/// and always score 0.
#[must_use]
pub fn raw_score(archetype: Archetype, analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    if analysis.is_empty() {
        return 0.0;
    }
    let score = match archetype {
        Archetype::Beatdown => beatdown(analysis, signals),
        Archetype::Cycle => cycle(analysis, signals),
        Archetype::Siege => siege(analysis, signals),
        Archetype::Bait => bait(analysis, signals),
        Archetype::Bridge => bridge(analysis, signals),
        Archetype::Graveyard => graveyard(analysis, signals),
        Archetype::Miner => miner(analysis, signals),
        Archetype::Control => control(analysis, signals),
        Archetype::Hybrid | Archetype::Unknown => 0.0,
    };
    clamp_score(score)
}

fn presence(analysis: &DeckAnalysis<'_>, names: &BTreeSet<String>) -> f32 {
    if analysis.contains_any(names) { 10.0 } else { 0.0 }
}

#[expect(clippy::cast_precision_loss)]
fn per_card(count: usize, points: f32) -> f32 {
    (count as f32 * points).min(10.0)
}

/// Heavy tank, splash support, 3.5-4.5 average elixir.
fn beatdown(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    let tank = presence(analysis, &signals.beatdown_tanks);
    let support = per_card(analysis.count_named(&signals.beatdown_support), 2.5);
    let avg = analysis.average_elixir();
    let elixir = if (3.5..=4.5).contains(&avg) {
        10.0
    } else if (3.2..=5.0).contains(&avg) {
        6.0
    } else if avg >= 3.0 {
        3.0
    } else {
        0.0
    };
    tank * 0.4 + support * 0.3 + elixir * 0.3
}

/// Cheap cards, a fast win condition, 2.4-3.2 average elixir.
fn cycle(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    let win_condition = presence(analysis, &signals.cycle_win_conditions);
    // Named cycle cards count on top of the generic cheap-card count.
    let cheap = analysis.count_at_most(2) + analysis.count_named(&signals.cycle_cards);
    let cheap = per_card(cheap, 2.0);
    let avg = analysis.average_elixir();
    let elixir = if (2.4..=3.2).contains(&avg) {
        10.0
    } else if (2.0..=3.5).contains(&avg) {
        6.0
    } else {
        2.0
    };
    win_condition * 0.3 + cheap * 0.4 + elixir * 0.3
}

fn siege(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    if !analysis.contains_any(&signals.siege_win_conditions) {
        return 0.0;
    }
    let defense = per_card(analysis.count_named(&signals.siege_defense), 2.5);
    10.0 * 0.6 + defense * 0.4
}

fn bait(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    let win_condition = if analysis.contains_any(&signals.bait_win_conditions) {
        10.0
    } else if analysis.contains_any(&signals.bait_fallback_win_conditions) {
        7.0
    } else {
        0.0
    };
    let bait = per_card(analysis.count_named(&signals.bait_cards), 2.5);
    win_condition * 0.5 + bait * 0.5
}

/// Fast pressure units around a bridge win condition, 3.0-4.0 average elixir.
fn bridge(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    let win_condition = presence(analysis, &signals.bridge_win_conditions);
    let spam = per_card(analysis.count_named(&signals.bridge_spam_cards), 3.0);
    let avg = analysis.average_elixir();
    let elixir = if (3.0..=4.0).contains(&avg) {
        10.0
    } else if (2.8..=4.2).contains(&avg) {
        6.0
    } else {
        0.0
    };
    win_condition * 0.4 + spam * 0.4 + elixir * 0.2
}

fn graveyard(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    if !analysis.contains_any(&signals.graveyard_win_conditions) {
        return 0.0;
    }
    let support = per_card(analysis.count_named(&signals.graveyard_support), 3.0);
    let spells = per_card(analysis.count_named(&signals.graveyard_spells), 5.0);
    10.0 * 0.5 + support * 0.3 + spells * 0.2
}

fn miner(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    if !analysis.contains_any(&signals.miner_win_conditions) {
        return 0.0;
    }
    let support = per_card(analysis.count_named(&signals.miner_support), 3.0);
    10.0 * 0.6 + support * 0.4
}

/// Defensive buildings and big spells. Building-role cards that are also in
/// the named building set count twice.
fn control(analysis: &DeckAnalysis<'_>, signals: &ArchetypeSignals) -> f32 {
    let win_condition = presence(analysis, &signals.control_win_conditions);
    let buildings =
        analysis.building_count() + analysis.count_named(&signals.control_buildings);
    let buildings = per_card(buildings, 5.0);
    let spells = per_card(analysis.count_named(&signals.control_spells), 5.0);
    win_condition * 0.35 + buildings * 0.35 + spells * 0.30
}
