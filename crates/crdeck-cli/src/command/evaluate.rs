use std::{
    fmt::{self, Write as _},
    path::PathBuf,
};

use anyhow::Context;
use chrono::{DateTime, Utc};
use crdeck_evaluator::{
    category::Category,
    deck_evaluator::{DeckEvaluator, EvaluationResult},
    synergy::SynergyLookup,
};
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct EvaluateArg {
    /// Deck JSON file (array of cards)
    #[arg(long)]
    deck: PathBuf,
    /// Player profile JSON file; enables level-aware scoring
    #[arg(long)]
    profile: Option<PathBuf>,
    /// Synergy dataset JSON file (array of card pairs)
    #[arg(long)]
    synergy: Option<PathBuf>,
    /// Evaluation config JSON file; missing fields keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,
    /// Archetype signal tables JSON file; missing fields keep their defaults
    #[arg(long)]
    signals: Option<PathBuf>,
    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: OutputFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct EvaluationReport<'a> {
    evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    result: &'a EvaluationResult,
}

pub(crate) fn run(arg: &EvaluateArg) -> anyhow::Result<()> {
    let deck = util::read_deck_file(&arg.deck)?;
    let profile = arg.profile.as_ref().map(util::read_profile_file).transpose()?;
    let synergy = arg.synergy.as_ref().map(util::read_synergy_file).transpose()?;
    let config = util::read_config_file(arg.config.as_ref())?;
    let signals = util::read_signals_file(arg.signals.as_ref())?;

    let weight_total = config.weights.total();
    if (weight_total - 1.0).abs() > 1e-3 {
        tracing::warn!(total = weight_total, "category weights do not sum to 1.0");
    }

    let evaluator = DeckEvaluator::new(config).with_signals(signals);
    let result = evaluator.evaluate(
        deck.cards(),
        synergy.as_ref().map(|t| t as &dyn SynergyLookup),
        profile.as_ref(),
    );
    let report = EvaluationReport {
        evaluated_at: Utc::now(),
        result: &result,
    };

    let mut output = Output::from_output_path(arg.output.clone())?;
    match arg.format {
        OutputFormat::Json => output.write_json(&report)?,
        OutputFormat::Text => {
            let mut text = String::new();
            write_text_report(&mut text, &report).context("Failed to render text report")?;
            output.write_text(&text)?;
        }
    }
    Ok(())
}

fn stars(count: u8) -> String {
    "*".repeat(usize::from(count))
}

fn write_text_report(out: &mut String, report: &EvaluationReport<'_>) -> fmt::Result {
    let result = report.result;
    writeln!(out, "Deck evaluation ({})", report.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    writeln!(out, "  Cards:          {}", result.deck.join(", "))?;
    writeln!(out, "  Average elixir: {:.1}", result.average_elixir)?;
    writeln!(
        out,
        "  Overall:        {:.1} ({})",
        result.overall_score, result.overall_rating
    )?;
    writeln!(out)?;

    writeln!(out, "Categories")?;
    for category in Category::ALL {
        let score = result.category(category);
        writeln!(
            out,
            "  {:<12} {:>4.1} {:<3} {:<9} {}",
            category.to_string(),
            score.score,
            stars(score.stars),
            score.rating.to_string(),
            score.assessment
        )?;
    }
    writeln!(out)?;

    let archetype = &result.archetype;
    writeln!(out, "Archetype")?;
    writeln!(
        out,
        "  Primary:   {} ({:.0}%)",
        archetype.primary,
        archetype.primary_confidence * 100.0
    )?;
    writeln!(
        out,
        "  Secondary: {} ({:.0}%)",
        archetype.secondary,
        archetype.secondary_confidence * 100.0
    )?;
    if archetype.is_hybrid {
        writeln!(out, "  Hybrid deck")?;
    }
    writeln!(out)?;

    let adjustments = &result.adjustments;
    writeln!(out, "Adjustments")?;
    writeln!(out, "  Weighted blend: {:.2}", adjustments.weighted_blend)?;
    for flaw in &adjustments.flaws {
        writeln!(out, "  Flaw: {flaw}")?;
    }
    writeln!(out, "  Flaw penalty:   -{:.1}", adjustments.flaw_penalty)?;
    writeln!(out, "  Missing cards:  -{:.1}", adjustments.missing_card_penalty)?;

    if let Some(synergy) = &result.synergy_summary {
        writeln!(out)?;
        writeln!(out, "Synergy")?;
        writeln!(
            out,
            "  {} known pairs, average {:.2}",
            synergy.pair_count, synergy.average_score
        )?;
        for pair in &synergy.top_pairs {
            writeln!(out, "  {} + {}: {:.2}", pair.card_a, pair.card_b, pair.score)?;
        }
        if !synergy.unpaired_cards.is_empty() {
            writeln!(out, "  No partner: {}", synergy.unpaired_cards.join(", "))?;
        }
    }

    if let Some(player) = &result.player {
        writeln!(out)?;
        writeln!(out, "Player context")?;
        writeln!(
            out,
            "  Ladder viability: {:.1} (average gap {:.1}, max gap {})",
            player.breakdown.ladder_viability,
            player.level_gaps.average_gap,
            player.level_gaps.max_gap
        )?;
        for card in &player.missing_cards.missing_cards {
            let state = if card.is_locked { "locked" } else { "not owned" };
            writeln!(
                out,
                "  Missing: {} ({}, {state}, unlocks in {})",
                card.name, card.rarity, card.unlock_arena_name
            )?;
        }
        for priority in &player.upgrade_priorities {
            writeln!(
                out,
                "  Upgrade: {} {}/{} ({})",
                priority.card_name, priority.current_level, priority.max_level, priority.reason
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crdeck_cards::{Card, CardRole, Rarity, TargetType};
    use crdeck_evaluator::deck_evaluator::evaluate;

    use super::*;

    #[test]
    fn test_format_parses_case_insensitively() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_report_lists_every_category() {
        let cards = vec![
            Card::new("Hog Rider", 4, Rarity::Rare)
                .with_role(CardRole::WinCondition)
                .with_stats(150, TargetType::Buildings),
            Card::new("Musketeer", 4, Rarity::Rare).with_stats(180, TargetType::AirAndGround),
            Card::new("Fireball", 4, Rarity::Rare).with_role(CardRole::SpellBig),
        ];
        let result = evaluate(&cards, None, None);
        let report = EvaluationReport {
            evaluated_at: Utc::now(),
            result: &result,
        };
        let mut text = String::new();
        write_text_report(&mut text, &report).unwrap();
        for category in Category::ALL {
            assert!(text.contains(&category.to_string()), "{category} missing");
        }
        assert!(text.contains("Hog Rider"));
        assert!(!text.contains("Player context"));
    }

    #[test]
    fn test_json_report_flattens_result() {
        let result = evaluate(&[], None, None);
        let report = EvaluationReport {
            evaluated_at: Utc::now(),
            result: &result,
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("evaluated_at").is_some());
        assert!(value.get("overall_score").is_some());
        assert!(value.get("archetype").is_some());
    }
}
