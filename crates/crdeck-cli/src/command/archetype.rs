use std::path::PathBuf;

use crdeck_evaluator::archetype::{ArchetypeDetector, ArchetypeResult, ArchetypeScore};
use serde::Serialize;

use crate::util::{self, Output};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ArchetypeArg {
    /// Deck JSON file (array of cards)
    #[arg(long)]
    deck: PathBuf,
    /// Archetype signal tables JSON file; missing fields keep their defaults
    #[arg(long)]
    signals: Option<PathBuf>,
    /// Evaluation config JSON file; only hybrid thresholds and confidence curve are used
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ArchetypeReport {
    deck: Vec<String>,
    #[serde(flatten)]
    result: ArchetypeResult,
    scores: Vec<ArchetypeScore>,
}

pub(crate) fn run(arg: &ArchetypeArg) -> anyhow::Result<()> {
    let deck = util::read_deck_file(&arg.deck)?;
    let signals = util::read_signals_file(arg.signals.as_ref())?;
    let config = util::read_config_file(arg.config.as_ref())?;

    let detector = ArchetypeDetector::new(signals, config.hybrid, config.confidence_curve);
    let report = ArchetypeReport {
        deck: deck.names(),
        result: detector.detect(deck.cards()),
        scores: detector.raw_scores(deck.cards()),
    };

    Output::from_output_path(arg.output.clone())?.write_json(&report)
}
