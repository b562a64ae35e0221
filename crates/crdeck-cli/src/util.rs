use std::{
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context;
use crdeck_cards::{Deck, PlayerProfile};
use crdeck_evaluator::{archetype::ArchetypeSignals, config::EvaluationConfig, synergy::SynergyTable};

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn from_output_path(output_path: Option<PathBuf>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: PathBuf) -> anyhow::Result<Self> {
        let file = File::create(&path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path,
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.finish()
    }

    pub fn write_text(&mut self, text: &str) -> anyhow::Result<()> {
        self.write_all(text.as_bytes())
            .with_context(|| format!("Failed to write report to {}", self.display_path()))?;
        self.finish()
    }

    fn finish(&mut self) -> anyhow::Result<()> {
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        if let Output::File { path, .. } = self {
            tracing::info!(path = %path.display(), "output written");
        }
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    tracing::debug!(kind = file_kind, path = %path.display(), "loaded input file");
    Ok(value)
}

/// Reads `path` when given, otherwise falls back to `T::default()`.
pub fn read_json_file_or_default<T, P>(file_kind: &str, path: Option<P>) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned + Default,
    P: AsRef<Path>,
{
    path.map_or_else(|| Ok(T::default()), |path| read_json_file(file_kind, path))
}

/// Read a deck from a JSON array of cards
pub fn read_deck_file<P>(path: P) -> anyhow::Result<Deck>
where
    P: AsRef<Path>,
{
    let deck: Deck = read_json_file("deck", path)?;
    if deck.len() != Deck::STANDARD_SIZE {
        tracing::warn!(
            cards = deck.len(),
            expected = Deck::STANDARD_SIZE,
            "deck is not full size"
        );
    }
    Ok(deck)
}

pub fn read_profile_file<P>(path: P) -> anyhow::Result<PlayerProfile>
where
    P: AsRef<Path>,
{
    read_json_file("player profile", path)
}

/// Read a synergy dataset from a JSON array of pairs
pub fn read_synergy_file<P>(path: P) -> anyhow::Result<SynergyTable>
where
    P: AsRef<Path>,
{
    let table: SynergyTable = read_json_file("synergy", path)?;
    tracing::debug!(pairs = table.len(), "synergy table loaded");
    Ok(table)
}

pub fn read_config_file<P>(path: Option<P>) -> anyhow::Result<EvaluationConfig>
where
    P: AsRef<Path>,
{
    read_json_file_or_default("evaluation config", path)
}

pub fn read_signals_file<P>(path: Option<P>) -> anyhow::Result<ArchetypeSignals>
where
    P: AsRef<Path>,
{
    read_json_file_or_default("archetype signals", path)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crdeck_evaluator::synergy::SynergyLookup as _;

    use super::*;

    fn data_file(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data").join(name)
    }

    #[test]
    fn test_sample_files_parse() {
        let deck = read_deck_file(data_file("hog_cycle.json")).unwrap();
        assert_eq!(deck.len(), Deck::STANDARD_SIZE);
        let profile = read_profile_file(data_file("profile.json")).unwrap();
        assert!(profile.owns("Hog Rider"));
        assert!(!profile.owns("The Log"));
        let synergy = read_synergy_file(data_file("synergy.json")).unwrap();
        assert_eq!(synergy.pairwise_score("Ice Spirit", "Hog Rider"), Some(0.85));
    }

    #[test]
    fn test_absent_optional_file_uses_default() {
        let config = read_config_file(None::<&Path>).unwrap();
        assert_eq!(config, EvaluationConfig::default());
        let signals = read_signals_file(None::<&Path>).unwrap();
        assert_eq!(signals, ArchetypeSignals::default());
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = read_deck_file("no/such/deck.json").unwrap_err();
        assert!(format!("{err:#}").contains("no/such/deck.json"));
    }
}
