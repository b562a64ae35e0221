use clap::{Parser, Subcommand};

use self::{archetype::ArchetypeArg, evaluate::EvaluateArg};

mod archetype;
mod evaluate;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Score a deck across all categories and detect its archetype
    Evaluate(#[clap(flatten)] EvaluateArg),
    /// Detect the archetype of a deck and list per-pattern scores
    Archetype(#[clap(flatten)] ArchetypeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    crate::telemetry::init(&args.log_level)?;
    match args.mode {
        Mode::Evaluate(arg) => evaluate::run(&arg)?,
        Mode::Archetype(arg) => archetype::run(&arg)?,
    }
    Ok(())
}
