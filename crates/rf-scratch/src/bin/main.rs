//! Scratch card CLI
//!
//! Usage:
//!   scratch --config card.json --betting-amount 100
//!   scratch --config card.yaml --betting-amount 100 --seed 42 --format json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use rf_scratch::{ConfigParser, MAX_STAKE, PlayOutcome, ScratchEngine};

#[derive(Parser)]
#[command(name = "scratch", about = "Play one round of a scratch lottery card")]
struct Cli {
    /// Card configuration (JSON or YAML)
    #[arg(long)]
    config: PathBuf,

    /// Stake for this play
    #[arg(long, value_parser = clap::value_parser!(i64).range(1..=MAX_STAKE))]
    betting_amount: i64,

    /// Seed for a reproducible play
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = ConfigParser::new()
        .load(&cli.config)
        .with_context(|| format!("Failed to load config {}", cli.config.display()))?;

    let mut engine = match cli.seed {
        Some(seed) => ScratchEngine::seeded(config, seed),
        None => ScratchEngine::new(config),
    };

    let outcome = engine
        .play(cli.betting_amount)
        .context("Play failed")?;

    match cli.format {
        OutputFormat::Text => print_text(&outcome),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }

    Ok(())
}

fn print_text(outcome: &PlayOutcome) {
    println!("Generated field:");
    println!("{}", outcome.grid);
    println!();
    println!("Betting amount: {}", outcome.stake());

    let kinds = outcome.patterns.kinds();
    if kinds.is_empty() {
        println!("Patterns: none");
    } else {
        let names: Vec<String> = kinds.iter().map(|k| k.to_string()).collect();
        println!("Patterns: {}", names.join(", "));
    }

    for step in &outcome.resolution.steps {
        println!(
            "  {:<16} {:?} {} : {} -> {}",
            step.kind.to_string(),
            step.rule.action,
            step.rule.amount,
            step.before,
            step.after
        );
    }
    if let Some(bonus) = &outcome.resolution.bonus {
        println!("  bonus            x{} +{}", bonus.multiplier, bonus.additive);
    }

    println!("Winnings: {}", outcome.payout());
}
