//! Play the brain challenge in a terminal.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rps_brain::console::Console;
use rps_brain::core::{EngineConfig, GameRng, MAX_ROUNDS};
use rps_brain::rules::RoundEngine;

#[derive(Parser, Debug)]
#[command(name = "rps-brain", about = "Rock-paper-scissors brain challenge")]
struct Args {
    /// Seed for the app's moves (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Rounds per game
    #[arg(long, default_value_t = MAX_ROUNDS)]
    rounds: u32,

    /// Log engine events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(seed = rng.seed(), rounds = args.rounds, "starting session");

    let config = EngineConfig::default()
        .with_max_rounds(args.rounds)
        .with_seed(rng.seed());
    let engine = RoundEngine::with_source(config, rng).context("invalid game settings")?;

    let stdin = io::stdin();
    let mut console = Console::new(engine, stdin.lock(), io::stdout());
    let report = console.run().context("console i/o failed")?;

    println!();
    println!("Thanks for playing! Games completed: {}", report.games_completed);
    Ok(())
}
