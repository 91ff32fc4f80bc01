//! Self-play game generation CLI.
//!
//! Plays Kalah games with the robot advisor as Player 2 and writes one JSON
//! record per game (JSONL), then prints a summary to stderr.
//!
//! Usage:
//!   cargo run --release --bin selfplay -- --games 1000 --seed 7 --output games.jsonl

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kalah::selfplay::{self, Opponent, SelfPlayConfig};

#[derive(Parser, Debug)]
#[command(name = "selfplay", about = "Generate Kalah self-play games")]
struct Args {
    /// Number of games to play.
    #[arg(long, default_value_t = 100)]
    games: usize,

    /// Player 1's policy.
    #[arg(long, value_enum, default_value_t = Opponent::Random)]
    opponent: Opponent,

    /// Chance that an advisor-driven side plays a random house.
    #[arg(long, default_value_t = 0.1)]
    epsilon: f64,

    /// Turn cap per game.
    #[arg(long, default_value_t = 1000)]
    max_turns: usize,

    /// Number of parallel threads.
    #[arg(long, default_value_t = 4)]
    threads: usize,

    /// Random seed, 0 for entropy.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output file path (default: stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Suppress progress and summary output.
    #[arg(long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = SelfPlayConfig {
        num_games: args.games,
        opponent: args.opponent,
        epsilon: args.epsilon.clamp(0.0, 1.0),
        max_turns: args.max_turns,
        threads: args.threads.max(1),
        seed: args.seed,
        quiet: args.quiet,
    };

    if !config.quiet {
        eprintln!(
            "Self-play: {} games, opponent {:?}, epsilon {:.2}, {} threads",
            config.num_games, config.opponent, config.epsilon, config.threads
        );
    }

    let start = Instant::now();
    let games = selfplay::run_self_play(&config);
    let elapsed = start.elapsed();

    if !config.quiet {
        eprintln!(
            "Completed {} games in {:.2}s",
            games.len(),
            elapsed.as_secs_f64()
        );
        selfplay::print_summary(&games);
    }

    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("creating {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            selfplay::write_jsonl(&games, &mut writer).context("writing games")?;
            if !config.quiet {
                eprintln!("Wrote {} games to {}", games.len(), path.display());
            }
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            selfplay::write_jsonl(&games, &mut writer).context("writing games")?;
        }
    }
    Ok(())
}
