//! Kalah -- play the 6-house mancala game at the console.
//!
//! Reads house selections from stdin and writes the board to stdout. Player 2
//! is played by the robot advisor unless `--two-player` is given. Diagnostics
//! go to stderr and are controlled with `RUST_LOG`.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kalah::config::GameConfig;
use kalah::engine::TurnEngine;
use kalah::protocol::display::Layout;
use kalah::session::{Session, SessionEnd};

/// Play Kalah against the robot or another human.
#[derive(Parser, Debug)]
#[command(name = "kalah", version, about)]
struct Cli {
    /// JSON configuration file; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Draw the board vertically.
    #[arg(long)]
    vertical: bool,

    /// Two human players; disables the robot.
    #[arg(long)]
    two_player: bool,

    /// Start from a KFEN position instead of the opening.
    #[arg(long)]
    position: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    if cli.vertical {
        config.layout = Layout::Vertical;
    }
    if cli.two_player {
        config.robot = false;
    }
    if cli.position.is_some() {
        config.position = cli.position;
    }

    let engine = match &config.position {
        Some(kfen) => TurnEngine::from_kfen(kfen).context("invalid --position")?,
        None => TurnEngine::new(),
    };
    info!(?config, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(engine, &config, stdin.lock(), BufWriter::new(stdout.lock()));
    match session.run()? {
        SessionEnd::Finished(result) => info!(?result, "game finished"),
        SessionEnd::Quit => info!("game abandoned"),
    }
    Ok(())
}
