//! Self-play game generation.
//!
//! Plays full games with the advisor on Side B against a configurable Side A
//! opponent, records every move, and checks seed conservation and store
//! monotonicity after each one. Games run in parallel on a rayon pool and
//! can be written out as JSONL.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, warn};

use crate::board::{House, Side, TOTAL_SEEDS};
use crate::engine::TurnEngine;
use crate::movegen::random_house;
use crate::protocol::kfen::encode_kfen;
use crate::resolve::{GameResult, Outcome, SowKind};
use crate::search::{advise, Reason};

/// Who plays Side A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Uniformly random legal houses.
    Random,
    /// The same three-tier advisor as Side B.
    Advisor,
}

/// Configuration for self-play game generation.
#[derive(Debug, Clone)]
pub struct SelfPlayConfig {
    /// Number of games to play.
    pub num_games: usize,
    /// Side A's policy.
    pub opponent: Opponent,
    /// Probability that an advisor-driven side plays a random legal house instead.
    pub epsilon: f64,
    /// Hard cap on turns per game.
    pub max_turns: usize,
    /// Number of parallel threads for concurrent games.
    pub threads: usize,
    /// Random seed (0 = use entropy).
    pub seed: u64,
    /// Suppress per-game progress output.
    pub quiet: bool,
}

impl Default for SelfPlayConfig {
    fn default() -> Self {
        SelfPlayConfig {
            num_games: 100,
            opponent: Opponent::Random,
            epsilon: 0.1,
            max_turns: 1000,
            threads: 4,
            seed: 0,
            quiet: false,
        }
    }
}

/// A single recorded move.
#[derive(Debug, Clone, Serialize)]
pub struct MoveRecord {
    /// Position before the move.
    pub kfen: String,
    pub side: Side,
    pub house: House,
    /// Advisor tier, when the advisor chose the house.
    pub reason: Option<Reason>,
    pub kind: &'static str,
}

/// Invariant checks for a completed game.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameQuality {
    /// Moves after which the board did not hold exactly 48 seeds.
    pub conservation_violations: usize,
    /// Moves after which a store held fewer seeds than before.
    pub store_decreases: usize,
    /// Whether the turn cap stopped the game.
    pub truncated: bool,
}

impl GameQuality {
    pub fn is_clean(&self) -> bool {
        self.conservation_violations == 0 && self.store_decreases == 0 && !self.truncated
    }
}

/// A complete self-play game record.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub game_id: usize,
    pub moves: Vec<MoveRecord>,
    /// Final scores, `None` if the game was truncated.
    pub result: Option<GameResult>,
    pub quality: GameQuality,
}

fn kind_name(kind: SowKind) -> &'static str {
    match kind {
        SowKind::Rejected => "rejected",
        SowKind::ExtraTurn => "extra_turn",
        SowKind::Capture { .. } => "capture",
        SowKind::Pass => "pass",
    }
}

/// Chooses a house for `side` according to the configured policies.
fn choose(
    engine: &TurnEngine,
    side: Side,
    config: &SelfPlayConfig,
    rng: &mut SmallRng,
) -> Option<(House, Option<Reason>)> {
    let board = engine.board();
    let advised = side == Side::B || config.opponent == Opponent::Advisor;
    if advised && rng.gen::<f64>() >= config.epsilon {
        advise(board, side).map(|a| (a.house, Some(a.reason)))
    } else {
        random_house(board, side, rng).map(|h| (h, None))
    }
}

/// Plays a single self-play game and returns the game record.
pub fn play_game(config: &SelfPlayConfig, game_id: usize, rng: &mut SmallRng) -> GameRecord {
    let mut engine = TurnEngine::new();
    let mut moves = Vec::new();
    let mut quality = GameQuality::default();

    while !engine.is_over() {
        if moves.len() >= config.max_turns {
            quality.truncated = true;
            break;
        }

        let side = engine.to_move();
        let Some((house, reason)) = choose(&engine, side, config, rng) else {
            // Only reachable if a position with an empty side to move was not finalized.
            warn!(game_id, ?side, "no legal move before game end");
            quality.truncated = true;
            break;
        };

        let kfen = encode_kfen(engine.board(), side);
        let stores_before = [engine.board().store(Side::A), engine.board().store(Side::B)];

        let report = match engine.play(house) {
            Ok(r) => r,
            Err(e) => {
                warn!(game_id, error = %e, "engine refused move");
                quality.truncated = true;
                break;
            }
        };

        let board = engine.board();
        if board.total_seeds() != TOTAL_SEEDS {
            quality.conservation_violations += 1;
        }
        if board.store(Side::A) < stores_before[0] || board.store(Side::B) < stores_before[1] {
            quality.store_decreases += 1;
        }

        moves.push(MoveRecord {
            kfen,
            side,
            house,
            reason,
            kind: kind_name(report.sow.kind),
        });
    }

    debug!(game_id, moves = moves.len(), result = ?engine.result(), "game finished");

    GameRecord {
        game_id,
        moves,
        result: engine.result(),
        quality,
    }
}

fn game_rng(config: &SelfPlayConfig, game_id: usize) -> SmallRng {
    if config.seed != 0 {
        SmallRng::seed_from_u64(config.seed.wrapping_add(game_id as u64))
    } else {
        SmallRng::from_entropy()
    }
}

fn outcome_label(game: &GameRecord) -> String {
    match game.result {
        Some(r) => format!("{} ({}-{})", r.outcome, r.score_a, r.score_b),
        None => "truncated".to_string(),
    }
}

/// Runs self-play generation, producing multiple game records ordered by id.
///
/// When `config.threads > 1`, games are played concurrently using rayon.
pub fn run_self_play(config: &SelfPlayConfig) -> Vec<GameRecord> {
    let mut games = if config.threads > 1 {
        run_self_play_parallel(config)
    } else {
        run_self_play_sequential(config)
    };
    games.sort_by_key(|g| g.game_id);
    games
}

/// Sequential self-play: plays games one at a time.
fn run_self_play_sequential(config: &SelfPlayConfig) -> Vec<GameRecord> {
    (0..config.num_games)
        .map(|i| {
            let mut rng = game_rng(config, i);
            let start = Instant::now();
            let game = play_game(config, i, &mut rng);
            if !config.quiet {
                eprintln!(
                    "Game {}/{}: {} in {} moves ({:.1}ms)",
                    i + 1,
                    config.num_games,
                    outcome_label(&game),
                    game.moves.len(),
                    start.elapsed().as_secs_f64() * 1000.0
                );
            }
            game
        })
        .collect()
}

/// Parallel self-play: plays games concurrently on a dedicated rayon pool.
fn run_self_play_parallel(config: &SelfPlayConfig) -> Vec<GameRecord> {
    use rayon::prelude::*;

    let completed = AtomicUsize::new(0);
    let play = || {
        (0..config.num_games)
            .into_par_iter()
            .map(|i| {
                let mut rng = game_rng(config, i);
                let game = play_game(config, i, &mut rng);
                if !config.quiet {
                    let n = completed.fetch_add(1, Ordering::Relaxed) + 1;
                    eprintln!(
                        "Game {}/{}: {} in {} moves",
                        n,
                        config.num_games,
                        outcome_label(&game),
                        game.moves.len()
                    );
                }
                game
            })
            .collect::<Vec<_>>()
    };

    match rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
    {
        Ok(pool) => pool.install(play),
        Err(e) => {
            warn!(error = %e, "failed to build thread pool, using the global pool");
            play()
        }
    }
}

/// Writes game records as JSONL (one JSON object per game, one per line).
pub fn write_jsonl<W: Write>(games: &[GameRecord], out: &mut W) -> std::io::Result<()> {
    for game in games {
        serde_json::to_writer(&mut *out, game)?;
        writeln!(out)?;
    }
    out.flush()
}

/// Aggregate statistics over a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub games: usize,
    pub wins_a: usize,
    pub wins_b: usize,
    pub ties: usize,
    pub truncated: usize,
    pub violations: usize,
    pub total_moves: usize,
}

/// Tallies outcomes and invariant violations.
pub fn summarize(games: &[GameRecord]) -> Summary {
    let mut s = Summary {
        games: games.len(),
        ..Summary::default()
    };
    for game in games {
        s.total_moves += game.moves.len();
        s.violations += game.quality.conservation_violations + game.quality.store_decreases;
        match game.result.map(|r| r.outcome) {
            Some(Outcome::Win) => s.wins_a += 1,
            Some(Outcome::Loss) => s.wins_b += 1,
            Some(Outcome::Tie) => s.ties += 1,
            None => s.truncated += 1,
        }
    }
    s
}

/// Prints a summary of self-play results to stderr.
pub fn print_summary(games: &[GameRecord]) {
    let s = summarize(games);
    eprintln!("=== Self-Play Summary ===");
    eprintln!("Games: {}", s.games);
    eprintln!(
        "Avg moves/game: {:.1}",
        s.total_moves as f64 / s.games.max(1) as f64
    );
    eprintln!("Player 1 wins: {}", s.wins_a);
    eprintln!("Player 2 (advisor) wins: {}", s.wins_b);
    eprintln!("Ties: {}", s.ties);
    eprintln!("Truncated: {}", s.truncated);
    eprintln!("Invariant violations: {}", s.violations);
}
