//! Final scoring.

use std::fmt;

use serde::Serialize;

use crate::board::{Board, Side};

/// Result of the game from Side A's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    /// The winning side, `None` on a tie.
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::Win => Some(Side::A),
            Outcome::Loss => Some(Side::B),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "Player {} wins!", side.player_number()),
            None => write!(f, "A tie!"),
        }
    }
}

/// Final scores and outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub score_a: u32,
    pub score_b: u32,
    pub outcome: Outcome,
}

impl GameResult {
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score_a,
            Side::B => self.score_b,
        }
    }
}

impl Board {
    /// Scores both sides. Seeds still in houses count for the side that owns them.
    pub fn finalize(&self) -> GameResult {
        let score_a = self.score(Side::A);
        let score_b = self.score(Side::B);
        let outcome = match score_a.cmp(&score_b) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        };
        GameResult {
            score_a,
            score_b,
            outcome,
        }
    }
}
