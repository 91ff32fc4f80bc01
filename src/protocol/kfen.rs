//! KFEN (Kalah FEN) encoding and decoding.
//!
//! A compact single-line notation for a position and the side to move.
//!
//! Format: `<to_move>/<a1,..,a6>/<store_a>/<b1,..,b6>/<store_b>`
//!
//! The starting position is `a/4,4,4,4,4,4/0/4,4,4,4,4,4/0`. Houses are
//! listed in house-number order for each side.

use crate::board::{Board, Side, HOUSES_PER_SIDE, PIT_COUNT, TOTAL_SEEDS};

/// Position notation for the standard opening.
pub const INITIAL_KFEN: &str = "a/4,4,4,4,4,4/0/4,4,4,4,4,4/0";

/// Errors that can occur during KFEN parsing.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KfenError {
    #[error("expected 5 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("invalid side to move: '{0}'")]
    InvalidSide(String),

    #[error("expected 6 house counts, got {0}")]
    WrongHouseCount(usize),

    #[error("invalid seed count: '{0}'")]
    InvalidCount(String),

    #[error("position holds {0} seeds, expected 48")]
    WrongTotal(u64),
}

fn parse_count(s: &str) -> Result<u32, KfenError> {
    s.trim()
        .parse()
        .map_err(|_| KfenError::InvalidCount(s.to_string()))
}

fn parse_houses(s: &str) -> Result<[u32; HOUSES_PER_SIDE], KfenError> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != HOUSES_PER_SIDE {
        return Err(KfenError::WrongHouseCount(parts.len()));
    }
    let mut out = [0; HOUSES_PER_SIDE];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = parse_count(part)?;
    }
    Ok(out)
}

/// Parses a KFEN string into a board and the side to move.
///
/// The counts must add up to the 48 seeds of a real game.
pub fn parse_kfen(kfen: &str) -> Result<(Board, Side), KfenError> {
    let sections: Vec<&str> = kfen.trim().split('/').collect();
    if sections.len() != 5 {
        return Err(KfenError::WrongSectionCount(sections.len()));
    }

    let mut chars = sections[0].chars();
    let to_move = match (chars.next(), chars.next()) {
        (Some(c), None) => Side::from_kfen_char(c.to_ascii_lowercase()),
        _ => None,
    }
    .ok_or_else(|| KfenError::InvalidSide(sections[0].to_string()))?;

    let houses_a = parse_houses(sections[1])?;
    let store_a = parse_count(sections[2])?;
    let houses_b = parse_houses(sections[3])?;
    let store_b = parse_count(sections[4])?;

    let mut counts = [0; PIT_COUNT];
    counts[..HOUSES_PER_SIDE].copy_from_slice(&houses_a);
    counts[Side::A.store_index()] = store_a;
    counts[Side::B.house_indices()].copy_from_slice(&houses_b);
    counts[Side::B.store_index()] = store_b;

    // Summed as u64 so that no 14 u32 counts can overflow.
    let total: u64 = counts.iter().map(|&c| u64::from(c)).sum();
    if total != u64::from(TOTAL_SEEDS) {
        return Err(KfenError::WrongTotal(total));
    }

    Ok((Board::from_counts(counts), to_move))
}

/// Encodes a board and side to move as KFEN.
pub fn encode_kfen(board: &Board, to_move: Side) -> String {
    let join = |side: Side| {
        board
            .house_counts(side)
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    format!(
        "{}/{}/{}/{}/{}",
        to_move.kfen_char(),
        join(Side::A),
        board.store(Side::A),
        join(Side::B),
        board.store(Side::B)
    )
}
