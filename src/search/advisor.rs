//! Rule-based move selection for the robot player.
//!
//! Houses are scanned in ascending order and the first match wins, tier by
//! tier:
//! 1. a house whose seeds reach exactly the mover's store (extra turn);
//! 2. a house whose sow, simulated on a throwaway copy of the board, ends in
//!    an empty own house facing a non-empty one (capture);
//! 3. the first non-empty house.

use std::fmt;

use serde::Serialize;
use tracing::{debug, instrument, trace};

use crate::board::{Board, House, Side};

/// Why the advisor picked a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    ExtraTurn,
    Capture,
    FirstLegal,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reason::ExtraTurn => "it leads to an extra move",
            Reason::Capture => "it leads to a capture",
            Reason::FirstLegal => "it is the first legal move",
        };
        f.write_str(s)
    }
}

/// A chosen house and the tier that justified it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Advice {
    pub house: House,
    pub reason: Reason,
}

/// Returns true if sowing `house` ends exactly in `side`'s store.
///
/// Pure arithmetic: seeds sown from the mover's own row reach the store
/// before any wrap or skip can happen.
pub fn ends_in_store(board: &Board, side: Side, house: House) -> bool {
    let index = house.index_for(side);
    board.seeds(index) as usize == side.store_index() - index
}

/// Returns true if sowing `house` would capture.
///
/// The sow runs on an independent copy of `board`; the live board is never
/// touched.
pub fn leads_to_capture(board: &Board, side: Side, house: House) -> bool {
    let start = house.index_for(side);
    if board.seeds(start) == 0 {
        return false;
    }

    let mut scratch = Board::new();
    scratch.copy_counts_from(board);
    let last = scratch.distribute(start, side);

    // Landing in the store (after a full lap) is not a capture.
    if !side.owns_house(last) || scratch.seeds(last) != 1 {
        return false;
    }
    let captures = Board::opposite(last).is_some_and(|o| scratch.seeds(o) > 0);
    trace!(house = house.number(), last, captures, "capture simulation");
    captures
}

/// Returns the first non-empty house of `side`.
pub fn first_legal(board: &Board, side: Side) -> Option<House> {
    House::ALL
        .into_iter()
        .find(|h| board.seeds(h.index_for(side)) != 0)
}

/// Picks a house for `side`, or `None` when every house is empty.
#[instrument(level = "debug", skip(board))]
pub fn advise(board: &Board, side: Side) -> Option<Advice> {
    let advice = if let Some(house) = House::ALL
        .into_iter()
        .find(|&h| ends_in_store(board, side, h))
    {
        Some(Advice {
            house,
            reason: Reason::ExtraTurn,
        })
    } else if let Some(house) = House::ALL
        .into_iter()
        .find(|&h| leads_to_capture(board, side, h))
    {
        Some(Advice {
            house,
            reason: Reason::Capture,
        })
    } else {
        first_legal(board, side).map(|house| Advice {
            house,
            reason: Reason::FirstLegal,
        })
    };
    debug!(?advice, "advisor decision");
    advice
}
