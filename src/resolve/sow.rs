//! Sowing and capture.
//!
//! A move empties one of the mover's houses and drops its seeds one at a time
//! into the following pits, wrapping past index 13 back to index 0 and
//! skipping the opponent's store. Where the last seed lands decides whether
//! the mover goes again, captures, or hands over the turn.

use tracing::{debug, instrument, trace};

use crate::board::{Board, House, Side, PIT_COUNT};

/// What a single sow did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SowKind {
    /// The selected house was empty; nothing moved.
    Rejected,
    /// The last seed landed in the mover's own store.
    ExtraTurn,
    /// The last seed landed in an empty own house facing a non-empty one.
    Capture { seeds: u32 },
    /// Any other landing.
    Pass,
}

/// Result of [`Board::sow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sow {
    /// Side due to move next.
    pub next: Side,
    pub kind: SowKind,
    /// Index that received the last seed, or the start index when nothing was sown.
    pub last: usize,
}

/// Index that follows `index` when `mover` is sowing.
#[inline]
pub(crate) fn next_index(index: usize, mover: Side) -> usize {
    let mut next = (index + 1) % PIT_COUNT;
    if next == mover.opponent().store_index() {
        next = (next + 1) % PIT_COUNT;
    }
    next
}

impl Board {
    /// Empties the pit at `start` and drops its seeds into the following pits
    /// on behalf of `mover`. Returns the index that received the last seed,
    /// or `start` if the pit held nothing.
    ///
    /// No capture or turn logic is applied here.
    pub fn distribute(&mut self, start: usize, mover: Side) -> usize {
        let seeds = self.seeds(start);
        self.pit_mut(start).empty();
        let mut index = start;
        for _ in 0..seeds {
            index = next_index(index, mover);
            self.pit_mut(index).add_seeds(1);
        }
        index
    }

    /// Plays `house` for `mover` and returns the side due to move next.
    ///
    /// An empty house is rejected without touching the board unless
    /// `end_phase` is set, in which case the (empty) sow is carried out.
    #[instrument(level = "debug", skip(self), fields(house = house.number()))]
    pub fn sow(&mut self, mover: Side, end_phase: bool, house: House) -> Sow {
        let start = house.index_for(mover);
        if self.seeds(start) == 0 && !end_phase {
            debug!(start, "house is empty, move rejected");
            return Sow {
                next: mover,
                kind: SowKind::Rejected,
                last: start,
            };
        }

        let last = self.distribute(start, mover);
        trace!(last, counts = ?self.counts(), "seeds distributed");

        if last == mover.store_index() {
            debug!(last, "extra turn");
            return Sow {
                next: mover,
                kind: SowKind::ExtraTurn,
                last,
            };
        }

        if mover.owns_house(last) && self.seeds(last) == 1 {
            if let Some(opposite) = Board::opposite(last) {
                if self.seeds(opposite) != 0 {
                    let landed = self.pit_mut(last).capture();
                    let taken = self.pit_mut(opposite).capture();
                    let seeds = landed + taken;
                    self.pit_mut(mover.store_index()).add_seeds(seeds);
                    debug!(last, opposite, seeds, "capture");
                    return Sow {
                        next: mover.opponent(),
                        kind: SowKind::Capture { seeds },
                        last,
                    };
                }
            }
        }

        Sow {
            next: mover.opponent(),
            kind: SowKind::Pass,
            last,
        }
    }
}
