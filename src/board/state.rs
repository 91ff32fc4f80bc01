//! Board state.
//!
//! The board is a single circular sequence of 14 pits: Side A's six houses,
//! Side A's store, Side B's six houses, Side B's store. Seeds move between
//! pits but never leave the board.

use super::pit::Pit;
use super::side::{Side, HOUSES_PER_SIDE, INITIAL_SEEDS, PIT_COUNT, STORE_A, STORE_B};

/// Complete board position.
///
/// Stored as a fixed array so that a copy for what-if simulation is a plain
/// value clone with no shared state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    pits: [Pit; PIT_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl Board {
    /// Creates the starting position: four seeds in every house, empty stores.
    pub fn new() -> Self {
        let mut pits = [Pit::house(INITIAL_SEEDS); PIT_COUNT];
        pits[STORE_A] = Pit::store();
        pits[STORE_B] = Pit::store();
        Board { pits }
    }

    /// Builds a board from raw counts in board order (index 6 and 13 are stores).
    ///
    /// Counts are taken as given; positions from outside the crate go through
    /// [`crate::protocol::kfen::parse_kfen`], which checks the seed total.
    pub fn from_counts(counts: [u32; PIT_COUNT]) -> Self {
        let mut board = Board::new();
        for (pit, &n) in board.pits.iter_mut().zip(counts.iter()) {
            pit.set_seeds(n);
        }
        board
    }

    /// Copies every seed count from `other` into this board.
    pub fn copy_counts_from(&mut self, other: &Board) {
        for (pit, src) in self.pits.iter_mut().zip(other.pits.iter()) {
            pit.set_seeds(src.seeds());
        }
    }

    #[inline]
    pub fn pit(&self, index: usize) -> &Pit {
        &self.pits[index]
    }

    #[inline]
    pub(crate) fn pit_mut(&mut self, index: usize) -> &mut Pit {
        &mut self.pits[index]
    }

    /// Seed count at `index`.
    #[inline]
    pub fn seeds(&self, index: usize) -> u32 {
        self.pits[index].seeds()
    }

    /// Read-only snapshot of all 14 counts.
    pub fn counts(&self) -> [u32; PIT_COUNT] {
        let mut out = [0; PIT_COUNT];
        for (c, pit) in out.iter_mut().zip(self.pits.iter()) {
            *c = pit.seeds();
        }
        out
    }

    /// The seven pits belonging to `side`, houses first.
    pub fn side_pits(&self, side: Side) -> &[Pit] {
        &self.pits[side.pit_indices()]
    }

    /// Seed counts of the side's six houses, house 1 first.
    pub fn house_counts(&self, side: Side) -> [u32; HOUSES_PER_SIDE] {
        let mut out = [0; HOUSES_PER_SIDE];
        for (c, i) in out.iter_mut().zip(side.house_indices()) {
            *c = self.pits[i].seeds();
        }
        out
    }

    pub fn store(&self, side: Side) -> u32 {
        self.pits[side.store_index()].seeds()
    }

    /// Seeds left in the side's houses, stores excluded.
    pub fn house_seeds(&self, side: Side) -> u32 {
        side.house_indices().map(|i| self.pits[i].seeds()).sum()
    }

    /// Sum of all seven of the side's pits.
    pub fn score(&self, side: Side) -> u32 {
        self.side_pits(side).iter().map(Pit::seeds).sum()
    }

    /// Total seeds on the board.
    pub fn total_seeds(&self) -> u32 {
        self.pits.iter().map(Pit::seeds).sum()
    }

    /// Returns true iff every house of `side` is empty.
    ///
    /// The game ends when the side about to move has nothing to sow.
    pub fn is_side_empty(&self, side: Side) -> bool {
        self.house_seeds(side) == 0
    }

    /// Index of the house directly across the board, `None` for stores.
    pub fn opposite(index: usize) -> Option<usize> {
        if index == STORE_A || index >= STORE_B {
            None
        } else {
            Some(HOUSES_PER_SIDE * 2 - index)
        }
    }
}
