//! Pits: the seed-holding cells of the board.
//!
//! A pit is either a house (sown from and into) or a store (a player's
//! scoring bank). Both carry a plain seed count.

use std::fmt;

/// The two flavors of pit on a Kalah board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitKind {
    House,
    Store,
}

/// A single seed-count cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pit {
    seeds: u32,
    kind: PitKind,
}

impl Pit {
    /// Creates a house holding `seeds` seeds.
    pub const fn house(seeds: u32) -> Self {
        Pit {
            seeds,
            kind: PitKind::House,
        }
    }

    /// Creates an empty store.
    pub const fn store() -> Self {
        Pit {
            seeds: 0,
            kind: PitKind::Store,
        }
    }

    pub const fn kind(&self) -> PitKind {
        self.kind
    }

    pub const fn is_store(&self) -> bool {
        matches!(self.kind, PitKind::Store)
    }

    /// Returns the current seed count.
    #[inline]
    pub const fn seeds(&self) -> u32 {
        self.seeds
    }

    #[inline]
    pub fn add_seeds(&mut self, n: u32) {
        self.seeds += n;
    }

    #[inline]
    pub fn empty(&mut self) {
        self.seeds = 0;
    }

    /// Takes every seed out of the pit, returning how many there were.
    #[inline]
    pub fn capture(&mut self) -> u32 {
        std::mem::take(&mut self.seeds)
    }

    /// Overwrites the seed count. Only used when copying a position.
    #[inline]
    pub fn set_seeds(&mut self, n: u32) {
        self.seeds = n;
    }
}

/// Renders the count two characters wide, e.g. ` 4` or `12`.
impl fmt::Display for Pit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2}", self.seeds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reads_then_empties() {
        let mut pit = Pit::house(7);
        assert_eq!(pit.capture(), 7);
        assert_eq!(pit.seeds(), 0);
        assert_eq!(pit.capture(), 0);
    }

    #[test]
    fn add_and_empty() {
        let mut pit = Pit::store();
        pit.add_seeds(3);
        pit.add_seeds(0);
        assert_eq!(pit.seeds(), 3);
        pit.empty();
        assert_eq!(pit.seeds(), 0);
        assert!(pit.is_store());
    }

    #[test]
    fn set_seeds_overwrites() {
        let mut pit = Pit::house(4);
        pit.set_seeds(11);
        assert_eq!(pit.seeds(), 11);
        assert_eq!(pit.kind(), PitKind::House);
    }

    #[test]
    fn display_pads_single_digits() {
        assert_eq!(Pit::house(4).to_string(), " 4");
        assert_eq!(Pit::house(12).to_string(), "12");
        assert_eq!(Pit::store().to_string(), " 0");
    }
}
