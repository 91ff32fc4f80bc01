//! Sides and house selections.
//!
//! Each side owns six consecutive houses followed by its store. Side A
//! moves first and occupies indices 0..=6; Side B occupies 7..=13.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Number of houses on each side.
pub const HOUSES_PER_SIDE: usize = 6;
/// Total number of pits on the board (houses plus both stores).
pub const PIT_COUNT: usize = HOUSES_PER_SIDE * 2 + 2;
/// Seeds placed in each house at the start of a game.
pub const INITIAL_SEEDS: u32 = 4;
/// Total seeds on the board for the whole game.
pub const TOTAL_SEEDS: u32 = INITIAL_SEEDS * HOUSES_PER_SIDE as u32 * 2;

/// Board index of Side A's store.
pub const STORE_A: usize = HOUSES_PER_SIDE;
/// Board index of Side B's store.
pub const STORE_B: usize = PIT_COUNT - 1;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub const fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Board index of this side's store.
    pub const fn store_index(self) -> usize {
        match self {
            Side::A => STORE_A,
            Side::B => STORE_B,
        }
    }

    /// Board indices of this side's six houses.
    pub const fn house_indices(self) -> Range<usize> {
        match self {
            Side::A => 0..STORE_A,
            Side::B => STORE_A + 1..STORE_B,
        }
    }

    /// Board indices of all seven of this side's pits.
    pub const fn pit_indices(self) -> Range<usize> {
        match self {
            Side::A => 0..STORE_A + 1,
            Side::B => STORE_A + 1..PIT_COUNT,
        }
    }

    /// Returns true if `index` is one of this side's houses.
    pub fn owns_house(self, index: usize) -> bool {
        self.house_indices().contains(&index)
    }

    /// Player number shown to humans: 1 for A, 2 for B.
    pub const fn player_number(self) -> u8 {
        match self {
            Side::A => 1,
            Side::B => 2,
        }
    }

    /// Single-character KFEN abbreviation.
    pub const fn kfen_char(self) -> char {
        match self {
            Side::A => 'a',
            Side::B => 'b',
        }
    }

    pub fn from_kfen_char(c: char) -> Option<Side> {
        match c {
            'a' => Some(Side::A),
            'b' => Some(Side::B),
            _ => None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.player_number())
    }
}

/// A house selection, numbered 1..=6 relative to the mover's own row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct House(u8);

impl House {
    /// All six houses in ascending order.
    pub const ALL: [House; HOUSES_PER_SIDE] =
        [House(1), House(2), House(3), House(4), House(5), House(6)];

    /// Returns `None` unless `n` is in 1..=6.
    pub const fn new(n: u8) -> Option<House> {
        if n >= 1 && n as usize <= HOUSES_PER_SIDE {
            Some(House(n))
        } else {
            None
        }
    }

    pub const fn number(self) -> u8 {
        self.0
    }

    /// Absolute board index of this house for the given side.
    pub const fn index_for(self, side: Side) -> usize {
        match side {
            Side::A => self.0 as usize - 1,
            Side::B => self.0 as usize + HOUSES_PER_SIDE,
        }
    }
}

impl TryFrom<u8> for House {
    type Error = String;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        House::new(n).ok_or_else(|| format!("house {} is outside 1..=6", n))
    }
}

impl From<House> for u8 {
    fn from(h: House) -> u8 {
        h.0
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
