//! Board representation.
//!
//! Contains the pit cells, the two sides and house numbering, and the
//! 14-pit circular board itself.

pub mod pit;
pub mod side;
pub mod state;

pub use pit::{Pit, PitKind};
pub use side::{
    House, Side, HOUSES_PER_SIDE, INITIAL_SEEDS, PIT_COUNT, STORE_A, STORE_B, TOTAL_SEEDS,
};
pub use state::Board;
