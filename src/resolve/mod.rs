//! Move resolution.
//!
//! Applies a sow to the board (store skipping, wrap-around, extra turns and
//! captures) and scores finished games.

pub mod outcome;
pub mod sow;

pub use outcome::{GameResult, Outcome};
pub use sow::{Sow, SowKind};
