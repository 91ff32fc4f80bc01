//! Move selection.
//!
//! The robot player's three-tier heuristic: extra turn, then capture, then
//! the first legal house.

pub mod advisor;

pub use advisor::{advise, Advice, Reason};
