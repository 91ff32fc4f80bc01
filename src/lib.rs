//! Kalah engine library.
//!
//! Exposes the board representation, sowing and scoring rules, the robot
//! advisor, the turn engine, and the console protocol for use by the
//! binaries, integration tests, and benches.

pub mod board;
pub mod config;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod resolve;
pub mod search;
pub mod selfplay;
pub mod session;
