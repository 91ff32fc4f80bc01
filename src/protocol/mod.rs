//! Text protocols.
//!
//! KFEN position notation, the console command parser, and the board
//! renderer used by the console front end.

pub mod display;
pub mod kfen;
pub mod parser;

pub use display::{render_board, Layout};
pub use kfen::{encode_kfen, parse_kfen, KfenError, INITIAL_KFEN};
pub use parser::{parse_command, Command, InputError};
