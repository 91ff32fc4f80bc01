//! Board rendering for the console.
//!
//! Two layouts are supported. Horizontal puts Player 2's houses along the top
//! (house 6 leftmost) with Player 1's store at the top right, and Player 1's
//! houses along the bottom with Player 2's store at the bottom left. Vertical
//! lists Player 1's houses down the left column and Player 2's down the right.
//! Every count is printed two characters wide.

use std::io::{self, Write};

use serde::Deserialize;

use crate::board::{Board, House, Side};

/// Board orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Horizontal,
    Vertical,
}

const H_BORDER: &str = "+----+-------+-------+-------+-------+-------+-------+----+";
const H_DIVIDER: &str = "|    |-------+-------+-------+-------+-------+-------|    |";
const V_BORDER: &str = "+---------------+";
const V_DIVIDER: &str = "+-------+-------+";

/// Renders `board` in the given layout.
pub fn render_board<W: Write>(board: &Board, layout: Layout, out: &mut W) -> io::Result<()> {
    match layout {
        Layout::Horizontal => render_horizontal(board, out),
        Layout::Vertical => render_vertical(board, out),
    }
}

fn render_horizontal<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", H_BORDER)?;
    write!(out, "| P2 |")?;
    for house in House::ALL.iter().rev() {
        write!(out, " {}[{}] |", house, board.pit(house.index_for(Side::B)))?;
    }
    writeln!(out, " {} |", board.pit(Side::A.store_index()))?;
    writeln!(out, "{}", H_DIVIDER)?;
    write!(out, "| {} |", board.pit(Side::B.store_index()))?;
    for house in House::ALL {
        write!(out, " {}[{}] |", house, board.pit(house.index_for(Side::A)))?;
    }
    writeln!(out, " P1 |")?;
    writeln!(out, "{}", H_BORDER)
}

fn render_vertical<W: Write>(board: &Board, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", V_BORDER)?;
    writeln!(out, "|       | P2 {} |", board.pit(Side::B.store_index()))?;
    writeln!(out, "{}", V_DIVIDER)?;
    for (left, right) in House::ALL.iter().zip(House::ALL.iter().rev()) {
        writeln!(
            out,
            "| {}[{}] | {}[{}] |",
            left,
            board.pit(left.index_for(Side::A)),
            right,
            board.pit(right.index_for(Side::B))
        )?;
    }
    writeln!(out, "{}", V_DIVIDER)?;
    writeln!(out, "| P1 {} |       |", board.pit(Side::A.store_index()))?;
    writeln!(out, "{}", V_BORDER)
}
