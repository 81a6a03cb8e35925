//! Win and tie detection over a board.

mod tie;
mod win;

pub use tie::check_tie;
pub use win::check_win;

#[cfg(test)]
pub(crate) mod testutil {
    use crate::board::{Board, COLS, Cell, Color, ROWS};

    /// Fills the board with a drawn pattern: no four-in-a-row in any
    /// direction. Rows alternate `RYRYRYRY` / `YRYRYRYR` in pairs of two.
    pub(crate) fn fill_drawn_board(board: &mut Board) {
        for row in 0..ROWS {
            for col in 0..COLS {
                let flip = (row % 4) / 2 == 1;
                let color = if (col % 2 == 0) != flip {
                    Color::Red
                } else {
                    Color::Yellow
                };
                board.set(row, col, Cell::Occupied(color));
            }
        }
    }
}
