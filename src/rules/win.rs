//! Win detection for four-in-a-row.

use crate::board::{Board, COLS, Cell, Color, ROWS};
use tracing::instrument;

/// Checks whether `color` has four contiguous pieces anywhere on the board.
///
/// Scans every starting cell in all four line directions (horizontal,
/// vertical, and both diagonals) and short-circuits on the first run found.
#[instrument(skip(board))]
pub fn check_win(board: &Board, color: Color) -> bool {
    let piece = Cell::Occupied(color);
    let run = |row: usize, col: usize, dr: isize, dc: isize| -> bool {
        (0..4).all(|step| {
            let r = row as isize + dr * step;
            let c = col as isize + dc * step;
            board.get(r as usize, c as usize) == Some(piece)
        })
    };

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            if run(row, col, 0, 1) {
                return true;
            }
        }
    }

    // Vertical
    for row in 0..ROWS - 3 {
        for col in 0..COLS {
            if run(row, col, 1, 0) {
                return true;
            }
        }
    }

    // Diagonal rising left-to-right
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            if run(row, col, 1, 1) {
                return true;
            }
        }
    }

    // Diagonal falling left-to-right
    for row in 3..ROWS {
        for col in 0..COLS - 3 {
            if run(row, col, -1, 1) {
                return true;
            }
        }
    }

    false
}
