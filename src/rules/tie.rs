//! Tie detection for four-in-a-row.

use crate::board::{Board, COLS, Cell, ROWS};
use tracing::instrument;

/// Checks whether the board has no empty cell left.
///
/// A tie is only meaningful when the same move did not also win; callers
/// check for a win first.
#[instrument(skip(board))]
pub fn check_tie(board: &Board) -> bool {
    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) == Some(Cell::Empty) {
                return false;
            }
        }
    }
    true
}
