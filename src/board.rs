//! Core domain types for the four-in-a-row board.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Number of rows on the board.
pub const ROWS: usize = 8;

/// Number of columns on the board.
pub const COLS: usize = 8;

/// Piece color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Red pieces (letter `R`).
    Red,
    /// Yellow pieces (letter `Y`).
    Yellow,
}

impl Color {
    /// Returns the opposing color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// Returns the protocol letter for this color.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Yellow => 'Y',
        }
    }

    /// Parses a protocol letter (`R` or `Y`, case-sensitive).
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'R' => Some(Color::Red),
            'Y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a piece.
    Occupied(Color),
}

impl Cell {
    /// Returns the render character: `0` for empty, the color letter otherwise.
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '0',
            Cell::Occupied(color) => color.letter(),
        }
    }
}

/// A column address, `A` through `H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Column {
    /// Column A (leftmost).
    A,
    /// Column B.
    B,
    /// Column C.
    C,
    /// Column D.
    D,
    /// Column E.
    E,
    /// Column F.
    F,
    /// Column G.
    G,
    /// Column H (rightmost).
    H,
}

impl Column {
    /// All columns in address order.
    pub const ALL: [Column; COLS] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
    ];

    /// Returns the zero-based column index (`A` = 0, `H` = 7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the column letter.
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Parses a column letter (`A`-`H`, case-sensitive).
    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'A'..='H' => Some(Self::ALL[(c as u8 - b'A') as usize]),
            _ => None,
        }
    }
}

/// 8x8 four-in-a-row board.
///
/// Rows are indexed 0 (bottom) to 7 (top); row 0 is the row a piece lands
/// in when its column is empty. Occupied cells in a column always form a
/// contiguous run from row 0 upward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Clears every cell back to empty.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; COLS]; ROWS];
    }

    /// Gets the cell at the given row (0 = bottom) and column index.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Sets a cell directly, bypassing gravity. Test scaffolding only.
    #[cfg(test)]
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Drops a piece into the lowest empty cell of `column`.
    ///
    /// Returns `false` without mutating the board when the column is full.
    #[instrument(skip(self))]
    pub fn drop_piece(&mut self, column: Column, color: Color) -> bool {
        let col = column.index();
        for row in 0..ROWS {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::Occupied(color);
                return true;
            }
        }
        false
    }

    /// Formats the board as the fixed protocol snapshot.
    ///
    /// A column-letter header, then rows 8 down to 1, each prefixed by its
    /// row number. Empty cells print as `0`, pieces as their color letter.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((COLS + 3) * (ROWS + 1));
        out.push_str("  ABCDEFGH\n");
        for row in (0..ROWS).rev() {
            out.push_str(&(row + 1).to_string());
            out.push(' ');
            for col in 0..COLS {
                out.push(self.cells[row][col].to_char());
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_board_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_drop_lands_on_bottom() {
        let mut board = Board::new();
        assert!(board.drop_piece(Column::C, Color::Red));
        assert_eq!(board.get(0, 2), Some(Cell::Occupied(Color::Red)));
        assert_eq!(board.get(1, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_drop_stacks_upward() {
        let mut board = Board::new();
        board.drop_piece(Column::A, Color::Red);
        board.drop_piece(Column::A, Color::Yellow);
        assert_eq!(board.get(0, 0), Some(Cell::Occupied(Color::Red)));
        assert_eq!(board.get(1, 0), Some(Cell::Occupied(Color::Yellow)));
    }

    #[test]
    fn test_column_full_after_eight_drops() {
        for column in Column::iter() {
            let mut board = Board::new();
            for _ in 0..ROWS {
                assert!(board.drop_piece(column, Color::Red));
            }
            let before = board.clone();
            assert!(!board.drop_piece(column, Color::Yellow));
            assert_eq!(board, before, "failed drop must not mutate");
        }
    }

    #[test]
    fn test_reset_clears_board() {
        let mut board = Board::new();
        board.drop_piece(Column::H, Color::Yellow);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_render_empty_board() {
        let board = Board::new();
        let text = board.render();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("  ABCDEFGH"));
        assert_eq!(lines.next(), Some("8 00000000"));
        assert_eq!(text.lines().count(), ROWS + 1);
        assert_eq!(text.lines().last(), Some("1 00000000"));
    }

    #[test]
    fn test_render_shows_pieces_bottom_up() {
        let mut board = Board::new();
        board.drop_piece(Column::A, Color::Red);
        board.drop_piece(Column::A, Color::Yellow);
        let text = board.render();
        assert_eq!(text.lines().last(), Some("1 R0000000"));
        assert_eq!(text.lines().nth(ROWS - 1), Some("2 Y0000000"));
    }

    #[test]
    fn test_column_letter_round_trip() {
        for column in Column::iter() {
            assert_eq!(Column::from_letter(column.letter()), Some(column));
        }
        assert_eq!(Column::from_letter('I'), None);
        assert_eq!(Column::from_letter('a'), None);
    }

    #[test]
    fn test_color_letters() {
        assert_eq!(Color::from_letter('R'), Some(Color::Red));
        assert_eq!(Color::from_letter('Y'), Some(Color::Yellow));
        assert_eq!(Color::from_letter('r'), None);
        assert_eq!(Color::Red.opponent(), Color::Yellow);
        assert_eq!(Color::Yellow.opponent(), Color::Red);
    }
}
