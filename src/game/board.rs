use std::fmt;

use log::trace;

use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of connected pieces needed to win
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A line direction through a cell, scanned both ways when checking for a win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right (\)
    DiagonalDown,
    /// Bottom-left to top-right (/)
    DiagonalUp,
}

impl Axis {
    /// Axes in the order they are checked
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// The two opposite (row, col) unit steps along this axis
    pub fn steps(self) -> [(isize, isize); 2] {
        match self {
            Axis::Horizontal => [(0, 1), (0, -1)],
            Axis::Vertical => [(1, 0), (-1, 0)],
            Axis::DiagonalDown => [(1, 1), (-1, -1)],
            Axis::DiagonalUp => [(1, -1), (-1, 1)],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
            Axis::DiagonalDown => "diagonal \\",
            Axis::DiagonalUp => "diagonal /",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Lowest empty row in a column, if any
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }

        let row = self
            .landing_row(col)
            .ok_or(MoveError::ColumnFull { column: col })?;
        self.cells[row][col] = cell;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// First axis (in `Axis::ALL` order) through (row, col) holding a run of
    /// at least `WIN_LENGTH` pieces of that cell's colour.
    pub fn winning_axis(&self, row: usize, col: usize) -> Option<Axis> {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return None;
        }

        Axis::ALL
            .into_iter()
            .find(|&axis| self.run_length(row, col, axis, cell) >= WIN_LENGTH)
    }

    /// Length of the run through (row, col) along an axis, counting the piece itself
    fn run_length(&self, row: usize, col: usize, axis: Axis, cell: Cell) -> usize {
        let count = 1 + axis
            .steps()
            .iter()
            .map(|&(dr, dc)| self.count_direction(row, col, dr, dc, cell))
            .sum::<usize>();
        trace!("{} run through ({row}, {col}) is {count}", axis.name());
        count
    }

    /// Matching cells walking outward from (row, col), excluding the start
    fn count_direction(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while Self::in_bounds(r, c) && self.cells[r as usize][c as usize] == cell {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    fn in_bounds(r: isize, c: isize) -> bool {
        r >= 0 && r < ROWS as isize && c >= 0 && c < COLS as isize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                })
                .collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_landing_row() {
        let mut board = Board::new();
        assert_eq!(board.landing_row(0), Some(5));
        board.drop_piece(0, Cell::Red).unwrap();
        assert_eq!(board.landing_row(0), Some(4));
        assert_eq!(board.landing_row(COLS), None);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        // Fill column 0
        for _ in 0..ROWS {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), None);
        assert_eq!(
            board.drop_piece(0, Cell::Yellow),
            Err(MoveError::ColumnFull { column: 0 })
        );
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Cell::Red),
            Err(MoveError::InvalidColumn { column: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        // Create horizontal line at bottom row
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(board.winning_axis(5, 2), Some(Axis::Horizontal)); // Middle of the line
        assert_eq!(board.winning_axis(5, 0), Some(Axis::Horizontal));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        // Create vertical line in column 3
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert_eq!(board.winning_axis(2, 3), Some(Axis::Vertical)); // The 4th piece
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Cell::Red).unwrap();

        board.drop_piece(1, Cell::Yellow).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();

        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert_eq!(board.winning_axis(row, 3), Some(Axis::DiagonalUp));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Cell::Red).unwrap();

        board.drop_piece(5, Cell::Yellow).unwrap();
        board.drop_piece(5, Cell::Red).unwrap();

        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Yellow).unwrap();
        board.drop_piece(4, Cell::Red).unwrap();

        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        let row = board.drop_piece(3, Cell::Red).unwrap();

        assert_eq!(board.winning_axis(row, 3), Some(Axis::DiagonalDown));
    }

    #[test]
    fn test_win_found_from_middle_of_line() {
        let mut board = Board::new();
        for col in [0, 1, 3] {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert_eq!(board.winning_axis(5, 3), None);
        // Filling the gap joins both halves
        board.drop_piece(2, Cell::Yellow).unwrap();
        assert_eq!(board.winning_axis(5, 2), Some(Axis::Horizontal));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert_eq!(board.winning_axis(5, 1), None); // Only 3 in a row
    }

    #[test]
    fn test_no_win_when_blocked_by_opponent() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        board.drop_piece(3, Cell::Yellow).unwrap();
        assert_eq!(board.winning_axis(5, 2), None);
        assert_eq!(board.winning_axis(5, 3), None);
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert_eq!(board.winning_axis(5, 0), None);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(6, Cell::Yellow).unwrap();
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], ".......");
        assert_eq!(lines[5], "R.....Y");
    }
}
