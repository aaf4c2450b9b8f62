use crate::error::GameError;

/// Smallest row or column count a board may have.
pub const MIN_DIMENSION: usize = 4;

/// Largest row or column count a board may have.
pub const MAX_DIMENSION: usize = 64;

/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// The four lines a winning run can lie on, as (row, column) steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Vertical,
    Horizontal,
    /// Bottom-left to top-right (/)
    RisingDiagonal,
    /// Top-left to bottom-right (\)
    FallingDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Vertical,
        Direction::Horizontal,
        Direction::RisingDiagonal,
        Direction::FallingDiagonal,
    ];

    fn step(self) -> (isize, isize) {
        match self {
            Direction::Vertical => (1, 0),
            Direction::Horizontal => (0, 1),
            Direction::RisingDiagonal => (-1, 1),
            Direction::FallingDiagonal => (1, 1),
        }
    }
}

/// A rows x columns grid. Row 0 is the top, the last row is the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Both dimensions must lie in
    /// [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        let valid = MIN_DIMENSION..=MAX_DIMENSION;
        if !valid.contains(&rows) || !valid.contains(&cols) {
            return Err(GameError::InvalidDimension {
                rows,
                columns: cols,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a 0-based position, `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.get(0, col).is_none_or(|cell| cell != Cell::Empty)
    }

    /// Row where a piece dropped into `col` would land.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.cols + col] == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed.
    /// `None` if the column is full or off the board; the board is untouched.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Option<usize> {
        let row = self.landing_row(col)?;
        self.cells[row * self.cols + col] = cell;
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check whether the piece at (row, col) is part of four in a row.
    ///
    /// Only windows of [`CONNECT`] cells that contain the anchor are
    /// inspected, so the cost is bounded regardless of board size.
    pub fn connects_four(&self, row: usize, col: usize) -> bool {
        match self.get(row, col) {
            Some(Cell::Empty) | None => false,
            Some(cell) => Direction::ALL
                .iter()
                .any(|&dir| self.run_through(row, col, dir, cell)),
        }
    }

    /// Test the windows along `dir` whose offsets run from -3..=0 to 0..=3.
    fn run_through(&self, row: usize, col: usize, dir: Direction, cell: Cell) -> bool {
        let (dr, dc) = dir.step();
        let span = CONNECT as isize;
        (1 - span..=0).any(|start| {
            (start..start + span).all(|offset| {
                let r = row.checked_add_signed(dr * offset);
                let c = col.checked_add_signed(dc * offset);
                match (r, c) {
                    (Some(r), Some(c)) => self.get(r, c) == Some(cell),
                    _ => false,
                }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Board {
        Board::new(6, 7).unwrap()
    }

    /// Fill `col` bottom-up with `cells`.
    fn stack(board: &mut Board, col: usize, cells: &[Cell]) {
        for &cell in cells {
            board.drop_piece(col, cell).unwrap();
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = standard();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_rejects_small_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(GameError::InvalidDimension { rows: 3, columns: 7 })
        );
        assert_eq!(
            Board::new(6, 3),
            Err(GameError::InvalidDimension { rows: 6, columns: 3 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let rows = usize::MAX / 2;
        assert_eq!(
            Board::new(rows, 4),
            Err(GameError::InvalidDimension { rows, columns: 4 })
        );
        assert_eq!(
            Board::new(6, MAX_DIMENSION + 1),
            Err(GameError::InvalidDimension {
                rows: 6,
                columns: MAX_DIMENSION + 1
            })
        );
        assert!(Board::new(MAX_DIMENSION, MAX_DIMENSION).is_ok());
    }

    #[test]
    fn test_get_off_board() {
        let board = standard();
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_drop_piece_on_narrow_board() {
        let mut board = Board::new(5, 4).unwrap();

        assert_eq!(board.landing_row(3), Some(4));
        assert_eq!(board.drop_piece(3, Cell::Red), Some(4));
        assert_eq!(board.drop_piece(3, Cell::Yellow), Some(3));
        for row in (0..3).rev() {
            assert_eq!(board.drop_piece(3, Cell::Red), Some(row));
        }
        assert_eq!(board.landing_row(3), None);
        assert_eq!(board.drop_piece(3, Cell::Yellow), None);
        // Neighbouring column untouched
        assert_eq!(board.landing_row(2), Some(4));
    }

    #[test]
    fn test_column_full() {
        let mut board = standard();

        for _ in 0..board.rows() {
            board.drop_piece(0, Cell::Red).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board.clone();
        assert_eq!(board.drop_piece(0, Cell::Yellow), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = standard();
        assert!(board.is_column_full(7));
        assert_eq!(board.drop_piece(7, Cell::Red), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(4, 5).unwrap();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                assert!(!board.is_full());
                board.drop_piece(col, Cell::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_empty_anchor_never_wins() {
        let board = standard();
        assert!(!board.connects_four(5, 0));
        assert!(!board.connects_four(10, 10));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = standard();
        for col in 0..4 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        // Every piece of the run sees it
        for col in 0..4 {
            assert!(board.connects_four(5, col));
        }
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let mut board = standard();
        for col in 3..7 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        assert!(board.connects_four(5, 6));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = standard();
        for _ in 0..4 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(board.connects_four(2, 3)); // The 4th piece
    }

    #[test]
    fn test_vertical_run_interrupted() {
        let mut board = standard();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        for _ in 0..3 {
            board.drop_piece(3, Cell::Yellow).unwrap();
        }
        assert!(!board.connects_four(1, 3));
    }

    #[test]
    fn test_rising_diagonal_corner_to_corner() {
        // 4 rows x 5 columns, red from (3, 1) up to (0, 4)
        let mut board = Board::new(4, 5).unwrap();
        stack(&mut board, 1, &[Cell::Red]);
        stack(&mut board, 2, &[Cell::Yellow, Cell::Red]);
        stack(&mut board, 3, &[Cell::Yellow, Cell::Yellow, Cell::Red]);
        stack(&mut board, 4, &[Cell::Yellow, Cell::Yellow, Cell::Yellow, Cell::Red]);

        // Bottom end: only the window starting at offset 0 fits
        assert!(board.connects_four(3, 1));
        // Top end: only the window starting at offset -3 fits
        assert!(board.connects_four(0, 4));
        assert!(board.connects_four(2, 2));
    }

    #[test]
    fn test_falling_diagonal_window_edges() {
        // 5 rows x 6 columns, red from (1, 2) down to (4, 5)
        let mut board = Board::new(5, 6).unwrap();
        stack(&mut board, 5, &[Cell::Red]);
        stack(&mut board, 4, &[Cell::Yellow, Cell::Red]);
        stack(&mut board, 3, &[Cell::Yellow, Cell::Yellow, Cell::Red]);
        stack(&mut board, 2, &[Cell::Yellow, Cell::Yellow, Cell::Yellow, Cell::Red]);

        assert!(board.connects_four(1, 2));
        assert!(board.connects_four(4, 5));
    }

    #[test]
    fn test_falling_diagonal_of_three_at_edge() {
        let mut board = Board::new(5, 6).unwrap();
        stack(&mut board, 5, &[Cell::Red]);
        stack(&mut board, 4, &[Cell::Yellow, Cell::Red]);
        stack(&mut board, 3, &[Cell::Yellow, Cell::Yellow, Cell::Red]);
        stack(&mut board, 2, &[Cell::Yellow, Cell::Yellow, Cell::Yellow, Cell::Yellow]);

        assert!(!board.connects_four(4, 5));
        assert!(!board.connects_four(2, 3));
    }

    #[test]
    fn test_three_then_four_on_bottom_row() {
        let mut board = Board::new(4, 6).unwrap();
        for col in 3..6 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(!board.connects_four(3, 5));

        board.drop_piece(2, Cell::Red).unwrap();
        assert!(board.connects_four(3, 2)); // left end, offset 0
        assert!(board.connects_four(3, 5)); // right end, offset -3
    }

    #[test]
    fn test_run_does_not_wrap_rows() {
        // Two pieces at the end of one row and two at the start of the next
        // are adjacent in storage but not on the board.
        let mut board = Board::new(4, 4).unwrap();
        for col in 0..4 {
            board.drop_piece(col, Cell::Yellow).unwrap();
        }
        board.drop_piece(0, Cell::Red).unwrap();
        board.drop_piece(1, Cell::Red).unwrap();
        board.drop_piece(2, Cell::Yellow).unwrap();
        board.drop_piece(3, Cell::Yellow).unwrap();
        board.drop_piece(2, Cell::Red).unwrap();
        board.drop_piece(3, Cell::Red).unwrap();
        assert!(!board.connects_four(1, 3));
        assert!(!board.connects_four(2, 0));
    }

    #[test]
    fn test_longer_run_still_wins() {
        let mut board = standard();
        for col in 0..5 {
            board.drop_piece(col, Cell::Red).unwrap();
        }
        assert!(board.connects_four(5, 4));
    }
}
