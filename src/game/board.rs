use super::player::Seat;
use crate::error::GameError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Run directions as (row step, column step): down, right, down-right, up-right.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Blue,
    Red,
}

impl Cell {
    /// Base-3 digit used by the state codec
    pub fn digit(self) -> u16 {
        match self {
            Cell::Empty => 0,
            Cell::Blue => 1,
            Cell::Red => 2,
        }
    }

    pub fn from_digit(digit: u16) -> Option<Cell> {
        match digit {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Blue),
            2 => Some(Cell::Red),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
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

    /// Build a board from raw rows, top row first. No gravity check is made.
    pub fn from_rows(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Overwrite a single cell. Meant for setting up positions, not for play.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    pub fn row(&self, row: usize) -> &[Cell; COLS] {
        &self.cells[row]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// An out-of-range column and a full column are the same failure.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, GameError> {
        if col >= COLS {
            return Err(GameError::InvalidMove { column: col });
        }

        // Lowest empty row, scanning up from the bottom
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        Err(GameError::InvalidMove { column: col })
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// True when every column's pieces rest on the bottom row or on another piece
    pub fn is_settled(&self) -> bool {
        (0..COLS).all(|col| {
            (1..ROWS).all(|row| {
                self.cells[row - 1][col] == Cell::Empty || self.cells[row][col] != Cell::Empty
            })
        })
    }

    /// Scan the whole board for four of `seat`'s tokens in a line.
    ///
    /// Every cell is tried as a run start, rows top to bottom and columns left
    /// to right, in each of the four directions. The first complete run found
    /// is returned as its four (row, col) positions.
    pub fn find_four(&self, seat: Seat) -> Option<[(usize, usize); 4]> {
        let token = seat.to_cell();
        for row in 0..ROWS {
            for col in 0..COLS {
                for (dr, dc) in DIRECTIONS {
                    if let Some(run) = run_from(row, col, dr, dc) {
                        if run.iter().all(|&(r, c)| self.cells[r][c] == token) {
                            return Some(run);
                        }
                    }
                }
            }
        }
        None
    }
}

/// Positions of a four-cell run starting at (row, col), if it fits on the board
fn run_from(row: usize, col: usize, dr: isize, dc: isize) -> Option<[(usize, usize); 4]> {
    let end_row = row as isize + 3 * dr;
    let end_col = col as isize + 3 * dc;
    if end_row < 0 || end_row >= ROWS as isize || end_col < 0 || end_col >= COLS as isize {
        return None;
    }

    let mut run = [(0, 0); 4];
    for (k, pos) in run.iter_mut().enumerate() {
        let k = k as isize;
        *pos = (
            (row as isize + k * dr) as usize,
            (col as isize + k * dc) as usize,
        );
    }
    Some(run)
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
