//! The 7 × 6 grid, token placement and terminal-condition detection.
//!
//! The board knows nothing about players or turn order: it only stores cells,
//! drops tokens into columns and answers win/full queries.

use std::fmt;
use std::ops::Range;

use crate::constants::{COLS, CONNECT, DIRECTIONS, EMPTY_CHAR, ROWS, TOKEN_A_CHAR, TOKEN_B_CHAR};
use crate::error::MoveError;

/// The marker a player drops into the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    A,
    B,
}

impl Token {
    /// Character used when rendering the grid as text.
    pub fn symbol(self) -> char {
        Cell::from(self).symbol()
    }
}

/// Contents of a single grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    TokenA,
    TokenB,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The token occupying this cell, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            Cell::Empty => None,
            Cell::TokenA => Some(Token::A),
            Cell::TokenB => Some(Token::B),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => EMPTY_CHAR,
            Cell::TokenA => TOKEN_A_CHAR,
            Cell::TokenB => TOKEN_B_CHAR,
        }
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        match token {
            Token::A => Cell::TokenA,
            Token::B => Cell::TokenB,
        }
    }
}

/// Read-only copy of the grid, row 0 on top.
pub type Snapshot = [[Cell; COLS]; ROWS];

/// A Connect Four board.
///
/// Tokens are gravity-packed: within a column every cell below the lowest
/// empty cell is occupied. `place` is the only mutation and preserves this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: Snapshot,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Cell at `(row, col)`. Row 0 is the top of the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Copy of the whole grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        self.cells
    }

    /// A column is full once its top cell is occupied.
    ///
    /// Columns outside the board are reported as full since nothing can ever
    /// be placed there.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        !self.cells[0][col].is_empty()
    }

    /// Drop `token` into `col` and return the row where it landed.
    ///
    /// Scans bottom-up and fills the first empty cell. A full column is left
    /// untouched and reported as [`MoveError::ColumnFull`].
    pub fn place(&mut self, col: usize, token: Token) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfRangeColumn(col));
        }
        for row in (0..ROWS).rev() {
            if self.cells[row][col].is_empty() {
                self.cells[row][col] = token.into();
                return Ok(row);
            }
        }
        Err(MoveError::ColumnFull(col))
    }

    /// True if `token` has a run of four in any direction.
    ///
    /// Each direction is scanned over every starting cell whose four-cell
    /// window stays on the board; the first run found short-circuits.
    pub fn check_win(&self, token: Token) -> bool {
        let cell = Cell::from(token);
        DIRECTIONS.iter().any(|&(dr, dc)| {
            starts(dr, ROWS)
                .any(|row| starts(dc, COLS).any(|col| self.run_from(cell, row, col, dr, dc)))
        })
    }

    /// True once every column is full.
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a token, in ascending order.
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&col| !self.is_column_full(col))
    }

    /// Number of occupied cells.
    pub fn token_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    fn run_from(&self, cell: Cell, row: usize, col: usize, dr: isize, dc: isize) -> bool {
        (0..CONNECT as isize).all(|i| {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            self.cells[r][c] == cell
        })
    }
}

/// Starting offsets along one axis for a window of `CONNECT` cells moving by `step`.
fn starts(step: isize, len: usize) -> Range<usize> {
    let span = CONNECT - 1;
    match step {
        0 => 0..len,
        s if s > 0 => 0..len - span,
        _ => span..len,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            write!(f, "| ")?;
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f, "|")?;
        }
        write!(f, " ")?;
        for col in 1..=COLS {
            write!(f, " {col}")?;
        }
        writeln!(f)
    }
}
