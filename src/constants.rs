//! Board geometry and display constants.
//!
//! The board is a fixed 7 × 6 grid stored row-major, with row 0 at the top
//! and row `ROWS - 1` at the bottom. Tokens fall towards the bottom row.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of rows on the board.
pub const ROWS: usize = 6;

/// Number of columns on the board.
pub const COLS: usize = 7;

/// Length of the run of same-token cells that wins the game.
pub const CONNECT: usize = 4;

/// Maximum number of placements in one game (every cell filled).
pub const MAX_MOVES: usize = ROWS * COLS;

// =============================================================================
// Scan Directions
// =============================================================================

/// Win scan directions as (row step, column step).
/// Order: horizontal, vertical, diagonal down-right, diagonal down-left
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal (left to right)
    (1, 0),  // Vertical (top to bottom)
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

// =============================================================================
// Display Characters
// =============================================================================

/// Empty cell.
pub const EMPTY_CHAR: char = '#';

/// Token of the first seat.
pub const TOKEN_A_CHAR: char = 'X';

/// Token of the second seat.
pub const TOKEN_B_CHAR: char = 'O';

/// Name given to the randomized opponent in Player vs AI mode.
pub const AI_NAME: &str = "AI";
