//! Constants for board geometry, winning lines, and markers.
//!
//! The board is a flat, row-major array of 9 cells:
//!
//! ```text
//! 0 | 1 | 2
//! 3 | 4 | 5
//! 6 | 7 | 8
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length.
pub const N: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = N * N;

/// A winning line, as three cell indices.
pub type Line = [usize; 3];

/// Horizontal lines, top to bottom.
pub const ROWS: [Line; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// Vertical lines, left to right.
pub const COLUMNS: [Line; 3] = [[0, 3, 6], [1, 4, 7], [2, 5, 8]];

/// Main diagonal, then anti-diagonal.
pub const DIAGONALS: [Line; 2] = [[0, 4, 8], [2, 4, 6]];

// =============================================================================
// Special Move Values
// =============================================================================

/// Returned by [`select_move`](crate::engine::select_move) when the board is full.
pub const NO_MOVE: i32 = -1;

// =============================================================================
// Marker Characters
// =============================================================================

/// Empty cell.
pub const EMPTY_CHAR: char = '-';

/// Cell held by X.
pub const X_CHAR: char = 'X';

/// Cell held by O.
pub const O_CHAR: char = 'O';

/// The empty board in text form.
pub const EMPTY_BOARD: &str = "---------";
