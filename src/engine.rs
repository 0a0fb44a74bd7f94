//! Win detection and one-ply move selection.
//!
//! The engine is stateless: every function takes the board it works on and
//! returns a result without touching it.
//!
//! ## Win rules
//!
//! By default only the three rows count as winning lines. Columns and
//! diagonals are ignored unless [`WinRule::AllLines`] is requested.
//!
//! ## Move policy
//!
//! 1. Play each empty cell in ascending order; the first one that makes
//!    `player` the winner is chosen.
//! 2. Otherwise take the lowest empty cell.
//! 3. A full board has no move.
//!
//! The opponent's threats are not blocked.

use std::fmt;
use std::str::FromStr;

use tracing::{instrument, trace};

use crate::board::{Board, Marker};
use crate::constants::{COLUMNS, DIAGONALS, Line, NO_MOVE, ROWS};

/// Which lines count as a win.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WinRule {
    /// Rows only.
    #[default]
    RowsOnly,
    /// Rows, columns and both diagonals.
    AllLines,
}

impl WinRule {
    /// Winning lines in the order they are checked.
    pub fn lines(self) -> impl Iterator<Item = &'static Line> {
        let rows: &'static [Line] = &ROWS;
        let (columns, diagonals): (&'static [Line], &'static [Line]) = match self {
            WinRule::RowsOnly => (&[], &[]),
            WinRule::AllLines => (&COLUMNS, &DIAGONALS),
        };
        rows.iter().chain(columns).chain(diagonals)
    }
}

impl fmt::Display for WinRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinRule::RowsOnly => write!(f, "rows"),
            WinRule::AllLines => write!(f, "all"),
        }
    }
}

impl FromStr for WinRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rows" => Ok(WinRule::RowsOnly),
            "all" => Ok(WinRule::AllLines),
            other => Err(format!("unknown win rule: {other}")),
        }
    }
}

/// The marker owning a full row, or `Empty`.
pub fn winner(board: &Board) -> Marker {
    winner_with(board, WinRule::RowsOnly)
}

/// The marker owning the first full line under `rule`, or `Empty`.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn winner_with(board: &Board, rule: WinRule) -> Marker {
    let cells = board.cells();
    for &[a, b, c] in rule.lines() {
        let m = cells[a];
        if !m.is_empty() && m == cells[b] && m == cells[c] {
            trace!(line = ?[a, b, c], winner = %m, "line owned");
            return m;
        }
    }
    Marker::Empty
}

/// Choose a move for `player` with the row-only rule.
pub fn best_move(board: &Board, player: Marker) -> Option<usize> {
    best_move_with(board, player, WinRule::RowsOnly)
}

/// Choose a move for `player` under `rule`. `None` when the board is full.
#[instrument(level = "debug", skip(board), fields(board = %board))]
pub fn best_move_with(board: &Board, player: Marker, rule: WinRule) -> Option<usize> {
    for i in board.empty_cells() {
        // Indices from empty_cells are always in range.
        let Ok(trial) = board.play(i, player) else {
            continue;
        };
        let w = winner_with(&trial, rule);
        trace!(candidate = i, winner = %w, "tried");
        if w == player {
            return Some(i);
        }
    }
    let fallback = board.empty_cells().next();
    if fallback.is_none() {
        trace!("board full");
    }
    fallback
}

/// Choose a move for `player`, returning [`NO_MOVE`] on a full board.
pub fn select_move(board: &Board, player: Marker) -> i32 {
    to_index(best_move(board, player))
}

/// [`select_move`] under `rule`.
pub fn select_move_with(board: &Board, player: Marker, rule: WinRule) -> i32 {
    to_index(best_move_with(board, player, rule))
}

fn to_index(mv: Option<usize>) -> i32 {
    // Cell indices are below 9, so the cast is lossless.
    mv.map_or(NO_MOVE, |i| i as i32)
}
