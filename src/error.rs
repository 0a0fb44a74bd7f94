//! Error types for board construction and moves.

use derive_more::{Display, Error};

use crate::board::Marker;
use crate::constants::CELLS;

/// Invalid input to a board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// The cell sequence does not have exactly [`CELLS`] entries.
    #[display("invalid board size: expected {} cells, got {len}", CELLS)]
    InvalidBoardSize {
        /// Number of cells supplied.
        len: usize,
    },
    /// A cell index outside `0..CELLS`.
    #[display("index {index} out of range 0..{}", CELLS)]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
    },
    /// A character that is not one of `-`, `X`, `O`.
    #[display("invalid marker {ch:?} at position {index}")]
    InvalidMarker {
        /// The offending character.
        ch: char,
        /// Position of the character in the input.
        index: usize,
    },
    /// A player was required but the marker was empty.
    #[display("invalid player {marker}: expected X or O")]
    InvalidPlayer {
        /// The marker that was supplied.
        marker: Marker,
    },
}
