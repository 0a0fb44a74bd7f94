//! tictactoe-engine: a one-ply tic-tac-toe move picker.
//!
//! Given a 9-cell board and a player, the engine picks the first cell that
//! completes a winning line and otherwise the first open cell.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines, and markers
//! - [`board`] - Immutable board value and markers
//! - [`engine`] - Win detection and move selection
//! - [`protocol`] - Line-oriented text protocol
//! - [`error`] - Error kinds for invalid input
//!
//! ## Example
//!
//! ```
//! use tictactoe_engine::board::{Board, Marker};
//! use tictactoe_engine::engine::{select_move, winner};
//!
//! let board: Board = "XO-XX-OOX".parse().unwrap();
//! assert_eq!(select_move(&board, Marker::X), 5);
//!
//! let next = board.play(5, Marker::X).unwrap();
//! assert_eq!(winner(&next), Marker::X);
//! assert_eq!(winner(&board), Marker::Empty);
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod error;
pub mod protocol;
