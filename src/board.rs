use std::fmt;
use std::str::FromStr;

use crate::constants::{CELLS, EMPTY_CHAR, N, O_CHAR, X_CHAR};
use crate::error::BoardError;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    Empty,
    X,
    O,
}

impl Marker {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            EMPTY_CHAR => Some(Marker::Empty),
            X_CHAR => Some(Marker::X),
            O_CHAR => Some(Marker::O),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Marker::Empty => EMPTY_CHAR,
            Marker::X => X_CHAR,
            Marker::O => O_CHAR,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }

    /// The other player. `Empty` has no opponent.
    pub fn opponent(self) -> Option<Self> {
        match self {
            Marker::X => Some(Marker::O),
            Marker::O => Some(Marker::X),
            Marker::Empty => None,
        }
    }

    /// Accept only `X` or `O`.
    pub fn player(self) -> Result<Self, BoardError> {
        match self {
            Marker::Empty => Err(BoardError::InvalidPlayer { marker: self }),
            _ => Ok(self),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Marker {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Marker::from_char(ch).ok_or(BoardError::InvalidMarker { ch, index: 0 })
            }
            (None, _) => Err(BoardError::InvalidMarker { ch: ' ', index: 0 }),
            (Some(_), Some(ch)) => Err(BoardError::InvalidMarker { ch, index: 1 }),
        }
    }
}

/// A 3x3 board stored row-major.
///
/// Boards are values: [`Board::play`] returns a fresh board and leaves the
/// receiver untouched.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Marker; CELLS],
}

impl Board {
    /// Build a board from exactly [`CELLS`] markers.
    pub fn new(cells: &[Marker]) -> Result<Self, BoardError> {
        let cells: [Marker; CELLS] = cells
            .try_into()
            .map_err(|_| BoardError::InvalidBoardSize { len: cells.len() })?;
        Ok(Self { cells })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Result<Marker, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange { index })
    }

    pub fn cells(&self) -> &[Marker; CELLS] {
        &self.cells
    }

    /// Return a copy of this board with `player` at `index`.
    ///
    /// The target cell is overwritten whether or not it was empty.
    pub fn play(&self, index: usize, player: Marker) -> Result<Board, BoardError> {
        if index >= CELLS {
            return Err(BoardError::IndexOutOfRange { index });
        }
        let mut next = *self;
        next.cells[index] = player;
        Ok(next)
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| m.is_empty())
            .map(|(i, _)| i)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    /// Multi-line 3x3 rendering for humans.
    pub fn grid(&self) -> String {
        let mut out = String::new();
        for row in self.cells.chunks(N) {
            for (x, m) in row.iter().enumerate() {
                out.push(m.to_char());
                if x + 1 < N {
                    out.push(' ');
                }
            }
            out.push('\n');
        }
        out
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .enumerate()
            .map(|(index, ch)| Marker::from_char(ch).ok_or(BoardError::InvalidMarker { ch, index }))
            .collect::<Result<Vec<_>, _>>()?;
        Board::new(&cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for m in &self.cells {
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_roundtrip() {
        for s in ["---------", "XOXOX-OXO", "XO-XX-OOX", "OOOOOOOOO"] {
            let board: Board = s.parse().unwrap();
            assert_eq!(board.to_string(), s);
        }
    }

    #[test]
    fn test_parse_lowercase() {
        let board: Board = "xo-------".parse().unwrap();
        assert_eq!(board.to_string(), "XO-------");
    }

    #[test]
    fn test_wrong_size() {
        assert_eq!(
            "XXXXXXXX".parse::<Board>(),
            Err(BoardError::InvalidBoardSize { len: 8 })
        );
        assert_eq!(
            Board::new(&[Marker::X; 10]),
            Err(BoardError::InvalidBoardSize { len: 10 })
        );
    }

    #[test]
    fn test_bad_marker() {
        assert_eq!(
            "XO-.-----".parse::<Board>(),
            Err(BoardError::InvalidMarker { ch: '.', index: 3 })
        );
    }

    #[test]
    fn test_play_leaves_original() {
        let board = Board::empty();
        let next = board.play(4, Marker::X).unwrap();
        assert_eq!(board.to_string(), "---------");
        assert_eq!(next.to_string(), "----X----");
    }

    #[test]
    fn test_play_overwrites_occupied() {
        let board: Board = "X--------".parse().unwrap();
        let next = board.play(0, Marker::O).unwrap();
        assert_eq!(next.get(0), Ok(Marker::O));
    }

    #[test]
    fn test_play_out_of_range() {
        let board = Board::empty();
        assert_eq!(
            board.play(9, Marker::X),
            Err(BoardError::IndexOutOfRange { index: 9 })
        );
        assert_eq!(board.get(9), Err(BoardError::IndexOutOfRange { index: 9 }));
    }

    #[test]
    fn test_empty_cells_and_full() {
        let board: Board = "X-O-X-O-X".parse().unwrap();
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
        assert!(!board.is_full());
        assert!("XOXOXOXOX".parse::<Board>().unwrap().is_full());
    }

    #[test]
    fn test_grid() {
        let board: Board = "XO-XX-OOX".parse().unwrap();
        assert_eq!(board.grid(), "X O -\nX X -\nO O X\n");
    }

    #[test]
    fn test_marker_helpers() {
        assert_eq!("o".parse::<Marker>(), Ok(Marker::O));
        assert_eq!(Marker::X.opponent(), Some(Marker::O));
        assert_eq!(Marker::Empty.opponent(), None);
        assert!(Marker::Empty.player().is_err());
        assert_eq!(Marker::O.player(), Ok(Marker::O));
    }
}
