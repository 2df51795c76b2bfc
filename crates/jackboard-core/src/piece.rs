//! Pieces and the tri-state cell reading.

use std::fmt;

use crate::color::Color;

/// Numeric reading for coordinates outside the 8x8 playing area.
///
/// Distinct from every piece value and from empty.
pub const OFF_BOARD: i8 = 4;

/// A piece: its side and whether it has been crowned.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Color,
    queen: bool,
}

impl Piece {
    /// White man. Value: 1.
    pub const WHITE_MAN: Piece = Piece::new(Color::White, false);
    /// White queen. Value: 2.
    pub const WHITE_QUEEN: Piece = Piece::new(Color::White, true);
    /// Black man. Value: -1.
    pub const BLACK_MAN: Piece = Piece::new(Color::Black, false);
    /// Black queen. Value: -2.
    pub const BLACK_QUEEN: Piece = Piece::new(Color::Black, true);

    /// The four pieces.
    pub const ALL: [Piece; 4] = [
        Self::WHITE_MAN,
        Self::WHITE_QUEEN,
        Self::BLACK_MAN,
        Self::BLACK_QUEEN,
    ];

    /// Create a piece from a color and a queen flag.
    #[inline]
    pub const fn new(color: Color, queen: bool) -> Piece {
        Piece { color, queen }
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn is_white(self) -> bool {
        matches!(self.color, Color::White)
    }

    #[inline]
    pub const fn is_queen(self) -> bool {
        self.queen
    }

    /// Return the queen of the same color.
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece::new(self.color, true)
    }

    /// Numeric cell value: 1 / 2 for White, -1 / -2 for Black.
    #[inline]
    pub const fn value(self) -> i8 {
        let magnitude = if self.queen { 2 } else { 1 };
        magnitude * self.color.sign()
    }

    /// Inverse of [`Piece::value`]. Returns `None` for 0, the sentinel, and anything else.
    #[inline]
    pub const fn from_value(value: i8) -> Option<Piece> {
        match value {
            1 => Some(Self::WHITE_MAN),
            2 => Some(Self::WHITE_QUEEN),
            -1 => Some(Self::BLACK_MAN),
            -2 => Some(Self::BLACK_QUEEN),
            _ => None,
        }
    }

    /// Grid character: `w`/`W` for White, `b`/`B` for Black, uppercase for queens.
    #[inline]
    pub const fn symbol(self) -> char {
        match (self.color, self.queen) {
            (Color::White, false) => 'w',
            (Color::White, true) => 'W',
            (Color::Black, false) => 'b',
            (Color::Black, true) => 'B',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = if self.queen { "queen" } else { "man" };
        write!(f, "Piece({} {rank})", self.color)
    }
}

/// What a board query finds at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Piece),
    /// The coordinate lies outside the playing area.
    OffBoard,
}

impl Cell {
    /// The piece on this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Occupied(piece) => Some(piece),
            Cell::Empty | Cell::OffBoard => None,
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Numeric reading: 0 empty, the piece value, or [`OFF_BOARD`].
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(piece) => piece.value(),
            Cell::OffBoard => OFF_BOARD,
        }
    }
}

impl From<Option<Piece>> for Cell {
    fn from(slot: Option<Piece>) -> Cell {
        match slot {
            Some(piece) => Cell::Occupied(piece),
            None => Cell::Empty,
        }
    }
}
