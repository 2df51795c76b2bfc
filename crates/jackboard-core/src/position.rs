//! Board coordinates.

use std::fmt;

/// Edge length of the playing area.
pub(crate) const BOARD_SIZE: i32 = 8;

/// An `(x, y)` coordinate.
///
/// Construction performs no range check: off-board coordinates are valid
/// values and read back as [`Cell::OffBoard`](crate::Cell::OffBoard).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a position from its coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    /// Return `true` if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Return the position shifted by `(dx, dy)`.
    ///
    /// Saturates at the `i32` limits, so a shift from an extreme coordinate
    /// stays off the board instead of wrapping back onto it.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Position {
        Position::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// Row-major index `y * 8 + x`, or `None` when off the board.
    #[inline]
    pub(crate) const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.y * BOARD_SIZE + self.x) as usize)
        } else {
            None
        }
    }

    /// Iterate over the 64 on-board squares, y outer and x inner.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Position::new(x, y)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self)
    }
}
