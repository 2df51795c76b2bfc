//! Move representation.

use std::fmt;

use crate::position::Position;

/// A move from `start` to `end`, removing every square in `captured`.
///
/// `captured` is empty for a step and non-empty for a jump.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Position,
    pub end: Position,
    pub captured: Vec<Position>,
}

impl Move {
    /// Create a move with an explicit capture list.
    pub fn new(start: Position, end: Position, captured: Vec<Position>) -> Move {
        Move {
            start,
            end,
            captured,
        }
    }

    /// Create a non-capturing move.
    pub fn step(start: Position, end: Position) -> Move {
        Move::new(start, end, Vec::new())
    }

    /// Create a single capture over `over`.
    pub fn jump(start: Position, end: Position, over: Position) -> Move {
        Move::new(start, end, vec![over])
    }

    /// Return `true` if the move covers a distance of 2 along either axis.
    pub fn is_jump(&self) -> bool {
        self.start.x.abs_diff(self.end.x) == 2 || self.start.y.abs_diff(self.end.y) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)?;
        for pos in &self.captured {
            write!(f, " x{pos}")?;
        }
        Ok(())
    }
}
