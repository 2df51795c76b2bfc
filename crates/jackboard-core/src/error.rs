//! Error types for board setup and move application.

use crate::position::Position;

/// Why [`Board::apply_move`](crate::Board::apply_move) refused a move.
///
/// A refused move leaves the grid, turn, and history untouched and notifies no one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The destination already holds a piece.
    #[error("destination {end} is occupied")]
    DestinationOccupied {
        /// The occupied destination.
        end: Position,
    },
    /// The destination lies outside the board.
    #[error("destination {end} is off the board")]
    DestinationOffBoard {
        /// The off-board destination.
        end: Position,
    },
    /// There is no piece on the start square.
    #[error("no piece on {start}")]
    EmptyStart {
        /// The empty start square.
        start: Position,
    },
}

/// Errors from placing pieces while setting up a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The coordinate is outside the 8x8 grid.
    #[error("{position} is off the board")]
    OffBoard {
        /// The rejected coordinate.
        position: Position,
    },
}
