//! Move application: captures, crowning, turn flip, history, notification.

use tracing::debug;

use crate::board::Board;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::notify::BoardEvent;
use crate::piece::{Cell, Piece};
use crate::position::BOARD_SIZE;

/// Row on which a white man is crowned.
const WHITE_CROWN_ROW: i32 = BOARD_SIZE - 1;
/// Row on which a black man is crowned.
const BLACK_CROWN_ROW: i32 = 0;

/// Return the piece that ends up on row `y` after `piece` lands there.
fn crown(piece: Piece, y: i32) -> Piece {
    if (piece == Piece::WHITE_MAN && y == WHITE_CROWN_ROW) || (piece == Piece::BLACK_MAN && y == BLACK_CROWN_ROW)
    {
        piece.crowned()
    } else {
        piece
    }
}

impl Board {
    /// Apply a move produced by the move generator.
    ///
    /// Only the destination and the presence of a mover are re-checked here;
    /// any other legality is the generator's job. Refusing an empty start
    /// square goes beyond the plain occupied-destination check: without a
    /// mover there is nothing to place, so the move is rejected outright. On success the start square
    /// is cleared, captured squares are cleared for jumps, the mover lands
    /// (crowned on its crowning row), the move is recorded, the turn flips, and
    /// listeners receive a [`BoardEvent`] with the applied move.
    ///
    /// # Errors
    ///
    /// Fails without touching the board if the destination is occupied or off
    /// the board, or if the start square is empty.
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        match self.cell(mv.end) {
            Cell::Empty => {}
            Cell::Occupied(_) => return Err(MoveError::DestinationOccupied { end: mv.end }),
            Cell::OffBoard => return Err(MoveError::DestinationOffBoard { end: mv.end }),
        }
        let Some(piece) = self.piece(mv.start) else {
            return Err(MoveError::EmptyStart { start: mv.start });
        };

        let grid = self.grid_mut();
        grid.put(mv.start, None);
        if mv.is_jump() {
            for &pos in &mv.captured {
                grid.put(pos, None);
            }
        }
        let landed = crown(piece, mv.end.y);
        if landed != piece {
            debug!(square = %mv.end, piece = %landed, "crowned");
        }
        grid.put(mv.end, Some(landed));

        self.record(mv.clone());
        self.flip_turn();
        debug!(mv = %mv, captured = mv.captured.len(), "move applied");
        self.listeners_mut().fire(&BoardEvent::move_applied(mv.clone()));
        Ok(())
    }

    /// Taking moves back is not supported; this always reports success and changes nothing.
    pub fn takeback(&mut self) -> bool {
        true
    }
}
