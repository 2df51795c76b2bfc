//! Single-rule legality check.

use crate::board::Board;
use crate::chess_move::Move;
use crate::move_table::{Rule, RuleKind};
use crate::piece::{Cell, Piece};
use crate::position::Position;

/// Test one table entry for `mover` standing on `from`.
///
/// The destination must read [`Cell::Empty`], so off-board targets fail
/// without a separate bounds test. A jump also needs an opposing piece on the
/// square it passes over. On success the complete move, capture included, is
/// pushed onto `acc` and `true` is returned; otherwise `acc` is untouched.
pub fn check(board: &Board, acc: &mut Vec<Move>, rule: &Rule, from: Position, mover: Piece) -> bool {
    let end = from.offset(rule.dx, rule.dy);
    if board.cell(end) != Cell::Empty {
        return false;
    }

    let captured = match rule.kind {
        RuleKind::Step => Vec::new(),
        RuleKind::Jump { over_dy, over_dx } => {
            let over = from.offset(over_dx, over_dy);
            match board.cell(over) {
                Cell::Occupied(other) if other.color() != mover.color() => vec![over],
                _ => return false,
            }
        }
    };

    acc.push(Move::new(from, end, captured));
    true
}
