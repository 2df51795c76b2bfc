//! Move generation over the static move tables.

mod legality;

use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::move_table::rules_for;
use crate::piece::Piece;
use crate::position::Position;

pub use self::legality::check;

/// Every legal move for `piece` standing on `from`, in table order.
///
/// Each move carries its own capture list, so steps and jumps need no
/// pairing afterwards.
pub fn moves_from(board: &Board, from: Position, piece: Piece) -> Vec<Move> {
    let mut moves = Vec::new();
    for rule in rules_for(piece) {
        check(board, &mut moves, rule, from, piece);
    }
    moves
}

/// Every legal move on the board, scanning y outer and x inner.
///
/// With `Some(color)` only that side's men and queens are considered. The
/// order is scan order; callers wanting captures first must filter.
pub fn possible_moves(board: &Board, filter: Option<Color>) -> Vec<Move> {
    let mut moves = Vec::new();
    for (from, piece) in board.grid().pieces() {
        if filter.is_some_and(|color| color != piece.color()) {
            continue;
        }
        for rule in rules_for(piece) {
            check(board, &mut moves, rule, from, piece);
        }
    }
    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn starting_position_white_moves() {
        let board = Board::new();
        let moves = possible_moves(&board, Some(Color::White));
        assert_eq!(
            moves,
            vec![
                Move::step(pos(2, 5), pos(1, 4)),
                Move::step(pos(4, 5), pos(3, 4)),
                Move::step(pos(6, 5), pos(5, 4)),
            ]
        );
    }

    #[test]
    fn starting_position_black_moves() {
        let board = Board::new();
        let moves = possible_moves(&board, Some(Color::Black));
        assert_eq!(
            moves,
            vec![
                Move::step(pos(1, 2), pos(2, 3)),
                Move::step(pos(3, 2), pos(4, 3)),
                Move::step(pos(5, 2), pos(6, 3)),
            ]
        );
    }

    #[test]
    fn unfiltered_scan_covers_both_sides_in_scan_order() {
        let board = Board::new();
        let moves = board.possible_moves();
        assert_eq!(moves.len(), 6);
        let starts: Vec<Position> = moves.iter().map(|m| m.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_by_key(|p| (p.y, p.x));
        assert_eq!(starts, sorted, "moves must follow row-major scan order");
        assert!(moves.iter().all(|m| m.captured.is_empty()));
    }

    #[test]
    fn capture_is_generated_with_its_victim() {
        let mut board = Board::empty();
        board.set_piece(pos(5, 3), Some(Piece::WHITE_MAN)).unwrap();
        board.set_piece(pos(4, 4), Some(Piece::BLACK_MAN)).unwrap();
        let moves = board.possible_moves_for(Color::White);
        let jump = Move::jump(pos(5, 3), pos(3, 5), pos(4, 4));
        assert!(moves.contains(&jump), "missing capture in {moves:?}");
        assert!(jump.is_jump());
        assert!(
            moves.iter().filter(|m| !m.captured.is_empty()).all(|m| m.is_jump()),
            "every capture must be a jump"
        );
    }

    #[test]
    fn white_man_moves_toward_lower_x_only() {
        let mut board = Board::empty();
        board.set_piece(pos(4, 4), Some(Piece::WHITE_MAN)).unwrap();
        let moves = moves_from(&board, pos(4, 4), Piece::WHITE_MAN);
        assert_eq!(
            moves,
            vec![Move::step(pos(4, 4), pos(3, 5)), Move::step(pos(4, 4), pos(3, 3))]
        );
    }

    #[test]
    fn black_man_moves_toward_higher_x_only() {
        let mut board = Board::empty();
        board.set_piece(pos(4, 4), Some(Piece::BLACK_MAN)).unwrap();
        let moves = moves_from(&board, pos(4, 4), Piece::BLACK_MAN);
        assert_eq!(
            moves,
            vec![Move::step(pos(4, 4), pos(5, 3)), Move::step(pos(4, 4), pos(5, 5))]
        );
    }

    #[test]
    fn men_never_capture_backwards() {
        let mut board = Board::empty();
        board.set_piece(pos(4, 4), Some(Piece::WHITE_MAN)).unwrap();
        board.set_piece(pos(5, 5), Some(Piece::BLACK_MAN)).unwrap();
        board.set_piece(pos(5, 3), Some(Piece::BLACK_MAN)).unwrap();
        let moves = moves_from(&board, pos(4, 4), Piece::WHITE_MAN);
        assert!(moves.iter().all(|m| m.captured.is_empty()));
    }

    #[test]
    fn queen_moves_in_all_four_directions() {
        let mut board = Board::empty();
        board.set_piece(pos(3, 3), Some(Piece::WHITE_QUEEN)).unwrap();
        let moves = moves_from(&board, pos(3, 3), Piece::WHITE_QUEEN);
        assert_eq!(moves.len(), 4);
        for end in [pos(2, 2), pos(4, 2), pos(2, 4), pos(4, 4)] {
            assert!(moves.iter().any(|m| m.end == end), "queen cannot reach {end}");
        }
    }

    #[test]
    fn queen_captures_listed_before_steps() {
        let mut board = Board::empty();
        board.set_piece(pos(3, 3), Some(Piece::BLACK_QUEEN)).unwrap();
        board.set_piece(pos(2, 2), Some(Piece::WHITE_MAN)).unwrap();
        board.set_piece(pos(4, 4), Some(Piece::WHITE_QUEEN)).unwrap();
        let moves = moves_from(&board, pos(3, 3), Piece::BLACK_QUEEN);
        assert_eq!(moves.len(), 4);
        assert!(moves[0].is_jump() && moves[1].is_jump());
        assert!(moves[2..].iter().all(|m| !m.is_jump()));
        assert!(moves.contains(&Move::jump(pos(3, 3), pos(1, 1), pos(2, 2))));
        assert!(moves.contains(&Move::jump(pos(3, 3), pos(5, 5), pos(4, 4))));
    }

    #[test]
    fn filtered_scan_includes_queens() {
        let mut board = Board::empty();
        board.set_piece(pos(3, 3), Some(Piece::WHITE_QUEEN)).unwrap();
        board.set_piece(pos(6, 6), Some(Piece::BLACK_MAN)).unwrap();
        let moves = board.possible_moves_for(Color::White);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| m.start == pos(3, 3)));
    }

    #[test]
    fn corner_pieces_have_no_off_board_moves() {
        let mut board = Board::empty();
        board.set_piece(pos(0, 0), Some(Piece::WHITE_QUEEN)).unwrap();
        let moves = moves_from(&board, pos(0, 0), Piece::WHITE_QUEEN);
        assert_eq!(moves, vec![Move::step(pos(0, 0), pos(1, 1))]);
        assert!(moves.iter().all(|m| m.end.is_on_board()));
    }

    #[test]
    fn generated_moves_apply_cleanly() {
        let mut board = Board::new();
        for _ in 0..10 {
            let side = board.side_to_move();
            let Some(mv) = board.possible_moves_for(side).into_iter().next() else {
                break;
            };
            let before = board.count(Color::White) + board.count(Color::Black);
            board.apply_move(&mv).unwrap();
            let after = board.count(Color::White) + board.count(Color::Black);
            assert_eq!(after, before - mv.captured.len());
        }
    }
}
