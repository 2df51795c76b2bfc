//! Core rules for the jackboard puzzle: board state, move tables, move generation, and move application.

mod board;
mod chess_move;
mod color;
mod error;
mod make_move;
mod move_table;
pub mod movegen;
mod notify;
mod piece;
mod position;

pub use board::{Board, Grid, PrettyBoard};
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, MoveError};
pub use move_table::{Rule, RuleKind, rules_for};
pub use notify::{BoardEvent, ListenerId, Listeners, SOLUTION_PROPERTY};
pub use piece::{Cell, OFF_BOARD, Piece};
pub use position::Position;
