//! The puzzle board: piece placement, side to move, move history, and listeners.

use std::fmt;
use std::sync::mpsc::{Receiver, Sender};

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::movegen;
use crate::notify::{BoardEvent, ListenerId, Listeners};
use crate::piece::{Cell, Piece};
use crate::position::{BOARD_SIZE, Position};

/// Number of rows each side fills in the starting position.
const START_ROWS: i32 = 3;

/// Snapshot of the 64 cells, row-major (index `y * 8 + x`).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Option<Piece>; 64],
}

impl Grid {
    /// A grid with no pieces.
    pub const EMPTY: Grid = Grid { cells: [None; 64] };

    /// The starting layout: twelve men per side on the dark squares
    /// (`x + y` odd), Black on rows 0-2 and White on rows 5-7.
    pub fn starting_position() -> Grid {
        let mut grid = Grid::EMPTY;
        for pos in Position::all().filter(|p| (p.x + p.y) % 2 == 1) {
            if pos.y < START_ROWS {
                grid.put(pos, Some(Piece::BLACK_MAN));
            } else if pos.y >= BOARD_SIZE - START_ROWS {
                grid.put(pos, Some(Piece::WHITE_MAN));
            }
        }
        grid
    }

    /// Read a coordinate. Anything off the 8x8 area reads as [`Cell::OffBoard`].
    #[inline]
    pub fn get(&self, pos: Position) -> Cell {
        match pos.index() {
            Some(idx) => Cell::from(self.cells[idx]),
            None => Cell::OffBoard,
        }
    }

    /// Overwrite a cell. Returns `false`, changing nothing, when `pos` is off the board.
    #[inline]
    pub(crate) fn put(&mut self, pos: Position, slot: Option<Piece>) -> bool {
        match pos.index() {
            Some(idx) => {
                self.cells[idx] = slot;
                true
            }
            None => false,
        }
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(|pos| self.get(pos).piece().map(|piece| (pos, piece)))
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.pieces()).finish()
    }
}

/// Complete puzzle state.
///
/// A board has no internal locking. Share one across threads by wrapping it
/// (e.g. in a `Mutex`); [`Board::apply_move`] needs `&mut self`, so writers
/// are serialized by whoever owns the board.
pub struct Board {
    grid: Grid,
    white_to_move: bool,
    history: Vec<Move>,
    listeners: Listeners,
}

impl Board {
    /// Edge length of the board.
    pub const SIZE: usize = BOARD_SIZE as usize;

    /// The starting position with White to move.
    pub fn new() -> Board {
        Board::from_grid(Grid::starting_position())
    }

    /// A board with no pieces and White to move. Used to set up puzzles.
    pub fn empty() -> Board {
        Board::from_grid(Grid::EMPTY)
    }

    fn from_grid(grid: Grid) -> Board {
        Board {
            grid,
            white_to_move: true,
            history: Vec::new(),
            listeners: Listeners::new(),
        }
    }

    /// Place or remove a piece during setup.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OffBoard`] if `pos` is outside the grid.
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) -> Result<(), BoardError> {
        if self.grid.put(pos, piece) {
            Ok(())
        } else {
            Err(BoardError::OffBoard { position: pos })
        }
    }

    /// Set the side to move during setup.
    pub fn set_white_to_move(&mut self, white: bool) {
        self.white_to_move = white;
    }

    /// Return the cell snapshot.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Read any coordinate, on or off the board.
    #[inline]
    pub fn cell(&self, pos: Position) -> Cell {
        self.grid.get(pos)
    }

    /// Return the piece at `pos`, if any.
    #[inline]
    pub fn piece(&self, pos: Position) -> Option<Piece> {
        self.grid.get(pos).piece()
    }

    /// Return `true` if `pos` is on the board and empty.
    #[inline]
    pub fn is_free_position(&self, pos: Position) -> bool {
        self.grid.get(pos).is_empty()
    }

    /// All 64 cells, y outer and x inner.
    pub fn current_position(&self) -> Vec<Option<Piece>> {
        Position::all().map(|pos| self.piece(pos)).collect()
    }

    #[inline]
    pub fn size(&self) -> usize {
        Board::SIZE
    }

    #[inline]
    pub fn is_white_player_turn(&self) -> bool {
        self.white_to_move
    }

    pub(crate) fn flip_turn(&mut self) {
        self.white_to_move = !self.white_to_move;
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Number of pieces, men and queens, of one color.
    pub fn count(&self, color: Color) -> usize {
        self.grid.pieces().filter(|(_, piece)| piece.color() == color).count()
    }

    /// Every legal move for both sides, in board-scan order.
    pub fn possible_moves(&self) -> Vec<Move> {
        movegen::possible_moves(self, None)
    }

    /// Every legal move for one side, in board-scan order.
    pub fn possible_moves_for(&self, color: Color) -> Vec<Move> {
        movegen::possible_moves(self, Some(color))
    }

    /// Return `true` if every piece left on the board belongs to one side.
    ///
    /// An empty board counts as solved.
    pub fn is_solution(&self) -> bool {
        let mut pieces = self.grid.pieces().map(|(_, piece)| piece.color());
        match pieces.next() {
            Some(first) => pieces.all(|color| color == first),
            None => true,
        }
    }

    /// Moves applied so far, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push(mv);
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    /// Return `true` if no move has been made, or if a white man stands on
    /// the last move's destination. A white queen there does not count.
    pub fn was_last_move_white(&self) -> bool {
        match self.last_move() {
            None => true,
            Some(mv) => self.piece(mv.end) == Some(Piece::WHITE_MAN),
        }
    }

    /// Register a listener for move events.
    pub fn add_listener(&mut self, sender: Sender<BoardEvent>) -> ListenerId {
        self.listeners.add_listener(sender)
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove_listener(id)
    }

    /// Register a fresh channel and return its receiving end.
    pub fn subscribe(&mut self) -> (ListenerId, Receiver<BoardEvent>) {
        self.listeners.subscribe()
    }

    /// Return `true` if at least one listener is registered.
    pub fn has_listeners(&self) -> bool {
        !self.listeners.is_empty()
    }

    pub(crate) fn listeners_mut(&mut self) -> &mut Listeners {
        &mut self.listeners
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("grid", &self.grid)
            .field("white_to_move", &self.white_to_move)
            .field("moves", &self.history.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, row 0 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for y in 0..BOARD_SIZE {
            write!(f, "{y}  ")?;
            for x in 0..BOARD_SIZE {
                let c = board.piece(Position::new(x, y)).map_or('.', Piece::symbol);
                if x < BOARD_SIZE - 1 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7")
    }
}
