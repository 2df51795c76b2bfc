//! Static move and capture tables, one per color and rank.
//!
//! Each entry is read as `(dy, dx)`: applied at `(x, y)` it targets
//! `(x + dx, y + dy)`, which must be empty. A jump also names the square it
//! passes over, which must hold an opposing piece.
//!
//! Men move along their color's forward diagonals only and capture forward
//! only. Queens list their four jumps before their four steps.

use crate::piece::Piece;

/// Whether a rule is a plain step or a capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Step,
    /// Jump over `(x + over_dx, y + over_dy)`.
    Jump { over_dy: i32, over_dx: i32 },
}

/// One directional entry of a move table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub dy: i32,
    pub dx: i32,
    pub kind: RuleKind,
}

impl Rule {
    const fn step(dy: i32, dx: i32) -> Rule {
        Rule {
            dy,
            dx,
            kind: RuleKind::Step,
        }
    }

    /// A capture landing on `(dy, dx)`, twice the offset of the square jumped over.
    const fn jump(dy: i32, dx: i32) -> Rule {
        Rule {
            dy,
            dx,
            kind: RuleKind::Jump {
                over_dy: dy / 2,
                over_dx: dx / 2,
            },
        }
    }

    #[inline]
    pub const fn is_jump(self) -> bool {
        matches!(self.kind, RuleKind::Jump { .. })
    }
}

static WHITE_MAN: [Rule; 4] = [
    Rule::step(1, -1),
    Rule::step(-1, -1),
    Rule::jump(2, -2),
    Rule::jump(-2, -2),
];

static BLACK_MAN: [Rule; 4] = [
    Rule::step(-1, 1),
    Rule::step(1, 1),
    Rule::jump(-2, 2),
    Rule::jump(2, 2),
];

static WHITE_QUEEN: [Rule; 8] = [
    Rule::jump(-2, 2),
    Rule::jump(2, 2),
    Rule::jump(2, -2),
    Rule::jump(-2, -2),
    Rule::step(-1, 1),
    Rule::step(1, 1),
    Rule::step(1, -1),
    Rule::step(-1, -1),
];

static BLACK_QUEEN: [Rule; 8] = [
    Rule::jump(2, -2),
    Rule::jump(-2, -2),
    Rule::jump(-2, 2),
    Rule::jump(2, 2),
    Rule::step(1, -1),
    Rule::step(-1, -1),
    Rule::step(-1, 1),
    Rule::step(1, 1),
];

/// Return the ordered rule table for a piece.
pub fn rules_for(piece: Piece) -> &'static [Rule] {
    match (piece.is_white(), piece.is_queen()) {
        (true, false) => &WHITE_MAN,
        (false, false) => &BLACK_MAN,
        (true, true) => &WHITE_QUEEN,
        (false, true) => &BLACK_QUEEN,
    }
}
