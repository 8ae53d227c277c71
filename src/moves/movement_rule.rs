//! Rule descriptors for direction-driven pieces.
//!
//! Every piece except the pawn is fully described by a set of direction
//! vectors and whether it may repeat them. The shared generator in
//! `move_generation::legal_move_shared` walks a descriptor against a board
//! situation; the per-kind modules only supply the tables.

use crate::position::moving_direction::MovingDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRule {
    pub directions: &'static [MovingDirection],
    /// Repeat each direction until blocked or off-board.
    pub sliding: bool,
}

impl MovementRule {
    pub const fn stepping(directions: &'static [MovingDirection]) -> Self {
        Self {
            directions,
            sliding: false,
        }
    }

    pub const fn sliding(directions: &'static [MovingDirection]) -> Self {
        Self {
            directions,
            sliding: true,
        }
    }
}
