//! Team-relative pawn steps.
//!
//! Pawns are the only piece whose vectors depend on the team and whose
//! terminal predicate depends on the vector: straight steps may only enter
//! empty squares, diagonal steps may only capture.

use crate::pieces::chess_types::Team;
use crate::position::moving_direction::MovingDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PawnStep {
    /// One square forward onto an empty square.
    Advance(MovingDirection),
    /// Two squares forward from the starting rank; `through` is the single
    /// step whose square must also be empty.
    DoubleAdvance {
        direction: MovingDirection,
        through: MovingDirection,
    },
    /// One square diagonally forward onto an enemy.
    Capture(MovingDirection),
}

impl PawnStep {
    #[inline]
    pub const fn direction(self) -> MovingDirection {
        match self {
            PawnStep::Advance(direction) | PawnStep::Capture(direction) => direction,
            PawnStep::DoubleAdvance { direction, .. } => direction,
        }
    }
}

const WHITE_PAWN_STEPS: [PawnStep; 4] = [
    PawnStep::Advance(MovingDirection::UP),
    PawnStep::DoubleAdvance {
        direction: MovingDirection::UP.scaled(2),
        through: MovingDirection::UP,
    },
    PawnStep::Capture(MovingDirection::UP_LEFT),
    PawnStep::Capture(MovingDirection::UP_RIGHT),
];

const BLACK_PAWN_STEPS: [PawnStep; 4] = mirror(WHITE_PAWN_STEPS);

const fn mirror(steps: [PawnStep; 4]) -> [PawnStep; 4] {
    let mut table = steps;
    let mut index = 0usize;

    while index < 4 {
        table[index] = match steps[index] {
            PawnStep::Advance(direction) => PawnStep::Advance(direction.flip_rank()),
            PawnStep::DoubleAdvance { direction, through } => PawnStep::DoubleAdvance {
                direction: direction.flip_rank(),
                through: through.flip_rank(),
            },
            PawnStep::Capture(direction) => PawnStep::Capture(direction.flip_rank()),
        };
        index += 1;
    }

    table
}

#[inline]
pub fn pawn_steps(team: Team) -> &'static [PawnStep; 4] {
    match team {
        Team::White => &WHITE_PAWN_STEPS,
        Team::Black => &BLACK_PAWN_STEPS,
    }
}
