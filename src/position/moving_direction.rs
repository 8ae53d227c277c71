//! Single-step direction vectors.
//!
//! A `MovingDirection` is one atomic step `(file_delta, rank_delta)`. Stepping
//! pieces apply it once; sliding pieces repeat it until they are blocked or
//! leave the board. Directions are board-relative: `UP` always means toward
//! rank 8, whichever team is moving.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MovingDirection {
    pub file_delta: i8,
    pub rank_delta: i8,
}

impl MovingDirection {
    pub const UP: MovingDirection = MovingDirection::new(0, 1);
    pub const DOWN: MovingDirection = MovingDirection::new(0, -1);
    pub const LEFT: MovingDirection = MovingDirection::new(-1, 0);
    pub const RIGHT: MovingDirection = MovingDirection::new(1, 0);
    pub const UP_LEFT: MovingDirection = MovingDirection::new(-1, 1);
    pub const UP_RIGHT: MovingDirection = MovingDirection::new(1, 1);
    pub const DOWN_LEFT: MovingDirection = MovingDirection::new(-1, -1);
    pub const DOWN_RIGHT: MovingDirection = MovingDirection::new(1, -1);

    pub const KNIGHT_UP_LEFT: MovingDirection = MovingDirection::new(-1, 2);
    pub const KNIGHT_UP_RIGHT: MovingDirection = MovingDirection::new(1, 2);
    pub const KNIGHT_RIGHT_UP: MovingDirection = MovingDirection::new(2, 1);
    pub const KNIGHT_RIGHT_DOWN: MovingDirection = MovingDirection::new(2, -1);
    pub const KNIGHT_DOWN_RIGHT: MovingDirection = MovingDirection::new(1, -2);
    pub const KNIGHT_DOWN_LEFT: MovingDirection = MovingDirection::new(-1, -2);
    pub const KNIGHT_LEFT_DOWN: MovingDirection = MovingDirection::new(-2, -1);
    pub const KNIGHT_LEFT_UP: MovingDirection = MovingDirection::new(-2, 1);

    #[inline]
    pub const fn new(file_delta: i8, rank_delta: i8) -> Self {
        Self {
            file_delta,
            rank_delta,
        }
    }

    /// The same vector applied `times` times, used for the pawn double step.
    #[inline]
    pub const fn scaled(self, times: i8) -> Self {
        Self::new(self.file_delta * times, self.rank_delta * times)
    }

    /// Mirror across the horizontal axis (white's forward becomes black's).
    #[inline]
    pub const fn flip_rank(self) -> Self {
        Self::new(self.file_delta, -self.rank_delta)
    }
}

pub const ORTHOGONAL_DIRECTIONS: [MovingDirection; 4] = [
    MovingDirection::UP,
    MovingDirection::DOWN,
    MovingDirection::LEFT,
    MovingDirection::RIGHT,
];

pub const DIAGONAL_DIRECTIONS: [MovingDirection; 4] = [
    MovingDirection::UP_LEFT,
    MovingDirection::UP_RIGHT,
    MovingDirection::DOWN_LEFT,
    MovingDirection::DOWN_RIGHT,
];

pub const EVERY_DIRECTION: [MovingDirection; 8] = [
    MovingDirection::UP,
    MovingDirection::DOWN,
    MovingDirection::LEFT,
    MovingDirection::RIGHT,
    MovingDirection::UP_LEFT,
    MovingDirection::UP_RIGHT,
    MovingDirection::DOWN_LEFT,
    MovingDirection::DOWN_RIGHT,
];

pub const KNIGHT_DIRECTIONS: [MovingDirection; 8] = [
    MovingDirection::KNIGHT_UP_LEFT,
    MovingDirection::KNIGHT_UP_RIGHT,
    MovingDirection::KNIGHT_RIGHT_UP,
    MovingDirection::KNIGHT_RIGHT_DOWN,
    MovingDirection::KNIGHT_DOWN_RIGHT,
    MovingDirection::KNIGHT_DOWN_LEFT,
    MovingDirection::KNIGHT_LEFT_DOWN,
    MovingDirection::KNIGHT_LEFT_UP,
];
