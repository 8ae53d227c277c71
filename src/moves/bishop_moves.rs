use crate::moves::movement_rule::MovementRule;
use crate::position::moving_direction::DIAGONAL_DIRECTIONS;

pub const BISHOP_RULE: MovementRule = MovementRule::sliding(&DIAGONAL_DIRECTIONS);
