use crate::moves::movement_rule::MovementRule;
use crate::position::moving_direction::ORTHOGONAL_DIRECTIONS;

pub const ROOK_RULE: MovementRule = MovementRule::sliding(&ORTHOGONAL_DIRECTIONS);
