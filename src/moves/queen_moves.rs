use crate::moves::movement_rule::MovementRule;
use crate::position::moving_direction::EVERY_DIRECTION;

pub const QUEEN_RULE: MovementRule = MovementRule::sliding(&EVERY_DIRECTION);
