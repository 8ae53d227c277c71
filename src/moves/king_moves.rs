use crate::moves::movement_rule::MovementRule;
use crate::position::moving_direction::EVERY_DIRECTION;

pub const KING_RULE: MovementRule = MovementRule::stepping(&EVERY_DIRECTION);
