//! Direction walking shared by every non-pawn piece.

use crate::board::board_situation::BoardSituation;
use crate::moves::movement_rule::MovementRule;
use crate::pieces::chess_types::Team;
use crate::position::square::Square;

/// Append every square `rule` reaches from `from` for a piece of `team`.
///
/// Each direction is followed while the next square is empty (once for
/// stepping pieces). The first occupied square ends the ray and is included
/// only when it holds an enemy.
pub fn generate_directional_targets(
    from: Square,
    team: Team,
    rule: &MovementRule,
    board: &BoardSituation,
    out: &mut Vec<Square>,
) {
    for &direction in rule.directions {
        let mut cursor = from.translate(direction);

        while let Some(target) = cursor {
            if !board.can_move_or_attack(target, team) {
                break;
            }
            out.push(target);

            if !rule.sliding || !board.can_move(target) {
                break;
            }
            cursor = target.translate(direction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_directional_targets;
    use crate::board::board_situation::BoardSituation;
    use crate::moves::movement_rule::MovementRule;
    use crate::pieces::chess_types::Team;
    use crate::position::moving_direction::MovingDirection;
    use crate::position::square::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    const UP_ONLY: [MovingDirection; 1] = [MovingDirection::UP];

    #[test]
    fn stepping_rule_emits_one_square_per_direction() {
        let mut out = Vec::new();
        generate_directional_targets(
            sq("A1"),
            Team::White,
            &MovementRule::stepping(&UP_ONLY),
            &BoardSituation::default(),
            &mut out,
        );
        assert_eq!(out, vec![sq("A2")]);
    }

    #[test]
    fn sliding_rule_runs_to_the_edge_or_the_first_occupant() {
        let rule = MovementRule::sliding(&UP_ONLY);
        let mut out = Vec::new();
        let empty = BoardSituation::default();
        generate_directional_targets(sq("A5"), Team::White, &rule, &empty, &mut out);
        assert_eq!(out, vec![sq("A6"), sq("A7"), sq("A8")]);

        let board: BoardSituation = [(sq("A3"), Team::Black)].into_iter().collect();
        out.clear();
        generate_directional_targets(sq("A1"), Team::White, &rule, &board, &mut out);
        assert_eq!(out, vec![sq("A2"), sq("A3")]);

        out.clear();
        generate_directional_targets(sq("A1"), Team::Black, &rule, &board, &mut out);
        assert_eq!(out, vec![sq("A2")]);
    }
}
