//! Pawn target generation.

use crate::board::board_situation::BoardSituation;
use crate::moves::pawn_moves::{pawn_steps, PawnStep};
use crate::pieces::chess_types::Team;
use crate::position::square::Square;

pub fn generate_pawn_targets(
    from: Square,
    team: Team,
    board: &BoardSituation,
    out: &mut Vec<Square>,
) {
    for &step in pawn_steps(team) {
        let Some(target) = from.translate(step.direction()) else {
            continue;
        };

        let legal = match step {
            PawnStep::Advance(_) => board.can_move(target),
            PawnStep::DoubleAdvance { through, .. } => {
                from.is_same_rank(team.pawn_rank())
                    && from
                        .translate(through)
                        .is_some_and(|middle| board.can_move(middle))
                    && board.can_move(target)
            }
            PawnStep::Capture(_) => board.can_attack(target, team),
        };

        if legal {
            out.push(target);
        }
    }
}
