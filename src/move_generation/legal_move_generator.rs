//! Per-piece legal target generation.
//!
//! Dispatches on the piece kind to the matching rule table and walks it
//! against the board situation. `move_to` legality and the movable-position
//! listing both go through `generate_movable_positions`, so a move is legal
//! exactly when its target appears in the generated list.

use crate::board::board_situation::BoardSituation;
use crate::move_generation::legal_move_shared::generate_directional_targets;
use crate::move_generation::legal_moves_pawn::generate_pawn_targets;
use crate::moves::bishop_moves::BISHOP_RULE;
use crate::moves::king_moves::KING_RULE;
use crate::moves::knight_moves::KNIGHT_RULE;
use crate::moves::queen_moves::QUEEN_RULE;
use crate::moves::rook_moves::ROOK_RULE;
use crate::pieces::chess_types::PieceKind;
use crate::pieces::piece_state::PieceState;
use crate::position::square::Square;

/// Upper bound on targets for any piece (queen in the centre of an empty board).
const MAX_TARGETS: usize = 27;

pub fn generate_movable_positions(piece: &PieceState, board: &BoardSituation) -> Vec<Square> {
    let mut out = Vec::with_capacity(MAX_TARGETS);
    let (from, team) = (piece.square(), piece.team());

    let rule = match piece.kind() {
        PieceKind::Pawn => None,
        PieceKind::Knight => Some(&KNIGHT_RULE),
        PieceKind::Bishop => Some(&BISHOP_RULE),
        PieceKind::Rook => Some(&ROOK_RULE),
        PieceKind::Queen => Some(&QUEEN_RULE),
        PieceKind::King => Some(&KING_RULE),
    };

    match rule {
        Some(rule) => generate_directional_targets(from, team, rule, board, &mut out),
        None => generate_pawn_targets(from, team, board, &mut out),
    }

    log::trace!(
        "{} {} on {} can reach {} squares",
        team,
        piece.kind(),
        from,
        out.len()
    );
    out
}

#[inline]
pub fn is_legal_target(piece: &PieceState, target: Square, board: &BoardSituation) -> bool {
    generate_movable_positions(piece, board).contains(&target)
}
