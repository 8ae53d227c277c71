//! Immutable piece values.
//!
//! A `PieceState` is a piece kind, its team and the square it stands on.
//! Moving never mutates a piece: `move_to` returns a new value bound to the
//! destination and the caller swaps it into its own board mapping.

use crate::board::board_situation::BoardSituation;
use crate::chess_errors::ChessErrors;
use crate::move_generation::legal_move_generator::{generate_movable_positions, is_legal_target};
use crate::pieces::chess_types::{PieceKind, Team};
use crate::position::square::Square;
use crate::scoring::point_table::PointTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceState {
    kind: PieceKind,
    team: Team,
    square: Square,
}

impl PieceState {
    #[inline]
    pub const fn new(kind: PieceKind, square: Square, team: Team) -> Self {
        Self { kind, team, square }
    }

    pub const fn pawn(square: Square, team: Team) -> Self {
        Self::new(PieceKind::Pawn, square, team)
    }

    pub const fn knight(square: Square, team: Team) -> Self {
        Self::new(PieceKind::Knight, square, team)
    }

    pub const fn bishop(square: Square, team: Team) -> Self {
        Self::new(PieceKind::Bishop, square, team)
    }

    pub const fn rook(square: Square, team: Team) -> Self {
        Self::new(PieceKind::Rook, square, team)
    }

    pub const fn queen(square: Square, team: Team) -> Self {
        Self::new(PieceKind::Queen, square, team)
    }

    pub const fn king(square: Square, team: Team) -> Self {
        Self::new(PieceKind::King, square, team)
    }

    #[inline]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn team(&self) -> Team {
        self.team
    }

    #[inline]
    pub const fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn is_king(&self) -> bool {
        self.kind == PieceKind::King
    }

    #[inline]
    pub fn is_pawn(&self) -> bool {
        self.kind == PieceKind::Pawn
    }

    /// Try to move to `target`, returning the relocated piece.
    ///
    /// Fails with `ChessErrors::IllegalMove` when `target` is off this piece's
    /// direction set, the path is blocked, or the destination may not be
    /// entered (an ally, or a pawn's forward capture or empty diagonal).
    pub fn move_to(
        &self,
        target: Square,
        board: &BoardSituation,
    ) -> Result<PieceState, ChessErrors> {
        if !is_legal_target(self, target, board) {
            log::debug!(
                "rejected {} {} move {} -> {}",
                self.team,
                self.kind,
                self.square,
                target
            );
            return Err(ChessErrors::IllegalMove {
                kind: self.kind,
                from: self.square,
                to: target,
            });
        }

        Ok(Self::new(self.kind, target, self.team))
    }

    /// Every square `move_to` would accept, recomputed on each call.
    pub fn movable_positions(&self, board: &BoardSituation) -> Vec<Square> {
        generate_movable_positions(self, board)
    }

    /// Score under the default point table.
    pub fn point(&self, board: &BoardSituation) -> f64 {
        self.point_with(board, &PointTable::default())
    }

    /// Score under `table`. A pawn sharing its file with another piece of its
    /// team is scaled by the table's doubled-pawn factor.
    pub fn point_with(&self, board: &BoardSituation, table: &PointTable) -> f64 {
        let base = table.value_of(self.kind);
        if self.is_pawn() && board.exists_same_piece_in_same_file(self.square, self.team) {
            return base * table.doubled_pawn_factor;
        }
        base
    }
}
