//! Starting layouts.
//!
//! A `BoardInitializer` hands setup code a fresh square to piece mapping.
//! The rules core never asks which initializer produced the mapping it
//! reasons about, so test layouts can replace the standard one freely.

use std::collections::HashMap;

use crate::pieces::chess_types::{PieceKind, Team};
use crate::pieces::piece_state::PieceState;
use crate::position::file_rank::File;
use crate::position::square::Square;

pub trait BoardInitializer {
    fn create(&self) -> HashMap<Square, PieceState>;
}

/// Back-rank order from file A to file H.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The regular 32-piece opening layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardInitializer;

impl BoardInitializer for StandardBoardInitializer {
    fn create(&self) -> HashMap<Square, PieceState> {
        let mut board = HashMap::with_capacity(32);

        for team in Team::ALL {
            for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
                let back = Square::of(file, team.back_rank());
                board.insert(back, PieceState::new(kind, back, team));

                let pawn = Square::of(file, team.pawn_rank());
                board.insert(pawn, PieceState::pawn(pawn, team));
            }
        }

        log::debug!("standard layout placed {} pieces", board.len());
        board
    }
}

/// A layout given piece by piece. A later piece on an already used square
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct PlacementBoardInitializer {
    pieces: Vec<PieceState>,
}

impl PlacementBoardInitializer {
    pub fn new(pieces: impl IntoIterator<Item = PieceState>) -> Self {
        Self {
            pieces: pieces.into_iter().collect(),
        }
    }

    pub fn with_piece(mut self, piece: PieceState) -> Self {
        self.pieces.push(piece);
        self
    }
}

impl BoardInitializer for PlacementBoardInitializer {
    fn create(&self) -> HashMap<Square, PieceState> {
        let board: HashMap<Square, PieceState> = self
            .pieces
            .iter()
            .map(|piece| (piece.square(), *piece))
            .collect();

        log::debug!("custom layout placed {} pieces", board.len());
        board
    }
}
