//! Configurable material values.
//!
//! The defaults are the classic teaching values: pawn 1, knight 2.5,
//! bishop 3, rook 5, queen 9 and a king worth nothing (losing it ends the
//! game, so it never enters the material count). Hosts can override any of
//! them in code with the `with_*` setters or load a table through serde;
//! missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::pieces::chess_types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointTable {
    pub pawn: f64,
    pub knight: f64,
    pub bishop: f64,
    pub rook: f64,
    pub queen: f64,
    pub king: f64,
    /// Multiplier applied to a pawn that shares its file with a teammate.
    pub doubled_pawn_factor: f64,
}

impl Default for PointTable {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 2.5,
            bishop: 3.0,
            rook: 5.0,
            queen: 9.0,
            king: 0.0,
            doubled_pawn_factor: 0.5,
        }
    }
}

impl PointTable {
    #[inline]
    pub const fn value_of(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => self.king,
        }
    }

    pub fn with_pawn(mut self, value: f64) -> Self {
        self.pawn = value;
        self
    }

    pub fn with_knight(mut self, value: f64) -> Self {
        self.knight = value;
        self
    }

    pub fn with_bishop(mut self, value: f64) -> Self {
        self.bishop = value;
        self
    }

    pub fn with_rook(mut self, value: f64) -> Self {
        self.rook = value;
        self
    }

    pub fn with_queen(mut self, value: f64) -> Self {
        self.queen = value;
        self
    }

    pub fn with_king(mut self, value: f64) -> Self {
        self.king = value;
        self
    }

    pub fn with_doubled_pawn_factor(mut self, factor: f64) -> Self {
        self.doubled_pawn_factor = factor;
        self
    }
}
