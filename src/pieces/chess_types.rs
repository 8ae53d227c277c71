//! Teams and piece kinds.

use std::fmt;

use crate::position::file_rank::Rank;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    pub fn is_same_team(self, other: Team) -> bool {
        self == other
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    /// Rank step a pawn of this team advances by.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Team::White => 1,
            Team::Black => -1,
        }
    }

    /// Rank this team's pawns start on, the only rank allowing a double step.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Team::White => Rank::Two,
            Team::Black => Rank::Seven,
        }
    }

    #[inline]
    pub const fn back_rank(self) -> Rank {
        match self {
            Team::White => Rank::One,
            Team::Black => Rank::Eight,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Whether the piece repeats its direction vectors until blocked.
    #[inline]
    pub const fn is_sliding(self) -> bool {
        matches!(self, PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::{PieceKind, Team};
    use crate::position::file_rank::Rank;

    #[test]
    fn teams_mirror_each_other() {
        assert_eq!(Team::White.opposite(), Team::Black);
        assert_eq!(Team::White.forward(), -Team::Black.forward());
        assert_eq!(Team::White.pawn_rank(), Rank::Two);
        assert_eq!(Team::Black.pawn_rank(), Rank::Seven);
        assert!(Team::Black.is_same_team(Team::Black));
        assert!(!Team::Black.is_same_team(Team::White));
    }

    #[test]
    fn only_long_range_pieces_slide() {
        let sliding: Vec<PieceKind> = PieceKind::ALL
            .into_iter()
            .filter(|kind| kind.is_sliding())
            .collect();
        assert_eq!(
            sliding,
            vec![PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen]
        );
    }
}
