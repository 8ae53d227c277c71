//! Read-only occupancy snapshot.
//!
//! A `BoardSituation` maps occupied squares to the team standing on them.
//! Turn-management code builds a fresh one from the live board before each
//! query; pieces only ever read it.

use std::collections::HashMap;

use crate::pieces::chess_types::Team;
use crate::pieces::piece_state::PieceState;
use crate::position::square::Square;

/// More than this many same-team occupants on one file counts as doubled.
const DUPLICATE_THRESHOLD: usize = 1;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSituation {
    board_state: HashMap<Square, Team>,
}

impl BoardSituation {
    pub fn of(board_state: HashMap<Square, Team>) -> Self {
        Self { board_state }
    }

    /// Snapshot the occupancy of a full square to piece mapping.
    pub fn from_pieces(pieces: &HashMap<Square, PieceState>) -> Self {
        pieces
            .iter()
            .map(|(square, piece)| (*square, piece.team()))
            .collect()
    }

    #[inline]
    pub fn team_at(&self, square: Square) -> Option<Team> {
        self.board_state.get(&square).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.board_state.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.board_state.is_empty()
    }

    /// `target` is empty.
    #[inline]
    pub fn can_move(&self, target: Square) -> bool {
        self.team_at(target).is_none()
    }

    /// `target` holds a piece of the other team.
    #[inline]
    pub fn can_attack(&self, target: Square, team: Team) -> bool {
        self.team_at(target)
            .is_some_and(|target_team| !team.is_same_team(target_team))
    }

    /// `target` is empty or holds a piece of the other team.
    #[inline]
    pub fn can_move_or_attack(&self, target: Square, team: Team) -> bool {
        self.team_at(target)
            .map_or(true, |target_team| !team.is_same_team(target_team))
    }

    /// Whether `team` has more than one occupant on `square`'s file. The
    /// queried square is counted like any other.
    pub fn exists_same_piece_in_same_file(&self, square: Square, team: Team) -> bool {
        self.board_state
            .iter()
            .filter(|(_, occupant)| team.is_same_team(**occupant))
            .filter(|(occupied, _)| square.is_same_file(**occupied))
            .count()
            > DUPLICATE_THRESHOLD
    }
}

impl FromIterator<(Square, Team)> for BoardSituation {
    fn from_iter<I: IntoIterator<Item = (Square, Team)>>(iter: I) -> Self {
        Self::of(iter.into_iter().collect())
    }
}
