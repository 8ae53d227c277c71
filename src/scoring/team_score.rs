//! Per-team material totals.
//!
//! Sums `PieceState::point_with` over the live board. The board situation
//! used for the doubled-pawn check is derived from the same mapping, so every
//! piece on the board takes part in the file count.

use std::collections::HashMap;

use crate::board::board_situation::BoardSituation;
use crate::pieces::chess_types::Team;
use crate::pieces::piece_state::PieceState;
use crate::position::square::Square;
use crate::scoring::point_table::PointTable;

pub fn team_score(pieces: &HashMap<Square, PieceState>, team: Team, table: &PointTable) -> f64 {
    let board = BoardSituation::from_pieces(pieces);
    sum_team(pieces, team, &board, table)
}

fn sum_team(
    pieces: &HashMap<Square, PieceState>,
    team: Team,
    board: &BoardSituation,
    table: &PointTable,
) -> f64 {
    pieces
        .values()
        .filter(|piece| piece.team().is_same_team(team))
        .map(|piece| piece.point_with(board, table))
        .sum()
}

/// Both teams' totals computed from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBoard {
    pub white: f64,
    pub black: f64,
}

impl ScoreBoard {
    pub fn of(pieces: &HashMap<Square, PieceState>, table: &PointTable) -> Self {
        let board = BoardSituation::from_pieces(pieces);
        Self {
            white: sum_team(pieces, Team::White, &board, table),
            black: sum_team(pieces, Team::Black, &board, table),
        }
    }

    #[inline]
    pub fn score_of(&self, team: Team) -> f64 {
        match team {
            Team::White => self.white,
            Team::Black => self.black,
        }
    }

    /// The team with the higher total, or `None` on a tie.
    pub fn winning_team(&self) -> Option<Team> {
        if self.white > self.black {
            Some(Team::White)
        } else if self.black > self.white {
            Some(Team::Black)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{team_score, ScoreBoard};
    use crate::pieces::chess_types::Team;
    use crate::pieces::piece_state::PieceState;
    use crate::position::square::Square;
    use crate::scoring::point_table::PointTable;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    fn mapping(pieces: &[PieceState]) -> HashMap<Square, PieceState> {
        pieces.iter().map(|piece| (piece.square(), *piece)).collect()
    }

    #[test]
    fn doubled_pawns_are_halved_individually() {
        let pieces = mapping(&[
            PieceState::pawn(sq("B2"), Team::White),
            PieceState::pawn(sq("B4"), Team::White),
            PieceState::pawn(sq("B5"), Team::White),
            PieceState::pawn(sq("C2"), Team::White),
        ]);
        assert_eq!(team_score(&pieces, Team::White, &PointTable::default()), 2.5);
        assert_eq!(team_score(&pieces, Team::Black, &PointTable::default()), 0.0);
    }

    #[test]
    fn enemy_pieces_on_the_file_do_not_double() {
        let pieces = mapping(&[
            PieceState::pawn(sq("E4"), Team::White),
            PieceState::pawn(sq("E5"), Team::Black),
            PieceState::queen(sq("D8"), Team::Black),
        ]);
        let scores = ScoreBoard::of(&pieces, &PointTable::default());
        assert_eq!(scores.white, 1.0);
        assert_eq!(scores.black, 10.0);
        assert_eq!(scores.score_of(Team::Black), 10.0);
        assert_eq!(scores.winning_team(), Some(Team::Black));
    }

    #[test]
    fn equal_material_is_a_tie() {
        let pieces = mapping(&[
            PieceState::king(sq("E1"), Team::White),
            PieceState::king(sq("E8"), Team::Black),
        ]);
        assert_eq!(ScoreBoard::of(&pieces, &PointTable::default()).winning_team(), None);
    }
}
