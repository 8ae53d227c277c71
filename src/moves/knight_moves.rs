use crate::moves::movement_rule::MovementRule;
use crate::position::moving_direction::KNIGHT_DIRECTIONS;

pub const KNIGHT_RULE: MovementRule = MovementRule::stepping(&KNIGHT_DIRECTIONS);

#[cfg(test)]
mod tests {
    use crate::board::board_situation::BoardSituation;
    use crate::pieces::chess_types::Team;
    use crate::pieces::piece_state::PieceState;
    use crate::position::square::Square;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn knight_from_d4_has_eight_targets() {
        let knight = PieceState::knight(sq("D4"), Team::White);
        assert_eq!(knight.movable_positions(&BoardSituation::default()).len(), 8);
    }

    #[test]
    fn knight_jumps_over_blockers_but_not_onto_allies() {
        let knight = PieceState::knight(sq("B1"), Team::White);
        let board: BoardSituation = [
            (sq("B1"), Team::White),
            (sq("B2"), Team::White),
            (sq("C2"), Team::White),
            (sq("D2"), Team::White),
            (sq("C3"), Team::Black),
        ]
        .into_iter()
        .collect();
        let mut movable = knight.movable_positions(&board);
        movable.sort();

        assert_eq!(movable, vec![sq("A3"), sq("C3")]);
        assert!(knight.move_to(sq("D2"), &board).is_err());
    }
}
