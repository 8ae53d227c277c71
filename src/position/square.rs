//! Interned board squares.
//!
//! Every one of the 64 squares exists once in `ALL_SQUARES`, a table built at
//! compile time in file-major order (`A1, A2, .., A8, B1, .., H8`). Lookups by
//! file and rank, by text, or by translation all resolve to entries of that
//! table, so it is shared freely between threads without synchronization.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::position::file_rank::{File, Rank};
use crate::position::moving_direction::MovingDirection;

/// One of the 64 board positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    file: File,
    rank: Rank,
}

pub const ALL_SQUARES: [Square; 64] = generate_squares();

const fn generate_squares() -> [Square; 64] {
    let mut table = [Square {
        file: File::A,
        rank: Rank::One,
    }; 64];
    let mut index = 0usize;

    while index < 64 {
        table[index] = Square {
            file: File::ALL[index / 8],
            rank: Rank::ALL[index % 8],
        };
        index += 1;
    }

    table
}

impl Square {
    #[inline]
    pub const fn of(file: File, rank: Rank) -> Square {
        ALL_SQUARES[file.index() * 8 + rank.index()]
    }

    /// Iterate the interned table in file-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        ALL_SQUARES.into_iter()
    }

    #[inline]
    pub const fn file(self) -> File {
        self.file
    }

    #[inline]
    pub const fn rank(self) -> Rank {
        self.rank
    }

    /// The square one `direction` step away, or `None` when that step leaves
    /// the board.
    #[inline]
    pub const fn translate(self, direction: MovingDirection) -> Option<Square> {
        let file = match self.file.add(direction.file_delta) {
            Some(file) => file,
            None => return None,
        };
        let rank = match self.rank.add(direction.rank_delta) {
            Some(rank) => rank,
            None => return None,
        };
        Some(Square::of(file, rank))
    }

    #[inline]
    pub const fn can_move_by(self, direction: MovingDirection) -> bool {
        self.translate(direction).is_some()
    }

    /// Signed `target.file - self.file`.
    #[inline]
    pub const fn file_difference(self, target: Square) -> i8 {
        self.file.difference(target.file)
    }

    /// Signed `target.rank - self.rank`.
    #[inline]
    pub const fn rank_difference(self, target: Square) -> i8 {
        self.rank.difference(target.rank)
    }

    #[inline]
    pub fn is_same_file(self, other: Square) -> bool {
        self.file == other.file
    }

    #[inline]
    pub fn is_same_rank(self, rank: Rank) -> bool {
        self.rank == rank
    }

    /// Upper-case coordinate name such as `"B2"`.
    pub fn name(self) -> String {
        format!("{}{}", self.file, self.rank)
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    /// Parse a two character token such as `"b2"` or `"B2"`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut chars = input.chars();
        let parsed = match (chars.next(), chars.next(), chars.next()) {
            (Some(file), Some(rank), None) => File::from_char(file).zip(Rank::from_char(rank)),
            _ => None,
        };

        parsed
            .map(|(file, rank)| Square::of(file, rank))
            .ok_or_else(|| ChessErrors::InvalidPosition(input.to_owned()))
    }
}

impl TryFrom<&str> for Square {
    type Error = ChessErrors;

    fn try_from(input: &str) -> Result<Self, Self::Error> {
        input.parse()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::{Square, ALL_SQUARES};
    use crate::chess_errors::ChessErrors;
    use crate::position::file_rank::{File, Rank};
    use crate::position::moving_direction::MovingDirection;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn lookup_by_file_and_rank_returns_the_table_entry() {
        for square in ALL_SQUARES {
            assert_eq!(Square::of(square.file(), square.rank()), square);
        }
        assert_eq!(Square::all().count(), 64);
        assert_eq!(ALL_SQUARES[0], Square::of(File::A, Rank::One));
        assert_eq!(ALL_SQUARES[63], Square::of(File::H, Rank::Eight));
    }

    #[test]
    fn parsing_is_case_insensitive() {
        assert_eq!(sq("b2"), sq("B2"));
        assert_eq!(sq("c3"), Square::of(File::C, Rank::Three));
        assert_eq!(sq("h8").name(), "H8");
        assert_eq!(sq("a1").to_string(), "A1");
    }

    #[test]
    fn bad_tokens_are_invalid_positions() {
        for token in ["", "B", "B9", "I2", "B22", "2B", " B2"] {
            assert_eq!(
                token.parse::<Square>(),
                Err(ChessErrors::InvalidPosition(token.to_owned())),
                "token {token:?}"
            );
        }
    }

    #[test]
    fn translate_stops_at_the_board_edge() {
        assert_eq!(sq("B2").translate(MovingDirection::UP_RIGHT), Some(sq("C3")));
        assert_eq!(sq("A1").translate(MovingDirection::LEFT), None);
        assert_eq!(sq("H8").translate(MovingDirection::UP), None);
        assert_eq!(
            sq("G7").translate(MovingDirection::KNIGHT_UP_RIGHT),
            None
        );
        assert!(sq("D4").can_move_by(MovingDirection::KNIGHT_LEFT_DOWN));
        assert!(!sq("A4").can_move_by(MovingDirection::KNIGHT_LEFT_DOWN));
    }

    #[test]
    fn differences_and_file_checks() {
        assert_eq!(sq("B2").file_difference(sq("E7")), 3);
        assert_eq!(sq("B2").rank_difference(sq("E7")), 5);
        assert_eq!(sq("E7").rank_difference(sq("B2")), -5);
        assert!(sq("B2").is_same_file(sq("B7")));
        assert!(!sq("B2").is_same_file(sq("C2")));
        assert!(sq("B2").is_same_rank(Rank::Two));
    }
}
