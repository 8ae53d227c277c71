//! Errors used throughout the rules core.
//!
//! `ChessErrors` is the single error type returned by coordinate parsing and
//! move validation. Off-board arithmetic is not an error: square translation
//! reports it as `None` so move generation can prune candidates cheaply.
//!
//! Usage guidelines:
//! - Functions in the core return `Result<..., ChessErrors>` for expected
//!   failure modes (bad user input, illegal moves).
//! - Nothing is mutated before an error is returned, so callers can simply
//!   reject the request and ask for another one.

use thiserror::Error;

use crate::pieces::chess_types::PieceKind;
use crate::position::square::Square;

/// Unified error type for the rules core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A coordinate token did not name one of the 64 squares.
    ///
    /// Payload: the original token, for diagnostics.
    #[error("invalid position: {0:?}")]
    InvalidPosition(String),

    /// The requested move breaks the piece's movement rules, runs through an
    /// occupied square, or ends on a square the piece may not enter.
    #[error("illegal move: {kind} cannot move from {from} to {to}")]
    IllegalMove {
        kind: PieceKind,
        from: Square,
        to: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::pieces::chess_types::PieceKind;
    use crate::position::square::Square;

    #[test]
    fn messages_name_the_offending_input() {
        let invalid = ChessErrors::InvalidPosition("Z9".to_owned());
        assert_eq!(invalid.to_string(), "invalid position: \"Z9\"");

        let from: Square = "B2".parse().expect("B2 should parse");
        let to: Square = "B5".parse().expect("B5 should parse");
        let illegal = ChessErrors::IllegalMove {
            kind: PieceKind::Pawn,
            from,
            to,
        };
        assert_eq!(
            illegal.to_string(),
            "illegal move: pawn cannot move from B2 to B5"
        );
    }
}
