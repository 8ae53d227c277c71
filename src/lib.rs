//! Crate root module declarations for the chess rules core.
//!
//! Exposes the coordinate system, the read-only board situation, per-piece
//! movement rules and generation, piece values with their scoring, and the
//! starting-layout initializers. Turn sequencing, persistence and any user
//! interface live in the crates that consume these modules.

pub mod chess_errors;

pub mod position {
    pub mod file_rank;
    pub mod moving_direction;
    pub mod square;
}

pub mod pieces {
    pub mod chess_types;
    pub mod piece_state;
}

pub mod board {
    pub mod board_initializer;
    pub mod board_situation;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod movement_rule;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_pawn;
}

pub mod scoring {
    pub mod point_table;
    pub mod team_score;
}

pub use board::board_initializer::{
    BoardInitializer, PlacementBoardInitializer, StandardBoardInitializer,
};
pub use board::board_situation::BoardSituation;
pub use chess_errors::ChessErrors;
pub use pieces::chess_types::{PieceKind, Team};
pub use pieces::piece_state::PieceState;
pub use position::file_rank::{File, Rank};
pub use position::moving_direction::MovingDirection;
pub use position::square::Square;
pub use scoring::point_table::PointTable;
pub use scoring::team_score::{team_score, ScoreBoard};
