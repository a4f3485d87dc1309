// Core chess board model and move machinery
pub mod board;
pub mod moves;
pub mod piece;
pub mod position;

// Re-export main types for convenience
pub use board::Board;
pub use moves::{legal_moves, pseudo_legal_moves, Move};
pub use piece::{Color, Piece, PieceType};
pub use position::Position;
