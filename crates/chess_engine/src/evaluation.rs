use chess_core::{Board, Color, PieceType, Position};

// Classic material values in pawns. The king scores zero: both sides
// always have one, and mate is handled by the search, not the
// evaluator.
const PAWN_VALUE: i32 = 1;
const KNIGHT_VALUE: i32 = 3;
const BISHOP_VALUE: i32 = 3;
const ROOK_VALUE: i32 = 5;
const QUEEN_VALUE: i32 = 9;
const KING_VALUE: i32 = 0;

/// Material balance from White's perspective: positive favors White,
/// negative favors Black. Purely material by design; no positional
/// terms, mobility, or king safety.
pub fn evaluate_position(board: &Board) -> i32 {
    let mut score = 0;
    for row in 0..8 {
        for col in 0..8 {
            if let Some(piece) = board.get(Position { row, col }) {
                let value = piece_value(piece.kind);
                if piece.color == Color::White {
                    score += value;
                } else {
                    score -= value;
                }
            }
        }
    }
    score
}

pub fn piece_value(kind: PieceType) -> i32 {
    match kind {
        PieceType::Pawn => PAWN_VALUE,
        PieceType::Knight => KNIGHT_VALUE,
        PieceType::Bishop => BISHOP_VALUE,
        PieceType::Rook => ROOK_VALUE,
        PieceType::Queen => QUEEN_VALUE,
        PieceType::King => KING_VALUE,
    }
}
