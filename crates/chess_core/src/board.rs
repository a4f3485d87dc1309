use std::fmt;

use crate::moves::{DIAGONAL, KNIGHT_JUMPS, ORTHOGONAL};
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;

/// Back-rank piece order from the a-file, White's point of view.
const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8x8 grid of optional pieces, row 0 = rank 8.
///
/// Boards are plain values: applying a move produces a new board and
/// never touches the input. Two boards are equal iff every cell
/// matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting position with White on ranks 1-2.
    pub fn initial() -> Self {
        Self::initial_for(Color::White)
    }

    /// Starting position with `bottom`'s pieces on ranks 1-2. For
    /// `Color::Black` the board is the 180-degree view, so the king
    /// and queen files are mirrored.
    pub fn initial_for(bottom: Color) -> Self {
        let top = bottom.opposite();
        let mut order = BACK_RANK;
        if bottom == Color::Black {
            order.reverse();
        }

        let mut board = Self::empty();
        for (col, &kind) in order.iter().enumerate() {
            let col = col as u8;
            board.set(Position { row: 0, col }, Some(Piece::new(kind, top)));
            board.set(Position { row: 7, col }, Some(Piece::new(kind, bottom)));
        }
        for col in 0..8 {
            board.set(Position { row: 1, col }, Some(Piece::new(PieceType::Pawn, top)));
            board.set(Position { row: 6, col }, Some(Piece::new(PieceType::Pawn, bottom)));
        }
        board
    }

    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, cell: Option<Piece>) {
        self.squares[pos.row as usize][pos.col as usize] = cell;
    }

    /// New board with the cell at `from` moved to `to` and `from`
    /// cleared. Performs no legality checking; that is the move
    /// generator's job.
    pub fn apply(&self, from: Position, to: Position) -> Board {
        let mut next = *self;
        next.set(to, next.get(from));
        next.set(from, None);
        next
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        for row in 0..8 {
            for col in 0..8 {
                let pos = Position { row, col };
                if self.get(pos) == Some(Piece::new(PieceType::King, color)) {
                    return Some(pos);
                }
            }
        }
        None
    }

    /// Whether `color`'s king is attacked. A board with no king of
    /// that color reports `false` rather than erroring; callers treat
    /// such boards as malformed but tolerable.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = match self.king_position(color) {
            Some(pos) => pos,
            None => return false,
        };
        let enemy = color.opposite();

        for &(drow, dcol) in &KNIGHT_JUMPS {
            if let Some(pos) = king.offset(drow, dcol) {
                if self.get(pos) == Some(Piece::new(PieceType::Knight, enemy)) {
                    return true;
                }
            }
        }

        if self.ray_hits(king, &ORTHOGONAL, enemy, PieceType::Rook)
            || self.ray_hits(king, &DIAGONAL, enemy, PieceType::Bishop)
        {
            return true;
        }

        // Enemy pawns attack the king from the two forward diagonals.
        let forward = if color.is_white() { -1 } else { 1 };
        for dcol in [-1, 1] {
            if let Some(pos) = king.offset(forward, dcol) {
                if self.get(pos) == Some(Piece::new(PieceType::Pawn, enemy)) {
                    return true;
                }
            }
        }

        false
    }

    /// Scans each ray in `directions` for the first occupied square
    /// being an enemy `slider` or queen.
    fn ray_hits(
        &self,
        from: Position,
        directions: &[(i8, i8)],
        enemy: Color,
        slider: PieceType,
    ) -> bool {
        for &(drow, dcol) in directions {
            let mut cursor = from;
            while let Some(next) = cursor.offset(drow, dcol) {
                match self.get(next) {
                    None => cursor = next,
                    Some(piece) => {
                        if piece.color == enemy
                            && (piece.kind == slider || piece.kind == PieceType::Queen)
                        {
                            return true;
                        }
                        break;
                    }
                }
            }
        }
        false
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let glyph = match self.get(Position { row, col }) {
                    None => '.',
                    Some(piece) => {
                        let letter = match piece.kind {
                            PieceType::Pawn => 'p',
                            PieceType::Knight => 'n',
                            PieceType::Bishop => 'b',
                            PieceType::Rook => 'r',
                            PieceType::Queen => 'q',
                            PieceType::King => 'k',
                        };
                        if piece.color.is_white() {
                            letter.to_ascii_uppercase()
                        } else {
                            letter
                        }
                    }
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(name: &str) -> Position {
        Position::from_algebraic(name).unwrap()
    }

    #[test]
    fn initial_position_layout() {
        let board = Board::initial();
        assert_eq!(
            board.get(at("e1")),
            Some(Piece::new(PieceType::King, Color::White))
        );
        assert_eq!(
            board.get(at("d8")),
            Some(Piece::new(PieceType::Queen, Color::Black))
        );
        assert_eq!(
            board.get(at("a2")),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );
        assert_eq!(board.get(at("e4")), None);
    }

    #[test]
    fn flipped_initial_mirrors_king_and_queen() {
        let board = Board::initial_for(Color::Black);
        // 180-degree view: Black on ranks 1-2, king and queen swapped.
        assert_eq!(
            board.get(at("d1")),
            Some(Piece::new(PieceType::King, Color::Black))
        );
        assert_eq!(
            board.get(at("e1")),
            Some(Piece::new(PieceType::Queen, Color::Black))
        );
        assert_eq!(
            board.get(at("d8")),
            Some(Piece::new(PieceType::King, Color::White))
        );
    }

    #[test]
    fn apply_is_pure() {
        let board = Board::initial();
        let next = board.apply(at("e2"), at("e4"));

        assert_eq!(board, Board::initial());
        assert_eq!(next.get(at("e2")), None);
        assert_eq!(
            next.get(at("e4")),
            Some(Piece::new(PieceType::Pawn, Color::White))
        );
        assert_ne!(board, next);
    }

    #[test]
    fn missing_king_is_not_in_check() {
        let board = Board::empty();
        assert!(!board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));
    }

    #[test]
    fn detects_knight_check() {
        let mut board = Board::empty();
        board.set(at("e4"), Some(Piece::new(PieceType::King, Color::White)));
        board.set(at("f6"), Some(Piece::new(PieceType::Knight, Color::Black)));
        assert!(board.is_in_check(Color::White));

        // A friendly knight on the same square is no threat.
        board.set(at("f6"), Some(Piece::new(PieceType::Knight, Color::White)));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn detects_sliding_checks_and_blockers() {
        let mut board = Board::empty();
        board.set(at("e1"), Some(Piece::new(PieceType::King, Color::White)));
        board.set(at("e8"), Some(Piece::new(PieceType::Rook, Color::Black)));
        assert!(board.is_in_check(Color::White));

        // Any piece on the ray blocks the check.
        board.set(at("e5"), Some(Piece::new(PieceType::Pawn, Color::White)));
        assert!(!board.is_in_check(Color::White));

        let mut board = Board::empty();
        board.set(at("e1"), Some(Piece::new(PieceType::King, Color::White)));
        board.set(at("a5"), Some(Piece::new(PieceType::Queen, Color::Black)));
        assert!(board.is_in_check(Color::White));
        board.set(at("c3"), Some(Piece::new(PieceType::Bishop, Color::Black)));
        // The bishop now delivers the diagonal check instead.
        assert!(board.is_in_check(Color::White));
        board.set(at("a5"), None);
        board.set(at("d2"), Some(Piece::new(PieceType::Pawn, Color::White)));
        assert!(!board.is_in_check(Color::White));
    }

    #[test]
    fn detects_pawn_checks_by_direction() {
        let mut board = Board::empty();
        board.set(at("e4"), Some(Piece::new(PieceType::King, Color::White)));
        board.set(at("d5"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        assert!(board.is_in_check(Color::White));

        // A black pawn behind the king cannot attack it.
        let mut board = Board::empty();
        board.set(at("e4"), Some(Piece::new(PieceType::King, Color::White)));
        board.set(at("d3"), Some(Piece::new(PieceType::Pawn, Color::Black)));
        assert!(!board.is_in_check(Color::White));

        let mut board = Board::empty();
        board.set(at("e5"), Some(Piece::new(PieceType::King, Color::Black)));
        board.set(at("f4"), Some(Piece::new(PieceType::Pawn, Color::White)));
        assert!(board.is_in_check(Color::Black));
    }
}
