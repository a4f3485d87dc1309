use crate::board::Board;
use crate::piece::{Color, Piece, PieceType};
use crate::position::Position;

pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
// Orthogonals before diagonals; generation order is part of the
// contract since it drives search tie-breaks.
const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A piece displacement plus capture flag. The algebraic notation is
/// derived from it on demand; the check suffix is appended by the
/// legality filter, never here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub piece: Piece,
    pub is_capture: bool,
}

impl Move {
    /// Short algebraic form: piece letter (source file for capturing
    /// pawns), 'x' on captures, destination square.
    pub fn notation(&self) -> String {
        if self.piece.kind == PieceType::Pawn {
            if self.is_capture {
                format!("{}x{}", self.from.file(), self.to)
            } else {
                self.to.to_string()
            }
        } else {
            let mut notation = String::from(self.piece.kind.symbol());
            if self.is_capture {
                notation.push('x');
            }
            notation.push_str(&self.to.to_string());
            notation
        }
    }
}

/// Every move for `side` that obeys piece-movement rules alone,
/// ignoring whether the mover's king is left in check. Origin squares
/// are visited row-major from a8; per piece the offset/direction
/// tables above fix the order, so output order is reproducible.
pub fn pseudo_legal_moves(board: &Board, side: Color) -> Vec<(Board, Move)> {
    let mut successors = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let from = Position { row, col };
            let piece = match board.get(from) {
                Some(piece) if piece.color == side => piece,
                _ => continue,
            };
            match piece.kind {
                PieceType::Pawn => pawn_moves(board, from, piece, &mut successors),
                PieceType::Knight => {
                    step_moves(board, from, piece, &KNIGHT_JUMPS, &mut successors)
                }
                PieceType::King => step_moves(board, from, piece, &KING_STEPS, &mut successors),
                PieceType::Bishop => slide_moves(board, from, piece, &DIAGONAL, &mut successors),
                PieceType::Rook => slide_moves(board, from, piece, &ORTHOGONAL, &mut successors),
                PieceType::Queen => {
                    slide_moves(board, from, piece, &QUEEN_DIRECTIONS, &mut successors)
                }
            }
        }
    }
    successors
}

/// The legality filter: drops pseudo-legal successors that leave the
/// mover's own king in check and appends '+' to moves that put the
/// opponent in check. Relative order of survivors is unchanged.
pub fn legal_moves(board: &Board, side: Color) -> Vec<(Board, String)> {
    let pseudo = pseudo_legal_moves(board, side);
    let pseudo_count = pseudo.len();

    let legal: Vec<(Board, String)> = pseudo
        .into_iter()
        .filter(|(successor, _)| !successor.is_in_check(side))
        .map(|(successor, mv)| {
            let mut notation = mv.notation();
            if successor.is_in_check(side.opposite()) {
                notation.push('+');
            }
            (successor, notation)
        })
        .collect();

    log::trace!(
        "{:?}: {} legal of {} pseudo-legal moves",
        side,
        legal.len(),
        pseudo_count
    );
    legal
}

fn record(
    board: &Board,
    from: Position,
    to: Position,
    piece: Piece,
    is_capture: bool,
    out: &mut Vec<(Board, Move)>,
) {
    out.push((
        board.apply(from, to),
        Move {
            from,
            to,
            piece,
            is_capture,
        },
    ));
}

/// Single-step movers (knight, king): target must be empty or hold an
/// enemy piece.
fn step_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    offsets: &[(i8, i8)],
    out: &mut Vec<(Board, Move)>,
) {
    for &(drow, dcol) in offsets {
        let to = match from.offset(drow, dcol) {
            Some(to) => to,
            None => continue,
        };
        match board.get(to) {
            None => record(board, from, to, piece, false, out),
            Some(target) if target.color != piece.color => {
                record(board, from, to, piece, true, out)
            }
            Some(_) => {}
        }
    }
}

/// Sliding movers (bishop, rook, queen): walk each ray until blocked;
/// an enemy piece is captured and stops the slide.
fn slide_moves(
    board: &Board,
    from: Position,
    piece: Piece,
    directions: &[(i8, i8)],
    out: &mut Vec<(Board, Move)>,
) {
    for &(drow, dcol) in directions {
        let mut cursor = from;
        while let Some(to) = cursor.offset(drow, dcol) {
            match board.get(to) {
                None => {
                    record(board, from, to, piece, false, out);
                    cursor = to;
                }
                Some(target) => {
                    if target.color != piece.color {
                        record(board, from, to, piece, true, out);
                    }
                    break;
                }
            }
        }
    }
}

/// Pawns are the asymmetric case: forward pushes never capture and the
/// diagonal steps only capture. No en-passant and no promotion; a pawn
/// on the last rank simply stays a pawn.
fn pawn_moves(board: &Board, from: Position, piece: Piece, out: &mut Vec<(Board, Move)>) {
    let forward = if piece.color.is_white() { -1 } else { 1 };
    let start_row = if piece.color.is_white() { 6 } else { 1 };

    if let Some(one) = from.offset(forward, 0) {
        if board.get(one).is_none() {
            record(board, from, one, piece, false, out);

            if from.row == start_row {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.get(two).is_none() {
                        record(board, from, two, piece, false, out);
                    }
                }
            }
        }
    }

    for dcol in [-1, 1] {
        if let Some(to) = from.offset(forward, dcol) {
            if let Some(target) = board.get(to) {
                if target.color != piece.color {
                    record(board, from, to, piece, true, out);
                }
            }
        }
    }
}
