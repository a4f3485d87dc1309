use std::fmt;

use chess_core::{legal_moves, Board, Color};
use thiserror::Error;

use crate::evaluation::evaluate_position;

/// Score bound standing in for infinity. Strictly dominates any
/// material sum, so mate outscores every real position.
pub const INF: i32 = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The search ended without a move even though the evaluation was
    /// finite. Unreachable from a legal position; surfacing it instead
    /// of guessing keeps the fault visible.
    #[error("search chose no move but the evaluation {0} does not indicate mate")]
    NoMoveChosen(i32),
}

/// What the engine recommends for the side to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Play this move, reaching `board`. The notation carries a '+'
    /// suffix when the move gives check.
    Move { notation: String, board: Board },
    /// The side to move has no legal moves and is not in check.
    Stalemate,
    /// The game is decided against the side to move; `winner` took it.
    Checkmate { winner: Color },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Move { notation, .. } => f.write_str(notation),
            Outcome::Stalemate => f.write_str("$"),
            Outcome::Checkmate {
                winner: Color::White,
            } => f.write_str("white win"),
            Outcome::Checkmate {
                winner: Color::Black,
            } => f.write_str("black win"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation from White's perspective; `INF`/`-INF` mean a won or
    /// lost line for White.
    pub evaluation: i32,
    pub outcome: Outcome,
}

/// What a search node settled on, before the root maps it onto an
/// [`Outcome`]. `chosen` stays `None` at depth-0 leaves and at mated
/// nodes, where the evaluation alone is the answer.
struct Line {
    eval: i32,
    chosen: Option<Chosen>,
}

enum Chosen {
    Move { notation: String, board: Board },
    Stalemate,
}

/// Fixed-depth minimax with alpha-beta pruning.
///
/// `depth` is in plies. An absent move in the result maps to
/// [`Outcome::Checkmate`] when the evaluation is `±INF`; any other
/// absent-move case is reported as [`EngineError::NoMoveChosen`].
pub fn search_best_move(
    board: &Board,
    side: Color,
    depth: u8,
) -> Result<SearchResult, EngineError> {
    log::debug!("searching depth {} for {:?}", depth, side);
    let line = alpha_beta(board, side, depth, -INF, INF);

    let outcome = match line.chosen {
        Some(Chosen::Move { notation, board }) => Outcome::Move { notation, board },
        Some(Chosen::Stalemate) => Outcome::Stalemate,
        None if line.eval == -INF => Outcome::Checkmate {
            winner: Color::Black,
        },
        None if line.eval == INF => Outcome::Checkmate {
            winner: Color::White,
        },
        None => return Err(EngineError::NoMoveChosen(line.eval)),
    };

    log::debug!("chose {} (eval {})", outcome, line.eval);
    Ok(SearchResult {
        evaluation: line.eval,
        outcome,
    })
}

/// One search node. White maximizes, Black minimizes; the two mirror
/// branches of the reference algorithm collapse into the `maximizing`
/// flag. Ties keep the first move reaching the extremal value (strict
/// comparisons), so the generation order fully determines the choice.
fn alpha_beta(board: &Board, side: Color, depth: u8, mut alpha: i32, mut beta: i32) -> Line {
    if depth == 0 {
        return Line {
            eval: evaluate_position(board),
            chosen: None,
        };
    }

    let successors = legal_moves(board, side);
    if successors.is_empty() {
        if board.is_in_check(side) {
            // Mated: worst possible score for the side to move.
            return Line {
                eval: if side.is_white() { -INF } else { INF },
                chosen: None,
            };
        }
        return Line {
            eval: 0,
            chosen: Some(Chosen::Stalemate),
        };
    }

    let maximizing = side.is_white();
    let mut best_eval = if maximizing { -INF } else { INF };
    let mut best: Option<Chosen> = None;

    for (successor, notation) in successors {
        let reply = alpha_beta(&successor, side.opposite(), depth - 1, alpha, beta);

        let improves = if maximizing {
            reply.eval > best_eval
        } else {
            reply.eval < best_eval
        };
        if improves {
            best_eval = reply.eval;
            best = Some(Chosen::Move {
                notation,
                board: successor,
            });
        }

        if maximizing {
            alpha = alpha.max(best_eval);
        } else {
            beta = beta.min(best_eval);
        }
        if beta <= alpha {
            break;
        }
    }

    Line {
        eval: best_eval,
        chosen: best,
    }
}
