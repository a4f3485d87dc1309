use chess_core::{Board, Color};

use crate::search::{search_best_move, EngineError, SearchResult};

/// Reference search depth in plies.
pub const DEFAULT_DEPTH: u8 = 4;
const MIN_DEPTH: u8 = 1; // depth 0 would yield an evaluation but no move
const MAX_DEPTH: u8 = 8;

/// Fixed-depth engine front end: hand it a board and a side to move,
/// get back the chosen move (or the mate/stalemate verdict). Holds no
/// game history; every call works on the snapshot it is given.
#[derive(Debug, Clone, Copy)]
pub struct ChessAi {
    depth: u8,
}

impl ChessAi {
    pub fn new(depth: u8) -> Self {
        ChessAi {
            depth: depth.clamp(MIN_DEPTH, MAX_DEPTH),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn make_move(&self, board: &Board, side: Color) -> Result<SearchResult, EngineError> {
        search_best_move(board, side, self.depth)
    }
}

impl Default for ChessAi {
    fn default() -> Self {
        ChessAi {
            depth: DEFAULT_DEPTH,
        }
    }
}
