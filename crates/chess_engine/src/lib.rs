pub mod ai;
pub mod evaluation;
pub mod search;

pub use ai::{ChessAi, DEFAULT_DEPTH};
pub use evaluation::evaluate_position;
pub use search::{search_best_move, EngineError, Outcome, SearchResult, INF};
