use chess_core::{Board, Color};
use chess_engine::{ChessAi, Outcome};

// Without promotion or repetition rules a material-dead game can
// shuffle pieces forever, so the demo stops after a fixed ply budget.
const MAX_PLIES: u32 = 120;

fn main() {
    let ai = ChessAi::default();
    let mut board = Board::initial();
    let mut side = Color::White;

    println!("self-play at depth {}\n", ai.depth());
    println!("{}\n", board);

    for ply in 1..=MAX_PLIES {
        match ai.make_move(&board, side) {
            Ok(result) => match result.outcome {
                Outcome::Move {
                    notation,
                    board: next,
                } => {
                    println!(
                        "{:>3}. {:?} plays {} (eval {})",
                        ply, side, notation, result.evaluation
                    );
                    board = next;
                    println!("{}\n", board);
                    side = side.opposite();
                }
                Outcome::Stalemate => {
                    println!("stalemate");
                    return;
                }
                Outcome::Checkmate { winner } => {
                    println!("checkmate, {:?} wins", winner);
                    return;
                }
            },
            Err(err) => {
                eprintln!("engine fault: {err}");
                std::process::exit(1);
            }
        }
    }

    println!("stopping after {MAX_PLIES} plies");
}
