mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, Probe, CELL_COUNT};
pub use bot_controller::{
    DRAW_SCORE, O_WIN_SCORE, ScoredMove, X_WIN_SCORE, calculate_minimax_move,
    calculate_random_move, minimax, score_moves, select_move,
};
pub use error::MoveError;
pub use game_state::TicTacToeGameState;
pub use types::{Difficulty, GameMode, GameOutcome, LINES, Mark, Player};
pub use win_detector::{check_win, evaluate, winning_line};
