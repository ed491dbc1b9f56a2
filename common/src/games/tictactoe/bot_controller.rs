use crate::games::SessionRng;

use super::board::Board;
use super::error::MoveError;
use super::types::{Difficulty, Player};
use super::win_detector::{check_win, evaluate};

/// Scores are from a fixed perspective: O maximizes, X minimizes.
pub const O_WIN_SCORE: i32 = 10;
pub const X_WIN_SCORE: i32 = -10;
pub const DRAW_SCORE: i32 = 0;

const NORMAL_MINIMAX_PROBABILITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    /// `None` when the position was already terminal.
    pub index: Option<usize>,
    pub score: i32,
}

impl ScoredMove {
    fn terminal(score: i32) -> Self {
        Self { index: None, score }
    }
}

pub fn select_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut SessionRng,
) -> Result<usize, MoveError> {
    if evaluate(board).is_over() {
        return Err(MoveError::NoLegalMove);
    }

    let index = match difficulty {
        Difficulty::Easy => calculate_random_move(board, rng)?,
        Difficulty::Hard => calculate_minimax_move(board, player)?,
        Difficulty::Normal => {
            if rng.chance(NORMAL_MINIMAX_PROBABILITY) {
                crate::log_debug!("Normal difficulty rolled minimax");
                calculate_minimax_move(board, player)?
            } else {
                crate::log_debug!("Normal difficulty rolled random");
                calculate_random_move(board, rng)?
            }
        }
    };

    crate::log_debug!("{} ({}) selects cell {}", player, difficulty, index);
    Ok(index)
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Result<usize, MoveError> {
    let empty_cells = board.empty_cells();
    rng.choose(&empty_cells).copied().ok_or(MoveError::NoLegalMove)
}

pub fn calculate_minimax_move(board: &Board, player: Player) -> Result<usize, MoveError> {
    let mut scratch = *board;
    let best = minimax(&mut scratch, player);
    crate::log_debug!("Minimax for {}: cell {:?}, score {}", player, best.index, best.score);
    best.index.ok_or(MoveError::NoLegalMove)
}

/// Exhaustive search without pruning. Candidates are scanned in ascending
/// cell order and only a strict improvement replaces the current best, so
/// ties go to the lowest index. `board` is restored before returning.
pub fn minimax(board: &mut Board, player: Player) -> ScoredMove {
    if check_win(board, Player::X) {
        return ScoredMove::terminal(X_WIN_SCORE);
    }
    if check_win(board, Player::O) {
        return ScoredMove::terminal(O_WIN_SCORE);
    }

    let candidates = score_children(board, player);
    let mut best: Option<ScoredMove> = None;

    for candidate in candidates {
        let improves = match best {
            None => true,
            Some(current) => match player {
                Player::O => candidate.score > current.score,
                Player::X => candidate.score < current.score,
            },
        };
        if improves {
            best = Some(candidate);
        }
    }

    best.unwrap_or(ScoredMove::terminal(DRAW_SCORE))
}

/// Minimax score of every legal reply for `player`, in ascending cell order.
/// Empty for a terminal position.
pub fn score_moves(board: &Board, player: Player) -> Vec<ScoredMove> {
    if evaluate(board).is_over() {
        return Vec::new();
    }
    let mut scratch = *board;
    score_children(&mut scratch, player)
}

fn score_children(board: &mut Board, player: Player) -> Vec<ScoredMove> {
    let mut moves = Vec::new();
    for index in board.empty_cells() {
        if let Some(mut probe) = board.probe(index, player) {
            let child = minimax(&mut probe, player.next());
            moves.push(ScoredMove {
                index: Some(index),
                score: child.score,
            });
        }
    }
    moves
}
