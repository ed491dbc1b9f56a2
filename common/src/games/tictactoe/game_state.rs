use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::select_move;
use super::error::MoveError;
use super::types::{Difficulty, GameMode, GameOutcome, Player};
use super::win_detector::{evaluate, winning_line};

/// Everything one match needs, owned by the front end and passed into the
/// rules and the move selector explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub outcome: GameOutcome,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub computer_player: Player,
    pub last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: GameOutcome::InProgress,
            mode,
            difficulty,
            computer_player: Player::O,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }

        self.board.apply_move(index, self.current_player)?;
        self.last_move = Some(index);
        log!("{} marks cell {}", self.current_player, index);

        self.outcome = evaluate(&self.board);
        match self.outcome {
            GameOutcome::InProgress => self.current_player = self.current_player.next(),
            GameOutcome::Win(winner) => log!("{} wins", winner),
            GameOutcome::Draw => log!("Game ended in a draw"),
        }

        Ok(self.outcome)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::UserVsComputer
            && !self.outcome.is_over()
            && self.current_player == self.computer_player
    }

    /// Picks a move for the side to move at the configured difficulty and
    /// plays it. Returns the chosen cell.
    pub fn computer_move(&mut self, rng: &mut SessionRng) -> Result<usize, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        let index = select_move(&self.board, self.current_player, self.difficulty, rng)?;
        self.place_mark(index)?;
        Ok(index)
    }

    pub fn restart(&mut self) {
        *self = Self::new(self.mode, self.difficulty);
        log!("New game: {}, difficulty {}", self.mode, self.difficulty);
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.restart();
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        winning_line(&self.board).map(|(_, line)| line)
    }

    pub fn status_text(&self) -> String {
        match self.outcome {
            GameOutcome::InProgress => format!("{}'s turn", self.current_player),
            GameOutcome::Win(winner) => format!("{} wins!", winner),
            GameOutcome::Draw => "Draw!".to_string(),
        }
    }
}
