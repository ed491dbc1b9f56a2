use std::io::Write;
use std::time::Duration;

use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, GameMode, MoveError, TicTacToeGameState};
use common::log;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::render::render;

const HELP: &str = "\
Commands:
  1-9                          place your mark (cells numbered left to right, top to bottom)
  restart                      start a new game
  mode pvp|cpu                 two players, or play X against the computer
  difficulty easy|normal|hard  computer strength
  help                         show this text
  quit                         leave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    Mode(GameMode),
    Difficulty(Difficulty),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Type a cell number 1-9, or 'help'".to_string());
    };
    let arg = parts.next();

    match (head.to_ascii_lowercase().as_str(), arg) {
        ("restart", None) => Ok(Command::Restart),
        ("help", None) => Ok(Command::Help),
        ("quit" | "exit", None) => Ok(Command::Quit),
        ("mode", Some(value)) => value.parse().map(Command::Mode),
        ("difficulty", Some(value)) => value.parse().map(Command::Difficulty),
        (cell, None) => match cell.parse::<usize>() {
            Ok(number @ 1..=9) => Ok(Command::Place(number - 1)),
            _ => Err(format!("Unknown command '{}', type 'help'", line.trim())),
        },
        _ => Err(format!("Unknown command '{}', type 'help'", line.trim())),
    }
}

pub struct Runner {
    state: TicTacToeGameState,
    rng: SessionRng,
    computer_delay: Duration,
}

impl Runner {
    pub fn new(mode: GameMode, difficulty: Difficulty, computer_delay: Duration, rng: SessionRng) -> Self {
        Self {
            state: TicTacToeGameState::new(mode, difficulty),
            rng,
            computer_delay,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        writeln!(out, "{}", render(&self.state))?;
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await? {
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.handle(command, out).await?,
                Err(message) => writeln!(out, "{}", message)?,
            }
            out.flush()?;
        }

        Ok(())
    }

    async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> std::io::Result<()> {
        match command {
            Command::Place(index) => {
                if let Err(e) = self.state.place_mark(index) {
                    match e {
                        MoveError::InvalidMove { index } => {
                            writeln!(out, "Cell {} is already marked", index + 1)?
                        }
                        other => writeln!(out, "{}", other)?,
                    }
                    return Ok(());
                }
                if self.state.is_computer_turn() {
                    writeln!(out, "{}", render(&self.state))?;
                    out.flush()?;
                    self.play_computer(out).await?;
                }
            }
            Command::Restart => self.state.restart(),
            Command::Mode(mode) => self.state.set_mode(mode),
            Command::Difficulty(difficulty) => self.state.set_difficulty(difficulty),
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        }
        writeln!(out, "{}", render(&self.state))
    }

    async fn play_computer<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        if !self.computer_delay.is_zero() {
            tokio::time::sleep(self.computer_delay).await;
        }
        match self.state.computer_move(&mut self.rng) {
            Ok(index) => writeln!(out, "Computer plays cell {}", index + 1),
            Err(e) => {
                log!("Computer could not move: {}", e);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::games::tictactoe::{GameOutcome, Mark, Player};

    fn runner(mode: GameMode, difficulty: Difficulty) -> Runner {
        Runner::new(mode, difficulty, Duration::ZERO, SessionRng::new(42))
    }

    async fn run_script(runner: &mut Runner, script: &str) -> String {
        let mut out = Vec::new();
        runner.run(script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("5"), Ok(Command::Place(4)));
        assert_eq!(parse_command(" 1 "), Ok(Command::Place(0)));
        assert_eq!(parse_command("RESTART"), Ok(Command::Restart));
        assert_eq!(parse_command("mode cpu"), Ok(Command::Mode(GameMode::UserVsComputer)));
        assert_eq!(parse_command("difficulty hard"), Ok(Command::Difficulty(Difficulty::Hard)));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert!(parse_command("0").is_err());
        assert!(parse_command("10").is_err());
        assert!(parse_command("").is_err());
        assert!(parse_command("mode").is_err());
        assert!(parse_command("difficulty insane").is_err());
    }

    #[tokio::test]
    async fn test_two_humans_play_to_a_win() {
        let mut runner = runner(GameMode::UserVsUser, Difficulty::Normal);
        let output = run_script(&mut runner, "1\n4\n2\n5\n3\n9\nquit\n").await;
        assert_eq!(runner.state().outcome, GameOutcome::Win(Player::X));
        assert!(output.contains("X wins!"));
        assert!(output.contains("Game is already over"));
    }

    #[tokio::test]
    async fn test_computer_answers_corner_with_center() {
        let mut runner = runner(GameMode::UserVsComputer, Difficulty::Hard);
        let output = run_script(&mut runner, "1\n").await;
        assert!(output.contains("Computer plays cell 5"));
        assert_eq!(runner.state().board.get(4), Some(Mark::O));
        assert_eq!(runner.state().current_player, Player::X);
    }

    #[tokio::test]
    async fn test_occupied_cell_is_reported() {
        let mut runner = runner(GameMode::UserVsUser, Difficulty::Easy);
        let output = run_script(&mut runner, "5\n5\n").await;
        assert!(output.contains("Cell 5 is already marked"));
        assert_eq!(runner.state().current_player, Player::O);
    }

    #[tokio::test]
    async fn test_mode_switch_restarts() {
        let mut runner = runner(GameMode::UserVsUser, Difficulty::Easy);
        run_script(&mut runner, "5\nmode cpu\n").await;
        assert_eq!(runner.state().mode, GameMode::UserVsComputer);
        assert!(runner.state().board.empty_cells().len() == 9);
    }

    #[tokio::test]
    async fn test_quit_stops_reading() {
        let mut runner = runner(GameMode::UserVsUser, Difficulty::Easy);
        run_script(&mut runner, "quit\n5\n").await;
        assert_eq!(runner.state().board.empty_cells().len(), 9);
    }
}
