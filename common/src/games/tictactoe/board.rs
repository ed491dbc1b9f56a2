use std::ops::{Deref, DerefMut};

use super::error::MoveError;
use super::types::{Mark, Player};

pub const CELL_COUNT: usize = 9;

/// 3x3 board, row-major: index `row * 3 + col`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<(), MoveError> {
        match self.cells.get(index) {
            None => Err(MoveError::OutOfBounds { index }),
            Some(Mark::Empty) => {
                self.cells[index] = player.mark();
                Ok(())
            }
            Some(_) => Err(MoveError::InvalidMove { index }),
        }
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Places `player` on an empty cell for as long as the returned guard
    /// lives. The cell is emptied again when the guard drops.
    pub fn probe(&mut self, index: usize, player: Player) -> Option<Probe<'_>> {
        if self.cells.get(index) != Some(&Mark::Empty) {
            return None;
        }
        self.cells[index] = player.mark();
        Some(Probe { board: self, index })
    }
}

pub struct Probe<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for Probe<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Probe<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = Mark::Empty;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!board.is_full());
    }

    #[test]
    fn test_apply_move_on_occupied_cell_leaves_board_unchanged() {
        let mut board = Board::new();
        board.apply_move(4, Player::X).unwrap();
        let before = board;

        assert_eq!(board.apply_move(4, Player::O), Err(MoveError::InvalidMove { index: 4 }));
        assert_eq!(board, before);
        assert_eq!(board.apply_move(4, Player::X), Err(MoveError::InvalidMove { index: 4 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Player::X), Err(MoveError::OutOfBounds { index: 9 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_empty_cells_shrink_by_one_per_move() {
        let mut board = Board::new();
        let mut player = Player::X;
        for index in [4, 0, 8, 2, 6, 3, 5, 7, 1] {
            let before = board.empty_cells().len();
            board.apply_move(index, player).unwrap();
            assert_eq!(board.empty_cells().len(), before - 1);
            assert!(!board.empty_cells().contains(&index));
            player = player.next();
        }
        assert!(board.is_full());
        assert_eq!(board.count(Mark::X), 5);
        assert_eq!(board.count(Mark::O), 4);
    }

    #[test]
    fn test_empty_cells_are_ascending() {
        let mut board = Board::new();
        board.apply_move(3, Player::X).unwrap();
        board.apply_move(0, Player::O).unwrap();
        assert_eq!(board.empty_cells(), vec![1, 2, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_probe_reverts_on_drop() {
        let mut board = Board::new();
        board.apply_move(0, Player::X).unwrap();
        let before = board;
        {
            let probe = board.probe(5, Player::O).unwrap();
            assert_eq!(probe.get(5), Some(Mark::O));
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_nested_probes_revert() {
        let mut board = Board::new();
        {
            let mut outer = board.probe(1, Player::X).unwrap();
            {
                let inner = outer.probe(2, Player::O).unwrap();
                assert_eq!(inner.empty_cells().len(), 7);
            }
            assert_eq!(outer.get(2), Some(Mark::Empty));
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_probe_rejects_occupied_cell() {
        let mut board = Board::new();
        board.apply_move(0, Player::X).unwrap();
        assert!(board.probe(0, Player::O).is_none());
        assert!(board.probe(12, Player::O).is_none());
        assert_eq!(board.get(0), Some(Mark::X));
    }
}
