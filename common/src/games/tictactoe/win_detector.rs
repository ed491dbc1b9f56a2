use super::board::Board;
use super::types::{GameOutcome, LINES, Mark, Player};

pub fn check_win(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    LINES
        .iter()
        .any(|line| line.iter().all(|&index| board.get(index) == Some(mark)))
}

/// First completed line in `LINES` order, with its owner.
pub fn winning_line(board: &Board) -> Option<(Player, [usize; 3])> {
    let cells = board.cells();
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = cells[a];
        if mark != Mark::Empty && mark == cells[b] && mark == cells[c] {
            mark.player().map(|player| (player, [a, b, c]))
        } else {
            None
        }
    })
}

pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((player, _)) = winning_line(board) {
        return GameOutcome::Win(player);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
