use common::games::tictactoe::{Mark, TicTacToeGameState};

/// Draws the board with empty cells showing the number a player types
/// to claim them (1-9).
pub fn render_board(state: &TicTacToeGameState) -> String {
    let cells: Vec<String> = state
        .board
        .cells()
        .iter()
        .enumerate()
        .map(|(index, mark)| match mark {
            Mark::X => "X".to_string(),
            Mark::O => "O".to_string(),
            Mark::Empty => (index + 1).to_string(),
        })
        .collect();

    let rows: Vec<String> = cells
        .chunks(3)
        .map(|row| format!(" {} | {} | {}", row[0], row[1], row[2]))
        .collect();
    rows.join("\n---+---+---\n")
}

pub fn render(state: &TicTacToeGameState) -> String {
    let mut out = format!("\n{}\n\n{}", render_board(state), state.status_text());
    if let Some(line) = state.winning_line() {
        let cells: Vec<String> = line.iter().map(|index| (index + 1).to_string()).collect();
        out.push_str(&format!(" (line {})", cells.join("-")));
    }
    out.push_str(&format!("\n[{} | {}]\n", state.mode, state.difficulty));
    out
}
