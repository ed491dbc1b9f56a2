#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    InvalidMove { index: usize },
    OutOfBounds { index: usize },
    NoLegalMove,
    GameOver,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::InvalidMove { index } => write!(f, "Cell {} is already marked", index),
            MoveError::OutOfBounds { index } => write!(f, "Cell {} is out of bounds", index),
            MoveError::NoLegalMove => write!(f, "No legal move left on the board"),
            MoveError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
