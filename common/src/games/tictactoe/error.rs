use super::types::{Cell, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroBoardSize,
    ZeroMinRun,
    MinRunExceedsBoardSize { min_run: usize, board_size: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ZeroBoardSize => write!(f, "Board size must be positive"),
            ConfigError::ZeroMinRun => write!(f, "Minimum run must be positive"),
            ConfigError::MinRunExceedsBoardSize { min_run, board_size } => write!(
                f,
                "Minimum run ({}) cannot exceed board size ({})",
                min_run, board_size
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    GameFinished { winner: Player },
    OutOfBounds { cell: Cell, board_size: usize },
    CellClaimed { cell: Cell, owner: Player },
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::GameFinished { winner } => {
                write!(f, "Game is already over, {} won", winner)
            }
            InvalidMove::OutOfBounds { cell, board_size } => write!(
                f,
                "Cell {} is outside the {}x{} board",
                cell, board_size, board_size
            ),
            InvalidMove::CellClaimed { cell, owner } => {
                write!(f, "Cell {} is already claimed by {}", cell, owner)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfTurn { expected: Player, actual: Player },
    InvalidMove(InvalidMove),
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfTurn { expected, actual } => {
                write!(f, "Not {}'s turn, {} moves next", actual, expected)
            }
            MoveError::InvalidMove(reason) => write!(f, "Invalid move: {}", reason),
        }
    }
}

impl std::error::Error for MoveError {}

impl From<InvalidMove> for MoveError {
    fn from(reason: InvalidMove) -> Self {
        MoveError::InvalidMove(reason)
    }
}
