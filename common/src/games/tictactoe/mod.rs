mod board;
mod engine;
mod error;
mod line_generator;
mod settings;
mod types;

pub use board::available_cells;
pub use engine::GameEngine;
pub use error::{ConfigError, InvalidMove, MoveError};
pub use line_generator::{generate_lines, validate_dimensions};
pub use settings::{DEFAULT_BOARD_SIZE, DEFAULT_MIN_RUN, TicTacToeConfig};
pub use types::{Cell, GameStatus, Line, Move, MoveOutcome, Player};
