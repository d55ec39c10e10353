use std::fmt;

use serde::{Deserialize, Serialize};

/// Board coordinate, zero-based from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn in_bounds(&self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Player::First => 'X',
            Player::Second => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A run of cells that wins the game when one player owns all of them.
///
/// Cells are kept in ascending `(row, col)` order, so two lines covering the
/// same cells compare equal no matter which pass produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Line {
    cells: Vec<Cell>,
}

impl Line {
    pub fn new(mut cells: Vec<Cell>) -> Self {
        cells.sort();
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.binary_search(cell).is_ok()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self.cells.iter().map(|c| c.to_string()).collect();
        write!(f, "[{}]", cells.join(", "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub cell: Cell,
    pub player: Player,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// What the host should do after a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { next: Player },
    Won { winner: Player, line: Line },
}
