use std::collections::HashMap;

use crate::debug_log;
use super::error::{ConfigError, InvalidMove, MoveError};
use super::line_generator::generate_lines;
use super::types::{Cell, GameStatus, Line, Move, MoveOutcome, Player};

#[derive(Debug, Clone)]
pub struct GameEngine {
    board_size: usize,
    min_run: usize,
    first_player: Player,
    lines: Vec<Line>,
    owners: HashMap<Cell, Player>,
    moves: HashMap<Player, Vec<Cell>>,
    history: Vec<Move>,
    current_player: Player,
    winner: Option<(Player, Line)>,
}

impl GameEngine {
    pub fn new(board_size: usize, min_run: usize) -> Result<Self, ConfigError> {
        Self::with_first_player(board_size, min_run, Player::First)
    }

    pub fn with_first_player(
        board_size: usize,
        min_run: usize,
        first_player: Player,
    ) -> Result<Self, ConfigError> {
        let lines = generate_lines(board_size, min_run)?;
        debug_log!(
            "Generated {} winning lines for a {}x{} board, run of {}",
            lines.len(),
            board_size,
            board_size,
            min_run
        );

        Ok(Self {
            board_size,
            min_run,
            first_player,
            lines,
            owners: HashMap::new(),
            moves: HashMap::new(),
            history: Vec::new(),
            current_player: first_player,
            winner: None,
        })
    }

    /// Starts a new game on the same board, keeping the generated lines.
    pub fn reset(&mut self) {
        self.owners.clear();
        self.moves.clear();
        self.history.clear();
        self.current_player = self.first_player;
        self.winner = None;
    }

    pub fn apply_move(&mut self, cell: Cell, player: Player) -> Result<MoveOutcome, MoveError> {
        if let Some((winner, _)) = &self.winner {
            return Err(InvalidMove::GameFinished { winner: *winner }.into());
        }

        if !cell.in_bounds(self.board_size) {
            return Err(InvalidMove::OutOfBounds {
                cell,
                board_size: self.board_size,
            }
            .into());
        }

        if let Some(&owner) = self.owners.get(&cell) {
            return Err(InvalidMove::CellClaimed { cell, owner }.into());
        }

        if player != self.current_player {
            return Err(MoveError::OutOfTurn {
                expected: self.current_player,
                actual: player,
            });
        }

        self.owners.insert(cell, player);
        self.moves.entry(player).or_default().push(cell);
        self.history.push(Move { cell, player });

        if let Some(line) = self.find_winning_line(player) {
            debug_log!("{} wins with {}", player, line);
            self.winner = Some((player, line.clone()));
            return Ok(MoveOutcome::Won {
                winner: player,
                line,
            });
        }

        self.current_player = player.opponent();
        debug_log!("Current player {}", self.current_player);
        Ok(MoveOutcome::Continue {
            next: self.current_player,
        })
    }

    /// First line in generation order that `player` owns completely.
    fn find_winning_line(&self, player: Player) -> Option<Line> {
        if self.moves(player).len() < self.min_run {
            return None;
        }

        self.lines
            .iter()
            .find(|line| {
                line.cells()
                    .iter()
                    .all(|cell| self.owners.get(cell) == Some(&player))
            })
            .cloned()
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner.as_ref().map(|(player, _)| *player)
    }

    pub fn winning_line(&self) -> Option<&Line> {
        self.winner.as_ref().map(|(_, line)| line)
    }

    pub fn status(&self) -> GameStatus {
        if self.winner.is_some() {
            GameStatus::Finished
        } else {
            GameStatus::InProgress
        }
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn owner(&self, cell: Cell) -> Option<Player> {
        self.owners.get(&cell).copied()
    }

    pub fn moves(&self, player: Player) -> &[Cell] {
        self.moves.get(&player).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn min_run(&self) -> usize {
        self.min_run
    }

    pub fn is_board_full(&self) -> bool {
        self.owners.len() == self.board_size * self.board_size
    }
}
