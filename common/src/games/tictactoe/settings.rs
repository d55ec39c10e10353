use serde::{Deserialize, Serialize};

use crate::config::Validate;
use super::engine::GameEngine;
use super::error::ConfigError;
use super::line_generator::validate_dimensions;
use super::types::Player;

pub const DEFAULT_BOARD_SIZE: usize = 7;
pub const DEFAULT_MIN_RUN: usize = 4;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct TicTacToeConfig {
    pub board_size: usize,
    pub min_run: usize,
    #[serde(default = "default_first_player")]
    pub first_player: Player,
    #[serde(default)]
    pub debug: bool,
}

fn default_first_player() -> Player {
    Player::First
}

impl TicTacToeConfig {
    pub fn check(&self) -> Result<(), ConfigError> {
        validate_dimensions(self.board_size, self.min_run)
    }

    pub fn create_engine(&self) -> Result<GameEngine, ConfigError> {
        GameEngine::with_first_player(self.board_size, self.min_run, self.first_player)
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        self.check().map_err(|e| e.to_string())
    }
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            min_run: DEFAULT_MIN_RUN,
            first_player: Player::First,
            debug: false,
        }
    }
}
