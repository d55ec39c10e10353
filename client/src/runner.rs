use std::io::{self, BufRead, Write};

use ntoe_common::games::tictactoe::{Cell, GameEngine, Line, MoveError, MoveOutcome, Player};
use ntoe_common::log;

use crate::render::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameResult {
    Won { winner: Player, line: Line },
    Draw,
    Abandoned,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Move { player: Option<Player>, cell: Cell },
    Quit,
}

/// Accepts `row col`, optionally prefixed by the player symbol (`X 0 2`),
/// or `q`/`quit`.
fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts: Vec<&str> = line.split_whitespace().collect();

    if let [single] = parts.as_slice()
        && matches!(single.to_ascii_lowercase().as_str(), "q" | "quit")
    {
        return Ok(Command::Quit);
    }

    let player = match parts.first().map(|p| p.to_ascii_uppercase()) {
        Some(p) if p == "X" => Some(Player::First),
        Some(p) if p == "O" => Some(Player::Second),
        _ => None,
    };
    if player.is_some() {
        parts.remove(0);
    }

    let [row, col] = parts.as_slice() else {
        return Err("Expected a move as `row col`".to_string());
    };
    let row = row
        .parse::<usize>()
        .map_err(|_| format!("Invalid row: {}", row))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("Invalid column: {}", col))?;

    Ok(Command::Move {
        player,
        cell: Cell::new(row, col),
    })
}

/// Drives one game from `input` until somebody wins, the board fills up or
/// the input ends. Rejected moves are reported and the game continues.
pub fn run_game<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    output: &mut W,
    show_coordinates: bool,
) -> io::Result<GameResult> {
    let mut lines = input.lines();

    loop {
        write!(output, "{}", render_board(engine, show_coordinates))?;
        write!(output, "{} to move (row col): ", engine.current_player())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            return Ok(GameResult::Abandoned);
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let (player, cell) = match parse_command(&line) {
            Ok(Command::Quit) => return Ok(GameResult::Abandoned),
            Ok(Command::Move { player, cell }) => {
                (player.unwrap_or_else(|| engine.current_player()), cell)
            }
            Err(message) => {
                writeln!(output, "{}", message)?;
                continue;
            }
        };

        match engine.apply_move(cell, player) {
            Ok(MoveOutcome::Won { winner, line }) => {
                write!(output, "{}", render_board(engine, show_coordinates))?;
                writeln!(output, "{} wins with {}", winner, line)?;
                log!("Game over, {} won with {}", winner, line);
                return Ok(GameResult::Won { winner, line });
            }
            Ok(MoveOutcome::Continue { .. }) if engine.is_board_full() => {
                write!(output, "{}", render_board(engine, show_coordinates))?;
                writeln!(output, "Draw, the board is full")?;
                log!("Game over, draw");
                return Ok(GameResult::Draw);
            }
            Ok(MoveOutcome::Continue { .. }) => {}
            Err(err @ MoveError::OutOfTurn { .. }) => {
                writeln!(output, "Ignored: {}", err)?;
            }
            Err(err @ MoveError::InvalidMove(_)) => {
                writeln!(output, "{}", err)?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(engine: &mut GameEngine, input: &str) -> (GameResult, String) {
        let mut output = Vec::new();
        let result = run_game(engine, Cursor::new(input), &mut output, false).unwrap();
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_parse_plain_move() {
        assert_eq!(
            parse_command("1 2"),
            Ok(Command::Move {
                player: None,
                cell: Cell::new(1, 2)
            })
        );
    }

    #[test]
    fn test_parse_move_with_player() {
        assert_eq!(
            parse_command("o 0 1"),
            Ok(Command::Move {
                player: Some(Player::Second),
                cell: Cell::new(0, 1)
            })
        );
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!(parse_command(" quit "), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_command("1").is_err());
        assert!(parse_command("a b").is_err());
        assert!(parse_command("1 2 3").is_err());
    }

    #[test]
    fn test_first_player_wins_top_row() {
        let mut engine = GameEngine::new(3, 3).unwrap();

        let (result, output) = run(&mut engine, "0 0\n1 0\n0 1\n1 1\n0 2\n");

        assert_eq!(
            result,
            GameResult::Won {
                winner: Player::First,
                line: Line::new(vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)])
            }
        );
        assert!(output.contains("[X][X][X]"));
        assert!(output.contains("X wins with [(0, 0), (0, 1), (0, 2)]"));
    }

    #[test]
    fn test_rejected_moves_are_reported_and_game_continues() {
        let mut engine = GameEngine::new(3, 3).unwrap();

        let (result, output) = run(&mut engine, "1 1\n1 1\nX 0 0\n5 5\n");

        assert_eq!(result, GameResult::Abandoned);
        assert!(output.contains("already claimed by X"));
        assert!(output.contains("Ignored: Not X's turn, O moves next"));
        assert!(output.contains("outside the 3x3 board"));
        assert_eq!(engine.history().len(), 1);
        assert_eq!(engine.current_player(), Player::Second);
    }

    #[test]
    fn test_full_board_is_a_draw() {
        let mut engine = GameEngine::new(3, 3).unwrap();

        let (result, output) = run(
            &mut engine,
            "0 0\n0 1\n0 2\n1 1\n1 0\n1 2\n2 1\n2 0\n2 2\n",
        );

        assert_eq!(result, GameResult::Draw);
        assert!(output.contains("Draw"));
    }

    #[test]
    fn test_quit_abandons_game() {
        let mut engine = GameEngine::new(3, 3).unwrap();

        let (result, _) = run(&mut engine, "0 0\nq\n0 1\n");

        assert_eq!(result, GameResult::Abandoned);
        assert_eq!(engine.history().len(), 1);
    }
}
