use std::fmt::Write;

use ntoe_common::games::tictactoe::{Cell, GameEngine};

/// Text view of the board. Claimed cells show the owner's symbol, cells of
/// the winning line are bracketed. With `show_coordinates` the row and
/// column indices are printed around the grid.
pub fn render_board(engine: &GameEngine, show_coordinates: bool) -> String {
    let size = engine.board_size();
    let label_width = size.saturating_sub(1).to_string().len();
    let mut out = String::new();

    if show_coordinates {
        out.push_str(&" ".repeat(label_width + 1));
        for col in 0..size {
            let _ = write!(out, "{:^3}", col);
        }
        out.push('\n');
    }

    for row in 0..size {
        if show_coordinates {
            let _ = write!(out, "{:>width$} ", row, width = label_width);
        }
        for col in 0..size {
            out.push_str(&render_cell(engine, Cell::new(row, col)));
        }
        out.push('\n');
    }

    out
}

fn render_cell(engine: &GameEngine, cell: Cell) -> String {
    let symbol = engine.owner(cell).map_or('.', |player| player.symbol());
    let highlighted = engine
        .winning_line()
        .is_some_and(|line| line.contains(&cell));

    if highlighted {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntoe_common::games::tictactoe::Player;

    #[test]
    fn test_empty_board() {
        let engine = GameEngine::new(3, 3).unwrap();
        assert_eq!(render_board(&engine, false), " .  .  . \n .  .  . \n .  .  . \n");
    }

    #[test]
    fn test_claimed_cells_show_symbols() {
        let mut engine = GameEngine::new(2, 2).unwrap();
        engine.apply_move(Cell::new(0, 1), Player::First).unwrap();
        engine.apply_move(Cell::new(1, 0), Player::Second).unwrap();

        assert_eq!(render_board(&engine, false), " .  X \n O  . \n");
    }

    #[test]
    fn test_winning_line_is_bracketed() {
        let mut engine = GameEngine::new(2, 2).unwrap();
        engine.apply_move(Cell::new(0, 0), Player::First).unwrap();
        engine.apply_move(Cell::new(1, 0), Player::Second).unwrap();
        engine.apply_move(Cell::new(0, 1), Player::First).unwrap();

        assert_eq!(render_board(&engine, false), "[X][X]\n O  . \n");
    }

    #[test]
    fn test_coordinates_are_printed() {
        let engine = GameEngine::new(2, 1).unwrap();
        assert_eq!(render_board(&engine, true), "   0  1 \n0  .  . \n1  .  . \n");
    }
}
