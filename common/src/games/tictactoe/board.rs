use super::engine::GameEngine;
use super::types::Cell;

/// Unclaimed cells in row-major order.
pub fn available_cells(engine: &GameEngine) -> Vec<Cell> {
    let size = engine.board_size();
    let mut cells = Vec::new();
    for row in 0..size {
        for col in 0..size {
            let cell = Cell::new(row, col);
            if engine.owner(cell).is_none() {
                cells.push(cell);
            }
        }
    }
    cells
}
