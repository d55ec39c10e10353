use std::collections::HashSet;

use super::error::ConfigError;
use super::types::{Cell, Line};

pub fn validate_dimensions(board_size: usize, min_run: usize) -> Result<(), ConfigError> {
    if board_size == 0 {
        return Err(ConfigError::ZeroBoardSize);
    }
    if min_run == 0 {
        return Err(ConfigError::ZeroMinRun);
    }
    if min_run > board_size {
        return Err(ConfigError::MinRunExceedsBoardSize { min_run, board_size });
    }
    Ok(())
}

/// Enumerates every winning line of length `min_run` on a square board.
///
/// Lines come out rows first, then columns, then down-right diagonals by
/// increasing `row - col`, then down-left diagonals by increasing `row + col`.
/// Within a row, column or diagonal the runs are ordered by start position.
/// A line produced by more than one pass keeps its first position.
pub fn generate_lines(board_size: usize, min_run: usize) -> Result<Vec<Line>, ConfigError> {
    validate_dimensions(board_size, min_run)?;

    let mut collector = LineCollector::default();
    collect_rows(&mut collector, board_size, min_run);
    collect_columns(&mut collector, board_size, min_run);
    collect_down_right(&mut collector, board_size, min_run);
    collect_down_left(&mut collector, board_size, min_run);

    Ok(collector.lines)
}

#[derive(Default)]
struct LineCollector {
    seen: HashSet<Line>,
    lines: Vec<Line>,
}

impl LineCollector {
    fn push(&mut self, cells: Vec<Cell>) {
        let line = Line::new(cells);
        if self.seen.insert(line.clone()) {
            self.lines.push(line);
        }
    }
}

fn collect_rows(collector: &mut LineCollector, board_size: usize, min_run: usize) {
    for row in 0..board_size {
        for start in 0..=board_size - min_run {
            collector.push((0..min_run).map(|i| Cell::new(row, start + i)).collect());
        }
    }
}

fn collect_columns(collector: &mut LineCollector, board_size: usize, min_run: usize) {
    for col in 0..board_size {
        for start in 0..=board_size - min_run {
            collector.push((0..min_run).map(|i| Cell::new(start + i, col)).collect());
        }
    }
}

fn collect_down_right(collector: &mut LineCollector, board_size: usize, min_run: usize) {
    let span = board_size - min_run;

    // Topmost cell of each diagonal long enough to hold a run, from the
    // top-right corner inwards and then down the left edge.
    let origins = (1..=span)
        .rev()
        .map(|col| Cell::new(0, col))
        .chain((0..=span).map(|row| Cell::new(row, 0)));

    for origin in origins {
        let length = board_size - origin.row.max(origin.col);
        for start in 0..=length - min_run {
            collector.push(
                (0..min_run)
                    .map(|i| Cell::new(origin.row + start + i, origin.col + start + i))
                    .collect(),
            );
        }
    }
}

fn collect_down_left(collector: &mut LineCollector, board_size: usize, min_run: usize) {
    for offset in (min_run - 1)..=(2 * board_size - 1 - min_run) {
        let origin_row = offset.saturating_sub(board_size - 1);
        let origin_col = offset - origin_row;
        let length = origin_col - origin_row + 1;
        for start in 0..=length - min_run {
            collector.push(
                (0..min_run)
                    .map(|i| Cell::new(origin_row + start + i, origin_col - start - i))
                    .collect(),
            );
        }
    }
}
