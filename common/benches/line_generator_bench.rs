use criterion::{Criterion, criterion_group, criterion_main};
use ntoe_common::games::tictactoe::{GameEngine, available_cells, generate_lines};
use std::hint::black_box;

fn bench_generate_classic_board() {
    generate_lines(black_box(3), black_box(3)).unwrap();
}

fn bench_generate_large_board() {
    generate_lines(black_box(20), black_box(5)).unwrap();
}

fn bench_full_game_large_board() {
    let mut engine = GameEngine::new(15, 5).unwrap();
    // Fill row-major until the game ends; the first player completes a
    // diagonal or the board fills up.
    while engine.winner().is_none() {
        let Some(&cell) = available_cells(&engine).first() else {
            break;
        };
        let player = engine.current_player();
        engine.apply_move(cell, player).unwrap();
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("generate_lines 3x3 run 3", |b| b.iter(bench_generate_classic_board));
    c.bench_function("generate_lines 20x20 run 5", |b| b.iter(bench_generate_large_board));
    c.bench_function("full game 15x15 run 5", |b| b.iter(bench_full_game_large_board));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
