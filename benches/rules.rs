use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ttt_engine::{has_won, is_full, Board, GameEngine, MemoryStore, Player};

fn bench_win_detection(c: &mut Criterion) {
    // Worst case: no line matches, all eight are scanned.
    let mut board = Board::new();
    for i in [0, 1, 5, 6, 8] {
        board.mark(i, Player::X);
    }
    for i in [2, 3, 4, 7] {
        board.mark(i, Player::O);
    }

    c.bench_function("win_check_full_board", |b| {
        b.iter(|| has_won(black_box(&board), black_box(Player::X)))
    });
}

fn bench_draw_detection(c: &mut Criterion) {
    let mut board = Board::new();
    for i in 0..8 {
        board.mark(i, if i % 2 == 0 { Player::X } else { Player::O });
    }

    c.bench_function("draw_check_near_full", |b| {
        b.iter(|| is_full(black_box(&board)))
    });
}

fn bench_full_round(c: &mut Criterion) {
    c.bench_function("round_to_win", |b| {
        b.iter(|| {
            let mut engine = GameEngine::new(MemoryStore::new());
            for index in [0, 4, 1, 3, 2] {
                engine.apply_move(black_box(index));
            }
            engine
        })
    });
}

criterion_group!(benches, bench_win_detection, bench_draw_detection, bench_full_round);
criterion_main!(benches);
