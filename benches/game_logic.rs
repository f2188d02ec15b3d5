use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetrad::core::{Board, Engine, GameSnapshot};
use tetrad::term::{FrameBuffer, GameView, Viewport};
use tetrad::types::PieceKind;

fn bench_tick(c: &mut Criterion) {
    let mut engine = Engine::with_seed(12345);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.restart();
            }
            engine.tick(black_box(0.016));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut engine = Engine::with_seed(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if engine.game_over() {
                engine.restart();
            }
            black_box(engine.hard_drop());
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = Engine::with_seed(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            let dx = if engine.try_move(1, 0) { 1 } else { -1 };
            engine.try_move(-dx, 0);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut engine = Engine::with_seed(12345);
    engine.try_move(0, 5);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            engine.rotate(black_box(1));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = Engine::with_seed(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
            black_box(fb.cells().len());
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
