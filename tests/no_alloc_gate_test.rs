//! The per-frame path (input repeats, engine step, snapshot, render) must not
//! touch the heap once buffers are warmed up.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crossterm::event::{KeyCode, KeyEvent};

use tetrad::core::{Engine, GameSnapshot};
use tetrad::input::InputHandler;
use tetrad::term::{FrameBuffer, GameView, Viewport};
use tetrad::types::{GameAction, TICK_MS};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

// Single test: the counter is process-wide and tests run in parallel.
#[test]
fn frame_loop_is_allocation_free_after_warmup() {
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();
    let mut engine = Engine::with_seed(1);
    let mut input = InputHandler::with_config(50, 20);

    // Warm-up.
    engine.snapshot_into(&mut snap);
    view.render_into(&snap, viewport, &mut fb);

    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::Hold,
        GameAction::SoftDrop,
        GameAction::MoveRight,
        GameAction::RotateCcw,
        GameAction::HardDrop,
    ];

    let allocs = with_alloc_counting(|| {
        for frame in 0..600usize {
            if frame % 40 == 0 {
                let _ = input.handle_key_press(KeyEvent::from(KeyCode::Right));
            }
            for action in input.update(TICK_MS) {
                engine.apply_action(action);
            }
            engine.apply_action(script[frame % script.len()]);
            engine.tick(TICK_MS as f64 / 1000.0);
            let _ = engine.take_last_event();
            if engine.game_over() {
                engine.restart();
            }
            engine.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
    });

    assert_eq!(allocs, 0);
}
