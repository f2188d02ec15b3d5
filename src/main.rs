//! Terminal runner (default binary).
//!
//! Reads configuration from the environment, then drives [`App`] from a
//! crossterm event loop with a fixed frame tick.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetrad::app::App;
use tetrad::config::Config;
use tetrad::input::InputHandler;
use tetrad::journal::Journal;
use tetrad::scores::JsonFileStore;
use tetrad::term::{FrameBuffer, TerminalRenderer, Viewport};
use tetrad::types::TICK_MS;

fn main() -> Result<()> {
    let config = Config::from_env();

    let journal = match &config.log_path {
        Some(path) => Journal::open(path).unwrap_or_else(|e| {
            eprintln!("journal disabled: {e:#}");
            Journal::disabled()
        }),
        None => Journal::disabled(),
    };
    let mut app = App::new(
        config.seed,
        InputHandler::with_config(config.das_ms, config.arr_ms),
        Box::new(JsonFileStore::new(&config.scores_path)),
        journal,
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    while !app.should_exit() {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(&mut fb, Viewport::new(w, h));
        term.draw(&fb)?;

        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => app.handle_key(key),
                    KeyEventKind::Release => app.handle_key_release(key.code),
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.update(TICK_MS);
        }
    }
    Ok(())
}
