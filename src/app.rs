//! Screen flow around the engine: menu, play, initials entry, scoreboards.
//!
//! [`App`] owns every piece of game state. The binary feeds it key events and
//! elapsed time and asks it to draw; nothing here touches the terminal, so the
//! whole flow runs headless in tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{Engine, GameSnapshot};
use crate::input::{should_quit, InputHandler};
use crate::journal::{Journal, Record};
use crate::scores::{clean_initials, qualifies, ScoreEntry, ScoreStore};
use crate::term::screens::{
    render_controls, render_game_over, render_high_scores, render_initials, render_menu,
};
use crate::term::{FrameBuffer, GameView, ScoreLine, Viewport};
use crate::types::{GameAction, INITIALS_LEN};

/// Title menu entries, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartGame,
    HighScores,
    Controls,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::StartGame,
        MenuItem::HighScores,
        MenuItem::Controls,
        MenuItem::Quit,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::StartGame => "Start Game",
            MenuItem::HighScores => "High Scores",
            MenuItem::Controls => "Controls",
            MenuItem::Quit => "Quit",
        }
    }
}

const MENU_LABELS: [&str; 4] = [
    MenuItem::StartGame.label(),
    MenuItem::HighScores.label(),
    MenuItem::Controls.label(),
    MenuItem::Quit.label(),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu { selected: usize },
    Controls,
    HighScores,
    Playing,
    /// A finished game made the table; `score` is waiting for a name.
    EnterInitials { score: u32, initials: String },
    GameOver { score: u32 },
}

pub struct App {
    screen: Screen,
    engine: Engine,
    input: InputHandler,
    store: Box<dyn ScoreStore>,
    journal: Journal,
    scores: Vec<ScoreEntry>,
    seed: Option<u32>,
    view: GameView,
    snapshot: GameSnapshot,
    quit: bool,
}

impl App {
    /// `seed` fixes every new game from the menu; `None` seeds from the clock.
    pub fn new(
        seed: Option<u32>,
        input: InputHandler,
        store: Box<dyn ScoreStore>,
        journal: Journal,
    ) -> Self {
        let scores = store.load().unwrap_or_default();
        Self {
            screen: Screen::Menu { selected: 0 },
            engine: Engine::new(seed),
            input,
            store,
            journal,
            scores,
            seed,
            view: GameView::default(),
            snapshot: GameSnapshot::default(),
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Mutable engine access, for setting up positions in tests.
    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Cached high-score table
    pub fn scores(&self) -> &[ScoreEntry] {
        &self.scores
    }

    pub fn should_exit(&self) -> bool {
        self.quit
    }

    /// Handle a key press (or terminal auto-repeat).
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Up => {
                    *selected = (*selected + MenuItem::ALL.len() - 1) % MenuItem::ALL.len();
                }
                KeyCode::Down => *selected = (*selected + 1) % MenuItem::ALL.len(),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    let item = MenuItem::ALL[*selected];
                    self.select(item);
                }
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
                _ => {}
            },
            Screen::Controls | Screen::HighScores => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    self.screen = Screen::Menu { selected: 0 };
                }
            }
            Screen::Playing => self.play_key(key),
            Screen::EnterInitials { score, initials } => match key.code {
                KeyCode::Enter if !initials.is_empty() => {
                    let (score, name) = (*score, clean_initials(initials));
                    self.save_score(&name, score);
                    self.screen = Screen::GameOver { score };
                }
                KeyCode::Backspace => {
                    initials.pop();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() && initials.len() < INITIALS_LEN => {
                    initials.push(c.to_ascii_uppercase());
                }
                KeyCode::Esc => {
                    let score = *score;
                    self.screen = Screen::GameOver { score };
                }
                _ => {}
            },
            Screen::GameOver { .. } => match key.code {
                KeyCode::Char('r') | KeyCode::Char('R') => {
                    self.engine.restart();
                    self.begin_play();
                }
                KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => self.quit = true,
                _ => {}
            },
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if self.screen == Screen::Playing {
            self.input.handle_key_release(code);
        }
    }

    /// Advance one frame: held-key repeats, then gravity.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.screen != Screen::Playing {
            return;
        }
        for action in self.input.update(elapsed_ms) {
            self.engine.apply_action(action);
            self.after_engine();
            if self.screen != Screen::Playing {
                return;
            }
        }
        self.engine.tick(elapsed_ms as f64 / 1000.0);
        self.after_engine();
    }

    /// Draw the current screen.
    pub fn render_into(&mut self, fb: &mut FrameBuffer, viewport: Viewport) {
        match &self.screen {
            Screen::Menu { selected } => render_menu(fb, viewport, &MENU_LABELS, *selected),
            Screen::Controls => render_controls(fb, viewport),
            Screen::HighScores => render_high_scores(fb, viewport, &score_lines(&self.scores)),
            Screen::Playing => {
                self.engine.snapshot_into(&mut self.snapshot);
                self.view.render_into(&self.snapshot, viewport, fb);
            }
            Screen::EnterInitials { score, initials } => {
                render_initials(fb, viewport, *score, initials)
            }
            Screen::GameOver { score } => {
                render_game_over(fb, viewport, *score, &score_lines(&self.scores))
            }
        }
    }

    fn select(&mut self, item: MenuItem) {
        match item {
            MenuItem::StartGame => {
                self.engine = Engine::new(self.seed);
                self.begin_play();
            }
            MenuItem::HighScores => self.screen = Screen::HighScores,
            MenuItem::Controls => self.screen = Screen::Controls,
            MenuItem::Quit => self.quit = true,
        }
    }

    fn begin_play(&mut self) {
        self.input.reset();
        self.screen = Screen::Playing;
        self.journal.record(&Record::GameStart {
            seed: self.engine.seed(),
        });
    }

    fn play_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        let Some(action) = self.input.handle_key_press(key) else {
            return;
        };
        self.engine.apply_action(action);
        if action == GameAction::Restart {
            self.begin_play();
            return;
        }
        self.after_engine();
    }

    /// Journal any lock and leave the play screen once the game has ended.
    fn after_engine(&mut self) {
        if let Some(event) = self.engine.take_last_event() {
            self.journal
                .record(&Record::lock(&event, self.engine.score()));
        }
        if self.engine.game_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        let score = self.engine.score();
        self.journal.record(&Record::GameOver {
            score,
            lines: self.engine.lines(),
            level: self.engine.level(),
        });
        self.input.reset();
        self.scores = self.store.load().unwrap_or_default();
        self.screen = if qualifies(&self.scores, score) {
            Screen::EnterInitials {
                score,
                initials: String::new(),
            }
        } else {
            Screen::GameOver { score }
        };
    }

    fn save_score(&mut self, name: &str, score: u32) {
        self.journal.record(&Record::HighScore { name, score });
        match self.store.record(name, score) {
            Ok(entries) => self.scores = entries,
            // Keep the result on screen even if it could not be persisted.
            Err(_) => crate::scores::insert(&mut self.scores, ScoreEntry::new(name, score)),
        }
    }
}

fn score_lines(entries: &[ScoreEntry]) -> Vec<ScoreLine<'_>> {
    entries
        .iter()
        .map(|e| ScoreLine {
            name: &e.name,
            score: e.score,
        })
        .collect()
}
