//! DAS/ARR input handler for terminal environments.
//!
//! Horizontal moves and soft drop repeat while held: nothing happens until the
//! key has been down for the delay (DAS), then one action fires per repeat
//! interval (ARR). Terminals that never report key releases get an automatic
//! release after a short quiet period.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyCode, KeyEvent};

use crate::map::handle_key_event;
use crate::types::{
    GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, SOFT_DROP_ARR_MS, SOFT_DROP_DAS_MS,
};

/// Repeated actions produced by one update
pub type RepeatActions = ArrayVec<GameAction, 32>;

// Without release events, a tap would otherwise look like a held key.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Held time and carried-over repeat time for one key group
#[derive(Debug, Clone, Copy, Default)]
struct Repeat {
    held_ms: u32,
    carry_ms: u32,
}

impl Repeat {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn advance(
        &mut self,
        elapsed_ms: u32,
        das_ms: u32,
        arr_ms: u32,
        action: GameAction,
        out: &mut RepeatActions,
    ) {
        let before = self.held_ms;
        self.held_ms = self.held_ms.saturating_add(elapsed_ms);
        if self.held_ms < das_ms {
            return;
        }
        // Only time past the delay counts toward repeats.
        self.carry_ms += if before < das_ms {
            self.held_ms - das_ms
        } else {
            elapsed_ms
        };
        while self.carry_ms >= arr_ms {
            let _ = out.try_push(action);
            self.carry_ms -= arr_ms;
        }
    }
}

/// Tracks held keys for DAS/ARR handling.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// `MoveLeft` or `MoveRight` while a direction is held
    horizontal: Option<GameAction>,
    soft_drop: bool,
    horizontal_repeat: Repeat,
    soft_drop_repeat: Repeat,
    last_press: Instant,
    das_ms: u32,
    arr_ms: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    /// Horizontal repeat timing; an interval of 0 is treated as 1 ms.
    pub fn with_config(das_ms: u32, arr_ms: u32) -> Self {
        Self {
            horizontal: None,
            soft_drop: false,
            horizontal_repeat: Repeat::default(),
            soft_drop_repeat: Repeat::default(),
            last_press: Instant::now(),
            das_ms,
            arr_ms: arr_ms.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn das_ms(&self) -> u32 {
        self.das_ms
    }

    pub fn arr_ms(&self) -> u32 {
        self.arr_ms
    }

    /// Translate a key press into the action to apply right away.
    ///
    /// A repeated press of a key that is already held yields `None`; its
    /// repeats come from [`InputHandler::update`].
    pub fn handle_key_press(&mut self, key: KeyEvent) -> Option<GameAction> {
        let action = handle_key_event(key)?;
        match action {
            GameAction::MoveLeft | GameAction::MoveRight => {
                self.last_press = Instant::now();
                if self.horizontal == Some(action) {
                    return None;
                }
                self.horizontal = Some(action);
                self.horizontal_repeat.reset();
                Some(action)
            }
            GameAction::SoftDrop => {
                self.last_press = Instant::now();
                if self.soft_drop {
                    return None;
                }
                self.soft_drop = true;
                self.soft_drop_repeat.reset();
                Some(action)
            }
            _ => Some(action),
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match handle_key_event(KeyEvent::from(code)) {
            Some(action @ (GameAction::MoveLeft | GameAction::MoveRight)) => {
                if self.horizontal == Some(action) {
                    self.release_horizontal();
                }
            }
            Some(GameAction::SoftDrop) => self.release_soft_drop(),
            _ => {}
        }
    }

    fn release_horizontal(&mut self) {
        self.horizontal = None;
        self.horizontal_repeat.reset();
    }

    fn release_soft_drop(&mut self) {
        self.soft_drop = false;
        self.soft_drop_repeat.reset();
    }

    /// Advance held keys by `elapsed_ms` and collect the repeats that fired.
    pub fn update(&mut self, elapsed_ms: u32) -> RepeatActions {
        let mut actions = RepeatActions::new();

        let quiet = self.last_press.elapsed();
        if quiet > Duration::from_millis(self.key_release_timeout_ms as u64) {
            self.release_horizontal();
            self.release_soft_drop();
        }

        if let Some(action) = self.horizontal {
            self.horizontal_repeat
                .advance(elapsed_ms, self.das_ms, self.arr_ms, action, &mut actions);
        }
        if self.soft_drop {
            self.soft_drop_repeat.advance(
                elapsed_ms,
                SOFT_DROP_DAS_MS,
                SOFT_DROP_ARR_MS,
                GameAction::SoftDrop,
                &mut actions,
            );
        }

        actions
    }

    /// Forget every held key, e.g. when leaving the play screen.
    pub fn reset(&mut self) {
        self.release_horizontal();
        self.release_soft_drop();
        self.last_press = Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
