//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    let KeyCode::Char(c) = key.code else {
        return match key.code {
            KeyCode::Left => Some(GameAction::MoveLeft),
            KeyCode::Right => Some(GameAction::MoveRight),
            KeyCode::Down => Some(GameAction::SoftDrop),
            KeyCode::Up => Some(GameAction::RotateCw),
            _ => None,
        };
    };

    match c.to_ascii_lowercase() {
        // Movement
        'a' | 'h' => Some(GameAction::MoveLeft),
        'd' | 'l' => Some(GameAction::MoveRight),
        's' | 'j' => Some(GameAction::SoftDrop),

        // Rotation
        'x' | 'w' | 'k' => Some(GameAction::RotateCw),
        'z' | 'y' => Some(GameAction::RotateCcw),

        ' ' => Some(GameAction::HardDrop),
        'c' => Some(GameAction::Hold),
        'p' => Some(GameAction::Pause),
        'r' => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
