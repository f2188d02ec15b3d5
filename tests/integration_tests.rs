//! Integration tests for the engine, input handler and snapshot together

use crossterm::event::{KeyCode, KeyEvent};

use tetrad::core::Engine;
use tetrad::input::InputHandler;
use tetrad::types::{GameAction, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_Y};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
}

#[test]
fn test_game_lifecycle() {
    let mut engine = Engine::new(Some(12345));
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.seed(), 12345);
    assert_eq!(engine.preview().len(), 3);

    assert!(engine.apply_action(GameAction::Pause));
    assert!(engine.paused());
    assert!(engine.apply_action(GameAction::Pause));

    let mut drops = 0;
    while !engine.game_over() {
        engine.apply_action(GameAction::HardDrop);
        drops += 1;
        assert!(drops < 100, "stacking in place must top out");
    }
    assert!(engine.snapshot().game_over());

    engine.apply_action(GameAction::Restart);
    assert_eq!(engine.phase(), Phase::Active);
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_hard_drop_completes_bottom_row() {
    let mut engine = Engine::with_seed(2024);
    let ghost = engine.ghost_cells();
    for x in 0..BOARD_WIDTH as i8 {
        if !ghost.contains(&(x, BOARD_HEIGHT as i8 - 1)) {
            engine.board_mut().set(x, BOARD_HEIGHT as i8 - 1, Some(PieceKind::Z));
        }
    }

    let expected_rest = engine.ghost_y();
    let distance = engine.hard_drop();
    assert_eq!(distance, (expected_rest - SPAWN_Y) as u32);
    assert_eq!(engine.lines(), 1);
    assert_eq!(engine.score(), 100 + 2 * distance);

    let event = engine.take_last_event().unwrap();
    assert_eq!(event.lines_cleared, 1);
    assert_eq!(event.piece.y, expected_rest);
    assert!(!engine.board().is_row_full(BOARD_HEIGHT as usize - 1));
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::RotateCcw,
        GameAction::HardDrop,
    ];
    let play = || {
        let mut engine = Engine::with_seed(777);
        for action in script {
            engine.apply_action(action);
            engine.tick(0.016);
        }
        engine.snapshot()
    };
    assert_eq!(play(), play());
}

#[test]
fn test_input_handler_drives_engine() {
    let mut engine = Engine::with_seed(5);
    let mut input = InputHandler::with_config(100, 50);
    let start_x = engine.active().x;

    let action = input.handle_key_press(press(KeyCode::Left)).unwrap();
    assert_eq!(action, GameAction::MoveLeft);
    engine.apply_action(action);
    assert_eq!(engine.active().x, start_x - 1);

    // DAS not reached yet.
    assert!(input.update(80).is_empty());
    // 100 ms DAS, then one repeat per 50 ms.
    let repeats = input.update(70);
    assert_eq!(repeats.as_slice(), &[GameAction::MoveLeft]);
    for a in repeats {
        engine.apply_action(a);
    }
    assert_eq!(engine.active().x, start_x - 2);

    input.handle_key_release(KeyCode::Left);
    assert!(input.update(500).is_empty());
}

#[test]
fn test_tick_accumulates_frames() {
    let mut engine = Engine::with_seed(31);
    let y0 = engine.active().y;
    // 0.55 s at level 1: 34 frames of 16 ms stay short of it.
    for _ in 0..34 {
        assert!(!engine.tick(0.016));
    }
    assert!(engine.tick(0.016));
    assert_eq!(engine.active().y, y0 + 1);
}
