use tetrad::core::{Engine, GameSnapshot};
use tetrad::term::{piece_color, AnchorY, GameView, Viewport};
use tetrad::types::{Phase, PieceKind};

fn empty_snapshot() -> GameSnapshot {
    let mut snap = Engine::with_seed(1).snapshot();
    snap.active = None;
    snap.ghost_y = None;
    snap
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Engine::with_seed(1).snapshot();
    let view = GameView::default();

    // 10*2 by 20*1 cells plus the border: 22x22.
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = empty_snapshot();
    snap.board[19][0] = PieceKind::I.code();

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    let right = fb.get(x0 + 1, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(right.ch, '█');
    assert_eq!(left.style.fg, piece_color(PieceKind::I));
    // Next cell over is empty well.
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_below_active_piece() {
    let snap = Engine::with_seed(3).snapshot();
    let active = snap.active.unwrap();
    let ghost_y = snap.ghost_y.unwrap();
    assert!(ghost_y > active.y);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let ghost_rows: Vec<String> = (1..21).map(|y| fb.row_text(y)).collect();
    assert!(ghost_rows.iter().any(|row| row.contains('░')));
    assert!(ghost_rows.iter().any(|row| row.contains('█')));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Engine::with_seed(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.hold = Some(PieceKind::T);

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(60, 22));
    assert!(fb.contains_text("SCORE 1234"));
    assert!(fb.contains_text("LEVEL 2"));
    assert!(fb.contains_text("LINES 10"));
    assert!(fb.contains_text("NEXT"));
    assert!(fb.contains_text("HOLD"));

    let narrow = view.render(&snap, Viewport::new(30, 22));
    assert!(!narrow.contains_text("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Engine::with_seed(1).snapshot();

    // start_y = (30 - 22) / 2 = 4
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let top = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = top.render(&snap, Viewport::new(22, 30));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_overlays_pause_and_game_over() {
    let mut snap = Engine::with_seed(1).snapshot();
    snap.phase = Phase::Paused;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.contains_text("PAUSED"));

    let mut snap = empty_snapshot();
    snap.phase = Phase::GameOver;
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    assert!(fb.contains_text("GAME OVER"));
    assert!(!fb.contains_text("PAUSED"));
}

#[test]
fn term_view_tolerates_tiny_viewports() {
    let snap = Engine::with_seed(1).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
