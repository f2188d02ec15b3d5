//! Full-screen pages around the game: menu, controls, score tables and
//! initials entry. Like [`crate::GameView`], everything here only draws.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::game_view::{Viewport, BG, MUTED, TEXT};

const HIGHLIGHT: Rgb = Rgb::new(255, 255, 0);

/// Lines shown on the controls page
pub const CONTROL_LINES: [&str; 8] = [
    "Left / Right: Move",
    "Down: Soft Drop",
    "Up / X: Rotate Clockwise",
    "Z: Rotate Counter-Clockwise",
    "Space: Hard Drop",
    "C: Hold",
    "P: Pause, R: Restart",
    "Q / Esc: Quit",
];

/// One row of a score table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreLine<'a> {
    pub name: &'a str,
    pub score: u32,
}

fn reset(fb: &mut FrameBuffer, viewport: Viewport) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::new(TEXT, BG).cell(' '));
}

/// Title menu; `selected` is highlighted.
pub fn render_menu(fb: &mut FrameBuffer, viewport: Viewport, items: &[&str], selected: usize) {
    reset(fb, viewport);
    let title_y = viewport.height.saturating_sub(items.len() as u16 * 2 + 4) / 2;
    fb.put_str_centered(title_y, "T E T R A D", CellStyle::new(TEXT, BG).bold());

    let mut y = title_y + 3;
    for (i, item) in items.iter().enumerate() {
        let style = if i == selected {
            CellStyle::new(HIGHLIGHT, BG).bold()
        } else {
            CellStyle::new(TEXT, BG)
        };
        fb.put_str_centered(y, item, style);
        if i == selected {
            let w = item.chars().count() as u16;
            let x = viewport.width.saturating_sub(w) / 2;
            fb.put_str(x.saturating_sub(3), y, ">", style);
        }
        y += 2;
    }
}

/// Static list of key bindings.
pub fn render_controls(fb: &mut FrameBuffer, viewport: Viewport) {
    reset(fb, viewport);
    let x = 4;
    fb.put_str(
        x,
        2,
        "Controls - Press Enter to go back",
        CellStyle::new(TEXT, BG).bold(),
    );
    let muted = CellStyle::new(MUTED, BG);
    for (i, line) in CONTROL_LINES.iter().enumerate() {
        fb.put_str(x, 5 + i as u16 * 2, line, muted);
    }
}

fn draw_score_table(fb: &mut FrameBuffer, x: u16, y: u16, scores: &[ScoreLine<'_>]) {
    let muted = CellStyle::new(MUTED, BG);
    if scores.is_empty() {
        fb.put_str(x, y, "No scores yet!", muted);
        return;
    }
    for (i, line) in scores.iter().enumerate() {
        let row = y + i as u16 * 2;
        let mut cx = x;
        cx += fb.put_u32(cx, row, i as u32 + 1, muted);
        cx += fb.put_str(cx, row, ". ", muted);
        cx += fb.put_str(cx, row, line.name, muted);
        cx += fb.put_str(cx, row, " - ", muted);
        fb.put_u32(cx, row, line.score, muted);
    }
}

/// High-score page reached from the menu.
pub fn render_high_scores(fb: &mut FrameBuffer, viewport: Viewport, scores: &[ScoreLine<'_>]) {
    reset(fb, viewport);
    fb.put_str(
        4,
        2,
        "High Scores - Press Enter to go back",
        CellStyle::new(TEXT, BG).bold(),
    );
    draw_score_table(fb, 4, 5, scores);
}

/// Prompt for the initials of a qualifying score.
pub fn render_initials(fb: &mut FrameBuffer, viewport: Viewport, score: u32, initials: &str) {
    reset(fb, viewport);
    let mid = viewport.height / 2;

    let prompt = CellStyle::new(HIGHLIGHT, BG).bold();
    let label = "New High Score! ";
    let total = label.len() as u16 + digits(score);
    let x = viewport.width.saturating_sub(total) / 2;
    let used = fb.put_str(x, mid.saturating_sub(2), label, prompt);
    fb.put_u32(x + used, mid.saturating_sub(2), score, prompt);

    let entry = CellStyle::new(TEXT, BG);
    let label = "Enter your initials: ";
    let x = viewport.width.saturating_sub(label.len() as u16 + 3) / 2;
    let used = fb.put_str(x, mid, label, entry);
    let typed = fb.put_str(x + used, mid, initials, entry.bold());
    fb.put_char(x + used + typed, mid, '_', entry.dim());
}

/// End-of-game scoreboard.
pub fn render_game_over(
    fb: &mut FrameBuffer,
    viewport: Viewport,
    score: u32,
    scores: &[ScoreLine<'_>],
) {
    reset(fb, viewport);
    let bold = CellStyle::new(TEXT, BG).bold();
    fb.put_str_centered(1, "Game Over", bold);

    let label = "Final score: ";
    let x = viewport.width.saturating_sub(label.len() as u16 + digits(score)) / 2;
    let used = fb.put_str(x, 3, label, CellStyle::new(TEXT, BG));
    fb.put_u32(x + used, 3, score, bold);

    fb.put_str_centered(5, "Press R to restart, Q/Esc to quit", CellStyle::new(MUTED, BG));
    draw_score_table(fb, 4, 8, scores);
}

fn digits(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
