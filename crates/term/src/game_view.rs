//! GameView: draws a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O) so layouts can be unit-tested.

use crate::core::{offsets, GameSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, PREVIEW_LEN};

pub(crate) const BG: Rgb = Rgb::new(18, 18, 24);
const GRID_BG: Rgb = Rgb::new(30, 30, 38);
const GRID_DOT: Rgb = Rgb::new(45, 45, 55);
const FRAME: Rgb = Rgb::new(80, 80, 95);
pub(crate) const TEXT: Rgb = Rgb::new(230, 230, 240);
pub(crate) const MUTED: Rgb = Rgb::new(200, 200, 210);
const GHOST: Rgb = Rgb::new(160, 160, 170);

/// Side panel width in columns
const PANEL_W: u16 = 22;
/// Columns between the well and the panel
const PANEL_GAP: u16 = 2;

const HELP_LINES: [&str; 6] = [
    "Arrows: move/drop",
    "Z/X or Up: rotate",
    "Space: hard drop",
    "C: hold",
    "P: pause, R: restart",
    "Q/Esc: quit",
];

/// Display color of a piece kind
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 240, 240),
        PieceKind::O => Rgb::new(240, 240, 0),
        PieceKind::T => Rgb::new(160, 0, 240),
        PieceKind::S => Rgb::new(0, 240, 0),
        PieceKind::Z => Rgb::new(240, 0, 0),
        PieceKind::J => Rgb::new(0, 0, 240),
        PieceKind::L => Rgb::new(240, 160, 0),
    }
}

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Where the well frame landed, in framebuffer coordinates
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    panel: bool,
}

/// Board-and-panel renderer for the play screen.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps cells roughly square.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let with_panel = w + PANEL_GAP + PANEL_W;
        let panel = viewport.width >= with_panel;
        let total_w = if panel { with_panel } else { w };
        Layout {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
            panel,
        }
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Reusing the framebuffer across frames keeps this allocation-free.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(TEXT, BG).cell(' '));

        let layout = self.layout(viewport);
        fb.draw_box(
            layout.x,
            layout.y,
            layout.w,
            layout.h,
            CellStyle::new(FRAME, BG),
        );

        for (y, row) in snap.board.iter().enumerate() {
            for (x, &code) in row.iter().enumerate() {
                match PieceKind::from_code(code) {
                    Some(kind) => self.draw_block(fb, layout, x as i8, y as i8, kind),
                    None => self.draw_empty(fb, layout, x as u16, y as u16),
                }
            }
        }

        if let Some(active) = snap.active {
            let shape = offsets(active.kind, active.rotation);
            if let Some(ghost_y) = snap.ghost_y {
                let style = CellStyle::new(GHOST, GRID_BG).dim();
                for (dx, dy) in shape {
                    self.fill_board_cell(fb, layout, active.x + dx, ghost_y + dy, '░', style);
                }
            }
            for (dx, dy) in shape {
                self.draw_block(fb, layout, active.x + dx, active.y + dy, active.kind);
            }
        }

        if layout.panel {
            self.draw_panel(fb, snap, layout);
        }

        if snap.paused() {
            self.draw_overlay(fb, layout, "PAUSED");
        } else if snap.game_over() {
            self.draw_overlay(fb, layout, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, layout: Layout, x: u16, y: u16) {
        let px = layout.x + 1 + x * self.cell_w;
        let py = layout.y + 1 + y * self.cell_h;
        let style = CellStyle::new(GRID_DOT, GRID_BG);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: Layout, x: i8, y: i8, kind: PieceKind) {
        let style = CellStyle::new(piece_color(kind), GRID_BG).bold();
        self.fill_board_cell(fb, layout, x, y, '█', style);
    }

    /// Fill one board cell; cells outside the well are skipped.
    fn fill_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
            return;
        }
        let px = layout.x + 1 + x as u16 * self.cell_w;
        let py = layout.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let x = layout.x + layout.w + PANEL_GAP;
        let label = CellStyle::new(TEXT, BG).bold();
        let value = CellStyle::new(TEXT, BG);
        let muted = CellStyle::new(MUTED, BG);

        let mut y = layout.y;
        fb.put_str(x, y, "TETRAD", label);
        y += 2;

        for (name, n) in [
            ("SCORE ", snap.score),
            ("LEVEL ", snap.level),
            ("LINES ", snap.lines),
        ] {
            let used = fb.put_str(x, y, name, label);
            fb.put_u32(x + used, y, n, value);
            y += 1;
        }
        y += 1;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        for &kind in snap.next_queue.iter().take(PREVIEW_LEN) {
            draw_mini(fb, x + 1, y, kind, false);
            y += 3;
        }

        let hold_style = if snap.can_hold { label } else { label.dim() };
        fb.put_str(x, y, "HOLD", hold_style);
        y += 1;
        if let Some(kind) = snap.hold {
            draw_mini(fb, x + 1, y, kind, !snap.can_hold);
        }
        y += 3;

        for line in HELP_LINES {
            fb.put_str(x, y, line, muted);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: Layout, text: &str) {
        let text_w = text.chars().count() as u16;
        let bar_w = (text_w + 4).min(layout.w.saturating_sub(2));
        let bar_x = layout.x + (layout.w.saturating_sub(bar_w)) / 2;
        let mid_y = layout.y + layout.h / 2;
        let style = CellStyle::new(TEXT, Rgb::new(0, 0, 0)).bold();
        fb.fill_rect(bar_x, mid_y - 1, bar_w, 3, ' ', style);
        fb.put_str(layout.x + (layout.w.saturating_sub(text_w)) / 2, mid_y, text, style);
    }
}

/// Spawn-orientation preview of a kind, two columns per cell, top-left aligned.
fn draw_mini(fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dim: bool) {
    let shape = offsets(kind, Rotation::North);
    let min_x = shape.iter().map(|c| c.0).min().unwrap_or(0);
    let min_y = shape.iter().map(|c| c.1).min().unwrap_or(0);
    let mut style = CellStyle::new(piece_color(kind), BG);
    if dim {
        style = style.dim();
    }
    for (cx, cy) in shape {
        let px = x + (cx - min_x) as u16 * 2;
        let py = y + (cy - min_y) as u16;
        fb.fill_rect(px, py, 2, 1, '█', style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mini_preview_of_i_is_one_row() {
        let mut fb = FrameBuffer::new(10, 2);
        draw_mini(&mut fb, 0, 0, PieceKind::I, false);
        assert_eq!(fb.row_text(0), "████████  ");
        assert_eq!(fb.row_text(1), "          ");
    }

    #[test]
    fn mini_preview_is_normalized() {
        let mut fb = FrameBuffer::new(6, 2);
        draw_mini(&mut fb, 0, 0, PieceKind::O, false);
        assert_eq!(fb.row_text(0), "████  ");
        assert_eq!(fb.row_text(1), "████  ");
    }

    #[test]
    fn panel_is_dropped_on_narrow_viewports() {
        let view = GameView::default();
        assert!(!view.layout(Viewport::new(30, 22)).panel);
        assert!(view.layout(Viewport::new(46, 22)).panel);
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(piece_color(*a), piece_color(*b));
            }
        }
    }
}
