//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Each frame is diffed against the previous one and only changed cells are
//! written. Style and cursor moves are emitted only when they change, so a
//! run of adjacent changed cells costs one cursor move.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal output with frame diffing.
///
/// Generic over the writer so encoded output can be inspected in tests.
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    prev: FrameBuffer,
    /// Next draw repaints everything
    stale: bool,
    buf: Vec<u8>,
    entered: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            prev: FrameBuffer::new(0, 0),
            stale: true,
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.stale = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        let flushed = self.flush_buf();
        terminal::disable_raw_mode().context("disable raw mode")?;
        flushed
    }

    /// Force the next draw to repaint everything, e.g. after a resize.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Draw `fb`, writing only what changed since the last draw.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        let same_size = (self.prev.width(), self.prev.height()) == (fb.width(), fb.height());
        if self.stale || !same_size {
            encode_full_into(fb, &mut self.buf)?;
            self.stale = false;
        } else {
            encode_diff_into(&self.prev, fb, &mut self.buf)?;
        }
        self.flush_buf()?;
        self.prev.clone_from(fb);
        Ok(())
    }

    /// Inner writer, for inspecting output.
    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        self.out.write_all(&self.buf).context("write frame")?;
        self.out.flush().context("flush frame")?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Tracks the terminal's cursor and style while encoding.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    cursor: Option<(u16, u16)>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            cursor: None,
            style: None,
        }
    }

    fn put(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        if self.cursor != Some((x, y)) {
            self.out.queue(cursor::MoveTo(x, y))?;
        }
        if self.style != Some(cell.style) {
            apply_style_into(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        self.cursor = Some((x + 1, y));
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            self.out.queue(ResetColor)?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            painter.put(x, y, fb.get(x, y).unwrap_or_default())?;
        }
    }
    painter.finish()
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
///
/// Falls back to a full redraw when the sizes differ.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if (prev.width(), prev.height()) != (next.width(), next.height()) {
        return encode_full_into(next, out);
    }
    let mut painter = Painter::new(out);
    let width = next.width().max(1) as usize;
    for (i, (a, b)) in prev.cells().iter().zip(next.cells()).enumerate() {
        if a != b {
            painter.put((i % width) as u16, (i / width) as u16, *b)?;
        }
    }
    painter.finish()
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
