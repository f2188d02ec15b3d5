//! Game journal: one JSON object per line.
//!
//! The terminal is in raw mode while playing, so this file is the program's
//! only log. Disabled unless a path is configured. The first failed write
//! turns the journal off instead of interrupting play.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::LockEvent;

/// One journal line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Record<'a> {
    GameStart {
        seed: u32,
    },
    Lock {
        kind: &'a str,
        x: i8,
        y: i8,
        rotation: &'a str,
        lines_cleared: u32,
        points: u32,
        score: u32,
        level: u32,
        top_out: bool,
    },
    GameOver {
        score: u32,
        lines: u32,
        level: u32,
    },
    HighScore {
        name: &'a str,
        score: u32,
    },
}

impl Record<'static> {
    /// Lock record from an engine event and the score after it
    pub fn lock(event: &LockEvent, score: u32) -> Self {
        Record::Lock {
            kind: event.piece.kind.as_str(),
            x: event.piece.x,
            y: event.piece.y,
            rotation: event.piece.rotation.as_str(),
            lines_cleared: event.lines_cleared,
            points: event.points,
            score,
            level: event.level,
            top_out: event.top_out,
        }
    }
}

/// Append-only JSON-lines sink
pub struct Journal {
    out: Option<Box<dyn Write>>,
    buf: Vec<u8>,
}

impl Journal {
    /// A journal that drops every record.
    pub fn disabled() -> Self {
        Self {
            out: None,
            buf: Vec::new(),
        }
    }

    /// Append to `path`, creating it if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open journal {}", path.display()))?;
        Ok(Self::to_writer(BufWriter::new(file)))
    }

    /// Journal writing to any sink.
    pub fn to_writer(out: impl Write + 'static) -> Self {
        Self {
            out: Some(Box::new(out)),
            buf: Vec::with_capacity(256),
        }
    }

    pub fn enabled(&self) -> bool {
        self.out.is_some()
    }

    /// Write one record. Failures disable the journal.
    pub fn record(&mut self, record: &Record<'_>) {
        let Some(out) = self.out.as_mut() else {
            return;
        };
        self.buf.clear();
        let written = serde_json::to_writer(&mut self.buf, record)
            .map_err(anyhow::Error::from)
            .and_then(|()| {
                self.buf.push(b'\n');
                out.write_all(&self.buf)?;
                out.flush()?;
                Ok(())
            });
        if written.is_err() {
            self.out = None;
        }
    }
}

impl Default for Journal {
    fn default() -> Self {
        Self::disabled()
    }
}
