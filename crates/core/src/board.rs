//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Cells with negative y lie above the visible grid: they never collide
//! vertically and are dropped when a piece locks.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, TOP_OUT_ROWS};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices cleared by one pass, bottom to top
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is inside the grid and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether any of `cells` is blocked.
    ///
    /// A cell is blocked when it is left/right of the walls, at or below the
    /// floor, or on an occupied grid cell. Cells above the top edge are free.
    pub fn collides(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().any(|&(x, y)| {
            x < 0
                || x >= BOARD_WIDTH as i8
                || y >= BOARD_HEIGHT as i8
                || (y >= 0 && self.is_occupied(x, y))
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// One row of cells
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }

    /// Rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks_exact(WIDTH)
    }

    /// Commit a piece to the grid and clear completed rows.
    ///
    /// Cells above the grid are dropped. Returns the number of rows cleared.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        for (x, y) in piece.cells() {
            self.set(x, y, Some(piece.kind));
        }
        self.clear_full_rows().len()
    }

    /// Remove every full row and return their indices (bottom to top).
    ///
    /// Builds a fresh grid: surviving rows keep their order and sink to the
    /// bottom, empty rows fill the top.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut next = [None; BOARD_SIZE];
        let mut write_y = HEIGHT;

        for read_y in (0..HEIGHT).rev() {
            if self.is_row_full(read_y) {
                cleared.push(read_y);
                continue;
            }
            write_y -= 1;
            next[write_y * WIDTH..(write_y + 1) * WIDTH].copy_from_slice(self.row(read_y));
        }

        if !cleared.is_empty() {
            self.cells = next;
        }
        cleared
    }

    /// Check whether anything sits in the top rows (board overflow)
    pub fn top_out(&self) -> bool {
        self.cells[..TOP_OUT_ROWS as usize * WIDTH]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the compact grid encoding (0 = empty, otherwise `PieceKind::code`).
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = s.map_or(0, |kind| kind.code());
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
