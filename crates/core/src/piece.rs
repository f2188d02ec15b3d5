//! Active piece geometry

use crate::catalog::{offsets, PieceShape};
use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Absolute board cells occupied by a piece
pub type PieceCells = [(i8, i8); 4];

/// A piece on the board: kind, rotation state and local origin.
///
/// Occupied cells are always derived from the catalog, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// A piece at the spawn column/row in spawn orientation
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    /// Offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        offsets(self.kind, self.rotation)
    }

    /// Absolute cells at the current position
    pub fn cells(&self) -> PieceCells {
        self.cells_at(self.x, self.y, self.rotation)
    }

    /// Absolute cells if the piece were at `(x, y)` in `rotation`
    ///
    /// Saturates at the `i8` limits; those coordinates are always off the board.
    pub fn cells_at(&self, x: i8, y: i8, rotation: Rotation) -> PieceCells {
        offsets(self.kind, rotation)
            .map(|(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
    }

    /// Copy translated by `(dx, dy)`, or `None` if the origin would overflow
    pub fn shifted(&self, dx: i8, dy: i8) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            ..*self
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_defaults() {
        let piece = Piece::spawn(PieceKind::T);
        assert_eq!(piece.kind, PieceKind::T);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!((piece.x, piece.y), (3, 0));
    }

    #[test]
    fn test_cells_translate_shape() {
        let piece = Piece::spawn(PieceKind::I);
        assert_eq!(piece.cells(), [(3, 1), (4, 1), (5, 1), (6, 1)]);
    }

    #[test]
    fn test_cells_at_does_not_mutate() {
        let piece = Piece::spawn(PieceKind::J);
        let moved = piece.cells_at(0, 5, Rotation::East);
        assert_eq!(moved, [(1, 5), (2, 5), (1, 6), (1, 7)]);
        assert_eq!(piece, Piece::spawn(PieceKind::J));
    }

    #[test]
    fn test_shifted() {
        let piece = Piece::spawn(PieceKind::O).shifted(-1, 2).unwrap();
        assert_eq!((piece.x, piece.y), (2, 2));
        assert_eq!(piece.cells()[0], (3, 2));
    }

    #[test]
    fn test_shift_overflow_is_none() {
        let piece = Piece::spawn(PieceKind::T);
        assert_eq!(piece.shifted(i8::MAX, 0), None);
        let floor = piece.shifted(0, i8::MIN).unwrap();
        assert_eq!(floor.y, i8::MIN);
        assert_eq!(floor.shifted(0, -1), None);
    }

    #[test]
    fn test_cells_at_saturates() {
        let piece = Piece::spawn(PieceKind::I);
        let cells = piece.cells_at(i8::MAX - 1, 0, Rotation::North);
        assert!(cells.iter().all(|&(x, _)| x >= i8::MAX - 1));
    }
}
