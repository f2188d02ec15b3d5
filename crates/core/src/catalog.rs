//! Piece catalog - shape tables and wall kick offsets
//!
//! Offsets are `(dx, dy)` from a piece's local origin, with y growing
//! downward. Kick candidates are tried in order; the first one that fits wins.

use crate::types::{PieceKind, Rotation};

/// Offset of a single cell relative to piece origin
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 cell offsets from piece origin
pub type PieceShape = [CellOffset; 4];

/// Shapes indexed by `[kind.index()][rotation.index()]`
const SHAPES: [[PieceShape; 4]; 7] = [
    // I
    [
        [(0, 1), (1, 1), (2, 1), (3, 1)],
        [(2, 0), (2, 1), (2, 2), (2, 3)],
        [(0, 2), (1, 2), (2, 2), (3, 2)],
        [(1, 0), (1, 1), (1, 2), (1, 3)],
    ],
    // O: identical in every state, so rotating it never changes geometry
    [
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (2, 1)],
    ],
    // T
    [
        [(1, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (1, 2)],
        [(1, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // S
    [
        [(1, 0), (2, 0), (0, 1), (1, 1)],
        [(1, 0), (1, 1), (2, 1), (2, 2)],
        [(1, 1), (2, 1), (0, 2), (1, 2)],
        [(0, 0), (0, 1), (1, 1), (1, 2)],
    ],
    // Z
    [
        [(0, 0), (1, 0), (1, 1), (2, 1)],
        [(2, 0), (1, 1), (2, 1), (1, 2)],
        [(0, 1), (1, 1), (1, 2), (2, 2)],
        [(1, 0), (0, 1), (1, 1), (0, 2)],
    ],
    // J
    [
        [(0, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (2, 0), (1, 1), (1, 2)],
        [(0, 1), (1, 1), (2, 1), (2, 2)],
        [(1, 0), (1, 1), (0, 2), (1, 2)],
    ],
    // L
    [
        [(2, 0), (0, 1), (1, 1), (2, 1)],
        [(1, 0), (1, 1), (1, 2), (2, 2)],
        [(0, 1), (1, 1), (2, 1), (0, 2)],
        [(0, 0), (1, 0), (1, 1), (1, 2)],
    ],
];

/// Get the cell offsets for a piece kind and rotation
pub fn offsets(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Get the spawn orientation shape
pub fn spawn_offsets(kind: PieceKind) -> PieceShape {
    offsets(kind, Rotation::North)
}

/// Ordered kick candidates for one rotation transition
pub type KickList = [CellOffset; 5];

/// Kick lists indexed by [`kick_index`]
pub type KickTable = [KickList; 8];

/// JLSTZ kick table (shared by J, L, S, T, Z)
const JLSTZ_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 0->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 1->2
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 1->0
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // 2->3
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // 2->1
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // 3->0
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // 3->2
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
];

/// I piece kick table
const I_KICKS: KickTable = [
    // 0->1
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
    // 0->3
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 1->2
    [(0, 0), (-1, 0), (2, 0), (-1, -2), (2, 1)],
    // 1->0
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 2->3
    [(0, 0), (2, 0), (-1, 0), (2, -1), (-1, 2)],
    // 2->1
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 3->0
    [(0, 0), (1, 0), (-2, 0), (1, 2), (-2, -1)],
    // 3->2
    [(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)],
];

/// Used for any pair that is not a single quarter turn.
const NO_KICK: [CellOffset; 1] = [(0, 0)];

/// Table slot for a quarter-turn transition, `None` for anything else
fn kick_index(from: Rotation, to: Rotation) -> Option<usize> {
    let clockwise = if from.rotate_cw() == to {
        true
    } else if from.rotate_ccw() == to {
        false
    } else {
        return None;
    };
    Some(from.index() * 2 + if clockwise { 0 } else { 1 })
}

/// Get the kick table used by a piece kind, `None` for the square piece
pub fn kick_table(kind: PieceKind) -> Option<&'static KickTable> {
    match kind {
        PieceKind::O => None,
        PieceKind::I => Some(&I_KICKS),
        _ => Some(&JLSTZ_KICKS),
    }
}

/// Ordered kick candidates for rotating `kind` from `from` to `to`.
///
/// The square piece gets an empty list: it has nothing to rotate.
pub fn kicks(kind: PieceKind, from: Rotation, to: Rotation) -> &'static [CellOffset] {
    let Some(table) = kick_table(kind) else {
        return &[];
    };
    match kick_index(from, to) {
        Some(i) => &table[i],
        None => &NO_KICK,
    }
}
