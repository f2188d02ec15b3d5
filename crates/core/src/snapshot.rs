use crate::piece::Piece;
use crate::types::{Phase, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, NEXT_QUEUE_LEN};

/// Compact grid: 0 = empty, otherwise `PieceKind::code`
pub type GridSnapshot = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a frontend needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: GridSnapshot,
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub hold: Option<PieceKind>,
    pub next_queue: [PieceKind; NEXT_QUEUE_LEN],
    pub can_hold: bool,
    pub phase: Phase,
    pub seed: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Active
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            hold: None,
            next_queue: [PieceKind::I; NEXT_QUEUE_LEN],
            can_hold: true,
            phase: Phase::Active,
            seed: 0,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
