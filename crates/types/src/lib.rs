//! Core types module - shared data structures and constants
//!
//! Everything here is plain data with no dependencies, so the same definitions
//! are used by the engine, the terminal view, the input layer and the app.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (3, 0), rotation North
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame step used by the terminal loop (~60 FPS) |
//! | `BASE_FALL_MS` | 550 | Gravity interval at level 1 |
//! | `FALL_STEP_MS` | 50 | Interval reduction per level |
//! | `MIN_FALL_MS` | 100 | Gravity floor |
//! | `DEFAULT_DAS_MS` | 120 | Hold time before horizontal auto-repeat |
//! | `DEFAULT_ARR_MS` | 120 | Interval between horizontal repeats |
//!
//! # Examples
//!
//! ```
//! use tetrad_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! assert_eq!(PieceKind::from_code(3), Some(PieceKind::T));
//! assert_eq!(Rotation::North.rotate(1), Rotation::East);
//! assert_eq!(Rotation::North.rotate(-1), Rotation::West);
//! assert_eq!((BOARD_WIDTH, BOARD_HEIGHT), (10, 20));
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Number of rows at the top of the board that end the game when occupied after a lock.
pub const TOP_OUT_ROWS: u8 = 2;

/// Spawn column of a piece's local origin
pub const SPAWN_X: i8 = 3;

/// Spawn row of a piece's local origin
pub const SPAWN_Y: i8 = 0;

/// Upcoming-kind lookahead kept by the engine
pub const NEXT_QUEUE_LEN: usize = 5;

/// Number of upcoming kinds shown to the player
pub const PREVIEW_LEN: usize = 3;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1
pub const BASE_FALL_MS: u32 = 550;

/// Gravity speed-up per level
pub const FALL_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const MIN_FALL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points per cell for a successful soft drop step
pub const SOFT_DROP_POINTS: u32 = 1;

/// Points per cell travelled by a hard drop
pub const HARD_DROP_POINTS: u32 = 2;

/// DAS (Delayed Auto Shift) delay in milliseconds.
pub const DEFAULT_DAS_MS: u32 = 120;

/// ARR (Auto Repeat Rate) in milliseconds.
pub const DEFAULT_ARR_MS: u32 = 120;

/// Soft drop DAS in milliseconds.
pub const SOFT_DROP_DAS_MS: u32 = 0;

/// Soft drop ARR in milliseconds.
pub const SOFT_DROP_ARR_MS: u32 = 50;

/// Number of entries kept on the high-score table
pub const HIGH_SCORE_SLOTS: usize = 5;

/// Maximum initials length on the high-score table
pub const INITIALS_LEN: usize = 3;

/// Line clear scoring table, multiplied by the current level.
///
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in canonical order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Position in [`PieceKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Compact grid code (1..=7). 0 is reserved for an empty cell.
    pub fn code(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::code`]
    ///
    /// ```
    /// use tetrad_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_code(0), None);
    /// assert_eq!(PieceKind::from_code(PieceKind::Z.code()), Some(PieceKind::Z));
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=7 => Some(Self::ALL[(code - 1) as usize]),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// Rotation states
///
/// - **North**: Spawn orientation (state 0)
/// - **East**: Rotated 90° clockwise (state 1)
/// - **South**: Rotated 180° (state 2)
/// - **West**: Rotated 90° counter-clockwise (state 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// ```
    /// use tetrad_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// ```
    /// use tetrad_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Rotate one step in `direction`: positive is clockwise, anything else counter-clockwise.
    pub fn rotate(&self, direction: i8) -> Self {
        if direction > 0 {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    /// Rotation state number (0..=3)
    pub fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotation for a state number, taken mod 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Game actions the frame loop forwards to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell (locks if it cannot fall)
    SoftDrop,
    /// Drop piece to its resting row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Hold current piece (once per spawn)
    Hold,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

/// Lifecycle phase of a game.
///
/// Exactly one phase governs whether movement, gravity and hold are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Piece falling, input accepted
    #[default]
    Active,
    /// Input and gravity suspended, state frozen
    Paused,
    /// Terminal; only a restart leaves it
    GameOver,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;
