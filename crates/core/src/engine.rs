//! Engine module - spawn/fall/lock/hold lifecycle
//!
//! This module ties together all core components: board, pieces, the random
//! bag and scoring. It handles gravity timing, piece movement, rotation with
//! wall kicks, line clears, hold and the game lifecycle.
//!
//! Actions never fail. Illegal moves report `false` and leave the state
//! untouched. The only fatal condition is a piece that cannot be placed on
//! spawn or hold swap, which ends the game until [`Engine::restart`].

use crate::board::Board;
use crate::catalog::kicks;
use crate::piece::{Piece, PieceCells};
use crate::rng::{clock_seed, RandomBag};
use crate::scoring::{
    fall_speed, hard_drop_score, level_for_lines, line_clear_score, soft_drop_score,
};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, Phase, PieceKind, NEXT_QUEUE_LEN, PREVIEW_LEN};

/// Offsets tried when a freshly spawned piece collides, in priority order
const SPAWN_NUDGES: [(i8, i8); 9] = [
    (0, 0),
    (0, -1),
    (0, 1),
    (-1, 0),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (1, 1),
    (1, -1),
];

/// Outcome of one lock, kept until taken by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece as it was committed
    pub piece: Piece,
    pub lines_cleared: u32,
    /// Points awarded for the clear (drop points excluded)
    pub points: u32,
    /// Level after the clear was counted
    pub level: u32,
    /// Whether this lock overflowed the board
    pub top_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    active: Piece,
    hold: Option<PieceKind>,
    hold_used: bool,
    next_queue: [PieceKind; NEXT_QUEUE_LEN],
    bag: RandomBag,
    seed: u32,

    score: u32,
    lines: u32,
    level: u32,

    /// Seconds accumulated toward the next forced fall
    gravity: f64,
    phase: Phase,

    last_event: Option<LockEvent>,
}

impl Engine {
    /// Create a game; `None` derives the seed from the system clock
    pub fn new(seed: Option<u32>) -> Self {
        Self::with_seed(seed.unwrap_or_else(clock_seed))
    }

    /// Create a game with a fixed seed
    pub fn with_seed(seed: u32) -> Self {
        let mut bag = RandomBag::new(seed);
        let mut next_queue = [PieceKind::I; NEXT_QUEUE_LEN];
        for slot in next_queue.iter_mut() {
            *slot = bag.next();
        }

        let mut engine = Self {
            board: Board::new(),
            active: Piece::spawn(next_queue[0]),
            hold: None,
            hold_used: false,
            next_queue,
            bag,
            seed,
            score: 0,
            lines: 0,
            level: 1,
            gravity: 0.0,
            phase: Phase::Active,
            last_event: None,
        };
        engine.spawn_new();
        engine
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for building test positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn active_cells(&self) -> PieceCells {
        self.active.cells()
    }

    pub fn next_queue(&self) -> &[PieceKind; NEXT_QUEUE_LEN] {
        &self.next_queue
    }

    /// The upcoming kinds shown in the side panel
    pub fn preview(&self) -> &[PieceKind] {
        &self.next_queue[..PREVIEW_LEN]
    }

    pub fn hold(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.phase == Phase::Active && !self.hold_used
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Seed this game was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Current gravity interval in seconds
    pub fn fall_speed(&self) -> f64 {
        fall_speed(self.level)
    }

    fn fits(&self, cells: &PieceCells) -> bool {
        !self.board.collides(cells)
    }

    /// Bring the queue front into play and top the queue up from the bag.
    fn spawn_new(&mut self) {
        let kind = self.next_queue[0];
        self.next_queue.copy_within(1.., 0);
        self.next_queue[NEXT_QUEUE_LEN - 1] = self.bag.next();
        self.hold_used = false;

        let piece = Piece::spawn(kind);
        for (dx, dy) in SPAWN_NUDGES {
            let nudged = piece.shifted(dx, dy).filter(|p| self.fits(&p.cells()));
            if let Some(nudged) = nudged {
                self.active = nudged;
                return;
            }
        }
        self.active = piece;
        self.phase = Phase::GameOver;
    }

    /// Translate the active piece; false if blocked or not in play
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        match self.active.shifted(dx, dy) {
            Some(moved) if self.fits(&moved.cells()) => {
                self.active = moved;
                true
            }
            _ => false,
        }
    }

    /// Rotate a quarter turn; `direction > 0` is clockwise.
    ///
    /// Kick candidates are tried in order and the first that fits is taken,
    /// so rotation and position always change together.
    pub fn rotate(&mut self, direction: i8) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        let from = self.active.rotation;
        let to = from.rotate(direction);
        for &(dx, dy) in kicks(self.active.kind, from, to) {
            let Some(kicked) = self.active.shifted(dx, dy) else {
                continue;
            };
            if self.fits(&kicked.cells_at(kicked.x, kicked.y, to)) {
                self.active = Piece {
                    rotation: to,
                    ..kicked
                };
                return true;
            }
        }
        false
    }

    /// Move down one row for a point, or lock if the piece is resting.
    ///
    /// Returns whether the piece moved.
    pub fn soft_drop(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        if self.try_move(0, 1) {
            self.score += soft_drop_score(1);
            true
        } else {
            self.lock_and_clear();
            false
        }
    }

    /// Drop to the resting row and lock. Returns the distance fallen.
    pub fn hard_drop(&mut self) -> u32 {
        if self.phase != Phase::Active {
            return 0;
        }
        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.score += hard_drop_score(distance);
        self.lock_and_clear();
        distance
    }

    fn lock_and_clear(&mut self) {
        let piece = self.active;
        let cleared = self.board.lock(&piece);

        let mut points = 0;
        if cleared > 0 {
            points = line_clear_score(cleared, self.level);
            self.score += points;
            self.lines += cleared as u32;
            self.level = level_for_lines(self.lines);
        }

        let top_out = self.board.top_out();
        self.last_event = Some(LockEvent {
            piece,
            lines_cleared: cleared as u32,
            points,
            level: self.level,
            top_out,
        });

        if top_out {
            self.phase = Phase::GameOver;
            return;
        }
        self.spawn_new();
    }

    /// Set the active piece aside, once per spawn.
    pub fn hold_piece(&mut self) -> bool {
        if self.phase != Phase::Active || self.hold_used {
            return false;
        }

        let current = self.active.kind;
        match self.hold.replace(current) {
            None => self.spawn_new(),
            Some(held) => {
                self.active = Piece::spawn(held);
                if !self.fits(&self.active.cells()) {
                    self.phase = Phase::GameOver;
                }
            }
        }
        self.hold_used = true;
        true
    }

    /// Advance gravity by `dt` seconds. Returns whether a forced fall step ran.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.phase != Phase::Active {
            return false;
        }
        self.gravity += dt;
        if self.gravity < self.fall_speed() {
            return false;
        }
        self.gravity = 0.0;
        if !self.try_move(0, 1) {
            self.lock_and_clear();
        }
        true
    }

    /// Active <-> Paused. Returns false once the game is over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Active => Phase::Paused,
            Phase::Paused => Phase::Active,
            Phase::GameOver => return false,
        };
        true
    }

    /// Start over with a fresh game seeded from the current bag state
    pub fn restart(&mut self) {
        *self = Self::with_seed(self.bag.seed());
    }

    /// Apply a frame-loop action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => {
                let active = self.phase == Phase::Active;
                self.soft_drop();
                active
            }
            GameAction::HardDrop => {
                let active = self.phase == Phase::Active;
                self.hard_drop();
                active
            }
            GameAction::RotateCw => self.rotate(1),
            GameAction::RotateCcw => self.rotate(-1),
            GameAction::Hold => self.hold_piece(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the active piece would come to rest on
    pub fn ghost_y(&self) -> i8 {
        let piece = &self.active;
        let mut y = piece.y;
        while self.fits(&piece.cells_at(piece.x, y + 1, piece.rotation)) {
            y += 1;
        }
        y
    }

    /// Cells of the active piece at its resting row
    pub fn ghost_cells(&self) -> PieceCells {
        let piece = &self.active;
        piece.cells_at(piece.x, self.ghost_y(), piece.rotation)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        let live = self.phase != Phase::GameOver;
        out.active = live.then(|| ActiveSnapshot::from(self.active));
        out.ghost_y = live.then(|| self.ghost_y());
        out.hold = self.hold;
        out.next_queue = self.next_queue;
        out.can_hold = self.can_hold();
        out.phase = self.phase;
        out.seed = self.seed;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
