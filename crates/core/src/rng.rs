//! RNG module - 7-bag random piece generation
//!
//! Each bag holds one of every piece kind in shuffled order. Draws walk the
//! bag with a cursor; when it runs out a fresh, independently shuffled bag
//! takes its place. So every 7 consecutive draws starting at a multiple of 7
//! are a permutation of all seven kinds.
//!
//! Shuffling uses a small LCG so a seed fully determines the sequence.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Scales by the high bits; the low bits of an LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    /// Current generator state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct RandomBag {
    /// Current shuffled permutation
    bag: [PieceKind; 7],
    /// Index of the next draw in `bag`
    cursor: usize,
    rng: SimpleRng,
}

impl RandomBag {
    /// Create a new bag with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            bag: PieceKind::ALL,
            cursor: 0,
            rng: SimpleRng::new(seed),
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
    }

    /// Draw the next piece kind
    pub fn next(&mut self) -> PieceKind {
        if self.cursor >= self.bag.len() {
            self.refill();
        }
        let kind = self.bag[self.cursor];
        self.cursor += 1;
        kind
    }

    /// Kinds left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.cursor..]
    }

    /// Current RNG state; seeding a new bag with it continues deterministically.
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for RandomBag {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Seed derived from the wall clock, for games started without an explicit seed.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    (nanos as u32) ^ ((nanos >> 32) as u32)
}
