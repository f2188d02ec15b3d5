//! Scoring module - line clear points, drop points and level progression
//!
//! Line clears pay `LINE_SCORES[n] * level`, where `level` is the value in
//! effect before the clear is counted. Levels start at 1 and advance every
//! `LINES_PER_LEVEL` lines.

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, HARD_DROP_POINTS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS,
    SOFT_DROP_POINTS,
};

/// Calculate line clear score
/// lines: number of rows cleared in one lock
/// level: current level (1-based)
pub fn line_clear_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    // Boards built by hand can clear more than four rows at once; pay them as a four.
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Points for a soft drop of `cells` rows
pub fn soft_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(SOFT_DROP_POINTS)
}

/// Points for a hard drop of `cells` rows
pub fn hard_drop_score(cells: u32) -> u32 {
    cells.saturating_mul(HARD_DROP_POINTS)
}

/// Level reached after `lines` total cleared rows
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity interval in milliseconds for a level
pub fn fall_interval_ms(level: u32) -> u32 {
    let steps = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(steps).max(MIN_FALL_MS)
}

/// Gravity interval in seconds for a level
pub fn fall_speed(level: u32) -> f64 {
    fall_interval_ms(level) as f64 / 1000.0
}
