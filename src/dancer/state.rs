//! Animation State
//!
//! Three scalars owned exclusively by the run loop: an unbounded frame
//! counter, a bounded horizontal offset, and the current travel direction.
//! Advanced exactly once per tick.

/// Horizontal travel bound, in leading spaces
pub const MAX_OFFSET: i16 = 20;

/// Sign applied to the offset each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Per-tick offset delta
    pub const fn step(self) -> i16 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Mutable animation state, advanced once per tick
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DancerState {
    /// Ticks elapsed so far; selects the pose modulo the cycle length.
    /// Never resets.
    pub frame_index: u64,
    /// Leading spaces before the pose; stays within `[0, MAX_OFFSET]`
    pub offset: i16,
    /// Current travel direction
    pub direction: Direction,
}

impl DancerState {
    /// Initial state: left margin, moving right, first pose
    pub const fn new() -> Self {
        Self {
            frame_index: 0,
            offset: 0,
            direction: Direction::Right,
        }
    }

    /// Advance one tick: bump the frame counter, step the offset, and flip
    /// direction when the offset reaches either travel bound.
    ///
    /// Flipping at the bound rather than past it keeps the offset inside
    /// `[0, MAX_OFFSET]` after every tick while preserving the 40-tick
    /// back-and-forth period.
    pub fn tick(&mut self) {
        self.frame_index += 1;
        self.offset += self.direction.step();

        if self.offset >= MAX_OFFSET {
            self.direction = Direction::Left;
        } else if self.offset <= 0 {
            self.direction = Direction::Right;
        }
    }
}

impl Default for DancerState {
    fn default() -> Self {
        Self::new()
    }
}
