//! Dancer System
//!
//! The kaomoji sprite at the heart of the animation:
//! - A fixed six-pose dance cycle, immutable for the process lifetime
//! - Per-tick animation state (frame counter, offset, direction)
//! - Triangle-wave travel between the left margin and `MAX_OFFSET`

mod frames;
mod state;

pub use frames::{FrameSet, FRAME_COUNT};
pub use state::{DancerState, Direction, MAX_OFFSET};
