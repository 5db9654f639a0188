//! Frame Composition
//!
//! Pure assembly of one animation frame into text: top margin, the pose at
//! its current indentation, then the instruction line. Kept free of terminal
//! I/O so the exact output bytes are unit-testable.

use crate::dancer::{DancerState, FrameSet};

/// Blank lines above the sprite
pub const TOP_MARGIN: usize = 3;

/// Blank lines between the sprite and the instruction line
pub const BOTTOM_MARGIN: usize = 2;

/// Instruction line shown under the sprite
pub const INSTRUCTION: &str = "Press [CTRL+C] to stop the dance...";

/// Farewell printed when the dance is interrupted
pub const FAREWELL: &str = "Dance over!";

/// Compose the full text of one frame
///
/// The offset is rendered as leading spaces; `DancerState::tick` guarantees
/// it is non-negative.
pub fn compose_frame(state: &DancerState, frames: &FrameSet) -> String {
    let pose = frames.pose(state.frame_index);

    let mut out = String::with_capacity(80);
    out.push_str(&"\n".repeat(TOP_MARGIN));
    out.push_str(&" ".repeat(state.offset as usize));
    out.push_str(pose);
    out.push('\n');
    out.push_str(&"\n".repeat(BOTTOM_MARGIN));
    out.push_str(INSTRUCTION);
    out.push('\n');
    out
}

/// Compose the farewell text emitted once on shutdown
pub fn compose_farewell() -> String {
    format!("\n{FAREWELL}\n")
}
