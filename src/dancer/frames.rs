//! Pose Definitions
//!
//! The six fixed dance poses, selected by an unbounded frame counter
//! taken modulo the cycle length.

/// Number of poses in the dance cycle
pub const FRAME_COUNT: usize = 6;

const POSES: [&str; FRAME_COUNT] = [
    "(>'.')>",
    "<('.'<)",
    "(^'.')^",
    "v('.'v)",
    "<('.'<)",
    "(>'.')>",
];

/// An ordered, fixed set of poses
#[derive(Clone, Copy, Debug)]
pub struct FrameSet {
    poses: &'static [&'static str],
}

impl FrameSet {
    /// The built-in dance cycle
    pub const fn dance() -> Self {
        Self { poses: &POSES }
    }

    /// Number of poses in the set
    pub const fn len(&self) -> usize {
        self.poses.len()
    }

    /// Whether the set has no poses
    pub const fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// Select the pose for a frame counter, wrapping around the cycle
    pub fn pose(&self, frame_index: u64) -> &'static str {
        self.poses[(frame_index % self.poses.len() as u64) as usize]
    }
}

impl Default for FrameSet {
    fn default() -> Self {
        Self::dance()
    }
}
