//! Dancer TUI - a tiny kaomoji dancer for your terminal
//!
//! Renders a looping ASCII animation: a six-pose kaomoji sprite shuffles
//! left and right across the screen until Ctrl+C stops the dance.
//!
//! # Architecture
//!
//! - **Dancer**: the fixed pose cycle and the per-tick animation state
//! - **Render**: pure composition of one frame into bytes
//! - **Screen**: terminal side effects (clear, cursor, write)
//! - **App**: the tick/sleep loop with graceful Ctrl+C shutdown

pub mod app;
pub mod dancer;
pub mod render;
pub mod screen;

pub use app::App;
