//! Terminal Side Effects
//!
//! Owns the output handle used for every redraw. The full-screen clear goes
//! through crossterm, which resolves the host-appropriate control path
//! (legacy Windows console API vs ANSI sequences) once per handle, so the
//! platform choice is not re-evaluated on every tick.
//!
//! The writer is generic so tests can capture the exact byte stream; the
//! running program uses stdout.

use std::io::{self, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// Terminal output for full-frame redraws
pub struct Screen<W: Write = io::Stdout> {
    out: W,
}

impl Screen {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Screen<W> {
    /// Wrap an arbitrary writer (used by tests to capture output)
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    /// Full-screen clear with the cursor returned to the origin
    pub fn clear(&mut self) -> Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
            .context("failed to clear the terminal")?;
        Ok(())
    }

    /// Write one composed frame and flush so it appears immediately
    pub fn present(&mut self, frame: &str) -> Result<()> {
        self.out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush())
            .context("failed to write to the terminal")?;
        Ok(())
    }

    /// Borrow the underlying writer (for inspection in tests)
    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
