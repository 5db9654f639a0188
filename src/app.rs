//! Main Application
//!
//! The App drives the animation lifecycle:
//! - one tick every 150ms: clear the screen, draw the frame, advance state
//! - Ctrl+C, observed at any point including mid-sleep, ends the dance
//!   with a single farewell line and a clean exit
//!
//! The loop body lives in `run_until`, which takes the shutdown future as a
//! parameter; `run` supplies the real Ctrl+C listener and tests supply a
//! future they control.

use std::future::Future;
use std::io::{self, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::dancer::{DancerState, FrameSet};
use crate::render;
use crate::screen::Screen;

/// Delay between animation ticks
pub const TICK_INTERVAL: Duration = Duration::from_millis(150);

/// Main application state
pub struct App<W: Write = io::Stdout> {
    /// Is the dance still running?
    running: bool,
    /// Animation state, advanced once per tick
    state: DancerState,
    /// The fixed pose cycle
    frames: FrameSet,
    /// Terminal output
    screen: Screen<W>,
}

impl App {
    pub fn new() -> Self {
        Self::with_screen(Screen::new())
    }
}

impl<W: Write> App<W> {
    /// Build an App around a specific screen (used by tests to capture
    /// output)
    pub fn with_screen(screen: Screen<W>) -> Self {
        Self {
            running: true,
            state: DancerState::new(),
            frames: FrameSet::dance(),
            screen,
        }
    }

    /// Render the current state, then advance it by one tick
    fn draw_and_advance(&mut self) -> Result<()> {
        self.screen.clear()?;
        let frame = render::compose_frame(&self.state, &self.frames);
        self.screen.present(&frame)?;
        self.state.tick();
        Ok(())
    }

    /// Run the animation loop until Ctrl+C
    pub async fn run(&mut self) -> Result<()> {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .context("failed to listen for Ctrl+C")
        };
        self.run_until(ctrl_c).await
    }

    /// Run the animation loop until `shutdown` resolves
    ///
    /// Exactly one farewell line is emitted after the loop stops, and no
    /// further ticks occur once shutdown has been observed.
    pub async fn run_until(
        &mut self,
        shutdown: impl Future<Output = Result<()>>,
    ) -> Result<()> {
        info!("starting the dance");
        tokio::pin!(shutdown);

        while self.running {
            self.draw_and_advance()?;

            tokio::select! {
                biased;

                result = &mut shutdown => {
                    result?;
                    debug!("shutdown observed, stopping");
                    self.running = false;
                }
                () = tokio::time::sleep(TICK_INTERVAL) => {}
            }
        }

        self.screen.present(&render::compose_farewell())?;
        info!("dance stopped");
        Ok(())
    }

    /// Current animation state (for inspection in tests)
    pub fn state(&self) -> &DancerState {
        &self.state
    }

    /// Whether the loop would keep ticking
    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
