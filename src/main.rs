//! Dancer TUI Entry Point
//!
//! Launches the kaomoji dancer. No arguments or flags; `RUST_LOG` controls
//! diagnostic logging only and leaves the animation output untouched.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dancer_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut app = App::new();
    app.run().await
}
