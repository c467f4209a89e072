//! Marquee Runtime
//!
//! Boots logging and settings, opens the menu window and hands key presses
//! to the menus.

mod app;
mod bindings;

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

const DEFAULT_SETTINGS_PATH: &str = "settings.json";

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Marquee v{}", marquee_core::VERSION);

    let settings_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = marquee_services::Settings::load_or_default(&settings_path)
        .with_context(|| format!("loading settings from {}", settings_path.display()))?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = app::MenuApp::new(settings_path, settings);
    event_loop.run_app(&mut app).context("running event loop")?;

    tracing::info!("Shut down cleanly");
    Ok(())
}
