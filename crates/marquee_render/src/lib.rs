//! Marquee Render
//!
//! Display capability for the settings menu plus winit window helpers

pub mod display;
pub mod window;

pub use display::WinitDisplay;
pub use winit;

use marquee_core::{DisplayConfiguration, DisplayMode};

/// Display operations the settings menu relies on.
pub trait DisplayService {
    /// Every mode the current output reports, duplicates included.
    fn available_modes(&self) -> Vec<DisplayMode>;

    /// Size currently in effect.
    fn current_resolution(&self) -> DisplayConfiguration;

    fn is_fullscreen(&self) -> bool;

    fn set_resolution(&self, width: u32, height: u32, fullscreen: bool);

    fn set_fullscreen(&self, fullscreen: bool);
}
