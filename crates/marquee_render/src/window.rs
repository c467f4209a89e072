//! Window management
//!
//! Cross-platform window creation via winit

use winit::window::{Fullscreen, Window};

pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Marquee".to_string(),
            width: 1280,
            height: 720,
            fullscreen: false,
        }
    }
}

/// Create window attributes from config
///
/// Sizes are physical pixels so they line up with the monitor's video modes.
pub fn window_attributes(config: WindowConfig) -> winit::window::WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(config.title)
        .with_inner_size(winit::dpi::PhysicalSize::new(config.width, config.height));

    if config.fullscreen {
        attrs.with_fullscreen(Some(Fullscreen::Borderless(None)))
    } else {
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windowed_by_default() {
        let attrs = window_attributes(WindowConfig::default());
        assert_eq!(attrs.title, "Marquee");
        assert_eq!(attrs.fullscreen, None);
    }

    #[test]
    fn fullscreen_config_requests_borderless() {
        let attrs = window_attributes(WindowConfig {
            fullscreen: true,
            ..Default::default()
        });
        assert_eq!(attrs.fullscreen, Some(Fullscreen::Borderless(None)));
    }
}
