//! winit-backed display service

use crate::DisplayService;
use marquee_core::{DisplayConfiguration, DisplayMode};
use std::sync::Arc;
use tracing::{debug, info};
use winit::{
    dpi::PhysicalSize,
    monitor::VideoModeHandle,
    window::{Fullscreen, Window},
};

/// Display service driving a single winit window and its current monitor.
pub struct WinitDisplay {
    window: Arc<Window>,
}

impl WinitDisplay {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window }
    }

    /// Highest-refresh exclusive mode of exactly `width` x `height`.
    fn exclusive_mode(&self, width: u32, height: u32) -> Option<VideoModeHandle> {
        let monitor = self.window.current_monitor()?;
        monitor
            .video_modes()
            .filter(|mode| {
                let size = mode.size();
                size.width == width && size.height == height
            })
            .max_by_key(|mode| mode.refresh_rate_millihertz())
    }
}

impl DisplayService for WinitDisplay {
    fn available_modes(&self) -> Vec<DisplayMode> {
        let Some(monitor) = self.window.current_monitor() else {
            info!("No current monitor detected");
            return Vec::new();
        };

        let modes: Vec<DisplayMode> = monitor
            .video_modes()
            .map(|mode| {
                let size = mode.size();
                DisplayMode::new(size.width, size.height, mode.refresh_rate_millihertz())
            })
            .collect();

        debug!(
            monitor = ?monitor.name(),
            count = modes.len(),
            "Enumerated video modes"
        );
        modes
    }

    fn current_resolution(&self) -> DisplayConfiguration {
        let size = self.window.inner_size();
        DisplayConfiguration::new(size.width, size.height)
    }

    fn is_fullscreen(&self) -> bool {
        self.window.fullscreen().is_some()
    }

    fn set_resolution(&self, width: u32, height: u32, fullscreen: bool) {
        if !fullscreen {
            info!("Windowed {}x{}", width, height);
            self.window.set_fullscreen(None);
            let _ = self.window.request_inner_size(PhysicalSize::new(width, height));
            return;
        }

        match self.exclusive_mode(width, height) {
            Some(mode) => {
                let refresh_hz = DisplayMode::new(width, height, mode.refresh_rate_millihertz())
                    .refresh_rate_hz();
                info!("Exclusive fullscreen {}x{} @ {}Hz", width, height, refresh_hz);
                self.window.set_fullscreen(Some(Fullscreen::Exclusive(mode)));
            }
            None => {
                info!("No {}x{} video mode, entering borderless fullscreen", width, height);
                let _ = self.window.request_inner_size(PhysicalSize::new(width, height));
                self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
            }
        }
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        if fullscreen == self.is_fullscreen() {
            return;
        }

        if fullscreen {
            info!("Entering borderless fullscreen");
            self.window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        } else {
            info!("Exiting fullscreen");
            self.window.set_fullscreen(None);
        }
    }
}
