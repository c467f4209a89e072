//! Display configurations
//!
//! A [`DisplayMode`] is what the platform reports (size plus refresh rate).
//! A [`DisplayConfiguration`] is what the user picks: pixel size only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selectable screen size. Equality ignores refresh rate.
///
/// Real modes always have both sides non-zero; [`UNKNOWN`](Self::UNKNOWN)
/// stands for a size the platform did not report and matches no mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DisplayConfiguration {
    pub width: u32,
    pub height: u32,
}

impl DisplayConfiguration {
    pub const UNKNOWN: Self = Self::new(0, 0);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// False for [`UNKNOWN`](Self::UNKNOWN) or any zero-sized configuration.
    pub fn is_known(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Picker label, e.g. `"1920 x 1080"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DisplayConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.width, self.height)
    }
}

impl From<(u32, u32)> for DisplayConfiguration {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Raw video mode as reported by the host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub refresh_rate_millihertz: u32,
}

impl DisplayMode {
    pub const fn new(width: u32, height: u32, refresh_rate_millihertz: u32) -> Self {
        Self {
            width,
            height,
            refresh_rate_millihertz,
        }
    }

    /// Refresh rate rounded down to whole hertz.
    pub fn refresh_rate_hz(&self) -> u32 {
        self.refresh_rate_millihertz / 1000
    }

    pub fn configuration(&self) -> DisplayConfiguration {
        DisplayConfiguration::new(self.width, self.height)
    }
}

impl From<DisplayMode> for DisplayConfiguration {
    fn from(mode: DisplayMode) -> Self {
        mode.configuration()
    }
}
