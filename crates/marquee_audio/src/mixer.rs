//! In-process mixer holding exposed parameters

use crate::{AudioMixer, MASTER_VOLUME, MUSIC_VOLUME, SFX_VOLUME};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mixer with a table of exposed float parameters.
///
/// Values are stored unclamped. Unknown names are accepted so game code can
/// expose extra parameters without registering them first.
pub struct Mixer {
    parameters: RefCell<HashMap<String, f32>>,
}

impl Mixer {
    /// Mixer with the three menu volume parameters at 0 dB.
    pub fn new() -> Self {
        let parameters = [MASTER_VOLUME, MUSIC_VOLUME, SFX_VOLUME]
            .into_iter()
            .map(|name| (name.to_string(), 0.0))
            .collect();
        Self {
            parameters: RefCell::new(parameters),
        }
    }

    pub fn parameter(&self, name: &str) -> Option<f32> {
        self.parameters.borrow().get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.parameters.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.borrow().is_empty()
    }
}

impl Default for Mixer {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioMixer for Mixer {
    fn set_parameter(&self, name: &str, value: f32) {
        let previous = self.parameters.borrow_mut().insert(name.to_string(), value);
        if previous.is_none() {
            tracing::debug!(name, "Exposing new mixer parameter");
        }
        tracing::trace!(name, value, "Mixer parameter set");
    }
}
