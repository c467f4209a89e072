//! Quality presets

use std::cell::Cell;
use tracing::{info, warn};

/// Selects the active quality preset.
pub trait QualitySettings {
    /// Returns false when `index` names no preset and nothing changed.
    fn set_quality_level(&self, index: usize) -> bool;
}

/// Named quality presets, lowest first.
pub struct QualityLevels {
    names: Vec<String>,
    current: Cell<usize>,
}

impl QualityLevels {
    pub const DEFAULT_NAMES: [&'static str; 6] =
        ["Very Low", "Low", "Medium", "High", "Very High", "Ultra"];

    pub fn new<I, S>(names: I, current: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let current = current.min(names.len().saturating_sub(1));
        Self {
            names,
            current: Cell::new(current),
        }
    }

    pub fn current(&self) -> usize {
        self.current.get()
    }

    pub fn current_name(&self) -> Option<&str> {
        self.names.get(self.current.get()).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for QualityLevels {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMES, 2)
    }
}

impl QualitySettings for QualityLevels {
    fn set_quality_level(&self, index: usize) -> bool {
        match self.names.get(index) {
            Some(name) => {
                info!(index, level = %name, "Quality level set");
                self.current.set(index);
                true
            }
            None => {
                warn!(index, levels = self.names.len(), "Unknown quality level");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_medium() {
        let levels = QualityLevels::default();
        assert_eq!(levels.names().len(), 6);
        assert_eq!(levels.current_name(), Some("Medium"));
    }

    #[test]
    fn switches_level() {
        let levels = QualityLevels::default();
        assert!(levels.set_quality_level(5));
        assert_eq!(levels.current(), 5);
        assert_eq!(levels.current_name(), Some("Ultra"));
    }

    #[test]
    fn ignores_unknown_level() {
        let levels = QualityLevels::new(["Low", "High"], 1);
        assert!(!levels.set_quality_level(7));
        assert_eq!(levels.current(), 1);
    }

    #[test]
    fn initial_level_is_clamped() {
        let levels = QualityLevels::new(["Low", "High"], 9);
        assert_eq!(levels.current(), 1);
    }
}
