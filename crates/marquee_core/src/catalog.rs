//! Display mode catalog
//!
//! Collapses the platform's raw mode list (one entry per refresh rate) into
//! one selectable entry per pixel size, keeping first-seen order so picker
//! indices stay stable for the lifetime of the menu.

use crate::{CatalogError, DisplayConfiguration};
use std::collections::HashSet;

/// Deduplicated, ordered list of selectable display configurations.
///
/// Built once when the settings surface starts and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayModeCatalog {
    modes: Vec<DisplayConfiguration>,
}

impl DisplayModeCatalog {
    /// Build the catalog and find the entry matching `active`.
    ///
    /// Returns the catalog and the index of the first entry with the same
    /// width and height as `active`, or 0 when nothing matches (including
    /// the empty catalog).
    pub fn build<I>(raw_modes: I, active: DisplayConfiguration) -> (Self, usize)
    where
        I: IntoIterator,
        I::Item: Into<DisplayConfiguration>,
    {
        let mut seen = HashSet::new();
        let modes: Vec<DisplayConfiguration> = raw_modes
            .into_iter()
            .map(Into::into)
            .filter(|config| seen.insert(*config))
            .collect();

        let active_index = modes.iter().position(|m| *m == active).unwrap_or(0);

        tracing::debug!(
            entries = modes.len(),
            active = %active,
            active_index,
            "Built display mode catalog"
        );

        (Self { modes }, active_index)
    }

    /// Configuration at `index`.
    pub fn resolve(&self, index: usize) -> Result<DisplayConfiguration, CatalogError> {
        self.modes
            .get(index)
            .copied()
            .ok_or(CatalogError::OutOfRange {
                index,
                len: self.modes.len(),
            })
    }

    /// One `"<width> x <height>"` label per entry, in catalog order.
    pub fn labels(&self) -> Vec<String> {
        self.modes.iter().map(DisplayConfiguration::label).collect()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisplayConfiguration> {
        self.modes.iter()
    }

    pub fn as_slice(&self) -> &[DisplayConfiguration] {
        &self.modes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayMode;

    fn cfg(width: u32, height: u32) -> DisplayConfiguration {
        DisplayConfiguration::new(width, height)
    }

    #[test]
    fn collapses_refresh_rate_variants() {
        let raw = [
            DisplayMode::new(1920, 1080, 60_000),
            DisplayMode::new(1920, 1080, 144_000),
            DisplayMode::new(1280, 720, 60_000),
        ];
        let (catalog, active_index) = DisplayModeCatalog::build(raw, cfg(1920, 1080));

        assert_eq!(catalog.as_slice(), &[cfg(1920, 1080), cfg(1280, 720)]);
        assert_eq!(active_index, 0);
    }

    #[test]
    fn empty_input_gives_empty_catalog() {
        let (catalog, active_index) =
            DisplayModeCatalog::build(Vec::<DisplayMode>::new(), cfg(800, 600));

        assert!(catalog.is_empty());
        assert_eq!(active_index, 0);
        assert!(catalog.labels().is_empty());
    }

    #[test]
    fn unmatched_active_defaults_to_zero() {
        let raw = [DisplayMode::new(640, 480, 60_000)];
        let (catalog, active_index) = DisplayModeCatalog::build(raw, cfg(1920, 1080));

        assert_eq!(catalog.as_slice(), &[cfg(640, 480)]);
        assert_eq!(active_index, 0);
    }

    #[test]
    fn active_index_points_at_matching_entry() {
        let raw: [(u32, u32); 5] = [
            (2560, 1440),
            (1920, 1080),
            (2560, 1440),
            (1280, 720),
            (1920, 1080),
        ];
        let (catalog, active_index) = DisplayModeCatalog::build(raw, cfg(1280, 720));

        assert_eq!(catalog.len(), 3);
        assert_eq!(active_index, 2);
        assert_eq!(catalog.resolve(active_index), Ok(cfg(1280, 720)));
    }

    #[test]
    fn keeps_first_seen_order_without_duplicates() {
        let raw: [(u32, u32); 7] = [
            (800, 600),
            (1024, 768),
            (800, 600),
            (640, 480),
            (1024, 768),
            (640, 480),
            (1600, 900),
        ];
        let (catalog, _) = DisplayModeCatalog::build(raw, DisplayConfiguration::UNKNOWN);

        assert_eq!(
            catalog.as_slice(),
            &[cfg(800, 600), cfg(1024, 768), cfg(640, 480), cfg(1600, 900)]
        );

        let unique: HashSet<_> = catalog.iter().collect();
        assert_eq!(unique.len(), catalog.len());
    }

    #[test]
    fn transposed_sizes_are_distinct() {
        let (catalog, active_index) =
            DisplayModeCatalog::build([cfg(1080, 1920), cfg(1920, 1080)], cfg(1920, 1080));

        assert_eq!(catalog.len(), 2);
        assert_eq!(active_index, 1);
    }

    #[test]
    fn build_is_repeatable() {
        let raw = vec![
            DisplayMode::new(1920, 1080, 60_000),
            DisplayMode::new(1366, 768, 60_000),
            DisplayMode::new(1920, 1080, 75_000),
        ];
        let first = DisplayModeCatalog::build(raw.clone(), cfg(1366, 768));
        let second = DisplayModeCatalog::build(raw, cfg(1366, 768));

        assert_eq!(first, second);
        assert_eq!(first.1, 1);
    }

    #[test]
    fn resolve_matches_label() {
        let (catalog, _) =
            DisplayModeCatalog::build([cfg(1920, 1080), cfg(1280, 720)], cfg(1920, 1080));

        let resolved = catalog.resolve(1).unwrap();
        assert_eq!(resolved, cfg(1280, 720));
        assert_eq!(resolved.label(), "1280 x 720");

        for (index, label) in catalog.labels().iter().enumerate() {
            assert_eq!(&catalog.resolve(index).unwrap().to_string(), label);
        }
    }

    #[test]
    fn resolve_past_end_is_out_of_range() {
        let (catalog, _) = DisplayModeCatalog::build([cfg(1920, 1080)], cfg(1920, 1080));

        assert_eq!(
            catalog.resolve(5),
            Err(CatalogError::OutOfRange { index: 5, len: 1 })
        );
        assert!(catalog.resolve(1).is_err());
    }

    #[test]
    fn resolve_on_empty_catalog_fails() {
        let catalog = DisplayModeCatalog::default();
        assert_eq!(
            catalog.resolve(0),
            Err(CatalogError::OutOfRange { index: 0, len: 0 })
        );
    }
}
