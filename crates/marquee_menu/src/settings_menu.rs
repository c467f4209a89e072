//! Options screen: resolution picker, volume sliders, quality and fullscreen

use crate::MenuError;
use marquee_audio::{AudioMixer, MASTER_VOLUME, MUSIC_VOLUME, SFX_VOLUME};
use marquee_core::{DisplayConfiguration, DisplayModeCatalog};
use marquee_render::DisplayService;
use marquee_services::settings::{AudioSettings, GraphicsSettings, Settings};
use marquee_services::{QualitySettings, SceneLoader};
use std::rc::Rc;
use tracing::{error, info, warn};

pub struct SettingsMenu {
    display: Rc<dyn DisplayService>,
    mixer: Rc<dyn AudioMixer>,
    quality: Rc<dyn QualitySettings>,
    scenes: Rc<dyn SceneLoader>,
    catalog: DisplayModeCatalog,
    selected_resolution: usize,
    graphics: GraphicsSettings,
    audio: AudioSettings,
}

impl SettingsMenu {
    pub fn new(
        display: Rc<dyn DisplayService>,
        mixer: Rc<dyn AudioMixer>,
        quality: Rc<dyn QualitySettings>,
        scenes: Rc<dyn SceneLoader>,
    ) -> Self {
        Self {
            display,
            mixer,
            quality,
            scenes,
            catalog: DisplayModeCatalog::default(),
            selected_resolution: 0,
            graphics: GraphicsSettings::default(),
            audio: AudioSettings::default(),
        }
    }

    /// Populate the resolution picker from the display.
    pub fn start(&mut self) {
        let active = self.display.current_resolution();
        if !active.is_known() {
            warn!("Display did not report its current size");
        }
        let (catalog, active_index) =
            DisplayModeCatalog::build(self.display.available_modes(), active);

        if catalog.is_empty() {
            warn!("Display reported no modes, resolution picker disabled");
        } else {
            info!(
                options = catalog.len(),
                selected = %catalog.as_slice()[active_index],
                "Resolution picker ready"
            );
        }

        self.catalog = catalog;
        self.selected_resolution = active_index;
        self.graphics.resolution_width = active.width;
        self.graphics.resolution_height = active.height;
        self.graphics.fullscreen = self.display.is_fullscreen();
    }

    /// Replay persisted settings through the menu actions.
    ///
    /// Call after [`start`](Self::start). A saved resolution the display no
    /// longer offers is skipped.
    pub fn apply(&mut self, settings: &Settings) {
        self.set_volume(settings.audio.master_volume);
        self.set_music_volume(settings.audio.music_volume);
        self.set_sfx_volume(settings.audio.sfx_volume);
        self.set_quality(settings.graphics.quality_level);
        self.set_fullscreen(settings.graphics.fullscreen);

        let saved = DisplayConfiguration::new(
            settings.graphics.resolution_width,
            settings.graphics.resolution_height,
        );
        let found = self.catalog.iter().position(|config| *config == saved);
        match found {
            Some(index) => {
                if let Err(err) = self.set_resolution(index) {
                    warn!(%err, resolution = %saved, "Saved resolution not applied");
                }
            }
            None => warn!(resolution = %saved, "Saved resolution not offered by display"),
        }
    }

    /// Copy the menu's current graphics and audio choices into `settings`.
    pub fn store(&self, settings: &mut Settings) {
        settings.graphics = self.graphics.clone();
        settings.audio = self.audio.clone();
    }

    pub fn load_scene(&self, level: usize) {
        self.scenes.load_scene(level);
    }

    /// Apply the catalog entry at `index`, keeping the current fullscreen state.
    pub fn set_resolution(&mut self, index: usize) -> Result<DisplayConfiguration, MenuError> {
        let config = match self.catalog.resolve(index) {
            Ok(config) => config,
            Err(err) => {
                error!(%err, "Resolution selection rejected");
                return Err(err.into());
            }
        };

        let fullscreen = self.display.is_fullscreen();
        self.display
            .set_resolution(config.width, config.height, fullscreen);

        self.selected_resolution = index;
        self.graphics.resolution_width = config.width;
        self.graphics.resolution_height = config.height;
        self.graphics.fullscreen = fullscreen;
        Ok(config)
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.mixer.set_parameter(MASTER_VOLUME, volume);
        self.audio.master_volume = volume;
    }

    pub fn set_music_volume(&mut self, volume: f32) {
        self.mixer.set_parameter(MUSIC_VOLUME, volume);
        self.audio.music_volume = volume;
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.mixer.set_parameter(SFX_VOLUME, volume);
        self.audio.sfx_volume = volume;
    }

    /// Forward `quality_index`; only a level the service accepted is recorded.
    pub fn set_quality(&mut self, quality_index: usize) {
        if self.quality.set_quality_level(quality_index) {
            self.graphics.quality_level = quality_index;
        }
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.display.set_fullscreen(fullscreen);
        self.graphics.fullscreen = fullscreen;
    }

    pub fn catalog(&self) -> &DisplayModeCatalog {
        &self.catalog
    }

    /// Picker labels in catalog order.
    pub fn resolution_options(&self) -> Vec<String> {
        self.catalog.labels()
    }

    pub fn selected_resolution(&self) -> usize {
        self.selected_resolution
    }

    /// False when the display offered nothing to pick from.
    pub fn resolution_selection_enabled(&self) -> bool {
        !self.catalog.is_empty()
    }

    pub fn graphics(&self) -> &GraphicsSettings {
        &self.graphics
    }

    pub fn audio(&self) -> &AudioSettings {
        &self.audio
    }
}
