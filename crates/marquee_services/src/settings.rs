//! Settings management
//!
//! Persisted as pretty JSON. Every field has a default, so partial files
//! from older builds still load.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;
use tracing::info;

/// Errors raised while loading or saving [`Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read or write settings file: {0}")]
    Io(#[from] io::Error),

    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Menu settings persisted between runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub graphics: GraphicsSettings,
    pub audio: AudioSettings,
    pub promotion: PromotionSettings,
    pub scenes: SceneSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsSettings {
    pub resolution_width: u32,
    pub resolution_height: u32,
    pub fullscreen: bool,
    pub quality_level: usize,
}

/// Mixer gains in decibels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub master_volume: f32,
    pub music_volume: f32,
    pub sfx_volume: f32,
}

/// Share-link pieces for the main menu's promote button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionSettings {
    pub base_url: String,
    pub message: String,
    pub description: String,
    pub link: String,
    /// Carried for the share target but not part of the generated URL.
    pub language: String,
}

/// Scene names in build order; index 0 is the menu scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneSettings(pub Vec<String>);

impl Default for GraphicsSettings {
    fn default() -> Self {
        Self {
            resolution_width: 1280,
            resolution_height: 720,
            fullscreen: false,
            quality_level: 2,
        }
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.0,
            music_volume: 0.0,
            sfx_volume: 0.0,
        }
    }
}

impl Default for PromotionSettings {
    fn default() -> Self {
        Self {
            base_url: "http://twitter.com/intent/tweet".to_string(),
            message: "Just played GAME TITLE, GAME DESCRIPTION".to_string(),
            description: String::new(),
            link: "INSERT LINK HERE".to_string(),
            language: "en".to_string(),
        }
    }
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self(vec!["Menu".to_string(), "Game".to_string()])
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(json) => {
                let settings = Self::from_json(&json)?;
                info!(path = %path.display(), "Loaded settings");
                Ok(settings)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(path = %path.display(), "No settings file, using defaults");
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "Saved settings");
        Ok(())
    }
}
