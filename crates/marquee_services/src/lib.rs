//! Marquee Services Layer
//!
//! Platform abstraction for scenes, quality levels, URL launching, process
//! control and persisted settings. Each capability is a narrow trait the
//! menus receive at construction; the structs here are the default host
//! implementations.

pub mod process;
pub mod quality;
pub mod scene;
pub mod settings;
pub mod url;

pub use process::{ProcessControl, QuitFlag};
pub use quality::{QualityLevels, QualitySettings};
pub use scene::{SceneList, SceneLoader};
pub use settings::{Settings, SettingsError};
pub use url::{SystemUrlLauncher, UrlLauncher};
