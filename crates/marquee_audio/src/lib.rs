//! Marquee Audio
//!
//! Mixer capability used by the menus. Gain values are forwarded as-is;
//! range handling belongs to the mixer implementation.

pub mod mixer;

pub use mixer::Mixer;

/// Exposed parameter controlling overall gain.
pub const MASTER_VOLUME: &str = "volume";
/// Exposed parameter controlling the music group.
pub const MUSIC_VOLUME: &str = "musicvolume";
/// Exposed parameter controlling the sound-effects group.
pub const SFX_VOLUME: &str = "sfxvolume";

/// Anything that accepts named float parameters.
pub trait AudioMixer {
    fn set_parameter(&self, name: &str, value: f32);
}
