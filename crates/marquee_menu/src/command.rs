//! Typed menu actions

use crate::{MainMenu, MenuError, SettingsMenu};

/// Every action a menu widget can trigger.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuCommand {
    PlayGame,
    Promote,
    QuitGame,
    LoadScene(usize),
    SetResolution(usize),
    SetVolume(f32),
    SetMusicVolume(f32),
    SetSfxVolume(f32),
    SetQuality(usize),
    SetFullscreen(bool),
}

/// Both menus, routed by [`MenuCommand`].
pub struct Menus {
    pub main: MainMenu,
    pub settings: SettingsMenu,
}

impl Menus {
    pub fn new(main: MainMenu, settings: SettingsMenu) -> Self {
        Self { main, settings }
    }

    pub fn dispatch(&mut self, command: MenuCommand) -> Result<(), MenuError> {
        tracing::debug!(?command, "Dispatching menu command");

        match command {
            MenuCommand::PlayGame => self.main.play_game(),
            MenuCommand::Promote => self.main.promote(),
            MenuCommand::QuitGame => self.main.quit_game(),
            MenuCommand::LoadScene(level) => self.settings.load_scene(level),
            MenuCommand::SetResolution(index) => {
                self.settings.set_resolution(index)?;
            }
            MenuCommand::SetVolume(volume) => self.settings.set_volume(volume),
            MenuCommand::SetMusicVolume(volume) => self.settings.set_music_volume(volume),
            MenuCommand::SetSfxVolume(volume) => self.settings.set_sfx_volume(volume),
            MenuCommand::SetQuality(index) => self.settings.set_quality(index),
            MenuCommand::SetFullscreen(fullscreen) => self.settings.set_fullscreen(fullscreen),
        }
        Ok(())
    }
}
