//! Keyboard bindings resolved to menu commands

use marquee_menu::{MenuCommand, SettingsMenu};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Master volume change per key press, in decibels.
const VOLUME_STEP_DB: f32 = 5.0;

/// What a key does. Relative actions read the settings menu's current
/// state when pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    Command(MenuCommand),
    CycleResolution(isize),
    ToggleFullscreen,
    NudgeVolume(f32),
}

pub struct KeyBindings {
    map: HashMap<KeyCode, Binding>,
}

impl KeyBindings {
    pub fn resolve(&self, key: KeyCode, settings: &SettingsMenu) -> Option<MenuCommand> {
        let command = match *self.map.get(&key)? {
            Binding::Command(command) => command,
            Binding::CycleResolution(step) => {
                if !settings.resolution_selection_enabled() {
                    return None;
                }
                let len = settings.catalog().len() as isize;
                let next = (settings.selected_resolution() as isize + step).rem_euclid(len);
                MenuCommand::SetResolution(next as usize)
            }
            Binding::ToggleFullscreen => {
                MenuCommand::SetFullscreen(!settings.graphics().fullscreen)
            }
            Binding::NudgeVolume(delta) => {
                MenuCommand::SetVolume(settings.audio().master_volume + delta)
            }
        };
        Some(command)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let quality_keys = [
            KeyCode::Digit1,
            KeyCode::Digit2,
            KeyCode::Digit3,
            KeyCode::Digit4,
            KeyCode::Digit5,
            KeyCode::Digit6,
        ];

        let mut map = HashMap::from([
            (KeyCode::Enter, Binding::Command(MenuCommand::PlayGame)),
            (KeyCode::KeyP, Binding::Command(MenuCommand::Promote)),
            (KeyCode::Escape, Binding::Command(MenuCommand::QuitGame)),
            (KeyCode::KeyM, Binding::Command(MenuCommand::LoadScene(0))),
            (KeyCode::ArrowUp, Binding::CycleResolution(-1)),
            (KeyCode::ArrowDown, Binding::CycleResolution(1)),
            (KeyCode::KeyF, Binding::ToggleFullscreen),
            (KeyCode::Minus, Binding::NudgeVolume(-VOLUME_STEP_DB)),
            (KeyCode::Equal, Binding::NudgeVolume(VOLUME_STEP_DB)),
        ]);
        for (level, key) in quality_keys.into_iter().enumerate() {
            map.insert(key, Binding::Command(MenuCommand::SetQuality(level)));
        }

        Self { map }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_audio::Mixer;
    use marquee_core::{DisplayConfiguration, DisplayMode};
    use marquee_render::DisplayService;
    use marquee_services::{QualityLevels, SceneList};
    use std::rc::Rc;

    struct FixedDisplay(Vec<DisplayMode>);

    impl DisplayService for FixedDisplay {
        fn available_modes(&self) -> Vec<DisplayMode> {
            self.0.clone()
        }
        fn current_resolution(&self) -> DisplayConfiguration {
            DisplayConfiguration::new(1920, 1080)
        }
        fn is_fullscreen(&self) -> bool {
            false
        }
        fn set_resolution(&self, _width: u32, _height: u32, _fullscreen: bool) {}
        fn set_fullscreen(&self, _fullscreen: bool) {}
    }

    fn settings_menu(modes: Vec<DisplayMode>) -> SettingsMenu {
        let mut menu = SettingsMenu::new(
            Rc::new(FixedDisplay(modes)),
            Rc::new(Mixer::new()),
            Rc::new(QualityLevels::default()),
            Rc::new(SceneList::new(["Menu", "Game"])),
        );
        menu.start();
        menu
    }

    #[test]
    fn resolution_keys_wrap_around() {
        let bindings = KeyBindings::default();
        let menu = settings_menu(vec![
            DisplayMode::new(1920, 1080, 60_000),
            DisplayMode::new(1280, 720, 60_000),
            DisplayMode::new(800, 600, 60_000),
        ]);

        assert_eq!(
            bindings.resolve(KeyCode::ArrowUp, &menu),
            Some(MenuCommand::SetResolution(2))
        );
        assert_eq!(
            bindings.resolve(KeyCode::ArrowDown, &menu),
            Some(MenuCommand::SetResolution(1))
        );
    }

    #[test]
    fn resolution_keys_do_nothing_without_modes() {
        let bindings = KeyBindings::default();
        let menu = settings_menu(Vec::new());
        assert_eq!(bindings.resolve(KeyCode::ArrowDown, &menu), None);
    }

    #[test]
    fn relative_bindings_read_menu_state() {
        let bindings = KeyBindings::default();
        let mut menu = settings_menu(Vec::new());
        menu.set_volume(-10.0);

        assert_eq!(
            bindings.resolve(KeyCode::Minus, &menu),
            Some(MenuCommand::SetVolume(-15.0))
        );
        assert_eq!(
            bindings.resolve(KeyCode::KeyF, &menu),
            Some(MenuCommand::SetFullscreen(true))
        );
    }

    #[test]
    fn fixed_bindings() {
        let bindings = KeyBindings::default();
        let menu = settings_menu(Vec::new());

        assert_eq!(
            bindings.resolve(KeyCode::Digit4, &menu),
            Some(MenuCommand::SetQuality(3))
        );
        assert_eq!(
            bindings.resolve(KeyCode::Escape, &menu),
            Some(MenuCommand::QuitGame)
        );
        assert_eq!(bindings.resolve(KeyCode::KeyZ, &menu), None);
    }
}
