//! winit application hosting the menus

use crate::bindings::KeyBindings;
use marquee_audio::Mixer;
use marquee_menu::{MainMenu, MenuCommand, Menus, SettingsMenu, ShareLink};
use marquee_render::window::{window_attributes, WindowConfig};
use marquee_render::WinitDisplay;
use marquee_services::{QualityLevels, QuitFlag, SceneList, Settings, SystemUrlLauncher};
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use tracing::{error, info, warn};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::ActiveEventLoop,
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

pub struct MenuApp {
    settings_path: PathBuf,
    settings: Settings,
    bindings: KeyBindings,
    state: Option<MenuState>,
}

/// Everything that needs a live window.
struct MenuState {
    _window: Arc<Window>,
    menus: Menus,
    quality: Rc<QualityLevels>,
    scenes: Rc<SceneList>,
    quit: Rc<QuitFlag>,
}

impl MenuApp {
    pub fn new(settings_path: PathBuf, settings: Settings) -> Self {
        Self {
            settings_path,
            settings,
            bindings: KeyBindings::default(),
            state: None,
        }
    }

    fn build_state(&self, window: Arc<Window>) -> MenuState {
        let display = Rc::new(WinitDisplay::new(window.clone()));
        let mixer = Rc::new(Mixer::new());
        // Starts at the default level; `apply` moves it to the saved one.
        let quality = Rc::new(QualityLevels::default());
        info!(levels = ?quality.names(), "Quality presets");
        let scenes = Rc::new(SceneList::new(self.settings.scenes.0.iter().cloned()));
        let quit = Rc::new(QuitFlag::new());

        let main = MainMenu::new(
            scenes.clone(),
            Rc::new(SystemUrlLauncher),
            quit.clone(),
            ShareLink::new(&self.settings.promotion),
        );

        let mut settings_menu =
            SettingsMenu::new(display, mixer, quality.clone(), scenes.clone());
        settings_menu.start();
        settings_menu.apply(&self.settings);

        info!(
            options = ?settings_menu.resolution_options(),
            selected = settings_menu.selected_resolution(),
            "Settings menu ready"
        );

        MenuState {
            _window: window,
            menus: Menus::new(main, settings_menu),
            quality,
            scenes,
            quit,
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(state) = self.state.take() {
            state.menus.settings.store(&mut self.settings);
            if let Err(err) = self.settings.save(&self.settings_path) {
                error!(error = %err, "Failed to save settings");
            }
        }
        event_loop.exit();
    }
}

impl ApplicationHandler for MenuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let attrs = window_attributes(WindowConfig {
            title: format!("Marquee v{}", marquee_core::VERSION),
            width: self.settings.graphics.resolution_width,
            height: self.settings.graphics.resolution_height,
            fullscreen: self.settings.graphics.fullscreen,
        });
        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!(error = %err, "Failed to create window");
                event_loop.exit();
                return;
            }
        };

        self.state = Some(self.build_state(window));
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                let Some(state) = self.state.as_mut() else {
                    return;
                };
                let Some(command) = self.bindings.resolve(key, &state.menus.settings) else {
                    return;
                };

                if let Err(err) = state.menus.dispatch(command) {
                    warn!(error = %err, ?command, "Menu command failed");
                }
                match command {
                    MenuCommand::PlayGame | MenuCommand::LoadScene(_) => {
                        if let Some(scene) = state.scenes.active_scene_name() {
                            info!(scene, "Active scene");
                        }
                    }
                    MenuCommand::SetQuality(_) => {
                        if let Some(level) = state.quality.current_name() {
                            info!(level, "Active quality");
                        }
                    }
                    _ => {}
                }
                if state.quit.requested() {
                    self.shutdown(event_loop);
                }
            }
            _ => {}
        }
    }
}
