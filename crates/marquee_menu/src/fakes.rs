//! Recording host used by the menu tests

use marquee_audio::AudioMixer;
use marquee_core::{DisplayConfiguration, DisplayMode};
use marquee_render::DisplayService;
use marquee_services::{ProcessControl, QualitySettings, SceneLoader, UrlLauncher};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LoadScene(usize),
    OpenUrl(String),
    Quit,
    SetParameter(String, f32),
    SetQuality(usize),
    SetResolution(u32, u32, bool),
    SetFullscreen(bool),
}

/// Implements every host capability and records what the menus ask for.
pub struct FakeHost {
    pub modes: Vec<DisplayMode>,
    pub current: Cell<DisplayConfiguration>,
    pub fullscreen: Cell<bool>,
    pub active_scene: Cell<usize>,
    /// Quality indices below this are accepted.
    pub quality_levels: Cell<usize>,
    calls: RefCell<Vec<Call>>,
}

impl FakeHost {
    pub fn new(modes: Vec<DisplayMode>, current: (u32, u32)) -> Rc<Self> {
        Rc::new(Self {
            modes,
            current: Cell::new(current.into()),
            fullscreen: Cell::new(false),
            active_scene: Cell::new(0),
            quality_levels: Cell::new(6),
            calls: RefCell::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl DisplayService for FakeHost {
    fn available_modes(&self) -> Vec<DisplayMode> {
        self.modes.clone()
    }

    fn current_resolution(&self) -> DisplayConfiguration {
        self.current.get()
    }

    fn is_fullscreen(&self) -> bool {
        self.fullscreen.get()
    }

    fn set_resolution(&self, width: u32, height: u32, fullscreen: bool) {
        self.record(Call::SetResolution(width, height, fullscreen));
    }

    fn set_fullscreen(&self, fullscreen: bool) {
        self.record(Call::SetFullscreen(fullscreen));
    }
}

impl AudioMixer for FakeHost {
    fn set_parameter(&self, name: &str, value: f32) {
        self.record(Call::SetParameter(name.to_string(), value));
    }
}

impl QualitySettings for FakeHost {
    fn set_quality_level(&self, index: usize) -> bool {
        self.record(Call::SetQuality(index));
        index < self.quality_levels.get()
    }
}

impl SceneLoader for FakeHost {
    fn active_scene_index(&self) -> usize {
        self.active_scene.get()
    }

    fn load_scene(&self, build_index: usize) {
        self.record(Call::LoadScene(build_index));
    }
}

impl UrlLauncher for FakeHost {
    fn open_url(&self, url: &str) {
        self.record(Call::OpenUrl(url.to_string()));
    }
}

impl ProcessControl for FakeHost {
    fn quit(&self) {
        self.record(Call::Quit);
    }
}
