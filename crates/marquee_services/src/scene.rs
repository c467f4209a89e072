//! Scene switching

use std::cell::Cell;
use tracing::{info, warn};

/// Switches the presented scene by build index.
pub trait SceneLoader {
    /// Build index of the scene currently presented.
    fn active_scene_index(&self) -> usize;

    fn load_scene(&self, build_index: usize);
}

/// Scenes in build order with the active one tracked by index.
pub struct SceneList {
    scenes: Vec<String>,
    active: Cell<usize>,
}

impl SceneList {
    /// Starts on build index 0.
    pub fn new<I, S>(scenes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scenes: scenes.into_iter().map(Into::into).collect(),
            active: Cell::new(0),
        }
    }

    pub fn active_scene_name(&self) -> Option<&str> {
        self.scenes.get(self.active.get()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl SceneLoader for SceneList {
    fn active_scene_index(&self) -> usize {
        self.active.get()
    }

    fn load_scene(&self, build_index: usize) {
        match self.scenes.get(build_index) {
            Some(name) => {
                info!(build_index, scene = %name, "Loading scene");
                self.active.set(build_index);
            }
            None => warn!(
                build_index,
                scenes = self.scenes.len(),
                "Scene index not in build list, ignoring"
            ),
        }
    }
}
