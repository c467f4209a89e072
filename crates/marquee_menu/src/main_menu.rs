//! Title screen actions

use crate::ShareLink;
use marquee_services::{ProcessControl, SceneLoader, UrlLauncher};
use std::rc::Rc;
use tracing::info;

pub struct MainMenu {
    scenes: Rc<dyn SceneLoader>,
    urls: Rc<dyn UrlLauncher>,
    process: Rc<dyn ProcessControl>,
    share: ShareLink,
}

impl MainMenu {
    pub fn new(
        scenes: Rc<dyn SceneLoader>,
        urls: Rc<dyn UrlLauncher>,
        process: Rc<dyn ProcessControl>,
        share: ShareLink,
    ) -> Self {
        Self {
            scenes,
            urls,
            process,
            share,
        }
    }

    /// Advance to the scene after the active one in build order.
    pub fn play_game(&self) {
        let next = self.scenes.active_scene_index() + 1;
        info!(build_index = next, "Play");
        self.scenes.load_scene(next);
    }

    pub fn promote(&self) {
        self.urls.open_url(self.share.url());
    }

    pub fn quit_game(&self) {
        info!("QUIT");
        self.process.quit();
    }

    pub fn share_link(&self) -> &ShareLink {
        &self.share
    }
}
