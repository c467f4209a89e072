//! Application shutdown

use std::cell::Cell;
use tracing::info;

/// Requests application termination.
pub trait ProcessControl {
    fn quit(&self);
}

/// Records a quit request for the host loop to act on.
#[derive(Debug, Default)]
pub struct QuitFlag {
    requested: Cell<bool>,
}

impl QuitFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requested(&self) -> bool {
        self.requested.get()
    }
}

impl ProcessControl for QuitFlag {
    fn quit(&self) {
        if !self.requested.replace(true) {
            info!("Quit requested");
        }
    }
}
