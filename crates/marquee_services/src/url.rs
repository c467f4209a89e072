//! URL launching

use tracing::{error, info};

/// Hands a URL to whatever the platform uses to open links.
pub trait UrlLauncher {
    fn open_url(&self, url: &str);
}

/// Opens URLs with the OS default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemUrlLauncher;

impl UrlLauncher for SystemUrlLauncher {
    fn open_url(&self, url: &str) {
        match open::that_detached(url) {
            Ok(()) => info!(url = %url, "Opened URL"),
            Err(err) => error!(url = %url, error = %err, "Failed to open URL"),
        }
    }
}
