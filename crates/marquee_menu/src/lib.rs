//! Marquee Menu
//!
//! Main menu and settings menu. Both receive their host services at
//! construction and expose one method per button, slider or toggle.
//! [`MenuCommand`] names those actions so input bindings can be resolved
//! up front instead of looked up by name at click time.

pub mod command;
pub mod main_menu;
pub mod menu_error;
pub mod promote;
pub mod settings_menu;

#[cfg(test)]
mod fakes;

pub use command::{MenuCommand, Menus};
pub use main_menu::MainMenu;
pub use menu_error::MenuError;
pub use promote::ShareLink;
pub use settings_menu::SettingsMenu;
