//! Marquee Core
//!
//! Engine-independent pieces of the menu layer:
//! - Display configurations and raw platform display modes
//! - The display mode catalog backing the resolution picker

pub mod catalog;
pub mod catalog_error;
pub mod display;

pub use catalog::DisplayModeCatalog;
pub use catalog_error::CatalogError;
pub use display::{DisplayConfiguration, DisplayMode};

/// Engine version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
