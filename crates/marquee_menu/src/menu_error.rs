use marquee_core::CatalogError;
use thiserror::Error;

/// Errors surfaced by menu actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// The resolution picker handed back an index the catalog does not have.
    #[error("resolution picker out of sync: {0}")]
    Catalog(#[from] CatalogError),
}
