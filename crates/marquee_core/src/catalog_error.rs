use thiserror::Error;

/// Errors raised when reading from a [`DisplayModeCatalog`](crate::DisplayModeCatalog).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The requested index does not name a catalog entry. The picker is
    /// populated from the catalog, so this means the two drifted apart.
    #[error("display mode index {index} is out of range (catalog has {len} entries)")]
    OutOfRange { index: usize, len: usize },
}
