use thiserror::Error;

/// Errors raised while building a state catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The configured state table has no entries.
    #[error("State catalog is empty")]
    EmptyCatalog,

    /// An entry declared weight zero, which would make it unselectable.
    #[error("State '{key}' has zero weight")]
    ZeroWeight { key: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
