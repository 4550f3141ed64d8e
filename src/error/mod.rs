//! Error handling for the catalog layer.
//!
//! Catalog reads themselves never fail: lookups signal absence with
//! `Option` and filters with empty vectors. The error type exists for the
//! resolution seam above the catalogs, where an unknown id or path has to
//! surface as a proper `Result` (a detail view falling back to a safe
//! route, the summary binary, ...).

/// Errors surfaced when a catalog lookup is required to succeed
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A lookup by id or path matched no record
    #[error("no {kind} record matches '{key}'")]
    NotFound {
        /// Record kind, e.g. `policy`
        kind: &'static str,
        /// The id or path that was looked up
        key: String,
    },
}

/// Alias for Result with `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;
