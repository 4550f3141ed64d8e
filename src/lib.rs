//! A Rust library for querying the content catalog of a healthcare provider
//! site: care unit locations, institutional policies, user guide cards,
//! downloadable documents, partner clients and service channels, plus the
//! pure derivation helpers views are built from.
//!
//! Every catalog owns one fixed, hardcoded record list. All reads are
//! synchronous and side-effect free: lookups return `Option`, filters
//! return owned vectors, and the backing lists are never exposed mutably.

pub mod catalog;
pub mod error;
pub mod format;
pub mod models;

// Re-export the most common types for easier use
// Core types
pub use error::{CatalogError, Result};
pub use models::traits::{Catalog, CatalogRecord};
pub use models::types::{DocumentType, LinkTarget, LinkType, ListStyle};
pub use models::{
    Client, Document, InformationCard, Location, Policy, ServiceChannel, Specialty,
};

// Catalogs
pub use catalog::{
    ClientCatalog, DocumentCatalog, InformationCardCatalog, LocationCatalog, PolicyCatalog,
    ServiceChannelCatalog,
};
pub use catalog::documents::{DEFAULT_RECENT_YEARS, DocumentStats, SortBy, SortOrder};

// Derivation helpers
pub use format::{map_embed_url, rendered_description, split_columns};
