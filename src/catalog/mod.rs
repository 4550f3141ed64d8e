//! Catalog implementations
//!
//! One catalog per record type, each owning a fixed, hardcoded backing
//! list seeded at construction. Catalogs are independent leaves: no catalog
//! reads another catalog's data, and no write path exists anywhere.

pub mod clients;
pub mod documents;
pub mod information_cards;
pub mod locations;
pub mod policies;
pub mod service_channels;

pub use clients::ClientCatalog;
pub use documents::{DocumentCatalog, DocumentStats, SortBy, SortOrder, TypeCounts};
pub use information_cards::InformationCardCatalog;
pub use locations::LocationCatalog;
pub use policies::PolicyCatalog;
pub use service_channels::ServiceChannelCatalog;

/// Convert a slice of string literals into owned strings, for seed data
pub(crate) fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}
