//! Domain models for the content catalog
//!
//! Every entity is an immutable plain record; the catalogs in
//! [`crate::catalog`] own the fixed lists these records live in.

pub mod client;
pub mod document;
pub mod information_card;
pub mod location;
pub mod policy;
pub mod service_channel;
pub mod traits;
pub mod types;

pub use client::Client;
pub use document::Document;
pub use information_card::{InformationCard, InformationCardContentItem};
pub use location::{
    Contact, DetailedServices, FooterSchedule, Location, Schedule, ServiceSection, Specialty,
};
pub use policy::{Policy, PolicyContentItem, PolicyContentSection};
pub use service_channel::{LINK_PLACEHOLDER, ServiceChannel};
pub use traits::{Catalog, CatalogRecord};
pub use types::{DocumentType, LinkTarget, LinkType, ListStyle};
