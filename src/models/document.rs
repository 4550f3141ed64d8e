//! Downloadable document model

use crate::models::traits::CatalogRecord;
use crate::models::types::DocumentType;
use serde::{Deserialize, Serialize};

/// A downloadable document published by the institution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Stable identifier, e.g. `report-2024`
    pub id: String,
    /// Display title; recency and year sorting read the year out of it
    pub title: String,
    /// Direct download URL
    pub download_url: String,
    /// Document category
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Whether the download link is currently active
    pub is_available: bool,
}

impl CatalogRecord for Document {
    fn id(&self) -> &str {
        &self.id
    }
}
