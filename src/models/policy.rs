//! Institutional policy models

use crate::models::traits::CatalogRecord;
use crate::models::types::ListStyle;
use serde::{Deserialize, Serialize};

/// One item in a policy's content list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyContentItem {
    /// Stable identifier within the policy
    pub id: String,
    /// Bold lead-in, when the item has one
    pub title: Option<String>,
    /// Item body text
    pub description: String,
    /// Optional icon reference
    pub icon: Option<String>,
}

/// A nested content section with its own intro text and items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyContentSection {
    /// Stable identifier within the policy
    pub id: String,
    /// Paragraph introducing the section's items
    pub intro_text: Option<String>,
    /// Items listed in the section
    pub items: Vec<PolicyContentItem>,
}

/// An institutional policy document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Stable identifier, e.g. `quality-policy`
    pub id: String,
    /// URL path segment the policy is reached by, e.g. `politica-de-calidad`
    pub path: String,
    /// Card title
    pub title: String,
    /// Card illustration
    pub image_url: String,
    /// Alt text for the card illustration
    pub image_alt: Option<String>,
    /// Hero banner title
    pub hero_title: String,
    /// Hero banner background image
    pub hero_background_image: String,
    /// Hero subtitle
    pub subtitle: Option<String>,
    /// Institutional document code, e.g. `DG-PE-010`
    pub code: String,
    /// Document version label
    pub version: String,
    /// Last revision date, as published
    pub revision_date: String,
    /// Content block heading
    pub content_title: String,
    /// Content block body
    pub content_description: String,
    /// Paragraph introducing the content items
    pub content_intro_text: Option<String>,
    /// Content items (may be empty)
    pub content_items: Vec<PolicyContentItem>,
    /// List rendering style for the content items
    pub list_style: ListStyle,
    /// Extra nested sections for the more elaborate policies
    pub content_sections: Vec<PolicyContentSection>,
}

impl CatalogRecord for Policy {
    fn id(&self) -> &str {
        &self.id
    }
}
