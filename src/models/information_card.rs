//! User guide information card models

use crate::models::traits::CatalogRecord;
use serde::{Deserialize, Serialize};

/// A numbered entry in an information card's content list.
///
/// `number` is the display label printed next to the text, not an array
/// index; items are kept in their authored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationCardContentItem {
    /// Stable identifier within the card
    pub id: String,
    /// Display number
    pub number: u32,
    /// Entry text
    pub text: String,
}

/// A user guide informational entry (rights, duties, participation, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InformationCard {
    /// Stable identifier, e.g. `derechos-usuario`
    pub id: String,
    /// URL path segment the card is reached by, e.g. `derechos`
    pub path: String,
    /// Card title
    pub title: String,
    /// Shorter title used in breadcrumbs
    pub breadcrumb_title: String,
    /// Card thumbnail
    pub card_image: String,
    /// Card teaser text
    pub description: Option<String>,
    /// Detail page heading
    pub detail_title: Option<String>,
    /// Detail page lead paragraph
    pub detail_description: Option<String>,
    /// Free-form detail body for cards without numbered items
    pub detail_content: Option<String>,
    /// Background image of the detail content section
    pub background_image: String,
    /// Numbered content entries (may be empty)
    pub content_items: Vec<InformationCardContentItem>,
}

impl CatalogRecord for InformationCard {
    fn id(&self) -> &str {
        &self.id
    }
}
