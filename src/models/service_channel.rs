//! Service channel model

use crate::models::traits::CatalogRecord;
use crate::models::types::{LinkTarget, LinkType};
use serde::{Deserialize, Serialize};

/// Placeholder token substituted with an anchor when a channel description
/// is rendered
pub const LINK_PLACEHOLDER: &str = "{{LINK}}";

/// A contact channel users can reach the institution through
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceChannel {
    /// Stable identifier, e.g. `telephone`
    pub id: String,
    /// Channel title
    pub title: String,
    /// Description template; may contain the literal `{{LINK}}` token
    pub description: String,
    /// Channel icon
    pub icon_url: String,
    /// Link destination, for channels that have one
    pub link_url: Option<String>,
    /// Link label, for channels that have one
    pub link_text: Option<String>,
    /// Browsing context the link opens in
    pub link_target: Option<LinkTarget>,
    /// Kind of link this channel carries
    pub link_type: LinkType,
}

impl CatalogRecord for ServiceChannel {
    fn id(&self) -> &str {
        &self.id
    }
}
