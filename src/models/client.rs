//! Partner client model

use crate::models::traits::CatalogRecord;
use serde::{Deserialize, Serialize};

/// A partner or client whose logo is displayed on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    /// Stable identifier, e.g. `seguros-bolivar`
    pub id: String,
    /// Display name
    pub name: String,
    /// Logo image URL
    pub logo_url: String,
    /// Alt text for the logo
    pub alt_text: String,
    /// Website the logo links to, when there is one
    pub website_url: Option<String>,
}

impl CatalogRecord for Client {
    fn id(&self) -> &str {
        &self.id
    }
}
