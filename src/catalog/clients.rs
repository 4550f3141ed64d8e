//! Partner client catalog

use crate::models::client::Client;
use crate::models::traits::Catalog;

/// A catalog of partner clients whose logos are displayed on the site
#[derive(Debug)]
pub struct ClientCatalog {
    clients: Vec<Client>,
}

impl Default for ClientCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for ClientCatalog {
    type Record = Client;

    const KIND: &'static str = "client";

    fn records(&self) -> &[Client] {
        &self.clients
    }
}

impl ClientCatalog {
    /// Create the catalog with the published client list
    #[must_use]
    pub fn new() -> Self {
        Self { clients: seed() }
    }

    /// Get the clients whose logo links to a website
    #[must_use]
    pub fn with_website(&self) -> Vec<Client> {
        self.filter(|client| {
            client
                .website_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty())
        })
    }

    /// Search clients by name, case-insensitive substring match.
    ///
    /// An empty or whitespace-only term returns an empty result.
    #[must_use]
    pub fn search_by_name(&self, term: &str) -> Vec<Client> {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        self.filter(|client| client.name.to_lowercase().contains(&normalized))
    }
}

fn seed() -> Vec<Client> {
    vec![
        Client {
            id: "seguros-bolivar".to_string(),
            name: "Seguros Bolívar".to_string(),
            logo_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/97c32890-versionprincipal-horizontal-png_106701w000000000000028.png"
                .to_string(),
            alt_text: "Seguros Bolívar".to_string(),
            website_url: Some("https://www.segurosbolivar.com/".to_string()),
        },
        Client {
            id: "arl-seguros-bolivar".to_string(),
            name: "ARL Seguros Bolívar".to_string(),
            logo_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/2d2f0fa7-logo-arl-bolivar_10aa01z0aa01w000000028.png"
                .to_string(),
            alt_text: "ARL Seguros Bolívar".to_string(),
            website_url: Some("https://www.segurosbolivar.com/arl".to_string()),
        },
    ]
}
