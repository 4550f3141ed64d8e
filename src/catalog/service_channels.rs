//! Service channel catalog

use crate::models::service_channel::ServiceChannel;
use crate::models::traits::Catalog;
use crate::models::types::{LinkTarget, LinkType};

/// A catalog of the contact channels users can reach the institution through
#[derive(Debug)]
pub struct ServiceChannelCatalog {
    channels: Vec<ServiceChannel>,
}

impl Default for ServiceChannelCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for ServiceChannelCatalog {
    type Record = ServiceChannel;

    const KIND: &'static str = "service channel";

    fn records(&self) -> &[ServiceChannel] {
        &self.channels
    }
}

impl ServiceChannelCatalog {
    /// Create the catalog with the published channel list
    #[must_use]
    pub fn new() -> Self {
        Self { channels: seed() }
    }

    /// Get the channels carrying a given link kind
    #[must_use]
    pub fn by_link_type(&self, link_type: LinkType) -> Vec<ServiceChannel> {
        self.filter(|channel| channel.link_type == link_type)
    }
}

fn seed() -> Vec<ServiceChannel> {
    vec![
        ServiceChannel {
            id: "telephone".to_string(),
            title: "Línea Telefónica # 322".to_string(),
            description: "Desde su celular marque <strong>{{LINK}}</strong>, opciones 1-1-4-1."
                .to_string(),
            icon_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/b68541b6-assesor-callcenter_101j01j01g01j001000028.png"
                .to_string(),
            link_url: Some("tel:#322".to_string()),
            link_text: Some("#322".to_string()),
            link_target: Some(LinkTarget::SameTab),
            link_type: LinkType::Tel,
        },
        ServiceChannel {
            id: "whatsapp".to_string(),
            title: "Chat en línea".to_string(),
            description: "Escríbanos a nuestro <strong>WhatsApp</strong>: {{LINK}}".to_string(),
            icon_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/d4a4ad19-whatsapp_101i01j01g01j001000028.png"
                .to_string(),
            link_url: Some("https://api.whatsapp.com/send?phone=573223322322".to_string()),
            link_text: Some("322 332 2322".to_string()),
            link_target: Some(LinkTarget::NewTab),
            link_type: LinkType::Whatsapp,
        },
        ServiceChannel {
            id: "presencial".to_string(),
            title: "Atención presencial".to_string(),
            description: "Acercándose a la sede de su preferencia.".to_string(),
            icon_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/e5b36b8d-location.svg"
                .to_string(),
            link_url: None,
            link_text: None,
            link_target: None,
            link_type: LinkType::None,
        },
        ServiceChannel {
            id: "autoagendamiento".to_string(),
            title: "Autoagendamiento".to_string(),
            description: "Para pacientes con póliza de Salud de Seguros Bolívar: {{LINK}}."
                .to_string(),
            icon_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/6a0a19c8-cita-medica-2_101k01j01h01j001000028.png"
                .to_string(),
            link_url: Some("https://clientes.segurosbolivar.com/login".to_string()),
            link_text: Some("Acceso clientes".to_string()),
            link_target: Some(LinkTarget::NewTab),
            link_type: LinkType::External,
        },
    ]
}
