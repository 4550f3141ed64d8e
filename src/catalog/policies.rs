//! Institutional policy catalog

use crate::models::policy::{Policy, PolicyContentItem, PolicyContentSection};
use crate::models::traits::Catalog;
use crate::models::types::ListStyle;

/// A catalog of institutional policies, addressable by id or URL path
#[derive(Debug)]
pub struct PolicyCatalog {
    policies: Vec<Policy>,
}

impl Default for PolicyCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for PolicyCatalog {
    type Record = Policy;

    const KIND: &'static str = "policy";

    fn records(&self) -> &[Policy] {
        &self.policies
    }
}

impl PolicyCatalog {
    /// Create the catalog with the published policy list
    #[must_use]
    pub fn new() -> Self {
        Self { policies: seed() }
    }

    /// Get a policy by its URL path segment, or `None` if absent
    #[must_use]
    pub fn get_by_path(&self, path: &str) -> Option<Policy> {
        self.records().iter().find(|policy| policy.path == path).cloned()
    }

    /// Check whether a policy with the given path exists
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.records().iter().any(|policy| policy.path == path)
    }
}

fn item(id: &str, title: Option<&str>, description: &str) -> PolicyContentItem {
    PolicyContentItem {
        id: id.to_string(),
        title: title.map(str::to_string),
        description: description.to_string(),
        icon: None,
    }
}

fn seed() -> Vec<Policy> {
    vec![
        Policy {
            id: "quality-policy".to_string(),
            path: "politica-de-calidad".to_string(),
            title: "Política de calidad".to_string(),
            image_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/sobre-nuestra-ips/6532e169-escudo-salud.svg"
                .to_string(),
            image_alt: Some("Política de calidad".to_string()),
            hero_title: "Direccionamiento y Gerencia".to_string(),
            hero_background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/politica-de-calidad/9b4270f5-blur-hospital_100000000000000000001o.jpg"
                .to_string(),
            subtitle: Some("Planeación Estratégica".to_string()),
            code: "DG-PE-010".to_string(),
            version: "002".to_string(),
            revision_date: "Enero 2021".to_string(),
            content_title: "Política de Calidad".to_string(),
            content_description: "En Salud Bolívar IPS estamos comprometidos con una atención de salud accesible, oportuna, pertinente, segura, humanizada y orientada a cumplir estándares nacionales de calidad que beneficien al paciente y su familia, ejecutando estrategias orientadas al mejoramiento continuo."
                .to_string(),
            content_intro_text: Some(
                "Para asumir este compromiso realizamos mejora continua a través de:".to_string(),
            ),
            content_items: vec![
                item(
                    "human-team",
                    Some("Equipo Humano:"),
                    "Idóneo, amable, comprometido, y fortalecido en cultura de Seguridad del Paciente",
                ),
                item(
                    "environment",
                    Some("Ambiente:"),
                    "Con desarrollo de un clima organizacional amigable, disciplinado y respetuoso",
                ),
                item(
                    "infrastructure",
                    Some("Infraestructura:"),
                    "Áreas y ambientes confortables y seguros.",
                ),
            ],
            list_style: ListStyle::Checkmarks,
            content_sections: Vec::new(),
        },
        Policy {
            id: "humanization-policy".to_string(),
            path: "politica-de-humanizacion".to_string(),
            title: "Política de humanización".to_string(),
            image_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/sobre-nuestra-ips/ac3dd389-acompanamiento.svg"
                .to_string(),
            image_alt: Some("Política de humanización".to_string()),
            hero_title: "Direccionamiento y Gerencia".to_string(),
            hero_background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/politica-de-humanizacion/3653f871-hm_100000000000000000001o.jpg"
                .to_string(),
            subtitle: Some("Planeación Estratégica".to_string()),
            code: "DG-PE-013".to_string(),
            version: "002".to_string(),
            revision_date: "Enero 2021".to_string(),
            content_title: "Humanizando el cuidado de las personas".to_string(),
            content_description: "Nuestro Programa promueve la humanización como eje transversal de todos los procesos, administrativos y de salud, además fortalece la cultura institucional en la práctica de principios y valores."
                .to_string(),
            content_intro_text: None,
            content_items: Vec::new(),
            list_style: ListStyle::Checkmarks,
            content_sections: Vec::new(),
        },
        Policy {
            id: "environmental-policy".to_string(),
            path: "politica-ambiental".to_string(),
            title: "Política ambiental".to_string(),
            image_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/sobre-nuestra-ips/f96dbd91-frame-3023.svg"
                .to_string(),
            image_alt: Some("Política ambiental".to_string()),
            hero_title: "Direccionamiento y Gerencia".to_string(),
            hero_background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/politica-ambiental/14ec72d6-beautiful-mountain-penas-de-aya-town-oiartzun-gipuzkoa-spain_11hc0zk00000000000001o.jpg"
                .to_string(),
            subtitle: Some("Planeación Estratégica".to_string()),
            code: "DG-PE-011".to_string(),
            version: "001".to_string(),
            revision_date: "Enero 2021".to_string(),
            content_title: "Política Ambiental".to_string(),
            content_description: "En Salud Bolívar IPS estamos comprometidos con el cuidado de los recursos naturales, la prevención de la contaminación, la adaptación y mitigación del cambio climático a través de la identificación, evaluación y seguimiento de los aspectos e impactos ambientales a través del desarrollo e innovación de soluciones ambientalmente amigables que promueven el compromiso y uso eficiente de los recursos y su disponibilidad para las generaciones futuras."
                .to_string(),
            content_intro_text: Some("Queremos también:".to_string()),
            content_items: vec![
                item(
                    "environment-law",
                    None,
                    "Dar cumplimiento a la normativa ambiental con los requisitos legales vigentes y demás directrices de autoridades ambientales, sanitarias, entes de control y en especial con la gestión integral de residuos generados en atención en salud y el tratamiento de aguas residuales, adoptando para ello modelos proactivos de gestión ambiental, generando responsabilidad social empresarial en el desarrollo de sus actividades orientados a todos los grupos de interés.",
                ),
                item(
                    "pgirasa",
                    None,
                    "Dar cumplimiento al Plan de Gestión Integral de Residuos Generados en Atención en Salud y Otras Actividades (PGIRASA) de la institución.",
                ),
            ],
            list_style: ListStyle::Checkmarks,
            content_sections: Vec::new(),
        },
        Policy {
            id: "patient-safety-policy".to_string(),
            path: "politica-de-seguridad-de-paciente".to_string(),
            title: "Política de seguridad del paciente".to_string(),
            image_url: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/sobre-nuestra-ips/f233c293-frame-3022.svg"
                .to_string(),
            image_alt: Some("Política de seguridad del paciente".to_string()),
            hero_title: "Direccionamiento y Gerencia".to_string(),
            hero_background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/politica-de-seguridad-de-paciente/1f90ac4d-beautiful-young-doctor-is-wearing-mask-while-touch-her-glasses-with-rubber-gloves-gray-wall_100000000000000000001o.jpg"
                .to_string(),
            subtitle: Some("Planeación Estratégica".to_string()),
            code: "DG-PE-012".to_string(),
            version: "002".to_string(),
            revision_date: "Enero 2021".to_string(),
            content_title: "Política de Seguridad del Paciente".to_string(),
            content_description: "Brindar a nuestros usuarios reales y potenciales una atención segura, con un recurso humano capacitado, entrenado y comprometido en la prestación de servicios de salud seguros con enfoque en el control de riesgo."
                .to_string(),
            content_intro_text: Some(
                "Nuestra Política tal como lo direcciona el Ministerio de Salud y Protección Social, es una declaración que se encuentra transversal en los cuatro componentes del Sistema:"
                    .to_string(),
            ),
            content_items: vec![
                item(
                    "unique-habilitation-system",
                    None,
                    "Sistema Único de Habilitación - Resolución 3100 del 2019.",
                ),
                item(
                    "pamec-audit",
                    None,
                    "Auditoría para el Mejoramiento de la Calidad de la Atención en Salud PAMEC.",
                ),
                item(
                    "superior-standards",
                    None,
                    "Estándares superiores de calidad del Sistema único de Acreditación.",
                ),
                item(
                    "information-system",
                    None,
                    "Sistema de Información para la Calidad – Resolución 256 del 2016.",
                ),
            ],
            list_style: ListStyle::Traditional,
            content_sections: vec![PolicyContentSection {
                id: "sogc-characteristics".to_string(),
                intro_text: Some(
                    "Igualmente, esta Política adhiere el cumplimiento de las características del SOGC establecidas en el Decreto 780 de 2016 y definidas a través de nuestros indicadores a saber:"
                        .to_string(),
                ),
                items: vec![
                    item("continuity", None, "Continuidad"),
                    item("opportunity", None, "Oportunidad"),
                    item("pertinence", None, "Pertinencia"),
                    item("accessibility", None, "Accesibilidad"),
                    item("security", None, "Seguridad"),
                ],
            }],
        },
    ]
}
