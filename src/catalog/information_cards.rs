//! User guide information card catalog

use crate::models::information_card::{InformationCard, InformationCardContentItem};
use crate::models::traits::Catalog;

/// A catalog of user guide cards, addressable by id or URL path
#[derive(Debug)]
pub struct InformationCardCatalog {
    cards: Vec<InformationCard>,
}

impl Default for InformationCardCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for InformationCardCatalog {
    type Record = InformationCard;

    const KIND: &'static str = "information card";

    fn records(&self) -> &[InformationCard] {
        &self.cards
    }
}

impl InformationCardCatalog {
    /// Create the catalog with the published user guide cards
    #[must_use]
    pub fn new() -> Self {
        Self { cards: seed() }
    }

    /// Get a card by its URL path segment, or `None` if absent
    #[must_use]
    pub fn get_by_path(&self, path: &str) -> Option<InformationCard> {
        self.records().iter().find(|card| card.path == path).cloned()
    }
}

fn entry(id: &str, number: u32, text: &str) -> InformationCardContentItem {
    InformationCardContentItem {
        id: id.to_string(),
        number,
        text: text.to_string(),
    }
}

fn seed() -> Vec<InformationCard> {
    vec![
        InformationCard {
            id: "derechos-usuario".to_string(),
            path: "derechos".to_string(),
            title: "Derechos del usuario en Salud Bolívar IPS".to_string(),
            breadcrumb_title: "Derechos del usuario".to_string(),
            card_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/guia-para-el-usuario/178b8039-deb_10b907i07i07i01v000028.jpg"
                .to_string(),
            description: Some(
                "Conozca sus derechos como usuario de nuestros servicios de salud.".to_string(),
            ),
            detail_title: Some("Derechos del paciente en Salud Bolívar IPS".to_string()),
            detail_description: Some(
                "Aquí encontrará todo lo que debe tener en cuenta para hacer un buen uso de su IPS."
                    .to_string(),
            ),
            detail_content: None,
            background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/derechos/14d87555-derechos_100000007s0ai00000f000.png"
                .to_string(),
            content_items: vec![
                entry(
                    "recibir-atencion-medica",
                    1,
                    "Recibir atención médica oportuna, con calidez y escoger al profesional que lo atenderá, de acuerdo con la disponibilidad en la unidad de atención médica.",
                ),
                entry(
                    "recibir-explicaciones-completas",
                    2,
                    "Recibir explicaciones completas, claras y entendibles acerca de su estado de salud y ser educado para mejorar las condiciones de salud con su autocuidado.",
                ),
                entry(
                    "ser-informado-del-propósito",
                    3,
                    "Ser informado del propósito y recomendaciones de los exámenes, tratamientos o procedimientos a realizar, y de las consecuencias que tendría de no dar su consentimiento.",
                ),
                entry(
                    "obtener-segunda-opinion",
                    4,
                    "A obtener una segunda opinión de un profesional de la salud adscrito a la unidad de atención médica, cuando se demuestre que la atención no fue resolutiva de acuerdo a la patología del paciente.",
                ),
                entry(
                    "recibir-explicaciones-de-costos",
                    5,
                    "Recibir explicaciones de los costos por los servicios prestados.",
                ),
                entry(
                    "participar-en-instancias-de-deliberacion",
                    6,
                    "A participar en las instancias de deliberación, veeduría y seguimiento del sistema.",
                ),
                entry(
                    "participar-en-decisiones-de-tratamientos",
                    7,
                    "Participar en decisiones de tratamientos o procedimientos a seguir ordenados por su médico tratante y solicitar aclarar las dudas que tenga acerca de su condición médica.",
                ),
                entry(
                    "informacion-confidencial",
                    8,
                    "A que toda la información relacionada con sus datos e historia clínica sean tratados de manera confidencial y solo con su autorización puedan ser conocidos.",
                ),
                entry(
                    "tratado-respetuoso",
                    9,
                    "Ser tratado respetuosa y dignamente, independiente de su condición física, religiosa, social, económica y cultural.",
                ),
                entry(
                    "espacios-seguros",
                    10,
                    "Ser atendidos en espacios seguros, con privacidad y comodidad.",
                ),
                entry(
                    "recibir-informacion-sobre-canales-formales",
                    11,
                    "Recibir información sobre los canales formales presentar reclamaciones, quejas sugerencias y la forma de comunicarse con la administración de las unidades de atención médica, así como también de recibir respuesta verbal o escrita según el caso y de manera oportuna.",
                ),
                entry(
                    "recibir-apoyo-emocional-y-moral",
                    12,
                    "Recibir apoyo emocional y moral o rehusar a él.",
                ),
            ],
        },
        InformationCard {
            id: "deberes-usuario".to_string(),
            path: "deberes".to_string(),
            title: "Deberes del usuario en Salud Bolívar IPS".to_string(),
            breadcrumb_title: "Deberes del usuario".to_string(),
            card_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/guia-para-el-usuario/c0a05c7d-db_10cs08j07i07i002009028.jpg"
                .to_string(),
            description: Some(
                "Conozca sus responsabilidades como usuario de nuestros servicios.".to_string(),
            ),
            detail_title: Some("Deberes del usuario en Salud Bolívar IPS".to_string()),
            detail_description: Some(
                "Aquí encontrará todo lo que debe tener en cuenta para hacer un buen uso de su IPS."
                    .to_string(),
            ),
            detail_content: None,
            background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/deberes/fb069948-deberes_108b0go000000000000028.jpg"
                .to_string(),
            content_items: vec![
                entry(
                    "ser-puntual",
                    1,
                    "Ser puntual, llegando 15 minutos antes de la hora asignada para su cita y en caso de no poder asistir, cancelar con 6 horas de anticipación.",
                ),
                entry(
                    "presentar-identificacion",
                    2,
                    "Presentar en el área de admisión su documento de identidad y las órdenes médicas o autorizaciones necesarias para su atención.",
                ),
                entry(
                    "cancelar-deducibles",
                    3,
                    "Cancelar los deducibles, cuotas moderadoras o copagos para los servicios que corresponda.",
                ),
                entry(
                    "suministrar-informacion",
                    4,
                    "Suministrar información veraz, clara, oportuna y completa de su estado de salud.",
                ),
                entry(
                    "seguir-tratamiento",
                    5,
                    "Seguir el tratamiento, cuidados y recomendaciones dados por los profesionales de salud.",
                ),
                entry(
                    "procurar-cuidado",
                    6,
                    "Procurar en forma permanente, por el cuidado de la salud personal y de su familia y de promover el mantenimiento de las adecuadas condiciones de salud.",
                ),
                entry(
                    "tratar-dignidad",
                    7,
                    "Tratar con dignidad y respeto al personal que lo atiende en la unidad de atención médica.",
                ),
                entry(
                    "cuidar-recursos",
                    8,
                    "Cuidar y hacer uso racional de los recursos de la unidad de atención médica, cumpliendo con las políticas e instrucciones.",
                ),
                entry(
                    "manifestar-sugerencias",
                    9,
                    "Manifestar sus sugerencias, reclamos, quejas y felicitaciones por el servicio brindado y expresar sus ideas para mejorar.",
                ),
                entry(
                    "abstenerse-sustancias",
                    10,
                    "Abstenerse de acudir a recibir la atención de salud, bajo el estado de sustancias alucinógenas o de alicoramiento; así mismo está prohibido fumar e ingresar mascotas y/o armas de fuego a las instalaciones de la unidad de atención médica.",
                ),
                entry(
                    "acompañamiento-adulto",
                    11,
                    "Tener el acompañamiento de un adulto en la atención para los pacientes menores de 14 años, así como también para los pacientes discapacitados y adultos mayores.",
                ),
            ],
        },
        InformationCard {
            id: "asociacion-usuarios".to_string(),
            path: "asociacion".to_string(),
            title: "Asociación de usuarios y participación social".to_string(),
            breadcrumb_title: "Participación Social".to_string(),
            card_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/guia-para-el-usuario/91b65652-convocatoria_10iq07i07i07i08z000028.jpg"
                .to_string(),
            description: Some(
                "Participe activamente en la mejora de nuestros servicios de salud.".to_string(),
            ),
            detail_title: Some("Participación Social".to_string()),
            detail_description: Some("¡La salud somos todos!".to_string()),
            detail_content: Some(
                "Recuerde que a través de los buzones de sugerencias que encontrará en las unidades de Salud Bolívar IPS podrá darnos a conocer todas las peticiones, quejas, reclamos, sugerencias o felicitaciones que nos quiera compartir. La participación de nuestros usuarios, aporta al cumplimiento de la política de participación social en salud y al mantenimiento de atenciones en salud caracterizadas por su calidad y humanización del servicio."
                    .to_string(),
            ),
            background_image: "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/asociacion/91b65652-convocatoria_1000000000000000000028.jpg"
                .to_string(),
            content_items: Vec::new(),
        },
    ]
}
