//! Care unit location catalog
//!
//! Owns the fixed list of care units and the small amount of derivation
//! logic built on top of it: footer display names, footer schedule labels,
//! the map embed URL, and the specialty list derived from service tags.

use crate::catalog::owned;
use crate::format::map_url::map_embed_url;
use crate::models::location::{
    Contact, DetailedServices, FooterSchedule, Location, Schedule, ServiceSection, Specialty,
};
use crate::models::traits::Catalog;

/// Contact details shared by every care unit
const SERVICE_PHONE: &str = "#322";
const SERVICE_EMAIL: &str = "experienciadeservicioips@saludbolivar.com";

/// A catalog of care unit locations
#[derive(Debug)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for LocationCatalog {
    type Record = Location;

    const KIND: &'static str = "location";

    fn records(&self) -> &[Location] {
        &self.locations
    }
}

impl LocationCatalog {
    /// Create the catalog with the published care unit list
    #[must_use]
    pub fn new() -> Self {
        Self { locations: seed() }
    }

    /// Get the premium care units
    #[must_use]
    pub fn premium(&self) -> Vec<Location> {
        self.filter(|location| location.is_premium)
    }

    /// Get the regular (non-premium) care units
    #[must_use]
    pub fn regular(&self) -> Vec<Location> {
        self.filter(|location| !location.is_premium)
    }

    /// Get the shortened display name used in the footer.
    ///
    /// Names are remapped by exact string match; a name without a remap
    /// entry falls back to itself silently.
    #[must_use]
    pub fn footer_display_name(&self, location: &Location) -> String {
        let remap: [(&str, &str); 4] = [
            (
                "Unidad de Atención Integral Avenida El Dorado",
                "Unidad de atención integral Av. El Dorado",
            ),
            (
                "Unidad de Atención Integral Calle 134",
                "Unidad de atención integral Calle 134",
            ),
            (
                "Unidad de Atención Integral Carrera Décima",
                "Unidad de atención integral Carrera décima",
            ),
            (
                "Unidad Médica Premium Metrópolis",
                "Unidad médica premium Metrópolis",
            ),
        ];

        remap
            .iter()
            .find(|(long, _)| *long == location.name)
            .map_or_else(|| location.name.clone(), |(_, short)| (*short).to_string())
    }

    /// Format a location's schedule for the footer, prepending the fixed
    /// day-range labels to the raw schedule strings
    #[must_use]
    pub fn footer_schedule(&self, location: &Location) -> FooterSchedule {
        FooterSchedule {
            weekdays: format!("Lunes a Viernes {}", location.schedule.weekdays),
            saturday: format!("Sábado {}", location.schedule.saturday),
        }
    }

    /// Build the map embed URL for a location from its address and building
    #[must_use]
    pub fn map_url(&self, location: &Location) -> String {
        map_embed_url(&location.address, location.building.as_deref())
    }

    /// Derive the specialty list from the service tags of every location.
    ///
    /// Tags are grouped verbatim in first-seen order; no normalization is
    /// applied, so case or spelling variants yield distinct specialties.
    /// Recomputed on each call.
    #[must_use]
    pub fn specialties(&self) -> Vec<Specialty> {
        derive_specialties(&self.locations)
    }
}

/// Group location ids under each distinct service tag and emit one
/// specialty per tag, with synthetic sequential ids
fn derive_specialties(locations: &[Location]) -> Vec<Specialty> {
    let mut tags: Vec<(String, Vec<String>)> = Vec::new();

    for location in locations {
        for service in &location.services {
            match tags.iter_mut().find(|(name, _)| name == service) {
                Some((_, location_ids)) => {
                    if !location_ids.contains(&location.id) {
                        location_ids.push(location.id.clone());
                    }
                }
                None => tags.push((service.clone(), vec![location.id.clone()])),
            }
        }
    }

    tags.into_iter()
        .enumerate()
        .map(|(index, (name, available_at))| Specialty {
            id: format!("specialty-{}", index + 1),
            description: specialty_description(&name),
            name,
            available_at,
        })
        .collect()
}

/// Resolve the display description for a specialty tag.
///
/// Three tags have curated descriptions; anything else gets the generated
/// fallback `"Servicios de <tag lowercased>."`, trailing period included.
fn specialty_description(name: &str) -> String {
    match name {
        "Medicina General" => {
            "Atención médica integral para consultas generales y seguimiento de salud.".to_string()
        }
        "Especialidades" => {
            "Atención médica especializada en diversas áreas de la salud.".to_string()
        }
        "Especialidades Premium" => {
            "Atención médica especializada premium con servicios diferenciados.".to_string()
        }
        _ => format!("Servicios de {}.", name.to_lowercase()),
    }
}

fn seed() -> Vec<Location> {
    vec![
        Location {
            id: "el-dorado".to_string(),
            name: "Unidad de Atención Integral Avenida El Dorado".to_string(),
            address: "Avenida El Dorado # 68C-61".to_string(),
            full_address: Some(
                "Avenida El Dorado # 68C-61<br>Torre Central Davivienda, piso 7".to_string(),
            ),
            building: Some("Torre Central Davivienda".to_string()),
            floor: Some("Piso 7".to_string()),
            office: Some("Oficina 704".to_string()),
            schedule: Schedule {
                weekdays: "7:00 a. m. a 7:00 p. m.".to_string(),
                saturday: "7:00 a. m. a 1:00 p. m.".to_string(),
                sunday: Some("Cerrado".to_string()),
            },
            services: owned(&["Medicina General", "Especialidades"]),
            detailed_services: Some(DetailedServices {
                consultations: owned(&[
                    "Medicina general.",
                    "Enfermería.",
                    "Pediatría.",
                    "Ginecobstetricia.",
                    "Medicina interna.",
                    "Urología.",
                    "Dermatología.",
                    "Medicina física y del deporte.",
                    "Neurología.",
                    "Endocrinología",
                    "Ortopedia y traumatología.",
                    "Ortopedia de pie.",
                    "Otorrinolaringología.",
                    "Psiquiatría.",
                    "Psicología - Psicoterapia.",
                    "Nutrición y Dietética.",
                ]),
                other_services: owned(&[
                    "Vacunación no PAI.",
                    "Toma de muestras de laboratorio clínico.",
                    "Ecografías – Doppler.",
                    "Toma de EKG.",
                    "Procedimientos menores de Ortopedia y Neurología.",
                ]),
                new_services: owned(&["Ecografías", "Doppler", "Dúplex"]),
                additional_sections: Vec::new(),
            }),
            contact: Contact {
                phone: SERVICE_PHONE.to_string(),
                email: SERVICE_EMAIL.to_string(),
            },
            is_premium: false,
            image_url: Some(
                "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/510dc4d9-calle26_10cn09f04v08c00000201o.jpg"
                    .to_string(),
            ),
        },
        Location {
            id: "calle-134".to_string(),
            name: "Unidad de Atención Integral Calle 134".to_string(),
            address: "Calle 134 # 7B - 83".to_string(),
            full_address: Some(
                "Calle 134 # 7B - 83<br>Edificio El Bosque, piso 5, oficina 513".to_string(),
            ),
            building: Some("Edificio El Bosque".to_string()),
            floor: Some("Piso 5".to_string()),
            office: Some("Oficina 513".to_string()),
            schedule: Schedule {
                weekdays: "6:30 a. m. a 7:00 p. m.".to_string(),
                saturday: "7:00 a. m. a 1:00 p. m.".to_string(),
                sunday: Some("Cerrado".to_string()),
            },
            services: owned(&["Medicina General", "Especialidades"]),
            detailed_services: Some(DetailedServices {
                consultations: owned(&[
                    "Medicina general.",
                    "Medicina familiar.",
                    "Pediatría.",
                    "Ginecobstetricia.",
                    "Medicina interna.",
                    "Cardiología.",
                    "Otorrinolaringología.",
                    "Cirugía plástica.",
                    "Urología.",
                    "Dermatología.",
                    "Deportología.",
                    "Neurología.",
                    "Cirugía general.",
                    "Endocrinología.",
                    "Fisiatría.",
                    "Gastroenterología.",
                    "Ortopedia y traumatología.",
                    "Ortopedia de pie.",
                    "Ortopedia de columna.",
                    "Oftalmología.",
                    "Psiquiatría.",
                    "Nutrición y dietética.",
                    "Optometría.",
                    "Psicología - Psicoterapia.",
                    "Enfermería.",
                    "Medicina física y del deporte.",
                    "Dolor y cuidados paliativos.",
                ]),
                other_services: owned(&[
                    "Vacunación no PAI.",
                    "Ecografías - Doppler - Dúplex.",
                    "Electromiografías - Neuroconducciones.",
                    "Toma de EKG.",
                    "Toma de muestras de laboratorio clínico.",
                    "Procedimientos quirúrgicos menores de Dermatología, Ortopedia y Neurología.",
                ]),
                new_services: owned(&["Ecocardiograma.", "Holter y MAPA."]),
                additional_sections: Vec::new(),
            }),
            contact: Contact {
                phone: SERVICE_PHONE.to_string(),
                email: SERVICE_EMAIL.to_string(),
            },
            is_premium: false,
            image_url: Some(
                "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/84176e6d-3_10bo08o05008c00700001o.jpg"
                    .to_string(),
            ),
        },
        Location {
            id: "carrera-decima".to_string(),
            name: "Unidad de Atención Integral Carrera Décima".to_string(),
            address: "Carrera 10 # 16 -39".to_string(),
            full_address: Some(
                "Carrera 10 # 16 -39<br>Edificio Seguros Bolívar - Mezzanine. Torre Seguros Bolívar"
                    .to_string(),
            ),
            building: Some("Edificio Seguros Bolívar".to_string()),
            floor: Some("Mezzanine".to_string()),
            office: Some("Torre Seguros Bolívar".to_string()),
            schedule: Schedule {
                weekdays: "6:30 a. m. a 5:00 p. m.".to_string(),
                saturday: "7:00 a. m. a 1:00 p. m.".to_string(),
                sunday: Some("Cerrado".to_string()),
            },
            services: owned(&["Medicina General", "Especialidades"]),
            detailed_services: Some(DetailedServices {
                consultations: owned(&[
                    "Medicina general.",
                    "Enfermería.",
                    "Pediatría.",
                    "Ginecobstetricia.",
                    "Medicina familiar.",
                    "Dermatología.",
                    "Psiquiatría.",
                    "Ortopedia y Traumatología.",
                    "Medicina del trabajo y Medicina laboral.",
                    "Medicina física y rehabilitación.",
                    "Cirugía de mano - Codo.",
                    "Cirugía plástica y estética.",
                    "Ortopedia de hombro.",
                    "Ortopedia de columna.",
                    "Ortopedia de cadera.",
                    "Ortopedia de rodilla.",
                    "Ortopedia de pie.",
                    "Medicina de dolor y cuidados paliativos.",
                    "Nutrición y dietética.",
                    "Optometría.",
                    "Psicología - Psicoterapia.",
                ]),
                other_services: owned(&[
                    "Vacunación no PAI.",
                    "Toma de muestras de laboratorio clínico.",
                    "Procedimientos menores de dermatología y ortopedia.",
                    "Toma de EKG.",
                    "Ecografías - Doppler - sábados a.m.",
                    "Electromiografías - Neuroconducciones.",
                ]),
                new_services: Vec::new(),
                additional_sections: vec![ServiceSection {
                    title: "Rehabilitación".to_string(),
                    services: owned(&["Terapia física, ocupacional y cognitiva."]),
                    is_new: false,
                }],
            }),
            contact: Contact {
                phone: SERVICE_PHONE.to_string(),
                email: SERVICE_EMAIL.to_string(),
            },
            is_premium: false,
            image_url: Some(
                "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/2a1a2c8a-4_106i09m04v08c00101401o.jpg"
                    .to_string(),
            ),
        },
        Location {
            id: "metropolis".to_string(),
            name: "Unidad médica premium Metrópolis".to_string(),
            address: "Avenida Carrera 68 # 75A-50".to_string(),
            full_address: Some(
                "Avenida Carrera 68 # 75A-50<br>C. C Metrópolis, Piso 1".to_string(),
            ),
            building: Some("C. C Metrópolis".to_string()),
            floor: Some("Primer Piso".to_string()),
            office: None,
            schedule: Schedule {
                weekdays: "6:30 a. m. a 7:00 p. m.".to_string(),
                saturday: "7:00 a. m. a 1:00 p. m.".to_string(),
                sunday: Some("Cerrado".to_string()),
            },
            services: owned(&["Medicina General", "Especialidades Premium"]),
            detailed_services: Some(DetailedServices {
                consultations: owned(&[
                    "Medicina general.",
                    "Enfermería.",
                    "Medicina familiar.",
                    "Pediatría.",
                    "Ginecobstetricia.",
                    "Medicina interna.",
                    "Dermatología.",
                    "Cirugía plástica.",
                    "Cirugía general estética.",
                    "Oftalmología.",
                    "Dermatología.",
                    "Neurología.",
                    "Cirugía general.",
                    "Endocrinología.",
                    "Reumatología.",
                    "Medicina alternativa y complementaria.",
                    "Ortopedia y Traumatología.",
                    "Medicina alternativa y complementaria (homeopática tradicional china, naturopatía y neural terapéutica).",
                    "Optometría.",
                    "Ortopedia de mano y codo.",
                    "Ortopedia de pie.",
                    "Ortopedia de hombro.",
                    "Medicina de dolor.",
                    "Medicina física y del deporte.",
                    "Nutrición y dietética.",
                    "Psicología - Psicoterapia.",
                    "Dolor y cuidados Paliativos.",
                    "Gastroenterología.",
                ]),
                other_services: owned(&[
                    "Sala de Procedimientos Menores.",
                    "Vacunación.",
                    "Complementaria (no PAI).",
                ]),
                new_services: Vec::new(),
                additional_sections: vec![
                    ServiceSection {
                        title: "Rehabilitación".to_string(),
                        services: owned(&["Terapia Física, Ocupacional y Cognitiva."]),
                        is_new: false,
                    },
                    ServiceSection {
                        title: "Imágenes Diagnósticas".to_string(),
                        services: owned(&[
                            "Doppler.",
                            "Ecografía.",
                            "Ecocardiografía.",
                            "Holter.",
                            "Ultrasonografía.",
                            "Rayos X.",
                            "Tomografía.",
                        ]),
                        is_new: true,
                    },
                ],
            }),
            contact: Contact {
                phone: SERVICE_PHONE.to_string(),
                email: SERVICE_EMAIL.to_string(),
            },
            is_premium: true,
            image_url: Some(
                "https://d9hhrg4mnvzow.cloudfront.net/www.saludbolivarips.com/2affc751-captura-de-pantalla-2024-09-11-a-las-8-18-15p-m-_10ew08e04v08b00b003028.png"
                    .to_string(),
            ),
        },
    ]
}
