//! Downloadable document catalog
//!
//! A single flat list backs all four document categories; every per-type
//! view is a filter over it. Alongside the plain lookups this catalog
//! carries the richer utilities: multi-type union filters, title search,
//! recency filtering, per-type statistics, and non-mutating sorting.

use crate::models::document::Document;
use crate::models::traits::Catalog;
use crate::models::types::DocumentType;
use chrono::Datelike;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;

/// Default window for [`DocumentCatalog::recent`], in years back from the
/// current year
pub const DEFAULT_RECENT_YEARS: i32 = 2;

/// Sort key for [`DocumentCatalog::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Case-insensitive title comparison
    #[default]
    Title,
    /// Category tag comparison
    Type,
    /// Year extracted from the title; titles without one sort as year 0
    Year,
}

/// Sort direction for [`DocumentCatalog::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending
    #[default]
    Asc,
    /// Descending
    Desc,
}

/// Per-category document counters, always carrying all four categories in
/// their canonical order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TypeCounts {
    /// Financial documents
    pub financial: usize,
    /// Transparency documents
    pub transparency: usize,
    /// Epidemiological bulletins
    pub epidemiological: usize,
    /// Privacy documents
    pub privacy: usize,
}

impl TypeCounts {
    /// Read the counter for a category
    #[must_use]
    pub const fn of(&self, document_type: DocumentType) -> usize {
        match document_type {
            DocumentType::Financial => self.financial,
            DocumentType::Transparency => self.transparency,
            DocumentType::Epidemiological => self.epidemiological,
            DocumentType::Privacy => self.privacy,
        }
    }

    fn bump(&mut self, document_type: DocumentType) {
        match document_type {
            DocumentType::Financial => self.financial += 1,
            DocumentType::Transparency => self.transparency += 1,
            DocumentType::Epidemiological => self.epidemiological += 1,
            DocumentType::Privacy => self.privacy += 1,
        }
    }
}

/// Document counts partitioned by availability and category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStats {
    /// Total number of documents
    pub total: usize,
    /// Number of documents with an active download link
    pub available: usize,
    /// Counts per category
    pub by_type: TypeCounts,
    /// Counts of available documents per category
    pub available_by_type: TypeCounts,
}

impl DocumentStats {
    /// Render the statistics as a human-readable multi-line summary
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Document Catalog Summary:\n");
        summary.push_str(&format!("  Total Documents: {}\n", self.total));
        summary.push_str(&format!("  Available Documents: {}\n", self.available));
        for document_type in DocumentType::ALL {
            summary.push_str(&format!(
                "  {}: {} ({} available)\n",
                document_type,
                self.by_type.of(document_type),
                self.available_by_type.of(document_type)
            ));
        }
        summary
    }
}

/// A catalog of downloadable documents
#[derive(Debug)]
pub struct DocumentCatalog {
    documents: Vec<Document>,
}

impl Default for DocumentCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog for DocumentCatalog {
    type Record = Document;

    const KIND: &'static str = "document";

    fn records(&self) -> &[Document] {
        &self.documents
    }
}

impl DocumentCatalog {
    /// Create the catalog with the published document list
    #[must_use]
    pub fn new() -> Self {
        Self { documents: seed() }
    }

    /// Get all documents of one category
    #[must_use]
    pub fn by_type(&self, document_type: DocumentType) -> Vec<Document> {
        self.filter(|document| document.document_type == document_type)
    }

    /// Get the documents whose download link is active
    #[must_use]
    pub fn available(&self) -> Vec<Document> {
        self.filter(|document| document.is_available)
    }

    /// Get the documents matching any of the given categories.
    ///
    /// An empty slice selects nothing, not everything.
    #[must_use]
    pub fn by_types(&self, types: &[DocumentType]) -> Vec<Document> {
        self.filter(|document| types.contains(&document.document_type))
    }

    /// Filter by category and/or availability; both filters are optional
    /// and independent, and passing neither returns every document
    #[must_use]
    pub fn filter_documents(
        &self,
        document_type: Option<DocumentType>,
        is_available: Option<bool>,
    ) -> Vec<Document> {
        self.filter(|document| {
            document_type.is_none_or(|t| document.document_type == t)
                && is_available.is_none_or(|a| document.is_available == a)
        })
    }

    /// Search documents by title, case-insensitive substring match.
    ///
    /// An empty or whitespace-only term returns an empty result, not the
    /// full list; a blank query deliberately selects nothing.
    #[must_use]
    pub fn search_by_title(&self, term: &str) -> Vec<Document> {
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        self.filter(|document| document.title.to_lowercase().contains(&normalized))
    }

    /// Get the documents whose title carries a year within `years_back`
    /// years of the current year.
    ///
    /// Documents without an extractable year are excluded here, unlike
    /// year sorting which treats them as year 0.
    #[must_use]
    pub fn recent(&self, years_back: i32) -> Vec<Document> {
        let from_year = chrono::Local::now().year() - years_back;

        self.filter(|document| match extract_year(&document.title) {
            Some(year) => year >= from_year,
            None => false,
        })
    }

    /// Calculate document counts by category and availability
    #[must_use]
    pub fn stats(&self) -> DocumentStats {
        let mut stats = DocumentStats {
            total: self.documents.len(),
            ..DocumentStats::default()
        };

        for document in &self.documents {
            stats.by_type.bump(document.document_type);
            if document.is_available {
                stats.available += 1;
                stats.available_by_type.bump(document.document_type);
            }
        }

        stats
    }

    /// Sort a document slice by the given key and direction.
    ///
    /// Returns a new vector; the input is never reordered. The sort is
    /// stable, so equal keys keep their input order.
    #[must_use]
    pub fn sort(&self, documents: &[Document], by: SortBy, order: SortOrder) -> Vec<Document> {
        let mut sorted = documents.to_vec();

        sorted.sort_by(|a, b| {
            let comparison = match by {
                SortBy::Title => compare_ci(&a.title, &b.title),
                SortBy::Type => a.document_type.as_str().cmp(b.document_type.as_str()),
                SortBy::Year => extract_year(&a.title)
                    .unwrap_or(0)
                    .cmp(&extract_year(&b.title).unwrap_or(0)),
            };

            match order {
                SortOrder::Asc => comparison,
                SortOrder::Desc => comparison.reverse(),
            }
        });

        sorted
    }
}

/// Case-insensitive string comparison, standing in for the locale-aware
/// comparison the site performs in the browser
fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Extract the publication year from a document title.
///
/// Takes the first run of exactly 4 consecutive digits anywhere in the
/// title. The quirks are contractual: a 5-digit run yields its first 4
/// digits, and with several years present the first occurrence wins.
pub(crate) fn extract_year(title: &str) -> Option<i32> {
    lazy_static! {
        static ref YEAR_IN_TITLE: Regex = Regex::new(r"\d{4}").unwrap();
    }

    YEAR_IN_TITLE
        .find(title)
        .and_then(|m| m.as_str().parse::<i32>().ok())
}

fn seed() -> Vec<Document> {
    fn document(
        id: &str,
        title: &str,
        download_url: &str,
        document_type: DocumentType,
    ) -> Document {
        Document {
            id: id.to_string(),
            title: title.to_string(),
            download_url: download_url.to_string(),
            document_type,
            is_available: true,
        }
    }

    vec![
        // Transparency
        document(
            "salud-transparente-2025",
            "Salud Transparente Salud Bolívar IPS Junio 2025",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2025/07/04110028/Periodico-SALUD-TRANSPARENTE-JUNIO-IPS1-min.pdf",
            DocumentType::Transparency,
        ),
        // Epidemiological bulletins
        document(
            "boletin-epidemiologico-primer-semestre-2024",
            "Boletín Epidemiológico Primer Semestre 2024",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2024/08/27103626/Boletin-Epidemiologico-Primer-Semestre-2024.pdf",
            DocumentType::Epidemiological,
        ),
        document(
            "boletin-epidemiologico-segundo-semestre-2024",
            "Boletín Epidemiológico Segundo Semestre 2024",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2024/12/23091405/boletin-epidemiologico-II-semestre-2024.pdf",
            DocumentType::Epidemiological,
        ),
        // Financial reports
        document(
            "report-2024",
            "Informe de Gestión y Estados Financieros • Salud Bolívar IPS 2024",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2025/04/01083926/Informe-Gestion-Estados-Financieros_Salud-Bolivar-IPS-2024-min.pdf",
            DocumentType::Financial,
        ),
        document(
            "report-2023",
            "Informe de Gestión y Estados Financieros • Salud Bolívar IPS 2023",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2025/01/28154027/Estados-Financieros-de-Publicacion-IPS-Dic-2023-2022.pdf",
            DocumentType::Financial,
        ),
        document(
            "report-2022",
            "Informe de Gestión y Estados Financieros • Salud Bolívar IPS 2022",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2023/03/31105805/Estados-Financieros-de-Publicacion-IPS-Dic2022-2021.pdf",
            DocumentType::Financial,
        ),
        document(
            "report-2021",
            "Informe de Gestión y Estados Financieros • Salud Bolívar IPS 2021",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2022/04/05112605/Estados-Financieros-de-Publicacion-IPS-Dic2021-2020.pdf",
            DocumentType::Financial,
        ),
        document(
            "report-2020",
            "Informe de Gestión y Estados Financieros • Salud Bolívar IPS 2020",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2021/04/23110033/2_EstadosFinancieros-Publicacion_IPS-2020-2019.pdf",
            DocumentType::Financial,
        ),
        document(
            "report-2019",
            "Informe de Gestión y Estados Financieros • Salud Bolívar IPS 2019",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2020/04/30122546/EstadosFinancieros2019_SaludBolivar-IPS.pdf",
            DocumentType::Financial,
        ),
        // Data protection and privacy
        document(
            "politicas-proteccion-datos",
            "Políticas para Protección de datos personales - Salud Bolívar IPS",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2021/04/09151806/MANUAL-POLITICAS-PARA-LA-PROTECCION-DATOS-PERSONALES.pdf",
            DocumentType::Privacy,
        ),
        document(
            "aviso-privacidad",
            "Aviso de Privacidad - Salud Bolívar IPS",
            "https://d9b6rardqz97a.cloudfront.net/wp-content/uploads/2021/04/09151816/AVISO-DE-PRIVACIDAD.pdf",
            DocumentType::Privacy,
        ),
    ]
}
