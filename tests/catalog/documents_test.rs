//! Tests for the document catalog
//!
//! Covers the lookup contract (copy semantics, sentinel not-found), the
//! filter utilities, title search, recency, statistics and sorting.

use ips_catalog::models::Document;
use ips_catalog::{Catalog, DocumentCatalog, DocumentType, SortBy, SortOrder};
use std::collections::HashSet;

fn test_document(id: &str, title: &str, document_type: DocumentType) -> Document {
    Document {
        id: id.to_string(),
        title: title.to_string(),
        download_url: format!("https://example.com/{id}.pdf"),
        document_type,
        is_available: true,
    }
}

#[test]
fn test_all_returns_fresh_copies() {
    let catalog = DocumentCatalog::new();

    let first = catalog.all();
    let mut second = catalog.all();
    assert_eq!(first, second);

    // Mutating a returned vector must not leak into the catalog
    second.clear();
    assert_eq!(catalog.all(), first);
}

#[test]
fn test_ids_are_unique() {
    let catalog = DocumentCatalog::new();

    let documents = catalog.all();
    let ids: HashSet<&str> = documents.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids.len(), documents.len());
}

#[test]
fn test_get_by_id() {
    let catalog = DocumentCatalog::new();

    let report = catalog.get("report-2024").expect("seeded document");
    assert_eq!(report.document_type, DocumentType::Financial);
    assert!(report.title.contains("2024"));

    assert!(catalog.get("no-such-document").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn test_by_type_partitions_the_flat_list() {
    let catalog = DocumentCatalog::new();

    let financial = catalog.by_type(DocumentType::Financial);
    assert_eq!(financial.len(), 6);
    assert!(financial.iter().all(|d| d.document_type == DocumentType::Financial));

    assert_eq!(catalog.by_type(DocumentType::Transparency).len(), 1);
    assert_eq!(catalog.by_type(DocumentType::Epidemiological).len(), 2);
    assert_eq!(catalog.by_type(DocumentType::Privacy).len(), 2);
}

#[test]
fn test_by_types_union_and_empty_input() {
    let catalog = DocumentCatalog::new();

    let union = catalog.by_types(&[DocumentType::Financial, DocumentType::Privacy]);
    assert_eq!(union.len(), 8);

    // An empty type list selects nothing, not everything
    assert!(catalog.by_types(&[]).is_empty());
}

#[test]
fn test_filter_documents_with_no_filters_returns_all() {
    let catalog = DocumentCatalog::new();

    assert_eq!(catalog.filter_documents(None, None), catalog.all());
}

#[test]
fn test_filter_documents_applies_filters_independently() {
    let catalog = DocumentCatalog::new();

    let financial = catalog.filter_documents(Some(DocumentType::Financial), None);
    assert_eq!(financial.len(), 6);

    let available = catalog.filter_documents(None, Some(true));
    assert_eq!(available.len(), catalog.count());

    let unavailable_privacy = catalog.filter_documents(Some(DocumentType::Privacy), Some(false));
    assert!(unavailable_privacy.is_empty());
}

#[test]
fn test_search_by_title_is_case_insensitive() {
    let catalog = DocumentCatalog::new();

    let bulletins = catalog.search_by_title("BOLETÍN");
    assert_eq!(bulletins.len(), 2);

    let reports = catalog.search_by_title("informe de gestión");
    assert_eq!(reports.len(), 6);
}

#[test]
fn test_search_with_blank_term_returns_nothing() {
    let catalog = DocumentCatalog::new();

    assert!(catalog.search_by_title("").is_empty());
    assert!(catalog.search_by_title("   ").is_empty());
}

#[test]
fn test_recent_excludes_documents_without_a_year() {
    let catalog = DocumentCatalog::new();

    // A window large enough to reach every dated title: only the two
    // privacy documents carry no year and must be excluded
    let recent = catalog.recent(1000);
    assert_eq!(recent.len(), 9);
    assert!(recent.iter().all(|d| d.document_type != DocumentType::Privacy));
}

#[test]
fn test_stats_cover_all_four_types() {
    let catalog = DocumentCatalog::new();

    let stats = catalog.stats();
    assert_eq!(stats.total, 11);
    assert_eq!(stats.available, 11);
    assert_eq!(stats.by_type.of(DocumentType::Financial), 6);
    assert_eq!(stats.by_type.of(DocumentType::Transparency), 1);
    assert_eq!(stats.by_type.of(DocumentType::Epidemiological), 2);
    assert_eq!(stats.by_type.of(DocumentType::Privacy), 2);
    assert_eq!(stats.available_by_type, stats.by_type);
}

#[test]
fn test_sort_by_year_treats_missing_year_as_zero() {
    let catalog = DocumentCatalog::new();
    let documents = vec![
        test_document("a", "Doc 2023", DocumentType::Financial),
        test_document("b", "Doc sin año", DocumentType::Financial),
        test_document("c", "Otro 2021", DocumentType::Financial),
    ];

    let sorted = catalog.sort(&documents, SortBy::Year, SortOrder::Asc);
    let titles: Vec<&str> = sorted.iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["Doc sin año", "Otro 2021", "Doc 2023"]);

    let reversed = catalog.sort(&documents, SortBy::Year, SortOrder::Desc);
    assert_eq!(reversed[0].title, "Doc 2023");
}

#[test]
fn test_sort_does_not_mutate_its_input() {
    let catalog = DocumentCatalog::new();
    let documents = vec![
        test_document("a", "Zeta", DocumentType::Financial),
        test_document("b", "Alfa", DocumentType::Financial),
    ];

    let sorted = catalog.sort(&documents, SortBy::Title, SortOrder::Asc);
    assert_eq!(sorted[0].title, "Alfa");

    // Input order untouched
    assert_eq!(documents[0].title, "Zeta");
    assert_eq!(documents[1].title, "Alfa");
}

#[test]
fn test_sort_by_type_uses_the_literal_tags() {
    let catalog = DocumentCatalog::new();
    let documents = vec![
        test_document("a", "Uno", DocumentType::Transparency),
        test_document("b", "Dos", DocumentType::Epidemiological),
        test_document("c", "Tres", DocumentType::Financial),
    ];

    let sorted = catalog.sort(&documents, SortBy::Type, SortOrder::Asc);
    let types: Vec<&str> = sorted.iter().map(|d| d.document_type.as_str()).collect();
    assert_eq!(types, vec!["epidemiological", "financial", "transparency"]);
}
