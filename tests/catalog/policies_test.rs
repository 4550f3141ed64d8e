//! Tests for the policy catalog

use ips_catalog::{Catalog, ListStyle, PolicyCatalog};

#[test]
fn test_all_returns_fresh_copies() {
    let catalog = PolicyCatalog::new();

    let first = catalog.all();
    let mut second = catalog.all();
    assert_eq!(first, second);

    second.clear();
    assert_eq!(catalog.all(), first);
}

#[test]
fn test_get_by_path() {
    let catalog = PolicyCatalog::new();

    let quality = catalog.get_by_path("politica-de-calidad").expect("seeded policy");
    assert_eq!(quality.id, "quality-policy");
    assert_eq!(quality.code, "DG-PE-010");
    assert_eq!(quality.content_items.len(), 3);

    assert!(catalog.get_by_path("politica-inexistente").is_none());
    assert!(catalog.get_by_path("").is_none());
}

#[test]
fn test_get_by_id() {
    let catalog = PolicyCatalog::new();

    let humanization = catalog.get("humanization-policy").expect("seeded policy");
    assert_eq!(humanization.path, "politica-de-humanizacion");
    assert!(humanization.content_items.is_empty());
}

#[test]
fn test_exists() {
    let catalog = PolicyCatalog::new();

    assert!(catalog.exists("politica-ambiental"));
    assert!(!catalog.exists("politica-inexistente"));
}

#[test]
fn test_patient_safety_uses_traditional_list_and_sections() {
    let catalog = PolicyCatalog::new();

    let safety = catalog.get_by_path("politica-de-seguridad-de-paciente").unwrap();
    assert_eq!(safety.list_style, ListStyle::Traditional);
    assert_eq!(safety.content_items.len(), 4);
    assert_eq!(safety.content_sections.len(), 1);
    assert_eq!(safety.content_sections[0].items.len(), 5);
}

#[test]
fn test_default_list_style_is_checkmarks() {
    let catalog = PolicyCatalog::new();

    let quality = catalog.get("quality-policy").unwrap();
    assert_eq!(quality.list_style, ListStyle::Checkmarks);
}

#[test]
fn test_require_reports_the_missing_key() {
    let catalog = PolicyCatalog::new();

    let error = catalog.require("no-such-policy").unwrap_err();
    assert_eq!(
        error.to_string(),
        "no policy record matches 'no-such-policy'"
    );
}
