//! Tests for the information card catalog

use ips_catalog::{Catalog, InformationCardCatalog};

#[test]
fn test_all_returns_fresh_copies() {
    let catalog = InformationCardCatalog::new();

    let first = catalog.all();
    let mut second = catalog.all();
    assert_eq!(first, second);

    second.clear();
    assert_eq!(catalog.all(), first);
}

#[test]
fn test_get_by_path() {
    let catalog = InformationCardCatalog::new();

    let rights = catalog.get_by_path("derechos").expect("seeded card");
    assert_eq!(rights.id, "derechos-usuario");
    assert_eq!(rights.content_items.len(), 12);

    assert!(catalog.get_by_path("no-such-path").is_none());
    assert!(catalog.get_by_path("").is_none());
}

#[test]
fn test_content_item_numbers_follow_authored_order() {
    let catalog = InformationCardCatalog::new();

    let duties = catalog.get_by_path("deberes").unwrap();
    assert_eq!(duties.content_items.len(), 11);

    let numbers: Vec<u32> = duties.content_items.iter().map(|item| item.number).collect();
    assert_eq!(numbers, (1..=11).collect::<Vec<u32>>());
}

#[test]
fn test_card_without_numbered_items_carries_detail_content() {
    let catalog = InformationCardCatalog::new();

    let association = catalog.get("asociacion-usuarios").expect("seeded card");
    assert!(association.content_items.is_empty());
    assert!(association.detail_content.is_some());
    assert_eq!(association.breadcrumb_title, "Participación Social");
}
