//! Tests for the client catalog

use ips_catalog::{Catalog, ClientCatalog};
use std::collections::HashSet;

#[test]
fn test_all_returns_fresh_copies() {
    let catalog = ClientCatalog::new();

    let first = catalog.all();
    let mut second = catalog.all();
    assert_eq!(first, second);

    second.clear();
    assert_eq!(catalog.all(), first);
}

#[test]
fn test_ids_are_unique() {
    let catalog = ClientCatalog::new();

    let clients = catalog.all();
    let ids: HashSet<&str> = clients.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), clients.len());
}

#[test]
fn test_get_by_id() {
    let catalog = ClientCatalog::new();

    let client = catalog.get("seguros-bolivar").expect("seeded client");
    assert_eq!(client.name, "Seguros Bolívar");

    assert!(catalog.get("no-such-client").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn test_with_website() {
    let catalog = ClientCatalog::new();

    let linked = catalog.with_website();
    assert_eq!(linked.len(), catalog.count());
    assert!(linked.iter().all(|c| c.website_url.is_some()));
}

#[test]
fn test_search_by_name_is_case_insensitive() {
    let catalog = ClientCatalog::new();

    let matches = catalog.search_by_name("arl");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "arl-seguros-bolivar");

    assert_eq!(catalog.search_by_name("BOLÍVAR").len(), 2);
}

#[test]
fn test_search_with_blank_term_returns_nothing() {
    let catalog = ClientCatalog::new();

    assert!(catalog.search_by_name("").is_empty());
    assert!(catalog.search_by_name("   ").is_empty());
}
