//! Tests for the service channel catalog and description rendering

use ips_catalog::format::rendered_description;
use ips_catalog::{Catalog, LinkType, ServiceChannelCatalog};

#[test]
fn test_all_returns_fresh_copies() {
    let catalog = ServiceChannelCatalog::new();

    let first = catalog.all();
    let mut second = catalog.all();
    assert_eq!(first, second);

    second.clear();
    assert_eq!(catalog.all(), first);
}

#[test]
fn test_get_by_id() {
    let catalog = ServiceChannelCatalog::new();

    let telephone = catalog.get("telephone").expect("seeded channel");
    assert_eq!(telephone.link_type, LinkType::Tel);

    assert!(catalog.get("no-such-channel").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn test_by_link_type() {
    let catalog = ServiceChannelCatalog::new();

    let dial = catalog.by_link_type(LinkType::Tel);
    assert_eq!(dial.len(), 1);
    assert_eq!(dial[0].id, "telephone");

    let unlinked = catalog.by_link_type(LinkType::None);
    assert_eq!(unlinked.len(), 1);
    assert_eq!(unlinked[0].id, "presencial");
}

#[test]
fn test_rendered_description_substitutes_the_placeholder() {
    let catalog = ServiceChannelCatalog::new();

    let telephone = catalog.get("telephone").unwrap();
    let rendered = rendered_description(&telephone);
    assert_eq!(
        rendered,
        "Desde su celular marque <strong><a href=\"tel:#322\" >#322</a></strong>, opciones 1-1-4-1."
    );
    assert!(!rendered.contains("target=\"_blank\""));
}

#[test]
fn test_rendered_description_adds_target_for_new_tab_links() {
    let catalog = ServiceChannelCatalog::new();

    let whatsapp = catalog.get("whatsapp").unwrap();
    let rendered = rendered_description(&whatsapp);
    assert!(rendered.contains("target=\"_blank\""));
    assert!(rendered.contains(">322 332 2322</a>"));
    assert!(!rendered.contains("{{LINK}}"));
}

#[test]
fn test_channel_without_link_is_rendered_verbatim() {
    let catalog = ServiceChannelCatalog::new();

    let in_person = catalog.get("presencial").unwrap();
    assert_eq!(rendered_description(&in_person), in_person.description);
}
