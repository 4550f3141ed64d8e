//! Tests for the location catalog and the specialty derivation

use ips_catalog::{Catalog, LocationCatalog};

#[test]
fn test_all_returns_fresh_copies() {
    let catalog = LocationCatalog::new();

    let first = catalog.all();
    let mut second = catalog.all();
    assert_eq!(first, second);

    second.remove(0);
    assert_eq!(catalog.all(), first);
}

#[test]
fn test_get_by_id() {
    let catalog = LocationCatalog::new();

    let el_dorado = catalog.get("el-dorado").expect("seeded location");
    assert_eq!(el_dorado.name, "Unidad de Atención Integral Avenida El Dorado");
    assert_eq!(el_dorado.contact.phone, "#322");

    assert!(catalog.get("no-such-unit").is_none());
    assert!(catalog.get("").is_none());
}

#[test]
fn test_premium_partition() {
    let catalog = LocationCatalog::new();

    let premium = catalog.premium();
    assert_eq!(premium.len(), 1);
    assert_eq!(premium[0].id, "metropolis");

    let regular = catalog.regular();
    assert_eq!(regular.len(), 3);
    assert!(regular.iter().all(|location| !location.is_premium));
}

#[test]
fn test_footer_display_name_remaps_known_names() {
    let catalog = LocationCatalog::new();

    let el_dorado = catalog.get("el-dorado").unwrap();
    assert_eq!(
        catalog.footer_display_name(&el_dorado),
        "Unidad de atención integral Av. El Dorado"
    );
}

#[test]
fn test_footer_display_name_falls_back_to_the_original() {
    let catalog = LocationCatalog::new();

    // The premium unit's stored name is not a key of the remap table, so
    // it passes through unchanged
    let metropolis = catalog.get("metropolis").unwrap();
    assert_eq!(catalog.footer_display_name(&metropolis), metropolis.name);
}

#[test]
fn test_footer_schedule_prepends_day_labels() {
    let catalog = LocationCatalog::new();

    let el_dorado = catalog.get("el-dorado").unwrap();
    let schedule = catalog.footer_schedule(&el_dorado);
    assert_eq!(schedule.weekdays, "Lunes a Viernes 7:00 a. m. a 7:00 p. m.");
    assert_eq!(schedule.saturday, "Sábado 7:00 a. m. a 1:00 p. m.");
}

#[test]
fn test_map_url_embeds_the_encoded_address() {
    let catalog = LocationCatalog::new();

    let el_dorado = catalog.get("el-dorado").unwrap();
    let url = catalog.map_url(&el_dorado);
    assert!(url.starts_with("https://maps.google.com/maps?q="));
    assert!(url.ends_with("&output=embed"));
    assert!(url.contains("Torre%20Central%20Davivienda"));
    assert!(url.contains("Bogot%C3%A1%2C%20Colombia"));
}

#[test]
fn test_specialties_derived_from_service_tags() {
    let catalog = LocationCatalog::new();

    let specialties = catalog.specialties();
    assert_eq!(specialties.len(), 3);

    let general = &specialties[0];
    assert_eq!(general.id, "specialty-1");
    assert_eq!(general.name, "Medicina General");
    assert_eq!(general.available_at.len(), 4);

    let premium = specialties
        .iter()
        .find(|s| s.name == "Especialidades Premium")
        .expect("premium specialty");
    assert_eq!(premium.available_at, vec!["metropolis"]);
    assert_eq!(
        premium.description,
        "Atención médica especializada premium con servicios diferenciados."
    );
}

#[test]
fn test_specialties_recomputed_per_call() {
    let catalog = LocationCatalog::new();

    let first = catalog.specialties();
    let second = catalog.specialties();
    assert_eq!(first, second);
}
