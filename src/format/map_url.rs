//! Map embed URL building

/// Base of the keyless map embed endpoint
const MAP_EMBED_BASE: &str = "https://maps.google.com/maps";

/// City and country every search query is anchored to
const CITY_SUFFIX: &str = "Bogotá, Colombia";

/// Build a map embed URL for an address.
///
/// The search query is `address[, building], Bogotá, Colombia`; the
/// building segment is appended only when it is a non-empty string, so an
/// empty building never introduces a stray separator. The query is
/// percent-encoded into the keyless embed endpoint.
#[must_use]
pub fn map_embed_url(address: &str, building: Option<&str>) -> String {
    let mut query = address.to_string();

    if let Some(building) = building.filter(|b| !b.is_empty()) {
        query.push_str(", ");
        query.push_str(building);
    }

    query.push_str(", ");
    query.push_str(CITY_SUFFIX);

    format!(
        "{MAP_EMBED_BASE}?q={}&output=embed",
        urlencoding::encode(&query)
    )
}
