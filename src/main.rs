use anyhow::Result;
use ips_catalog::{
    Catalog, ClientCatalog, DocumentCatalog, InformationCardCatalog, LocationCatalog,
    PolicyCatalog, ServiceChannelCatalog,
};
use itertools::Itertools;
use log::info;

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let json_output = std::env::args().any(|arg| arg == "--json");

    let locations = LocationCatalog::new();
    let documents = DocumentCatalog::new();
    let policies = PolicyCatalog::new();
    let cards = InformationCardCatalog::new();
    let clients = ClientCatalog::new();
    let channels = ServiceChannelCatalog::new();

    info!(
        "catalogs loaded: {} locations, {} documents, {} policies, {} cards, {} clients, {} channels",
        locations.count(),
        documents.count(),
        policies.count(),
        cards.count(),
        clients.count(),
        channels.count()
    );

    let stats = documents.stats();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", stats.summary());

    println!("Care Units:");
    for location in locations.all() {
        println!(
            "  {} — {} ({})",
            locations.footer_display_name(&location),
            location.address,
            location.services.iter().join(", ")
        );
    }

    println!("\nSpecialties:");
    for specialty in locations.specialties() {
        println!(
            "  {} — available at {} unit(s)",
            specialty.name,
            specialty.available_at.len()
        );
    }

    // Exercise the required-lookup seam; an unknown path here is a bug in
    // the seeded data, not a user error
    let quality = policies.require("quality-policy")?;
    info!("sample policy: {} ({})", quality.title, quality.code);

    Ok(())
}
