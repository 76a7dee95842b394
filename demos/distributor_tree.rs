//! Builds a three-level distributor tree and shows grants narrowing on the
//! way down.

use geogrant_rs::prelude::*;

fn main() -> Result<()> {
    let path = GeoStore::default_data_dir().join(GeoStore::default_dataset_filename());
    let store = GeoStore::load_from_path(path)?;
    let mut registry = Registry::new();

    let steps: [(Distributor, Option<&str>); 6] = [
        (Distributor::include("DIST1", "India"), None),
        (Distributor::include("DIST1", "United States"), None),
        (Distributor::exclude("DIST1", "Karnataka-India"), None),
        (Distributor::include("DIST2", "India"), Some("DIST1")),
        (Distributor::exclude("DIST2", "Karnataka-India"), Some("DIST1")),
        (Distributor::include("DIST3", "India"), Some("DIST2")),
    ];

    for (request, parent) in &steps {
        let granularity = registry.grant(request, &store, *parent)?;
        println!(
            "{:<6} {} {} ({granularity}) from {}",
            request.name,
            request.direction,
            request.location,
            parent.unwrap_or("root")
        );
    }

    // DIST2 was never given the United States, so it cannot pass it on.
    let refused = registry.grant(
        &Distributor::include("DIST3", "United States"),
        &store,
        Some("DIST2"),
    );
    if let Err(e) = refused {
        println!("refused: {e}");
    }

    for name in registry.names() {
        println!("{name}: level {}", registry.level_of(name));
    }
    Ok(())
}
