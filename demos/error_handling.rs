//! Error handling demo for geogrant-rs
//!
//! Every failure carries a kind and the location it concerns, so callers
//! can branch without parsing messages.

use geogrant_rs::prelude::*;

fn describe(result: Result<Granularity>) {
    match result {
        Ok(g) => println!("  ✓ granted ({g})"),
        Err(e) => match e.kind() {
            ErrorKind::InvalidLocation => println!("  ✗ unknown place: {:?}", e.location()),
            ErrorKind::NotAuthorized => println!("  ✗ parent lacks: {:?}", e.location()),
            ErrorKind::DuplicateGrant | ErrorKind::ConflictingGrant => {
                println!("  ✗ already held: {e}")
            }
            _ => println!("  ✗ {e}"),
        },
    }
}

fn main() -> Result<()> {
    println!("=== geogrant-rs Error Handling ===\n");

    let mut store = GeoStore::new();
    store.insert_country("India");
    let mut registry = Registry::new();

    println!("--- Root grant, then the same grant again ---");
    describe(registry.grant(&Distributor::include("DIST1", "India"), &store, None));
    describe(registry.grant(&Distributor::include("DIST1", "India"), &store, None));

    println!("--- Opposite direction for a held location ---");
    describe(registry.grant(&Distributor::exclude("DIST1", "India"), &store, None));

    println!("--- Child asks for what the parent does not hold ---");
    describe(registry.grant(&Distributor::exclude("DIST2", "India"), &store, Some("DIST1")));

    println!("--- Unknown country ---");
    describe(registry.grant(&Distributor::include("DIST2", "Atlantis"), &store, Some("DIST1")));

    println!("--- Malformed location ---");
    describe(registry.grant(&Distributor::include("DIST1", "a-b-c-d"), &store, None));

    Ok(())
}
