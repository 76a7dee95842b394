//! Basic usage demo for geogrant-rs
//!
//! This demo shows how to:
//! - Load the reference dataset
//! - Parse location strings
//! - Grant locations to a root distributor
//! - Check inclusion and exclusion

use geogrant_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== geogrant-rs Basic Usage ===\n");

    // Parses the bundled CSV once, then reads the binary cache next to it
    let store = GeoStore::load_default()?;
    let stats = store.stats();
    println!(
        "Loaded {} countries, {} states, {} cities\n",
        stats.countries, stats.states, stats.cities
    );

    println!("--- Parsing locations ---");
    for loc in ["India", "Gujarat-India", "Vyara-Gujarat-India"] {
        let parsed = parse(loc)?;
        println!("{loc:<22} -> {:?} {}", parsed.components(), parsed.granularity());
    }
    println!();

    println!("--- Root grants ---");
    let mut registry = Registry::new();
    registry.grant(&Distributor::include("DIST1", "India"), &store, None)?;
    registry.grant(&Distributor::exclude("DIST1", "Karnataka-India"), &store, None)?;

    if let Some(dist1) = registry.get("DIST1") {
        for loc in ["India", "Karnataka-India", "Nepal"] {
            let included = check_include(loc, dist1, &store)?;
            let excluded = check_exclude(loc, dist1, &store)?;
            println!("{loc:<16} include={included:<5} exclude={excluded}");
        }
    }

    Ok(())
}
