//! End-to-end grant flows over the bundled sample dataset.

use geogrant_core::prelude::*;

fn sample_store() -> GeoStore {
    let path = GeoStore::default_data_dir().join(GeoStore::default_dataset_filename());
    GeoStore::load_from_path(path).expect("sample dataset should load")
}

#[test]
fn sample_dataset_shape() {
    let store = sample_store();
    let stats = store.stats();
    assert_eq!(stats.countries, 5);
    assert!(stats.cities >= stats.states);
    assert!(store.has_city("United States", "Illinois", "Chicago"));
    assert_eq!(store.canonical_country("united states"), Some("United States"));
}

#[test]
fn three_level_distribution_tree() {
    let store = sample_store();
    let mut registry = Registry::new();

    // DIST1 is the root and may hold anything
    for d in [
        Distributor::include("DIST1", "India"),
        Distributor::include("DIST1", "United States"),
        Distributor::exclude("DIST1", "Karnataka-India"),
        Distributor::exclude("DIST1", "Chennai-Tamil Nadu-India"),
    ] {
        registry.grant(&d, &store, None).unwrap();
    }

    registry
        .grant(&Distributor::include("DIST2", "India"), &store, Some("DIST1"))
        .unwrap();
    registry
        .grant(&Distributor::exclude("DIST2", "Karnataka-India"), &store, Some("DIST1"))
        .unwrap();
    registry
        .grant(&Distributor::include("DIST3", "India"), &store, Some("DIST2"))
        .unwrap();

    assert_eq!(registry.level_of("DIST3"), 2);

    // DIST2 never got the United States
    let err = registry
        .grant(&Distributor::include("DIST3", "United States"), &store, Some("DIST2"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotAuthorized);
    assert_eq!(err.location(), Some("United States"));

    // exclusions are passed down the same way
    let granted = registry
        .grant(
            &Distributor::exclude("DIST2", "Chennai-Tamil Nadu-India"),
            &store,
            Some("DIST1"),
        )
        .unwrap();
    assert_eq!(granted, Granularity::City);

    let dist3 = registry.get("DIST3").unwrap();
    assert!(check_include("India", dist3, &store).unwrap());
    assert!(!check_exclude("India", dist3, &store).unwrap());
}

#[test]
fn unknown_country_never_authorizes() {
    let store = sample_store();
    let mut registry = Registry::new();
    registry
        .grant(&Distributor::include("DIST1", "Atlantis"), &store, None)
        .unwrap();

    let err = registry
        .grant(&Distributor::include("DIST2", "Atlantis"), &store, Some("DIST1"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLocation);
    assert!(registry.get("DIST2").is_none());
}

#[test]
fn errors_expose_structured_payload() {
    let store = sample_store();
    let mut registry = Registry::new();
    registry
        .grant(&Distributor::include("DIST1", "Nepal"), &store, None)
        .unwrap();
    match registry.grant(&Distributor::include("DIST1", "Nepal"), &store, None) {
        Err(GrantError::DuplicateGrant {
            direction,
            location,
        }) => {
            assert_eq!(direction, Direction::Include);
            assert_eq!(location, "Nepal");
        }
        other => panic!("expected duplicate grant, got {other:?}"),
    }
}
