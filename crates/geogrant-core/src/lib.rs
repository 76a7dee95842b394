// crates/geogrant-core/src/lib.rs

//! # geogrant-core
//!
//! Grants, validates and checks geographic distribution rights. A
//! distributor holds a [`PermissionSet`] of included and excluded locations
//! (`"Country"`, `"State-Country"` or `"City-State-Country"`); grants to a
//! child are only allowed within what its parent holds.
//!
//! ```rust
//! use geogrant_core::prelude::*;
//!
//! let mut store = GeoStore::new();
//! store.insert_country("India");
//!
//! let mut registry = Registry::new();
//! registry.grant(&Distributor::include("DIST1", "India"), &store, None).unwrap();
//! registry.grant(&Distributor::include("DIST2", "India"), &store, Some("DIST1")).unwrap();
//!
//! let dist2 = registry.get("DIST2").unwrap();
//! assert!(check_include("India", dist2, &store).unwrap());
//! ```

pub mod authorizer;
pub mod error;
pub mod evaluator;
pub mod grant;
pub mod loader;
pub mod location;
pub mod permission;
pub mod prelude;
pub mod store;
pub mod text;

// Re-exports
pub use crate::error::{ErrorKind, GrantError, Result};
pub use crate::evaluator::{check_exclude, check_include, check_permission};
pub use crate::grant::add_grant;
pub use crate::location::{parse, Granularity, ParsedLocation};
pub use crate::permission::{Direction, Distributor, PermissionSet, Registry};
pub use crate::store::{CityRecord, DbStats, GeoStore};
pub use crate::text::normalize;
