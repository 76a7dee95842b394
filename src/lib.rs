//! geogrant-rs: umbrella crate re-exporting `geogrant-core` for the demos.

pub use geogrant_core::*;
