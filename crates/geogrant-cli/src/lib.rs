//! geogrant-cli
//! ============
//!
//! Command-line interface for the `geogrant-core` distribution rights engine.
//!
//! This crate primarily provides a binary (`geogrant`). The library target
//! exists so docs.rs renders this overview.
//!
//! Basic usage:
//!
//! ```text
//! geogrant stats
//! geogrant parse Vyara-Gujarat-India
//! geogrant grant DIST1 India
//! geogrant grant DIST2 India --from DIST1
//! geogrant grant DIST2 Karnataka-India --exclude --from DIST1
//! geogrant check DIST2 India
//! geogrant show DIST2
//! ```
//!
//! For programmatic access use the `geogrant-core` crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]
