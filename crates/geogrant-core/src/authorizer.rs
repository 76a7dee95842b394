// crates/geogrant-core/src/authorizer.rs

//! # Grant Authorizer
//!
//! Gatekeeper run before any permission set is mutated: a child may only be
//! granted what its parent itself holds in the same direction.

use crate::error::Result;
use crate::evaluator::check_permission;
use crate::permission::{Distributor, PermissionSet};
use crate::store::GeoStore;

/// Authorizes `request` against the granting parent's set.
///
/// `None` means the request comes from a root distributor and is always
/// authorized. Only the immediate parent is consulted; ancestors further up
/// constrained the parent when its own grants were inserted.
pub fn authorize(
    request: &Distributor,
    parent: Option<&PermissionSet>,
    store: &GeoStore,
) -> Result<()> {
    let Some(parent) = parent else {
        return Ok(());
    };
    check_permission(request, parent, store).inspect_err(|e| {
        tracing::warn!(
            distributor = %request.name,
            location = %request.location,
            direction = %request.direction,
            "grant refused: {e}"
        );
    })
}
