// crates/geogrant-core/src/evaluator.rs

//! # Permission Evaluator
//!
//! Answers "does this permission set include (or exclude) this location?".
//!
//! The tested location is validated only by its country component: if the
//! country is not a key of the [`GeoStore`], evaluation fails with
//! [`GrantError::InvalidLocation`] whatever the set contains. Otherwise the
//! answer is an exact key lookup in the set's map for the direction; a
//! missing key is a negative answer, not an error. Sets are never widened by
//! geography, so holding `"India"` says nothing about `"Gujarat-India"`.

use crate::error::{GrantError, Result};
use crate::location;
use crate::permission::{Direction, Distributor, PermissionSet};
use crate::store::GeoStore;

/// Looks `location` up in the `direction` map of `permissions`.
pub fn check(
    direction: Direction,
    location: &str,
    permissions: &PermissionSet,
    store: &GeoStore,
) -> Result<bool> {
    let parsed = location::parse(location)?;
    if !store.has_country(parsed.country()) {
        return Err(GrantError::InvalidLocation(location.to_string()));
    }
    Ok(permissions.contains(direction, location))
}

pub fn check_include(location: &str, permissions: &PermissionSet, store: &GeoStore) -> Result<bool> {
    check(Direction::Include, location, permissions, store)
}

pub fn check_exclude(location: &str, permissions: &PermissionSet, store: &GeoStore) -> Result<bool> {
    check(Direction::Exclude, location, permissions, store)
}

/// Checks that `parent` holds the requested location in the requested
/// direction.
///
/// An unknown country surfaces as [`GrantError::InvalidLocation`]; a valid
/// location the parent does not hold becomes [`GrantError::NotAuthorized`].
pub fn check_permission(
    request: &Distributor,
    parent: &PermissionSet,
    store: &GeoStore,
) -> Result<()> {
    if check(request.direction, &request.location, parent, store)? {
        Ok(())
    } else {
        Err(GrantError::NotAuthorized(request.location.clone()))
    }
}
