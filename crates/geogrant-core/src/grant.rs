// crates/geogrant-core/src/grant.rs

//! # Grant Inserter
//!
//! Appends one include or exclude entry to a distributor's permission set.
//! Nothing is written unless every check passes: authorization against the
//! parent (when there is one), location shape, then conflicts with what the
//! distributor already holds.

use crate::authorizer::authorize;
use crate::error::{GrantError, Result};
use crate::location::{self, Granularity};
use crate::permission::{Distributor, PermissionSet, Registry};
use crate::store::GeoStore;

/// Adds `distributor.location` to the distributor's set in `registry`.
///
/// `level` is the distributor's depth in the tree and `parent` the granting
/// parent's set; the root is `level = 0, parent = None` and only the
/// conflict checks apply. Returns the granularity of the stored entry.
///
/// # Errors
/// - [`GrantError::InvalidLocation`] / [`GrantError::NotAuthorized`] from the
///   parent check
/// - [`GrantError::MalformedLocation`] for a badly shaped location
/// - [`GrantError::DuplicateGrant`] if the location is already held in the
///   same direction
/// - [`GrantError::ConflictingGrant`] if it is held in the opposite direction
pub fn add_grant(
    distributor: &Distributor,
    registry: &mut Registry,
    store: &GeoStore,
    level: usize,
    parent: Option<&PermissionSet>,
) -> Result<Granularity> {
    authorize(distributor, parent, store)?;
    let granularity = location::granularity_of(&distributor.location)?;

    let permissions = registry.get_or_create(&distributor.name);
    let direction = distributor.direction;
    let location = &distributor.location;

    if permissions.contains(direction, location) {
        return Err(GrantError::DuplicateGrant {
            direction,
            location: location.clone(),
        });
    }
    if permissions.contains(direction.opposite(), location) {
        return Err(GrantError::ConflictingGrant {
            existing: direction.opposite(),
            location: location.clone(),
        });
    }

    permissions
        .grants_mut(direction)
        .insert(location.clone(), granularity);
    tracing::debug!(
        distributor = %distributor.name,
        %location,
        %direction,
        %granularity,
        level,
        "grant added"
    );
    Ok(granularity)
}

impl Registry {
    /// Grants `distributor` its requested location on behalf of the
    /// distributor named `parent`, or as a root grant when `parent` is `None`.
    ///
    /// The first grant from a parent records the child → parent link. After
    /// that the distributor can only be granted through that same parent. A
    /// root that already holds grants cannot be adopted by a parent.
    pub fn grant(
        &mut self,
        distributor: &Distributor,
        store: &GeoStore,
        parent: Option<&str>,
    ) -> Result<Granularity> {
        let Some(parent_name) = parent else {
            if let Some(owner) = self.parent_of(&distributor.name) {
                return Err(GrantError::InvalidData(format!(
                    "distributor {} belongs to {owner}; grant through its parent",
                    distributor.name
                )));
            }
            return add_grant(distributor, self, store, 0, None);
        };

        let parent_set = self
            .get(parent_name)
            .cloned()
            .ok_or_else(|| GrantError::UnknownDistributor(parent_name.to_string()))?;
        let new_link = self.check_link(&distributor.name, parent_name)?;
        let level = self.level_of(parent_name) + 1;

        let granularity = add_grant(distributor, self, store, level, Some(&parent_set))?;
        if new_link {
            self.set_parent(&distributor.name, parent_name);
        }
        Ok(granularity)
    }
}
