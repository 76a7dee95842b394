// crates/geogrant-core/src/permission.rs

//! Permission sets, grant requests and the distributor registry.

use crate::error::{GrantError, Result};
use crate::location::Granularity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Whether a grant includes or excludes a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Include,
    Exclude,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Include => Direction::Exclude,
            Direction::Exclude => Direction::Include,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Include => "include",
            Direction::Exclude => "exclude",
        })
    }
}

pub type GrantMap = BTreeMap<String, Granularity>;

/// A distributor's accumulated include and exclude grants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    pub include: GrantMap,
    #[serde(default)]
    pub exclude: GrantMap,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grants(&self, direction: Direction) -> &GrantMap {
        match direction {
            Direction::Include => &self.include,
            Direction::Exclude => &self.exclude,
        }
    }

    pub(crate) fn grants_mut(&mut self, direction: Direction) -> &mut GrantMap {
        match direction {
            Direction::Include => &mut self.include,
            Direction::Exclude => &mut self.exclude,
        }
    }

    pub fn contains(&self, direction: Direction, location: &str) -> bool {
        self.grants(direction).contains_key(location)
    }

    /// Builder-style insert for hand-assembled sets. Does no validation;
    /// use [`add_grant`](crate::grant::add_grant) for checked insertion.
    pub fn with(mut self, direction: Direction, location: &str, granularity: Granularity) -> Self {
        self.grants_mut(direction)
            .insert(location.to_string(), granularity);
        self
    }

    pub fn len(&self) -> usize {
        self.include.len() + self.exclude.len()
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }
}

/// A grant request: `name` wants `location` in the given `direction`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distributor {
    pub name: String,
    pub location: String,
    pub direction: Direction,
}

impl Distributor {
    pub fn new(name: impl Into<String>, location: impl Into<String>, direction: Direction) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            direction,
        }
    }

    pub fn include(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(name, location, Direction::Include)
    }

    pub fn exclude(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::new(name, location, Direction::Exclude)
    }
}

/// Distributor name → realized permission set, plus child → parent links.
///
/// The registry owns no lock; wrap it in one if grants are processed from
/// several threads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    #[serde(default)]
    permissions: BTreeMap<String, PermissionSet>,
    #[serde(default)]
    parents: BTreeMap<String, String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&PermissionSet> {
        self.permissions.get(name)
    }

    /// Returns the set for `name`, creating an empty one on first use.
    pub fn get_or_create(&mut self, name: &str) -> &mut PermissionSet {
        self.permissions.entry(name.to_string()).or_default()
    }

    /// Inserts or replaces a whole permission set.
    pub fn insert(&mut self, name: impl Into<String>, permissions: PermissionSet) {
        self.permissions.insert(name.into(), permissions);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.permissions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    /// Depth of `name` in the distributor tree; roots are level 0.
    pub fn level_of(&self, name: &str) -> usize {
        let mut level = 0;
        let mut current = name;
        while let Some(parent) = self.parent_of(current) {
            level += 1;
            current = parent;
            // links are checked for cycles on insert, this is a backstop
            if level > self.parents.len() {
                break;
            }
        }
        level
    }

    /// Checks that `child` may be linked under `parent`. Returns `false`
    /// when the link already exists.
    pub(crate) fn check_link(&self, child: &str, parent: &str) -> Result<bool> {
        if child == parent {
            return Err(GrantError::InvalidData(format!(
                "distributor {child} cannot be its own parent"
            )));
        }
        if let Some(existing) = self.parent_of(child) {
            if existing != parent {
                return Err(GrantError::InvalidData(format!(
                    "distributor {child} already belongs to {existing}"
                )));
            }
            return Ok(false);
        }
        if self.get(child).is_some_and(|set| !set.is_empty()) {
            return Err(GrantError::InvalidData(format!(
                "distributor {child} is a root; cannot be re-parented"
            )));
        }
        let mut ancestor = Some(parent);
        while let Some(a) = ancestor {
            if a == child {
                return Err(GrantError::InvalidData(format!(
                    "linking {child} under {parent} would create a cycle"
                )));
            }
            ancestor = self.parent_of(a);
        }
        Ok(true)
    }

    /// Stores a link already accepted by [`Registry::check_link`].
    pub(crate) fn set_parent(&mut self, child: &str, parent: &str) {
        self.parents.insert(child.to_string(), parent.to_string());
    }

    /// Rejects self-links and cycles among the recorded parent links.
    pub fn validate_links(&self) -> Result<()> {
        for (child, parent) in &self.parents {
            let mut ancestor = Some(parent.as_str());
            let mut steps = 0;
            while let Some(a) = ancestor {
                if a == child || steps > self.parents.len() {
                    return Err(GrantError::InvalidData(format!(
                        "parent links of {child} form a cycle"
                    )));
                }
                ancestor = self.parent_of(a);
                steps += 1;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "json")]
mod persist {
    use super::Registry;
    use crate::error::Result;
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::Path;

    impl Registry {
        /// Reads a registry written by [`Registry::save_json`]. A missing
        /// file yields an empty registry; cyclic parent links are rejected.
        pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
            let path = path.as_ref();
            if !path.exists() {
                tracing::debug!(path = %path.display(), "registry file absent, starting empty");
                return Ok(Self::default());
            }
            let reader = BufReader::new(File::open(path)?);
            let registry: Registry = serde_json::from_reader(reader)?;
            registry.validate_links()?;
            Ok(registry)
        }

        pub fn save_json(&self, path: impl AsRef<Path>) -> Result<()> {
            let path = path.as_ref();
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let mut writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(&mut writer, self)?;
            writer.flush()?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl Registry {
        fn link(&mut self, child: &str, parent: &str) -> Result<()> {
            if self.check_link(child, parent)? {
                self.set_parent(child, parent);
            }
            Ok(())
        }
    }

    #[test]
    fn sets_start_empty_and_select_by_direction() {
        let set = PermissionSet::new()
            .with(Direction::Include, "India", Granularity::Country)
            .with(Direction::Exclude, "Gujarat-India", Granularity::State);
        assert!(set.contains(Direction::Include, "India"));
        assert!(!set.contains(Direction::Exclude, "India"));
        assert_eq!(
            set.grants(Direction::Exclude).get("Gujarat-India"),
            Some(&Granularity::State)
        );
        assert_eq!(set.len(), 2);
        assert!(PermissionSet::new().is_empty());
    }

    #[test]
    fn get_or_create_is_lazy() {
        let mut registry = Registry::new();
        assert!(registry.get("Vyara").is_none());
        assert!(registry.get_or_create("Vyara").is_empty());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["Vyara"]);
    }

    #[test]
    fn levels_follow_parent_links() {
        let mut registry = Registry::new();
        registry.link("DIST2", "DIST1").unwrap();
        registry.link("DIST3", "DIST2").unwrap();
        assert_eq!(registry.level_of("DIST1"), 0);
        assert_eq!(registry.level_of("DIST2"), 1);
        assert_eq!(registry.level_of("DIST3"), 2);
        assert_eq!(registry.parent_of("DIST3"), Some("DIST2"));

        // same link again is a no-op
        registry.link("DIST2", "DIST1").unwrap();
    }

    #[test]
    fn rejects_reparenting_and_cycles() {
        let mut registry = Registry::new();
        registry.link("DIST2", "DIST1").unwrap();
        assert!(registry.link("DIST2", "DIST9").is_err());
        assert!(registry.link("DIST1", "DIST2").is_err());
        assert!(registry.link("DIST1", "DIST1").is_err());
    }

    #[test]
    fn roots_holding_grants_cannot_be_adopted() {
        let mut registry = Registry::new();
        registry.insert(
            "DIST1",
            PermissionSet::new().with(Direction::Include, "India", Granularity::Country),
        );
        let err = registry.link("DIST1", "DIST0").unwrap_err();
        assert!(err.to_string().contains("is a root"), "{err}");
        assert!(registry.parent_of("DIST1").is_none());
    }

    #[test]
    fn validate_links_finds_cycles() {
        let mut registry = Registry::new();
        registry.link("DIST2", "DIST1").unwrap();
        registry.link("DIST3", "DIST2").unwrap();
        registry.validate_links().unwrap();

        registry.set_parent("DIST1", "DIST3");
        assert!(registry.validate_links().is_err());
    }

    #[test]
    fn direction_serializes_lowercase() {
        assert_eq!(Direction::Include.to_string(), "include");
        assert_eq!(Direction::Exclude.opposite(), Direction::Include);
    }

    #[cfg(feature = "json")]
    #[test]
    fn registry_round_trips_through_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("registry.json");

        assert!(Registry::load_json(&path).unwrap().is_empty());

        let mut registry = Registry::new();
        registry.insert(
            "DIST1",
            PermissionSet::new().with(Direction::Include, "India", Granularity::Country),
        );
        registry.link("DIST2", "DIST1").unwrap();
        registry.save_json(&path).unwrap();

        let loaded = Registry::load_json(&path).unwrap();
        assert_eq!(loaded, registry);
        assert_eq!(loaded.level_of("DIST2"), 1);
    }

    #[cfg(feature = "json")]
    #[test]
    fn load_rejects_cyclic_links() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("registry.json");
        std::fs::write(
            &path,
            r#"{"permissions":{},"parents":{"DIST1":"DIST2","DIST2":"DIST1"}}"#,
        )
        .unwrap();

        let err = Registry::load_json(&path).unwrap_err();
        assert!(matches!(err, GrantError::InvalidData(_)));
    }
}
