use changeset_core::BumpType;
use indexmap::IndexMap;
use semver::Version;

/// A package bumped directly by at least one changeset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRelease {
    pub name: String,
    pub current_version: Version,
    pub new_version: Version,
    pub bump_type: BumpType,
}

/// A package bumped only because something it depends on is released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentRelease {
    pub name: String,
    pub current_version: Version,
    pub new_version: Version,
    pub bump_type: BumpType,
}

/// Outcome of merging pending changesets against the workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleasePlan {
    /// Direct releases, in first-appearance order across the changesets.
    pub releases: IndexMap<String, PlannedRelease>,
    /// Cascaded patch releases of dependents.
    pub dependents: Vec<DependentRelease>,
    /// Packages referenced by changesets but missing from the workspace.
    pub deleted_packages: Vec<String>,
}

impl ReleasePlan {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty() && self.dependents.is_empty() && self.deleted_packages.is_empty()
    }

    #[must_use]
    pub fn release_count(&self) -> usize {
        self.releases.len()
    }

    /// Whether `name` shows up in any of the three sections.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.releases.contains_key(name)
            || self.dependents.iter().any(|d| d.name == name)
            || self.deleted_packages.iter().any(|d| d == name)
    }
}
