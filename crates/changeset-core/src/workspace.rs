use indexmap::IndexMap;
use semver::Version;

use crate::error::{ChangesetError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePackage {
    pub name: String,
    pub version: Version,
}

impl WorkspacePackage {
    #[must_use]
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// Snapshot of the packages currently present in a workspace, keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Workspace {
    packages: IndexMap<String, WorkspacePackage>,
}

impl Workspace {
    /// Later packages with an already seen name replace the earlier entry.
    #[must_use]
    pub fn new(packages: impl IntoIterator<Item = WorkspacePackage>) -> Self {
        let packages = packages
            .into_iter()
            .map(|pkg| (pkg.name.clone(), pkg))
            .collect();
        Self { packages }
    }

    /// Builds a workspace from raw `(name, version)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ChangesetError::InvalidVersion` if any version is not valid semver.
    pub fn from_versions<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let packages = entries
            .into_iter()
            .map(|(name, version)| {
                let parsed =
                    Version::parse(version).map_err(|source| ChangesetError::InvalidVersion {
                        package: name.to_string(),
                        version: version.to_string(),
                        source,
                    })?;
                Ok::<_, ChangesetError>(WorkspacePackage::new(name, parsed))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(packages))
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WorkspacePackage> {
        self.packages.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.packages.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkspacePackage> {
        self.packages.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.packages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
