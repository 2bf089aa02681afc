use changeset_core::{BumpType, Changeset, DependencyGraph, Workspace};
use changeset_version::{VersionError, bump_version, merge_bump};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, trace};

use crate::types::{DependentRelease, PlannedRelease, ReleasePlan};

/// Resolves pending changesets into a release plan.
///
/// Resolution is pure: identical inputs always produce an identical plan.
pub struct ReleasePlanResolver;

impl ReleasePlanResolver {
    /// Plans releases without dependency information, so `dependents` stays empty.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::Overflow` if a package's version has no room for its bump.
    pub fn resolve(
        changesets: &[Changeset],
        workspace: &Workspace,
    ) -> Result<ReleasePlan, VersionError> {
        Self::resolve_with_dependencies(changesets, workspace, &DependencyGraph::new())
    }

    /// Plans releases and cascades patch bumps to every workspace package that
    /// depends, directly or transitively, on a released package.
    ///
    /// # Errors
    ///
    /// Returns `VersionError::Overflow` if a package's version has no room for its bump.
    pub fn resolve_with_dependencies(
        changesets: &[Changeset],
        workspace: &Workspace,
        graph: &DependencyGraph,
    ) -> Result<ReleasePlan, VersionError> {
        let (bumps, deleted_packages) = Self::aggregate_bumps(changesets, workspace);

        let mut releases = IndexMap::with_capacity(bumps.len());
        for (name, bump_type) in bumps {
            let Some(pkg) = workspace.get(&name) else {
                continue;
            };
            let new_version = bump_version(&pkg.version, bump_type)?;
            trace!(package = %name, from = %pkg.version, to = %new_version, bump = %bump_type, "planned release");
            releases.insert(
                name.clone(),
                PlannedRelease {
                    name,
                    current_version: pkg.version.clone(),
                    new_version,
                    bump_type,
                },
            );
        }

        let dependents = Self::cascade_dependents(&releases, workspace, graph)?;

        debug!(
            releases = releases.len(),
            dependents = dependents.len(),
            deleted = deleted_packages.len(),
            "resolved release plan"
        );

        Ok(ReleasePlan {
            releases,
            dependents,
            deleted_packages,
        })
    }

    /// Merges every requested bump per known package, keeping the most severe,
    /// and collects the names that are no longer in the workspace.
    ///
    /// Both outputs are ordered by first appearance across `changesets`.
    #[must_use]
    pub fn aggregate_bumps(
        changesets: &[Changeset],
        workspace: &Workspace,
    ) -> (IndexMap<String, BumpType>, Vec<String>) {
        let mut bumps: IndexMap<String, BumpType> = IndexMap::new();
        let mut deleted: IndexSet<String> = IndexSet::new();

        for changeset in changesets {
            for release in &changeset.releases {
                if workspace.contains(&release.name) {
                    let merged = merge_bump(bumps.get(&release.name).copied(), release.bump_type);
                    bumps.insert(release.name.clone(), merged);
                } else if deleted.insert(release.name.clone()) {
                    debug!(
                        package = %release.name,
                        changeset = %changeset.id,
                        "changeset references package missing from workspace"
                    );
                }
            }
        }

        (bumps, deleted.into_iter().collect())
    }

    fn cascade_dependents(
        releases: &IndexMap<String, PlannedRelease>,
        workspace: &Workspace,
        graph: &DependencyGraph,
    ) -> Result<Vec<DependentRelease>, VersionError> {
        if releases.is_empty() || graph.is_empty() {
            return Ok(Vec::new());
        }

        let mut bumped: IndexSet<&str> = releases.keys().map(String::as_str).collect();
        let mut dependents = Vec::new();

        loop {
            let discovered: Vec<_> = workspace
                .iter()
                .filter(|pkg| !bumped.contains(pkg.name.as_str()))
                .filter(|pkg| {
                    graph
                        .dependencies_of(&pkg.name)
                        .any(|dep| bumped.contains(dep))
                })
                .collect();

            if discovered.is_empty() {
                break;
            }

            for pkg in discovered {
                bumped.insert(pkg.name.as_str());
                let new_version = bump_version(&pkg.version, BumpType::Patch)?;
                trace!(package = %pkg.name, to = %new_version, "cascaded dependent release");
                dependents.push(DependentRelease {
                    name: pkg.name.clone(),
                    current_version: pkg.version.clone(),
                    new_version,
                    bump_type: BumpType::Patch,
                });
            }
        }

        Ok(dependents)
    }
}
