use std::sync::{Arc, Mutex};

use changeset_core::{BumpType, Changeset, DependencyGraph, PackageRelease, Workspace};

use crate::traits::{ChangesetSource, CommitInfo, CommitWriter, WorkspaceSource};
use crate::{ReleaseError, Result};

/// # Panics
///
/// Panics if any version string is not valid semver.
#[must_use]
pub fn make_workspace(packages: &[(&str, &str)]) -> Workspace {
    Workspace::from_versions(packages.iter().copied()).expect("valid versions")
}

#[must_use]
pub fn make_changeset(id: &str, package_name: &str, bump: BumpType) -> Changeset {
    make_multi_changeset(id, &[(package_name, bump)])
}

#[must_use]
pub fn make_multi_changeset(id: &str, releases: &[(&str, BumpType)]) -> Changeset {
    Changeset {
        id: id.to_string(),
        summary: format!("Changeset {id}"),
        releases: releases
            .iter()
            .map(|(name, bump)| PackageRelease::new(*name, *bump))
            .collect(),
    }
}

pub struct MockChangesetSource {
    changesets: Vec<Changeset>,
    error: Option<String>,
}

impl MockChangesetSource {
    #[must_use]
    pub fn new(changesets: Vec<Changeset>) -> Self {
        Self {
            changesets,
            error: None,
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            changesets: Vec::new(),
            error: Some(message.to_string()),
        }
    }
}

impl ChangesetSource for MockChangesetSource {
    fn load_changesets(&self) -> Result<Vec<Changeset>> {
        match &self.error {
            Some(message) => Err(ReleaseError::ChangesetSource(message.clone())),
            None => Ok(self.changesets.clone()),
        }
    }
}

pub struct MockWorkspaceSource {
    packages: Vec<(String, String)>,
    graph: DependencyGraph,
    error: Option<String>,
}

impl MockWorkspaceSource {
    /// Versions are parsed when the workspace is loaded, so invalid ones
    /// surface as `ReleaseError::Core`.
    #[must_use]
    pub fn new(packages: &[(&str, &str)]) -> Self {
        Self {
            packages: packages
                .iter()
                .map(|(name, version)| ((*name).to_string(), (*version).to_string()))
                .collect(),
            graph: DependencyGraph::new(),
            error: None,
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            packages: Vec::new(),
            graph: DependencyGraph::new(),
            error: Some(message.to_string()),
        }
    }

    #[must_use]
    pub fn with_graph(mut self, graph: DependencyGraph) -> Self {
        self.graph = graph;
        self
    }
}

impl WorkspaceSource for MockWorkspaceSource {
    fn load_workspace(&self) -> Result<(Workspace, DependencyGraph)> {
        if let Some(message) = &self.error {
            return Err(ReleaseError::Workspace(message.clone()));
        }
        let workspace = Workspace::from_versions(
            self.packages
                .iter()
                .map(|(name, version)| (name.as_str(), version.as_str())),
        )?;
        Ok((workspace, self.graph.clone()))
    }
}

pub struct MockCommitWriter {
    messages: Mutex<Vec<String>>,
    error: Option<String>,
}

impl MockCommitWriter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            error: None,
        }
    }

    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            messages: Mutex::new(Vec::new()),
            error: Some(message.to_string()),
        }
    }

    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("lock poisoned").clone()
    }
}

impl Default for MockCommitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitWriter for MockCommitWriter {
    fn commit(&self, message: &str) -> Result<CommitInfo> {
        if let Some(error) = &self.error {
            return Err(ReleaseError::Commit(error.clone()));
        }
        self.messages
            .lock()
            .expect("lock poisoned")
            .push(message.to_string());
        Ok(CommitInfo {
            sha: "abc123def456".to_string(),
            message: message.to_string(),
        })
    }
}

impl CommitWriter for Arc<MockCommitWriter> {
    fn commit(&self, message: &str) -> Result<CommitInfo> {
        (**self).commit(message)
    }
}
