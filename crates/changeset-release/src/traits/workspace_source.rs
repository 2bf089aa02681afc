use changeset_core::{DependencyGraph, Workspace};

use crate::Result;

pub trait WorkspaceSource: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the workspace cannot be discovered.
    fn load_workspace(&self) -> Result<(Workspace, DependencyGraph)>;
}
