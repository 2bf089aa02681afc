use tracing::{debug, info};

use crate::Result;
use crate::commit::render_release_commit;
use crate::config::CommitOptions;
use crate::planner::ReleasePlanResolver;
use crate::traits::{ChangesetSource, CommitInfo, CommitWriter, WorkspaceSource};
use crate::types::ReleasePlan;

#[derive(Debug, Clone, Default)]
pub struct ReleaseCommitInput {
    pub dry_run: bool,
    pub options: CommitOptions,
}

#[derive(Debug)]
pub enum ReleaseCommitOutcome {
    NoChangesets,
    DryRun {
        plan: ReleasePlan,
        message: String,
    },
    Committed {
        plan: ReleasePlan,
        message: String,
        commit: CommitInfo,
    },
}

/// Loads pending changesets and the workspace, resolves the release plan and
/// records it as a release commit.
pub struct ReleaseCommitOperation<S, W, C> {
    changeset_source: S,
    workspace_source: W,
    commit_writer: C,
}

impl<S, W, C> ReleaseCommitOperation<S, W, C>
where
    S: ChangesetSource,
    W: WorkspaceSource,
    C: CommitWriter,
{
    pub fn new(changeset_source: S, workspace_source: W, commit_writer: C) -> Self {
        Self {
            changeset_source,
            workspace_source,
            commit_writer,
        }
    }

    /// # Errors
    ///
    /// Returns an error if loading changesets or the workspace fails, if a
    /// version cannot be bumped, or if the commit cannot be created.
    pub fn execute(&self, input: &ReleaseCommitInput) -> Result<ReleaseCommitOutcome> {
        let changesets = self.changeset_source.load_changesets()?;
        if changesets.is_empty() {
            info!("no pending changesets");
            return Ok(ReleaseCommitOutcome::NoChangesets);
        }

        let (workspace, graph) = self.workspace_source.load_workspace()?;
        debug!(
            changesets = changesets.len(),
            packages = workspace.len(),
            "resolving release plan"
        );

        let plan = ReleasePlanResolver::resolve_with_dependencies(&changesets, &workspace, &graph)?;
        let message = render_release_commit(&plan, &input.options);

        if input.dry_run {
            return Ok(ReleaseCommitOutcome::DryRun { plan, message });
        }

        let commit = self.commit_writer.commit(&message)?;
        info!(sha = %commit.sha, releases = plan.release_count(), "created release commit");

        Ok(ReleaseCommitOutcome::Committed {
            plan,
            message,
            commit,
        })
    }
}
