mod changeset_source;
mod commit_writer;
mod workspace_source;

pub use changeset_source::ChangesetSource;
pub use commit_writer::{CommitInfo, CommitWriter};
pub use workspace_source::WorkspaceSource;
