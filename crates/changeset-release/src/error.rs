use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error(transparent)]
    Core(#[from] changeset_core::ChangesetError),

    #[error("version calculation failed")]
    Version(#[from] changeset_version::VersionError),

    #[error("invalid changeset configuration")]
    Config(#[source] toml::de::Error),

    #[error("failed to load changesets: {0}")]
    ChangesetSource(String),

    #[error("failed to load workspace: {0}")]
    Workspace(String),

    #[error("failed to create release commit: {0}")]
    Commit(String),
}

pub type Result<T> = std::result::Result<T, ReleaseError>;
