use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangesetError {
    #[error("invalid bump type '{0}' (expected one of: patch, minor, major)")]
    InvalidBumpType(String),

    #[error("package '{package}' has invalid version '{version}'")]
    InvalidVersion {
        package: String,
        version: String,
        #[source]
        source: semver::Error,
    },
}

pub type Result<T> = std::result::Result<T, ChangesetError>;
