use changeset_core::BumpType;
use semver::{BuildMetadata, Prerelease, Version};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionError {
    #[error("cannot apply a {bump_type} bump to version {version}: component overflow")]
    Overflow {
        version: Version,
        bump_type: BumpType,
    },
}

/// Applies the standard increment rules. `0.x` versions get no special treatment.
///
/// # Errors
///
/// Returns `VersionError::Overflow` if the incremented component is already `u64::MAX`.
pub fn bump_version(version: &Version, bump_type: BumpType) -> Result<Version, VersionError> {
    let overflow = || VersionError::Overflow {
        version: version.clone(),
        bump_type,
    };

    let mut new_version = version.clone();
    new_version.pre = Prerelease::EMPTY;
    new_version.build = BuildMetadata::EMPTY;

    match bump_type {
        BumpType::Major => {
            new_version.major = version.major.checked_add(1).ok_or_else(overflow)?;
            new_version.minor = 0;
            new_version.patch = 0;
        }
        BumpType::Minor => {
            new_version.minor = version.minor.checked_add(1).ok_or_else(overflow)?;
            new_version.patch = 0;
        }
        BumpType::Patch => {
            new_version.patch = version.patch.checked_add(1).ok_or_else(overflow)?;
        }
    }

    Ok(new_version)
}

/// Keeps `current` unless `candidate` is strictly more severe.
#[must_use]
pub fn merge_bump(current: Option<BumpType>, candidate: BumpType) -> BumpType {
    match current {
        Some(existing) if existing >= candidate => existing,
        _ => candidate,
    }
}
