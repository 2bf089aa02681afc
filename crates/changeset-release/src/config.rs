use serde::Deserialize;

use crate::error::{ReleaseError, Result};

/// Options for rendering the release commit message.
///
/// Deserialization ignores unknown keys so newer manifests keep loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CommitOptions {
    /// Appends a `[skip ci]` footer to the message.
    pub skip_ci: bool,
}

#[derive(Deserialize, Default)]
struct Manifest {
    #[serde(default)]
    workspace: Option<MetadataHolder>,
}

#[derive(Deserialize, Default)]
struct MetadataHolder {
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Deserialize, Default)]
struct Metadata {
    #[serde(default)]
    changeset: Option<CommitOptions>,
}

impl CommitOptions {
    #[must_use]
    pub fn with_skip_ci(mut self, skip_ci: bool) -> Self {
        self.skip_ci = skip_ci;
        self
    }

    /// Reads options from the `[workspace.metadata.changeset]` table of a
    /// Cargo manifest, falling back to defaults when the table is absent.
    ///
    /// # Errors
    ///
    /// Returns `ReleaseError::Config` if the manifest is not valid TOML or a
    /// recognized key has the wrong type.
    pub fn from_metadata_toml(manifest: &str) -> Result<Self> {
        let manifest: Manifest = toml::from_str(manifest).map_err(ReleaseError::Config)?;

        Ok(manifest
            .workspace
            .and_then(|w| w.metadata)
            .and_then(|m| m.changeset)
            .unwrap_or_default())
    }
}
