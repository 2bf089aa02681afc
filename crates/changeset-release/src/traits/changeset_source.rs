use changeset_core::Changeset;

use crate::Result;

pub trait ChangesetSource: Send + Sync {
    /// Returns the pending changesets in the order they should be merged.
    ///
    /// # Errors
    ///
    /// Returns an error if the changesets cannot be read or parsed.
    fn load_changesets(&self) -> Result<Vec<Changeset>>;
}
