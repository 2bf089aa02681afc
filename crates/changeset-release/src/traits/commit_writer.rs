#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub sha: String,
    pub message: String,
}

pub trait CommitWriter: Send + Sync {
    /// # Errors
    ///
    /// Returns an error if the commit cannot be created.
    fn commit(&self, message: &str) -> crate::Result<CommitInfo>;
}
