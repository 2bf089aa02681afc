mod release_commit;

pub use release_commit::{ReleaseCommitInput, ReleaseCommitOperation, ReleaseCommitOutcome};
