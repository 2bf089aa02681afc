mod commit;
mod config;
mod error;
pub mod operations;
mod planner;
pub mod traits;
mod types;

#[cfg(test)]
pub mod mocks;

pub use commit::render_release_commit;
pub use config::CommitOptions;
pub use error::{ReleaseError, Result};
pub use planner::ReleasePlanResolver;
pub use types::{DependentRelease, PlannedRelease, ReleasePlan};
