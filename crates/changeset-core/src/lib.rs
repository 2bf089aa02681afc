pub mod error;
mod graph;
pub mod types;
mod workspace;

pub use error::*;
pub use graph::DependencyGraph;
pub use types::*;
pub use workspace::{Workspace, WorkspacePackage};
