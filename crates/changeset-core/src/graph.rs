use indexmap::{IndexMap, IndexSet};

/// Internal dependency edges of a workspace: package name to the names of the
/// workspace packages it depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: IndexMap<String, IndexSet<String>>,
}

impl DependencyGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dependency(&mut self, dependent: impl Into<String>, dependency: impl Into<String>) {
        self.edges
            .entry(dependent.into())
            .or_default()
            .insert(dependency.into());
    }

    #[must_use]
    pub fn with_dependency(
        mut self,
        dependent: impl Into<String>,
        dependency: impl Into<String>,
    ) -> Self {
        self.add_dependency(dependent, dependency);
        self
    }

    pub fn dependencies_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(name)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.values().all(IndexSet::is_empty)
    }
}
