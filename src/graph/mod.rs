use std::collections::BTreeSet;

use crate::core::package::DependencyEdge;

pub mod builder;
pub mod depends;
pub mod viz;

pub use builder::build_graph;
pub use depends::parse_dependencies;
pub use viz::render_dot;

/// Edges reachable from `root` along the `Depends` relation.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub root: String,
    pub edges: BTreeSet<DependencyEdge>,
    /// Names in the order the traversal discovered them, `root` first.
    pub visited: Vec<String>,
}

impl DependencyGraph {
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn contains(&self, source: &str, target: &str) -> bool {
        self.edges.contains(&DependencyEdge::new(source, target))
    }

    pub fn nodes(&self) -> BTreeSet<&str> {
        self.edges
            .iter()
            .flat_map(|edge| [edge.source.as_str(), edge.target.as_str()])
            .collect()
    }
}
