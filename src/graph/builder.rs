use std::collections::{HashSet, VecDeque};

use crate::core::package::{DependencyEdge, PackageIndex};
use crate::graph::depends::parse_dependencies;
use crate::graph::DependencyGraph;
use crate::observer::ProgressObserver;

/// Breadth-first walk of `Depends` starting at `root`.
///
/// Every dependency name becomes an edge target, whether or not the index
/// knows it; unknown names are leaves. Each name is queued at most once, so
/// cycles terminate.
pub fn build_graph(
    root: &str,
    index: &PackageIndex,
    observer: &dyn ProgressObserver,
) -> DependencyGraph {
    observer.build_started(root);

    let mut graph = DependencyGraph::new(root);
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    visited.insert(root.to_string());
    graph.visited.push(root.to_string());
    queue.push_back(root.to_string());

    while let Some(current) = queue.pop_front() {
        let Some(record) = index.get(&current) else {
            observer.package_missing(&current);
            continue;
        };
        for dep in parse_dependencies(record.depends()) {
            graph
                .edges
                .insert(DependencyEdge::new(current.clone(), dep.clone()));
            if visited.insert(dep.clone()) {
                graph.visited.push(dep.clone());
                queue.push_back(dep);
            }
        }
    }

    observer.build_finished(root, graph.len(), graph.visited.len());
    graph
}
