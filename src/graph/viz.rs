use crate::core::package::DependencyEdge;

pub const GRAPH_NAME: &str = "dependencies";

/// Renders edges as a Graphviz `digraph`, one `"a" -> "b";` line per edge.
///
/// Edges are sorted by (source, target) first, so the output depends only on
/// the set of edges and never on the order they were collected in.
pub fn render_dot<'a>(edges: impl IntoIterator<Item = &'a DependencyEdge>) -> String {
    let mut sorted: Vec<&DependencyEdge> = edges.into_iter().collect();
    sorted.sort();
    sorted.dedup();

    let mut out = format!("digraph {GRAPH_NAME} {{\n");
    for edge in sorted {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape_dot_id(&edge.source),
            escape_dot_id(&edge.target)
        ));
    }
    out.push_str("}\n");
    out
}

fn escape_dot_id(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
