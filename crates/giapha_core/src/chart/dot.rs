//! Graphviz DOT emission for the chart handoff.
//!
//! # Responsibility
//! - Serialize [`ChartData`] into a DOT digraph for external layout.
//! - Keep graph attributes configurable with traditional top-to-bottom
//!   defaults.
//!
//! # Invariants
//! - Output is deterministic: nodes and edges are emitted in payload order.
//! - Labels and keys are escaped; emitted DOT is always well-formed.

use crate::chart::ChartData;

/// Graph-level attributes for DOT emission.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphOptions {
    /// Layer direction, top-to-bottom by default.
    pub rankdir: String,
    /// Edge routing; orthogonal matches the traditional chart look.
    pub splines: String,
    /// Horizontal separation between sibling nodes, in inches.
    pub nodesep: f64,
    /// Vertical separation between layers, in inches.
    pub ranksep: f64,
    /// Label font family.
    pub fontname: String,
    /// Label font size in points.
    pub fontsize: u32,
    /// Edge stroke color.
    pub edge_color: String,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            rankdir: "TB".to_string(),
            splines: "ortho".to_string(),
            nodesep: 0.5,
            ranksep: 0.8,
            fontname: "Arial".to_string(),
            fontsize: 13,
            edge_color: "#444444".to_string(),
        }
    }
}

/// Renders the chart handoff as a Graphviz DOT digraph.
pub fn to_dot(chart: &ChartData, options: &GraphOptions) -> String {
    let mut out = String::new();
    out.push_str("digraph giapha {\n");
    out.push_str(&format!(
        "    graph [rankdir={}, splines={}, nodesep={}, ranksep={}];\n",
        escape(&options.rankdir),
        escape(&options.splines),
        options.nodesep,
        options.ranksep
    ));
    out.push_str(&format!(
        "    node [shape=box, style=\"filled,rounded\", fontname=\"{}\", fontsize={}, penwidth=1.5];\n",
        escape(&options.fontname),
        options.fontsize
    ));
    out.push_str(&format!(
        "    edge [color=\"{}\", arrowsize=0.6, penwidth=1.2];\n",
        escape(&options.edge_color)
    ));

    for node in &chart.nodes {
        out.push_str(&format!(
            "    \"{}\" [label=\"{}\", fillcolor=\"{}\", fontcolor=\"{}\", color=\"{}\"];\n",
            escape(&node.key),
            escape(&node.label),
            escape(&node.style.fill),
            escape(&node.style.font_color),
            escape(&node.style.border_color)
        ));
    }

    for edge in &chart.edges {
        out.push_str(&format!(
            "    \"{}\" -> \"{}\";\n",
            escape(&edge.from_key),
            escape(&edge.to_key)
        ));
    }

    out.push_str("}\n");
    out
}

fn escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::{escape, to_dot, GraphOptions};
    use crate::chart::{ChartData, ChartEdge, ChartNode};
    use crate::style::Style;

    #[test]
    fn escape_handles_quotes_backslashes_and_newlines() {
        assert_eq!(escape(r#"a"b"#), r#"a\"b"#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("a\nb"), r"a\nb");
    }

    #[test]
    fn emits_nodes_edges_and_graph_attributes() {
        let chart = ChartData {
            nodes: vec![ChartNode {
                key: "1".to_string(),
                label: "Le To\nĐời thứ 1".to_string(),
                style: Style::new("#FFD700", "black", "#B8860B"),
                nav_target: Some(1),
            }],
            edges: vec![ChartEdge {
                from_key: "1".to_string(),
                to_key: "2".to_string(),
            }],
        };

        let dot = to_dot(&chart, &GraphOptions::default());
        assert!(dot.starts_with("digraph giapha {"));
        assert!(dot.contains("rankdir=TB"));
        assert!(dot.contains("splines=ortho"));
        assert!(dot.contains(r#""1" [label="Le To\nĐời thứ 1""#));
        assert!(dot.contains(r##"fillcolor="#FFD700""##));
        assert!(dot.contains(r#""1" -> "2";"#));
        assert!(dot.ends_with("}\n"));
    }
}
