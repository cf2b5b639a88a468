//! Graphviz DOT output for a [`Graph`].

use crate::graph::{Cluster, Graph};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Quotes a DOT identifier or label
fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => {}
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

impl Cluster {
    /// Caption shown on the cluster border, e.g. `"300 level"`
    pub fn title(&self) -> String {
        format!("{}00 level", self.rank)
    }
}

impl Display for Cluster {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "    subgraph {} {{", quote(&format!("cluster_{}", self.rank)))?;
        writeln!(f, "        label={};", quote(&self.title()))?;
        for node in &self.nodes {
            writeln!(f, "        {} [label={}];", quote(&node.id), quote(&node.label))?;
        }
        writeln!(f, "    }}")
    }
}

/// Renders a `digraph` with one cluster per rank; prerequisites are laid out
/// above the courses that need them
impl Display for Graph {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(f, "digraph prerequisites {{")?;
        writeln!(f, "    rankdir=BT;")?;
        writeln!(f, "    node [shape=box];")?;

        for cluster in &self.clusters {
            writeln!(f)?;
            write!(f, "{cluster}")?;
        }

        if !self.edges.is_empty() {
            writeln!(f)?;
        }
        for edge in &self.edges {
            writeln!(f, "    {} -> {};", quote(&edge.from), quote(&edge.to))?;
        }

        writeln!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node};

    #[test]
    fn test_quote() {
        assert_eq!(quote("CSE 142"), "\"CSE 142\"");
        assert_eq!(quote("a \"b\"\nc\\d"), "\"a \\\"b\\\"\\nc\\\\d\"");
    }

    #[test]
    fn test_render() {
        let graph = Graph {
            clusters: vec![
                Cluster {
                    rank: 1,
                    nodes: vec![Node {
                        id: "CSE 142".to_string(),
                        label: "CSE 142 Computer Programming I".to_string(),
                    }],
                },
                Cluster {
                    rank: 3,
                    nodes: vec![Node {
                        id: "CSE 311".to_string(),
                        label: "CSE 311 Foundations of Computing I\nPrerequisite: CSE 142".to_string(),
                    }],
                },
            ],
            edges: vec![Edge {
                from: "CSE 311".to_string(),
                to: "CSE 142".to_string(),
            }],
        };

        let expected = r#"digraph prerequisites {
    rankdir=BT;
    node [shape=box];

    subgraph "cluster_1" {
        label="100 level";
        "CSE 142" [label="CSE 142 Computer Programming I"];
    }

    subgraph "cluster_3" {
        label="300 level";
        "CSE 311" [label="CSE 311 Foundations of Computing I\nPrerequisite: CSE 142"];
    }

    "CSE 311" -> "CSE 142";
}
"#;
        assert_eq!(graph.to_string(), expected);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(
            Graph::default().to_string(),
            "digraph prerequisites {\n    rankdir=BT;\n    node [shape=box];\n}\n"
        );
    }
}
