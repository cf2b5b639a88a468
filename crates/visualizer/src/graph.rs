use models::{catalog::Catalog, course::Course};
use std::collections::{BTreeMap, HashSet};

/// Highest rank drawn unless a lower ceiling is requested
pub const DEFAULT_MAX_RANK: u8 = 8;

/// A course box in the drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Course number, unique per drawing
    pub id: String,
    /// `"<number> <name>"`, followed by the prerequisite statement on its own line
    pub label: String,
}

/// All courses of one rank, drawn as one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub rank: u8,
    /// Nodes in extraction order
    pub nodes: Vec<Node>,
}

/// A course pointing at one of its prerequisites
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

/// Everything the renderer needs to draw a catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Clusters by ascending rank
    pub clusters: Vec<Cluster>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.clusters.iter().map(|cluster| cluster.nodes.len()).sum()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.clusters.iter().flat_map(|cluster| cluster.nodes.iter())
    }
}

fn node_for(course: &Course) -> Node {
    let mut label = format!("{} {}", course.number(), course.name());
    if let Some(text) = course.prerequisite_text() {
        label.push('\n');
        label.push_str(text);
    }

    Node {
        id: course.number().to_string(),
        label,
    }
}

/// Builds the drawing of a catalog, limited to courses up to `max_rank`
///
/// An edge is kept only when both of its courses are drawn, and each
/// (course, prerequisite) pair is drawn once.
///
/// # Arguments
/// * `catalog` - The linked courses
/// * `max_rank` - Highest rank to include, see [`DEFAULT_MAX_RANK`]
///
/// # Returns
/// The [`Graph`] with one cluster per remaining rank
pub fn build(catalog: &Catalog, max_rank: u8) -> Graph {
    let included = |course: &Course| course.rank() <= max_rank;

    let mut clusters: BTreeMap<u8, Vec<Node>> = BTreeMap::new();
    for linked in catalog.courses().iter().filter(|l| included(&l.course)) {
        clusters
            .entry(linked.course.rank())
            .or_default()
            .push(node_for(&linked.course));
    }

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for (index, linked) in catalog.courses().iter().enumerate() {
        if !included(&linked.course) {
            continue;
        }

        for prerequisite in catalog.prerequisites_of(index) {
            if !included(&prerequisite.course) {
                continue;
            }

            let edge = Edge {
                from: linked.course.number().to_string(),
                to: prerequisite.course.number().to_string(),
            };
            if seen.insert(edge.clone()) {
                edges.push(edge);
            }
        }
    }

    Graph {
        clusters: clusters
            .into_iter()
            .map(|(rank, nodes)| Cluster { rank, nodes })
            .collect(),
        edges,
    }
}
