//! Graph data for the MST, pathfinding, and traversal visualizations

use std::fmt;

use rustc_hash::{FxHashMap, FxHashSet};

/// A graph node with canvas coordinates.
///
/// Coordinates matter to A* (Euclidean heuristic) and to the renderer; every
/// other algorithm ignores them.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// A weighted edge between two node ids.
///
/// MST algorithms treat an edge as undirected regardless of `from`/`to`
/// order; the traversal algorithms follow it as directed.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl Edge {
    /// The endpoint opposite `node`, if `node` is an endpoint at all.
    pub fn other(&self, node: &str) -> Option<&str> {
        if self.from == node {
            Some(&self.to)
        } else if self.to == node {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Whether the edge touches `node` on either end.
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }
}

/// Validation failures for a user-supplied graph
#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    MissingEndpoint { edge: String, node: String },
    DuplicateEdgeId { id: String },
    SelfLoop { edge: String },
    NonPositiveWeight { edge: String, weight: f64 },
    DuplicatePair { first: String, second: String },
    UnknownNode { node: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::MissingEndpoint { edge, node } => {
                write!(f, "edge '{}' references unknown node '{}'", edge, node)
            }
            GraphError::DuplicateEdgeId { id } => {
                write!(f, "duplicate edge id '{}'", id)
            }
            GraphError::SelfLoop { edge } => {
                write!(f, "edge '{}' is a self-loop", edge)
            }
            GraphError::NonPositiveWeight { edge, weight } => {
                write!(f, "edge '{}' has non-positive weight {}", edge, weight)
            }
            GraphError::DuplicatePair { first, second } => {
                write!(f, "edges '{}' and '{}' connect the same pair", first, second)
            }
            GraphError::UnknownNode { node } => {
                write!(f, "unknown node '{}'", node)
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// A small in-memory graph: the input to every graph runner.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphData {
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    /// Edges incident to `node`, in insertion order.
    pub fn incident<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(node))
    }

    /// Edges leaving `node` when the graph is read as directed.
    pub fn outgoing<'a>(&'a self, node: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.from == node)
    }

    /// Reject malformed graphs before any runner sees them.
    ///
    /// Checks endpoint existence, edge-id uniqueness, self-loops, and
    /// positive weights.  Reciprocal edges (A→B alongside B→A) are legal
    /// here: directed algorithms depend on them.  Undirected consumers add
    /// [`GraphData::validate_undirected`] on top.
    pub fn validate(&self) -> Result<(), GraphError> {
        let node_ids: FxHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        let mut edge_ids: FxHashSet<&str> = FxHashSet::default();

        for edge in &self.edges {
            for endpoint in [&edge.from, &edge.to] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(GraphError::MissingEndpoint {
                        edge: edge.id.clone(),
                        node: endpoint.clone(),
                    });
                }
            }
            if !edge_ids.insert(edge.id.as_str()) {
                return Err(GraphError::DuplicateEdgeId {
                    id: edge.id.clone(),
                });
            }
            if edge.from == edge.to {
                return Err(GraphError::SelfLoop {
                    edge: edge.id.clone(),
                });
            }
            if edge.weight <= 0.0 {
                return Err(GraphError::NonPositiveWeight {
                    edge: edge.id.clone(),
                    weight: edge.weight,
                });
            }
        }
        Ok(())
    }

    /// [`GraphData::validate`] plus rejection of duplicate undirected pairs,
    /// for algorithms that read every edge as undirected (MST).
    pub fn validate_undirected(&self) -> Result<(), GraphError> {
        self.validate()?;
        let mut pairs: FxHashMap<(String, String), &str> = FxHashMap::default();
        for edge in &self.edges {
            let key = if edge.from <= edge.to {
                (edge.from.clone(), edge.to.clone())
            } else {
                (edge.to.clone(), edge.from.clone())
            };
            if let Some(first) = pairs.insert(key, edge.id.as_str()) {
                return Err(GraphError::DuplicatePair {
                    first: first.to_string(),
                    second: edge.id.clone(),
                });
            }
        }
        Ok(())
    }
}
