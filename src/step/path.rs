//! Steps emitted by the shortest-path runners (Dijkstra, A*)

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStepKind {
    Initial,
    /// Selected the next node to relax.
    Explore,
    /// Finished relaxing a node's neighbors.
    Visit,
    /// Path reconstruction outcome (possibly "no path").
    Path,
    Complete,
}

/// One snapshot of shortest-path progress.
///
/// Carries the full tentative-distance and predecessor tables so that any
/// step can be rendered without replaying the prefix.
#[derive(Debug, Clone, PartialEq)]
pub struct PathStep {
    pub kind: PathStepKind,
    pub current_node: Option<String>,
    pub visited_nodes: Vec<String>,
    pub frontier_nodes: Vec<String>,
    /// Tentative distance per node id; unreached nodes are `f64::INFINITY`.
    pub distances: FxHashMap<String, f64>,
    pub previous: FxHashMap<String, Option<String>>,
    /// The reconstructed start-to-end path; empty until the `Path` step, and
    /// empty on the `Path` step itself when the end node is unreachable.
    pub path: Vec<String>,
    pub description: String,
    pub sub_description: String,
}

impl PathStep {
    pub fn new(kind: PathStepKind) -> Self {
        PathStep {
            kind,
            current_node: None,
            visited_nodes: Vec::new(),
            frontier_nodes: Vec::new(),
            distances: FxHashMap::default(),
            previous: FxHashMap::default(),
            path: Vec::new(),
            description: String::new(),
            sub_description: String::new(),
        }
    }
}
