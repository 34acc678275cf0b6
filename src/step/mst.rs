//! Steps emitted by the MST runners (Kruskal, Reverse-Delete, Borůvka, Prim)

use crate::model::Edge;

/// Phase of an MST step.
///
/// Each considered edge produces a `Check` step (pre-decision), a `Decision`
/// step (accept/reject), and a `Summary` step (running totals), bracketed by
/// one `Initial` and one `Complete` step per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MstStepKind {
    Initial,
    Check,
    Decision,
    Summary,
    Complete,
}

/// One snapshot of MST construction.  All containers are owned copies.
#[derive(Debug, Clone, PartialEq)]
pub struct MstStep {
    pub kind: MstStepKind,
    /// Edges accepted into the tree so far.
    pub mst_edges: Vec<Edge>,
    /// The edge under consideration, if any.
    pub current_edge: Option<Edge>,
    /// Decision outcome for `current_edge` (Decision steps only).
    pub accepted: Option<bool>,
    pub rejected_edges: Vec<Edge>,
    /// Candidate edges crossing the visited frontier (Prim, Borůvka).
    pub frontier_edges: Vec<Edge>,
    /// Node ids touched by the tree so far.
    pub visited_nodes: Vec<String>,
    pub description: String,
    pub sub_description: String,
}

impl MstStep {
    pub fn new(kind: MstStepKind) -> Self {
        MstStep {
            kind,
            mst_edges: Vec::new(),
            current_edge: None,
            accepted: None,
            rejected_edges: Vec::new(),
            frontier_edges: Vec::new(),
            visited_nodes: Vec::new(),
            description: String::new(),
            sub_description: String::new(),
        }
    }

    /// Total weight of the accepted edges.
    pub fn total_weight(&self) -> f64 {
        self.mst_edges.iter().map(|e| e.weight).sum()
    }
}
