//! Narrative steps for the traversal runners (DFS, BFS, topological sort,
//! SCC, cycle detection)

/// Render state attached to a node or edge by a trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceState {
    Visited,
    Processing,
    Finished,
    /// Member of a reported strongly connected component.
    Scc,
    /// Edge currently being followed.
    Active,
    /// Tree edge in the DFS/BFS forest.
    Tree,
    /// Back edge (cycle detection).
    Back,
}

/// One narrative step of a traversal.
///
/// These are primarily human-readable commentary; `node`/`edge`/`nodes` carry
/// just enough state for the renderer to color the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceStep {
    pub description: String,
    pub details: String,
    pub node: Option<String>,
    pub edge: Option<String>,
    /// Group highlight: an entire SCC or a detected cycle.
    pub nodes: Vec<String>,
    pub state: Option<TraceState>,
}

impl TraceStep {
    pub fn info(description: impl Into<String>, details: impl Into<String>) -> Self {
        TraceStep {
            description: description.into(),
            details: details.into(),
            node: None,
            edge: None,
            nodes: Vec::new(),
            state: None,
        }
    }

    pub fn node(description: impl Into<String>, node: impl Into<String>, state: TraceState) -> Self {
        TraceStep {
            description: description.into(),
            details: String::new(),
            node: Some(node.into()),
            edge: None,
            nodes: Vec::new(),
            state: Some(state),
        }
    }

    pub fn edge(description: impl Into<String>, edge: impl Into<String>, state: TraceState) -> Self {
        TraceStep {
            description: description.into(),
            details: String::new(),
            node: None,
            edge: Some(edge.into()),
            nodes: Vec::new(),
            state: Some(state),
        }
    }

    pub fn group(
        description: impl Into<String>,
        nodes: Vec<String>,
        state: TraceState,
    ) -> Self {
        TraceStep {
            description: description.into(),
            details: String::new(),
            node: None,
            edge: None,
            nodes,
            state: Some(state),
        }
    }
}
