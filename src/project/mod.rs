//! Derived read models for the UI
//!
//! The counters and highlights shown next to the visualization are never
//! stored on the steps themselves; they are re-derived here from the step
//! prefix on every render.  A full re-fold keeps backward navigation exact:
//! the counts at step N are identical whether N was reached by playing
//! forward or by jumping back from the end.

use crate::step::{MatchStepKind, Step};

/// Everything the renderer highlights at one step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Highlights {
    /// Array indices under the cursor (comparisons, swaps, merge ranges).
    pub indices: Vec<usize>,
    /// Array indices settled in their final position.
    pub sorted: Vec<usize>,
    /// Highlighted node ids.
    pub nodes: Vec<String>,
    /// Highlighted edge ids.
    pub edges: Vec<String>,
    /// The current start-to-end path, in order.
    pub path: Vec<String>,
}

/// Counters and highlights derived from a step prefix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Projection {
    pub comparisons: usize,
    pub swaps: usize,
    pub visits: usize,
    pub highlights: Highlights,
    pub description: String,
    pub sub_description: String,
}

/// Fold `steps[..=index]` into the state the UI shows at `index`.
///
/// `index` is clamped to the last step; an empty slice projects to the
/// default (all counters zero, nothing highlighted).
pub fn project(steps: &[Step], index: usize) -> Projection {
    let Some(last) = steps.len().checked_sub(1) else {
        return Projection::default();
    };
    let index = index.min(last);

    let mut projection = Projection::default();
    for step in &steps[..=index] {
        if step.counts_comparison() {
            projection.comparisons += 1;
        }
        if step.counts_swap() {
            projection.swaps += 1;
        }
        if step.counts_visit() {
            projection.visits += 1;
        }
    }

    let step = &steps[index];
    projection.description = step.description().to_string();
    projection.sub_description = step.sub_description().to_string();
    projection.highlights = highlights(step);
    projection
}

/// Highlights are taken from the current step alone; every step carries its
/// full state, so nothing needs to be accumulated across the prefix.
fn highlights(step: &Step) -> Highlights {
    let mut h = Highlights::default();
    match step {
        Step::Sort(s) => {
            h.indices.extend(&s.comparing);
            h.indices.extend(&s.swapping);
            h.indices.extend(&s.merging);
            if let Some(pivot) = s.pivot {
                h.indices.push(pivot);
            }
            h.sorted = s.sorted.clone();
        }
        Step::Search(s) => {
            if let Some(probe) = s.probe {
                h.indices.push(probe);
            }
            if let Some(found) = s.found {
                h.sorted.push(found);
            }
        }
        Step::Mst(s) => {
            h.edges = s.mst_edges.iter().map(|e| e.id.clone()).collect();
            if let Some(edge) = &s.current_edge {
                h.edges.push(edge.id.clone());
            }
            h.nodes = s.visited_nodes.clone();
        }
        Step::Path(s) => {
            h.nodes = s.visited_nodes.clone();
            if let Some(node) = &s.current_node {
                h.nodes.push(node.clone());
            }
            h.path = s.path.clone();
        }
        Step::Trace(s) => {
            if let Some(node) = &s.node {
                h.nodes.push(node.clone());
            }
            h.nodes.extend(s.nodes.iter().cloned());
            if let Some(edge) = &s.edge {
                h.edges.push(edge.clone());
            }
        }
        Step::Match(s) => {
            if matches!(s.kind, MatchStepKind::Compare) {
                h.indices.push(s.text_index);
            }
            h.sorted = s.matches.clone();
        }
    }
    h
}
