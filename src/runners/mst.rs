//! Minimum-spanning-tree runners: Kruskal, Reverse-Delete, Borůvka, Prim
//!
//! Every considered edge produces a Check step (pre-decision), a Decision
//! step (accept/reject), and a Summary step (running totals).  Disconnected
//! graphs terminate with an explanatory step instead of an error.

use crate::model::{Edge, GraphData, UnionFind};
use crate::step::{MstStep, MstStepKind, Step};

/// Endpoints touched by the accepted edges, deduplicated in first-seen order.
fn tree_nodes(mst_edges: &[Edge]) -> Vec<String> {
    let mut nodes: Vec<String> = Vec::new();
    for edge in mst_edges {
        for id in [&edge.from, &edge.to] {
            if !nodes.iter().any(|n| n == id) {
                nodes.push(id.clone());
            }
        }
    }
    nodes
}

fn total_weight(edges: &[Edge]) -> f64 {
    edges.iter().map(|e| e.weight).sum()
}

/// Single-step run for graphs with nothing to do.
fn trivial_run(graph: &GraphData) -> Option<Vec<Step>> {
    if graph.nodes.len() > 1 && !graph.edges.is_empty() {
        return None;
    }
    let mut step = MstStep::new(MstStepKind::Complete);
    step.description = if graph.nodes.is_empty() {
        "The graph is empty; there is no tree to build".to_string()
    } else if graph.nodes.len() == 1 {
        "A single node is already a spanning tree".to_string()
    } else {
        "The graph has no edges, so no tree can be built".to_string()
    };
    Some(vec![Step::Mst(step)])
}

/// Kruskal's algorithm: consider edges in ascending weight order, accepting
/// an edge unless it closes a cycle.  Equal weights keep their original
/// order (`sort_by` is stable).
pub fn kruskal(graph: &GraphData) -> Vec<Step> {
    if let Some(steps) = trivial_run(graph) {
        return steps;
    }
    let mut steps = Vec::new();

    let mut sorted_edges = graph.edges.clone();
    sorted_edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut mst_edges: Vec<Edge> = Vec::new();
    let mut rejected: Vec<Edge> = Vec::new();
    let mut uf = UnionFind::new(graph.node_ids());

    let mut step = MstStep::new(MstStepKind::Initial);
    step.description = "All edges are sorted by weight (lightest to heaviest)".to_string();
    step.sub_description = "Start with the smallest unchecked edge".to_string();
    steps.push(Step::Mst(step));

    for edge in &sorted_edges {
        let mut step = MstStep::new(MstStepKind::Check);
        step.mst_edges = mst_edges.clone();
        step.current_edge = Some(edge.clone());
        step.rejected_edges = rejected.clone();
        step.visited_nodes = tree_nodes(&mst_edges);
        step.description = format!("Edge {}-{} (weight {})", edge.from, edge.to, edge.weight);
        step.sub_description = "Checking if this edge would create a cycle".to_string();
        steps.push(Step::Mst(step));

        let accepted = uf.union(&edge.from, &edge.to);
        if accepted {
            mst_edges.push(edge.clone());
        } else {
            rejected.push(edge.clone());
        }

        let mut step = MstStep::new(MstStepKind::Decision);
        step.mst_edges = mst_edges.clone();
        step.current_edge = Some(edge.clone());
        step.accepted = Some(accepted);
        step.rejected_edges = rejected.clone();
        step.visited_nodes = tree_nodes(&mst_edges);
        if accepted {
            step.description = "Doesn't create a cycle".to_string();
            step.sub_description = format!("Edge {}-{} added to the tree", edge.from, edge.to);
        } else {
            step.description = format!("Edge {}-{} would create a cycle", edge.from, edge.to);
            step.sub_description = "Rejected edge".to_string();
        }
        steps.push(Step::Mst(step));

        let mut step = MstStep::new(MstStepKind::Summary);
        step.mst_edges = mst_edges.clone();
        step.rejected_edges = rejected.clone();
        step.visited_nodes = tree_nodes(&mst_edges);
        step.description = format!(
            "Progress: {} edges | Total weight: {}",
            mst_edges.len(),
            total_weight(&mst_edges)
        );
        step.sub_description = format!("Rejected edges: {}", rejected.len());
        steps.push(Step::Mst(step));
    }

    push_complete(&mut steps, &mst_edges, &rejected, graph);
    steps
}

/// Reverse-Delete: consider edges in descending weight order, deleting an
/// edge whenever the graph stays as connected as it started.
pub fn reverse_delete(graph: &GraphData) -> Vec<Step> {
    if let Some(steps) = trivial_run(graph) {
        return steps;
    }
    let mut steps = Vec::new();

    let mut sorted_edges = graph.edges.clone();
    sorted_edges.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    // Baseline connectivity; disconnected inputs are allowed and preserved.
    let base_components = component_count(graph, &graph.edges);

    let mut kept: Vec<Edge> = graph.edges.clone();
    let mut removed: Vec<Edge> = Vec::new();

    let mut step = MstStep::new(MstStepKind::Initial);
    step.mst_edges = kept.clone();
    step.visited_nodes = graph.node_ids();
    step.description = "Start with every edge, sorted heaviest first".to_string();
    step.sub_description = "Delete an edge whenever the graph stays connected".to_string();
    steps.push(Step::Mst(step));

    for edge in &sorted_edges {
        let mut step = MstStep::new(MstStepKind::Check);
        step.mst_edges = kept.clone();
        step.current_edge = Some(edge.clone());
        step.rejected_edges = removed.clone();
        step.visited_nodes = graph.node_ids();
        step.description = format!("Edge {}-{} (weight {})", edge.from, edge.to, edge.weight);
        step.sub_description = "Would removing this edge disconnect the graph?".to_string();
        steps.push(Step::Mst(step));

        let without: Vec<Edge> = kept.iter().filter(|e| e.id != edge.id).cloned().collect();
        let still_connected = component_count(graph, &without) == base_components;

        let mut step = MstStep::new(MstStepKind::Decision);
        step.current_edge = Some(edge.clone());
        if still_connected {
            kept.retain(|e| e.id != edge.id);
            removed.push(edge.clone());
            step.accepted = Some(false);
            step.description = format!("Removed edge {}-{}", edge.from, edge.to);
            step.sub_description = "The graph stays connected without it".to_string();
        } else {
            step.accepted = Some(true);
            step.description = format!("Edge {}-{} must stay", edge.from, edge.to);
            step.sub_description = "Removing it would disconnect the graph".to_string();
        }
        step.mst_edges = kept.clone();
        step.rejected_edges = removed.clone();
        step.visited_nodes = graph.node_ids();
        steps.push(Step::Mst(step));

        let mut step = MstStep::new(MstStepKind::Summary);
        step.mst_edges = kept.clone();
        step.rejected_edges = removed.clone();
        step.visited_nodes = graph.node_ids();
        step.description = format!(
            "Progress: {} edges remain | Total weight: {}",
            kept.len(),
            total_weight(&kept)
        );
        step.sub_description = format!("Removed edges: {}", removed.len());
        steps.push(Step::Mst(step));
    }

    push_complete(&mut steps, &kept, &removed, graph);
    steps
}

/// Borůvka's algorithm: every round, each component picks its cheapest
/// outgoing edge (first found wins on ties), and all picks are merged.
pub fn boruvka(graph: &GraphData) -> Vec<Step> {
    if let Some(steps) = trivial_run(graph) {
        return steps;
    }
    let mut steps = Vec::new();

    let mut uf = UnionFind::new(graph.node_ids());
    let mut mst_edges: Vec<Edge> = Vec::new();
    let mut round = 0usize;

    let mut step = MstStep::new(MstStepKind::Initial);
    step.description = "Every node starts as its own component".to_string();
    step.sub_description = "Each round, every component grabs its cheapest outgoing edge".to_string();
    steps.push(Step::Mst(step));

    while uf.component_count() > 1 {
        round += 1;

        // Cheapest outgoing edge per component root; linear scan with `<`,
        // so the first-found edge wins on equal weights.
        let mut cheapest: Vec<(String, Edge)> = Vec::new();
        for edge in &graph.edges {
            let root_from = uf.find(&edge.from);
            let root_to = uf.find(&edge.to);
            if root_from == root_to {
                continue;
            }
            for root in [&root_from, &root_to] {
                match cheapest.iter_mut().find(|(r, _)| r.as_str() == root.as_str()) {
                    Some((_, best)) => {
                        if edge.weight < best.weight {
                            *best = edge.clone();
                        }
                    }
                    None => cheapest.push(((*root).clone(), edge.clone())),
                }
            }
        }

        let mut step = MstStep::new(MstStepKind::Check);
        step.mst_edges = mst_edges.clone();
        step.frontier_edges = cheapest.iter().map(|(_, e)| e.clone()).collect();
        step.visited_nodes = tree_nodes(&mst_edges);
        step.description = format!(
            "Round {}: {} components picked their cheapest outgoing edges",
            round,
            uf.component_count()
        );
        step.sub_description = "Distinct picks are merged into the tree".to_string();
        steps.push(Step::Mst(step));

        if cheapest.is_empty() {
            let mut step = MstStep::new(MstStepKind::Decision);
            step.mst_edges = mst_edges.clone();
            step.visited_nodes = tree_nodes(&mst_edges);
            step.description = "No component has an outgoing edge".to_string();
            step.sub_description =
                "The graph is disconnected; a complete spanning tree cannot be formed".to_string();
            steps.push(Step::Mst(step));
            break;
        }

        for (_, edge) in &cheapest {
            // Two components may pick the same edge; only the first union counts.
            if mst_edges.iter().any(|e| e.id == edge.id) {
                continue;
            }
            let accepted = uf.union(&edge.from, &edge.to);
            if !accepted {
                continue;
            }
            mst_edges.push(edge.clone());

            let mut step = MstStep::new(MstStepKind::Decision);
            step.mst_edges = mst_edges.clone();
            step.current_edge = Some(edge.clone());
            step.accepted = Some(true);
            step.visited_nodes = tree_nodes(&mst_edges);
            step.description = format!(
                "Edge {}-{} (weight {}) merges two components",
                edge.from, edge.to, edge.weight
            );
            steps.push(Step::Mst(step));
        }

        let mut step = MstStep::new(MstStepKind::Summary);
        step.mst_edges = mst_edges.clone();
        step.visited_nodes = tree_nodes(&mst_edges);
        step.description = format!(
            "Round {} done: {} edges | Total weight: {}",
            round,
            mst_edges.len(),
            total_weight(&mst_edges)
        );
        step.sub_description = format!("Components remaining: {}", uf.component_count());
        steps.push(Step::Mst(step));
    }

    push_complete(&mut steps, &mst_edges, &[], graph);
    steps
}

/// Prim's algorithm: grow a visited frontier from the first node, always
/// taking the minimum-weight crossing edge (strict `<`, first found wins).
pub fn prim(graph: &GraphData) -> Vec<Step> {
    if let Some(steps) = trivial_run(graph) {
        return steps;
    }
    let mut steps = Vec::new();

    let start = &graph.nodes[0];
    let mut visited: Vec<String> = vec![start.id.clone()];
    let mut used_edges: Vec<String> = Vec::new();
    let mut mst_edges: Vec<Edge> = Vec::new();

    let mut step = MstStep::new(MstStepKind::Initial);
    step.visited_nodes = visited.clone();
    step.description = format!("Starting Prim's algorithm at node {}", start.id);
    step.sub_description = "Start from the first node".to_string();
    steps.push(Step::Mst(step));

    while visited.len() < graph.nodes.len() {
        // Candidate edges cross the frontier: one endpoint visited, one not.
        let mut min_edge: Option<Edge> = None;
        let mut candidates: Vec<Edge> = Vec::new();
        for edge in &graph.edges {
            let from_visited = visited.iter().any(|n| n == &edge.from);
            let to_visited = visited.iter().any(|n| n == &edge.to);
            let used = used_edges.iter().any(|id| id == &edge.id);
            if !used && (from_visited != to_visited) {
                candidates.push(edge.clone());
                let better = match &min_edge {
                    Some(best) => edge.weight < best.weight,
                    None => true,
                };
                if better {
                    min_edge = Some(edge.clone());
                }
            }
        }

        let mut step = MstStep::new(MstStepKind::Check);
        step.mst_edges = mst_edges.clone();
        step.visited_nodes = visited.clone();
        step.frontier_edges = candidates.clone();
        step.description = if candidates.is_empty() {
            "No more candidate edges found".to_string()
        } else {
            format!("Checking {} candidate edges", candidates.len())
        };
        step.sub_description =
            "Candidate edges connect visited nodes to unvisited nodes".to_string();
        steps.push(Step::Mst(step));

        let Some(edge) = min_edge else {
            let mut step = MstStep::new(MstStepKind::Decision);
            step.mst_edges = mst_edges.clone();
            step.visited_nodes = visited.clone();
            step.description = "No edge connects to an unvisited node".to_string();
            step.sub_description =
                "The graph is disconnected, and a complete MST cannot be formed".to_string();
            steps.push(Step::Mst(step));
            break;
        };

        let new_node = if visited.iter().any(|n| n == &edge.from) {
            edge.to.clone()
        } else {
            edge.from.clone()
        };
        visited.push(new_node.clone());
        used_edges.push(edge.id.clone());
        mst_edges.push(edge.clone());

        let mut step = MstStep::new(MstStepKind::Decision);
        step.mst_edges = mst_edges.clone();
        step.current_edge = Some(edge.clone());
        step.accepted = Some(true);
        step.visited_nodes = visited.clone();
        step.description = format!(
            "Edge {}-{} with minimum weight {} added to the tree",
            edge.from, edge.to, edge.weight
        );
        step.sub_description = format!("This edge connects new node {}", new_node);
        steps.push(Step::Mst(step));

        let mut step = MstStep::new(MstStepKind::Summary);
        step.mst_edges = mst_edges.clone();
        step.visited_nodes = visited.clone();
        step.description = format!(
            "Progress: {} edges | Total weight: {}",
            mst_edges.len(),
            total_weight(&mst_edges)
        );
        step.sub_description = format!("Visited nodes: {}", visited.join(", "));
        steps.push(Step::Mst(step));
    }

    push_complete(&mut steps, &mst_edges, &[], graph);
    steps
}

fn push_complete(steps: &mut Vec<Step>, mst_edges: &[Edge], rejected: &[Edge], graph: &GraphData) {
    let mut step = MstStep::new(MstStepKind::Complete);
    step.mst_edges = mst_edges.to_vec();
    step.rejected_edges = rejected.to_vec();
    step.visited_nodes = tree_nodes(mst_edges);
    let spanning = !graph.nodes.is_empty() && mst_edges.len() == graph.nodes.len() - 1;
    step.description = format!(
        "{}: {} edges | Total weight: {}",
        if spanning {
            "MST complete"
        } else {
            "Finished without a full spanning tree"
        },
        mst_edges.len(),
        total_weight(mst_edges)
    );
    step.sub_description = format!("Rejected edges: {}", rejected.len());
    steps.push(Step::Mst(step));
}

/// Connected components induced by `edges` over the graph's node set.
fn component_count(graph: &GraphData, edges: &[Edge]) -> usize {
    let mut uf = UnionFind::new(graph.node_ids());
    for edge in edges {
        uf.union(&edge.from, &edge.to);
    }
    uf.component_count()
}
