//! Traversal runners: DFS, BFS, topological sort, SCC, cycle detection
//!
//! These emit fine-grained narrative [`TraceStep`]s (per-vertex visit,
//! per-edge exploration, per-back-edge detection) with node/edge state tags
//! for the renderer.  Edges are followed as directed except for undirected
//! cycle detection.
//!
//! Every depth-first walk here runs on an explicit frame stack rather than
//! recursion, so stack depth stays bounded for any input.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::model::{Edge, GraphData};
use crate::step::{Step, TraceState, TraceStep};

fn empty_graph(steps: &mut Vec<Step>, graph: &GraphData) -> bool {
    if graph.nodes.is_empty() {
        steps.push(Step::Trace(TraceStep::info(
            "The graph is empty",
            "There is nothing to traverse",
        )));
        return true;
    }
    false
}

/// One frame of an explicit depth-first walk.
struct Frame {
    node: String,
    edges: Vec<Edge>,
    idx: usize,
    /// Edge whose child call just returned (Tarjan's post-recursion check).
    pending: Option<Edge>,
}

impl Frame {
    fn new(node: String, edges: Vec<Edge>) -> Self {
        Frame {
            node,
            edges,
            idx: 0,
            pending: None,
        }
    }
}

/// Iterative depth-first search from `start`, following directed edges.
pub fn depth_first_search(graph: &GraphData, start: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut stack = vec![start.to_string()];

    steps.push(Step::Trace(TraceStep::info(
        format!("Starting DFS from vertex {}", start),
        "Using an explicit stack",
    )));

    while let Some(current) = stack.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        steps.push(Step::Trace(TraceStep::node(
            format!("Visiting vertex {}", current),
            current.clone(),
            TraceState::Visited,
        )));

        for edge in graph.outgoing(&current) {
            if !visited.contains(&edge.to) {
                stack.push(edge.to.clone());
                steps.push(Step::Trace(TraceStep::edge(
                    format!("Adding {} to stack", edge.to),
                    edge.id.clone(),
                    TraceState::Active,
                )));
            }
        }
    }

    steps.push(Step::Trace(TraceStep::info(
        "DFS traversal completed",
        format!("Visited {} vertices", visited.len()),
    )));
    steps
}

/// Breadth-first search from `start`, following directed edges.
pub fn breadth_first_search(graph: &GraphData, start: &str) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut queue: VecDeque<String> = VecDeque::new();

    steps.push(Step::Trace(TraceStep::info(
        format!("Starting BFS from vertex {}", start),
        "Using a queue for level-by-level traversal",
    )));

    visited.insert(start.to_string());
    queue.push_back(start.to_string());
    steps.push(Step::Trace(TraceStep::node(
        format!("Adding {} to queue and marking as visited", start),
        start,
        TraceState::Processing,
    )));

    while let Some(current) = queue.pop_front() {
        steps.push(Step::Trace(TraceStep::node(
            format!("Processing vertex {}", current),
            current.clone(),
            TraceState::Visited,
        )));

        for edge in graph.outgoing(&current) {
            if visited.insert(edge.to.clone()) {
                queue.push_back(edge.to.clone());
                let mut step = TraceStep::edge(
                    format!("Discovering {}, adding to queue", edge.to),
                    edge.id.clone(),
                    TraceState::Active,
                );
                step.node = Some(edge.to.clone());
                steps.push(Step::Trace(step));
            }
        }
    }

    steps.push(Step::Trace(TraceStep::info(
        "BFS traversal completed",
        format!("Visited {} vertices", visited.len()),
    )));
    steps
}

/// Kahn's algorithm.  Refuses cyclic graphs with a terminal message.
pub fn topological_sort(graph: &GraphData) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    let mut in_degree: FxHashMap<String, usize> = FxHashMap::default();
    for node in &graph.nodes {
        in_degree.insert(node.id.clone(), 0);
    }
    for edge in &graph.edges {
        if let Some(d) = in_degree.get_mut(&edge.to) {
            *d += 1;
        }
    }

    steps.push(Step::Trace(TraceStep::info(
        "Starting topological sort using Kahn's algorithm",
        "Initialize in-degree count for all vertices",
    )));

    let mut queue: VecDeque<String> = VecDeque::new();
    for node in &graph.nodes {
        if in_degree[&node.id] == 0 {
            queue.push_back(node.id.clone());
            steps.push(Step::Trace(TraceStep::node(
                format!("Found vertex {} with in-degree 0", node.id),
                node.id.clone(),
                TraceState::Processing,
            )));
        }
    }

    let mut result: Vec<String> = Vec::new();
    while let Some(current) = queue.pop_front() {
        result.push(current.clone());
        steps.push(Step::Trace(TraceStep::node(
            format!("Processing vertex {}", current),
            current.clone(),
            TraceState::Visited,
        )));

        for edge in graph.outgoing(&current) {
            let Some(d) = in_degree.get_mut(&edge.to) else {
                continue;
            };
            *d -= 1;
            steps.push(Step::Trace(TraceStep::edge(
                format!("Reducing in-degree of {}", edge.to),
                edge.id.clone(),
                TraceState::Active,
            )));
            if *d == 0 {
                queue.push_back(edge.to.clone());
                steps.push(Step::Trace(TraceStep::node(
                    format!("Vertex {} now has in-degree 0, adding to queue", edge.to),
                    edge.to.clone(),
                    TraceState::Processing,
                )));
            }
        }
    }

    if result.len() != graph.nodes.len() {
        steps.push(Step::Trace(TraceStep::info(
            "Graph contains a cycle! Topological sort not possible",
            "Not all vertices were processed",
        )));
    } else {
        steps.push(Step::Trace(TraceStep::info(
            format!("Topological order: {}", result.join(" -> ")),
            "All vertices successfully ordered",
        )));
    }
    steps
}

/// Kosaraju's two-pass SCC algorithm.
pub fn kosaraju_scc(graph: &GraphData) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    steps.push(Step::Trace(TraceStep::info(
        "Starting Kosaraju's algorithm for strongly connected components",
        "Phase 1: DFS on the original graph to order vertices by finish time",
    )));

    // Phase 1: record finish order.
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut finish_order: Vec<String> = Vec::new();

    for node in &graph.nodes {
        if visited.contains(&node.id) {
            continue;
        }
        visited.insert(node.id.clone());
        steps.push(Step::Trace(TraceStep::node(
            format!("Visiting vertex {} in first DFS", node.id),
            node.id.clone(),
            TraceState::Visited,
        )));
        let mut frames = vec![Frame::new(
            node.id.clone(),
            graph.outgoing(&node.id).cloned().collect(),
        )];

        while !frames.is_empty() {
            let last = frames.len() - 1;
            if frames[last].idx < frames[last].edges.len() {
                let edge = frames[last].edges[frames[last].idx].clone();
                frames[last].idx += 1;
                if visited.insert(edge.to.clone()) {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!("Following edge to {}", edge.to),
                        edge.id.clone(),
                        TraceState::Active,
                    )));
                    steps.push(Step::Trace(TraceStep::node(
                        format!("Visiting vertex {} in first DFS", edge.to),
                        edge.to.clone(),
                        TraceState::Visited,
                    )));
                    frames.push(Frame::new(
                        edge.to.clone(),
                        graph.outgoing(&edge.to).cloned().collect(),
                    ));
                }
            } else {
                let finished = frames[last].node.clone();
                finish_order.push(finished.clone());
                steps.push(Step::Trace(TraceStep::node(
                    format!("Finished processing {}, adding to stack", finished),
                    finished,
                    TraceState::Finished,
                )));
                frames.pop();
            }
        }
    }

    steps.push(Step::Trace(TraceStep::info(
        "Phase 2: DFS on the transposed graph in stack order",
        "Process vertices in reverse finishing order",
    )));

    // Phase 2: DFS along incoming edges, in reverse finish order.
    visited.clear();
    let mut components: Vec<Vec<String>> = Vec::new();

    while let Some(root) = finish_order.pop() {
        if visited.contains(&root) {
            continue;
        }
        let mut component: Vec<String> = Vec::new();

        visited.insert(root.clone());
        component.push(root.clone());
        steps.push(Step::Trace(TraceStep::node(
            format!("Adding {} to current SCC", root),
            root.clone(),
            TraceState::Scc,
        )));

        let incoming =
            |node: &str| -> Vec<Edge> { graph.edges.iter().filter(|e| e.to == node).cloned().collect() };
        let mut frames = vec![Frame::new(root.clone(), incoming(&root))];

        while !frames.is_empty() {
            let last = frames.len() - 1;
            if frames[last].idx < frames[last].edges.len() {
                let edge = frames[last].edges[frames[last].idx].clone();
                frames[last].idx += 1;
                if visited.insert(edge.from.clone()) {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!("Following transposed edge from {} to {}", edge.to, edge.from),
                        edge.id.clone(),
                        TraceState::Tree,
                    )));
                    component.push(edge.from.clone());
                    steps.push(Step::Trace(TraceStep::node(
                        format!("Adding {} to current SCC", edge.from),
                        edge.from.clone(),
                        TraceState::Scc,
                    )));
                    frames.push(Frame::new(edge.from.clone(), incoming(&edge.from)));
                }
            } else {
                frames.pop();
            }
        }

        steps.push(Step::Trace(TraceStep::group(
            format!("Found SCC: {{{}}}", component.join(", ")),
            component.clone(),
            TraceState::Scc,
        )));
        components.push(component);
    }

    steps.push(Step::Trace(TraceStep::info(
        format!("Found {} strongly connected components", components.len()),
        components
            .iter()
            .map(|c| format!("{{{}}}", c.join(", ")))
            .collect::<Vec<_>>()
            .join(", "),
    )));
    steps
}

/// Tarjan's single-pass SCC algorithm with iterative low-link bookkeeping.
pub fn tarjan_scc(graph: &GraphData) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    steps.push(Step::Trace(TraceStep::info(
        "Starting Tarjan's algorithm for strongly connected components",
        "Single DFS pass with low-link values",
    )));

    let mut ids: FxHashMap<String, usize> = FxHashMap::default();
    let mut low: FxHashMap<String, usize> = FxHashMap::default();
    let mut on_stack: FxHashSet<String> = FxHashSet::default();
    let mut stack: Vec<String> = Vec::new();
    let mut next_id = 0usize;
    let mut components: Vec<Vec<String>> = Vec::new();

    for start in &graph.nodes {
        if ids.contains_key(&start.id) {
            continue;
        }

        tarjan_enter(
            &start.id,
            &mut next_id,
            &mut stack,
            &mut on_stack,
            &mut ids,
            &mut low,
            &mut steps,
        );
        let mut frames = vec![Frame::new(
            start.id.clone(),
            graph.outgoing(&start.id).cloned().collect(),
        )];

        while !frames.is_empty() {
            let last = frames.len() - 1;
            let node = frames[last].node.clone();

            // Propagate the child's low-link when a tree-edge call returns.
            if let Some(edge) = frames[last].pending.take() {
                if on_stack.contains(&edge.to) {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!("Returned from {}, propagating its low-link", edge.to),
                        edge.id.clone(),
                        TraceState::Tree,
                    )));
                    let child_low = low[&edge.to];
                    let entry = low.get_mut(&node);
                    if let Some(entry) = entry {
                        *entry = (*entry).min(child_low);
                    }
                }
            }

            if frames[last].idx < frames[last].edges.len() {
                let edge = frames[last].edges[frames[last].idx].clone();
                frames[last].idx += 1;
                let neighbor = edge.to.clone();

                if !ids.contains_key(&neighbor) {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!("Following tree edge to unvisited {}", neighbor),
                        edge.id.clone(),
                        TraceState::Tree,
                    )));
                    frames[last].pending = Some(edge);
                    tarjan_enter(
                        &neighbor,
                        &mut next_id,
                        &mut stack,
                        &mut on_stack,
                        &mut ids,
                        &mut low,
                        &mut steps,
                    );
                    frames.push(Frame::new(
                        neighbor.clone(),
                        graph.outgoing(&neighbor).cloned().collect(),
                    ));
                    continue;
                }

                if on_stack.contains(&neighbor) {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!("Back edge to {}, updating low-link", neighbor),
                        edge.id.clone(),
                        TraceState::Back,
                    )));
                    let neighbor_low = low[&neighbor];
                    if let Some(entry) = low.get_mut(&node) {
                        *entry = (*entry).min(neighbor_low);
                    }
                }
            } else {
                // All edges done: pop an SCC if this node is its root.
                if ids[&node] == low[&node] {
                    let mut component: Vec<String> = Vec::new();
                    while let Some(popped) = stack.pop() {
                        on_stack.remove(&popped);
                        component.push(popped.clone());
                        steps.push(Step::Trace(TraceStep::node(
                            format!("Popping {} from stack for SCC", popped),
                            popped.clone(),
                            TraceState::Scc,
                        )));
                        if popped == node {
                            break;
                        }
                    }
                    steps.push(Step::Trace(TraceStep::group(
                        format!("Found SCC: {{{}}}", component.join(", ")),
                        component.clone(),
                        TraceState::Scc,
                    )));
                    components.push(component);
                }
                frames.pop();
            }
        }
    }

    steps.push(Step::Trace(TraceStep::info(
        format!("Found {} strongly connected components", components.len()),
        components
            .iter()
            .map(|c| format!("{{{}}}", c.join(", ")))
            .collect::<Vec<_>>()
            .join(", "),
    )));
    steps
}

/// Put a node on Tarjan's stack with fresh id and low-link values.
#[allow(clippy::too_many_arguments)]
fn tarjan_enter(
    node: &str,
    next_id: &mut usize,
    stack: &mut Vec<String>,
    on_stack: &mut FxHashSet<String>,
    ids: &mut FxHashMap<String, usize>,
    low: &mut FxHashMap<String, usize>,
    steps: &mut Vec<Step>,
) {
    stack.push(node.to_string());
    on_stack.insert(node.to_string());
    ids.insert(node.to_string(), *next_id);
    low.insert(node.to_string(), *next_id);
    steps.push(Step::Trace(TraceStep::node(
        format!("Visiting {}, assigned ID {}", node, next_id),
        node,
        TraceState::Visited,
    )));
    *next_id += 1;
}

/// Cycle detection in a directed graph (white-gray-black DFS).
pub fn detect_cycle_directed(graph: &GraphData) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    steps.push(Step::Trace(TraceStep::info(
        "Starting cycle detection in directed graph using DFS",
        "Using white-gray-black coloring",
    )));

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut cycle_found = false;

    'outer: for start in &graph.nodes {
        if visited.contains(&start.id) {
            continue;
        }

        let mut rec_stack: FxHashSet<String> = FxHashSet::default();
        visited.insert(start.id.clone());
        rec_stack.insert(start.id.clone());
        steps.push(Step::Trace(TraceStep::node(
            format!("Visiting node {}, marking as gray (in recursion stack)", start.id),
            start.id.clone(),
            TraceState::Processing,
        )));
        let mut frames = vec![Frame::new(
            start.id.clone(),
            graph.outgoing(&start.id).cloned().collect(),
        )];

        while !frames.is_empty() {
            let last = frames.len() - 1;
            let node = frames[last].node.clone();

            if frames[last].idx < frames[last].edges.len() {
                let edge = frames[last].edges[frames[last].idx].clone();
                frames[last].idx += 1;
                let neighbor = edge.to.clone();

                steps.push(Step::Trace(TraceStep::edge(
                    format!("Exploring edge from {} to {}", node, neighbor),
                    edge.id.clone(),
                    TraceState::Active,
                )));

                if rec_stack.contains(&neighbor) {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!("Back edge detected! Cycle found: {} -> {}", node, neighbor),
                        edge.id.clone(),
                        TraceState::Back,
                    )));
                    // The frame chain from `neighbor` down to `node` is the cycle.
                    let mut cycle: Vec<String> = frames
                        .iter()
                        .map(|f| f.node.clone())
                        .skip_while(|n| n != &neighbor)
                        .collect();
                    cycle.push(neighbor.clone());
                    steps.push(Step::Trace(TraceStep::group(
                        format!("Cycle detected: {}", cycle.join(" -> ")),
                        cycle,
                        TraceState::Scc,
                    )));
                    cycle_found = true;
                    break 'outer;
                }

                if visited.insert(neighbor.clone()) {
                    rec_stack.insert(neighbor.clone());
                    steps.push(Step::Trace(TraceStep::node(
                        format!("Visiting node {}, marking as gray (in recursion stack)", neighbor),
                        neighbor.clone(),
                        TraceState::Processing,
                    )));
                    frames.push(Frame::new(
                        neighbor.clone(),
                        graph.outgoing(&neighbor).cloned().collect(),
                    ));
                }
            } else {
                rec_stack.remove(&node);
                steps.push(Step::Trace(TraceStep::node(
                    format!("Finished processing {}, marking as black (visited)", node),
                    node,
                    TraceState::Visited,
                )));
                frames.pop();
            }
        }
    }

    if !cycle_found {
        steps.push(Step::Trace(TraceStep::info(
            "No cycle found in the directed graph",
            "The graph is acyclic (DAG)",
        )));
    }
    steps
}

/// Cycle detection in an undirected graph (back edge excluding the parent).
pub fn detect_cycle_undirected(graph: &GraphData) -> Vec<Step> {
    let mut steps = Vec::new();
    if empty_graph(&mut steps, graph) {
        return steps;
    }

    steps.push(Step::Trace(TraceStep::info(
        "Starting cycle detection in undirected graph using DFS",
        "Looking for back edges (excluding parent edges)",
    )));

    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut parent: FxHashMap<String, Option<String>> = FxHashMap::default();
    let mut cycle_found = false;

    'outer: for start in &graph.nodes {
        if visited.contains(&start.id) {
            continue;
        }
        visited.insert(start.id.clone());
        parent.insert(start.id.clone(), None);
        steps.push(Step::Trace(TraceStep::node(
            format!("Visiting node {}", start.id),
            start.id.clone(),
            TraceState::Processing,
        )));
        let mut frames = vec![Frame::new(
            start.id.clone(),
            graph.incident(&start.id).cloned().collect(),
        )];

        while !frames.is_empty() {
            let last = frames.len() - 1;
            let node = frames[last].node.clone();

            if frames[last].idx < frames[last].edges.len() {
                let edge = frames[last].edges[frames[last].idx].clone();
                frames[last].idx += 1;
                let Some(neighbor) = edge.other(&node).map(str::to_string) else {
                    continue;
                };
                if parent.get(&node).cloned().flatten().as_deref() == Some(neighbor.as_str()) {
                    continue; // the edge we came in on
                }

                steps.push(Step::Trace(TraceStep::edge(
                    format!("Exploring edge to {}", neighbor),
                    edge.id.clone(),
                    TraceState::Active,
                )));

                if visited.insert(neighbor.clone()) {
                    parent.insert(neighbor.clone(), Some(node.clone()));
                    steps.push(Step::Trace(TraceStep::node(
                        format!("Visiting node {}", neighbor),
                        neighbor.clone(),
                        TraceState::Processing,
                    )));
                    frames.push(Frame::new(
                        neighbor.clone(),
                        graph.incident(&neighbor).cloned().collect(),
                    ));
                } else {
                    steps.push(Step::Trace(TraceStep::edge(
                        format!(
                            "Back edge detected! Cycle found involving nodes {} and {}",
                            node, neighbor
                        ),
                        edge.id.clone(),
                        TraceState::Back,
                    )));
                    steps.push(Step::Trace(TraceStep::group(
                        "Cycle detected in undirected graph",
                        vec![node, neighbor],
                        TraceState::Scc,
                    )));
                    cycle_found = true;
                    break 'outer;
                }
            } else {
                steps.push(Step::Trace(TraceStep::node(
                    format!("Finished processing {}", node),
                    node,
                    TraceState::Visited,
                )));
                frames.pop();
            }
        }
    }

    if !cycle_found {
        steps.push(Step::Trace(TraceStep::info(
            "No cycle found in the undirected graph",
            "The graph is acyclic (forest)",
        )));
    }
    steps
}
