//! Shortest-path runners: Dijkstra and A*
//!
//! Both treat the graph as undirected and scan linearly for the next node to
//! expand (no heap; inputs are tiny).  An unreachable end node produces an
//! explicit "no path" step with an empty path, never an error.

use rustc_hash::FxHashMap;

use crate::model::{GraphData, Node};
use crate::step::{PathStep, PathStepKind, Step};

/// Euclidean distance between two nodes' canvas coordinates.
pub fn heuristic(a: &Node, b: &Node) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

fn trivial_run(graph: &GraphData, start: &str, end: &str) -> Option<Vec<Step>> {
    if graph.nodes.is_empty() {
        let mut step = PathStep::new(PathStepKind::Complete);
        step.description = "The graph is empty; there is no path to find".to_string();
        return Some(vec![Step::Path(step)]);
    }
    if start == end {
        let mut step = PathStep::new(PathStepKind::Path);
        step.path = vec![start.to_string()];
        step.visited_nodes = vec![start.to_string()];
        step.distances.insert(start.to_string(), 0.0);
        step.description = "Start and end are the same node".to_string();
        step.sub_description = "Total distance: 0".to_string();
        return Some(vec![Step::Path(step)]);
    }
    if end.is_empty() {
        let mut step = PathStep::new(PathStepKind::Complete);
        step.description = "No end node selected".to_string();
        return Some(vec![Step::Path(step)]);
    }
    None
}

/// Walk `previous` backward from `end`; empty when `end` was never reached.
fn reconstruct(previous: &FxHashMap<String, Option<String>>, start: &str, end: &str) -> Vec<String> {
    let mut path = vec![end.to_string()];
    let mut current = end.to_string();
    while let Some(Some(prev)) = previous.get(&current) {
        path.push(prev.clone());
        current = prev.clone();
    }
    path.reverse();
    if path.first().map(String::as_str) == Some(start) {
        path
    } else {
        Vec::new()
    }
}

fn base_state(
    graph: &GraphData,
    start: &str,
) -> (FxHashMap<String, f64>, FxHashMap<String, Option<String>>) {
    let mut distances = FxHashMap::default();
    let mut previous = FxHashMap::default();
    for node in &graph.nodes {
        let d = if node.id == start { 0.0 } else { f64::INFINITY };
        distances.insert(node.id.clone(), d);
        previous.insert(node.id.clone(), None);
    }
    (distances, previous)
}

/// Dijkstra's algorithm with an O(V²) minimum scan.
pub fn dijkstra(graph: &GraphData, start: &str, end: &str) -> Vec<Step> {
    if let Some(steps) = trivial_run(graph, start, end) {
        return steps;
    }
    let mut steps = Vec::new();

    let (mut distances, mut previous) = base_state(graph, start);
    let mut visited: Vec<String> = Vec::new();
    let mut unvisited: Vec<String> = graph.node_ids();

    let mut step = PathStep::new(PathStepKind::Initial);
    step.frontier_nodes = vec![start.to_string()];
    step.distances = distances.clone();
    step.previous = previous.clone();
    step.description = "Starting Dijkstra's algorithm".to_string();
    step.sub_description = format!("Finding path from {} to {}", start, end);
    steps.push(Step::Path(step));

    while !unvisited.is_empty() {
        // Unvisited node with the smallest tentative distance.
        let mut current: Option<String> = None;
        let mut smallest = f64::INFINITY;
        for id in &unvisited {
            if distances[id] < smallest {
                smallest = distances[id];
                current = Some(id.clone());
            }
        }
        let Some(current) = current else {
            break; // everything left is unreachable
        };

        let mut step = PathStep::new(PathStepKind::Explore);
        step.current_node = Some(current.clone());
        step.visited_nodes = visited.clone();
        step.frontier_nodes = unvisited.clone();
        step.distances = distances.clone();
        step.previous = previous.clone();
        step.description = format!("Exploring node {}", current);
        step.sub_description = format!("Current distance: {}", distances[&current]);
        steps.push(Step::Path(step));

        for edge in graph.incident(&current) {
            let Some(neighbor) = edge.other(&current) else {
                continue;
            };
            if visited.iter().any(|v| v == neighbor) {
                continue;
            }
            let candidate = distances[&current] + edge.weight;
            if candidate < distances[neighbor] {
                distances.insert(neighbor.to_string(), candidate);
                previous.insert(neighbor.to_string(), Some(current.clone()));
            }
        }

        visited.push(current.clone());
        unvisited.retain(|id| id != &current);

        let mut step = PathStep::new(PathStepKind::Visit);
        step.current_node = Some(current.clone());
        step.visited_nodes = visited.clone();
        step.frontier_nodes = unvisited.clone();
        step.distances = distances.clone();
        step.previous = previous.clone();
        step.description = format!("Visited node {}", current);
        step.sub_description = "Updated distances to neighbors".to_string();
        steps.push(Step::Path(step));

        if current == end {
            break;
        }
    }

    finish(&mut steps, &distances, &previous, &visited, start, end);
    steps
}

/// A*: Dijkstra plus a Euclidean heuristic over node coordinates.
pub fn a_star(graph: &GraphData, start: &str, end: &str) -> Vec<Step> {
    if let Some(steps) = trivial_run(graph, start, end) {
        return steps;
    }
    let mut steps = Vec::new();

    let (Some(start_node), Some(end_node)) = (graph.node(start), graph.node(end)) else {
        let mut step = PathStep::new(PathStepKind::Complete);
        step.description = "Start or end node does not exist".to_string();
        return vec![Step::Path(step)];
    };

    let (mut g_score, mut previous) = base_state(graph, start);
    let mut f_score: FxHashMap<String, f64> = FxHashMap::default();
    for node in &graph.nodes {
        let f = if node.id == start {
            heuristic(start_node, end_node)
        } else {
            f64::INFINITY
        };
        f_score.insert(node.id.clone(), f);
    }

    let mut open: Vec<String> = vec![start.to_string()];
    let mut closed: Vec<String> = Vec::new();

    let mut step = PathStep::new(PathStepKind::Initial);
    step.frontier_nodes = open.clone();
    step.distances = g_score.clone();
    step.previous = previous.clone();
    step.description = "Starting A* algorithm".to_string();
    step.sub_description = format!("Finding path from {} to {}", start, end);
    steps.push(Step::Path(step));

    while !open.is_empty() {
        // Open node with the lowest f = g + h; first found wins on ties.
        let mut current = open[0].clone();
        for id in &open[1..] {
            if f_score[id] < f_score[&current] {
                current = id.clone();
            }
        }

        let mut step = PathStep::new(PathStepKind::Explore);
        step.current_node = Some(current.clone());
        step.visited_nodes = closed.clone();
        step.frontier_nodes = open.clone();
        step.distances = g_score.clone();
        step.previous = previous.clone();
        step.description = format!("Exploring node {}", current);
        step.sub_description = format!(
            "g = {:.1}, f = {:.1}",
            g_score[&current], f_score[&current]
        );
        steps.push(Step::Path(step));

        if current == end {
            closed.push(current.clone());
            break;
        }

        open.retain(|id| id != &current);
        closed.push(current.clone());

        for edge in graph.incident(&current) {
            let Some(neighbor) = edge.other(&current) else {
                continue;
            };
            if closed.iter().any(|v| v == neighbor) {
                continue;
            }
            let tentative = g_score[&current] + edge.weight;
            if tentative < g_score[neighbor] {
                let Some(neighbor_node) = graph.node(neighbor) else {
                    continue;
                };
                g_score.insert(neighbor.to_string(), tentative);
                f_score.insert(
                    neighbor.to_string(),
                    tentative + heuristic(neighbor_node, end_node),
                );
                previous.insert(neighbor.to_string(), Some(current.clone()));
                if !open.iter().any(|id| id == neighbor) {
                    open.push(neighbor.to_string());
                }
            }
        }

        let mut step = PathStep::new(PathStepKind::Visit);
        step.current_node = Some(current.clone());
        step.visited_nodes = closed.clone();
        step.frontier_nodes = open.clone();
        step.distances = g_score.clone();
        step.previous = previous.clone();
        step.description = format!("Visited node {}", current);
        step.sub_description = "Relaxed all neighbors through the frontier".to_string();
        steps.push(Step::Path(step));
    }

    finish(&mut steps, &g_score, &previous, &closed, start, end);
    steps
}

/// Emit the Path and Complete bookend steps.
fn finish(
    steps: &mut Vec<Step>,
    distances: &FxHashMap<String, f64>,
    previous: &FxHashMap<String, Option<String>>,
    visited: &[String],
    start: &str,
    end: &str,
) {
    let path = reconstruct(previous, start, end);

    let mut step = PathStep::new(PathStepKind::Path);
    step.visited_nodes = visited.to_vec();
    step.distances = distances.clone();
    step.previous = previous.clone();
    step.path = path.clone();
    if path.is_empty() {
        step.description = "No path exists".to_string();
        step.sub_description = format!("{} is unreachable from {}", end, start);
    } else {
        step.description = "Path found!".to_string();
        step.sub_description = format!("Total distance: {}", distances[end]);
    }
    steps.push(Step::Path(step));

    let mut complete = PathStep::new(PathStepKind::Complete);
    complete.visited_nodes = visited.to_vec();
    complete.distances = distances.clone();
    complete.previous = previous.clone();
    complete.path = path;
    complete.description = "Algorithm complete".to_string();
    complete.sub_description = format!("Visited {} nodes", visited.len());
    steps.push(Step::Path(complete));
}
