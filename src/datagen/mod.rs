//! Deterministic input generation
//!
//! Inputs are produced from an explicit seed so a run can be replayed
//! exactly: the same seed, size, and algorithm always yield the same step
//! sequence.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashSet;

use crate::model::{Edge, GraphData, Node};

/// Default search text for the string-matching algorithms.
pub const DEFAULT_TEXT: &str = "ABABDABACDABABCABAB";
/// Default pattern for the string-matching algorithms.
pub const DEFAULT_PATTERN: &str = "ABABC";

/// `size` random values in 5..=99.
pub fn random_array(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(5..100)).collect()
}

/// Spreadsheet-style node labels: A..Z, then AA, AB, ...
fn node_label(index: usize) -> String {
    let mut n = index + 1;
    let mut label = String::new();
    while n > 0 {
        n -= 1;
        label.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    label
}

/// A connected random graph with `node_count` nodes laid out on a circle.
///
/// A random spanning tree guarantees connectivity; extra edges are then
/// added up to `edge_count`, skipping self-loops and duplicate pairs.
/// Weights are integral values in 1..=20 stored as `f64`.
pub fn random_graph(node_count: usize, edge_count: usize, seed: u64) -> GraphData {
    let mut rng = StdRng::seed_from_u64(seed);

    let nodes: Vec<Node> = (0..node_count)
        .map(|i| {
            let angle = TAU * i as f64 / node_count.max(1) as f64;
            let label = node_label(i);
            Node {
                id: label.clone(),
                x: 50.0 + 40.0 * angle.cos(),
                y: 50.0 + 40.0 * angle.sin(),
                label,
            }
        })
        .collect();

    let mut edges = Vec::new();
    let mut pairs: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut push_edge = |edges: &mut Vec<Edge>, rng: &mut StdRng, a: usize, b: usize| {
        let weight = f64::from(rng.gen_range(1..=20));
        edges.push(Edge {
            id: format!("{}-{}", nodes[a].id, nodes[b].id),
            from: nodes[a].id.clone(),
            to: nodes[b].id.clone(),
            weight,
        });
    };

    // Spanning tree first: each node attaches to a random earlier one.
    for b in 1..node_count {
        let a = rng.gen_range(0..b);
        pairs.insert((a.min(b), a.max(b)));
        push_edge(&mut edges, &mut rng, a, b);
    }

    // Extra edges.  Bounded attempts so dense requests on tiny graphs
    // terminate once every pair is used.
    let max_pairs = node_count.saturating_mul(node_count.saturating_sub(1)) / 2;
    let target = edge_count.min(max_pairs);
    let mut attempts = 0;
    while edges.len() < target && attempts < 10 * target.max(1) {
        attempts += 1;
        let a = rng.gen_range(0..node_count);
        let b = rng.gen_range(0..node_count);
        if a == b || !pairs.insert((a.min(b), a.max(b))) {
            continue;
        }
        push_edge(&mut edges, &mut rng, a, b);
    }

    GraphData { nodes, edges }
}
