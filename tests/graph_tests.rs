// Integration tests for the MST, pathfinding, and traversal runners

use algoscope::model::{Edge, GraphData, Node, UnionFind};
use algoscope::runners::{self, AlgorithmId, RunInput, RunnerError};
use algoscope::step::{MstStep, MstStepKind, PathStep, PathStepKind, Step, TraceState};

fn node(id: &str, x: f64, y: f64) -> Node {
    Node {
        id: id.to_string(),
        x,
        y,
        label: id.to_string(),
    }
}

fn edge(from: &str, to: &str, weight: f64) -> Edge {
    Edge {
        id: format!("{}-{}", from, to),
        from: from.to_string(),
        to: to.to_string(),
        weight,
    }
}

fn graph_input(graph: GraphData) -> RunInput {
    RunInput::Graph {
        graph,
        start: None,
        end: None,
    }
}

/// A triangle with a unique MST: A-B (1) and B-C (2), rejecting A-C (5).
fn triangle() -> GraphData {
    GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0), node("C", 5.0, 8.0)],
        edges: vec![edge("A", "B", 1.0), edge("B", "C", 2.0), edge("A", "C", 5.0)],
    }
}

/// Six nodes with distinct weights, so the MST is unique (weight 16).
fn six_node_graph() -> GraphData {
    GraphData {
        nodes: vec![
            node("A", 0.0, 0.0),
            node("B", 10.0, 0.0),
            node("C", 20.0, 0.0),
            node("D", 0.0, 10.0),
            node("E", 10.0, 10.0),
            node("F", 20.0, 10.0),
        ],
        edges: vec![
            edge("A", "B", 4.0),
            edge("B", "C", 6.0),
            edge("A", "D", 2.0),
            edge("B", "E", 3.0),
            edge("C", "F", 9.0),
            edge("D", "E", 5.0),
            edge("E", "F", 1.0),
            edge("A", "E", 7.0),
            edge("B", "F", 8.0),
        ],
    }
}

fn two_components() -> GraphData {
    GraphData {
        nodes: vec![
            node("A", 0.0, 0.0),
            node("B", 10.0, 0.0),
            node("C", 30.0, 0.0),
            node("D", 40.0, 0.0),
        ],
        edges: vec![edge("A", "B", 1.0), edge("C", "D", 2.0)],
    }
}

fn mst_step(step: &Step) -> &MstStep {
    match step {
        Step::Mst(s) => s,
        other => panic!("expected an MST step, got {:?}", other),
    }
}

fn path_step(step: &Step) -> &PathStep {
    match step {
        Step::Path(s) => s,
        other => panic!("expected a path step, got {:?}", other),
    }
}

fn final_mst(steps: &[Step]) -> &MstStep {
    let last = mst_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, MstStepKind::Complete);
    last
}

#[test]
fn test_kruskal_triangle_rejects_the_cycle_edge() {
    let steps = runners::run(AlgorithmId::Kruskal, &graph_input(triangle())).expect("run failed");

    let last = final_mst(&steps);
    let mut accepted: Vec<&str> = last.mst_edges.iter().map(|e| e.id.as_str()).collect();
    accepted.sort();
    assert_eq!(accepted, ["A-B", "B-C"]);
    assert_eq!(last.total_weight(), 3.0);

    let rejection = steps
        .iter()
        .map(mst_step)
        .find(|s| s.kind == MstStepKind::Decision && s.accepted == Some(false))
        .expect("A-C must be rejected");
    let rejected = rejection.current_edge.as_ref().expect("rejection has an edge");
    assert_eq!(rejected.id, "A-C");
    assert!(rejection.description.contains("would create a cycle"));
}

#[test]
fn test_all_mst_algorithms_agree_on_the_unique_tree() {
    let ids = [
        AlgorithmId::Kruskal,
        AlgorithmId::ReverseDelete,
        AlgorithmId::Boruvka,
        AlgorithmId::Prim,
    ];
    for id in ids {
        let steps =
            runners::run(id, &graph_input(six_node_graph())).expect("run failed");
        let last = final_mst(&steps);
        assert_eq!(last.mst_edges.len(), 5, "{}", id.name());
        assert_eq!(last.total_weight(), 16.0, "{}", id.name());
    }
}

#[test]
fn test_prim_reports_disconnection_and_keeps_a_partial_tree() {
    let steps =
        runners::run(AlgorithmId::Prim, &graph_input(two_components())).expect("run failed");
    assert!(
        steps
            .iter()
            .any(|s| s.sub_description().contains("disconnected")),
        "disconnection must be announced"
    );
    let last = final_mst(&steps);
    // Only A's component is reachable from the start node.
    assert_eq!(last.mst_edges.len(), 1);
    assert_eq!(last.mst_edges[0].id, "A-B");
}

#[test]
fn test_mst_on_empty_graph_is_a_single_step() {
    let steps = runners::run(AlgorithmId::Kruskal, &graph_input(GraphData::default()))
        .expect("run failed");
    assert_eq!(steps.len(), 1);
    let only = mst_step(&steps[0]);
    assert_eq!(only.kind, MstStepKind::Complete);
    assert!(only.mst_edges.is_empty());
}

#[test]
fn test_dijkstra_and_a_star_agree_on_path_weight() {
    let input = RunInput::Graph {
        graph: six_node_graph(),
        start: Some("A".to_string()),
        end: Some("F".to_string()),
    };
    let mut distances = Vec::new();
    for id in [AlgorithmId::Dijkstra, AlgorithmId::AStar] {
        let steps = runners::run(id, &input).expect("run failed");
        let path = steps
            .iter()
            .map(path_step)
            .find(|s| s.kind == PathStepKind::Path)
            .expect("missing the path step");
        assert_eq!(path.path.first().map(String::as_str), Some("A"), "{}", id.name());
        assert_eq!(path.path.last().map(String::as_str), Some("F"), "{}", id.name());
        distances.push(path.distances["F"]);
    }
    // A-D-E-F and A-B-E-F both cost 8; either way the weights agree.
    assert_eq!(distances[0], distances[1]);
    assert_eq!(distances[0], 8.0);
}

#[test]
fn test_unreachable_end_yields_an_empty_path() {
    let input = RunInput::Graph {
        graph: two_components(),
        start: Some("A".to_string()),
        end: Some("D".to_string()),
    };
    for id in [AlgorithmId::Dijkstra, AlgorithmId::AStar] {
        let steps = runners::run(id, &input).expect("run failed");
        let path = steps
            .iter()
            .map(path_step)
            .find(|s| s.kind == PathStepKind::Path)
            .expect("missing the path step");
        assert!(path.path.is_empty(), "{}", id.name());
        assert_eq!(path.description, "No path exists", "{}", id.name());
        assert!(path.distances["D"].is_infinite(), "{}", id.name());
    }
}

#[test]
fn test_start_equals_end_short_circuits() {
    let input = RunInput::Graph {
        graph: triangle(),
        start: Some("B".to_string()),
        end: Some("B".to_string()),
    };
    let steps = runners::run(AlgorithmId::Dijkstra, &input).expect("run failed");
    let path = steps
        .iter()
        .map(path_step)
        .find(|s| s.kind == PathStepKind::Path)
        .expect("missing the path step");
    assert_eq!(path.path, vec!["B".to_string()]);
}

#[test]
fn test_bfs_visits_every_reachable_node() {
    let steps = runners::run(AlgorithmId::Bfs, &graph_input(six_node_graph()))
        .expect("run failed");
    let visited: Vec<&str> = steps
        .iter()
        .filter_map(|s| match s {
            Step::Trace(t) if t.state == Some(TraceState::Visited) => t.node.as_deref(),
            _ => None,
        })
        .collect();
    assert_eq!(visited.len(), 6, "every node is visited exactly once");
    assert_eq!(visited[0], "A");
}

#[test]
fn test_topological_sort_orders_a_dag() {
    let dag = GraphData {
        nodes: vec![
            node("A", 0.0, 0.0),
            node("B", 10.0, 0.0),
            node("C", 20.0, 0.0),
            node("D", 30.0, 0.0),
        ],
        edges: vec![
            edge("A", "B", 1.0),
            edge("A", "C", 1.0),
            edge("B", "D", 1.0),
            edge("C", "D", 1.0),
        ],
    };
    let steps = runners::run(AlgorithmId::TopologicalSort, &graph_input(dag))
        .expect("run failed");
    let order = steps
        .iter()
        .map(Step::description)
        .find(|d| d.starts_with("Topological order:"))
        .expect("missing the final ordering");
    assert!(order.starts_with("Topological order: A"));
    assert!(order.ends_with("D"));
}

#[test]
fn test_topological_sort_refuses_a_cycle() {
    let cyclic = GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0), node("C", 20.0, 0.0)],
        edges: vec![
            edge("A", "B", 1.0),
            edge("B", "C", 1.0),
            edge("C", "A", 1.0),
        ],
    };
    let steps = runners::run(AlgorithmId::TopologicalSort, &graph_input(cyclic))
        .expect("run failed");
    assert!(
        steps
            .iter()
            .any(|s| s.description().contains("Topological sort not possible")),
        "the cycle must be reported"
    );
}

fn scc_partition(steps: &[Step]) -> Vec<Vec<String>> {
    let mut components: Vec<Vec<String>> = steps
        .iter()
        .filter_map(|s| match s {
            Step::Trace(t) if t.state == Some(TraceState::Scc) && !t.nodes.is_empty() => {
                let mut nodes = t.nodes.clone();
                nodes.sort();
                Some(nodes)
            }
            _ => None,
        })
        .collect();
    components.sort();
    components
}

#[test]
fn test_kosaraju_and_tarjan_find_the_same_components() {
    // Two 2-cycles joined by a one-way bridge, plus a lone node.
    let graph = GraphData {
        nodes: vec![
            node("A", 0.0, 0.0),
            node("B", 10.0, 0.0),
            node("C", 20.0, 0.0),
            node("D", 30.0, 0.0),
            node("E", 40.0, 0.0),
        ],
        edges: vec![
            edge("A", "B", 1.0),
            edge("B", "A", 1.0),
            edge("B", "C", 1.0),
            edge("C", "D", 1.0),
            edge("D", "C", 1.0),
            edge("D", "E", 1.0),
        ],
    };
    let kosaraju = runners::run(AlgorithmId::KosarajuScc, &graph_input(graph.clone()))
        .expect("run failed");
    let tarjan =
        runners::run(AlgorithmId::TarjanScc, &graph_input(graph)).expect("run failed");

    let partition = scc_partition(&kosaraju);
    assert_eq!(partition, scc_partition(&tarjan));
    assert_eq!(
        partition,
        vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["C".to_string(), "D".to_string()],
            vec!["E".to_string()],
        ]
    );
}

#[test]
fn test_directed_cycle_detection() {
    let cyclic = GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0), node("C", 20.0, 0.0)],
        edges: vec![
            edge("A", "B", 1.0),
            edge("B", "C", 1.0),
            edge("C", "A", 1.0),
        ],
    };
    let steps = runners::run(AlgorithmId::CycleDirected, &graph_input(cyclic))
        .expect("run failed");
    assert!(steps.iter().any(|s| s.description().contains("Cycle detected")));

    let dag = GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0)],
        edges: vec![edge("A", "B", 1.0)],
    };
    let steps =
        runners::run(AlgorithmId::CycleDirected, &graph_input(dag)).expect("run failed");
    assert!(
        steps
            .iter()
            .any(|s| s.description().contains("No cycle found"))
    );
}

#[test]
fn test_undirected_cycle_ignores_the_parent_edge() {
    // A path graph has no cycle even though every edge is two-way.
    let path = GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0), node("C", 20.0, 0.0)],
        edges: vec![edge("A", "B", 1.0), edge("B", "C", 1.0)],
    };
    let steps = runners::run(AlgorithmId::CycleUndirected, &graph_input(path))
        .expect("run failed");
    assert!(
        steps
            .iter()
            .any(|s| s.description().contains("No cycle found")),
        "a tree must not report a cycle"
    );

    let steps = runners::run(AlgorithmId::CycleUndirected, &graph_input(triangle()))
        .expect("run failed");
    assert!(steps.iter().any(|s| s.description().contains("Cycle detected")));
}

#[test]
fn test_union_find_components() {
    let mut uf = UnionFind::new(["A", "B", "C", "D"]);
    assert_eq!(uf.component_count(), 4);

    assert!(uf.union("A", "B"));
    assert!(uf.union("C", "D"));
    assert!(!uf.union("B", "A"), "a repeated union is a no-op");
    assert_eq!(uf.component_count(), 2);
    assert!(uf.connected("A", "B"));
    assert!(!uf.connected("A", "C"));

    assert!(uf.union("B", "C"));
    assert_eq!(uf.component_count(), 1);
    assert!(uf.connected("A", "D"));
}

#[test]
fn test_graph_validation_rejects_malformed_input() {
    let self_loop = GraphData {
        nodes: vec![node("A", 0.0, 0.0)],
        edges: vec![Edge {
            id: "loop".to_string(),
            from: "A".to_string(),
            to: "A".to_string(),
            weight: 1.0,
        }],
    };
    let err = runners::run(AlgorithmId::Kruskal, &graph_input(self_loop))
        .expect_err("self-loops must be rejected");
    assert!(matches!(err, RunnerError::InvalidGraph(_)));
    assert!(err.to_string().contains("self-loop"));
}

#[test]
fn test_incident_and_outgoing_edge_queries() {
    let graph = six_node_graph();
    let focus = "B".to_string();
    let incident: Vec<&str> = graph.incident(&focus).map(|e| e.id.as_str()).collect();
    assert_eq!(incident, ["A-B", "B-C", "B-E", "B-F"]);
    let outgoing: Vec<&str> = graph.outgoing(&focus).map(|e| e.id.as_str()).collect();
    assert_eq!(outgoing, ["B-C", "B-E", "B-F"]);
}

#[test]
fn test_reciprocal_edges_are_directed_input_only() {
    let graph = GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0)],
        edges: vec![edge("A", "B", 1.0), edge("B", "A", 1.0)],
    };

    // Read as undirected, A-B and B-A are the same edge twice.
    let err = runners::run(AlgorithmId::Kruskal, &graph_input(graph.clone()))
        .expect_err("MST input must reject reciprocal edges");
    assert!(err.to_string().contains("connect the same pair"));

    // Read as directed, they are a legitimate 2-cycle.
    let steps = runners::run(AlgorithmId::CycleDirected, &graph_input(graph))
        .expect("directed algorithms accept reciprocal edges");
    assert!(steps.iter().any(|s| s.description().contains("Cycle detected")));
}

#[test]
fn test_tarjan_distinguishes_back_edges_from_returned_calls() {
    let graph = GraphData {
        nodes: vec![node("A", 0.0, 0.0), node("B", 10.0, 0.0), node("C", 20.0, 0.0)],
        edges: vec![
            edge("A", "B", 1.0),
            edge("B", "A", 1.0),
            edge("B", "C", 1.0),
        ],
    };
    let steps =
        runners::run(AlgorithmId::TarjanScc, &graph_input(graph)).expect("run failed");

    // Returning along a tree edge propagates the child's low-link and keeps
    // the tree-edge label; only genuine back edges are narrated as such.
    assert!(
        steps.iter().any(|s| matches!(s,
            Step::Trace(t) if t.state == Some(TraceState::Tree)
                && t.description.contains("propagating its low-link"))),
        "missing the low-link propagation step"
    );
    for step in &steps {
        if let Step::Trace(t) = step {
            if t.description.contains("Back edge") {
                assert_eq!(t.state, Some(TraceState::Back));
            }
        }
    }
}

#[test]
fn test_unknown_start_node_is_rejected() {
    let input = RunInput::Graph {
        graph: triangle(),
        start: Some("Z".to_string()),
        end: None,
    };
    let err = runners::run(AlgorithmId::Dfs, &input).expect_err("unknown start must fail");
    assert!(err.to_string().contains("unknown node 'Z'"));
}
