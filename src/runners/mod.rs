//! Algorithm runners and the registry that dispatches to them
//!
//! A runner is a pure function mapping an input dataset to a complete,
//! ordered `Vec<Step>`; the whole run is precomputed eagerly before playback
//! starts.  Runners never perform I/O, timing, or UI interaction.
//!
//! [`AlgorithmId`] is the closed set of algorithm identifiers: names are
//! resolved once at configuration time, so an unknown name fails fast with
//! the list of known algorithms instead of silently doing nothing.

pub mod matching;
pub mod mst;
pub mod pathfinding;
pub mod searching;
pub mod sorting;
pub mod traversal;

use std::fmt;
use std::str::FromStr;

use crate::model::{GraphData, GraphError};
use crate::step::Step;

/// Which kind of input an algorithm consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Sorting,
    Searching,
    Mst,
    Pathfinding,
    Traversal,
    Matching,
}

impl Family {
    pub fn input_name(self) -> &'static str {
        match self {
            Family::Sorting => "an array of numbers",
            Family::Searching => "an array of numbers and a target",
            Family::Mst | Family::Pathfinding | Family::Traversal => "a graph",
            Family::Matching => "a text and a pattern",
        }
    }
}

/// Every algorithm the visualizer knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmId {
    BubbleSort,
    CocktailSort,
    GnomeSort,
    CombSort,
    OddEvenSort,
    InsertionSort,
    ShellSort,
    SelectionSort,
    PancakeSort,
    StoogeSort,
    MergeSort,
    QuickSort,
    BucketSort,
    LinearSearch,
    BinarySearch,
    Kruskal,
    ReverseDelete,
    Boruvka,
    Prim,
    Dijkstra,
    AStar,
    Dfs,
    Bfs,
    TopologicalSort,
    KosarajuScc,
    TarjanScc,
    CycleDirected,
    CycleUndirected,
    NaiveMatch,
    Kmp,
    BoyerMoore,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 31] = [
        AlgorithmId::BubbleSort,
        AlgorithmId::CocktailSort,
        AlgorithmId::GnomeSort,
        AlgorithmId::CombSort,
        AlgorithmId::OddEvenSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::ShellSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::PancakeSort,
        AlgorithmId::StoogeSort,
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::BucketSort,
        AlgorithmId::LinearSearch,
        AlgorithmId::BinarySearch,
        AlgorithmId::Kruskal,
        AlgorithmId::ReverseDelete,
        AlgorithmId::Boruvka,
        AlgorithmId::Prim,
        AlgorithmId::Dijkstra,
        AlgorithmId::AStar,
        AlgorithmId::Dfs,
        AlgorithmId::Bfs,
        AlgorithmId::TopologicalSort,
        AlgorithmId::KosarajuScc,
        AlgorithmId::TarjanScc,
        AlgorithmId::CycleDirected,
        AlgorithmId::CycleUndirected,
        AlgorithmId::NaiveMatch,
        AlgorithmId::Kmp,
        AlgorithmId::BoyerMoore,
    ];

    /// The CLI-facing name.
    pub fn name(self) -> &'static str {
        match self {
            AlgorithmId::BubbleSort => "bubble-sort",
            AlgorithmId::CocktailSort => "cocktail-sort",
            AlgorithmId::GnomeSort => "gnome-sort",
            AlgorithmId::CombSort => "comb-sort",
            AlgorithmId::OddEvenSort => "odd-even-sort",
            AlgorithmId::InsertionSort => "insertion-sort",
            AlgorithmId::ShellSort => "shell-sort",
            AlgorithmId::SelectionSort => "selection-sort",
            AlgorithmId::PancakeSort => "pancake-sort",
            AlgorithmId::StoogeSort => "stooge-sort",
            AlgorithmId::MergeSort => "merge-sort",
            AlgorithmId::QuickSort => "quick-sort",
            AlgorithmId::BucketSort => "bucket-sort",
            AlgorithmId::LinearSearch => "linear-search",
            AlgorithmId::BinarySearch => "binary-search",
            AlgorithmId::Kruskal => "kruskal",
            AlgorithmId::ReverseDelete => "reverse-delete",
            AlgorithmId::Boruvka => "boruvka",
            AlgorithmId::Prim => "prim",
            AlgorithmId::Dijkstra => "dijkstra",
            AlgorithmId::AStar => "a-star",
            AlgorithmId::Dfs => "dfs",
            AlgorithmId::Bfs => "bfs",
            AlgorithmId::TopologicalSort => "topological-sort",
            AlgorithmId::KosarajuScc => "kosaraju-scc",
            AlgorithmId::TarjanScc => "tarjan-scc",
            AlgorithmId::CycleDirected => "cycle-directed",
            AlgorithmId::CycleUndirected => "cycle-undirected",
            AlgorithmId::NaiveMatch => "naive-match",
            AlgorithmId::Kmp => "kmp",
            AlgorithmId::BoyerMoore => "boyer-moore",
        }
    }

    pub fn family(self) -> Family {
        match self {
            AlgorithmId::BubbleSort
            | AlgorithmId::CocktailSort
            | AlgorithmId::GnomeSort
            | AlgorithmId::CombSort
            | AlgorithmId::OddEvenSort
            | AlgorithmId::InsertionSort
            | AlgorithmId::ShellSort
            | AlgorithmId::SelectionSort
            | AlgorithmId::PancakeSort
            | AlgorithmId::StoogeSort
            | AlgorithmId::MergeSort
            | AlgorithmId::QuickSort
            | AlgorithmId::BucketSort => Family::Sorting,
            AlgorithmId::LinearSearch | AlgorithmId::BinarySearch => Family::Searching,
            AlgorithmId::Kruskal
            | AlgorithmId::ReverseDelete
            | AlgorithmId::Boruvka
            | AlgorithmId::Prim => Family::Mst,
            AlgorithmId::Dijkstra | AlgorithmId::AStar => Family::Pathfinding,
            AlgorithmId::Dfs
            | AlgorithmId::Bfs
            | AlgorithmId::TopologicalSort
            | AlgorithmId::KosarajuScc
            | AlgorithmId::TarjanScc
            | AlgorithmId::CycleDirected
            | AlgorithmId::CycleUndirected => Family::Traversal,
            AlgorithmId::NaiveMatch | AlgorithmId::Kmp | AlgorithmId::BoyerMoore => {
                Family::Matching
            }
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmId {
    type Err = RunnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AlgorithmId::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| RunnerError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// The dataset a run operates on.
#[derive(Debug, Clone)]
pub enum RunInput {
    Array(Vec<i32>),
    Search {
        values: Vec<i32>,
        target: i32,
    },
    Graph {
        graph: GraphData,
        /// Start node for traversal/pathfinding; defaults to the first node.
        start: Option<String>,
        /// End node for pathfinding; defaults to the last node.
        end: Option<String>,
    },
    Text {
        text: String,
        pattern: String,
    },
}

/// Errors surfaced before a run starts
#[derive(Debug, Clone, PartialEq)]
pub enum RunnerError {
    UnknownAlgorithm { name: String },
    InputMismatch { algorithm: &'static str, expected: &'static str },
    InvalidGraph(GraphError),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm '{}'; known algorithms: ", name)?;
                for (i, id) in AlgorithmId::ALL.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    f.write_str(id.name())?;
                }
                Ok(())
            }
            RunnerError::InputMismatch {
                algorithm,
                expected,
            } => {
                write!(f, "algorithm '{}' needs {}", algorithm, expected)
            }
            RunnerError::InvalidGraph(e) => write!(f, "invalid graph: {}", e),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<GraphError> for RunnerError {
    fn from(e: GraphError) -> Self {
        RunnerError::InvalidGraph(e)
    }
}

/// Run `id` over `input`, producing the complete step sequence.
///
/// The input is validated first; runners themselves never fail, so the
/// result is always a playable sequence once this returns `Ok`.
pub fn run(id: AlgorithmId, input: &RunInput) -> Result<Vec<Step>, RunnerError> {
    let mismatch = || RunnerError::InputMismatch {
        algorithm: id.name(),
        expected: id.family().input_name(),
    };

    match id.family() {
        Family::Sorting => {
            let RunInput::Array(values) = input else {
                return Err(mismatch());
            };
            let sort: sorting::SortFn = match id {
                AlgorithmId::BubbleSort => sorting::bubble_sort,
                AlgorithmId::CocktailSort => sorting::cocktail_sort,
                AlgorithmId::GnomeSort => sorting::gnome_sort,
                AlgorithmId::CombSort => sorting::comb_sort,
                AlgorithmId::OddEvenSort => sorting::odd_even_sort,
                AlgorithmId::InsertionSort => sorting::insertion_sort,
                AlgorithmId::ShellSort => sorting::shell_sort,
                AlgorithmId::SelectionSort => sorting::selection_sort,
                AlgorithmId::PancakeSort => sorting::pancake_sort,
                AlgorithmId::StoogeSort => sorting::stooge_sort,
                AlgorithmId::MergeSort => sorting::merge_sort,
                AlgorithmId::QuickSort => sorting::quick_sort,
                AlgorithmId::BucketSort => sorting::bucket_sort,
                _ => return Err(mismatch()),
            };
            Ok(sorting::run_sort(sort, values))
        }
        Family::Searching => {
            let RunInput::Search { values, target } = input else {
                return Err(mismatch());
            };
            Ok(match id {
                AlgorithmId::LinearSearch => searching::linear_search(values, *target),
                _ => searching::binary_search(values, *target),
            })
        }
        Family::Mst => {
            let RunInput::Graph { graph, .. } = input else {
                return Err(mismatch());
            };
            graph.validate_undirected()?;
            Ok(match id {
                AlgorithmId::Kruskal => mst::kruskal(graph),
                AlgorithmId::ReverseDelete => mst::reverse_delete(graph),
                AlgorithmId::Boruvka => mst::boruvka(graph),
                _ => mst::prim(graph),
            })
        }
        Family::Pathfinding => {
            let RunInput::Graph { graph, start, end } = input else {
                return Err(mismatch());
            };
            graph.validate()?;
            let (start, end) = resolve_endpoints(graph, start, end)?;
            Ok(match id {
                AlgorithmId::Dijkstra => pathfinding::dijkstra(graph, &start, &end),
                _ => pathfinding::a_star(graph, &start, &end),
            })
        }
        Family::Traversal => {
            let RunInput::Graph { graph, start, .. } = input else {
                return Err(mismatch());
            };
            graph.validate()?;
            let start = resolve_start(graph, start)?;
            Ok(match id {
                AlgorithmId::Dfs => traversal::depth_first_search(graph, &start),
                AlgorithmId::Bfs => traversal::breadth_first_search(graph, &start),
                AlgorithmId::TopologicalSort => traversal::topological_sort(graph),
                AlgorithmId::KosarajuScc => traversal::kosaraju_scc(graph),
                AlgorithmId::TarjanScc => traversal::tarjan_scc(graph),
                AlgorithmId::CycleDirected => traversal::detect_cycle_directed(graph),
                _ => traversal::detect_cycle_undirected(graph),
            })
        }
        Family::Matching => {
            let RunInput::Text { text, pattern } = input else {
                return Err(mismatch());
            };
            Ok(match id {
                AlgorithmId::NaiveMatch => matching::naive_match(text, pattern),
                AlgorithmId::Kmp => matching::kmp_match(text, pattern),
                _ => matching::boyer_moore_match(text, pattern),
            })
        }
    }
}

/// Default the start node to the first node; reject unknown ids.
fn resolve_start(graph: &GraphData, start: &Option<String>) -> Result<String, RunnerError> {
    match start {
        Some(id) => {
            if graph.node(id).is_none() {
                return Err(GraphError::UnknownNode { node: id.clone() }.into());
            }
            Ok(id.clone())
        }
        None => Ok(graph.nodes.first().map(|n| n.id.clone()).unwrap_or_default()),
    }
}

/// Default start/end to the first and last nodes; reject unknown ids.
fn resolve_endpoints(
    graph: &GraphData,
    start: &Option<String>,
    end: &Option<String>,
) -> Result<(String, String), RunnerError> {
    let start = resolve_start(graph, start)?;
    let end = match end {
        Some(id) => {
            if graph.node(id).is_none() {
                return Err(GraphError::UnknownNode { node: id.clone() }.into());
            }
            id.clone()
        }
        None => graph.nodes.last().map(|n| n.id.clone()).unwrap_or_default(),
    };
    Ok((start, end))
}
