//! # Introduction
//!
//! Algoscope runs a classic algorithm to completion up front, recording one
//! self-describing step per comparison, swap, visit, or decision.  The step
//! sequence is then navigated forward and backward through a terminal UI
//! built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Runner → Steps → Playback ↔ Projection → TUI
//! ```
//!
//! 1. [`model`] — the data the runners operate on: array elements, graphs,
//!    and a union-find used by the MST algorithms.
//! 2. [`step`] — the per-family step records unified by [`step::Step`].
//! 3. [`runners`] — pure algorithm implementations; the
//!    [`runners::AlgorithmId`] registry validates names and dispatches.
//! 4. [`playback`] — cursor and auto-play timer over a loaded run.
//! 5. [`project`] — derives the counters and highlights shown by the UI
//!    from the step prefix.
//! 6. [`datagen`] — seeded input generation for reproducible runs.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Algorithms
//!
//! Sorting: bubble, cocktail, gnome, comb, odd-even, insertion, shell,
//! selection, pancake, stooge, merge, quick, bucket.
//! Searching: linear, binary.
//! MST: Kruskal, reverse-delete, Borůvka, Prim.
//! Pathfinding: Dijkstra, A*.
//! Traversal: DFS, BFS, topological sort, Kosaraju SCC, Tarjan SCC,
//! directed and undirected cycle detection.
//! String matching: naive, Knuth-Morris-Pratt, Boyer-Moore.

pub mod datagen;
pub mod model;
pub mod playback;
pub mod project;
pub mod runners;
pub mod step;
pub mod ui;
