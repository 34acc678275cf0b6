//! Domain data for the visualizer
//!
//! - [`element`]: sorting-array elements with stable identities
//! - [`graph`]: nodes, weighted edges, and graph validation
//! - [`union_find`]: disjoint sets for MST cycle detection

pub mod element;
pub mod graph;
pub mod union_find;

pub use element::{make_elements, Element};
pub use graph::{Edge, GraphData, GraphError, Node};
pub use union_find::UnionFind;
