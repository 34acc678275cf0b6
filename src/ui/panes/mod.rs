//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`bars`]: Sorting visualization, one bar per array element
//! - [`search`]: Searching visualization, dimming eliminated slots
//! - [`graph`]: Graph canvas for MST, pathfinding, and traversal runs, plus
//!   the tentative-distance table shown during pathfinding
//! - [`matching`]: Text/pattern alignment for the string-matching runs
//! - [`narrative`]: Step commentary log and the derived counters
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane module exports a primary `render_*_pane()` function.  Render
//! functions are stateless: they take a frame, an area, and borrowed data.

pub mod bars;
pub mod graph;
pub mod matching;
pub mod narrative;
pub mod search;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use graph::{render_distances_pane, render_graph_pane};
pub use matching::render_matching_pane;
pub use narrative::render_narrative_pane;
pub use search::render_search_pane;
pub use status::render_status_bar;
