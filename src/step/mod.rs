//! The step model: immutable, self-describing snapshots of algorithm progress
//!
//! A step is one atomic unit of progress (a comparison, a swap, a visit, an
//! edge decision) plus human-readable text and enough owned state to redraw
//! the visualization at that instant.  Redrawing from step N never requires
//! step N-1: producers deep-copy every mutable container before attaching it.
//!
//! Each algorithm family has its own record; [`Step`] unifies them so the
//! playback controller and projector can treat a run generically.

pub mod matching;
pub mod mst;
pub mod path;
pub mod search;
pub mod sort;
pub mod trace;

pub use matching::{MatchStep, MatchStepKind};
pub use mst::{MstStep, MstStepKind};
pub use path::{PathStep, PathStepKind};
pub use search::{SearchStep, SearchStepKind};
pub use sort::{SortStep, SortStepKind};
pub use trace::{TraceStep, TraceState};

/// One step of any algorithm family.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Sort(SortStep),
    Search(SearchStep),
    Mst(MstStep),
    Path(PathStep),
    Trace(TraceStep),
    Match(MatchStep),
}

impl Step {
    /// The step's primary narrative text.
    pub fn description(&self) -> &str {
        match self {
            Step::Sort(s) => &s.message,
            Step::Search(s) => &s.description,
            Step::Mst(s) => &s.description,
            Step::Path(s) => &s.description,
            Step::Trace(s) => &s.description,
            Step::Match(s) => &s.description,
        }
    }

    /// Secondary narrative text, where the family has one.
    pub fn sub_description(&self) -> &str {
        match self {
            Step::Sort(_) | Step::Search(_) => "",
            Step::Mst(s) => &s.sub_description,
            Step::Path(s) => &s.sub_description,
            Step::Trace(s) => &s.details,
            Step::Match(_) => "",
        }
    }

    /// Whether this step contributes to the comparison counter.
    pub fn counts_comparison(&self) -> bool {
        match self {
            Step::Sort(s) => s.kind == SortStepKind::Comparison,
            Step::Search(s) => s.kind == SearchStepKind::Probe,
            Step::Match(s) => s.kind == MatchStepKind::Compare,
            _ => false,
        }
    }

    /// Whether this step contributes to the swap/move counter.
    pub fn counts_swap(&self) -> bool {
        match self {
            Step::Sort(s) => matches!(s.kind, SortStepKind::Swapping | SortStepKind::Flip),
            _ => false,
        }
    }

    /// Whether this step contributes to the explored/visited counter.
    pub fn counts_visit(&self) -> bool {
        match self {
            Step::Path(s) => s.kind == PathStepKind::Visit,
            Step::Trace(s) => s.state == Some(TraceState::Visited),
            Step::Mst(s) => s.kind == MstStepKind::Decision,
            _ => false,
        }
    }
}
