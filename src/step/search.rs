//! Steps emitted by the searching runners (linear and binary search)

/// What a searching step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStepKind {
    Start,
    /// One comparison of an array slot against the target.
    Probe,
    /// Binary search discarded half of the remaining range.
    Eliminate,
    /// The target was found.
    Found,
    /// Every candidate was exhausted without a match.
    NotFound,
}

/// One snapshot of searching progress.
///
/// `values` is the array the run actually probes (binary search works on a
/// sorted copy of the input), carried on every step so any position can be
/// redrawn on its own.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStep {
    pub kind: SearchStepKind,
    pub values: Vec<i32>,
    pub target: i32,
    /// Index under comparison (Probe steps).
    pub probe: Option<usize>,
    /// Indices already compared and ruled out individually.
    pub visited: Vec<usize>,
    /// Indices discarded wholesale by binary search's halving.
    pub eliminated: Vec<usize>,
    /// Where the target was found, once it has been.
    pub found: Option<usize>,
    pub is_major: bool,
    pub description: String,
}

impl SearchStep {
    pub fn new(
        kind: SearchStepKind,
        values: Vec<i32>,
        target: i32,
        description: impl Into<String>,
    ) -> Self {
        SearchStep {
            kind,
            values,
            target,
            probe: None,
            visited: Vec::new(),
            eliminated: Vec::new(),
            found: None,
            is_major: false,
            description: description.into(),
        }
    }
}
