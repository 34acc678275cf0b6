//! Steps emitted by the comparison-sort runners

use crate::model::Element;

/// What a sorting step represents, for counting and coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStepKind {
    /// Opening snapshot of the unsorted input.
    Initial,
    Comparison,
    Swapping,
    InformSorted,
    InformCompleted,
    /// Gap change in shell/comb sort.
    GapInfo,
    /// Prefix reversal in pancake sort.
    Flip,
    /// Element routed to a bucket (bucket sort).
    BucketAssign,
    /// Array rebuilt from buckets (bucket sort).
    Reconstruct,
    Partition,
    Pivot,
    Merge,
    Divide,
}

/// One snapshot of sorting progress.
///
/// `array` is a complete owned copy of the working array at this instant,
/// never a shared reference to live state, so any historical step can be
/// redrawn without re-running the algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct SortStep {
    pub kind: SortStepKind,
    pub array: Vec<Element>,
    /// Indices being compared.
    pub comparing: Vec<usize>,
    /// Indices being swapped or moved.
    pub swapping: Vec<usize>,
    /// Indices being merged (merge sort).
    pub merging: Vec<usize>,
    /// Indices known to be in final position.
    pub sorted: Vec<usize>,
    /// Pivot index (partitioning sorts).
    pub pivot: Option<usize>,
    /// Recursion depth of the active sub-range.
    pub depth: usize,
    /// First-of-its-kind steps are flagged so the UI can dwell on them.
    pub is_major: bool,
    pub message: String,
}

impl SortStep {
    pub fn new(kind: SortStepKind, array: Vec<Element>, message: impl Into<String>) -> Self {
        SortStep {
            kind,
            array,
            comparing: Vec::new(),
            swapping: Vec::new(),
            merging: Vec::new(),
            sorted: Vec::new(),
            pivot: None,
            depth: 0,
            is_major: false,
            message: message.into(),
        }
    }
}
