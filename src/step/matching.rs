//! Steps emitted by the string-matching runners (naive, KMP, Boyer-Moore)

/// What a matching step represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStepKind {
    Start,
    /// One character comparison.
    Compare,
    /// Window moved; `shift` records the decided skip distance.
    Shift,
    /// A full occurrence of the pattern was confirmed.
    Found,
    Complete,
}

/// One snapshot of string-matching progress.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStep {
    pub kind: MatchStepKind,
    /// Index in the text where the pattern window currently starts.
    pub window: usize,
    /// Index within the pattern being compared (Compare steps).
    pub pattern_index: usize,
    /// Absolute text index being compared (Compare steps).
    pub text_index: usize,
    /// Outcome of the comparison (Compare steps only).
    pub matched: Option<bool>,
    /// Start indices of all occurrences found so far.
    pub matches: Vec<usize>,
    /// How far the window moved (Shift steps); always at least 1.
    pub shift: usize,
    pub description: String,
}

impl MatchStep {
    pub fn new(kind: MatchStepKind, window: usize, description: impl Into<String>) -> Self {
        MatchStep {
            kind,
            window,
            pattern_index: 0,
            text_index: 0,
            matched: None,
            matches: Vec::new(),
            shift: 0,
            description: description.into(),
        }
    }
}
