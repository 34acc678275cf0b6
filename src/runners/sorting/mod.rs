//! Comparison-sort runners
//!
//! Each runner walks its textbook algorithm to completion over an owned
//! working copy of the input, pushing one [`SortStep`] per comparison and one
//! per swap/move (plus the algorithm's structural steps: gap changes, pivots,
//! divides, merges, flips, bucket routing), and a final `InformCompleted`
//! step with every index marked sorted.
//!
//! Runners are pure: no I/O, no timing, no shared state.  Empty and
//! single-element inputs produce a single completion step.

mod bucket;
mod exchange;
mod insertion;
mod merge;
mod quick;
mod selection;

use crate::model::{make_elements, Element};
use crate::step::{SortStep, SortStepKind, Step};

pub use bucket::bucket_sort;
pub use exchange::{bubble_sort, cocktail_sort, comb_sort, gnome_sort, odd_even_sort};
pub use insertion::{insertion_sort, shell_sort};
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::{pancake_sort, selection_sort, stooge_sort};

/// Shared working state for a sorting run.
///
/// Owns the working array and the flags that get stamped onto every
/// snapshot, so individual algorithms only describe their own structure.
pub(crate) struct SortRun {
    array: Vec<Element>,
    sorted: Vec<bool>,
    depths: Vec<usize>,
    pivot: Option<usize>,
    pub steps: Vec<SortStep>,
    pub comparisons: usize,
    pub swaps: usize,
}

impl SortRun {
    pub fn new(values: &[i32]) -> Self {
        let array = make_elements(values);
        let n = array.len();
        SortRun {
            array,
            sorted: vec![false; n],
            depths: vec![0; n],
            pivot: None,
            steps: Vec::new(),
            comparisons: 0,
            swaps: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn value(&self, i: usize) -> i32 {
        self.array[i].value
    }

    /// Full owned snapshot with the current flags applied.
    fn snapshot(&self) -> Vec<Element> {
        self.array
            .iter()
            .enumerate()
            .map(|(i, el)| Element {
                is_sorted: self.sorted[i],
                is_pivot: self.pivot == Some(i),
                depth: self.depths[i],
                ..*el
            })
            .collect()
    }

    fn sorted_indices(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.sorted[i]).collect()
    }

    /// Push a step built from the current snapshot.  Returns the step so the
    /// caller can fill in the indices it is about.
    pub fn push(&mut self, kind: SortStepKind, message: impl Into<String>) -> &mut SortStep {
        let mut step = SortStep::new(kind, self.snapshot(), message);
        step.sorted = self.sorted_indices();
        self.steps.push(step);
        let last = self.steps.len() - 1;
        &mut self.steps[last]
    }

    /// Record a comparison between indices `i` and `j`.
    pub fn compare(&mut self, i: usize, j: usize, message: impl Into<String>) {
        self.comparisons += 1;
        let major = self.comparisons == 1;
        let step = self.push(SortStepKind::Comparison, message);
        step.comparing = vec![i, j];
        step.is_major = major;
    }

    /// Record a comparison that happens outside the working array (bucket
    /// contents); counted but without index highlights.
    pub fn compare_offstage(&mut self, message: impl Into<String>) {
        self.comparisons += 1;
        self.push(SortStepKind::Comparison, message);
    }

    /// Swap indices `i` and `j` and record it.
    pub fn swap(&mut self, i: usize, j: usize, message: impl Into<String>) {
        self.array.swap(i, j);
        self.swaps += 1;
        let major = self.swaps == 1;
        let step = self.push(SortStepKind::Swapping, message);
        step.swapping = vec![i, j];
        step.is_major = major;
    }

    pub fn mark_sorted(&mut self, i: usize) {
        self.sorted[i] = true;
    }

    pub fn mark_all_sorted(&mut self) {
        self.sorted.iter_mut().for_each(|s| *s = true);
    }

    pub fn set_pivot(&mut self, pivot: Option<usize>) {
        self.pivot = pivot;
    }

    pub fn set_depth(&mut self, lo: usize, hi: usize, depth: usize) {
        self.depths[lo..=hi].iter_mut().for_each(|d| *d = depth);
    }

    /// Overwrite position `i` with an element (shift/placement moves that are
    /// not plain swaps: merge writes, bucket reconstruction).
    pub fn place(&mut self, i: usize, el: Element) {
        self.array[i] = el;
    }

    pub fn element(&self, i: usize) -> Element {
        self.array[i]
    }

    /// Emit the terminal step: everything sorted, totals in the message.
    pub fn complete(&mut self) {
        self.mark_all_sorted();
        let message = format!(
            "Sorting complete! {} comparisons, {} swaps",
            self.comparisons, self.swaps
        );
        let step = self.push(SortStepKind::InformCompleted, message);
        step.is_major = true;
    }
}

/// Steps for inputs too small to sort (empty or one element).
fn trivial_steps(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    run.mark_all_sorted();
    let message = if values.is_empty() {
        "The array is empty, so there is nothing to sort".to_string()
    } else {
        "A single element is already sorted".to_string()
    };
    let step = run.push(SortStepKind::InformCompleted, message);
    step.is_major = true;
    run.steps
}

/// The sorting algorithms the registry can dispatch to.
pub(crate) type SortFn = fn(&[i32]) -> Vec<SortStep>;

/// Run `sort` over `values`, wrapping the result for playback.
///
/// Every run opens with a non-counting `Initial` snapshot of the input, so
/// stepping to position 0 shows the unsorted array before the first
/// comparison.  Inputs with fewer than two elements short-circuit to a single
/// completion step without invoking the algorithm.
pub fn run_sort(sort: fn(&[i32]) -> Vec<SortStep>, values: &[i32]) -> Vec<Step> {
    if values.len() <= 1 {
        return trivial_steps(values).into_iter().map(Step::Sort).collect();
    }
    let mut opening = SortRun::new(values);
    let step = opening.push(
        SortStepKind::Initial,
        format!("Starting with {} unsorted elements", values.len()),
    );
    step.is_major = true;
    let mut steps = opening.steps;
    steps.extend(sort(values));
    steps.into_iter().map(Step::Sort).collect()
}
