//! Merge sort with divide/merge steps and recursion-depth tags

use super::SortRun;
use crate::step::{SortStep, SortStepKind};

/// Top-down merge sort.  Recursion depth is log-bounded, so the recursive
/// shape is kept; each split emits a `Divide` step and each placement during
/// the merge emits a `Merge` step.
pub fn merge_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();
    sort_range(&mut run, 0, n - 1, 0);
    run.complete();
    run.steps
}

fn sort_range(run: &mut SortRun, lo: usize, hi: usize, depth: usize) {
    if lo >= hi {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    run.set_depth(lo, hi, depth + 1);

    let step = run.push(
        SortStepKind::Divide,
        format!(
            "Dividing range [{}, {}] into [{}, {}] and [{}, {}]",
            lo, hi, lo, mid, mid + 1, hi
        ),
    );
    step.merging = (lo..=hi).collect();
    step.depth = depth;
    step.is_major = depth == 0;

    sort_range(run, lo, mid, depth + 1);
    sort_range(run, mid + 1, hi, depth + 1);
    merge(run, lo, mid, hi, depth);

    run.set_depth(lo, hi, depth);
}

/// Merge the sorted halves `[lo, mid]` and `[mid+1, hi]` back into place.
fn merge(run: &mut SortRun, lo: usize, mid: usize, hi: usize, depth: usize) {
    let left: Vec<_> = (lo..=mid).map(|i| run.element(i)).collect();
    let right: Vec<_> = (mid + 1..=hi).map(|i| run.element(i)).collect();

    let mut i = 0;
    let mut j = 0;
    let mut k = lo;

    while i < left.len() && j < right.len() {
        run.compare(
            lo + i,
            mid + 1 + j,
            format!("Comparing {} and {}", left[i].value, right[j].value),
        );
        let from_left = left[i].value <= right[j].value;
        let el = if from_left { left[i] } else { right[j] };
        run.place(k, el);
        if from_left {
            i += 1;
        } else {
            j += 1;
        }

        let step = run.push(
            SortStepKind::Merge,
            format!("Placed {} at position {}", el.value, k),
        );
        step.merging = vec![k];
        step.depth = depth;
        k += 1;
    }

    for el in left.iter().skip(i).chain(right.iter().skip(j)) {
        run.place(k, *el);
        let step = run.push(
            SortStepKind::Merge,
            format!("Placed remaining {} at position {}", el.value, k),
        );
        step.merging = vec![k];
        step.depth = depth;
        k += 1;
    }
}
