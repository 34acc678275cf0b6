//! Quicksort with pivot/partition steps and an explicit work stack

use super::SortRun;
use crate::step::{SortStep, SortStepKind};

/// Lomuto-partition quicksort (pivot is the last element of the range).
///
/// The recursion is replaced by an explicit `(lo, hi, depth)` stack so stack
/// depth stays bounded regardless of pivot quality.
pub fn quick_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    let mut work: Vec<(usize, usize, usize)> = vec![(0, n - 1, 0)];
    while let Some((lo, hi, depth)) = work.pop() {
        if lo >= hi {
            if lo == hi {
                run.mark_sorted(lo);
            }
            continue;
        }

        run.set_depth(lo, hi, depth);
        let pivot_value = run.value(hi);
        run.set_pivot(Some(hi));

        let step = run.push(
            SortStepKind::Pivot,
            format!(
                "Choose pivot {} at index {} (depth {})",
                pivot_value, hi, depth
            ),
        );
        step.pivot = Some(hi);
        step.depth = depth;
        step.is_major = depth == 0;

        // Lomuto partition: everything smaller than the pivot moves left of i.
        let mut i = lo;
        for j in lo..hi {
            run.compare(j, hi, format!("Compare {} with pivot {}", run.value(j), pivot_value));
            if run.value(j) < pivot_value {
                if i != j {
                    run.swap(
                        i,
                        j,
                        format!("Moved {} left of the pivot", run.value(j)),
                    );
                }
                i += 1;
            }
        }

        if i != hi {
            run.swap(i, hi, format!("Moved pivot {} into position {}", pivot_value, i));
        }
        run.set_pivot(None);
        run.mark_sorted(i);

        let step = run.push(
            SortStepKind::Partition,
            format!("Pivot {} is now in its final position {}", pivot_value, i),
        );
        step.pivot = Some(i);
        step.depth = depth;

        // Right side first so the left side is processed next (LIFO).
        if i + 1 <= hi {
            work.push((i + 1, hi, depth + 1));
        }
        if i > lo {
            work.push((lo, i - 1, depth + 1));
        }
    }

    run.complete();
    run.steps
}
