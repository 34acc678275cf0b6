//! Selection-family sorts: selection, pancake, stooge

use super::SortRun;
use crate::step::{SortStep, SortStepKind};

/// Selection sort: scan for the minimum, swap it into place.
pub fn selection_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    for i in 0..n - 1 {
        let mut min = i;

        for j in i + 1..n {
            run.compare(
                min,
                j,
                format!(
                    "Is {} smaller than the current minimum {}?",
                    run.value(j),
                    run.value(min)
                ),
            );
            if run.value(j) < run.value(min) {
                min = j;
            }
        }

        if min != i {
            let smallest = run.value(min);
            run.swap(i, min, format!("Swapped {} into position {}", smallest, i));
        }
        run.mark_sorted(i);
        let step = run.push(
            SortStepKind::InformSorted,
            format!("Element {} is now in its final position", run.value(i)),
        );
        step.is_major = i == 0;
    }

    run.mark_sorted(n - 1);
    run.complete();
    run.steps
}

/// Pancake sort: bring the maximum of each prefix to the front, then flip it
/// to the back of the unsorted range.  Each flip is one `Flip` step.
pub fn pancake_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    for size in (2..=n).rev() {
        // Linear scan for the maximum of the unsorted prefix.
        let mut max = 0;
        for j in 1..size {
            run.compare(
                max,
                j,
                format!("Looking for the largest of the first {} elements", size),
            );
            if run.value(j) > run.value(max) {
                max = j;
            }
        }

        if max != size - 1 {
            if max != 0 {
                flip(&mut run, max + 1);
            }
            flip(&mut run, size);
        }
        run.mark_sorted(size - 1);
        run.push(
            SortStepKind::InformSorted,
            format!("Element {} flipped into its final position", run.value(size - 1)),
        );
    }

    run.mark_sorted(0);
    run.complete();
    run.steps
}

/// Reverse the first `count` elements and record the flip.
fn flip(run: &mut SortRun, count: usize) {
    let mut lo = 0;
    let mut hi = count - 1;
    while lo < hi {
        let a = run.element(lo);
        let b = run.element(hi);
        run.place(lo, b);
        run.place(hi, a);
        lo += 1;
        hi -= 1;
    }
    run.swaps += 1;
    let major = run.swaps == 1;
    let step = run.push(
        SortStepKind::Flip,
        format!("Flipped the first {} elements", count),
    );
    step.swapping = (0..count).collect();
    step.is_major = major;
}

/// Stooge sort driven by an explicit work stack instead of recursion, so
/// stack depth stays bounded for any input size.
pub fn stooge_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    let mut work: Vec<(usize, usize, usize)> = vec![(0, n - 1, 0)];
    while let Some((l, h, depth)) = work.pop() {
        if l >= h {
            continue;
        }
        run.set_depth(l, h, depth);

        let (a, b) = (run.value(l), run.value(h));
        let message = if depth == 0 {
            format!(
                "Start stooge sort on range [{}, {}] by comparing {} and {}",
                l, h, a, b
            )
        } else {
            format!("Compare {} and {} in recursive step", a, b)
        };
        run.compare(l, h, message);
        if a > b {
            run.swap(l, h, format!("Swapped {} and {}", a, b));
        }

        if h - l + 1 > 2 {
            let t = (h - l + 1) / 3;
            // Pushed in reverse so the first two-thirds sorts first.
            work.push((l, h - t, depth + 1));
            work.push((l + t, h, depth + 1));
            work.push((l, h - t, depth + 1));
        }
    }

    run.complete();
    run.steps
}
