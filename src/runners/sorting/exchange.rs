//! Exchange sorts: bubble, cocktail, gnome, comb, odd-even

use super::SortRun;
use crate::step::{SortStep, SortStepKind};

/// Bubble sort with the no-swap early exit.
///
/// A pass with no swaps proves no inversions remain, so the early-exit step
/// marks the entire array sorted.
pub fn bubble_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    for i in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - 1 - i {
            let (a, b) = (run.value(j), run.value(j + 1));
            let message = if run.comparisons == 0 {
                format!(
                    "In bubble sort, we compare consecutive elements like {} and {}",
                    a, b
                )
            } else {
                format!("Comparing {} and {}", a, b)
            };
            run.compare(j, j + 1, message);

            if a > b {
                swapped = true;
                run.swap(j, j + 1, format!("Swapped {} and {}", a, b));
            }
        }

        run.mark_sorted(n - 1 - i);
        let settled = run.value(n - 1 - i);
        let step = run.push(
            SortStepKind::InformSorted,
            format!("Element {} is now in its final position", settled),
        );
        step.is_major = i < 4.min(n - 1);

        if !swapped {
            run.mark_all_sorted();
            let step = run.push(
                SortStepKind::InformSorted,
                "No swaps in this pass, so the array is already sorted!",
            );
            step.is_major = true;
            break;
        }
    }

    run.complete();
    run.steps
}

/// Cocktail shaker sort: bubble passes alternating direction.
pub fn cocktail_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let mut start = 0usize;
    let mut end = run.len() - 1;
    let mut swapped = true;

    while swapped && start < end {
        swapped = false;

        // Forward pass bubbles the largest remaining value to `end`.
        for j in start..end {
            let (a, b) = (run.value(j), run.value(j + 1));
            run.compare(j, j + 1, format!("Comparing {} and {} (forward pass)", a, b));
            if a > b {
                run.swap(j, j + 1, format!("Swapped {} and {}", a, b));
                swapped = true;
            }
        }
        run.mark_sorted(end);
        run.push(
            SortStepKind::InformSorted,
            format!("Element {} settled at the right end", run.value(end)),
        );

        if !swapped {
            break;
        }
        end -= 1;
        swapped = false;

        // Backward pass bubbles the smallest remaining value to `start`.
        for j in (start..=end).rev() {
            if j == 0 {
                break;
            }
            let (a, b) = (run.value(j - 1), run.value(j));
            run.compare(j - 1, j, format!("Comparing {} and {} (backward pass)", a, b));
            if a > b {
                run.swap(j - 1, j, format!("Swapped {} and {}", a, b));
                swapped = true;
            }
        }
        run.mark_sorted(start);
        run.push(
            SortStepKind::InformSorted,
            format!("Element {} settled at the left end", run.value(start)),
        );
        start += 1;
    }

    run.complete();
    run.steps
}

/// Gnome sort: walk forward, swap backward on inversion.
pub fn gnome_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();
    let mut pos = 0usize;

    while pos < n {
        if pos == 0 {
            pos += 1;
            continue;
        }
        let (a, b) = (run.value(pos - 1), run.value(pos));
        run.compare(pos - 1, pos, format!("Comparing {} and {}", a, b));
        if a <= b {
            pos += 1;
        } else {
            run.swap(
                pos - 1,
                pos,
                format!("Swapped {} and {}, stepping back", a, b),
            );
            pos -= 1;
        }
    }

    run.complete();
    run.steps
}

/// Comb sort: bubble passes with a shrinking gap (shrink factor 1.3).
pub fn comb_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();
    let mut gap = n;
    let mut swapped = true;

    while gap > 1 || swapped {
        gap = (gap * 10 / 13).max(1);
        swapped = false;

        let step = run.push(
            SortStepKind::GapInfo,
            format!("Comparing elements {} positions apart", gap),
        );
        step.is_major = gap == n * 10 / 13;

        for i in 0..n - gap {
            let (a, b) = (run.value(i), run.value(i + gap));
            run.compare(i, i + gap, format!("Comparing {} and {} (gap {})", a, b, gap));
            if a > b {
                run.swap(i, i + gap, format!("Swapped {} and {}", a, b));
                swapped = true;
            }
        }
    }

    run.complete();
    run.steps
}

/// Odd-even (brick) sort: alternate odd and even adjacent phases.
pub fn odd_even_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();
    let mut sorted = false;

    while !sorted {
        sorted = true;

        for phase in [1usize, 0usize] {
            let name = if phase == 1 { "odd" } else { "even" };
            let mut j = phase;
            while j + 1 < n {
                let (a, b) = (run.value(j), run.value(j + 1));
                run.compare(j, j + 1, format!("Comparing {} and {} ({} phase)", a, b, name));
                if a > b {
                    run.swap(j, j + 1, format!("Swapped {} and {}", a, b));
                    sorted = false;
                }
                j += 2;
            }
        }
    }

    run.push(
        SortStepKind::InformSorted,
        "A full round with no swaps: the array is sorted",
    );

    run.complete();
    run.steps
}
