//! Insertion-family sorts: insertion, shell

use super::SortRun;
use crate::step::{SortStep, SortStepKind};

/// Insertion sort, realized as adjacent swaps so that every snapshot is a
/// real intermediate state of the array.
pub fn insertion_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    for i in 1..n {
        let key = run.value(i);
        let step = run.push(
            SortStepKind::Comparison,
            format!(
                "The current element {} is compared with the sorted prefix",
                key
            ),
        );
        step.comparing = vec![i - 1, i];
        step.is_major = i == 1;

        let mut j = i;
        while j > 0 {
            let (a, b) = (run.value(j - 1), run.value(j));
            run.compare(j - 1, j, format!("Comparing {} with {}", a, key));
            if a > b {
                run.swap(
                    j - 1,
                    j,
                    format!("Shifting {} right to make room for {}", a, key),
                );
                j -= 1;
            } else {
                break;
            }
        }

        let step = run.push(
            SortStepKind::InformSorted,
            format!("Inserted {} at position {}", key, j),
        );
        step.swapping = vec![j, i];
    }

    run.complete();
    run.steps
}

/// Shell sort with halving gaps, emitting a `GapInfo` step per gap change.
pub fn shell_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();
    let mut gap = n / 2;
    let mut first_gap = true;

    while gap > 0 {
        let step = run.push(
            SortStepKind::GapInfo,
            format!("Gapped insertion sort with gap {}", gap),
        );
        step.is_major = first_gap;
        first_gap = false;

        for i in gap..n {
            let key = run.value(i);
            let mut j = i;
            while j >= gap {
                let a = run.value(j - gap);
                run.compare(
                    j - gap,
                    j,
                    format!("Comparing {} and {} (gap {})", a, run.value(j), gap),
                );
                if a > run.value(j) {
                    run.swap(
                        j - gap,
                        j,
                        format!("Moved {} toward its gap-sorted position", key),
                    );
                    j -= gap;
                } else {
                    break;
                }
            }
        }

        gap /= 2;
    }

    run.complete();
    run.steps
}
