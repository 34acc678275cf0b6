//! Bucket sort with bucket-assignment and reconstruction steps

use super::SortRun;
use crate::model::Element;
use crate::step::{SortStep, SortStepKind};

/// Bucket sort over `ceil(sqrt(n))` equal-width value ranges.
///
/// Distribution emits one `BucketAssign` step per element; each bucket is
/// then sorted (stable, by value) and written back with one `Reconstruct`
/// step per placement, marking positions sorted as they are filled.
pub fn bucket_sort(values: &[i32]) -> Vec<SortStep> {
    let mut run = SortRun::new(values);
    let n = run.len();

    let min = values.iter().copied().min().unwrap_or(0);
    let max = values.iter().copied().max().unwrap_or(0);
    let bucket_count = (n as f64).sqrt().ceil() as usize;
    let range = (max - min + 1) as f64 / bucket_count as f64;

    let mut buckets: Vec<Vec<Element>> = vec![Vec::new(); bucket_count];

    for i in 0..n {
        let el = run.element(i);
        let mut b = ((el.value - min) as f64 / range) as usize;
        if b >= bucket_count {
            b = bucket_count - 1;
        }
        buckets[b].push(el);

        let step = run.push(
            SortStepKind::BucketAssign,
            format!("Assign value {} to bucket {}", el.value, b),
        );
        step.comparing = vec![i];
        step.is_major = i == 0;
    }

    // Within-bucket ordering: insertion sort on the bucket contents, with
    // each comparison counted.  The working array is untouched until
    // reconstruction, so these steps carry no index highlights.
    for (b, bucket) in buckets.iter_mut().enumerate() {
        for i in 1..bucket.len() {
            let mut j = i;
            while j > 0 {
                run.compare_offstage(format!(
                    "Bucket {}: comparing {} and {}",
                    b,
                    bucket[j - 1].value,
                    bucket[j].value
                ));
                if bucket[j - 1].value > bucket[j].value {
                    bucket.swap(j - 1, j);
                    j -= 1;
                } else {
                    break;
                }
            }
        }
    }

    let mut idx = 0;
    for (b, bucket) in buckets.iter().enumerate() {
        for el in bucket {
            run.place(idx, *el);
            run.mark_sorted(idx);
            let step = run.push(
                SortStepKind::Reconstruct,
                format!("Bucket {} yields {} at position {}", b, el.value, idx),
            );
            step.merging = vec![idx];
            idx += 1;
        }
    }

    run.complete();
    run.steps
}
