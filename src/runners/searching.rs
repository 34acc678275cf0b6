//! Searching runners: linear scan and binary search
//!
//! One Probe step per comparison against the target.  Binary search also
//! emits an Eliminate step after every probe, recording the half of the
//! remaining range it discarded.

use crate::step::{SearchStep, SearchStepKind, Step};

fn probe_step(
    values: &[i32],
    target: i32,
    index: usize,
    visited: &[usize],
    eliminated: &[usize],
    description: String,
) -> Step {
    let mut step = SearchStep::new(SearchStepKind::Probe, values.to_vec(), target, description);
    step.probe = Some(index);
    step.visited = visited.to_vec();
    step.eliminated = eliminated.to_vec();
    Step::Search(step)
}

fn found_step(
    values: &[i32],
    target: i32,
    index: usize,
    visited: &[usize],
    eliminated: &[usize],
    comparisons: usize,
) -> Step {
    let mut step = SearchStep::new(
        SearchStepKind::Found,
        values.to_vec(),
        target,
        format!(
            "Found {} at index {} after {} comparison(s)",
            target, index, comparisons
        ),
    );
    step.found = Some(index);
    step.visited = visited.to_vec();
    step.eliminated = eliminated.to_vec();
    step.is_major = true;
    Step::Search(step)
}

fn not_found_step(
    values: &[i32],
    target: i32,
    visited: &[usize],
    eliminated: &[usize],
    comparisons: usize,
) -> Step {
    let mut step = SearchStep::new(
        SearchStepKind::NotFound,
        values.to_vec(),
        target,
        format!(
            "{} is not in the array; {} comparison(s) exhausted every candidate",
            target, comparisons
        ),
    );
    step.visited = visited.to_vec();
    step.eliminated = eliminated.to_vec();
    step.is_major = true;
    Step::Search(step)
}

/// Linear search: compare every slot left to right until the target appears.
pub fn linear_search(values: &[i32], target: i32) -> Vec<Step> {
    let mut steps = Vec::new();
    let mut visited: Vec<usize> = Vec::new();
    let mut comparisons = 0usize;

    steps.push(Step::Search(SearchStep::new(
        SearchStepKind::Start,
        values.to_vec(),
        target,
        format!(
            "Linear search for {} across {} element(s)",
            target,
            values.len()
        ),
    )));

    for (i, &value) in values.iter().enumerate() {
        comparisons += 1;
        steps.push(probe_step(
            values,
            target,
            i,
            &visited,
            &[],
            format!("Comparing value {} at index {} with {}", value, i, target),
        ));
        if value == target {
            steps.push(found_step(values, target, i, &visited, &[], comparisons));
            return steps;
        }
        visited.push(i);
    }

    steps.push(not_found_step(values, target, &visited, &[], comparisons));
    steps
}

/// Binary search: probe the midpoint of the remaining range, discard the
/// half that cannot hold the target.
///
/// The input is sorted into a working copy first; every snapshot shows that
/// sorted array.
pub fn binary_search(values: &[i32], target: i32) -> Vec<Step> {
    let mut values = values.to_vec();
    values.sort();

    let mut steps = Vec::new();
    let mut visited: Vec<usize> = Vec::new();
    let mut eliminated: Vec<usize> = Vec::new();
    let mut comparisons = 0usize;

    steps.push(Step::Search(SearchStep::new(
        SearchStepKind::Start,
        values.clone(),
        target,
        format!(
            "Binary search for {}: the {} element(s) are probed in sorted order",
            target,
            values.len()
        ),
    )));

    let mut lo = 0usize;
    let mut hi = values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        comparisons += 1;
        steps.push(probe_step(
            &values,
            target,
            mid,
            &visited,
            &eliminated,
            format!(
                "Probing the midpoint: value {} at index {} against {}",
                values[mid], mid, target
            ),
        ));
        if values[mid] == target {
            steps.push(found_step(
                &values,
                target,
                mid,
                &visited,
                &eliminated,
                comparisons,
            ));
            return steps;
        }
        visited.push(mid);

        let description = if values[mid] < target {
            eliminated.extend(lo..=mid);
            lo = mid + 1;
            format!("{} is too small; everything at or left of it goes", values[mid])
        } else {
            eliminated.extend(mid..hi);
            hi = mid;
            format!("{} is too large; everything at or right of it goes", values[mid])
        };

        let mut step = SearchStep::new(
            SearchStepKind::Eliminate,
            values.clone(),
            target,
            description,
        );
        step.visited = visited.clone();
        step.eliminated = eliminated.clone();
        step.is_major = comparisons == 1;
        steps.push(Step::Search(step));
    }

    steps.push(not_found_step(
        &values,
        target,
        &visited,
        &eliminated,
        comparisons,
    ));
    steps
}
