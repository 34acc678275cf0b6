// Integration tests for the sorting runners

use algoscope::project;
use algoscope::runners::{self, AlgorithmId, RunInput};
use algoscope::step::{SortStepKind, Step};

const SORTS: [AlgorithmId; 13] = [
    AlgorithmId::BubbleSort,
    AlgorithmId::CocktailSort,
    AlgorithmId::GnomeSort,
    AlgorithmId::CombSort,
    AlgorithmId::OddEvenSort,
    AlgorithmId::InsertionSort,
    AlgorithmId::ShellSort,
    AlgorithmId::SelectionSort,
    AlgorithmId::PancakeSort,
    AlgorithmId::StoogeSort,
    AlgorithmId::MergeSort,
    AlgorithmId::QuickSort,
    AlgorithmId::BucketSort,
];

fn run_sort(id: AlgorithmId, values: &[i32]) -> Vec<Step> {
    runners::run(id, &RunInput::Array(values.to_vec())).expect("sort run failed")
}

fn sort_step(step: &Step) -> &algoscope::step::SortStep {
    match step {
        Step::Sort(s) => s,
        other => panic!("expected a sort step, got {:?}", other),
    }
}

fn array_values(step: &Step) -> Vec<i32> {
    sort_step(step).array.iter().map(|el| el.value).collect()
}

#[test]
fn test_every_sort_produces_sorted_output() {
    let values = [5, 3, 8, 1, 9, 2, 7, 4, 6, 2];
    let mut expected = values.to_vec();
    expected.sort();

    for id in SORTS {
        let steps = run_sort(id, &values);
        let last = steps.last().expect("run produced no steps");
        assert_eq!(
            array_values(last),
            expected,
            "{} did not sort the array",
            id.name()
        );
    }
}

#[test]
fn test_every_sort_preserves_the_multiset() {
    let values = [9, 9, 1, 4, 4, 4, 7];

    for id in SORTS {
        let steps = run_sort(id, &values);
        let mut result = array_values(steps.last().expect("run produced no steps"));
        result.sort();
        assert_eq!(
            result,
            [1, 4, 4, 4, 7, 9, 9],
            "{} lost or duplicated elements",
            id.name()
        );
    }
}

#[test]
fn test_swap_sorts_preserve_the_multiset_mid_run() {
    // Merge and bucket sort stage elements outside the array while placing,
    // so only the pure swap-based sorts keep every snapshot a permutation.
    let values = [9, 9, 1, 4, 4, 4, 7];
    let swap_sorts = [
        AlgorithmId::BubbleSort,
        AlgorithmId::CocktailSort,
        AlgorithmId::GnomeSort,
        AlgorithmId::CombSort,
        AlgorithmId::OddEvenSort,
        AlgorithmId::InsertionSort,
        AlgorithmId::ShellSort,
        AlgorithmId::SelectionSort,
        AlgorithmId::PancakeSort,
        AlgorithmId::StoogeSort,
        AlgorithmId::QuickSort,
    ];

    for id in swap_sorts {
        let steps = run_sort(id, &values);
        for step in &steps {
            let mut snapshot = array_values(step);
            snapshot.sort();
            assert_eq!(
                snapshot,
                [1, 4, 4, 4, 7, 9, 9],
                "{} lost or duplicated elements mid-run",
                id.name()
            );
        }
    }
}

#[test]
fn test_every_sort_ends_with_completion_step() {
    let values = [3, 1, 2];

    for id in SORTS {
        let steps = run_sort(id, &values);
        let last = sort_step(steps.last().expect("run produced no steps"));
        assert_eq!(last.kind, SortStepKind::InformCompleted, "{}", id.name());
        assert_eq!(
            last.sorted,
            vec![0, 1, 2],
            "{} completion step must mark every index sorted",
            id.name()
        );
        assert!(last.array.iter().all(|el| el.is_sorted), "{}", id.name());
    }
}

#[test]
fn test_runs_are_deterministic() {
    let values = [4, 2, 7, 1, 6, 3];
    for id in SORTS {
        let first = run_sort(id, &values);
        let second = run_sort(id, &values);
        assert_eq!(first, second, "{} is not deterministic", id.name());
    }
}

#[test]
fn test_first_step_shows_the_unsorted_input() {
    let values = [5, 3, 8, 1];
    for id in SORTS {
        let steps = run_sort(id, &values);
        let first = steps.first().expect("run produced no steps");
        assert_eq!(
            sort_step(first).kind,
            SortStepKind::Initial,
            "{} must open with an input snapshot",
            id.name()
        );
        assert_eq!(
            array_values(first),
            values.to_vec(),
            "{} first snapshot must show the input order",
            id.name()
        );
        let opening = project::project(&steps, 0);
        assert_eq!(opening.comparisons, 0, "{}", id.name());
        assert_eq!(opening.swaps, 0, "{}", id.name());
    }
}

#[test]
fn test_bubble_sort_reference_trace() {
    let steps = run_sort(AlgorithmId::BubbleSort, &[5, 3, 8, 1]);

    let last = steps.last().expect("run produced no steps");
    assert_eq!(array_values(last), vec![1, 3, 5, 8]);

    let projection = project::project(&steps, steps.len() - 1);
    assert_eq!(projection.comparisons, 6);
    // Bubble sort's swap count equals the inversion count, and [5, 3, 8, 1]
    // has four inversions: (5,3), (5,1), (3,1), (8,1).
    assert_eq!(projection.swaps, 4);
    assert!(last.description().contains("6 comparisons"));
    assert!(last.description().contains("4 swaps"));
}

#[test]
fn test_bubble_sort_early_exit_on_sorted_input() {
    let steps = run_sort(AlgorithmId::BubbleSort, &[1, 2, 3, 4, 5]);

    // The first pass makes no swaps, so the run must end well short of the
    // quadratic worst case and announce the early exit.
    let projection = project::project(&steps, steps.len() - 1);
    assert_eq!(projection.comparisons, 4);
    assert_eq!(projection.swaps, 0);
    assert!(
        steps
            .iter()
            .any(|s| s.description().contains("No swaps in this pass")),
        "missing the early-exit explanation step"
    );
}

#[test]
fn test_empty_input_yields_single_completion_step() {
    for id in SORTS {
        let steps = run_sort(id, &[]);
        assert_eq!(steps.len(), 1, "{}", id.name());
        let only = sort_step(&steps[0]);
        assert_eq!(only.kind, SortStepKind::InformCompleted, "{}", id.name());
        assert!(only.array.is_empty(), "{}", id.name());
    }
}

#[test]
fn test_single_element_yields_single_completion_step() {
    for id in SORTS {
        let steps = run_sort(id, &[42]);
        assert_eq!(steps.len(), 1, "{}", id.name());
        let only = sort_step(&steps[0]);
        assert_eq!(only.kind, SortStepKind::InformCompleted, "{}", id.name());
        assert_eq!(array_values(&steps[0]), vec![42], "{}", id.name());
    }
}

#[test]
fn test_quick_sort_tags_pivot_and_partition() {
    let steps = run_sort(AlgorithmId::QuickSort, &[5, 3, 8, 1, 9, 2]);
    assert!(
        steps
            .iter()
            .any(|s| sort_step(s).kind == SortStepKind::Pivot && sort_step(s).pivot.is_some()),
        "quick sort must emit pivot steps"
    );
    assert!(
        steps
            .iter()
            .any(|s| sort_step(s).kind == SortStepKind::Partition),
        "quick sort must emit partition steps"
    );
}

#[test]
fn test_merge_sort_tags_depth_on_divides() {
    let steps = run_sort(AlgorithmId::MergeSort, &[6, 5, 4, 3, 2, 1, 0, 7]);
    let max_depth = steps
        .iter()
        .filter(|s| sort_step(s).kind == SortStepKind::Divide)
        .map(|s| sort_step(s).depth)
        .max()
        .expect("merge sort must emit divide steps");
    // Eight elements: the root divide is depth 0, pairs divide at depth 2.
    assert_eq!(max_depth, 2);
}

#[test]
fn test_shell_and_comb_announce_gap_changes() {
    for id in [AlgorithmId::ShellSort, AlgorithmId::CombSort] {
        let steps = run_sort(id, &[9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(
            steps
                .iter()
                .any(|s| sort_step(s).kind == SortStepKind::GapInfo),
            "{} must emit gap steps",
            id.name()
        );
    }
}

#[test]
fn test_pancake_flips_count_as_swaps() {
    let steps = run_sort(AlgorithmId::PancakeSort, &[3, 1, 2]);
    assert!(
        steps
            .iter()
            .any(|s| sort_step(s).kind == SortStepKind::Flip),
        "pancake sort must emit flip steps"
    );
    let projection = project::project(&steps, steps.len() - 1);
    assert!(projection.swaps > 0);
}

#[test]
fn test_array_input_is_required() {
    let err = runners::run(
        AlgorithmId::BubbleSort,
        &RunInput::Text {
            text: "abc".to_string(),
            pattern: "b".to_string(),
        },
    )
    .expect_err("sorting a text input must fail");
    assert!(err.to_string().contains("array"));
}
