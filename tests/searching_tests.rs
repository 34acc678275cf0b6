// Integration tests for the searching runners

use algoscope::project;
use algoscope::runners::{self, AlgorithmId, RunInput};
use algoscope::step::{SearchStep, SearchStepKind, Step};

fn run_search(id: AlgorithmId, values: &[i32], target: i32) -> Vec<Step> {
    runners::run(
        id,
        &RunInput::Search {
            values: values.to_vec(),
            target,
        },
    )
    .expect("search run failed")
}

fn search_step(step: &Step) -> &SearchStep {
    match step {
        Step::Search(s) => s,
        other => panic!("expected a search step, got {:?}", other),
    }
}

fn probes(steps: &[Step]) -> Vec<usize> {
    steps
        .iter()
        .map(search_step)
        .filter(|s| s.kind == SearchStepKind::Probe)
        .filter_map(|s| s.probe)
        .collect()
}

#[test]
fn test_linear_search_finds_the_first_occurrence() {
    let steps = run_search(AlgorithmId::LinearSearch, &[4, 2, 7, 2], 2);

    let last = search_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, SearchStepKind::Found);
    assert_eq!(last.found, Some(1), "the leftmost 2 wins");
    assert!(last.description.contains("after 2 comparison(s)"));

    assert_eq!(probes(&steps), vec![0, 1]);
    let projection = project::project(&steps, steps.len() - 1);
    assert_eq!(projection.comparisons, 2);
}

#[test]
fn test_linear_search_exhausts_every_slot_on_a_miss() {
    let values = [4, 2, 7, 9];
    let steps = run_search(AlgorithmId::LinearSearch, &values, 5);

    let last = search_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, SearchStepKind::NotFound);
    assert_eq!(last.visited, vec![0, 1, 2, 3]);

    let projection = project::project(&steps, steps.len() - 1);
    assert_eq!(projection.comparisons, values.len());
}

#[test]
fn test_binary_search_probes_midpoints_and_halves_the_range() {
    let values = [1, 3, 5, 7, 9, 11, 13];
    let steps = run_search(AlgorithmId::BinarySearch, &values, 11);

    // Probe 7 at index 3, discard the left half, probe 11 at index 5.
    assert_eq!(probes(&steps), vec![3, 5]);

    let last = search_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, SearchStepKind::Found);
    assert_eq!(last.found, Some(5));
    for i in 0..=3 {
        assert!(last.eliminated.contains(&i), "index {} must be discarded", i);
    }
}

#[test]
fn test_binary_search_sorts_its_working_copy() {
    let steps = run_search(AlgorithmId::BinarySearch, &[13, 1, 9, 3, 11, 5, 7], 11);
    let first = search_step(steps.first().expect("run produced no steps"));
    assert_eq!(first.kind, SearchStepKind::Start);
    assert_eq!(first.values, vec![1, 3, 5, 7, 9, 11, 13]);

    let last = search_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, SearchStepKind::Found);
    assert_eq!(last.found, Some(5), "found in the sorted order");
}

#[test]
fn test_binary_search_discards_everything_on_a_miss() {
    let values = [1, 3, 5, 7, 9, 12, 15, 18, 21, 25, 28, 31, 35, 38, 42];
    let steps = run_search(AlgorithmId::BinarySearch, &values, 10);

    let last = search_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, SearchStepKind::NotFound);
    for i in 0..values.len() {
        assert!(
            last.eliminated.contains(&i) || last.visited.contains(&i),
            "index {} must be ruled out by the end",
            i
        );
    }

    let projection = project::project(&steps, steps.len() - 1);
    assert_eq!(projection.comparisons, 4, "15 candidates need four probes");
}

#[test]
fn test_binary_search_beats_linear_on_a_late_target() {
    let values = [1, 3, 5, 7, 9, 12, 15, 18, 21, 25, 28, 31, 35, 38, 42];
    let linear = run_search(AlgorithmId::LinearSearch, &values, 42);
    let binary = run_search(AlgorithmId::BinarySearch, &values, 42);

    let linear_comparisons = project::project(&linear, linear.len() - 1).comparisons;
    let binary_comparisons = project::project(&binary, binary.len() - 1).comparisons;
    assert_eq!(linear_comparisons, values.len());
    assert!(binary_comparisons < linear_comparisons);
}

#[test]
fn test_empty_array_is_a_start_and_a_miss() {
    for id in [AlgorithmId::LinearSearch, AlgorithmId::BinarySearch] {
        let steps = run_search(id, &[], 5);
        assert_eq!(steps.len(), 2, "{}", id.name());
        assert_eq!(search_step(&steps[0]).kind, SearchStepKind::Start, "{}", id.name());
        assert_eq!(
            search_step(&steps[1]).kind,
            SearchStepKind::NotFound,
            "{}",
            id.name()
        );
        let projection = project::project(&steps, steps.len() - 1);
        assert_eq!(projection.comparisons, 0, "{}", id.name());
    }
}

#[test]
fn test_search_runs_are_deterministic() {
    for id in [AlgorithmId::LinearSearch, AlgorithmId::BinarySearch] {
        let first = run_search(id, &[8, 3, 5, 1, 9], 5);
        let second = run_search(id, &[8, 3, 5, 1, 9], 5);
        assert_eq!(first, second, "{} is not deterministic", id.name());
    }
}

#[test]
fn test_search_input_is_required() {
    let err = runners::run(AlgorithmId::LinearSearch, &RunInput::Array(vec![1, 2, 3]))
        .expect_err("searching needs a target");
    assert!(err.to_string().contains("target"));
}
