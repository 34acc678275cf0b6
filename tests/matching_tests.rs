// Integration tests for the string-matching runners

use algoscope::runners::{self, AlgorithmId, RunInput};
use algoscope::step::{MatchStep, MatchStepKind, Step};

const MATCHERS: [AlgorithmId; 3] = [
    AlgorithmId::NaiveMatch,
    AlgorithmId::Kmp,
    AlgorithmId::BoyerMoore,
];

fn run_match(id: AlgorithmId, text: &str, pattern: &str) -> Vec<Step> {
    runners::run(
        id,
        &RunInput::Text {
            text: text.to_string(),
            pattern: pattern.to_string(),
        },
    )
    .expect("match run failed")
}

fn match_step(step: &Step) -> &MatchStep {
    match step {
        Step::Match(s) => s,
        other => panic!("expected a match step, got {:?}", other),
    }
}

fn occurrences(steps: &[Step]) -> Vec<usize> {
    let last = match_step(steps.last().expect("run produced no steps"));
    assert_eq!(last.kind, MatchStepKind::Complete);
    last.matches.clone()
}

fn comparisons(steps: &[Step]) -> usize {
    steps.iter().filter(|s| s.counts_comparison()).count()
}

#[test]
fn test_all_matchers_find_the_same_occurrences() {
    let cases = [
        ("ABABDABACDABABCABAB", "ABABC", vec![10]),
        ("AABAACAADAABAABA", "AABA", vec![0, 9, 12]),
        ("AAAAA", "AA", vec![0, 1, 2, 3]),
        ("HELLO", "WORLD", vec![]),
        ("ABC", "ABC", vec![0]),
    ];
    for (text, pattern, expected) in cases {
        for id in MATCHERS {
            let steps = run_match(id, text, pattern);
            assert_eq!(
                occurrences(&steps),
                expected,
                "{} on text {:?} pattern {:?}",
                id.name(),
                text,
                pattern
            );
        }
    }
}

#[test]
fn test_kmp_never_compares_more_than_naive() {
    let cases = [
        ("AAAAAAAAAB", "AAAB"),
        ("ABABABABABAB", "ABAB"),
        ("ABCABCABCABC", "CAB"),
    ];
    for (text, pattern) in cases {
        let naive = comparisons(&run_match(AlgorithmId::NaiveMatch, text, pattern));
        let kmp = comparisons(&run_match(AlgorithmId::Kmp, text, pattern));
        assert!(
            kmp <= naive,
            "KMP made {} comparisons vs naive {} on {:?}/{:?}",
            kmp,
            naive,
            text,
            pattern
        );
    }
}

#[test]
fn test_boyer_moore_skips_ahead_on_absent_characters() {
    // No 'Z' in the pattern, so every mismatch shifts the full pattern length.
    let steps = run_match(AlgorithmId::BoyerMoore, "ZZZZZZZZZZZZ", "ABCD");
    for step in steps.iter().map(match_step) {
        if step.kind == MatchStepKind::Shift {
            assert_eq!(step.shift, 4);
        }
    }
    let naive = comparisons(&run_match(AlgorithmId::NaiveMatch, "ZZZZZZZZZZZZ", "ABCD"));
    let bm = comparisons(&steps);
    assert!(bm < naive);
}

#[test]
fn test_boyer_moore_strong_good_suffix_spans_the_pattern() {
    // Window 0 of "ABBB..." matches the suffix "B" of "ABAB" and then
    // mismatches against 'A'.  The earlier 'B' in the pattern is preceded by
    // the same 'A', so re-aligning there would mismatch identically; the
    // strong rule shifts the full pattern length 4 instead of the weak
    // border fallback of 2.
    let steps = run_match(AlgorithmId::BoyerMoore, "ABBBABAB", "ABAB");
    let first_shift = steps
        .iter()
        .map(match_step)
        .find(|s| s.kind == MatchStepKind::Shift)
        .expect("missing the shift step");
    assert!(first_shift.description.contains("good-suffix gives 4"));
    assert_eq!(first_shift.shift, 4);
    assert_eq!(occurrences(&steps), vec![4]);
}

#[test]
fn test_every_shift_moves_the_window() {
    for id in MATCHERS {
        let steps = run_match(id, "ABABABACABAB", "ABAB");
        for step in steps.iter().map(match_step) {
            if step.kind == MatchStepKind::Shift {
                assert!(step.shift >= 1, "{} emitted a zero shift", id.name());
            }
        }
    }
}

#[test]
fn test_found_steps_record_window_positions() {
    for id in MATCHERS {
        let steps = run_match(id, "AABAACAADAABAABA", "AABA");
        let found: Vec<usize> = steps
            .iter()
            .map(match_step)
            .filter(|s| s.kind == MatchStepKind::Found)
            .map(|s| s.window)
            .collect();
        assert_eq!(found, vec![0, 9, 12], "{}", id.name());
    }
}

#[test]
fn test_empty_pattern_is_a_single_step() {
    for id in MATCHERS {
        let steps = run_match(id, "ABC", "");
        assert_eq!(steps.len(), 1, "{}", id.name());
        let only = match_step(&steps[0]);
        assert_eq!(only.kind, MatchStepKind::Complete, "{}", id.name());
        assert!(only.matches.is_empty(), "{}", id.name());
    }
}

#[test]
fn test_pattern_longer_than_text_is_a_single_step() {
    for id in MATCHERS {
        let steps = run_match(id, "AB", "ABC");
        assert_eq!(steps.len(), 1, "{}", id.name());
        let only = match_step(&steps[0]);
        assert_eq!(only.kind, MatchStepKind::Complete, "{}", id.name());
        assert!(only.matches.is_empty(), "{}", id.name());
    }
}

#[test]
fn test_completion_reports_totals() {
    let steps = run_match(AlgorithmId::NaiveMatch, "AAAA", "AA");
    let last = match_step(steps.last().expect("run produced no steps"));
    assert!(last.description.contains("3 occurrence(s)"));

    let counted = comparisons(&steps);
    assert!(last.description.contains(&format!("{} character comparisons", counted)));
}

#[test]
fn test_runs_are_deterministic() {
    for id in MATCHERS {
        let first = run_match(id, "ABABDABACDABABCABAB", "ABABC");
        let second = run_match(id, "ABABDABACDABABCABAB", "ABABC");
        assert_eq!(first, second, "{}", id.name());
    }
}
