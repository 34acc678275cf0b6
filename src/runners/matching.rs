//! String-matching runners: naive, Knuth-Morris-Pratt, Boyer-Moore
//!
//! One step per character comparison; every window movement is an explicit
//! Shift step whose `shift` field records the decided skip distance (the
//! failure-function jump for KMP, max of bad-character and good-suffix for
//! Boyer-Moore).

use rustc_hash::FxHashMap;

use crate::step::{MatchStep, MatchStepKind, Step};

fn trivial_run(text: &[char], pattern: &[char]) -> Option<Vec<Step>> {
    if pattern.is_empty() {
        let step = MatchStep::new(
            MatchStepKind::Complete,
            0,
            "The pattern is empty; nothing to search for",
        );
        return Some(vec![Step::Match(step)]);
    }
    if pattern.len() > text.len() {
        let step = MatchStep::new(
            MatchStepKind::Complete,
            0,
            "The pattern is longer than the text, so it cannot occur",
        );
        return Some(vec![Step::Match(step)]);
    }
    None
}

fn compare_step(
    window: usize,
    pattern_index: usize,
    text_index: usize,
    matched: bool,
    matches: &[usize],
    description: String,
) -> Step {
    let mut step = MatchStep::new(MatchStepKind::Compare, window, description);
    step.pattern_index = pattern_index;
    step.text_index = text_index;
    step.matched = Some(matched);
    step.matches = matches.to_vec();
    Step::Match(step)
}

fn shift_step(window: usize, shift: usize, matches: &[usize], description: String) -> Step {
    let mut step = MatchStep::new(MatchStepKind::Shift, window, description);
    step.shift = shift;
    step.matches = matches.to_vec();
    Step::Match(step)
}

fn found_step(window: usize, matches: &[usize]) -> Step {
    let mut step = MatchStep::new(
        MatchStepKind::Found,
        window,
        format!("Full match at index {}", window),
    );
    step.matches = matches.to_vec();
    Step::Match(step)
}

fn complete_step(matches: &[usize], comparisons: usize) -> Step {
    let mut step = MatchStep::new(
        MatchStepKind::Complete,
        0,
        format!(
            "Search complete: {} occurrence(s), {} character comparisons",
            matches.len(),
            comparisons
        ),
    );
    step.matches = matches.to_vec();
    Step::Match(step)
}

/// Naive matching: try every window, scan left to right, slide by one.
pub fn naive_match(text: &str, pattern: &str) -> Vec<Step> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if let Some(steps) = trivial_run(&text, &pattern) {
        return steps;
    }
    let mut steps = Vec::new();
    let mut matches: Vec<usize> = Vec::new();
    let mut comparisons = 0usize;

    steps.push(Step::Match(MatchStep::new(
        MatchStepKind::Start,
        0,
        "Naive search: compare the pattern at every window position",
    )));

    for window in 0..=text.len() - pattern.len() {
        let mut mismatch = false;
        for k in 0..pattern.len() {
            comparisons += 1;
            let matched = text[window + k] == pattern[k];
            steps.push(compare_step(
                window,
                k,
                window + k,
                matched,
                &matches,
                format!(
                    "Comparing text[{}]='{}' with pattern[{}]='{}'",
                    window + k,
                    text[window + k],
                    k,
                    pattern[k]
                ),
            ));
            if !matched {
                mismatch = true;
                break;
            }
        }
        if !mismatch {
            matches.push(window);
            steps.push(found_step(window, &matches));
        }
        if window + pattern.len() < text.len() {
            steps.push(shift_step(
                window + 1,
                1,
                &matches,
                "Slide the window one position right".to_string(),
            ));
        }
    }

    steps.push(complete_step(&matches, comparisons));
    steps
}

/// Longest-proper-prefix-also-suffix table for KMP.
fn failure_function(pattern: &[char]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut len = 0usize;
    let mut i = 1usize;
    while i < pattern.len() {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len > 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }
    lps
}

/// Knuth-Morris-Pratt: on mismatch the pattern index falls back along the
/// failure function instead of rescanning the text.
pub fn kmp_match(text: &str, pattern: &str) -> Vec<Step> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if let Some(steps) = trivial_run(&text, &pattern) {
        return steps;
    }
    let mut steps = Vec::new();
    let mut matches: Vec<usize> = Vec::new();
    let mut comparisons = 0usize;
    let lps = failure_function(&pattern);
    let m = pattern.len();

    steps.push(Step::Match(MatchStep::new(
        MatchStepKind::Start,
        0,
        format!(
            "KMP search: failure function {:?} lets mismatches skip ahead",
            lps
        ),
    )));

    let mut i = 0usize; // text index
    let mut j = 0usize; // pattern index
    while i < text.len() {
        comparisons += 1;
        let matched = text[i] == pattern[j];
        steps.push(compare_step(
            i - j,
            j,
            i,
            matched,
            &matches,
            format!(
                "Comparing text[{}]='{}' with pattern[{}]='{}'",
                i, text[i], j, pattern[j]
            ),
        ));

        if matched {
            i += 1;
            j += 1;
            if j == m {
                matches.push(i - m);
                steps.push(found_step(i - m, &matches));
                let fallback = lps[m - 1];
                let shift = m - fallback;
                j = fallback;
                steps.push(shift_step(
                    i - j,
                    shift,
                    &matches,
                    format!(
                        "Matched; reuse border of length {} and shift window by {}",
                        fallback, shift
                    ),
                ));
            }
        } else if j > 0 {
            let fallback = lps[j - 1];
            let shift = j - fallback;
            j = fallback;
            steps.push(shift_step(
                i - j,
                shift,
                &matches,
                format!(
                    "Mismatch; failure function keeps {} matched character(s), window shifts by {}",
                    fallback, shift
                ),
            ));
        } else {
            i += 1;
            steps.push(shift_step(
                i,
                1,
                &matches,
                "Mismatch at the first pattern character; shift window by 1".to_string(),
            ));
        }
    }

    steps.push(complete_step(&matches, comparisons));
    steps
}

/// Last occurrence of each pattern character (bad-character rule).
fn bad_character_table(pattern: &[char]) -> FxHashMap<char, usize> {
    let mut table = FxHashMap::default();
    for (i, &c) in pattern.iter().enumerate() {
        table.insert(c, i);
    }
    table
}

/// Good-suffix shift table (classic border-based preprocessing).
fn good_suffix_table(pattern: &[char]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![0usize; m + 1];
    let mut border = vec![0usize; m + 2];

    let mut i = m;
    let mut j = m + 1;
    border[i] = j;
    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j] == 0 {
                shift[j] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Case 2: positions with no matching-suffix shift fall back to the
    // widest border that still covers them, stepping to narrower borders
    // as the position passes each border boundary.
    j = border[0];
    for i in 0..=m {
        if shift[i] == 0 {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }
    shift
}

/// Boyer-Moore: scan each window right to left; on mismatch shift by the
/// larger of the bad-character and good-suffix rules.
pub fn boyer_moore_match(text: &str, pattern: &str) -> Vec<Step> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if let Some(steps) = trivial_run(&text, &pattern) {
        return steps;
    }
    let mut steps = Vec::new();
    let mut matches: Vec<usize> = Vec::new();
    let mut comparisons = 0usize;
    let m = pattern.len();
    let bad_char = bad_character_table(&pattern);
    let good_suffix = good_suffix_table(&pattern);

    steps.push(Step::Match(MatchStep::new(
        MatchStepKind::Start,
        0,
        "Boyer-Moore search: scan right to left, shift by the stronger of two rules",
    )));

    let mut window = 0usize;
    while window + m <= text.len() {
        let mut j = m; // characters still unchecked in this window
        let mut matched_all = true;
        while j > 0 {
            comparisons += 1;
            let matched = text[window + j - 1] == pattern[j - 1];
            steps.push(compare_step(
                window,
                j - 1,
                window + j - 1,
                matched,
                &matches,
                format!(
                    "Comparing text[{}]='{}' with pattern[{}]='{}'",
                    window + j - 1,
                    text[window + j - 1],
                    j - 1,
                    pattern[j - 1]
                ),
            ));
            if !matched {
                matched_all = false;
                break;
            }
            j -= 1;
        }

        let shift = if matched_all {
            matches.push(window);
            steps.push(found_step(window, &matches));
            let shift = good_suffix[0].max(1);
            steps.push(shift_step(
                window + shift,
                shift,
                &matches,
                format!("Matched; good-suffix rule shifts window by {}", shift),
            ));
            shift
        } else {
            let mismatch_idx = j - 1;
            let c = text[window + mismatch_idx];
            let bc = match bad_char.get(&c) {
                Some(&last) if last < mismatch_idx => mismatch_idx - last,
                Some(_) => 1,
                None => mismatch_idx + 1,
            };
            let gs = good_suffix[j];
            let shift = bc.max(gs).max(1);
            steps.push(shift_step(
                window + shift,
                shift,
                &matches,
                format!(
                    "Mismatch on '{}': bad-character gives {}, good-suffix gives {}; shift by {}",
                    c, bc, gs, shift
                ),
            ));
            shift
        };

        window += shift;
    }

    steps.push(complete_step(&matches, comparisons));
    steps
}
