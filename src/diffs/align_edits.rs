use crate::{
    diffs::raw_operation::{RawOperation, push_run},
    tokenizer::{BLOCK_SEPARATOR, TOKEN_SEPARATOR},
};

/// Slides every single insertion or deletion that sits between two equal
/// runs to the position where it lines up best with token boundaries,
/// without changing the texts the runs rebuild.
///
/// A minimal character diff is free to report `"one t|wo t|hree"` when the
/// word `two` is deleted from `"one two three"`; this pass turns that into
/// `"one |two |three"` so that the deletion covers whole tokens. The idea is
/// the "semantic lossless" cleanup of diff-match-patch.
pub fn align_edits(mut runs: Vec<RawOperation>) -> Vec<RawOperation> {
    for i in 1..runs.len().saturating_sub(1) {
        let (RawOperation::Equal(previous), RawOperation::Equal(next)) = (&runs[i - 1], &runs[i + 1])
        else {
            continue;
        };
        if matches!(runs[i], RawOperation::Equal(..)) {
            continue;
        }

        let (previous, edit, next) = best_alignment(previous, runs[i].text(), next);

        runs[i - 1] = RawOperation::Equal(previous);
        *runs[i].text_mut() = edit;
        runs[i + 1] = RawOperation::Equal(next);
    }

    let mut result = Vec::with_capacity(runs.len());
    for run in runs {
        push_run(&mut result, run);
    }

    result
}

/// Returns the `(previous, edit, next)` split with the best boundary score.
/// Ties go to the rightmost candidate.
fn best_alignment(previous: &str, edit: &str, next: &str) -> (String, String, String) {
    let mut previous: Vec<char> = previous.chars().collect();
    let mut edit: Vec<char> = edit.chars().collect();
    let mut next: Vec<char> = next.chars().collect();

    // Shift the edit as far left as it can go.
    while let (Some(&last_previous), Some(&last_edit)) = (previous.last(), edit.last()) {
        if last_previous != last_edit {
            break;
        }

        previous.pop();
        edit.pop();
        edit.insert(0, last_previous);
        next.insert(0, last_previous);
    }

    let mut best = (previous.clone(), edit.clone(), next.clone());
    let mut best_score = score(&previous, &edit, &next);

    // Then step it right one character at a time.
    while let (Some(&first_edit), Some(&first_next)) = (edit.first(), next.first()) {
        if first_edit != first_next {
            break;
        }

        previous.push(first_edit);
        edit.remove(0);
        edit.push(first_next);
        next.remove(0);

        let candidate_score = score(&previous, &edit, &next);
        if candidate_score >= best_score {
            best_score = candidate_score;
            best = (previous.clone(), edit.clone(), next.clone());
        }
    }

    (
        best.0.into_iter().collect(),
        best.1.into_iter().collect(),
        best.2.into_iter().collect(),
    )
}

fn score(previous: &[char], edit: &[char], next: &[char]) -> u8 {
    boundary_score(previous.last().copied(), edit.first().copied())
        + boundary_score(edit.last().copied(), next.first().copied())
}

fn boundary_score(left: Option<char>, right: Option<char>) -> u8 {
    match (left, right) {
        (None, _) | (_, None) => 3,
        (Some(BLOCK_SEPARATOR), _) | (_, Some(BLOCK_SEPARATOR)) => 2,
        (Some(TOKEN_SEPARATOR), _) | (_, Some(TOKEN_SEPARATOR)) => 1,
        _ => 0,
    }
}
