//! Adapted from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>
//!
//! Myers' diff algorithm over characters.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it.
//!
//! # Heuristics
//!
//! This implementation does not implement any more advanced heuristics that
//! would solve some pathological cases. Passing two large and completely
//! distinct texts to the algorithm will make it spin without making
//! reasonable progress.

use std::ops::{Index, IndexMut, Range};

use crate::{
    diffs::raw_operation::{RawOperation, push_run},
    utils::common_affix_len::{common_prefix_len, common_suffix_len},
};

/// Diffs `old` against `new` and returns the edit script as runs of
/// characters. Consecutive characters with the same fate are coalesced into
/// a single run.
pub fn myers_diff(old: &[char], new: &[char]) -> Vec<RawOperation> {
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut result = Vec::new();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        &mut result,
    );

    result
}

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`. `V` is indexed by `k`, which can
/// be negative, so it wraps a Vec plus an `offset` mapping negative `k`-s
/// back to a value >= 0.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }

    /// Position of diagonal `k` in `v`. Out of range diagonals map past the
    /// end so that indexing panics instead of reading another diagonal.
    fn slot(&self, k: isize) -> usize { usize::try_from(k + self.offset).unwrap_or(usize::MAX) }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output { &self.v[self.slot(index)] }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let slot = self.slot(index);
        &mut self.v[slot]
    }
}

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// Finds the middle snake of an optimal D-path by running the greedy
/// algorithm forwards and backwards simultaneously until the furthest
/// reaching paths from opposing corners overlap. Returns the start of the
/// snake, which is where the problem gets split in two.
fn find_middle_snake(
    old: &[char],
    old_range: Range<usize>,
    new: &[char],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
) -> Option<(usize, usize)> {
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = isize::try_from(n).unwrap_or(isize::MAX) - isize::try_from(m).unwrap_or(isize::MAX);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    debug_assert!(vf.len() >= d_max);
    debug_assert!(vb.len() >= d_max);

    let d_max = isize::try_from(d_max).unwrap_or(isize::MAX);
    for d in 0..d_max {
        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            // The coordinate of the start of a snake
            let (x0, y0) = (x, y);
            // While these sequences are identical, keep moving through the
            // graph with no cost
            if x < old_range.len() && y < new_range.len() {
                x += common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                );
            }

            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                return Some((x0 + old_range.start, y0 + new_range.start));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                );
                x += advance;
                y += advance;
            }

            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                return Some((n - x + old_range.start, m - y + new_range.start));
            }
        }
    }

    None
}

fn conquer(
    old: &[char],
    mut old_range: Range<usize>,
    new: &[char],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    result: &mut Vec<RawOperation>,
) {
    let common_prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone());
    if common_prefix_len > 0 {
        push_run(
            result,
            RawOperation::Equal(
                old[old_range.start..old_range.start + common_prefix_len]
                    .iter()
                    .collect(),
            ),
        );
    }
    old_range.start += common_prefix_len;
    new_range.start += common_prefix_len;

    let common_suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone());
    let common_suffix_start = old_range.end - common_suffix_len;
    old_range.end -= common_suffix_len;
    new_range.end -= common_suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // nothing left in between
    } else if new_range.is_empty() {
        push_run(
            result,
            RawOperation::Delete(old[old_range].iter().collect()),
        );
    } else if old_range.is_empty() {
        push_run(
            result,
            RawOperation::Insert(new[new_range].iter().collect()),
        );
    } else if let Some((x_start, y_start)) =
        find_middle_snake(old, old_range.clone(), new, new_range.clone(), vf, vb)
    {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, result);
        conquer(old, old_b, new, new_b, vf, vb, result);
    } else {
        push_run(
            result,
            RawOperation::Delete(old[old_range].iter().collect()),
        );
        push_run(
            result,
            RawOperation::Insert(new[new_range].iter().collect()),
        );
    }

    if common_suffix_len > 0 {
        push_run(
            result,
            RawOperation::Equal(
                old[common_suffix_start..common_suffix_start + common_suffix_len]
                    .iter()
                    .collect(),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn diff(old: &str, new: &str) -> Vec<RawOperation> {
        myers_diff(
            &old.chars().collect::<Vec<_>>(),
            &new.chars().collect::<Vec<_>>(),
        )
    }

    fn rebuild(runs: &[RawOperation], keep: fn(&RawOperation) -> bool) -> String {
        runs.iter().filter(|run| keep(run)).map(RawOperation::text).collect()
    }

    #[test]
    fn test_diagonals_within_bounds() {
        let mut v = V::new(2);
        v[-2] = 3;
        v[1] = 5;

        assert_eq!((v[-2], v[0], v[1]), (3, 0, 5));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_diagonal_past_the_end_panics() {
        let v = V::new(2);
        assert_eq!(v[2], 0);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_diagonal_before_the_start_panics() {
        let v = V::new(2);
        assert_eq!(v[-3], 0);
    }

    #[test]
    fn test_empty_diff() {
        assert_eq!(diff("", ""), vec![]);
    }

    #[test]
    fn test_identical_content() {
        assert_eq!(
            diff("a b c", "a b c"),
            vec![RawOperation::Equal("a b c".to_owned())]
        );
    }

    #[test]
    fn test_insert_only() {
        assert_eq!(diff("", "ab"), vec![RawOperation::Insert("ab".to_owned())]);
    }

    #[test]
    fn test_delete_only() {
        assert_eq!(diff("ab", ""), vec![RawOperation::Delete("ab".to_owned())]);
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert_eq!(
            diff("Hello world", "Hello big world"),
            vec![
                RawOperation::Equal("Hello ".to_owned()),
                RawOperation::Insert("big ".to_owned()),
                RawOperation::Equal("world".to_owned()),
            ]
        );
    }

    #[test]
    fn test_relocated_token() {
        assert_eq!(
            diff("a b c", "b c a"),
            vec![
                RawOperation::Delete("a ".to_owned()),
                RawOperation::Equal("b c".to_owned()),
                RawOperation::Insert(" a".to_owned()),
            ]
        );
    }

    #[test]
    fn test_runs_rebuild_both_texts() {
        let pairs = [
            ("the quick brown fox", "the slow brown dog"),
            ("kitten sitting", "sitting kitten"),
            ("line one\nline two", "line two\nline three\nline one"),
            ("ünïcödé text", "unicode tëxt"),
        ];

        for (old, new) in pairs {
            let runs = diff(old, new);
            assert_eq!(rebuild(&runs, RawOperation::is_in_old), old);
            assert_eq!(rebuild(&runs, RawOperation::is_in_new), new);
            assert!(runs.iter().all(|run| !run.is_empty()));
            assert!(
                runs.windows(2).all(|pair| std::mem::discriminant(&pair[0])
                    != std::mem::discriminant(&pair[1]))
            );
        }
    }
}
