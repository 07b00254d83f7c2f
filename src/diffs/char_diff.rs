use crate::diffs::{align_edits::align_edits, myers::myers_diff, raw_operation::RawOperation};

/// A character-level differ. Anything producing equal/insert/delete runs
/// that rebuild both texts can feed the [`DiffAdapter`](crate::DiffAdapter).
pub trait CharDiff {
    fn diff(&self, old: &str, new: &str) -> Vec<RawOperation>;
}

/// The default differ: a minimal Myers diff over characters, with lone edits
/// slid onto token boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MyersCharDiff;

impl CharDiff for MyersCharDiff {
    fn diff(&self, old: &str, new: &str) -> Vec<RawOperation> {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();

        align_edits(myers_diff(&old, &new))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deleted_word_is_aligned() {
        assert_eq!(
            MyersCharDiff.diff("one two three", "one three"),
            vec![
                RawOperation::Equal("one ".to_owned()),
                RawOperation::Delete("two ".to_owned()),
                RawOperation::Equal("three".to_owned()),
            ]
        );
    }
}
