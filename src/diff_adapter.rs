mod utils;

use utils::{
    detect_moves::detect_moves, fold_replacements::fold_replacements, join_tokens::join_tokens,
    tokenize_runs::tokenize_runs,
};

use crate::{
    diffs::{
        char_diff::{CharDiff, MyersCharDiff},
        raw_operation::RawOperation,
    },
    types::edit_operation::EditOperation,
};

/// Turns a character-level diff into token-level [`EditOperation`]s.
///
/// Tokens are separated by spaces and blocks by newlines; both are counted
/// from 1. The adapter finds tokens that were deleted in one place and
/// inserted with the same spelling in another (moves), and tokens whose
/// spelling changed (replacements).
///
/// The character differ is pluggable through [`CharDiff`], defaulting to
/// [`MyersCharDiff`].
///
/// ```
/// use layer_reconcile::{DiffAdapter, EditOperator, RawOperation};
///
/// let operations = DiffAdapter::default().adapt(&[
///     RawOperation::Delete("a ".to_owned()),
///     RawOperation::Equal("b c".to_owned()),
///     RawOperation::Insert(" a".to_owned()),
/// ]);
///
/// assert_eq!(operations[0].operator, EditOperator::MoveOut);
/// assert_eq!(operations[3].operator, EditOperator::MoveIn);
/// assert_eq!(operations[0].group_id, operations[3].group_id);
/// ```
#[derive(Debug, Clone)]
pub struct DiffAdapter<D = MyersCharDiff> {
    differ: D,
}

impl Default for DiffAdapter {
    fn default() -> Self { Self::new(MyersCharDiff) }
}

impl<D> DiffAdapter<D>
where
    D: CharDiff,
{
    pub fn new(differ: D) -> Self { Self { differ } }

    /// Diffs the two texts with the configured differ and adapts the result.
    pub fn diff(&self, old: &str, new: &str) -> Vec<EditOperation> {
        self.adapt(&self.differ.diff(old, new))
    }

    /// Adapts already computed character runs. `Equal` and `Delete` runs
    /// must rebuild the old text, `Equal` and `Insert` runs the new one.
    pub fn adapt(&self, runs: &[RawOperation]) -> Vec<EditOperation> {
        let mut operations = join_tokens(tokenize_runs(runs));
        detect_moves(&mut operations);
        fold_replacements(&mut operations);

        operations
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::edit_operation::EditOperator;

    fn display(operations: &[EditOperation]) -> String {
        operations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_identical_texts_are_all_equal() {
        let text = "one two\nthree  four\r\nfive";
        let operations = DiffAdapter::default().diff(text, text);

        assert!(operations.iter().all(|operation| operation.operator == EditOperator::Equal
            && operation.old_location == operation.new_location));
        assert_snapshot!(display(&operations), @r"
        equ 1.1>1.1 'one'
        equ 1.2>1.2 'two'
        equ 2.1>2.1 'three'
        equ 2.3>2.3 'four'
        equ 3.1>3.1 'five'
        ");
    }

    #[test]
    fn test_empty_texts() {
        assert_eq!(DiffAdapter::default().diff("", ""), vec![]);
    }

    #[test]
    fn test_relocated_token_is_a_move() {
        let operations = DiffAdapter::default().diff("a b c", "b c a");

        assert_snapshot!(display(&operations), @r"
        mvo 1.1>1.1 'a' #1
        equ 1.2>1.1 'b'
        equ 1.3>1.2 'c'
        mvi 1.3>1.3 'a' #1
        ");
    }

    #[test]
    fn test_changed_token_is_a_replacement() {
        let operations = DiffAdapter::default().diff("foo", "bar");

        let mut expected = EditOperation::at(EditOperator::Replace, (1, 1), (1, 1), "bar");
        expected.old_value = Some("foo".to_owned());
        assert_eq!(operations, vec![expected]);
    }

    #[test]
    fn test_whole_token_replacement_is_folded() {
        let operations = DiffAdapter::default().adapt(&[
            RawOperation::Delete("foo ".to_owned()),
            RawOperation::Insert("bar ".to_owned()),
            RawOperation::Equal("x".to_owned()),
        ]);

        assert_snapshot!(display(&operations), @r"
        rep 1.1>1.1 'bar' (was 'foo')
        equ 1.2>1.2 'x'
        ");
    }

    #[test]
    fn test_partial_token_change() {
        let operations = DiffAdapter::default().diff("the cat sat", "the car sat");

        assert_snapshot!(display(&operations), @r"
        equ 1.1>1.1 'the'
        rep 1.2>1.2 'car' (was 'cat')
        equ 1.3>1.3 'sat'
        ");
    }

    #[test]
    fn test_insertion_shifts_following_tokens() {
        let operations = DiffAdapter::default().diff("Hello world", "Hello big world");

        assert_snapshot!(display(&operations), @r"
        equ 1.1>1.1 'Hello'
        ins 1.2>1.2 'big'
        equ 1.2>1.3 'world'
        ");
    }

    /// Deletes the whole old text, then inserts the whole new one.
    struct Rewrite;

    impl CharDiff for Rewrite {
        fn diff(&self, old: &str, new: &str) -> Vec<RawOperation> {
            vec![
                RawOperation::Delete(old.to_owned()),
                RawOperation::Insert(new.to_owned()),
            ]
        }
    }

    #[test]
    fn test_custom_differ() {
        let operations = DiffAdapter::new(Rewrite).diff("one two\n", "two");

        assert_snapshot!(display(&operations), @r"
        del 1.1>1.1 'one'
        mvo 1.2>1.1 'two' #1
        mvi 2.1>1.1 'two' #1
        ");
    }

    #[test]
    fn test_custom_differ_pieces_at_one_place_are_joined() {
        let operations = DiffAdapter::new(Rewrite).diff("one two", "two");

        assert_snapshot!(display(&operations), @r"
        del 1.1>1.1 'one'
        rep 1.2>1.1 'two' (was 'two')
        ");
    }
}
