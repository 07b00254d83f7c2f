use log::trace;

use crate::types::edit_operation::{EditOperation, EditOperator};

/// Folds every deletion immediately followed by an insertion landing at the
/// same new location into a single `Replace`, scanning from the end.
pub fn fold_replacements(operations: &mut Vec<EditOperation>) {
    let mut i = operations.len();

    while i > 1 {
        i -= 1;

        let (deletion, insertion) = (&operations[i - 1], &operations[i]);
        if deletion.operator != EditOperator::Delete
            || insertion.operator != EditOperator::Insert
            || deletion.new_location != insertion.new_location
        {
            continue;
        }

        let insertion = operations.remove(i);
        let replacement = &mut operations[i - 1];

        trace!(
            "Folded '{}' -> '{}' at {} into a replacement",
            replacement.value, insertion.value, replacement.old_location
        );

        replacement.operator = EditOperator::Replace;
        replacement.old_value = Some(std::mem::replace(&mut replacement.value, insertion.value));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deletion_and_insertion_fold() {
        let mut operations = vec![
            EditOperation::at(EditOperator::Delete, (1, 1), (1, 1), "foo"),
            EditOperation::at(EditOperator::Insert, (1, 2), (1, 1), "bar"),
            EditOperation::at(EditOperator::Equal, (1, 2), (1, 2), "x"),
        ];

        fold_replacements(&mut operations);

        let mut expected = EditOperation::at(EditOperator::Replace, (1, 1), (1, 1), "bar");
        expected.old_value = Some("foo".to_owned());
        assert_eq!(
            operations,
            vec![expected, EditOperation::at(EditOperator::Equal, (1, 2), (1, 2), "x")]
        );
    }

    #[test]
    fn test_different_targets_do_not_fold() {
        let mut operations = vec![
            EditOperation::at(EditOperator::Delete, (1, 1), (1, 1), "foo"),
            EditOperation::at(EditOperator::Insert, (1, 2), (1, 2), "bar"),
        ];
        let expected = operations.clone();

        fold_replacements(&mut operations);

        assert_eq!(operations, expected);
    }
}
