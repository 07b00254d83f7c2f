use log::trace;

use crate::types::edit_operation::{EditOperation, EditOperator};

/// Pairs deleted tokens with inserted tokens of the same spelling and turns
/// each pair into a `MoveOut`/`MoveIn` couple sharing a fresh group id.
///
/// Every deletion is first paired with the next unpaired insertion after it.
/// Deletions left over are then paired with the closest unpaired insertion
/// before them.
pub fn detect_moves(operations: &mut [EditOperation]) {
    let mut next_group_id = 1;

    for i in 0..operations.len() {
        if operations[i].operator != EditOperator::Delete {
            continue;
        }

        let partner = (i + 1..operations.len()).find(|&j| is_partner(&operations[i], &operations[j]));
        if let Some(j) = partner {
            pair(operations, i, j, &mut next_group_id);
        }
    }

    for i in (0..operations.len()).rev() {
        if operations[i].operator != EditOperator::Delete {
            continue;
        }

        let partner = (0..i).rev().find(|&j| is_partner(&operations[i], &operations[j]));
        if let Some(j) = partner {
            pair(operations, i, j, &mut next_group_id);
        }
    }
}

fn is_partner(deletion: &EditOperation, candidate: &EditOperation) -> bool {
    candidate.operator == EditOperator::Insert && candidate.value == deletion.value
}

fn pair(operations: &mut [EditOperation], move_out: usize, move_in: usize, next_group_id: &mut u32) {
    let group_id = *next_group_id;
    *next_group_id += 1;

    operations[move_out].operator = EditOperator::MoveOut;
    operations[move_out].group_id = group_id;
    operations[move_in].operator = EditOperator::MoveIn;
    operations[move_in].group_id = group_id;

    trace!(
        "Moved '{}' from {} to {} (group {group_id})",
        operations[move_out].value, operations[move_out].old_location, operations[move_in].new_location
    );
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_forward_pairs_come_first() {
        let mut operations = vec![
            EditOperation::at(EditOperator::Insert, (1, 1), (1, 1), "x"),
            EditOperation::at(EditOperator::Delete, (1, 1), (1, 2), "x"),
            EditOperation::at(EditOperator::Insert, (1, 2), (1, 2), "x"),
        ];

        detect_moves(&mut operations);

        assert_eq!(
            operations
                .iter()
                .map(|operation| (operation.operator, operation.group_id))
                .collect::<Vec<_>>(),
            vec![
                (EditOperator::Insert, 0),
                (EditOperator::MoveOut, 1),
                (EditOperator::MoveIn, 1),
            ]
        );
    }

    #[test]
    fn test_backward_pairs_for_leftovers() {
        let mut operations = vec![
            EditOperation::at(EditOperator::Insert, (1, 1), (1, 1), "x"),
            EditOperation::at(EditOperator::Equal, (1, 1), (1, 2), "x"),
            EditOperation::at(EditOperator::Delete, (1, 2), (1, 3), "x"),
            EditOperation::at(EditOperator::Delete, (1, 3), (1, 3), "y"),
        ];

        detect_moves(&mut operations);

        assert_eq!(
            operations
                .iter()
                .map(|operation| (operation.operator, operation.group_id))
                .collect::<Vec<_>>(),
            vec![
                (EditOperator::MoveIn, 1),
                (EditOperator::Equal, 0),
                (EditOperator::MoveOut, 1),
                (EditOperator::Delete, 0),
            ]
        );
    }
}
