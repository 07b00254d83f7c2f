use crate::types::edit_operation::{EditOperation, EditOperator};

/// Merges consecutive pieces of the same token (pieces sharing both their
/// old and new location) into a single operation.
///
/// A group containing an insertion or a deletion becomes a `Replace` whose
/// value is the new spelling of the token and whose `old_value` is the old
/// one. A group of equal pieces stays `Equal`.
pub fn join_tokens(operations: Vec<EditOperation>) -> Vec<EditOperation> {
    let mut result: Vec<EditOperation> = Vec::with_capacity(operations.len());
    // Old spelling of the last group, built while its pieces are collected.
    let mut old_value = String::new();

    for operation in operations {
        let Some(last) = result.last_mut().filter(|last| {
            last.old_location == operation.old_location && last.new_location == operation.new_location
        }) else {
            old_value.clear();
            if operation.operator != EditOperator::Insert {
                old_value.push_str(&operation.value);
            }
            result.push(operation);
            continue;
        };

        if last.operator != EditOperator::Replace {
            if last.operator == EditOperator::Delete {
                last.value.clear();
            }
            if operation.operator != EditOperator::Equal || last.operator != EditOperator::Equal {
                last.operator = EditOperator::Replace;
            }
        }

        match operation.operator {
            EditOperator::Insert => last.value.push_str(&operation.value),
            EditOperator::Delete => old_value.push_str(&operation.value),
            _ => {
                last.value.push_str(&operation.value);
                old_value.push_str(&operation.value);
            }
        }

        if last.operator == EditOperator::Replace {
            last.old_value = Some(old_value.clone());
        }
    }

    result
}
