use crate::types::{
    edit_operation::{EditOperation, EditOperator},
    hint::Hint,
    location::Location,
    patch_op::PatchOp,
};

/// Computes one [`Hint`] per fragment location describing how `operations`
/// affect it.
///
/// Operations are matched against the fragments through their old
/// locations:
///
/// - an `Equal` operation that changed location, or a `MoveOut`, reports
///   the fragment as moved;
/// - a `Delete` reports it as deleted;
/// - a `Replace` reports the old and the new spelling.
///
/// A patch is only proposed when the fragment sits on the edited token
/// itself (it is not a range), in which case the hint is
/// [`ImpactLevel::Patchable`](crate::ImpactLevel::Patchable). Fragments
/// merely overlapping an edit are [`ImpactLevel::Affected`](crate::ImpactLevel::Affected).
///
/// Patches address whole tokens through the operation's locations, so a
/// patch proposed for a character range has a source other than the
/// fragment's own location.
///
/// When several operations match a fragment, the last one decides its hint.
#[must_use]
pub fn compute_hints(locations: &[Location], operations: &[EditOperation]) -> Vec<Hint> {
    locations
        .iter()
        .map(|&location| {
            operations
                .iter()
                .fold(Hint::unaffected(location), |hint, operation| {
                    match_operation(location, operation, operations).unwrap_or(hint)
                })
        })
        .collect()
}

fn match_operation(
    location: Location,
    operation: &EditOperation,
    operations: &[EditOperation],
) -> Option<Hint> {
    let overlaps = location.overlaps(&operation.old_location);
    let coincident = location.is_coincident_with(&operation.old_location);

    match operation.operator {
        EditOperator::Equal if overlaps && operation.old_location != operation.new_location => {
            let patch = coincident.then_some(PatchOp::Move {
                from: operation.old_location,
                to: operation.new_location,
            });
            Some(Hint::matched(location, operation, "moved".to_owned(), patch))
        }
        EditOperator::Delete if overlaps => {
            let patch = coincident.then_some(PatchOp::Delete(operation.old_location));
            Some(Hint::matched(location, operation, "deleted".to_owned(), patch))
        }
        EditOperator::MoveOut if coincident => {
            // The patch pairs the operation's new location with the old
            // location of its MoveIn.
            let patch = operations
                .iter()
                .find(|partner| {
                    partner.operator == EditOperator::MoveIn && partner.group_id == operation.group_id
                })
                .map(|partner| PatchOp::Move {
                    from: operation.new_location,
                    to: partner.old_location,
                });
            Some(Hint::matched(location, operation, "moved".to_owned(), patch))
        }
        EditOperator::MoveOut if overlaps => {
            Some(Hint::matched(location, operation, "moved".to_owned(), None))
        }
        EditOperator::Replace if overlaps => Some(Hint::matched(
            location,
            operation,
            format!(
                "replaced {} with {}",
                operation.old_value.as_deref().unwrap_or_default(),
                operation.value
            ),
            None,
        )),
        _ => None,
    }
}
