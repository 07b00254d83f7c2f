use log::debug;

use crate::types::{location::Location, patch_op::PatchOp};

/// A collection of fragments that patches can be applied to. Fragments are
/// addressed by their index in [`PatchTarget::fragment_locations`].
pub trait PatchTarget {
    fn fragment_locations(&self) -> Vec<Location>;

    fn remove_fragment(&mut self, index: usize);

    fn relocate_fragment(&mut self, index: usize, location: Location);
}

/// Parses and applies textual patches (`del <location>`,
/// `mov <from> <to>`) to `target`, returning how many took effect.
///
/// Patches that don't parse are skipped. Deletions run first, then moves,
/// each in the order of the locations they act on. A patch acts on the
/// fragment whose location is exactly its source location; all moves look
/// fragments up by where they were before any move, so chained moves such
/// as `mov 1.1 1.2` and `mov 1.2 1.3` relocate two different fragments.
pub fn apply_patches<T, S>(target: &mut T, patches: &[S]) -> usize
where
    T: PatchTarget + ?Sized,
    S: AsRef<str>,
{
    let operations: Vec<PatchOp> = patches
        .iter()
        .filter_map(|patch| match patch.as_ref().parse() {
            Ok(operation) => Some(operation),
            Err(error) => {
                debug!("Skipping patch: {error}");
                None
            }
        })
        .collect();

    apply_patch_ops(target, operations)
}

pub(crate) fn apply_patch_ops<T>(target: &mut T, mut operations: Vec<PatchOp>) -> usize
where
    T: PatchTarget + ?Sized,
{
    operations.sort();
    let (deletions, moves) =
        operations.split_at(operations.partition_point(|operation| matches!(operation, PatchOp::Delete(..))));

    let mut applied = 0;

    for deletion in deletions {
        let source = deletion.source();
        match target.fragment_locations().iter().position(|location| *location == source) {
            Some(index) => {
                target.remove_fragment(index);
                applied += 1;
            }
            None => debug!("No fragment at {source} for `{deletion}`"),
        }
    }

    let original_locations = target.fragment_locations();
    let mut moved = vec![false; original_locations.len()];

    for operation in moves {
        let PatchOp::Move { from, to } = *operation else {
            continue;
        };

        let index = original_locations
            .iter()
            .zip(&moved)
            .position(|(location, &done)| *location == from && !done);

        match index {
            Some(index) => {
                target.relocate_fragment(index, to);
                moved[index] = true;
                applied += 1;
            }
            None => debug!("No fragment at {from} for `{operation}`"),
        }
    }

    applied
}
