pub mod hints;
pub mod patches;

use hints::compute_hints;
use log::debug;
use patches::{PatchTarget, apply_patch_ops};

use crate::types::{edit_operation::EditOperation, hint::Hint};

/// Brings a layer anchored to `old_text` up to date with `new_text`.
///
/// Diffs the two texts with the default differ, computes a hint for every
/// fragment and applies the patches acting on the hinted fragment itself.
/// Patches whose source is another location (character ranges, moved-out
/// tokens whose new location differs from their old one) are left for
/// review. The hints are returned so that such fragments can be reviewed.
///
/// ```
/// use layer_reconcile::{ImpactLevel, JsonFragments, Location, reconcile_layer};
///
/// let mut layer: JsonFragments = r#"[{"location": "1.2", "text": "a comment"}]"#
///     .parse()
///     .unwrap();
///
/// let hints = reconcile_layer(&mut layer, "Hello world", "Hello big world");
///
/// assert_eq!(hints[0].impact_level, ImpactLevel::Patchable);
/// assert_eq!(layer.locations(), &["1.3".parse::<Location>().unwrap()]);
/// ```
pub fn reconcile_layer<T>(target: &mut T, old_text: &str, new_text: &str) -> Vec<Hint>
where
    T: PatchTarget + ?Sized,
{
    let operations = EditOperation::diff(old_text, new_text);
    let hints = compute_hints(&target.fragment_locations(), &operations);

    let applied = apply_own_patches(target, &hints);
    debug!(
        "Reconciled {} fragments against {} operations, {applied} patches applied",
        hints.len(),
        operations.len()
    );

    hints
}

/// Applies the patches of `hints` whose source is the hinted location.
fn apply_own_patches<T>(target: &mut T, hints: &[Hint]) -> usize
where
    T: PatchTarget + ?Sized,
{
    let patches = hints
        .iter()
        .filter_map(|hint| {
            let patch = hint.patch?;
            if patch.source() == hint.location {
                Some(patch)
            } else {
                debug!("Leaving `{patch}` proposed for {} to review", hint.location);
                None
            }
        })
        .collect();

    apply_patch_ops(target, patches)
}
