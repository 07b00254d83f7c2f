//! Keeps annotation layers anchored to a base text valid while the text is
//! being edited.
//!
//! Fragments of a layer (comments, apparatus entries, chronology tags, ...)
//! are anchored to [`Location`]s: a token, a few characters of a token, or a
//! range of tokens, addressed by block (line) and token (word) ordinals.
//! When the base text changes, the two revisions are diffed into token-level
//! [`EditOperation`]s, which are turned into a [`Hint`] per fragment. Hints
//! carry a [`PatchOp`] when the fragment can follow the edit automatically.
//!
//! ```
//! use layer_reconcile::{EditOperation, ImpactLevel, Location, compute_hints};
//!
//! let operations = EditOperation::diff("Hello world", "Hello big world");
//! let hints = compute_hints(&["1.2".parse::<Location>().unwrap()], &operations);
//!
//! assert_eq!(hints[0].impact_level, ImpactLevel::Patchable);
//! assert_eq!(hints[0].patch.unwrap().to_string(), "mov 1.2 1.3");
//! ```

mod diff_adapter;
mod diffs;
mod errors;
mod layer;
mod reconciliation;
mod tokenizer;
mod types;
mod utils;

pub use diff_adapter::DiffAdapter;
pub use diffs::{
    char_diff::{CharDiff, MyersCharDiff},
    raw_operation::RawOperation,
};
pub use errors::{FormatError, LayerError};
pub use layer::{
    fragment::Fragment, fragment_store::FragmentStore, json_fragments::JsonFragments,
    mirrored::Mirrored, registry::FragmentRegistry,
};
pub use reconciliation::{
    hints::compute_hints,
    patches::{PatchTarget, apply_patches},
    reconcile_layer,
};
pub use tokenizer::{BLOCK_SEPARATOR, TOKEN_SEPARATOR, base_text::BaseText};
pub use types::{
    coordinate::Coordinate,
    edit_operation::{EditOperation, EditOperator},
    hint::{Hint, ImpactLevel},
    location::Location,
    patch_op::PatchOp,
};

#[cfg(feature = "wasm")]
pub mod wasm;
