//! Expose the layer reconciliation engine to WebAssembly. Structured values
//! cross the boundary as JSON strings.
use wasm_bindgen::prelude::*;

use crate::{
    BaseText, EditOperation, JsonFragments, Location, apply_patches, compute_hints,
};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// Token-level edit operations turning `old_text` into `new_text`, as a JSON
/// array.
#[wasm_bindgen(js_name = diffOperations)]
pub fn diff_operations(old_text: &str, new_text: &str) -> Result<String, JsError> {
    set_panic_hook();

    Ok(serde_json::to_string(&EditOperation::diff(
        old_text, new_text,
    ))?)
}

/// Hints for fragments anchored at `locations` (location strings) when the
/// base text changes from `old_text` to `new_text`, as a JSON array.
#[wasm_bindgen(js_name = layerHints)]
pub fn layer_hints(
    old_text: &str,
    new_text: &str,
    locations: Vec<String>,
) -> Result<String, JsError> {
    set_panic_hook();

    let locations = locations
        .iter()
        .map(|location| location.parse())
        .collect::<Result<Vec<Location>, _>>()?;
    let operations = EditOperation::diff(old_text, new_text);

    Ok(serde_json::to_string(&compute_hints(&locations, &operations))?)
}

/// Applies textual patches to a layer given as a JSON array of fragment
/// records and returns the patched layer.
#[wasm_bindgen(js_name = applyLayerPatches)]
pub fn apply_layer_patches(fragments: &str, patches: Vec<String>) -> Result<String, JsError> {
    set_panic_hook();

    let mut layer: JsonFragments = fragments.parse()?;
    apply_patches(&mut layer, &patches);

    Ok(serde_json::to_string(&layer.into_value())?)
}

/// The part of `text` covered by `location`, if any.
#[wasm_bindgen(js_name = textAt)]
pub fn text_at(text: &str, location: &str) -> Result<Option<String>, JsError> {
    set_panic_hook();

    Ok(BaseText::new(text).text_at(&location.parse()?))
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
