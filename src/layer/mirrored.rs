use crate::{
    errors::LayerError,
    layer::{fragment::Fragment, fragment_store::FragmentStore, json_fragments::JsonFragments},
    reconciliation::patches::PatchTarget,
    types::location::Location,
};

/// A typed layer and its serialized mirror, patched in lockstep.
///
/// Both sides must list the same locations in the same order, which is
/// checked on construction.
#[derive(Debug)]
pub struct Mirrored<'a, F> {
    typed: &'a mut FragmentStore<F>,
    generic: &'a mut JsonFragments,
}

impl<'a, F> Mirrored<'a, F>
where
    F: Fragment,
{
    pub fn new(
        typed: &'a mut FragmentStore<F>,
        generic: &'a mut JsonFragments,
    ) -> Result<Self, LayerError> {
        let typed_locations = typed.locations();
        let generic_locations = generic.locations();

        for index in 0..typed_locations.len().max(generic_locations.len()) {
            let (typed_location, generic_location) =
                (typed_locations.get(index), generic_locations.get(index));

            if typed_location != generic_location {
                return Err(LayerError::MirrorMismatch {
                    index,
                    typed: describe(typed_location),
                    generic: describe(generic_location),
                });
            }
        }

        Ok(Self { typed, generic })
    }
}

impl<F> PatchTarget for Mirrored<'_, F>
where
    F: Fragment,
{
    fn fragment_locations(&self) -> Vec<Location> { self.typed.locations() }

    fn remove_fragment(&mut self, index: usize) {
        self.typed.remove_fragment(index);
        self.generic.remove_fragment(index);
    }

    fn relocate_fragment(&mut self, index: usize, location: Location) {
        self.typed.relocate_fragment(index, location);
        self.generic.relocate_fragment(index, location);
    }
}

fn describe(location: Option<&Location>) -> String {
    location.map_or_else(|| "nothing".to_owned(), ToString::to_string)
}
