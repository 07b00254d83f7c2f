use crate::{
    layer::fragment::Fragment,
    reconciliation::{hints::compute_hints, patches::{PatchTarget, apply_patches}},
    types::{edit_operation::EditOperation, hint::Hint, location::Location},
};

/// The fragments of a text layer. No two stored fragments overlap: inserting
/// a fragment evicts every fragment it overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentStore<F> {
    fragments: Vec<F>,
}

impl<F> Default for FragmentStore<F> {
    fn default() -> Self { Self { fragments: Vec::new() } }
}

impl<F> FragmentStore<F>
where
    F: Fragment,
{
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Appends `fragment` and returns the fragments it evicted.
    pub fn insert(&mut self, fragment: F) -> Vec<F> {
        let location = fragment.location();
        let evicted = self.remove_where(|stored| stored.overlaps(&location));
        self.fragments.push(fragment);

        evicted
    }

    /// Fragments overlapping `location`.
    #[must_use]
    pub fn at(&self, location: &Location) -> Vec<&F> {
        self.fragments
            .iter()
            .filter(|fragment| fragment.location().overlaps(location))
            .collect()
    }

    /// Single-token fragments anchored to the same token as `location`'s
    /// primary coordinate, whatever their character range.
    #[must_use]
    pub fn at_integral(&self, location: &Location) -> Vec<&F> {
        self.fragments
            .iter()
            .filter(|fragment| fragment.location().is_coincident_with(location))
            .collect()
    }

    /// Removes and returns the fragments [`FragmentStore::at`] would return.
    pub fn remove_at(&mut self, location: &Location) -> Vec<F> {
        self.remove_where(|stored| stored.overlaps(location))
    }

    /// Removes and returns the fragments [`FragmentStore::at_integral`]
    /// would return.
    pub fn remove_at_integral(&mut self, location: &Location) -> Vec<F> {
        self.remove_where(|stored| stored.is_coincident_with(location))
    }

    #[must_use]
    pub fn len(&self) -> usize { self.fragments.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.fragments.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &F> { self.fragments.iter() }

    /// Locations of the fragments in insertion order.
    #[must_use]
    pub fn locations(&self) -> Vec<Location> {
        self.fragments.iter().map(Fragment::location).collect()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&F> { self.fragments.get(index) }

    /// Changing the location of the returned fragment is not checked against
    /// the other fragments.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut F> { self.fragments.get_mut(index) }

    #[must_use]
    pub fn into_inner(self) -> Vec<F> { self.fragments }

    /// One hint per fragment, in insertion order.
    #[must_use]
    pub fn hints(&self, operations: &[EditOperation]) -> Vec<Hint> {
        compute_hints(&self.locations(), operations)
    }

    /// Applies textual patches and returns how many of them took effect.
    pub fn apply_patches<S>(&mut self, patches: &[S]) -> usize
    where
        S: AsRef<str>,
    {
        apply_patches(self, patches)
    }

    fn remove_where(&mut self, predicate: impl Fn(&Location) -> bool) -> Vec<F> {
        let (removed, kept): (Vec<F>, Vec<F>) = std::mem::take(&mut self.fragments)
            .into_iter()
            .partition(|fragment| predicate(&fragment.location()));
        self.fragments = kept;

        removed
    }
}

impl<F> FromIterator<F> for FragmentStore<F>
where
    F: Fragment,
{
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        let mut store = Self::new();
        for fragment in iter {
            store.insert(fragment);
        }

        store
    }
}

impl<'a, F> IntoIterator for &'a FragmentStore<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter { self.fragments.iter() }
}

impl<F> PatchTarget for FragmentStore<F>
where
    F: Fragment,
{
    fn fragment_locations(&self) -> Vec<Location> { self.locations() }

    fn remove_fragment(&mut self, index: usize) {
        if index < self.fragments.len() {
            self.fragments.remove(index);
        }
    }

    fn relocate_fragment(&mut self, index: usize, location: Location) {
        if let Some(fragment) = self.fragments.get_mut(index) {
            fragment.set_location(location);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Comment {
        location: Location,
        text: &'static str,
    }

    impl Fragment for Comment {
        fn location(&self) -> Location { self.location }

        fn set_location(&mut self, location: Location) { self.location = location; }
    }

    fn comment(location: &str, text: &'static str) -> Comment {
        Comment {
            location: location.parse().unwrap(),
            text,
        }
    }

    fn texts(fragments: &[&Comment]) -> Vec<&'static str> {
        fragments.iter().map(|fragment| fragment.text).collect()
    }

    #[test]
    fn test_insert_evicts_overlapping_fragments() {
        let mut store: FragmentStore<Comment> =
            [comment("1.1", "a"), comment("1.3", "b"), comment("2.1", "c")]
                .into_iter()
                .collect();

        let evicted = store.insert(comment("1.1-1.3", "range"));

        assert_eq!(evicted, vec![comment("1.1", "a"), comment("1.3", "b")]);
        assert_eq!(
            store.locations(),
            vec!["2.1".parse().unwrap(), "1.1-1.3".parse().unwrap()]
        );
    }

    #[test]
    fn test_no_two_fragments_overlap() {
        let store: FragmentStore<Comment> = [
            "1.1", "1.1@2", "1.2-1.4", "1.3", "2.1-3.1", "2.5", "1.5", "3.1@1x2",
        ]
        .into_iter()
        .map(|location| comment(location, ""))
        .collect();

        let locations = store.locations();
        for (i, a) in locations.iter().enumerate() {
            for b in &locations[i + 1..] {
                assert!(!a.overlaps(b), "{a} overlaps {b}");
            }
        }
    }

    #[test]
    fn test_lookups() {
        let store: FragmentStore<Comment> = [
            comment("1.1@2x2", "sub"),
            comment("1.2-1.3", "range"),
            comment("2.1", "point"),
        ]
        .into_iter()
        .collect();

        assert_eq!(texts(&store.at(&"1.1".parse().unwrap())), vec!["sub"]);
        assert_eq!(texts(&store.at(&"1.3-2.1".parse().unwrap())), vec!["range", "point"]);
        assert_eq!(texts(&store.at_integral(&"1.1@4".parse().unwrap())), vec!["sub"]);
        assert!(store.at_integral(&"1.2".parse().unwrap()).is_empty());
        assert!(store.at(&Location::EMPTY).is_empty());
    }

    #[test]
    fn test_removals() {
        let mut store: FragmentStore<Comment> = [
            comment("1.1@2x2", "sub"),
            comment("1.2-1.3", "range"),
            comment("2.1", "point"),
        ]
        .into_iter()
        .collect();

        assert!(store.remove_at_integral(&"1.2".parse().unwrap()).is_empty());
        assert_eq!(
            store.remove_at_integral(&"1.1".parse().unwrap()),
            vec![comment("1.1@2x2", "sub")]
        );
        assert_eq!(
            store.remove_at(&"1.3".parse().unwrap()),
            vec![comment("1.2-1.3", "range")]
        );
        assert_eq!(store.into_inner(), vec![comment("2.1", "point")]);
    }
}
