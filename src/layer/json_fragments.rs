use core::str::FromStr;

use serde_json::Value;

use crate::{
    errors::LayerError,
    reconciliation::patches::PatchTarget,
    types::location::Location,
};

const LOCATION_KEY: &str = "location";

/// A layer kept in its serialized form: a JSON array of fragment records,
/// each an object with a `location` string and any other fields, which are
/// preserved untouched.
///
/// Offers the same lookups as [`FragmentStore`](crate::FragmentStore) for
/// layers whose fragment type isn't known.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonFragments {
    records: Vec<Value>,
    locations: Vec<Location>,
}

impl JsonFragments {
    /// Validates that `value` is an array of records with parseable
    /// locations.
    pub fn from_value(value: Value) -> Result<Self, LayerError> {
        let Value::Array(records) = value else {
            return Err(LayerError::NotAnArray);
        };

        let locations = records
            .iter()
            .enumerate()
            .map(|(index, record)| location_of(index, record))
            .collect::<Result<_, _>>()?;

        Ok(Self { records, locations })
    }

    #[must_use]
    pub fn into_value(self) -> Value { Value::Array(self.records) }

    #[must_use]
    pub fn records(&self) -> &[Value] { &self.records }

    #[must_use]
    pub fn locations(&self) -> &[Location] { &self.locations }

    #[must_use]
    pub fn len(&self) -> usize { self.records.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Appends `record`, evicting the records it overlaps, which are
    /// returned.
    pub fn insert(&mut self, record: Value) -> Result<Vec<Value>, LayerError> {
        let location = location_of(self.records.len(), &record)?;
        let evicted = self.remove_where(|stored| stored.overlaps(&location));

        self.records.push(record);
        self.locations.push(location);

        Ok(evicted)
    }

    /// Records overlapping `location`.
    #[must_use]
    pub fn at(&self, location: &Location) -> Vec<&Value> {
        self.matching(|stored| stored.overlaps(location))
    }

    /// Single-token records anchored to the same token as `location`'s
    /// primary coordinate.
    #[must_use]
    pub fn at_integral(&self, location: &Location) -> Vec<&Value> {
        self.matching(|stored| stored.is_coincident_with(location))
    }

    pub fn remove_at_integral(&mut self, location: &Location) -> Vec<Value> {
        self.remove_where(|stored| stored.is_coincident_with(location))
    }

    fn matching(&self, predicate: impl Fn(&Location) -> bool) -> Vec<&Value> {
        self.records
            .iter()
            .zip(&self.locations)
            .filter(|(_, location)| predicate(location))
            .map(|(record, _)| record)
            .collect()
    }

    fn remove_where(&mut self, predicate: impl Fn(&Location) -> bool) -> Vec<Value> {
        let mut removed = Vec::new();
        let mut index = 0;

        while index < self.records.len() {
            if predicate(&self.locations[index]) {
                self.locations.remove(index);
                removed.push(self.records.remove(index));
            } else {
                index += 1;
            }
        }

        removed
    }
}

impl FromStr for JsonFragments {
    type Err = LayerError;

    fn from_str(json: &str) -> Result<Self, Self::Err> { Self::from_value(serde_json::from_str(json)?) }
}

impl PatchTarget for JsonFragments {
    fn fragment_locations(&self) -> Vec<Location> { self.locations.clone() }

    fn remove_fragment(&mut self, index: usize) {
        if index < self.records.len() {
            self.records.remove(index);
            self.locations.remove(index);
        }
    }

    fn relocate_fragment(&mut self, index: usize, location: Location) {
        let Some(Value::Object(record)) = self.records.get_mut(index) else {
            return;
        };

        record.insert(LOCATION_KEY.to_owned(), Value::String(location.to_string()));
        self.locations[index] = location;
    }
}

fn location_of(index: usize, record: &Value) -> Result<Location, LayerError> {
    record
        .get(LOCATION_KEY)
        .and_then(Value::as_str)
        .ok_or(LayerError::MissingLocation { index })?
        .parse()
        .map_err(|source| LayerError::InvalidLocation { index, source })
}
