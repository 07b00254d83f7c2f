use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    errors::LayerError,
    layer::{fragment::Fragment, fragment_store::FragmentStore, json_fragments::JsonFragments},
};

type Decoder = fn(Value) -> Result<Box<dyn Fragment>, serde_json::Error>;

/// Maps fragment type ids (such as `"fr.comment"`) to the types their
/// serialized records decode into. Filled once while configuring the
/// application, then used to turn generic layers into typed ones.
///
/// ```
/// use layer_reconcile::{Fragment, FragmentRegistry, JsonFragments, Location};
/// use serde::Deserialize;
///
/// #[derive(Debug, Deserialize)]
/// struct Comment {
///     location: Location,
///     text: String,
/// }
///
/// impl Fragment for Comment {
///     fn location(&self) -> Location { self.location }
///
///     fn set_location(&mut self, location: Location) { self.location = location; }
/// }
///
/// let mut registry = FragmentRegistry::new();
/// registry.register::<Comment>("fr.comment");
///
/// let layer: JsonFragments = r#"[{"location": "1.2", "text": "nice"}]"#.parse().unwrap();
/// let store = registry.decode_layer("fr.comment", &layer).unwrap();
/// assert_eq!(store.locations(), layer.locations());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FragmentRegistry {
    decoders: HashMap<String, Decoder>,
}

impl FragmentRegistry {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Registers `T` under `type_id`, replacing any previous registration.
    pub fn register<T>(&mut self, type_id: impl Into<String>) -> &mut Self
    where
        T: Fragment + DeserializeOwned + 'static,
    {
        self.decoders.insert(type_id.into(), decode_as::<T>);
        self
    }

    #[must_use]
    pub fn is_registered(&self, type_id: &str) -> bool { self.decoders.contains_key(type_id) }

    pub fn decode(&self, type_id: &str, record: Value) -> Result<Box<dyn Fragment>, LayerError> {
        self.decode_record(type_id, 0, record)
    }

    /// Decodes every record of `layer` as the type registered under
    /// `type_id`.
    pub fn decode_layer(
        &self,
        type_id: &str,
        layer: &JsonFragments,
    ) -> Result<FragmentStore<Box<dyn Fragment>>, LayerError> {
        layer
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| self.decode_record(type_id, index, record.clone()))
            .collect()
    }

    fn decode_record(
        &self,
        type_id: &str,
        index: usize,
        record: Value,
    ) -> Result<Box<dyn Fragment>, LayerError> {
        let decoder = self
            .decoders
            .get(type_id)
            .ok_or_else(|| LayerError::UnknownFragmentType(type_id.to_owned()))?;

        decoder(record).map_err(|source| LayerError::Decoding {
            index,
            type_id: type_id.to_owned(),
            source,
        })
    }
}

fn decode_as<T>(record: Value) -> Result<Box<dyn Fragment>, serde_json::Error>
where
    T: Fragment + DeserializeOwned + 'static,
{
    Ok(Box::new(serde_json::from_value::<T>(record)?))
}
