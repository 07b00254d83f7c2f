use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::types::{edit_operation::EditOperation, location::Location, patch_op::PatchOp};

/// How strongly an edit affects a fragment. Serialized as `0`, `1` or `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ImpactLevel {
    /// No edit touches the fragment.
    #[default]
    Unaffected,
    /// The fragment's anchor was edited and needs to be reviewed by hand.
    Affected,
    /// The fragment's anchor was edited and a patch can follow the edit.
    Patchable,
}

impl ImpactLevel {
    #[must_use]
    pub fn level(self) -> u8 {
        match self {
            ImpactLevel::Unaffected => 0,
            ImpactLevel::Affected => 1,
            ImpactLevel::Patchable => 2,
        }
    }
}

impl TryFrom<u8> for ImpactLevel {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(ImpactLevel::Unaffected),
            1 => Ok(ImpactLevel::Affected),
            2 => Ok(ImpactLevel::Patchable),
            other => Err(other),
        }
    }
}

impl Serialize for ImpactLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.level())
    }
}

impl<'de> Deserialize<'de> for ImpactLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = u8::deserialize(deserializer)?;
        ImpactLevel::try_from(level)
            .map_err(|level| de::Error::custom(format!("invalid impact level {level}")))
    }
}

/// The effect of a set of edit operations on one fragment. Hints are
/// advisory: they are recomputed on every reconciliation pass and never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hint {
    pub location: Location,
    pub impact_level: ImpactLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<PatchOp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched_operation: Option<EditOperation>,
}

impl Hint {
    /// A hint for a fragment no operation touches.
    #[must_use]
    pub fn unaffected(location: Location) -> Self {
        Self {
            location,
            impact_level: ImpactLevel::Unaffected,
            description: None,
            patch: None,
            matched_operation: None,
        }
    }

    pub(crate) fn matched(
        location: Location,
        operation: &EditOperation,
        description: String,
        patch: Option<PatchOp>,
    ) -> Self {
        Self {
            location,
            impact_level: if patch.is_some() {
                ImpactLevel::Patchable
            } else {
                ImpactLevel::Affected
            },
            description: Some(description),
            patch,
            matched_operation: Some(operation.clone()),
        }
    }
}
