use core::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{errors::FormatError, types::location::Location};

/// A machine-applicable fix for a fragment whose anchor was edited.
///
/// The textual forms are `del <location>` and `mov <from> <to>`. Patches
/// order all deletions before all moves, then by the location they act on,
/// which is the order they must be applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PatchOp {
    Delete(Location),
    Move { from: Location, to: Location },
}

impl PatchOp {
    /// The location of the fragment the patch acts on.
    #[must_use]
    pub fn source(&self) -> Location {
        match self {
            PatchOp::Delete(location) | PatchOp::Move { from: location, .. } => *location,
        }
    }
}

impl Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchOp::Delete(location) => write!(f, "del {location}"),
            PatchOp::Move { from, to } => write!(f, "mov {from} {to}"),
        }
    }
}

impl FromStr for PatchOp {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidPatch(text.to_owned());
        let parts: Vec<&str> = text.split_whitespace().collect();

        match parts.as_slice() {
            ["del", location] => Ok(PatchOp::Delete(
                location.parse().map_err(|_| invalid())?,
            )),
            ["mov", from, to] => Ok(PatchOp::Move {
                from: from.parse().map_err(|_| invalid())?,
                to: to.parse().map_err(|_| invalid())?,
            }),
            _ => Err(invalid()),
        }
    }
}

impl Serialize for PatchOp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PatchOp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_parse_and_display() {
        let delete: PatchOp = "del 1.2".parse().unwrap();
        assert_eq!(delete, PatchOp::Delete("1.2".parse().unwrap()));
        assert_eq!(delete.to_string(), "del 1.2");

        let relocate: PatchOp = "mov 1.2@3 2.1".parse().unwrap();
        assert_eq!(
            relocate,
            PatchOp::Move {
                from: "1.2@3".parse().unwrap(),
                to: "2.1".parse().unwrap(),
            }
        );
        assert_eq!(relocate.to_string(), "mov 1.2@3 2.1");
    }

    #[test_case("" ; "empty")]
    #[test_case("del" ; "missing location")]
    #[test_case("del 1.2 1.3" ; "too many locations")]
    #[test_case("mov 1.2" ; "missing target")]
    #[test_case("cut 1.2" ; "unknown verb")]
    #[test_case("del x.y" ; "invalid location")]
    fn test_parse_error(text: &str) {
        assert_eq!(
            text.parse::<PatchOp>(),
            Err(FormatError::InvalidPatch(text.to_owned()))
        );
    }

    #[test]
    fn test_deletions_sort_first() {
        let mut patches: Vec<PatchOp> = ["mov 1.1 1.2", "del 3.1", "mov 2.1 3.1", "del 2.1"]
            .iter()
            .map(|text| text.parse().unwrap())
            .collect();
        patches.sort();

        assert_eq!(
            patches.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec!["del 2.1", "del 3.1", "mov 1.1 1.2", "mov 2.1 3.1"]
        );
    }
}
