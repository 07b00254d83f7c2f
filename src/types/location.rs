use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{errors::FormatError, types::coordinate::Coordinate};

/// Where a fragment is anchored in the base text: either a single token
/// (`primary` only) or the inclusive range from `primary` to `secondary`.
///
/// Ranges are expected to have `primary <= secondary`; this is not checked
/// on construction.
///
/// Locations sort by their primary coordinate; on a tie a point sorts before
/// a range, and two ranges are then ordered by their secondary coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Location {
    primary: Coordinate,
    secondary: Option<Coordinate>,
}

impl Location {
    /// The "no location yet" sentinel, which never overlaps anything.
    pub const EMPTY: Location = Location {
        primary: Coordinate::EMPTY,
        secondary: None,
    };

    #[must_use]
    pub fn point(primary: Coordinate) -> Self {
        Self {
            primary,
            secondary: None,
        }
    }

    #[must_use]
    pub fn range(primary: Coordinate, secondary: Coordinate) -> Self {
        Self {
            primary,
            secondary: Some(secondary),
        }
    }

    #[must_use]
    pub fn primary(&self) -> Coordinate { self.primary }

    #[must_use]
    pub fn secondary(&self) -> Option<Coordinate> { self.secondary }

    #[must_use]
    pub fn is_range(&self) -> bool { self.secondary.is_some() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.primary.is_empty() }

    /// Whether both locations point at the same token (ignoring character
    /// ranges) and neither is a range. This is what makes a fragment safe to
    /// patch automatically when that token is edited.
    #[must_use]
    pub fn is_coincident_with(&self, other: &Self) -> bool {
        !self.is_range() && self.primary.integral_cmp(&other.primary) == Ordering::Equal
    }

    /// Tests whether two locations overlap.
    ///
    /// Two points overlap when they address the same token, regardless of
    /// their character ranges. When a range is involved the full coordinate
    /// order is used, so a range ending at `1.3` doesn't reach `1.3@2`.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        match (self.secondary, other.secondary) {
            (None, None) => self.primary.integral_cmp(&other.primary) == Ordering::Equal,
            (Some(secondary), None) => self.primary <= other.primary && secondary >= other.primary,
            (None, Some(other_secondary)) => {
                other.primary <= self.primary && other_secondary >= self.primary
            }
            (Some(secondary), Some(other_secondary)) => {
                other_secondary >= self.primary && other.primary <= secondary
            }
        }
    }

    /// Whether `coordinate` falls within the location, using the same rules
    /// as [`Location::overlaps`] with a point.
    #[must_use]
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.overlaps(&Location::point(coordinate))
    }

    /// Returns the location moved by `dy` blocks and `dx` tokens. The empty
    /// sentinel is returned unchanged.
    #[must_use]
    pub fn shift(&self, dy: i32, dx: i32) -> Self {
        if self.is_empty() {
            return *self;
        }

        Self {
            primary: self.primary.shift(dy, dx),
            secondary: self.secondary.map(|secondary| secondary.shift(dy, dx)),
        }
    }
}

impl From<Coordinate> for Location {
    fn from(primary: Coordinate) -> Self { Location::point(primary) }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.secondary {
            Some(secondary) => write!(f, "{}-{secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}

impl FromStr for Location {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = |_| FormatError::InvalidLocation(text.to_owned());

        match text.split_once('-') {
            Some((primary, secondary)) => Ok(Location::range(
                primary.parse().map_err(invalid)?,
                secondary.parse().map_err(invalid)?,
            )),
            None => Ok(Location::point(text.parse().map_err(invalid)?)),
        }
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
