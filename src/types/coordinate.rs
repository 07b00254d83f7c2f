use core::{
    cmp::Ordering,
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::errors::FormatError;

/// A single position in tokenized text: the `token`-th token of the
/// `block`-th block, optionally narrowed to `char_run` characters starting at
/// the 1-based `char_at` character of that token.
///
/// `block == 0` is the empty sentinel, `char_at == 0` addresses the whole
/// token. The constructors keep the representation canonical: a whole-token
/// coordinate never carries a run, and a sub-token coordinate always has a
/// run of at least 1. This is what makes the text form round-trip.
///
/// Ordering is lexicographic over `(block, token, char_at, char_run)`; see
/// [`Coordinate::integral_cmp`] for the token-level ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    block: u32,
    token: u32,
    char_at: u16,
    char_run: u16,
}

impl Coordinate {
    /// The "no location yet" coordinate.
    pub const EMPTY: Coordinate = Coordinate {
        block: 0,
        token: 0,
        char_at: 0,
        char_run: 0,
    };

    /// Creates a coordinate addressing a whole token.
    #[must_use]
    pub fn new(block: u32, token: u32) -> Self {
        Self {
            block,
            token,
            char_at: 0,
            char_run: 0,
        }
    }

    /// Creates a coordinate addressing a portion of a token. A zero `char_at`
    /// addresses the whole token and drops the run, a zero run on a sub-token
    /// coordinate is read as 1.
    #[must_use]
    pub fn with_chars(block: u32, token: u32, char_at: u16, char_run: u16) -> Self {
        Self {
            block,
            token,
            char_at,
            char_run: if char_at == 0 { 0 } else { char_run.max(1) },
        }
    }

    #[must_use]
    pub fn block(&self) -> u32 { self.block }

    #[must_use]
    pub fn token(&self) -> u32 { self.token }

    #[must_use]
    pub fn char_at(&self) -> u16 { self.char_at }

    #[must_use]
    pub fn char_run(&self) -> u16 { self.char_run }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.block == 0 }

    /// Whether the coordinate addresses only part of its token.
    #[must_use]
    pub fn is_sub_token(&self) -> bool { self.char_at > 0 }

    /// Compares only the `(block, token)` part, so that two coordinates
    /// pointing into the same token compare equal regardless of their
    /// character ranges.
    #[must_use]
    pub fn integral_cmp(&self, other: &Self) -> Ordering {
        (self.block, self.token).cmp(&(other.block, other.token))
    }

    /// Returns the coordinate moved by `dy` blocks and `dx` tokens. The
    /// character range is kept as-is and the result saturates at 0.
    #[must_use]
    pub fn shift(&self, dy: i32, dx: i32) -> Self {
        Self {
            block: self.block.saturating_add_signed(dy),
            token: self.token.saturating_add_signed(dx),
            ..*self
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.block, self.token)?;

        if self.char_at > 0 {
            write!(f, "@{}", self.char_at)?;
            if self.char_run > 1 {
                write!(f, "x{}", self.char_run)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Coordinate {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::InvalidCoordinate(text.to_owned());

        let (block, rest) = text.split_once('.').ok_or_else(invalid)?;
        let (token, chars) = match rest.split_once('@') {
            Some((token, chars)) => (token, Some(chars)),
            None => (rest, None),
        };

        let block = parse_number::<u32>(block).ok_or_else(invalid)?;
        let token = parse_number::<u32>(token).ok_or_else(invalid)?;

        let Some(chars) = chars else {
            return Ok(Self::new(block, token));
        };

        let (char_at, char_run) = match chars.split_once('x') {
            Some((at, run)) => (
                parse_number::<u16>(at).ok_or_else(invalid)?,
                parse_number::<u16>(run).ok_or_else(invalid)?,
            ),
            None => (parse_number::<u16>(chars).ok_or_else(invalid)?, 1),
        };

        Ok(Self::with_chars(block, token, char_at, char_run))
    }
}

/// Parses a plain run of ASCII digits, rejecting signs and whitespace that
/// `str::parse` would let through.
fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    text.parse().ok()
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
