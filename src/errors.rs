use thiserror::Error;

/// Error type for text that doesn't follow the coordinate, location or patch
/// grammar. Always carries the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid coordinate `{0}`, expected `block.token[@offset[xrun]]`")]
    InvalidCoordinate(String),

    #[error("Invalid location `{0}`, expected `coordinate[-coordinate]`")]
    InvalidLocation(String),

    #[error("Invalid patch `{0}`, expected `del <location>` or `mov <location> <location>`")]
    InvalidPatch(String),
}

/// Error type for layers handled through their serialized form.
#[derive(Error, Debug)]
pub enum LayerError {
    #[error("Failed to parse the layer document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("The layer document must be a JSON array of fragments")]
    NotAnArray,

    #[error("Fragment #{index} has no `location` string")]
    MissingLocation { index: usize },

    #[error("Fragment #{index} has an invalid location: {source}")]
    InvalidLocation {
        index: usize,
        #[source]
        source: FormatError,
    },

    #[error("No fragment type is registered as `{0}`")]
    UnknownFragmentType(String),

    #[error("Failed to decode fragment #{index} as `{type_id}`: {source}")]
    Decoding {
        index: usize,
        type_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "The typed fragments and the layer document are out of sync at fragment #{index} \
         ({typed} vs {generic})"
    )]
    MirrorMismatch {
        index: usize,
        typed: String,
        generic: String,
    },
}
