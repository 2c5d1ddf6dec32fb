use thiserror::Error;

/// A malformed key→name table.
///
/// These can only come from a misauthored table; [`EnumNameMap::new`](crate::EnumNameMap::new)
/// panics with them, [`EnumNameMap::try_new`](crate::EnumNameMap::try_new) returns them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("non-contiguous enum values given to EnumNameMap: {key} is outside {lowest}..{end}")]
    NonContiguous { key: i128, lowest: i128, end: i128 },

    #[error("duplicate enum value '{key}' given to EnumNameMap")]
    DuplicateKey { key: i128 },

    #[error("duplicate enum name '{name}' given to EnumNameMap")]
    DuplicateName { name: String },
}

/// Failure to convert between a key and its quoted name text.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("enum value '{key}' not registered in enum name map")]
    Unregistered { key: String },

    #[error("enum name is not a valid string literal: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value '{name}', expected one of: '{}'", .expected.join("', '"))]
    UnrecognizedName { name: String, expected: Vec<String> },
}
