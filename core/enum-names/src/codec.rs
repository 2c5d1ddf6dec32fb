//! Conversion between keys and their names as JSON string literals.

use crate::error::CodecError;
use crate::key::EnumKey;
use crate::map::EnumNameMap;

impl<K: EnumKey> EnumNameMap<K> {
    /// Encodes `key` as its quoted name, e.g. `"FIRST"`.
    pub fn encode_name(&self, key: K) -> Result<String, CodecError> {
        let name = self.name(key).ok_or_else(|| CodecError::Unregistered {
            key: key.to_string(),
        })?;
        Ok(serde_json::to_string(name)?)
    }

    /// Decodes a quoted name back to its key.
    pub fn decode_name(&self, text: &str) -> Result<K, CodecError> {
        let name: String = serde_json::from_str(text)?;
        self.resolve(&name)
    }

    fn resolve(&self, name: &str) -> Result<K, CodecError> {
        self.key(name).ok_or_else(|| {
            tracing::debug!(name, "unrecognized enum name");
            CodecError::UnrecognizedName {
                name: name.to_string(),
                expected: self.names(),
            }
        })
    }
}

/// A key type with a single process-wide name table.
pub trait NamedKey: EnumKey + 'static {
    fn enum_names() -> &'static EnumNameMap<Self>;
}

/// Serde adapter writing a [`NamedKey`] field as its name.
///
/// ```
/// use std::sync::LazyLock;
/// use enum_names::{enum_key, EnumNameMap, NamedKey};
///
/// enum_key!(Suit, u8, "Card suit.");
///
/// static SUITS: LazyLock<EnumNameMap<Suit>> =
///     LazyLock::new(|| EnumNameMap::new([(Suit(0), "HEARTS"), (Suit(1), "SPADES")]));
///
/// impl NamedKey for Suit {
///     fn enum_names() -> &'static EnumNameMap<Self> {
///         &SUITS
///     }
/// }
///
/// #[derive(serde::Serialize)]
/// struct Card {
///     #[serde(with = "enum_names::as_name")]
///     suit: Suit,
/// }
///
/// let json = serde_json::to_string(&Card { suit: Suit(1) }).unwrap();
/// assert_eq!(json, r#"{"suit":"SPADES"}"#);
/// ```
pub mod as_name {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::NamedKey;
    use crate::error::CodecError;

    pub fn serialize<K, S>(key: &K, serializer: S) -> Result<S::Ok, S::Error>
    where
        K: NamedKey,
        S: Serializer,
    {
        match K::enum_names().name(*key) {
            Some(name) => serializer.serialize_str(name),
            None => Err(S::Error::custom(CodecError::Unregistered {
                key: key.to_string(),
            })),
        }
    }

    pub fn deserialize<'de, K, D>(deserializer: D) -> Result<K, D::Error>
    where
        K: NamedKey,
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        K::enum_names().resolve(&name).map_err(D::Error::custom)
    }
}
