//! Bidirectional mapping between small contiguous integer enums and their names.
//!
//! ```
//! use enum_names::EnumNameMap;
//!
//! let map = EnumNameMap::<u8>::new([(1, "FIRST"), (2, "SECOND"), (3, "THIRD")]);
//!
//! assert_eq!(map.name(2), Some("SECOND"));
//! assert_eq!(map.key("THIRD"), Some(3));
//! assert_eq!(map.encode_name(1).unwrap(), r#""FIRST""#);
//! assert_eq!(map.to_string(), "EnumNameMap[1:FIRST 2:SECOND 3:THIRD]");
//! ```

pub mod codec;
pub mod error;
pub mod key;
pub mod map;

// Re-export core types for convenience
pub use codec::{as_name, NamedKey};
pub use error::{BuildError, CodecError};
pub use key::EnumKey;
pub use map::EnumNameMap;
