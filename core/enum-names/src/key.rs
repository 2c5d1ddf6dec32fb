use core::fmt::{Debug, Display};

/// An integer type usable as the key of an [`EnumNameMap`](crate::EnumNameMap).
///
/// Index arithmetic is done in `i128`, which holds every value of every
/// implementing type, so `key - lowest` can never overflow.
pub trait EnumKey: Copy + Ord + Debug + Display {
    /// Widens the key for offset arithmetic.
    fn to_wide(self) -> i128;

    /// Narrows a value previously produced by `to_wide` (plus an in-range offset).
    fn from_wide(wide: i128) -> Self;
}

macro_rules! impl_enum_key {
    ($($int:ty),* $(,)?) => {
        $(
            impl EnumKey for $int {
                #[inline]
                fn to_wide(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn from_wide(wide: i128) -> Self {
                    wide as $int
                }
            }
        )*
    };
}

impl_enum_key!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Defines a `#[repr(transparent)]` newtype over a primitive integer that can
/// key an [`EnumNameMap`](crate::EnumNameMap).
///
/// ```
/// enum_names::enum_key!(Color, u8, "Palette entry stored as a single byte.");
///
/// let map = enum_names::EnumNameMap::new([(Color(0), "RED"), (Color(1), "GREEN")]);
/// assert_eq!(map.name(Color(1)), Some("GREEN"));
/// ```
#[macro_export]
macro_rules! enum_key {
    ($name:ident, $repr:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(transparent)] // Same layout as the primitive
        pub struct $name(pub $repr);

        impl $name {
            pub const fn new(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$repr> for $name {
            fn from(value: $repr) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $repr {
            fn from(key: $name) -> $repr {
                key.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl $crate::EnumKey for $name {
            #[inline]
            fn to_wide(self) -> i128 {
                $crate::EnumKey::to_wide(self.0)
            }

            #[inline]
            fn from_wide(wide: i128) -> Self {
                Self(<$repr as $crate::EnumKey>::from_wide(wide))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::enum_key!(Level, i8, "Test key with a signed representation.");

    #[test]
    fn test_wide_conversion_extremes() {
        assert_eq!(u64::MAX.to_wide(), u64::MAX as i128);
        assert_eq!(i64::MIN.to_wide(), i64::MIN as i128);
        assert_eq!(u8::from_wide(255), 255u8);
        assert_eq!(i8::from_wide(-128), -128i8);
    }

    #[test]
    fn test_newtype_key() {
        let level = Level::new(-3);
        assert_eq!(level.to_wide(), -3);
        assert_eq!(Level::from_wide(4), Level(4));
        assert_eq!(i8::from(Level(7)), 7);
        assert_eq!(level.to_string(), "-3");

        // Zero-cost: same size as the primitive
        assert_eq!(core::mem::size_of::<Level>(), 1);
    }
}
