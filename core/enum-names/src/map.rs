use core::fmt;
use core::marker::PhantomData;

use crate::error::BuildError;
use crate::key::EnumKey;

/// Immutable mapping between a contiguous range of integer keys and unique names.
///
/// Names are stored in a dense array indexed by `key - lowest`, so key→name is a
/// bounds check plus an index. name→key is a linear scan, which beats hashing
/// strings for enums of a few hundred entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumNameMap<K> {
    names: Vec<String>,
    // Kept wide so index arithmetic never overflows the key type.
    lowest: i128,
    _key: PhantomData<K>,
}

impl<K: EnumKey> EnumNameMap<K> {
    /// Builds the map from a static key→name table.
    ///
    /// # Panics
    /// If the keys are not contiguous, a key repeats, or two keys share a name.
    /// Tables loaded at runtime should go through [`EnumNameMap::try_new`].
    #[track_caller]
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        match Self::try_new(entries) {
            Ok(map) => map,
            Err(err) => panic!("{err}"),
        }
    }

    /// Builds the map, reporting a malformed table instead of panicking.
    pub fn try_new<I, S>(entries: I) -> Result<Self, BuildError>
    where
        I: IntoIterator<Item = (K, S)>,
        S: Into<String>,
    {
        let entries: Vec<(K, String)> = entries
            .into_iter()
            .map(|(key, name)| (key, name.into()))
            .collect();

        let Some(lowest) = entries.iter().map(|(key, _)| *key).min() else {
            return Ok(Self::empty());
        };

        let lowest = lowest.to_wide();
        let end = lowest + entries.len() as i128;
        let mut slots: Vec<Option<String>> = vec![None; entries.len()];

        for (key, name) in entries {
            let wide = key.to_wide();
            if wide >= end {
                return Err(rejected(BuildError::NonContiguous { key: wide, lowest, end }));
            }

            let slot = (wide - lowest) as usize;
            if slots[slot].is_some() {
                return Err(rejected(BuildError::DuplicateKey { key: wide }));
            }
            if slots.iter().flatten().any(|existing| *existing == name) {
                return Err(rejected(BuildError::DuplicateName { name }));
            }

            slots[slot] = Some(name);
        }

        // Every slot is filled: n distinct keys landed in n slots.
        let names: Vec<String> = slots.into_iter().flatten().collect();
        tracing::debug!(len = names.len(), lowest = %lowest, "built enum name map");

        Ok(Self {
            names,
            lowest,
            _key: PhantomData,
        })
    }

    fn empty() -> Self {
        tracing::debug!("built empty enum name map");
        Self {
            names: Vec::new(),
            lowest: 0,
            _key: PhantomData,
        }
    }

    /// The name registered for `key`, if any.
    #[inline]
    pub fn name(&self, key: K) -> Option<&str> {
        self.index(key).map(|index| self.names[index].as_str())
    }

    /// The name registered for `key`, or `fallback` if it is not registered.
    #[inline]
    pub fn name_or<'a>(&'a self, key: K, fallback: &'a str) -> &'a str {
        self.name(key).unwrap_or(fallback)
    }

    /// The key registered under `name`, if any.
    pub fn key(&self, name: &str) -> Option<K> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(|index| self.key_at(index))
    }

    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.index(key).is_some()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The smallest registered key, or `None` for an empty map.
    pub fn lowest(&self) -> Option<K> {
        (!self.is_empty()).then(|| K::from_wide(self.lowest))
    }

    /// All keys in ascending order. The returned vector is a copy.
    pub fn keys(&self) -> Vec<K> {
        (0..self.names.len()).map(|index| self.key_at(index)).collect()
    }

    /// All names in key order. The returned vector is a copy.
    pub fn names(&self) -> Vec<String> {
        self.names.clone()
    }

    /// `(key, name)` pairs in ascending key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (K, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(move |(index, name)| (self.key_at(index), name.as_str()))
    }

    fn index(&self, key: K) -> Option<usize> {
        let offset = key.to_wide() - self.lowest;
        usize::try_from(offset)
            .ok()
            .filter(|index| *index < self.names.len())
    }

    fn key_at(&self, index: usize) -> K {
        K::from_wide(self.lowest + index as i128)
    }
}

fn rejected(err: BuildError) -> BuildError {
    tracing::error!(%err, "rejected enum name table");
    err
}

impl<K: EnumKey> fmt::Display for EnumNameMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EnumNameMap[")?;
        for (position, (key, name)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:{name}")?;
        }
        f.write_str("]")
    }
}
