//! Prototype records: a fixed key set with a shared default value.

use std::fmt::Debug;
use std::hash::Hash;

use recast_core::{Error, Record, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Prototype<K, V>
where
    K: Eq + Hash,
{
    prototype: Record<K, V>,
}

impl<K, V> Prototype<K, V>
where
    K: Eq + Hash + Clone + Debug,
    V: Clone,
{
    /// Declare `keys` (duplicates collapse, first-seen order kept), each defaulting to `base_value`.
    pub fn new<I>(keys: I, base_value: V) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        let prototype = keys
            .into_iter()
            .map(|key| (key, base_value.clone()))
            .collect();
        Self { prototype }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.prototype.keys()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.prototype.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.prototype.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prototype.is_empty()
    }

    /// A fresh copy of the prototype with every field at its default.
    pub fn base(&self) -> Record<K, V> {
        self.prototype.clone()
    }

    /// Overlay `record` onto the prototype, silently dropping undeclared keys.
    pub fn make(&self, record: &Record<K, V>) -> Record<K, V> {
        let mut out = self.base();
        for (key, value) in record {
            if let Some(slot) = out.get_mut(key) {
                *slot = value.clone();
            }
        }
        out
    }

    /// Overlay `record` onto the prototype; an undeclared key is an error.
    pub fn make_strict(&self, record: &Record<K, V>) -> Result<Record<K, V>> {
        let mut out = self.base();
        for (key, value) in record {
            match out.get_mut(key) {
                Some(slot) => *slot = value.clone(),
                None => {
                    return Err(Error::KeyOutOfBounds(format!(
                        "[{key:?}] for: {:?}",
                        self.prototype.keys().collect::<Vec<_>>()
                    )))
                }
            }
        }
        Ok(out)
    }
}
