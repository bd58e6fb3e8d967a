//! Value matrix: register multi-valued keys, enumerate every single-valued record.

use std::hash::Hash;

use indexmap::IndexMap;
use recast_core::product::{cartesian_fold, product_size};
use recast_core::record::recombine;
use recast_core::{Pair, Record};

use crate::kvp::KeyValuePair;

/// Keys are axes in first-seen order; `enumerate` yields one record per
/// combination with the last-registered key varying fastest.
#[derive(Debug, Clone)]
pub struct Matrix<K, V> {
    pairs_by_key: IndexMap<K, KeyValuePair<K, V>>,
}

impl<K, V> Default for Matrix<K, V> {
    fn default() -> Self {
        Self {
            pairs_by_key: IndexMap::new(),
        }
    }
}

impl<K, V> Matrix<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K, value: V) -> &mut Self {
        self.kvp(key).add(value);
        self
    }

    pub fn add_each<I>(&mut self, key: K, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        // Registers the key even when `values` is empty; that empty axis then
        // annihilates the product.
        self.kvp(key).add_each(values);
        self
    }

    /// Cartesian product of every key's distinct values, flattened into records.
    ///
    /// Empty when no keys are registered or when any key has no values.
    pub fn enumerate(&self) -> Vec<Record<K, V>> {
        let axes: Vec<Vec<Pair<K, V>>> = self
            .pairs_by_key
            .values()
            .map(KeyValuePair::pairs)
            .collect();

        let combinations = cartesian_fold(
            &axes,
            |pair| vec![pair.clone()],
            |partial, pair| {
                let mut pairs = Vec::with_capacity(partial.len() + 1);
                pairs.extend_from_slice(partial);
                pairs.push(pair.clone());
                pairs
            },
        );

        combinations.iter().map(|pairs| recombine(pairs)).collect()
    }

    /// Size `enumerate` would produce, without materializing it.
    pub fn combination_count(&self) -> usize {
        product_size(self.pairs_by_key.values().map(KeyValuePair::len))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.pairs_by_key.keys()
    }

    pub fn get(&self, key: &K) -> Option<&KeyValuePair<K, V>> {
        self.pairs_by_key.get(key)
    }

    /// Number of registered keys.
    pub fn len(&self) -> usize {
        self.pairs_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs_by_key.is_empty()
    }

    fn kvp(&mut self, key: K) -> &mut KeyValuePair<K, V> {
        self.pairs_by_key
            .entry(key)
            .or_insert_with_key(|k| KeyValuePair::new(k.clone()))
    }
}

impl<'a, K, V> IntoIterator for &'a Matrix<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    type Item = Record<K, V>;
    type IntoIter = std::vec::IntoIter<Record<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerate().into_iter()
    }
}

impl<K, V> Extend<(K, V)> for Matrix<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.add(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Matrix<K, V>
where
    K: Eq + Hash + Clone,
    V: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut matrix = Matrix::new();
        matrix.extend(iter);
        matrix
    }
}
