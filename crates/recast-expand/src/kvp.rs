//! A key plus the deduplicated, insertion-ordered set of values seen for it.

use std::hash::Hash;

use indexmap::IndexSet;
use recast_core::Pair;

#[derive(Debug, Clone)]
pub struct KeyValuePair<K, V> {
    key: K,
    values: IndexSet<V>,
}

impl<K, V> KeyValuePair<K, V>
where
    K: Clone,
    V: Eq + Hash + Clone,
{
    pub fn new(key: K) -> Self {
        Self {
            key,
            values: IndexSet::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    /// Insert `value` unless already present. Duplicates are no-ops.
    pub fn add(&mut self, value: V) -> &mut Self {
        self.values.insert(value);
        self
    }

    pub fn add_each<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        for value in values {
            self.add(value);
        }
        self
    }

    /// One pair per distinct value, in first-insertion order.
    pub fn pairs(&self) -> Vec<Pair<K, V>> {
        self.values
            .iter()
            .map(|v| Pair::new(self.key.clone(), v.clone()))
            .collect()
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_adds_are_ignored() {
        let mut kvp = KeyValuePair::new("a");
        kvp.add(1).add(2).add(1).add_each([2, 3, 3]);
        assert_eq!(kvp.len(), 3);
        assert_eq!(kvp.values().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn pairs_follow_insertion_order() {
        let mut kvp = KeyValuePair::new("k");
        kvp.add_each(["z", "a", "m"]);
        let pairs = kvp.pairs();
        assert_eq!(
            pairs,
            vec![Pair::new("k", "z"), Pair::new("k", "a"), Pair::new("k", "m")]
        );
        // restartable
        assert_eq!(kvp.pairs(), pairs);
    }

    #[test]
    fn empty_pair_has_no_pairs() {
        let kvp: KeyValuePair<&str, i32> = KeyValuePair::new("k");
        assert!(kvp.is_empty());
        assert!(kvp.pairs().is_empty());
    }
}
